//! Test utilities for catalogue consumers
//!
//! Provides an in-memory [`FakeCatalogue`] and builders for entries and details.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use imctl_core::prelude::*;
use imctl_core::{CatalogueEntry, OptionalParameter, RequiredParameter, StackDetail, StackId};

use crate::catalogue::StackCatalogue;

/// Creates a catalogue entry.
pub fn test_entry(id: StackId, name: &str) -> CatalogueEntry {
    CatalogueEntry::new(id, name)
}

/// Creates a stack detail with one required and one optional parameter.
///
/// Parameter ids are derived from the stack id so details stay distinct.
pub fn test_detail(id: StackId, name: &str) -> StackDetail {
    StackDetail {
        id,
        name: name.to_string(),
        optional_parameters: vec![OptionalParameter {
            id: id * 100 + 1,
            name: "IMAGE_TAG".to_string(),
            default_value: "latest".to_string(),
        }],
        required_parameters: vec![RequiredParameter {
            id: id * 100 + 2,
            name: "DATABASE_ID".to_string(),
        }],
    }
}

/// A recorded call against [`FakeCatalogue`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeCall {
    Login,
    ListStacks,
    StackDetail(StackId),
}

/// Shared handle to a [`FakeCatalogue`]'s call log.
///
/// Stays readable after the catalogue itself has been moved away.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<FakeCall>>>);

impl CallLog {
    /// Calls made so far, in order
    pub fn calls(&self) -> Vec<FakeCall> {
        self.0
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn push(&self, call: FakeCall) {
        if let Ok(mut calls) = self.0.lock() {
            calls.push(call);
        }
    }
}

/// In-memory catalogue with injectable failures.
///
/// Does not require `login` before reads.
#[derive(Debug, Default)]
pub struct FakeCatalogue {
    entries: Vec<CatalogueEntry>,
    details: HashMap<StackId, StackDetail>,
    list_error: Option<String>,
    login_error: Option<String>,
    failing_ids: HashSet<StackId>,
    calls: CallLog,
}

impl FakeCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(mut self, entries: Vec<CatalogueEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_details(mut self, details: Vec<StackDetail>) -> Self {
        for detail in details {
            self.details.insert(detail.id, detail);
        }
        self
    }

    /// Make `list_stacks` fail with a transport error
    pub fn failing_list(mut self, message: &str) -> Self {
        self.list_error = Some(message.to_string());
        self
    }

    /// Make `login` fail with an auth error
    pub fn failing_login(mut self, message: &str) -> Self {
        self.login_error = Some(message.to_string());
        self
    }

    /// Make `stack_detail(id)` answer 500
    pub fn failing_detail(mut self, id: StackId) -> Self {
        self.failing_ids.insert(id);
        self
    }

    /// Calls made so far, in order
    pub fn calls(&self) -> Vec<FakeCall> {
        self.calls.calls()
    }

    /// Handle on the call log that outlives moving the catalogue
    pub fn call_log(&self) -> CallLog {
        self.calls.clone()
    }

    fn record(&self, call: FakeCall) {
        self.calls.push(call);
    }
}

impl StackCatalogue for FakeCatalogue {
    async fn login(&mut self) -> Result<()> {
        self.record(FakeCall::Login);
        match &self.login_error {
            Some(message) => Err(Error::auth(message.clone())),
            None => Ok(()),
        }
    }

    async fn list_stacks(&self) -> Result<Vec<CatalogueEntry>> {
        self.record(FakeCall::ListStacks);
        match &self.list_error {
            Some(message) => Err(Error::transport("fetching stacks", message.clone())),
            None => Ok(self.entries.clone()),
        }
    }

    async fn stack_detail(&self, id: StackId) -> Result<StackDetail> {
        self.record(FakeCall::StackDetail(id));
        let operation = format!("fetching stack {}", id);
        if self.failing_ids.contains(&id) {
            return Err(Error::unexpected_status(
                operation,
                200,
                "500 Internal Server Error",
            ));
        }
        self.details
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::unexpected_status(operation, 200, "404 Not Found"))
    }
}
