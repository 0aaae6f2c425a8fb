//! Catalogue synchronization state
//!
//! Reconciles three independent inputs into one consistent view:
//! the background-fetched catalogue, the background-fetched stack details,
//! and the user's selection. Transitions are plain methods; the handler layer
//! decides which fetch tasks follow from them.
//!
//! Invariants:
//! - an empty catalogue has no selection
//! - a selection always indexes into the current catalogue
//! - the detail cache only grows, and only from complete batches

use std::collections::HashMap;

use chrono::{DateTime, Local};
use imctl_core::prelude::*;
use imctl_core::{CatalogueEntry, StackDetail, StackId};

use crate::snapshot::{DisplayRow, ViewSnapshot};

/// Catalogue sub-state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CataloguePhase {
    #[default]
    Empty,
    Loading,
    Loaded,
}

/// How much of the current catalogue the detail cache covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailCoverage {
    #[default]
    Empty,
    /// A details batch is in flight
    Loading,
    PartiallyLoaded,
    FullyLoaded,
}

/// A cached detail together with its rendered text
#[derive(Debug, Clone)]
struct CachedDetail {
    detail: StackDetail,
    text: String,
}

/// Catalogue, detail cache and selection
#[derive(Debug, Default)]
pub struct CatalogueState {
    phase: CataloguePhase,
    entries: Vec<CatalogueEntry>,

    cache: HashMap<StackId, CachedDetail>,
    coverage: DetailCoverage,
    /// Coverage to fall back to if the in-flight batch fails
    coverage_before_batch: DetailCoverage,

    selected: Option<usize>,
    detail_text: Option<String>,
    /// Bumped whenever `detail_text` is replaced
    detail_revision: u64,

    catalogue_error: Option<String>,
    detail_error: Option<String>,

    loaded_at: Option<DateTime<Local>>,
}

impl CatalogueState {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────

    /// A list fetch was launched
    pub fn begin_list_fetch(&mut self) {
        self.phase = CataloguePhase::Loading;
        self.catalogue_error = None;
        self.detail_error = None;
    }

    /// Apply a completed list fetch.
    ///
    /// Returns the ids (in catalogue order) a details batch must be launched
    /// for, or `None` when the catalogue is empty.
    pub fn apply_entries(&mut self, entries: Vec<CatalogueEntry>) -> Option<Vec<StackId>> {
        self.entries = entries;
        self.phase = CataloguePhase::Loaded;
        self.catalogue_error = None;
        self.loaded_at = Some(Local::now());

        match self.selected {
            Some(index) if index >= self.entries.len() => {
                debug!(
                    "Selection {} out of range of {} entries, clearing",
                    index,
                    self.entries.len()
                );
                self.selected = None;
                self.set_detail_text(None);
            }
            Some(index) => {
                if let Some(text) = self.cached_text_at(index) {
                    self.set_detail_text(Some(text));
                }
            }
            None => {}
        }

        self.coverage = self.measure_coverage();

        if self.entries.is_empty() {
            return None;
        }

        self.coverage_before_batch = self.coverage;
        self.coverage = DetailCoverage::Loading;
        Some(self.entries.iter().map(|e| e.id).collect())
    }

    /// Apply a failed list fetch. Entries from an earlier load stay visible.
    pub fn apply_list_failure(&mut self, error: String) {
        self.phase = if self.entries.is_empty() {
            CataloguePhase::Empty
        } else {
            CataloguePhase::Loaded
        };
        self.catalogue_error = Some(error);
    }

    /// Apply a completed details batch.
    ///
    /// All details are rendered before any is admitted, so an error leaves
    /// the cache untouched.
    pub fn apply_details(&mut self, details: Vec<StackDetail>) -> Result<()> {
        let rendered = details
            .into_iter()
            .map(|detail| -> Result<CachedDetail> {
                let text = detail.to_pretty_json()?;
                Ok(CachedDetail { detail, text })
            })
            .collect::<Result<Vec<_>>>()?;

        for cached in rendered {
            self.cache.insert(cached.detail.id, cached);
        }
        self.coverage = self.measure_coverage();
        self.detail_error = None;

        if let Some(text) = self.selected.and_then(|i| self.cached_text_at(i)) {
            self.set_detail_text(Some(text));
        }
        Ok(())
    }

    /// Apply a failed details batch
    pub fn apply_details_failure(&mut self, error: String) {
        if self.coverage == DetailCoverage::Loading {
            self.coverage = self.coverage_before_batch;
        }
        self.detail_error = Some(error);
    }

    /// Select the catalogue row at `index`.
    ///
    /// Returns `false` (and changes nothing) when `index` is already selected
    /// or out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if self.selected == Some(index) {
            return false;
        }
        if index >= self.entries.len() {
            trace!(
                "Ignoring selection {} with {} entries",
                index,
                self.entries.len()
            );
            return false;
        }

        self.selected = Some(index);
        if let Some(text) = self.cached_text_at(index) {
            self.set_detail_text(Some(text));
        }
        true
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn phase(&self) -> CataloguePhase {
        self.phase
    }

    pub fn coverage(&self) -> DetailCoverage {
        self.coverage
    }

    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn detail_text(&self) -> Option<&str> {
        self.detail_text.as_deref()
    }

    pub fn detail_revision(&self) -> u64 {
        self.detail_revision
    }

    pub fn cached_detail(&self, id: StackId) -> Option<&StackDetail> {
        self.cache.get(&id).map(|c| &c.detail)
    }

    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    pub fn catalogue_error(&self) -> Option<&str> {
        self.catalogue_error.as_deref()
    }

    pub fn detail_error(&self) -> Option<&str> {
        self.detail_error.as_deref()
    }

    /// The catalogue error if any, else the detail error
    pub fn error_text(&self) -> Option<&str> {
        self.catalogue_error().or(self.detail_error())
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    /// A list fetch or details batch is in flight
    pub fn is_fetching(&self) -> bool {
        self.phase == CataloguePhase::Loading || self.coverage == DetailCoverage::Loading
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            catalogue_items: self
                .entries
                .iter()
                .map(|e| DisplayRow { label: e.label() })
                .collect(),
            selected_index: self.selected,
            detail_text: self.detail_text.clone(),
            error_text: self.error_text().map(str::to_string),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────

    fn cached_text_at(&self, index: usize) -> Option<String> {
        let entry = self.entries.get(index)?;
        self.cache.get(&entry.id).map(|c| c.text.clone())
    }

    fn set_detail_text(&mut self, text: Option<String>) {
        self.detail_text = text;
        self.detail_revision += 1;
    }

    fn measure_coverage(&self) -> DetailCoverage {
        let covered = self
            .entries
            .iter()
            .filter(|e| self.cache.contains_key(&e.id))
            .count();
        match covered {
            0 => DetailCoverage::Empty,
            n if n == self.entries.len() => DetailCoverage::FullyLoaded,
            _ => DetailCoverage::PartiallyLoaded,
        }
    }
}
