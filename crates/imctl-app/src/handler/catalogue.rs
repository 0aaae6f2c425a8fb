//! Catalogue handlers: fetch completions, selection and refresh

use crate::state::AppState;
use imctl_core::prelude::*;
use imctl_core::{CatalogueEntry, StackDetail};

use super::{Task, UpdateAction, UpdateResult};

/// Handle a completed list fetch
pub fn handle_stacks_loaded(state: &mut AppState, entries: Vec<CatalogueEntry>) -> UpdateResult {
    info!("Loaded {} stacks", entries.len());

    match state.catalogue.apply_entries(entries) {
        Some(ids) => {
            debug!("Fetching details for {} stacks", ids.len());
            UpdateResult::action(UpdateAction::SpawnTask(Task::FetchStackDetails { ids }))
        }
        None => UpdateResult::none(),
    }
}

/// Handle a failed list fetch
pub fn handle_stacks_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Stack list fetch failed: {}", error);
    state.catalogue.apply_list_failure(error);
    UpdateResult::none()
}

/// Handle a completed details batch
pub fn handle_stack_details_loaded(state: &mut AppState, details: Vec<StackDetail>) -> UpdateResult {
    let count = details.len();
    match state.catalogue.apply_details(details) {
        Ok(()) => debug!("Cached {} stack details", count),
        Err(e) => {
            error!("Failed to render stack details: {}", e);
            state.catalogue.apply_details_failure(e.to_string());
        }
    }
    UpdateResult::none()
}

/// Handle a failed details batch
pub fn handle_stack_details_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Stack details fetch failed: {}", error);
    state.catalogue.apply_details_failure(error);
    UpdateResult::none()
}

/// Handle a selection change from the presentation layer
pub fn handle_selection_changed(state: &mut AppState, index: usize) -> UpdateResult {
    if state.catalogue.select(index) {
        trace!("Selected stack row {}", index);
    }
    UpdateResult::none()
}

/// Handle a user refresh request.
///
/// Ignored while a list fetch or details batch is still in flight.
pub fn handle_refresh(state: &mut AppState) -> UpdateResult {
    if state.catalogue.is_fetching() {
        debug!("Refresh ignored, fetch in flight");
        return UpdateResult::none();
    }

    info!("Refreshing stack catalogue");
    state.catalogue.begin_list_fetch();
    UpdateResult::action(UpdateAction::SpawnTask(Task::ListStacks))
}
