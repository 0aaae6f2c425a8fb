//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, Viewport};

use super::{catalogue, keys::handle_key, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    let result = dispatch(state, message);
    state.sync_detail_view();
    result
}

fn dispatch(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.catalogue.is_fetching() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        Message::ViewportResized { width, height } => {
            state.viewport = Some(Viewport { width, height });
            scroll::clamp_offset(state);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection / Refresh
        // ─────────────────────────────────────────────────────────
        Message::SelectionChanged(index) => catalogue::handle_selection_changed(state, index),
        Message::Refresh => catalogue::handle_refresh(state),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::DetailPageDown => scroll::handle_page_down(state),
        Message::DetailPageUp => scroll::handle_page_up(state),
        Message::DetailHalfPageDown => scroll::handle_half_page_down(state),
        Message::DetailHalfPageUp => scroll::handle_half_page_up(state),

        // ─────────────────────────────────────────────────────────
        // Fetch Completions
        // ─────────────────────────────────────────────────────────
        Message::StacksLoaded { entries } => catalogue::handle_stacks_loaded(state, entries),
        Message::StacksLoadFailed { error } => catalogue::handle_stacks_load_failed(state, error),
        Message::StackDetailsLoaded { details } => {
            catalogue::handle_stack_details_loaded(state, details)
        }
        Message::StackDetailsLoadFailed { error } => {
            catalogue::handle_stack_details_load_failed(state, error)
        }
    }
}
