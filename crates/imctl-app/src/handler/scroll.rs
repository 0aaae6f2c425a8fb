//! Scroll message handlers
//!
//! Handles paging through the detail pane. The offset never passes the point
//! where the last line sits at the bottom of the pane.

use crate::state::AppState;

use super::UpdateResult;

/// Handle page down message
pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    let page = state.detail_page_height();
    scroll_by(state, page as isize);
    UpdateResult::none()
}

/// Handle page up message
pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    let page = state.detail_page_height();
    scroll_by(state, -(page as isize));
    UpdateResult::none()
}

/// Handle half page down message
pub fn handle_half_page_down(state: &mut AppState) -> UpdateResult {
    let half = half_page(state);
    scroll_by(state, half as isize);
    UpdateResult::none()
}

/// Handle half page up message
pub fn handle_half_page_up(state: &mut AppState) -> UpdateResult {
    let half = half_page(state);
    scroll_by(state, -(half as isize));
    UpdateResult::none()
}

/// Keep the offset valid after the page height changed
pub fn clamp_offset(state: &mut AppState) {
    state.detail_view.offset = state.detail_view.offset.min(max_offset(state));
}

fn half_page(state: &AppState) -> usize {
    (state.detail_page_height() / 2).max(1)
}

fn max_offset(state: &AppState) -> usize {
    state
        .detail_line_count()
        .saturating_sub(state.detail_page_height())
}

fn scroll_by(state: &mut AppState, delta: isize) {
    let offset = state.detail_view.offset.saturating_add_signed(delta);
    state.detail_view.offset = offset.min(max_offset(state));
}
