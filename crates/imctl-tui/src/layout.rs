//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title/tabs row + bottom border
pub const HEADER_HEIGHT: u16 = 3;
/// Status bar height
pub const STATUS_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and tabs
    pub header: Rect,

    /// Catalogue list (left pane)
    pub list: Rect,

    /// Stack detail (right pane)
    pub detail: Rect,

    /// Connection and load status
    pub status: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `list_width_percent` - Share of the body given to the catalogue list
pub fn create(area: Rect, list_width_percent: u16) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    let list_width_percent = list_width_percent.min(100);
    let columns = Layout::horizontal([
        Constraint::Percentage(list_width_percent),
        Constraint::Percentage(100 - list_width_percent),
    ])
    .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        list: columns[0],
        detail: columns[1],
        status: rows[2],
    }
}
