//! Custom widgets for the TUI

mod catalogue_list;
mod detail_view;
mod header;
mod status_bar;

pub use catalogue_list::CatalogueList;
pub use detail_view::DetailView;
pub use header::MainHeader;
pub use status_bar::StatusBar;

use unicode_width::UnicodeWidthChar;

/// Truncate `text` to at most `max_width` terminal columns, adding an
/// ellipsis when anything was cut.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
