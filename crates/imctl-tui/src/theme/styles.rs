//! Semantic style builders.

use imctl_app::{CataloguePhase, CatalogueState, DetailCoverage};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

/// Frames of the loading indicator
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// "Black on Cyan" - used for the selected row and the active tab
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// Spinner glyph for an animation frame
pub fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Icon, label and style describing the catalogue's load status
pub fn catalogue_indicator(
    catalogue: &CatalogueState,
    frame: usize,
) -> (&'static str, &'static str, Style) {
    if catalogue.error_text().is_some() {
        return ("✗", "Error", status_red());
    }
    match (catalogue.phase(), catalogue.coverage()) {
        (CataloguePhase::Loading, _) => (
            spinner(frame),
            "Loading stacks",
            Style::default().fg(palette::STATUS_YELLOW),
        ),
        (_, DetailCoverage::Loading) => (
            spinner(frame),
            "Loading details",
            Style::default().fg(palette::STATUS_YELLOW),
        ),
        (CataloguePhase::Empty, _) => ("○", "Not loaded", text_muted()),
        _ => (
            "●",
            "Ready",
            Style::default().fg(palette::STATUS_GREEN),
        ),
    }
}
