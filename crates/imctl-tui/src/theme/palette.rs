//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Status bar ---
pub const STATUS_BAR_BG: Color = Color::Rgb(30, 30, 30);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_background_is_rgb() {
        assert!(matches!(STATUS_BAR_BG, Color::Rgb(_, _, _)));
    }

    #[test]
    fn test_contrast_differs_from_accent() {
        assert_ne!(CONTRAST_FG, ACCENT);
    }
}
