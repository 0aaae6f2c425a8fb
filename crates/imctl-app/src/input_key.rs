//! Abstract input key event, independent of terminal library.
//!
//! The app layer only sees `InputKey`; the TUI converts crossterm key events
//! at its boundary so the state machine can be driven without a terminal.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+d, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
}
