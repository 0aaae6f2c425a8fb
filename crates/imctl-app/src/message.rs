//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use imctl_core::{CatalogueEntry, StackDetail};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Presentation Input
    // ─────────────────────────────────────────────────────────
    /// The highlighted catalogue row changed.
    ///
    /// May be emitted repeatedly with the same index.
    SelectionChanged(usize),
    /// Terminal size changed (layout only)
    ViewportResized { width: u16, height: u16 },
    /// Re-fetch the catalogue (user triggered)
    Refresh,

    // ─────────────────────────────────────────────────────────
    // Detail Pane Scrolling
    // ─────────────────────────────────────────────────────────
    DetailPageDown,
    DetailPageUp,
    DetailHalfPageDown,
    DetailHalfPageUp,

    // ─────────────────────────────────────────────────────────
    // Fetch Task Completions
    // ─────────────────────────────────────────────────────────
    /// List fetch completed; entries in service order
    StacksLoaded { entries: Vec<CatalogueEntry> },
    /// List fetch failed
    StacksLoadFailed { error: String },
    /// Details batch completed; details in request order
    StackDetailsLoaded { details: Vec<StackDetail> },
    /// Details batch failed; nothing from the batch is kept
    StackDetailsLoadFailed { error: String },
}
