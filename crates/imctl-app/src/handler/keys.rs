//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages.
///
/// Selection keys always emit `SelectionChanged`, even when the index would
/// not move; the state layer absorbs repeats.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    let len = state.catalogue.len();
    let selected = state.catalogue.selected();
    let last = len.saturating_sub(1);

    match key {
        // Quit
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Selection
        InputKey::Down | InputKey::Char('j') => {
            let next = selected.map(|i| (i + 1).min(last)).unwrap_or(0);
            Some(Message::SelectionChanged(next))
        }
        InputKey::Up | InputKey::Char('k') => {
            let prev = selected.map(|i| i.saturating_sub(1)).unwrap_or(0);
            Some(Message::SelectionChanged(prev))
        }
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectionChanged(0)),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectionChanged(last)),

        // Detail paging
        InputKey::PageDown | InputKey::Char(' ') | InputKey::Char('f') => {
            Some(Message::DetailPageDown)
        }
        InputKey::PageUp | InputKey::Char('b') => Some(Message::DetailPageUp),
        InputKey::Char('d') | InputKey::CharCtrl('d') => Some(Message::DetailHalfPageDown),
        InputKey::Char('u') | InputKey::CharCtrl('u') => Some(Message::DetailHalfPageUp),

        InputKey::Char('r') => Some(Message::Refresh),

        _ => None,
    }
}
