//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `catalogue`: Fetch completions, selection and refresh
//! - `keys`: Key event to message mapping
//! - `scroll`: Detail pane scrolling

pub(crate) mod catalogue;
pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod update;


use crate::message::Message;
use crate::state::AppState;
use imctl_core::StackId;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Spawn a background fetch task
    SpawnTask(Task),
}

/// Background fetch tasks.
///
/// Each task sends exactly one completion or failure message back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Fetch the catalogue
    ListStacks,
    /// Fetch details for `ids`, in order, failing on the first error
    FetchStackDetails { ids: Vec<StackId> },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

/// The single initialization side effect: launch the list fetch.
pub fn startup_action(state: &mut AppState) -> UpdateAction {
    state.catalogue.begin_list_fetch();
    UpdateAction::SpawnTask(Task::ListStacks)
}
