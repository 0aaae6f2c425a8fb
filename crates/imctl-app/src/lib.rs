//! imctl-app - Application state and orchestration for imctl
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the stack
//! catalogue browser: the synchronization state machine that reconciles the
//! background-fetched catalogue, the background-fetched stack details and the
//! user's selection, the fetch tasks that feed it, and configuration loading.

pub mod actions;
pub mod catalogue_state;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod snapshot;
pub mod state;

// Re-export primary types
pub use catalogue_state::{CataloguePhase, CatalogueState, DetailCoverage};
pub use handler::{Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use snapshot::{DisplayRow, ViewSnapshot};
pub use state::{AppPhase, AppState, SessionInfo};
