//! imctl-tui - Terminal UI for imctl
//!
//! This crate provides the ratatui-based presentation shell. It drives the
//! state machine from imctl-app with terminal input and renders its state as
//! a split catalogue/detail view.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
