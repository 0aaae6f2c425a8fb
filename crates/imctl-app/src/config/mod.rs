//! Configuration file parsing for imctl
//!
//! Supports:
//! - `<config dir>/imctl/config.toml` - Server and UI settings
//! - Command-line overrides merged on top (see [`resolve_connection`])

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, resolve_connection};
pub use types::*;
