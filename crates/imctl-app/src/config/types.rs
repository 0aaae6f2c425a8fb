//! Configuration types for imctl
//!
//! Defines:
//! - `Settings` - Contents of `config.toml`
//! - `ConnectionOverrides` - Values supplied on the command line
//! - `ConnectionConfig` - The merged, complete connection parameters

use std::fmt;

use serde::{Deserialize, Serialize};

/// Narrowest and widest the catalogue list may be, in percent of the body
pub const MIN_LIST_WIDTH_PERCENT: u16 = 20;
pub const MAX_LIST_WIDTH_PERCENT: u16 = 80;

/// Settings from `config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Instance manager connection defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL of the instance manager, e.g. `https://im.example.org`
    #[serde(default)]
    pub url: Option<String>,

    /// Login user
    #[serde(default)]
    pub user: Option<String>,
}

/// Presentation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Width of the catalogue list in percent of the body
    #[serde(default = "default_list_width_percent")]
    pub list_width_percent: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            list_width_percent: default_list_width_percent(),
        }
    }
}

impl UiSettings {
    /// List width clamped so neither pane disappears
    pub fn list_width(&self) -> u16 {
        self.list_width_percent
            .clamp(MIN_LIST_WIDTH_PERCENT, MAX_LIST_WIDTH_PERCENT)
    }
}

fn default_list_width_percent() -> u16 {
    40
}

/// Connection values given on the command line (or environment)
#[derive(Debug, Clone, Default)]
pub struct ConnectionOverrides {
    pub url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

/// Complete connection parameters after merging config and overrides
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub url: String,
    pub user: String,
    pub password: String,
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
