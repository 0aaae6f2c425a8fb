//! Settings parser for `config.toml` and connection resolution

use std::path::{Path, PathBuf};

use super::types::{ConnectionConfig, ConnectionOverrides, Settings};
use imctl_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "imctl";

/// Default location of the config file: `<config dir>/imctl/config.toml`.
///
/// Returns `None` on platforms without a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing, unreadable or invalid file yields defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Merge command-line overrides over file settings.
///
/// Command-line values win. Url, user and password must all be present
/// afterwards; the password never comes from the file.
pub fn resolve_connection(
    settings: &Settings,
    overrides: ConnectionOverrides,
) -> Result<ConnectionConfig> {
    let url = non_empty(overrides.url.or_else(|| settings.server.url.clone()))
        .ok_or_else(|| Error::config("no instance manager url given (--url or [server] url)"))?;
    let user = non_empty(overrides.user.or_else(|| settings.server.user.clone()))
        .ok_or_else(|| Error::config("no user given (--user or [server] user)"))?;
    let password = non_empty(overrides.password)
        .ok_or_else(|| Error::config("no password given (--pw or IMCTL_PASSWORD)"))?;

    Ok(ConnectionConfig {
        url,
        user,
        password,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn full_overrides() -> ConnectionOverrides {
        ConnectionOverrides {
            url: Some("http://cli:8080".to_string()),
            user: Some("cli-user".to_string()),
            password: Some("secret".to_string()),
        }
    }

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));

        assert!(settings.server.url.is_none());
        assert!(settings.server.user.is_none());
        assert_eq!(settings.ui.list_width_percent, 40);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        let config = r#"
[server]
url = "https://im.example.org"
user = "admin"

[ui]
list_width_percent = 30
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(&path);

        assert_eq!(
            settings.server.url.as_deref(),
            Some("https://im.example.org")
        );
        assert_eq!(settings.server.user.as_deref(), Some("admin"));
        assert_eq!(settings.ui.list_width_percent, 30);
    }

    #[test]
    fn test_load_settings_partial_uses_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[server]\nuser = \"admin\"\n").unwrap();

        let settings = load_settings(&path);

        assert_eq!(settings.server.user.as_deref(), Some("admin"));
        assert_eq!(settings.ui.list_width_percent, 40);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "this is not [valid toml").unwrap();

        let settings = load_settings(&path);

        assert!(settings.server.url.is_none());
        assert_eq!(settings.ui.list_width_percent, 40);
    }

    #[test]
    fn test_resolve_overrides_win() {
        let mut settings = Settings::default();
        settings.server.url = Some("http://file:8080".to_string());
        settings.server.user = Some("file-user".to_string());

        let connection = resolve_connection(&settings, full_overrides()).unwrap();

        assert_eq!(connection.url, "http://cli:8080");
        assert_eq!(connection.user, "cli-user");
        assert_eq!(connection.password, "secret");
    }

    #[test]
    fn test_resolve_falls_back_to_file() {
        let mut settings = Settings::default();
        settings.server.url = Some("http://file:8080".to_string());
        settings.server.user = Some("file-user".to_string());
        let overrides = ConnectionOverrides {
            password: Some("secret".to_string()),
            ..Default::default()
        };

        let connection = resolve_connection(&settings, overrides).unwrap();

        assert_eq!(connection.url, "http://file:8080");
        assert_eq!(connection.user, "file-user");
    }

    #[test]
    fn test_resolve_requires_password() {
        let overrides = ConnectionOverrides {
            password: None,
            ..full_overrides()
        };

        let err = resolve_connection(&Settings::default(), overrides).unwrap_err();

        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("password"));
    }

    #[test]
    fn test_resolve_rejects_blank_url() {
        let overrides = ConnectionOverrides {
            url: Some("   ".to_string()),
            ..full_overrides()
        };

        let err = resolve_connection(&Settings::default(), overrides).unwrap_err();

        assert!(err.to_string().contains("url"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    #[serial]
    fn test_default_config_path_follows_xdg() {
        let temp = tempdir().unwrap();
        let previous = std::env::var_os("XDG_CONFIG_HOME");
        std::env::set_var("XDG_CONFIG_HOME", temp.path());

        let path = default_config_path();

        match previous {
            Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
        assert_eq!(path, Some(temp.path().join("imctl").join("config.toml")));
    }
}
