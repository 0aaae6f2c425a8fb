//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use imctl_app::config::ConnectionOverrides;
use imctl_core::StackId;

/// imctl - browse an instance manager's stack catalogue from the terminal
#[derive(Parser, Debug)]
#[command(name = "imctl")]
#[command(about = "Browse an instance manager's stack catalogue", long_about = None)]
pub struct Args {
    /// Instance manager URL (overrides [server] url)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// User to log in with (overrides [server] user)
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Password of the user
    #[arg(long = "pw", env = "IMCTL_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Browse the catalogue interactively (default)
    Tui,
    /// Print one line per stack
    List,
    /// Print the parameters of one stack as JSON
    Show {
        /// Stack ID
        id: StackId,
    },
}

impl Args {
    /// The subcommand to run, defaulting to the TUI
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }

    pub fn connection_overrides(&self) -> ConnectionOverrides {
        ConnectionOverrides {
            url: self.url.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_tui() {
        let args = Args::try_parse_from(["imctl", "--pw", "district"]).unwrap();
        assert_eq!(args.command(), Command::Tui);
        assert_eq!(args.password.as_deref(), Some("district"));
    }

    #[test]
    fn test_show_takes_id() {
        let args = Args::try_parse_from([
            "imctl",
            "show",
            "3",
            "--url",
            "http://localhost:8080",
            "--user",
            "admin",
        ])
        .unwrap();

        assert_eq!(args.command(), Command::Show { id: 3 });
        let overrides = args.connection_overrides();
        assert_eq!(overrides.url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(overrides.user.as_deref(), Some("admin"));
    }

    #[test]
    fn test_show_rejects_non_numeric_id() {
        assert!(Args::try_parse_from(["imctl", "show", "dhis2"]).is_err());
    }

    #[test]
    fn test_config_path() {
        let args = Args::try_parse_from(["imctl", "--config", "/tmp/imctl.toml", "list"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/imctl.toml")));
        assert_eq!(args.command(), Command::List);
    }
}
