//! imctl - terminal client for an instance manager's stack catalogue
//!
//! The binary parses arguments, sets up logging and configuration, logs in
//! and then hands over to the TUI or to one of the headless commands. The
//! logic lives in the workspace crates:
//!
//! - `imctl-core` - domain types, errors, logging
//! - `imctl-client` - instance manager HTTP client
//! - `imctl-app` - catalogue state machine, fetch tasks, config
//! - `imctl-tui` - terminal presentation

pub mod cli;
pub mod headless;

use std::io::Write;
use std::sync::Arc;

use imctl_app::config::{self, Settings};
use imctl_app::SessionInfo;
use imctl_client::{Credentials, HttpCatalogueClient, StackCatalogue};
use imctl_core::prelude::*;

use cli::{Args, Command};

/// Run the command selected by `args`
pub async fn run(args: Args) -> Result<()> {
    // Initialize logging (to file, since the TUI owns stdout)
    imctl_core::logging::init()?;
    info!("imctl {} starting", env!("CARGO_PKG_VERSION"));

    let settings = load_settings(&args);
    let connection = config::resolve_connection(&settings, args.connection_overrides())?;
    info!("Connecting to {} as {}", connection.url, connection.user);

    let client = HttpCatalogueClient::new(
        &connection.url,
        Credentials::new(connection.user.clone(), connection.password.clone()),
    )?;
    let session = SessionInfo::new(connection.user, connection.url);

    let result =
        login_and_dispatch(client, args.command(), settings, session, &mut std::io::stdout())
            .await;

    if let Err(ref e) = result {
        if e.is_fatal() {
            error!("Fatal error: {}", e);
        } else {
            error!("Application error: {:?}", e);
        }
    }
    info!("imctl exiting");
    result
}

/// Log in, then run `command` against the authenticated client.
///
/// A rejected login returns before any read is issued. Headless commands
/// write to `out`.
pub async fn login_and_dispatch<C, W>(
    mut client: C,
    command: Command,
    settings: Settings,
    session: SessionInfo,
    out: &mut W,
) -> Result<()>
where
    C: StackCatalogue + Send + Sync + 'static,
    W: Write,
{
    client.login().await.context("Login failed")?;

    match command {
        Command::Tui => imctl_tui::run(Arc::new(client), settings, session).await,
        Command::List => headless::list_stacks(&client, out).await,
        Command::Show { id } => headless::show_stack(&client, id, out).await,
    }
}

fn load_settings(args: &Args) -> Settings {
    match args.config.clone().or_else(config::default_config_path) {
        Some(path) => config::load_settings(&path),
        None => {
            warn!("No config directory available, using defaults");
            Settings::default()
        }
    }
}
