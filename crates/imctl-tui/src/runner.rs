//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use imctl_app::config::Settings;
use imctl_app::message::Message;
use imctl_app::state::AppState;
use imctl_app::{process, signals, SessionInfo};
use imctl_client::StackCatalogue;
use imctl_core::prelude::*;

use super::{event, render, terminal};

/// Run the catalogue browser against an authenticated client
pub async fn run<C>(client: Arc<C>, settings: Settings, session: SessionInfo) -> Result<()>
where
    C: StackCatalogue + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::with_settings(settings, session);

    // Unified message channel for fetch tasks and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    // Seed the page height before the first resize event
    match term.size() {
        Ok(size) => process::process_message(
            &mut state,
            Message::ViewportResized {
                width: size.width,
                height: size.height,
            },
            &msg_tx,
            &client,
        ),
        Err(e) => warn!("Failed to read terminal size: {}", e),
    }

    process::process_startup(&mut state, &msg_tx, &client);
    info!("Catalogue browser started");

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, client);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<C>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: Arc<C>,
) -> Result<()>
where
    C: StackCatalogue + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Process fetch completions and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, &client);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, &client);
        }
    }

    info!("Catalogue browser exiting");
    Ok(())
}
