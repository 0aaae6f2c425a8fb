//! Message processing
//!
//! Runs messages through the TEA update function, following up chained
//! messages and dispatching the resulting actions.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use imctl_client::StackCatalogue;

/// Process a message through the TEA update function
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<C>,
) where
    C: StackCatalogue + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

/// Launch the initial list fetch
pub fn process_startup<C>(state: &mut AppState, msg_tx: &mpsc::Sender<Message>, client: &Arc<C>)
where
    C: StackCatalogue + Send + Sync + 'static,
{
    let action = handler::startup_action(state);
    handle_action(action, msg_tx.clone(), client.clone());
}
