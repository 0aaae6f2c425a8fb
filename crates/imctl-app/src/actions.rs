//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::handler::{Task, UpdateAction};
use crate::message::Message;
use imctl_client::{fetch_stack_details, StackCatalogue};
use imctl_core::prelude::*;

/// Execute an action by spawning a background task
pub fn handle_action<C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: Arc<C>)
where
    C: StackCatalogue + Send + Sync + 'static,
{
    match action {
        UpdateAction::SpawnTask(task) => {
            tokio::spawn(async move {
                execute_task(task, msg_tx, client).await;
            });
        }
    }
}

/// Run one fetch task to completion and post its outcome.
///
/// Sends exactly one message; a closed channel means the app is shutting
/// down and the result is dropped.
pub async fn execute_task<C>(task: Task, msg_tx: mpsc::Sender<Message>, client: Arc<C>)
where
    C: StackCatalogue + Send + Sync + 'static,
{
    let message = match task {
        Task::ListStacks => match client.list_stacks().await {
            Ok(entries) => Message::StacksLoaded { entries },
            Err(e) => Message::StacksLoadFailed {
                error: e.to_string(),
            },
        },
        Task::FetchStackDetails { ids } => match fetch_stack_details(client.as_ref(), &ids).await
        {
            Ok(details) => Message::StackDetailsLoaded { details },
            Err(e) => Message::StackDetailsLoadFailed {
                error: e.to_string(),
            },
        },
    };

    if msg_tx.send(message).await.is_err() {
        debug!("Message channel closed, dropping fetch result");
    }
}
