//! Non-interactive commands: `list` and `show`

use std::io::Write;

use imctl_client::StackCatalogue;
use imctl_core::prelude::*;
use imctl_core::StackId;

/// Print one `"<name> (<id>)"` line per stack, in service order
pub async fn list_stacks<C, W>(client: &C, out: &mut W) -> Result<()>
where
    C: StackCatalogue + Sync,
    W: Write,
{
    let entries = client.list_stacks().await?;
    debug!("Printing {} stacks", entries.len());
    for entry in entries {
        writeln!(out, "{}", entry.label())?;
    }
    Ok(())
}

/// Print the detail of stack `id` as pretty JSON
pub async fn show_stack<C, W>(client: &C, id: StackId, out: &mut W) -> Result<()>
where
    C: StackCatalogue + Sync,
    W: Write,
{
    let detail = client.stack_detail(id).await?;
    writeln!(out, "{}", detail.to_pretty_json()?)?;
    Ok(())
}
