//! Stack catalogue operations
//!
//! The [`StackCatalogue`] trait is the seam between the app layer and the
//! remote service. Fetch tasks hold it behind an `Arc` and run on the tokio
//! runtime, so the `Send` variant is the one implementors provide.

use imctl_core::prelude::*;
use imctl_core::{CatalogueEntry, StackDetail, StackId};

/// Read access to the instance manager's stack catalogue
#[trait_variant::make(StackCatalogue: Send)]
pub trait LocalStackCatalogue {
    /// Exchange the stored credentials for a bearer token.
    ///
    /// Must succeed once before any other call.
    async fn login(&mut self) -> Result<()>;

    /// List all stacks, in the order the service returns them
    async fn list_stacks(&self) -> Result<Vec<CatalogueEntry>>;

    /// Fetch the parameter schema of a single stack
    async fn stack_detail(&self, id: StackId) -> Result<StackDetail>;
}

/// Fetch the details of `ids` one after another.
///
/// The result is in request order. The first failure aborts the batch and
/// discards every detail fetched so far.
pub async fn fetch_stack_details<C>(client: &C, ids: &[StackId]) -> Result<Vec<StackDetail>>
where
    C: StackCatalogue + Sync,
{
    let mut details = Vec::with_capacity(ids.len());
    for &id in ids {
        match client.stack_detail(id).await {
            Ok(detail) => details.push(detail),
            Err(e) => {
                warn!(
                    "Stack details batch aborted at id {} after {} of {}: {}",
                    id,
                    details.len(),
                    ids.len(),
                    e
                );
                return Err(e);
            }
        }
    }
    debug!("Fetched {} stack details", details.len());
    Ok(details)
}
