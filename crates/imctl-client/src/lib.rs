//! # imctl-client - Instance Manager Resource Client
//!
//! Authenticates against the instance manager and performs the read
//! operations the catalogue browser needs. No caching, no retries.
//!
//! Depends on [`imctl_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`StackCatalogue`] - Read operations consumed by the app layer (Send futures)
//! - [`fetch_stack_details()`] - Order-preserving, fail-fast batch of detail fetches
//! - [`HttpCatalogueClient`] - reqwest-backed implementation
//! - [`Credentials`] - Basic-auth credentials exchanged for a bearer token

pub mod catalogue;
pub mod http;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use catalogue::{fetch_stack_details, LocalStackCatalogue, StackCatalogue};
pub use http::{Credentials, HttpCatalogueClient};
