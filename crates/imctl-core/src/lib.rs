//! # imctl-core - Core Domain Types
//!
//! Foundation crate for imctl. Provides the stack catalogue domain types,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`stack`)
//! - [`CatalogueEntry`] - One deployable stack template as listed by the service
//! - [`StackDetail`] - Parameter schema of one stack
//! - [`OptionalParameter`], [`RequiredParameter`] - Stack parameters
//! - [`StackId`] - Identity shared by an entry and its detail
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with auth/fetch classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use imctl_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod stack;

/// Prelude for common imports used throughout all imctl crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use stack::{CatalogueEntry, OptionalParameter, RequiredParameter, StackDetail, StackId};
