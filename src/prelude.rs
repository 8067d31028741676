//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_site::prelude::*;
//!
//! fn read_settings() -> WrappedResult<String> {
//!     std::fs::read_to_string("settings.json").wrap_err_msg("reading settings")
//! }
//!
//! assert!(read_settings().is_err());
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`err!`], [`wrap!`], [`call_site!`]
//! - **Types**: [`WrappedError`], [`Cause`], [`CallSite`], [`WrappedResult`]
//! - **Traits**: [`ResultExt`], and `TraceResultExt` with the `tracing` feature

pub use crate::{call_site, err, wrap};

pub use crate::types::{CallSite, Cause, WrappedError, WrappedResult};

pub use crate::traits::ResultExt;
#[cfg(feature = "tracing")]
pub use crate::traits::TraceResultExt;
