//! Error types and utilities.
//!
//! # Examples
//!
//! ```
//! use error_site::{CallSite, WrappedError};
//!
//! let site = CallSite::new("src/db.rs", 42, "app::db::connect");
//! let err = WrappedError::wrap_with_msg_at(site, core::fmt::Error, "opening pool");
//!
//! assert_eq!(
//!     err.to_string(),
//!     r#"{"caused":"an error occurred when formatting an argument","funcname":"db::connect","fileline":"db.rs:42","message":"opening pool"}"#
//! );
//! ```
use smallvec::SmallVec;

pub mod call_site;
pub mod cause;
pub mod leaf_error;
#[cfg(feature = "serde")]
pub mod record;
mod render;
pub mod wrapped_error;

pub use call_site::*;
pub use cause::*;
pub use leaf_error::*;
#[cfg(feature = "serde")]
pub use record::*;
pub use wrapped_error::*;

/// SmallVec-backed collection used when walking a chain.
///
/// Uses inline storage for up to 4 elements, enough for typical wrap depths
/// without touching the heap.
pub type ErrorVec<E> = SmallVec<[E; 4]>;

/// Result alias that fails with a [`WrappedError`].
pub type WrappedResult<T> = Result<T, WrappedError>;
