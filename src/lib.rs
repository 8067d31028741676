//! Chainable errors that remember where they were created.
//!
//! Every [`WrappedError`] records the short file name, line, and function of
//! the call that built it, plus an optional message, and renders the whole
//! chain as one line of nested JSON:
//!
//! ```text
//! {"caused":{"caused":"inner","funcname":"db::query","fileline":"db.rs:10"},"funcname":"api::handler","fileline":"handler.rs:30","message":"loading profile"}
//! ```
//!
//! # Examples
//!
//! ## Starting and Wrapping a Chain
//!
//! ```
//! use error_site::{err, wrap};
//!
//! let root = err!("connection refused");
//! let error = wrap!(root, "loading profile");
//!
//! let text = error.to_string();
//! assert!(text.starts_with(r#"{"caused":{"caused":"connection refused","#));
//! assert!(text.ends_with(r#""message":"loading profile"}"#));
//! ```
//!
//! ## Walking the Chain
//!
//! ```
//! use error_site::WrappedError;
//!
//! let parse = "x".parse::<u8>().unwrap_err();
//! let error = WrappedError::wrap_with_msg(parse.clone(), "reading port");
//!
//! assert!(error.contains(&parse));
//! assert!(!error.is::<core::fmt::Error>());
//! assert_eq!(error.root_cause().to_string(), parse.to_string());
//! ```
//!
//! ## Wrapping `Result`s
//!
//! ```
//! use error_site::prelude::*;
//!
//! fn load() -> WrappedResult<String> {
//!     std::fs::read_to_string("missing.toml").wrap_err_msg("loading config")
//! }
//!
//! assert_eq!(load().unwrap_err().message(), Some("loading config"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Macros that capture the full call site
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for producing wrapped errors
pub mod traits;
/// WrappedError and its building blocks
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
pub use types::*;

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
    pub use core::any::type_name_of_val;
}
