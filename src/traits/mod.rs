//! Extension traits for producing [`WrappedError`](crate::WrappedError)s.
//!
//! - [`ResultExt`]: wraps the error of a `Result`, recording the caller
//! - [`TraceResultExt`]: reports a failed `Result` as a `tracing` event
//!   (requires the `tracing` feature)

pub mod result_ext;

pub use result_ext::ResultExt;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TraceResultExt;
