//! Tracing integration for error-site.
//!
//! Emits wrapped errors as structured `tracing` events with one field per key
//! of the rendered form.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-site = { version = "0.3", features = ["tracing"] }
//! ```

use crate::types::WrappedError;

impl WrappedError {
    /// Emits this error as an `ERROR` event.
    ///
    /// The event carries `funcname`, `fileline`, `annotation`, and `caused`
    /// fields; its message is the full rendered chain. The annotation is not
    /// named `message` because tracing reserves that field for the event text.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_site::err;
    ///
    /// err!("cache miss storm").trace();
    /// ```
    pub fn trace(&self) {
        tracing::error!(
            funcname = self.function(),
            fileline = %self.site(),
            annotation = self.message().unwrap_or_default(),
            caused = %self.cause(),
            "{}",
            self
        );
    }
}

/// Extension trait for reporting failed `Result`s.
pub trait TraceResultExt {
    /// Emits the error, if any, via [`WrappedError::trace`] and returns the
    /// result unchanged.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_site::traits::{ResultExt, TraceResultExt};
    ///
    /// let config = std::fs::read_to_string("app.toml")
    ///     .wrap_err_msg("loading config")
    ///     .trace_err()?;
    /// ```
    fn trace_err(self) -> Self;
}

impl<T> TraceResultExt for Result<T, WrappedError> {
    #[inline]
    fn trace_err(self) -> Self {
        if let Err(error) = &self {
            error.trace();
        }
        self
    }
}
