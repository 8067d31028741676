//! Extension trait for wrapping `Result` errors without `.map_err()` chains.
//!
//! # Examples
//!
//! ```
//! use error_site::traits::ResultExt;
//!
//! fn load_config() -> error_site::WrappedResult<String> {
//!     std::fs::read_to_string("does/not/exist.toml")
//!         .wrap_err_msg("loading configuration file")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert_eq!(err.message(), Some("loading configuration file"));
//! assert!(err.is::<std::io::Error>());
//! ```

use alloc::string::String;
use core::error::Error;

use crate::types::{CallSite, WrappedError};

/// Adds wrapping methods to `Result`.
///
/// Each method records the location of its caller. The function name is
/// recorded as [`UNKNOWN_FUNCTION`](crate::types::UNKNOWN_FUNCTION); use
/// [`wrap!`](crate::wrap) inside `map_err` when it should be resolved.
pub trait ResultExt<T> {
    /// Wraps the error without a message.
    fn wrap_err(self) -> Result<T, WrappedError>;

    /// Wraps the error with a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_site::traits::ResultExt;
    ///
    /// let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
    /// let err = result.wrap_err_msg("rendering invoice").unwrap_err();
    /// assert!(err.to_string().contains(r#""message":"rendering invoice""#));
    /// ```
    fn wrap_err_msg<M>(self, message: M) -> Result<T, WrappedError>
    where
        M: Into<String>;

    /// Wraps the error with a message built only when there is an error.
    fn wrap_err_with<F, M>(self, f: F) -> Result<T, WrappedError>
    where
        F: FnOnce() -> M,
        M: Into<String>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[track_caller]
    #[inline]
    fn wrap_err(self) -> Result<T, WrappedError> {
        let site = CallSite::caller();
        self.map_err(|error| WrappedError::wrap_at(site, error))
    }

    #[track_caller]
    #[inline]
    fn wrap_err_msg<M>(self, message: M) -> Result<T, WrappedError>
    where
        M: Into<String>,
    {
        let site = CallSite::caller();
        self.map_err(|error| WrappedError::wrap_with_msg_at(site, error, message))
    }

    #[track_caller]
    #[inline]
    fn wrap_err_with<F, M>(self, f: F) -> Result<T, WrappedError>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        let site = CallSite::caller();
        self.map_err(|error| WrappedError::wrap_with_msg_at(site, error, f()))
    }
}
