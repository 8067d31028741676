//! Chainable error node that records where it was created.
//!
//! This module provides [`WrappedError`], a wrapper that stores:
//! - The [`Cause`] it wraps (plain text, another layer, or any error)
//! - The [`CallSite`] of the call that created it
//! - An optional annotation message
//!
//! Its `Display` output is a single-line JSON object; wrapping a
//! `WrappedError` nests the inner object under `"caused"`.

use alloc::string::String;
use core::error::Error;

use crate::types::{CallSite, Cause, LeafError};

mod chain;
mod traits;

pub use chain::Chain;

/// One node in a chain of causally-linked errors.
///
/// # Examples
///
/// ```
/// use error_site::{err, wrap};
///
/// let inner = err!("connection refused");
/// let outer = wrap!(inner, "loading profile {}", 7);
///
/// let text = outer.to_string();
/// assert!(text.starts_with(r#"{"caused":{"caused":"connection refused","#));
/// assert!(text.ends_with(r#","message":"loading profile 7"}"#));
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct WrappedError {
    cause: Cause,
    site: CallSite,
    message: String,
}

impl WrappedError {
    /// Creates a node around a plain text cause, recording the caller's location.
    #[track_caller]
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self::new_at(CallSite::caller(), text)
    }

    /// Wraps `error`, recording the caller's location.
    #[track_caller]
    #[inline]
    pub fn wrap<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::wrap_at(CallSite::caller(), error)
    }

    /// Wraps `error` with an annotation, recording the caller's location.
    ///
    /// An empty `message` is treated as absent.
    #[track_caller]
    #[inline]
    pub fn wrap_with_msg<E>(error: E, message: impl Into<String>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::wrap_with_msg_at(CallSite::caller(), error, message)
    }

    /// Same as [`new`](Self::new) with an explicit call site.
    #[inline]
    pub fn new_at(site: CallSite, text: impl Into<String>) -> Self {
        Self::from_parts(Cause::Message(LeafError::new(text)), site, String::new())
    }

    /// Same as [`wrap`](Self::wrap) with an explicit call site.
    #[inline]
    pub fn wrap_at<E>(site: CallSite, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_parts(Cause::from_error(error), site, String::new())
    }

    /// Same as [`wrap_with_msg`](Self::wrap_with_msg) with an explicit call site.
    #[inline]
    pub fn wrap_with_msg_at<E>(site: CallSite, error: E, message: impl Into<String>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_parts(Cause::from_error(error), site, message)
    }

    /// Assembles a node from its parts.
    #[inline]
    pub fn from_parts(cause: Cause, site: CallSite, message: impl Into<String>) -> Self {
        Self { cause, site, message: message.into() }
    }

    #[inline]
    pub fn cause(&self) -> &Cause {
        &self.cause
    }

    #[inline]
    pub fn site(&self) -> &CallSite {
        &self.site
    }

    /// Short name of the function that created this node.
    #[inline]
    pub fn function(&self) -> &'static str {
        self.site.function()
    }

    /// The annotation, or `None` when it is empty.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        if self.message.is_empty() {
            None
        } else {
            Some(&self.message)
        }
    }

    /// Returns the wrapped cause, one level down.
    ///
    /// This is the same value [`Error::source`] yields.
    #[inline]
    pub fn inner(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.cause.as_error()
    }

    /// Consumes the node, returning its cause.
    #[inline]
    pub fn into_cause(self) -> Cause {
        self.cause
    }
}
