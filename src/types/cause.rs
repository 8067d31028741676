//! The value a [`WrappedError`] wraps.

use alloc::boxed::Box;
use alloc::sync::Arc;
use core::error::Error;
use core::fmt::{self, Display};

use crate::types::{LeafError, WrappedError};

/// Cause of a [`WrappedError`] node.
///
/// The three shapes render differently: a nested [`WrappedError`] becomes a
/// JSON object, everything else is rendered from its `Display` text.
#[derive(Debug, Clone)]
pub enum Cause {
    /// Plain text created by [`WrappedError::new`].
    Message(LeafError),
    /// Another wrapped layer.
    Nested(Box<WrappedError>),
    /// Any other error value.
    Error(Arc<dyn Error + Send + Sync + 'static>),
}

impl Cause {
    /// Classifies an error value, moving it into the matching variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_site::{Cause, LeafError, WrappedError};
    ///
    /// assert!(matches!(Cause::from_error(LeafError::new("x")), Cause::Message(_)));
    /// assert!(matches!(Cause::from_error(WrappedError::new("x")), Cause::Nested(_)));
    /// assert!(matches!(Cause::from_error(core::fmt::Error), Cause::Error(_)));
    /// ```
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Classifies an already boxed error.
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        let error = match error.downcast::<WrappedError>() {
            Ok(nested) => return Self::Nested(nested),
            Err(other) => other,
        };
        match error.downcast::<LeafError>() {
            Ok(leaf) => Self::Message(*leaf),
            Err(other) => Self::Error(Arc::from(other)),
        }
    }

    /// Returns the cause as a trait object, for chain walking and downcasting.
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        match self {
            Self::Message(leaf) => leaf,
            Self::Nested(nested) => &**nested,
            Self::Error(error) => &**error,
        }
    }

    /// Returns the nested layer, if this cause is one.
    #[inline]
    pub fn as_wrapped(&self) -> Option<&WrappedError> {
        match self {
            Self::Nested(nested) => Some(&**nested),
            _ => None,
        }
    }

    #[inline]
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested(_))
    }
}

impl Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_error(), f)
    }
}

impl From<LeafError> for Cause {
    #[inline]
    fn from(leaf: LeafError) -> Self {
        Self::Message(leaf)
    }
}

impl From<WrappedError> for Cause {
    #[inline]
    fn from(nested: WrappedError) -> Self {
        Self::Nested(Box::new(nested))
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for Cause {
    #[inline]
    fn from(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self::from_boxed(error)
    }
}
