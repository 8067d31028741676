use alloc::string::String;
use core::fmt::{self, Display};

/// A plain text error with no further cause.
///
/// This is the innermost link of chains started with
/// [`WrappedError::new`](crate::WrappedError::new) or [`err!`](crate::err).
/// Its `Display` output is the text, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeafError {
    text: String,
}

impl LeafError {
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl Display for LeafError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl core::error::Error for LeafError {}
