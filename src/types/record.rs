//! Serde support: decoding rendered errors and serializing live ones.
//!
//! [`ErrorRecord`] is the decoded form of a [`WrappedError`]'s `Display`
//! output, for tooling that reads these strings back out of logs.
//!
//! # Examples
//!
//! ```
//! use error_site::{err, wrap, ErrorRecord};
//!
//! let error = wrap!(err!("timeout"), "fetching quotes");
//! let record = ErrorRecord::parse(&error.to_string()).unwrap();
//!
//! assert_eq!(record.message.as_deref(), Some("fetching quotes"));
//! assert_eq!(record.root_text(), "timeout");
//! assert_eq!(record.depth(), 2);
//! ```

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::types::{Cause, WrappedError};

/// Decoded form of one rendered error layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub caused: Caused,
    pub funcname: String,
    pub fileline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The `caused` field: either a plain string or a nested layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Caused {
    Text(String),
    Nested(Box<ErrorRecord>),
}

impl ErrorRecord {
    /// Decodes the `Display` output of a [`WrappedError`].
    ///
    /// # Errors
    ///
    /// Fails when `text` is not valid JSON of the expected shape, which
    /// includes chains whose leaf text started with `{` and was spliced raw.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Number of layers, this one included.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self;
        while let Caused::Nested(nested) = &current.caused {
            depth += 1;
            current = &**nested;
        }
        depth
    }

    /// Text of the innermost cause.
    pub fn root_text(&self) -> &str {
        let mut current = self;
        loop {
            match &current.caused {
                Caused::Nested(nested) => current = &**nested,
                Caused::Text(text) => return text,
            }
        }
    }
}

impl From<&WrappedError> for ErrorRecord {
    fn from(error: &WrappedError) -> Self {
        let caused = match error.cause() {
            Cause::Nested(nested) => Caused::Nested(Box::new(Self::from(&**nested))),
            other => Caused::Text(other.to_string()),
        };
        Self {
            caused,
            funcname: error.function().into(),
            fileline: error.site().to_string(),
            message: error.message().map(Into::into),
        }
    }
}

/// Serializes with the same field names as the rendered form. Nested layers
/// become objects and every other cause a string, without looking at the text.
impl Serialize for WrappedError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.message().is_some() { 4 } else { 3 };
        let mut state = serializer.serialize_struct("WrappedError", len)?;
        state.serialize_field("caused", &CauseField(self.cause()))?;
        state.serialize_field("funcname", self.function())?;
        state.serialize_field("fileline", &self.site().to_string())?;
        match self.message() {
            Some(message) => state.serialize_field("message", message)?,
            None => state.skip_field("message")?,
        }
        state.end()
    }
}

struct CauseField<'a>(&'a Cause);

impl Serialize for CauseField<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Cause::Nested(nested) => nested.serialize(serializer),
            other => serializer.collect_str(other),
        }
    }
}
