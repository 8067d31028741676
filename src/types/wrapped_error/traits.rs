use core::fmt::{self, Display};

use super::WrappedError;
use crate::types::{render, LeafError};

impl Display for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return render::write_cascade(self, f);
        }
        render::write_json(self, f)
    }
}

impl core::error::Error for WrappedError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        let inner: &(dyn core::error::Error + 'static) = self.inner();
        Some(inner)
    }
}

impl From<LeafError> for WrappedError {
    #[track_caller]
    #[inline]
    fn from(leaf: LeafError) -> Self {
        Self::wrap(leaf)
    }
}
