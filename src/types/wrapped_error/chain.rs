use core::error::Error;
use core::iter::FusedIterator;

use super::WrappedError;
use crate::types::{CallSite, ErrorVec};

/// Iterator over an error and its successive sources.
///
/// Created by [`WrappedError::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Chain<'a> {
    /// Starts a chain at any error.
    #[inline]
    pub fn new(head: &'a (dyn Error + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

impl WrappedError {
    /// Iterates over this node and every cause below it, outermost first.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_site::{err, wrap};
    ///
    /// // saving -> wrap -> err -> leaf text
    /// let error = wrap!(wrap!(err!("disk full")), "saving");
    /// assert_eq!(error.chain().count(), 4);
    /// assert_eq!(error.chain().last().map(|e| e.to_string()).as_deref(), Some("disk full"));
    /// ```
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Returns `true` if any link of the chain is a `T`.
    #[inline]
    pub fn is<T>(&self) -> bool
    where
        T: Error + 'static,
    {
        self.chain().any(|link| link.is::<T>())
    }

    /// Returns the first link of the chain that is a `T`.
    #[inline]
    pub fn find<T>(&self) -> Option<&T>
    where
        T: Error + 'static,
    {
        self.chain().find_map(|link| link.downcast_ref::<T>())
    }

    /// Returns `true` if some link of the chain has the target's type and
    /// compares equal to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_site::wrap;
    ///
    /// let error = wrap!(core::fmt::Error, "formatting report");
    /// assert!(error.contains(&core::fmt::Error));
    /// ```
    pub fn contains<T>(&self, target: &T) -> bool
    where
        T: Error + PartialEq + 'static,
    {
        self.chain()
            .filter_map(|link| link.downcast_ref::<T>())
            .any(|candidate| candidate == target)
    }

    /// Returns the last link of the chain.
    pub fn root_cause(&self) -> &(dyn Error + 'static) {
        let mut current: &(dyn Error + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    /// Call sites of every wrapped layer, outermost first.
    ///
    /// Layers hidden behind a foreign error's `source()` are included.
    pub fn trail(&self) -> ErrorVec<&CallSite> {
        self.chain()
            .filter_map(|link| link.downcast_ref::<WrappedError>())
            .map(WrappedError::site)
            .collect()
    }

    /// Number of wrapped layers in the chain, this one included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.chain().filter(|link| link.is::<WrappedError>()).count()
    }
}
