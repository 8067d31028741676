//! Provenance recorded by every [`WrappedError`](crate::WrappedError).
//!
//! A [`CallSite`] holds the short file name, line number, and short function
//! name of the call that created an error node. File and line come either from
//! `#[track_caller]` ([`CallSite::caller`]) or from the [`call_site!`](crate::call_site)
//! macro, which also resolves the enclosing function's name.

use core::fmt::{self, Display};
use core::panic::Location;

/// Function name recorded when the creating function cannot be resolved.
pub const UNKNOWN_FUNCTION: &str = "?";

/// Name of the marker item that [`call_site!`](crate::call_site) declares.
const MARKER_SUFFIX: &str = "::__site";

const CLOSURE_SUFFIX: &str = "::{{closure}}";

/// Where an error node was created.
///
/// # Examples
///
/// ```
/// use error_site::CallSite;
///
/// let site = CallSite::new("src/db/pool.rs", 42, "app::db::pool::acquire");
/// assert_eq!(site.file(), "pool.rs");
/// assert_eq!(site.function(), "pool::acquire");
/// assert_eq!(site.to_string(), "pool.rs:42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    function: &'static str,
}

impl CallSite {
    /// Creates a call site, shortening `file` to its final path segment and
    /// `function` to its last two `::` segments. Separators inside angle
    /// brackets do not count, so a `<Type as Trait>` qualifier stays whole.
    #[inline]
    pub fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self { file: short_file(file), line, function: short_function(function) }
    }

    /// Captures the location of the caller.
    ///
    /// The function name is not available through `#[track_caller]`, so it is
    /// recorded as [`UNKNOWN_FUNCTION`]. Use [`call_site!`](crate::call_site)
    /// when the name matters.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line(), UNKNOWN_FUNCTION)
    }

    /// Short file name, without any directory.
    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// One-based line number.
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Short function name, e.g. `module::function` or `Type::method`.
    #[inline]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Returns `false` when the function name could not be resolved.
    #[inline]
    pub fn has_function(&self) -> bool {
        self.function != UNKNOWN_FUNCTION
    }
}

impl Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

fn short_file(path: &'static str) -> &'static str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

fn short_function(name: &'static str) -> &'static str {
    let mut name = name.strip_suffix(MARKER_SUFFIX).unwrap_or(name);
    while let Some(stripped) = name.strip_suffix(CLOSURE_SUFFIX) {
        name = stripped;
    }

    // Separators inside `<..>` belong to a generic argument or a
    // `<Type as Trait>` qualifier and never split the name.
    let bytes = name.as_bytes();
    let mut depth = 0usize;
    let mut separators = 0;
    let mut idx = bytes.len();
    while idx > 0 {
        idx -= 1;
        match bytes[idx] {
            b'>' if idx == 0 || bytes[idx - 1] != b'-' => depth += 1,
            b'<' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && idx > 0 && bytes[idx - 1] == b':' => {
                separators += 1;
                if separators == 2 {
                    return &name[idx + 1..];
                }
                idx -= 1;
            },
            _ => {},
        }
    }
    name
}
