//! Macros that build [`WrappedError`](crate::WrappedError)s with a fully
//! resolved [`CallSite`](crate::CallSite).
//!
//! - [`macro@crate::call_site`] - Captures file, line, and the enclosing
//!   function's name at the point of expansion.
//! - [`macro@crate::err`] - Starts a chain from text (`New`).
//! - [`macro@crate::wrap`] - Wraps an error, optionally with a message
//!   (`Wrap` / `WrapWithMsg`).
//!
//! # Examples
//!
//! ```
//! use error_site::{err, wrap};
//!
//! fn lookup(id: u32) -> Result<(), error_site::WrappedError> {
//!     Err(wrap!(err!("no row for id {}", id), "looking up account"))
//! }
//!
//! let error = lookup(7).unwrap_err();
//! assert!(error.function().ends_with("lookup"));
//! assert_eq!(error.depth(), 2);
//! ```

/// Captures the current call site, including the enclosing function's name.
///
/// The function name is read from the type name of a marker item declared in
/// the expansion, then shortened to its last two path segments.
///
/// # Examples
///
/// ```
/// use error_site::call_site;
///
/// fn open_pool() -> error_site::CallSite {
///     call_site!()
/// }
///
/// assert!(open_pool().function().ends_with("open_pool"));
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(::core::file!(), ::core::line!(), {
            fn __site() {}
            $crate::__private::type_name_of_val(&__site)
        })
    };
}

/// Creates a [`WrappedError`](crate::WrappedError) around plain text.
///
/// A string literal is treated as a format string, so literal braces must be
/// doubled. Any other expression is used as the text as is.
///
/// # Examples
///
/// ```
/// use error_site::err;
///
/// let attempts = 3;
/// let e = err!("gave up after {} attempts", attempts);
/// assert!(e.to_string().starts_with(r#"{"caused":"gave up after 3 attempts","#));
///
/// let text = String::from("{raw}");
/// let e = err!(text);
/// assert!(e.to_string().starts_with(r#"{"caused":{raw},"#));
/// ```
#[macro_export]
macro_rules! err {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::WrappedError::new_at(
            $crate::call_site!(),
            $crate::__private::format!($fmt $(, $arg)*),
        )
    };
    ($text:expr $(,)?) => {
        $crate::WrappedError::new_at($crate::call_site!(), $text)
    };
}

/// Wraps an error in a [`WrappedError`](crate::WrappedError), optionally
/// adding a message.
///
/// - `wrap!(error)` wraps without a message
/// - `wrap!(error, "format {}", args..)` wraps with a formatted message
/// - `wrap!(error, message)` wraps with a message expression
///
/// # Examples
///
/// ```
/// use error_site::wrap;
///
/// let parse = "x".parse::<u8>().unwrap_err();
/// let e = wrap!(parse, "reading field {}", "port");
/// assert_eq!(e.message(), Some("reading field port"));
/// ```
#[macro_export]
macro_rules! wrap {
    ($error:expr $(,)?) => {
        $crate::WrappedError::wrap_at($crate::call_site!(), $error)
    };
    ($error:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::WrappedError::wrap_with_msg_at(
            $crate::call_site!(),
            $error,
            $crate::__private::format!($fmt $(, $arg)*),
        )
    };
    ($error:expr, $message:expr $(,)?) => {
        $crate::WrappedError::wrap_with_msg_at($crate::call_site!(), $error, $message)
    };
}
