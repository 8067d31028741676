//! Text rendering for [`WrappedError`].
//!
//! The wire format is a single-line JSON object with keys in fixed order:
//! `caused`, `funcname`, `fileline`, and `message` when one is set. A cause
//! whose text starts with `{` is taken to be an already rendered object and is
//! spliced in unquoted; [`write_cause`] is the only place that decides this.

use alloc::string::ToString;
use core::fmt::{self, Write};

use crate::types::{Cause, WrappedError};

const INDENT: &str = "  ";

pub(crate) fn write_json<W>(error: &WrappedError, out: &mut W) -> fmt::Result
where
    W: Write + ?Sized,
{
    out.write_str("{\"caused\":")?;
    write_cause(error.cause(), out)?;

    out.write_str(",\"funcname\":")?;
    write_quoted(out, error.function())?;

    out.write_str(",\"fileline\":")?;
    write_quoted(out, &error.site().to_string())?;

    if let Some(message) = error.message() {
        out.write_str(",\"message\":")?;
        write_quoted(out, message)?;
    }
    out.write_char('}')
}

fn write_cause<W>(cause: &Cause, out: &mut W) -> fmt::Result
where
    W: Write + ?Sized,
{
    if let Cause::Nested(nested) = cause {
        return write_json(nested, out);
    }

    let text = cause.to_string();
    if text.starts_with('{') {
        out.write_str(&text)
    } else {
        write_quoted(out, &text)
    }
}

fn write_quoted<W>(out: &mut W, text: &str) -> fmt::Result
where
    W: Write + ?Sized,
{
    let quoted = serde_json::to_string(text).map_err(|_| fmt::Error)?;
    out.write_str(&quoted)
}

/// One line per layer, indented by depth, with the innermost cause last:
///
/// ```text
/// handler.rs:30 in api::handler: loading profile
///   db.rs:10 in db::query
///     connection refused
/// ```
pub(crate) fn write_cascade<W>(error: &WrappedError, out: &mut W) -> fmt::Result
where
    W: Write + ?Sized,
{
    let mut current = error;
    let mut depth = 0;
    loop {
        write_indent(out, depth)?;
        write!(out, "{} in {}", current.site(), current.function())?;
        if let Some(message) = current.message() {
            write!(out, ": {message}")?;
        }
        out.write_char('\n')?;
        depth += 1;

        match current.cause() {
            Cause::Nested(nested) => current = &**nested,
            other => {
                write_indent(out, depth)?;
                return write!(out, "{other}");
            },
        }
    }
}

fn write_indent<W>(out: &mut W, depth: usize) -> fmt::Result
where
    W: Write + ?Sized,
{
    for _ in 0..depth {
        out.write_str(INDENT)?;
    }
    Ok(())
}
