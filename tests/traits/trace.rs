//! Tests for tracing integration.

use std::io;
use std::sync::{Arc, Mutex};

use error_site::traits::{ResultExt, TraceResultExt};
use error_site::{err, wrap, WrappedResult};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn trace_emits_structured_fields() {
    let error = wrap!(err!("pool exhausted"), "reserving seat");
    let output = capture(|| error.trace());

    assert!(output.contains("ERROR"));
    assert!(output.contains("trace::trace_emits_structured_fields"));
    assert!(output.contains(&format!("fileline={}", error.site())));
    assert!(output.contains("reserving seat"));
    assert!(output.contains(r#""caused":"pool exhausted""#));
}

#[test]
fn trace_err_reports_failures_only() {
    let output = capture(|| {
        let ok: WrappedResult<u8> = Ok(1);
        assert_eq!(ok.trace_err().unwrap(), 1);
    });
    assert!(output.is_empty());

    let output = capture(|| {
        let failed: Result<(), io::Error> = Err(io::Error::other("socket closed"));
        assert!(failed.wrap_err_msg("sending frame").trace_err().is_err());
    });
    assert!(output.contains("socket closed"));
    assert!(output.contains("sending frame"));
}
