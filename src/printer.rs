//! Rendering of a [`Response`] for the terminal.
//!
//! Kept apart from `main.rs` so output can be tested without capturing
//! stdout.

use std::io::{ErrorKind, Write};

use crate::Response;

/// Write the compact JSON payload followed by the status code on one line.
///
/// # Examples
///
/// ```
/// use reqprobe::{Response, printer::write_response};
/// let resp = Response::new(serde_json::json!({"echo": true}), 200);
/// let mut buf = Vec::new();
/// write_response(&mut buf, &resp).expect("write");
/// assert_eq!(buf, b"{\"echo\":true} 200\n");
/// ```
///
/// # Errors
///
/// Returns any I/O error raised by `out`.
pub fn write_response<W: Write>(mut out: W, resp: &Response) -> std::io::Result<()> {
    writeln!(out, "{} {}", resp.payload(), resp.status())?;
    out.flush()
}

/// Whether `err` was caused by the reader of stdout going away.
#[must_use]
pub fn is_broken_pipe(err: &std::io::Error) -> bool {
    err.kind() == ErrorKind::BrokenPipe
}
