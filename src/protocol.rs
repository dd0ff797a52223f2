//! Streaming writer for the i3bar JSON protocol.
//!
//! The bar reads one endless JSON array from our stdout:
//!
//! ```text
//! {"version":1}
//! [
//! []
//! ,[{"full_text":"fs",...},...]
//! ,[...]
//! ```
//!
//! [`StreamWriter`] only ever appends. It never writes the closing `]` of the
//! top-level array, not on drop and not on error, because the consumer treats
//! the stream as open for as long as the process lives.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Protocol header line.
pub const HEADER: &str = r#"{"version":1}"#;

/// Append-only writer of status lines.
pub struct StreamWriter<W: Write> {
    out: W,
    lines: u64,
}

impl<W: Write> StreamWriter<W> {
    /// Writes the handshake, the array opener and the empty placeholder
    /// element, so every later line can start with a comma.
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "{HEADER}")?;
        writeln!(out, "[")?;
        writeln!(out, "[]")?;
        out.flush()?;
        Ok(Self { out, lines: 0 })
    }

    /// Appends one cycle's segments as `,[...]` and flushes.
    ///
    /// Only I/O errors are returned; a line that fails to serialize is
    /// replaced by a single error segment.
    pub fn write_line<S: Serialize + ?Sized>(&mut self, segments: &S) -> io::Result<()> {
        let body = match serde_json::to_string(segments) {
            Ok(body) => body,
            Err(e) => {
                warn!("failed to serialize status line: {}", e);
                serialization_error_line(&e)
            }
        };
        writeln!(self.out, ",{body}")?;
        self.out.flush()?;
        self.lines += 1;
        Ok(())
    }

    /// Number of status lines written after the header.
    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    /// Borrows the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

/// One-element array describing a serialization failure.
fn serialization_error_line(err: &serde_json::Error) -> String {
    let text = Value::String(format!("error: {err}"));
    format!(r#"[{{"full_text":{text}}}]"#)
}
