//! Redaction of form values from formatted log output.
//!
//! Log lines are buffered until a newline, then every `key: value` or
//! `key=value` pair whose key names a form field has its value replaced
//! with `[REDACTED]`. Call sites are expected not to log payloads at all;
//! this catches text that slips through inside error messages.

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{self, Write};
use tracing_subscriber::fmt::MakeWriter;

/// Placeholder written in place of a redacted value.
pub const REDACTED: &str = "[REDACTED]";

/// Lines longer than this are cut before scanning.
const MAX_LINE_BYTES: usize = 16 * 1024;

/// Form field names, as they appear on the wire.
static FIELD_VALUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)(?P<key>"?\b(?:gender|age|bmi|hypertension|heart_disease|ever_married|work_type|residence_type|avg_glucose_level|smoking_status)"?\s*[:=]\s*)(?:"[^"]*"|[^\s,}\]]+)"#,
    )
    .expect("Invalid field value regex pattern")
});

/// Replace the values of form fields in `input`.
pub fn sanitize(input: &str) -> String {
    let (line, truncated) = truncate_to_char_boundary(input, MAX_LINE_BYTES);
    let mut out = FIELD_VALUE_REGEX
        .replace_all(line, format!("${{key}}{}", REDACTED).as_str())
        .into_owned();
    if truncated {
        out.push_str(" [TRUNCATED]\n");
    }
    out
}

fn truncate_to_char_boundary(input: &str, max_bytes: usize) -> (&str, bool) {
    if input.len() <= max_bytes {
        return (input, false);
    }
    let mut end = max_bytes;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    (&input[..end], true)
}

/// `MakeWriter` that sanitizes every line before handing it to `M`.
#[derive(Debug, Clone)]
pub struct SanitizingMakeWriter<M> {
    inner: M,
}

impl<M> SanitizingMakeWriter<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<'a, M> MakeWriter<'a> for SanitizingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = SanitizingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        SanitizingWriter {
            inner: self.inner.make_writer(),
            buffer: Vec::new(),
        }
    }
}

/// Line-buffering writer produced by [`SanitizingMakeWriter`].
pub struct SanitizingWriter<W: Write> {
    inner: W,
    buffer: Vec<u8>,
}

impl<W: Write> SanitizingWriter<W> {
    fn flush_lines(&mut self) -> io::Result<()> {
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            let sanitized = sanitize(&String::from_utf8_lossy(&line));
            self.inner.write_all(sanitized.as_bytes())?;
        }
        Ok(())
    }

    fn flush_rest(&mut self) -> io::Result<()> {
        self.flush_lines()?;
        if !self.buffer.is_empty() {
            let sanitized = sanitize(&String::from_utf8_lossy(&self.buffer));
            self.buffer.clear();
            self.inner.write_all(sanitized.as_bytes())?;
        }
        Ok(())
    }
}

impl<W: Write> Write for SanitizingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        self.flush_lines()?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_rest()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SanitizingWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_rest();
    }
}
