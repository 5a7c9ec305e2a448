//! In-memory line buffer used between rendering and output.
//!
//! Rows are first rendered into a [`LineBuffer`] (each line remembers its
//! indentation depth), then touched up in place, and only then flushed to the
//! caller's sink. Nothing reaches the sink until [`LineBuffer::flush`].

use crate::{Error, Result};
use std::io;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Line {
    indent: usize,
    text: String,
}

/// Ordered lines plus the current indentation depth.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<Line>,
    indent: usize,
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        LineBuffer {
            lines: Vec::with_capacity(capacity),
            indent: 0,
        }
    }

    pub fn inc_indent(&mut self) {
        self.indent += 1;
    }

    pub fn dec_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    #[must_use]
    pub fn indent_level(&self) -> usize {
        self.indent
    }

    /// Appends a line at the current depth.
    pub fn push_line(&mut self, text: impl Into<String>) {
        self.lines.push(Line {
            indent: self.indent,
            text: text.into(),
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of line `index`, without indentation.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|l| l.text.as_str())
    }

    /// Removes a trailing `separator` from line `index`. Returns whether
    /// anything was removed.
    pub fn strip_trailing(&mut self, index: usize, separator: &str) -> bool {
        match self.lines.get_mut(index) {
            Some(line) if !separator.is_empty() && line.text.ends_with(separator) => {
                let len = line.text.len() - separator.len();
                line.text.truncate(len);
                true
            }
            _ => false,
        }
    }

    /// Joins all lines with `\n`, indenting each by `depth * indent` spaces.
    /// A trailing newline follows the last line.
    #[must_use]
    pub fn to_text(&self, indent: usize) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&" ".repeat(line.indent * indent));
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }

    /// Writes the buffered text to `writer`.
    pub fn flush<W: io::Write>(&self, writer: &mut W, indent: usize) -> Result<()> {
        writer
            .write_all(self.to_text(indent).as_bytes())
            .map_err(|e| Error::io(&e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation_per_line() {
        let mut buf = LineBuffer::new();
        buf.push_line("a = [");
        buf.inc_indent();
        buf.push_line("[1],");
        buf.dec_indent();
        buf.push_line("];");

        assert_eq!(buf.len(), 3);
        assert_eq!(buf.to_text(2), "a = [\n  [1],\n];\n");
    }

    #[test]
    fn test_dec_indent_saturates() {
        let mut buf = LineBuffer::new();
        buf.dec_indent();
        assert_eq!(buf.indent_level(), 0);
    }

    #[test]
    fn test_strip_trailing() {
        let mut buf = LineBuffer::new();
        buf.push_line("[1],");
        assert!(buf.strip_trailing(0, ","));
        assert_eq!(buf.line(0), Some("[1]"));
        assert!(!buf.strip_trailing(0, ","));
        assert!(!buf.strip_trailing(5, ","));
    }

    #[test]
    fn test_flush_writes_everything() {
        let mut buf = LineBuffer::new();
        buf.push_line("x");
        let mut sink = Vec::new();
        buf.flush(&mut sink, 4).unwrap();
        assert_eq!(sink, b"x\n");
    }
}
