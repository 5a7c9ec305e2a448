//! Configuration options for table writers.
//!
//! [`WriterOptions`] controls the framing and layout shared by every backend:
//! indentation width, which structural rows are written, and how datetime
//! cells are rendered.
//!
//! ## Examples
//!
//! ```rust
//! use js_tablewriter::{to_string_with_options, Table, WriterOptions};
//!
//! let table = Table::new("points")
//!     .with_headers(["x", "y"])
//!     .with_rows(vec![vec![1.into(), 2.into()]]);
//!
//! let options = WriterOptions::new().with_indent(2).with_header(false);
//! let js = to_string_with_options(&table, options).unwrap();
//! assert_eq!(js, "const points = [\n  [1, 2]\n];\n");
//! ```

use crate::format::{DEFAULT_DATETIME_PATTERN, DEFAULT_MIN_YEAR};

/// Layout and rendering options for a table writer.
///
/// # Examples
///
/// ```rust
/// use js_tablewriter::WriterOptions;
///
/// let options = WriterOptions::new()
///     .with_indent(2)
///     .with_closing_row(false)
///     .with_datetime_instance_formatting(false);
/// assert_eq!(options.indent, 2);
/// assert!(!options.write_closing_row);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriterOptions {
    /// Spaces per indentation level.
    pub indent: usize,
    pub write_header: bool,
    pub write_opening_row: bool,
    pub write_closing_row: bool,
    /// Native datetime constructor (`new Date(...)`) instead of a quoted string.
    pub datetime_instance_formatting: bool,
    pub datetime_format: String,
    /// Datetimes before this year are written in their raw form.
    pub datetime_min_year: i32,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            indent: 4,
            write_header: true,
            write_opening_row: true,
            write_closing_row: true,
            datetime_instance_formatting: true,
            datetime_format: DEFAULT_DATETIME_PATTERN.to_string(),
            datetime_min_year: DEFAULT_MIN_YEAR,
        }
    }
}

impl WriterOptions {
    /// Creates default options (4-space indent, all framing rows, native datetimes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_header(mut self, write_header: bool) -> Self {
        self.write_header = write_header;
        self
    }

    #[must_use]
    pub fn with_opening_row(mut self, write_opening_row: bool) -> Self {
        self.write_opening_row = write_opening_row;
        self
    }

    #[must_use]
    pub fn with_closing_row(mut self, write_closing_row: bool) -> Self {
        self.write_closing_row = write_closing_row;
        self
    }

    #[must_use]
    pub fn with_datetime_instance_formatting(mut self, enabled: bool) -> Self {
        self.datetime_instance_formatting = enabled;
        self
    }

    /// Sets the chrono pattern used for datetime cells.
    #[must_use]
    pub fn with_datetime_format(mut self, pattern: impl Into<String>) -> Self {
        self.datetime_format = pattern.into();
        self
    }

    #[must_use]
    pub fn with_datetime_min_year(mut self, year: i32) -> Self {
        self.datetime_min_year = year;
        self
    }
}
