//! Error types for table writing.
//!
//! Errors fall into three groups:
//!
//! - **Configuration errors**: rejected settings such as an unknown variable
//!   declaration keyword. Raised by the setter, never silently corrected.
//! - **Precondition errors**: the table cannot be written at all (empty name,
//!   no data, ragged rows). Raised before any output reaches the sink.
//! - **I/O errors**: the sink refused the rendered text.
//!
//! A single cell that cannot be represented faithfully is *not* an error; it
//! degrades to a fallback literal instead.
//!
//! ## Examples
//!
//! ```rust
//! use js_tablewriter::{to_string, Error, Table};
//!
//! let table = Table::new("").with_headers(["a"]).with_rows(vec![vec![1.into()]]);
//! match to_string(&table) {
//!     Err(Error::EmptyTableName) => {}
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while configuring a writer or
/// writing a table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The variable declaration keyword is not one of `var`, `let` or `const`.
    #[error("declaration must be either var, let or const, found {0:?}")]
    InvalidVariableDeclaration(String),

    /// The table name is empty.
    #[error("table name must not be empty")]
    EmptyTableName,

    /// Both the headers and the value matrix are empty.
    #[error("table data must not be empty: headers and rows are both empty")]
    EmptyTableData,

    /// Headers are required by the requested write mode.
    #[error("headers must not be empty")]
    EmptyHeader,

    /// A row does not have as many cells as there are columns.
    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A record could not be turned into a table row.
    #[error("unsupported record: {0}")]
    UnsupportedRecord(String),

    /// A value that has no raw cell representation.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// IO error while writing to the sink
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a ragged-row error for `row` (zero-based, counted over data rows).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use js_tablewriter::Error;
    ///
    /// let err = Error::ragged_row(3, 2, 1);
    /// assert_eq!(err.to_string(), "row 3 has 1 values, expected 2");
    /// ```
    pub fn ragged_row(row: usize, expected: usize, found: usize) -> Self {
        Error::RaggedRow {
            row,
            expected,
            found,
        }
    }

    /// Creates an unsupported-record error.
    pub fn unsupported_record(msg: &str) -> Self {
        Error::UnsupportedRecord(msg.to_string())
    }

    /// Creates an unsupported type error for values that cannot become cells.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for sink write failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
