//! # js_tablewriter
//!
//! Writes tabular data as source-code literals: a JavaScript array-of-arrays
//! bound to a variable.
//!
//! ```text
//! const sample = [
//!     ["id", "flag"],
//!     [1, true],
//!     [2, null]
//! ];
//! ```
//!
//! ## Pipeline
//!
//! Every cell goes through the same steps:
//!
//! 1. **Classification** ([`Classifier`]): the raw cell and the column's
//!    optional [`TypeHint`] decide a [`Tag`] and a normalized [`Value`].
//! 2. **Formatting** ([`FormatterRegistry`]): the tag selects the literal
//!    text. Each writer owns its registry, so overrides stay local.
//! 3. **Assembly** ([`TableWriter`]): rows are framed by the [`Backend`]
//!    (brackets, separators, opening and closing lines), buffered, touched
//!    up and flushed.
//!
//! ## Quick Start
//!
//! ```rust
//! use js_tablewriter::{row, to_string, Table};
//!
//! let table = Table::new("Sample")
//!     .with_headers(["id", "flag"])
//!     .with_rows(vec![row![1, true], row![2, null]]);
//!
//! let js = to_string(&table).unwrap();
//! assert_eq!(
//!     js,
//!     "const sample = [\n    [\"id\", \"flag\"],\n    [1, true],\n    [2, null]\n];\n"
//! );
//! ```
//!
//! ### Configuring the Writer
//!
//! ```rust
//! use js_tablewriter::{row, JavaScriptTableWriter, Table, Tag, WriterOptions};
//!
//! let mut writer = JavaScriptTableWriter::javascript(WriterOptions::new().with_indent(2));
//! writer.set_variable_declaration("let").unwrap();
//! writer.registry_mut().register_literal(Tag::NaN, "Number.NaN");
//!
//! let table = Table::new("readings")
//!     .with_headers(["value"])
//!     .with_rows(vec![row![f64::NAN]]);
//! assert_eq!(
//!     writer.dumps(&table).unwrap(),
//!     "let readings = [\n  [\"value\"],\n  [Number.NaN]\n];\n"
//! );
//! ```
//!
//! ### From Serializable Records
//!
//! ```rust
//! use js_tablewriter::{to_string, Table};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct City { name: &'static str, population: u32 }
//!
//! let cities = [City { name: "Oslo", population: 709_037 }];
//! let table = Table::from_records("Cities", &cities).unwrap();
//! assert!(to_string(&table).unwrap().contains("[\"Oslo\", 709037]"));
//! ```
//!
//! ## Logging
//!
//! Table writes run inside a `tracing` span and emit `debug` events; the
//! crate installs no subscriber.

#[macro_use]
pub mod macros;

pub mod classify;
pub mod error;
pub mod format;
pub mod javascript;
pub mod lines;
pub mod options;
pub mod ser;
pub mod table;
pub mod value;
pub mod writer;

pub use classify::{Classifier, StrictLevel, StrictLevelMap, TypeHint};
pub use error::{Error, Result};
pub use format::{DateTimeFormat, DateTimeStyle, FormatFn, FormatterRegistry, Literals};
pub use javascript::{sanitize_js_var_name, JavaScript, JavaScriptTableWriter, VariableDeclaration};
pub use lines::LineBuffer;
pub use options::WriterOptions;
pub use ser::{to_raw_value, RawValueSerializer};
pub use table::{Column, Table};
pub use value::{RawValue, Tag, Timestamp, Value};
pub use writer::{Backend, TableWriter};

use std::io;

/// Render a table as a JavaScript variable declaration with default options.
///
/// # Errors
///
/// Returns an error if the table name is empty, the table has no data, or a
/// row is narrower or wider than the headers.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(table: &Table) -> Result<String> {
    to_string_with_options(table, WriterOptions::default())
}

/// Render a table as a JavaScript variable declaration with custom options.
///
/// # Errors
///
/// See [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(table: &Table, options: WriterOptions) -> Result<String> {
    JavaScriptTableWriter::javascript(options).dumps(table)
}

/// Write a table as a JavaScript variable declaration to `writer`.
///
/// # Examples
///
/// ```rust
/// use js_tablewriter::{row, to_writer, Table};
///
/// let table = Table::new("t").with_headers(["a"]).with_rows(vec![row!["x"]]);
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &table).unwrap();
/// assert!(buffer.ends_with(b"];\n"));
/// ```
///
/// # Errors
///
/// Returns the errors of [`to_string`], or [`Error::Io`] when writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, table: &Table) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, table, WriterOptions::default())
}

/// Write a table to `writer` with custom options.
///
/// # Errors
///
/// See [`to_writer`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(writer: W, table: &Table, options: WriterOptions) -> Result<()>
where
    W: io::Write,
{
    JavaScriptTableWriter::javascript(options).write_table(table, writer)
}
