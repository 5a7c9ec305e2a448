//! The generic table writer.
//!
//! [`TableWriter`] owns the control flow every source-code backend shares:
//! validate the table, emit the opening fragment, one bracketed line per row
//! (header first), drop the separator after the last row, emit the closing
//! fragment. A [`Backend`] supplies the target-language pieces.
//!
//! Rendering happens in two phases. Rows are rendered into a [`LineBuffer`]
//! first; the buffer is then touched up and flushed to the sink in one go, so
//! a failing precondition never leaves partial output behind.
//!
//! ```rust
//! use js_tablewriter::{row, JavaScript, Table, TableWriter, WriterOptions};
//!
//! let writer = TableWriter::new(JavaScript::default(), WriterOptions::new());
//! let table = Table::new("Sample")
//!     .with_headers(["id", "flag"])
//!     .with_rows(vec![row![1, true], row![2, null]]);
//!
//! assert_eq!(
//!     writer.dumps(&table).unwrap(),
//!     "const sample = [\n    [\"id\", \"flag\"],\n    [1, true],\n    [2, null]\n];\n"
//! );
//! ```

use crate::classify::{Classifier, StrictLevelMap};
use crate::format::{quote_string, DateTimeFormat, DateTimeStyle, FormatterRegistry, Literals};
use crate::lines::LineBuffer;
use crate::options::WriterOptions;
use crate::table::Table;
use crate::value::{RawValue, Tag, Value};
use crate::{Error, Result};
use std::io;
use tracing::debug;

/// Target-language pieces of a source-code table writer.
pub trait Backend {
    /// Short name of the output format.
    fn format_name(&self) -> &'static str;

    /// Turns a table name into an identifier valid in the target language.
    fn sanitize_name(&self, name: &str) -> String;

    /// First line of the output, e.g. `const name = [`.
    fn opening_row(&self, variable_name: &str) -> String;

    /// Last line of the output, e.g. `];`.
    fn closing_row(&self) -> String;

    /// Bare tokens for null, booleans and the special floats.
    fn literals(&self) -> Literals {
        Literals::default()
    }

    /// Constructor wrapping datetime literals in native mode. `None` writes
    /// datetimes as quoted strings regardless of the options.
    fn datetime_constructor(&self) -> Option<&'static str> {
        None
    }

    /// Strict levels used when classifying this backend's cells.
    fn strict_levels(&self) -> StrictLevelMap {
        StrictLevelMap::default()
    }

    fn row_open(&self) -> &'static str {
        "["
    }

    fn row_close(&self) -> &'static str {
        "]"
    }

    fn field_separator(&self) -> &'static str {
        ", "
    }

    /// Appended after every row line but the last one.
    fn row_separator(&self) -> &'static str {
        ","
    }
}

/// Assembles tables for a [`Backend`].
#[derive(Clone, Debug)]
pub struct TableWriter<B> {
    backend: B,
    options: WriterOptions,
    registry: FormatterRegistry,
    classifier: Classifier,
}

impl<B: Backend> TableWriter<B> {
    /// Creates a writer whose formatter registry and classifier are derived
    /// from `backend` and `options`.
    pub fn new(backend: B, options: WriterOptions) -> Self {
        let registry = FormatterRegistry::new()
            .with_literals(backend.literals())
            .with_datetime_format(datetime_format(&backend, &options));
        let classifier = Classifier::new().with_strict_levels(backend.strict_levels());

        TableWriter {
            backend,
            options,
            registry,
            classifier,
        }
    }

    /// Replaces the formatter registry. Datetime settings of the options still
    /// apply to it.
    #[must_use]
    pub fn with_registry(mut self, registry: FormatterRegistry) -> Self {
        self.registry = registry;
        self.registry
            .set_datetime_format(datetime_format(&self.backend, &self.options));
        self
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[must_use]
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: WriterOptions) {
        self.registry
            .set_datetime_format(datetime_format(&self.backend, &options));
        self.options = options;
    }

    #[must_use]
    pub fn registry(&self) -> &FormatterRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut FormatterRegistry {
        &mut self.registry
    }

    #[must_use]
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn classifier_mut(&mut self) -> &mut Classifier {
        &mut self.classifier
    }

    /// Overrides the rendering of `tag` for this writer.
    pub fn register_formatter<F>(&mut self, tag: Tag, f: F)
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.registry.register(tag, f);
    }

    /// Sanitized variable name for `table`.
    #[must_use]
    pub fn variable_name(&self, table: &Table) -> String {
        self.backend.sanitize_name(table.name())
    }

    /// Renders `table` to a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTableName`], [`Error::EmptyTableData`] or
    /// [`Error::RaggedRow`] when the table cannot be written.
    pub fn dumps(&self, table: &Table) -> Result<String> {
        let lines = self.render(table)?;
        Ok(lines.to_text(self.options.indent))
    }

    /// Renders `table` and writes it to `writer`. Nothing is written when
    /// validation fails.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`TableWriter::dumps`], or
    /// [`Error::Io`] when the sink fails.
    pub fn write_table<W: io::Write>(&self, table: &Table, mut writer: W) -> Result<()> {
        let lines = self.render(table)?;
        lines.flush(&mut writer, self.options.indent)
    }

    /// Writes `table` followed by further row chunks, flushing after each
    /// chunk.
    ///
    /// The opening row goes out with the table's own rows, the closing row
    /// after the last chunk, and only the very last row loses its separator.
    /// Headers are required. A chunk that fails validation stops the write
    /// after the earlier chunks have been flushed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use js_tablewriter::{row, JavaScript, Table, TableWriter, WriterOptions};
    ///
    /// let writer = TableWriter::new(JavaScript::default(), WriterOptions::new().with_indent(2));
    /// let table = Table::new("log").with_headers(["n"]).with_rows(vec![row![1]]);
    ///
    /// let mut out = Vec::new();
    /// writer
    ///     .write_table_iter(&table, vec![vec![row![2]], vec![row![3]]], &mut out)
    ///     .unwrap();
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "const log = [\n  [\"n\"],\n  [1],\n  [2],\n  [3]\n];\n"
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTableName`], [`Error::EmptyHeader`],
    /// [`Error::RaggedRow`] or [`Error::Io`].
    pub fn write_table_iter<I, W>(&self, table: &Table, chunks: I, mut writer: W) -> Result<()>
    where
        I: IntoIterator<Item = Vec<Vec<RawValue>>>,
        W: io::Write,
    {
        if table.name().is_empty() {
            return Err(Error::EmptyTableName);
        }
        if table.columns().is_empty() {
            return Err(Error::EmptyHeader);
        }

        let span = tracing::info_span!(
            "tablewriter.write_table_iter",
            format = self.backend.format_name(),
            table = table.name(),
            column_count = table.columns().len()
        );
        let _span_guard = span.entered();

        let width = table.columns().len();
        let mut written_rows = 0usize;
        let mut chunk_count = 0usize;

        let first = table.rows().to_vec();
        let mut chunks = std::iter::once(first)
            .chain(chunks.into_iter().filter(|rows| !rows.is_empty()))
            .peekable();

        while let Some(rows) = chunks.next() {
            check_width(&rows, width, written_rows)?;

            let is_first = chunk_count == 0;
            let is_last = chunks.peek().is_none();

            let mut lines = LineBuffer::with_capacity(rows.len() + 3);
            if is_first {
                self.render_opening(table, &mut lines);
            } else {
                lines.inc_indent();
            }
            self.render_rows(table, &rows, written_rows, &mut lines);
            if is_last {
                self.render_closing(&mut lines);
            }

            lines.flush(&mut writer, self.options.indent)?;
            written_rows += rows.len();
            chunk_count += 1;
        }

        debug!(
            rows = written_rows,
            chunks = chunk_count,
            "split table write completed"
        );
        Ok(())
    }

    /// Phase one and two of a table write: validated, rendered, touched up.
    fn render(&self, table: &Table) -> Result<LineBuffer> {
        let width = validate(table)?;

        let span = tracing::info_span!(
            "tablewriter.write_table",
            format = self.backend.format_name(),
            table = table.name(),
            row_count = table.rows().len(),
            column_count = width
        );
        let _span_guard = span.entered();

        let mut lines = LineBuffer::with_capacity(table.rows().len() + 3);
        self.render_opening(table, &mut lines);
        self.render_rows(table, table.rows(), 0, &mut lines);
        self.render_closing(&mut lines);

        debug!(lines = lines.len(), "table rendered");
        Ok(lines)
    }

    /// Opening fragment and header row; leaves the buffer indented for rows.
    fn render_opening(&self, table: &Table, lines: &mut LineBuffer) {
        if self.options.write_opening_row {
            let variable_name = self.variable_name(table);
            lines.push_line(self.backend.opening_row(&variable_name));
        }
        lines.inc_indent();

        if self.options.write_header && !table.columns().is_empty() {
            let fields: Vec<String> = table
                .columns()
                .iter()
                .map(|column| quote_string(&column.name))
                .collect();
            lines.push_line(self.row_line(&fields));
        }
    }

    fn render_rows(
        &self,
        table: &Table,
        rows: &[Vec<RawValue>],
        first_row: usize,
        lines: &mut LineBuffer,
    ) {
        for (offset, row) in rows.iter().enumerate() {
            let fields: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(col, raw)| {
                    let value = self.classifier.classify(raw, table.type_hint(col));
                    if let Value::Other(repr) = &value {
                        debug!(row = first_row + offset, column = col, repr = %repr, "cell degraded to other");
                    }
                    self.registry.format(&value)
                })
                .collect();
            lines.push_line(self.row_line(&fields));
        }
    }

    /// Strips the separator of the last row line and writes the closing fragment.
    fn render_closing(&self, lines: &mut LineBuffer) {
        lines.dec_indent();
        if !self.options.write_closing_row {
            return;
        }
        if let Some(last) = lines.len().checked_sub(1) {
            lines.strip_trailing(last, self.backend.row_separator());
        }
        lines.push_line(self.backend.closing_row());
    }

    fn row_line(&self, fields: &[String]) -> String {
        let mut line = String::with_capacity(fields.iter().map(|f| f.len() + 2).sum::<usize>() + 3);
        line.push_str(self.backend.row_open());
        line.push_str(&fields.join(self.backend.field_separator()));
        line.push_str(self.backend.row_close());
        line.push_str(self.backend.row_separator());
        line
    }
}

fn datetime_format<B: Backend>(backend: &B, options: &WriterOptions) -> DateTimeFormat {
    let style = match backend.datetime_constructor() {
        Some(constructor) if options.datetime_instance_formatting => {
            DateTimeStyle::Native { constructor }
        }
        _ => DateTimeStyle::Quoted,
    };
    DateTimeFormat {
        style,
        pattern: options.datetime_format.clone(),
        min_year: options.datetime_min_year,
    }
}

/// Checks the preconditions of a table write and returns the row width.
fn validate(table: &Table) -> Result<usize> {
    if table.name().is_empty() {
        return Err(Error::EmptyTableName);
    }
    if table.columns().is_empty() && table.rows().is_empty() {
        return Err(Error::EmptyTableData);
    }

    let width = if table.columns().is_empty() {
        table.rows()[0].len()
    } else {
        table.columns().len()
    };
    if width == 0 {
        return Err(Error::EmptyTableData);
    }
    check_width(table.rows(), width, 0)?;
    Ok(width)
}

fn check_width(rows: &[Vec<RawValue>], width: usize, first_row: usize) -> Result<()> {
    match rows.iter().position(|row| row.len() != width) {
        Some(index) => Err(Error::ragged_row(first_row + index, width, rows[index].len())),
        None => Ok(()),
    }
}
