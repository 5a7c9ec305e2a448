//! Tables: a name, typed columns and a matrix of raw cells.
//!
//! ```rust
//! use js_tablewriter::{row, Table, TypeHint};
//!
//! let table = Table::new("Sample")
//!     .with_headers(["id", "price"])
//!     .with_type_hints([None, Some(TypeHint::RealNumber)])
//!     .with_rows(vec![row![1, 2], row![2, null]]);
//!
//! assert_eq!(table.columns().len(), 2);
//! assert_eq!(table.rows().len(), 2);
//! ```

use crate::classify::TypeHint;
use crate::ser::to_raw_value;
use crate::value::RawValue;
use crate::{Error, Result};
use indexmap::IndexMap;
use serde::Serialize;

/// A column header with its optional type hint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub type_hint: Option<TypeHint>,
    pub index: usize,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Column {
            name: name.into(),
            type_hint: None,
            index,
        }
    }
}

/// The input of one table write.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    rows: Vec<Vec<RawValue>>,
}

impl Table {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Table {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Replaces the columns with untyped headers.
    #[must_use]
    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = headers
            .into_iter()
            .enumerate()
            .map(|(index, name)| Column::new(name, index))
            .collect();
        self
    }

    /// Assigns type hints to columns by position. Extra hints are ignored.
    #[must_use]
    pub fn with_type_hints<I>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = Option<TypeHint>>,
    {
        for (column, hint) in self.columns.iter_mut().zip(hints) {
            column.type_hint = hint;
        }
        self
    }

    #[must_use]
    pub fn with_rows(mut self, rows: Vec<Vec<RawValue>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn push_row(&mut self, row: Vec<RawValue>) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<RawValue>] {
        &self.rows
    }

    /// Type hint of column `index`, if any.
    #[must_use]
    pub fn type_hint(&self, index: usize) -> Option<TypeHint> {
        self.columns.get(index).and_then(|c| c.type_hint)
    }

    /// Builds a table from serializable records.
    ///
    /// Struct and map records are keyed: headers come from the first record's
    /// fields and missing fields become null. Sequence and tuple records are
    /// positional and produce no headers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use js_tablewriter::{to_string, Table};
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Item { id: u32, label: Option<String> }
    ///
    /// let items = vec![
    ///     Item { id: 1, label: Some("one".to_string()) },
    ///     Item { id: 2, label: None },
    /// ];
    /// let table = Table::from_records("items", &items).unwrap();
    /// assert_eq!(table.headers(), vec!["id", "label"]);
    ///
    /// let js = to_string(&table).unwrap();
    /// assert!(js.contains("[2, null]"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedRecord`] when a record is a scalar, or when
    /// keyed and positional records are mixed.
    pub fn from_records<T>(name: impl Into<String>, records: &[T]) -> Result<Self>
    where
        T: Serialize,
    {
        let mut table = Table::new(name);
        let mut keyed: Option<bool> = None;

        for (index, record) in records.iter().enumerate() {
            match to_raw_value(record)? {
                RawValue::Map(map) => {
                    if keyed == Some(false) {
                        return Err(mixed_records(index));
                    }
                    if keyed.is_none() {
                        table = table.with_headers(map.keys().cloned());
                        keyed = Some(true);
                    }
                    let row = table.keyed_row(map);
                    table.rows.push(row);
                }
                RawValue::List(values) => {
                    if keyed == Some(true) {
                        return Err(mixed_records(index));
                    }
                    keyed = Some(false);
                    table.rows.push(values);
                }
                other => {
                    return Err(Error::unsupported_record(&format!(
                        "record {} is a scalar ({}), expected a struct, map or sequence",
                        index, other
                    )))
                }
            }
        }

        Ok(table)
    }

    fn keyed_row(&self, mut map: IndexMap<String, RawValue>) -> Vec<RawValue> {
        self.columns
            .iter()
            .map(|column| map.swap_remove(&column.name).unwrap_or(RawValue::Null))
            .collect()
    }
}

fn mixed_records(index: usize) -> Error {
    Error::unsupported_record(&format!(
        "record {} mixes keyed and positional records",
        index
    ))
}
