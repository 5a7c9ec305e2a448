//! Raw cell input and classified cell values.
//!
//! Two enums describe a table cell at the two ends of the pipeline:
//!
//! - [`RawValue`]: what the caller hands in. It mirrors the external type
//!   system of a value matrix (null, bool, integer, float, string, datetime)
//!   plus the nested shapes a row may accidentally contain.
//! - [`Value`]: what the classifier produces. Its variant *is* the cell's
//!   [`Tag`] and its payload is the normalized data the formatter renders.
//!
//! ## Creating Raw Values
//!
//! ```rust
//! use js_tablewriter::RawValue;
//!
//! let cells: Vec<RawValue> = vec![
//!     1.into(),
//!     2.5.into(),
//!     "text".into(),
//!     true.into(),
//!     None::<i64>.into(),
//!     f64::INFINITY.into(),
//! ];
//! assert!(cells[4].is_null());
//! ```
//!
//! ## Tags
//!
//! ```rust
//! use js_tablewriter::{Tag, Value};
//!
//! assert_eq!(Value::Integer(3).tag(), Tag::Integer);
//! assert_eq!(Value::Infinity { negative: true }.tag(), Tag::Infinity);
//! ```

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Utc};
use indexmap::IndexMap;
use std::fmt;

/// A cell as supplied by the caller, before classification.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum RawValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    DateTime(DateTime<FixedOffset>),
    NaiveDateTime(NaiveDateTime),
    List(Vec<RawValue>),
    Map(IndexMap<String, RawValue>),
}

impl RawValue {
    /// Returns `true` if the value is the null sentinel.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Returns `true` for nested shapes that cannot be a single cell literal.
    #[inline]
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        matches!(self, RawValue::List(_) | RawValue::Map(_))
    }

    /// If the value is a string, returns it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => write!(f, "null"),
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Integer(i) => write!(f, "{}", i),
            RawValue::Float(fl) => write!(f, "{}", fl),
            RawValue::String(s) => write!(f, "{}", s),
            RawValue::DateTime(dt) => write!(f, "{}", Timestamp::Aware(*dt)),
            RawValue::NaiveDateTime(dt) => write!(f, "{}", dt),
            RawValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            RawValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, item)?;
                }
                write!(f, "}}")
            }
        }
    }
}

macro_rules! raw_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawValue {
                fn from(value: $t) -> Self {
                    RawValue::Integer(value as i64)
                }
            }
        )*
    };
}

raw_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for RawValue {
    fn from(value: u64) -> Self {
        if value <= i64::MAX as u64 {
            RawValue::Integer(value as i64)
        } else {
            RawValue::Float(value as f64)
        }
    }
}

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        RawValue::Float(value as f64)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::String(value)
    }
}

impl From<char> for RawValue {
    fn from(value: char) -> Self {
        RawValue::String(value.to_string())
    }
}

impl From<DateTime<FixedOffset>> for RawValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        RawValue::DateTime(value)
    }
}

impl From<DateTime<Utc>> for RawValue {
    fn from(value: DateTime<Utc>) -> Self {
        RawValue::DateTime(value.fixed_offset())
    }
}

impl From<NaiveDateTime> for RawValue {
    fn from(value: NaiveDateTime) -> Self {
        RawValue::NaiveDateTime(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Null, Into::into)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(value: Vec<T>) -> Self {
        RawValue::List(value.into_iter().map(Into::into).collect())
    }
}

/// The semantic type of a classified cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Null,
    Bool,
    Integer,
    Float,
    Infinity,
    NaN,
    DateTime,
    String,
    Other,
}

impl Tag {
    /// All tags, in classification order.
    pub const ALL: [Tag; 9] = [
        Tag::Null,
        Tag::Bool,
        Tag::Integer,
        Tag::Float,
        Tag::Infinity,
        Tag::NaN,
        Tag::DateTime,
        Tag::String,
        Tag::Other,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tag::Null => "null",
            Tag::Bool => "bool",
            Tag::Integer => "integer",
            Tag::Float => "float",
            Tag::Infinity => "infinity",
            Tag::NaN => "nan",
            Tag::DateTime => "datetime",
            Tag::String => "string",
            Tag::Other => "other",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A datetime cell, with or without a UTC offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Timestamp {
    Naive(NaiveDateTime),
    Aware(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Calendar year of the local (wall clock) time.
    #[must_use]
    pub fn year(&self) -> i32 {
        match self {
            Timestamp::Naive(dt) => dt.year(),
            Timestamp::Aware(dt) => dt.year(),
        }
    }

    #[must_use]
    pub const fn has_offset(&self) -> bool {
        matches!(self, Timestamp::Aware(_))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Naive(dt) => write!(f, "{}", dt),
            Timestamp::Aware(dt) => write!(f, "{}", dt.format(AWARE_DISPLAY_FORMAT)),
        }
    }
}

/// Offset written without a separating space, e.g. `2017-01-01 00:00:00+09:00`.
const AWARE_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%:z";

/// A classified cell. The variant is the cell's [`Tag`], the payload its
/// normalized data.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    /// Always finite.
    Float(f64),
    Infinity {
        negative: bool,
    },
    NaN,
    DateTime(Timestamp),
    String(String),
    /// Opaque display form of a value no other tag accepts.
    Other(String),
}

impl Value {
    /// Returns the tag that selects this value's formatter.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            Value::Null => Tag::Null,
            Value::Bool(_) => Tag::Bool,
            Value::Integer(_) => Tag::Integer,
            Value::Float(_) => Tag::Float,
            Value::Infinity { .. } => Tag::Infinity,
            Value::NaN => Tag::NaN,
            Value::DateTime(_) => Tag::DateTime,
            Value::String(_) => Tag::String,
            Value::Other(_) => Tag::Other,
        }
    }

    /// Normalizes a float into `Float`, `Infinity` or `NaN`.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Value::NaN
        } else if value.is_infinite() {
            Value::Infinity {
                negative: value.is_sign_negative(),
            }
        } else {
            Value::Float(value)
        }
    }

    /// Plain text of the value, without any quoting.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Infinity { negative: false } => "Infinity".to_string(),
            Value::Infinity { negative: true } => "-Infinity".to_string(),
            Value::NaN => "NaN".to_string(),
            Value::DateTime(ts) => ts.to_string(),
            Value::String(s) | Value::Other(s) => s.clone(),
        }
    }
}
