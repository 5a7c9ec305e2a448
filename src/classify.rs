//! Per-cell type inference.
//!
//! The [`Classifier`] turns a [`RawValue`] into a tagged [`Value`]. It is
//! total: every input gets exactly one tag, and anything it does not
//! understand becomes [`Value::Other`] rather than an error.
//!
//! Two knobs steer inference:
//!
//! - A per-column [`TypeHint`] asks for a specific type. The classifier tries
//!   the conversion first and falls back to plain inference when it fails.
//! - A [`StrictLevelMap`] decides, per tag, whether *text* may be
//!   reinterpreted as that type (`"42"` as an integer, `"true"` as a bool).
//!
//! ```rust
//! use js_tablewriter::{Classifier, RawValue, StrictLevel, StrictLevelMap, Tag, TypeHint, Value};
//!
//! let classifier = Classifier::new();
//! assert_eq!(classifier.classify(&RawValue::from("42"), None), Value::Integer(42));
//! assert_eq!(
//!     classifier.classify(&RawValue::from(42), Some(TypeHint::String)),
//!     Value::String("42".to_string())
//! );
//!
//! let strict = Classifier::new()
//!     .with_strict_levels(StrictLevelMap::new().with(Tag::Integer, StrictLevel::Strict));
//! assert_eq!(strict.classify(&RawValue::from("42"), None), Value::String("42".to_string()));
//! ```

use crate::value::{RawValue, Tag, Timestamp, Value};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// A column-level request for a specific cell type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeHint {
    Integer,
    RealNumber,
    Bool,
    String,
    DateTime,
}

/// How eagerly string cells are reinterpreted as another type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StrictLevel {
    /// Text that parses as the type is classified as the type.
    #[default]
    Lenient,
    /// Only genuine values of the type are classified as the type.
    Strict,
}

/// Strict level per tag. Tags with no textual form (null, datetime, string,
/// other) are always strict.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct StrictLevelMap {
    bool: StrictLevel,
    integer: StrictLevel,
    float: StrictLevel,
    infinity: StrictLevel,
    nan: StrictLevel,
}

impl StrictLevelMap {
    /// Lenient for bool, integer, float, infinity and NaN.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, tag: Tag) -> StrictLevel {
        match tag {
            Tag::Bool => self.bool,
            Tag::Integer => self.integer,
            Tag::Float => self.float,
            Tag::Infinity => self.infinity,
            Tag::NaN => self.nan,
            Tag::Null | Tag::DateTime | Tag::String | Tag::Other => StrictLevel::Strict,
        }
    }

    /// Sets the level for `tag`. Ignored for tags that are always strict.
    pub fn set(&mut self, tag: Tag, level: StrictLevel) {
        match tag {
            Tag::Bool => self.bool = level,
            Tag::Integer => self.integer = level,
            Tag::Float => self.float = level,
            Tag::Infinity => self.infinity = level,
            Tag::NaN => self.nan = level,
            Tag::Null | Tag::DateTime | Tag::String | Tag::Other => {}
        }
    }

    #[must_use]
    pub fn with(mut self, tag: Tag, level: StrictLevel) -> Self {
        self.set(tag, level);
        self
    }

    fn is_lenient(&self, tag: Tag) -> bool {
        self.get(tag) == StrictLevel::Lenient
    }
}

/// Classifies raw cells into tagged values.
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    strict_levels: StrictLevelMap,
}

impl Classifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_strict_levels(mut self, strict_levels: StrictLevelMap) -> Self {
        self.strict_levels = strict_levels;
        self
    }

    #[must_use]
    pub fn strict_levels(&self) -> &StrictLevelMap {
        &self.strict_levels
    }

    pub fn strict_levels_mut(&mut self) -> &mut StrictLevelMap {
        &mut self.strict_levels
    }

    /// Classifies `raw`, honoring `hint` when the conversion succeeds.
    #[must_use]
    pub fn classify(&self, raw: &RawValue, hint: Option<TypeHint>) -> Value {
        if raw.is_null() {
            return Value::Null;
        }

        if let Some(hint) = hint {
            if let Some(value) = convert_hinted(raw, hint) {
                return value;
            }
        }

        self.infer(raw)
    }

    fn infer(&self, raw: &RawValue) -> Value {
        match raw {
            RawValue::Null => Value::Null,
            RawValue::Bool(b) => Value::Bool(*b),
            RawValue::Integer(i) => Value::Integer(*i),
            RawValue::Float(f) => Value::from_f64(*f),
            RawValue::DateTime(dt) => Value::DateTime(Timestamp::Aware(*dt)),
            RawValue::NaiveDateTime(dt) => Value::DateTime(Timestamp::Naive(*dt)),
            RawValue::String(s) => self.infer_str(s),
            RawValue::List(_) | RawValue::Map(_) => Value::Other(raw.to_string()),
        }
    }

    fn infer_str(&self, s: &str) -> Value {
        let levels = &self.strict_levels;

        if levels.is_lenient(Tag::Bool) {
            if let Some(b) = parse_bool(s) {
                return Value::Bool(b);
            }
        }
        if levels.is_lenient(Tag::Infinity) {
            if let Some(negative) = parse_infinity(s) {
                return Value::Infinity { negative };
            }
        }
        if levels.is_lenient(Tag::NaN) && s.eq_ignore_ascii_case("nan") {
            return Value::NaN;
        }
        if levels.is_lenient(Tag::Integer) {
            if let Ok(i) = s.parse::<i64>() {
                return Value::Integer(i);
            }
        }
        if levels.is_lenient(Tag::Float) {
            if let Some(f) = parse_finite_f64(s) {
                return Value::Float(f);
            }
        }

        Value::String(s.to_string())
    }
}

fn convert_hinted(raw: &RawValue, hint: TypeHint) -> Option<Value> {
    match hint {
        TypeHint::Integer => match raw {
            RawValue::Integer(i) => Some(Value::Integer(*i)),
            RawValue::Float(f) => float_to_i64(*f).map(Value::Integer),
            RawValue::String(s) => s.trim().parse::<i64>().ok().map(Value::Integer),
            _ => None,
        },
        TypeHint::RealNumber => match raw {
            RawValue::Integer(i) => Some(Value::Float(*i as f64)),
            RawValue::Float(f) => Some(Value::from_f64(*f)),
            RawValue::String(s) => {
                let s = s.trim();
                if let Some(negative) = parse_infinity(s) {
                    Some(Value::Infinity { negative })
                } else {
                    s.parse::<f64>().ok().map(Value::from_f64)
                }
            }
            _ => None,
        },
        TypeHint::Bool => match raw {
            RawValue::Bool(b) => Some(Value::Bool(*b)),
            RawValue::String(s) => parse_bool(s.trim()).map(Value::Bool),
            _ => None,
        },
        TypeHint::String => {
            if raw.is_nested() {
                None
            } else {
                Some(Value::String(raw.to_string()))
            }
        }
        TypeHint::DateTime => match raw {
            RawValue::DateTime(dt) => Some(Value::DateTime(Timestamp::Aware(*dt))),
            RawValue::NaiveDateTime(dt) => Some(Value::DateTime(Timestamp::Naive(*dt))),
            RawValue::String(s) => parse_timestamp(s.trim()).map(Value::DateTime),
            RawValue::Integer(secs) => DateTime::from_timestamp(*secs, 0)
                .map(|dt| Value::DateTime(Timestamp::Aware(dt.fixed_offset()))),
            _ => None,
        },
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Returns the sign of an infinity spelling (`inf`, `-Infinity`, ...).
fn parse_infinity(s: &str) -> Option<bool> {
    let (negative, body) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity") {
        Some(negative)
    } else {
        None
    }
}

fn parse_finite_f64(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn float_to_i64(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

fn parse_timestamp(s: &str) -> Option<Timestamp> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(Timestamp::Aware(dt));
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%z") {
        return Some(Timestamp::Aware(dt));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Timestamp::Naive(dt));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(Timestamp::Naive)
}
