//! Rendering classified values as literal text.
//!
//! A [`FormatterRegistry`] maps each [`Tag`] to the text a backend emits for
//! it. The defaults cover every tag; [`FormatterRegistry::register`] replaces
//! the rendering of one tag for one writer.
//!
//! | Tag | Default literal |
//! |-----|-----------------|
//! | Null | [`Literals::null`] (`null`) |
//! | Bool | `true` / `false`, never quoted |
//! | Integer | decimal digits |
//! | Float | decimal with a fractional part (`3.0`) |
//! | Infinity | `Infinity` / `-Infinity` |
//! | NaN | `NaN` |
//! | DateTime | `new Date("...")` or `"..."`, see [`DateTimeStyle`] |
//! | String / Other | double-quoted, escaped |
//!
//! ```rust
//! use js_tablewriter::{FormatterRegistry, Tag, Value};
//!
//! let mut registry = FormatterRegistry::new();
//! assert_eq!(registry.format(&Value::Float(3.0)), "3.0");
//!
//! registry.register_literal(Tag::NaN, "Number.NaN");
//! assert_eq!(registry.format(&Value::NaN), "Number.NaN");
//! ```

use crate::value::{Tag, Timestamp, Value};
use std::collections::HashMap;
use std::fmt::{self, Write};
use std::sync::Arc;
use tracing::debug;

/// A rendering function for one tag.
pub type FormatFn = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Bare tokens a backend uses for the keyword-like values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literals {
    pub null: &'static str,
    pub true_: &'static str,
    pub false_: &'static str,
    pub infinity: &'static str,
    pub negative_infinity: &'static str,
    pub nan: &'static str,
}

impl Default for Literals {
    fn default() -> Self {
        Literals {
            null: "null",
            true_: "true",
            false_: "false",
            infinity: "Infinity",
            negative_infinity: "-Infinity",
            nan: "NaN",
        }
    }
}

/// How datetime cells are written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateTimeStyle {
    /// A constructor call wrapping the quoted text, e.g. `new Date("...")`.
    Native { constructor: &'static str },
    /// A plain quoted string.
    Quoted,
}

/// Datetime rendering settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateTimeFormat {
    pub style: DateTimeStyle,
    /// chrono pattern; `%z` is dropped for values without an offset.
    pub pattern: String,
    /// Values before this year are written in their raw display form.
    pub min_year: i32,
}

pub const DEFAULT_DATETIME_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%z";
pub const DEFAULT_MIN_YEAR: i32 = 1900;

impl Default for DateTimeFormat {
    fn default() -> Self {
        DateTimeFormat {
            style: DateTimeStyle::Quoted,
            pattern: DEFAULT_DATETIME_PATTERN.to_string(),
            min_year: DEFAULT_MIN_YEAR,
        }
    }
}

impl DateTimeFormat {
    /// Formats `ts` with the pattern. `None` when the value predates
    /// `min_year` or the pattern cannot render it.
    #[must_use]
    pub fn render(&self, ts: &Timestamp) -> Option<String> {
        if ts.year() < self.min_year {
            return None;
        }

        let mut out = String::new();
        let written = match ts {
            Timestamp::Aware(dt) => write!(out, "{}", dt.format(&self.pattern)),
            Timestamp::Naive(dt) => {
                let pattern = self.pattern.replace("%z", "");
                write!(out, "{}", dt.format(&pattern))
            }
        };
        written.ok().map(|_| out)
    }
}

/// Per-writer mapping from tag to rendering.
#[derive(Clone)]
pub struct FormatterRegistry {
    overrides: HashMap<Tag, FormatFn>,
    literals: Literals,
    datetime: DateTimeFormat,
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        FormatterRegistry {
            overrides: HashMap::new(),
            literals: Literals::default(),
            datetime: DateTimeFormat::default(),
        }
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut overridden: Vec<_> = self.overrides.keys().map(Tag::as_str).collect();
        overridden.sort_unstable();
        f.debug_struct("FormatterRegistry")
            .field("overrides", &overridden)
            .field("literals", &self.literals)
            .field("datetime", &self.datetime)
            .finish()
    }
}

impl FormatterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_literals(mut self, literals: Literals) -> Self {
        self.literals = literals;
        self
    }

    #[must_use]
    pub fn with_datetime_format(mut self, datetime: DateTimeFormat) -> Self {
        self.datetime = datetime;
        self
    }

    #[must_use]
    pub fn literals(&self) -> &Literals {
        &self.literals
    }

    #[must_use]
    pub fn datetime_format(&self) -> &DateTimeFormat {
        &self.datetime
    }

    pub fn set_datetime_format(&mut self, datetime: DateTimeFormat) {
        self.datetime = datetime;
    }

    /// Replaces the rendering of `tag`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use js_tablewriter::{FormatterRegistry, Tag, Value};
    ///
    /// let mut registry = FormatterRegistry::new();
    /// registry.register(Tag::Integer, |value| match value {
    ///     Value::Integer(i) => format!("{}n", i),
    ///     other => other.to_plain_string(),
    /// });
    /// assert_eq!(registry.format(&Value::Integer(5)), "5n");
    /// ```
    pub fn register<F>(&mut self, tag: Tag, f: F)
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.overrides.insert(tag, Arc::new(f));
    }

    /// Renders every value of `tag` as the fixed `literal`.
    pub fn register_literal(&mut self, tag: Tag, literal: impl Into<String>) {
        let literal = literal.into();
        self.register(tag, move |_| literal.clone());
    }

    /// Restores the default rendering of `tag`.
    pub fn unregister(&mut self, tag: Tag) -> bool {
        self.overrides.remove(&tag).is_some()
    }

    #[must_use]
    pub fn is_overridden(&self, tag: Tag) -> bool {
        self.overrides.contains_key(&tag)
    }

    /// Renders `value` as literal text.
    #[must_use]
    pub fn format(&self, value: &Value) -> String {
        if let Some(f) = self.overrides.get(&value.tag()) {
            return f(value);
        }

        match value {
            Value::Null => self.literals.null.to_string(),
            Value::Bool(true) => self.literals.true_.to_string(),
            Value::Bool(false) => self.literals.false_.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => format_float(*f),
            Value::Infinity { negative: false } => self.literals.infinity.to_string(),
            Value::Infinity { negative: true } => self.literals.negative_infinity.to_string(),
            Value::NaN => self.literals.nan.to_string(),
            Value::DateTime(ts) => self.format_datetime(ts),
            Value::String(s) | Value::Other(s) => quote_string(s),
        }
    }

    fn format_datetime(&self, ts: &Timestamp) -> String {
        let text = self.datetime.render(ts).unwrap_or_else(|| {
            debug!(
                value = %ts,
                pattern = %self.datetime.pattern,
                min_year = self.datetime.min_year,
                "datetime written in raw form"
            );
            ts.to_string()
        });
        match self.datetime.style {
            DateTimeStyle::Native { constructor } => {
                format!("{}({})", constructor, quote_string(&text))
            }
            DateTimeStyle::Quoted => quote_string(&text),
        }
    }
}

/// Decimal text of a finite float, always with a fractional part.
#[must_use]
pub fn format_float(f: f64) -> String {
    let mut s = f.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// Double-quoted string literal with quotes, backslashes and control
/// characters escaped.
#[must_use]
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            // line terminators inside JS string literals
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
