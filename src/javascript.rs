//! The JavaScript backend.
//!
//! Tables are written as a nested array bound to a variable:
//!
//! ```text
//! const sample = [
//!     ["id", "flag"],
//!     [1, true],
//!     [2, null]
//! ];
//! ```
//!
//! Specific values are converted when writing:
//!
//! - null cells: `null`
//! - infinities: `Infinity` / `-Infinity`
//! - NaN: `NaN`
//! - datetimes: `new Date("...")`, or a quoted string when datetime instance
//!   formatting is off
//!
//! Only genuine booleans are written as `true` / `false`; the string `"true"`
//! stays a string.

use crate::classify::{StrictLevel, StrictLevelMap};
use crate::format::Literals;
use crate::options::WriterOptions;
use crate::value::Tag;
use crate::writer::{Backend, TableWriter};
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// JavaScript variable declaration keyword.
///
/// # Examples
///
/// ```rust
/// use js_tablewriter::VariableDeclaration;
///
/// let decl: VariableDeclaration = " LET ".parse().unwrap();
/// assert_eq!(decl, VariableDeclaration::Let);
/// assert!("int".parse::<VariableDeclaration>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum VariableDeclaration {
    Var,
    Let,
    #[default]
    Const,
}

impl VariableDeclaration {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            VariableDeclaration::Var => "var",
            VariableDeclaration::Let => "let",
            VariableDeclaration::Const => "const",
        }
    }
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariableDeclaration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "var" => Ok(VariableDeclaration::Var),
            "let" => Ok(VariableDeclaration::Let),
            "const" => Ok(VariableDeclaration::Const),
            _ => Err(Error::InvalidVariableDeclaration(s.to_string())),
        }
    }
}

/// JavaScript backend for [`TableWriter`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JavaScript {
    declaration: VariableDeclaration,
}

impl JavaScript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_declaration(mut self, declaration: VariableDeclaration) -> Self {
        self.declaration = declaration;
        self
    }

    #[must_use]
    pub fn variable_declaration(&self) -> VariableDeclaration {
        self.declaration
    }

    /// Parses and sets the declaration keyword.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVariableDeclaration`] for anything other than
    /// `var`, `let` or `const`; the current keyword is kept.
    pub fn set_variable_declaration(&mut self, declaration: &str) -> Result<()> {
        self.declaration = declaration.parse()?;
        Ok(())
    }
}

impl Backend for JavaScript {
    fn format_name(&self) -> &'static str {
        "javascript"
    }

    fn sanitize_name(&self, name: &str) -> String {
        sanitize_js_var_name(name, '_').to_lowercase()
    }

    fn opening_row(&self, variable_name: &str) -> String {
        format!("{} {} = [", self.declaration, variable_name)
    }

    fn closing_row(&self) -> String {
        "];".to_string()
    }

    fn literals(&self) -> Literals {
        Literals::default()
    }

    fn datetime_constructor(&self) -> Option<&'static str> {
        Some("new Date")
    }

    fn strict_levels(&self) -> StrictLevelMap {
        StrictLevelMap::new().with(Tag::Bool, StrictLevel::Strict)
    }
}

/// A [`TableWriter`] for the JavaScript backend.
pub type JavaScriptTableWriter = TableWriter<JavaScript>;

impl TableWriter<JavaScript> {
    /// JavaScript writer with the given options and a `const` declaration.
    #[must_use]
    pub fn javascript(options: WriterOptions) -> Self {
        TableWriter::new(JavaScript::default(), options)
    }

    #[must_use]
    pub fn variable_declaration(&self) -> VariableDeclaration {
        self.backend().variable_declaration()
    }

    /// Parses and sets the declaration keyword.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVariableDeclaration`] for an unknown keyword.
    pub fn set_variable_declaration(&mut self, declaration: &str) -> Result<()> {
        self.backend_mut().set_variable_declaration(declaration)
    }
}

const RESERVED_WORDS: &[&str] = &[
    "abstract", "arguments", "await", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "debugger", "default", "delete", "do", "double", "else",
    "enum", "eval", "export", "extends", "false", "final", "finally", "float", "for",
    "function", "goto", "if", "implements", "import", "in", "instanceof", "int", "interface",
    "let", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "typeof", "var", "void", "volatile", "while", "with", "yield",
];

/// Makes `name` a valid JavaScript identifier.
///
/// Characters other than ASCII letters, digits, `_` and `$` become `replacement`,
/// a leading digit is prefixed with `_`, and reserved words get a trailing
/// `_`. Case is preserved.
///
/// # Examples
///
/// ```rust
/// use js_tablewriter::sanitize_js_var_name;
///
/// assert_eq!(sanitize_js_var_name("sales report-2017", '_'), "sales_report_2017");
/// assert_eq!(sanitize_js_var_name("2nd", '_'), "_2nd");
/// assert_eq!(sanitize_js_var_name("class", '_'), "class_");
/// ```
#[must_use]
pub fn sanitize_js_var_name(name: &str, replacement: char) -> String {
    let mut out: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                replacement
            }
        })
        .collect();

    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    if RESERVED_WORDS.contains(&out.to_lowercase().as_str()) {
        out.push('_');
    }
    out
}
