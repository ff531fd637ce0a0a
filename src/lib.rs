mod bound;
mod consts;
mod error;
mod expression;
mod lexer;
mod numberer;
mod partition;
mod pattern;
mod prelude;

pub use bound::{Bound, FieldKind};
pub use consts::*;
pub use error::{Error, FieldError, Result};
pub use expression::CronExpression;
pub use lexer::{Lexer, Token, TokenType, tokenize};
pub use numberer::Numberer;
pub use partition::{Part, partition};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parses one field of a cron expression against the bound of its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldParser {
    kind:  FieldKind,
    bound: Bound,
}

impl FieldParser {
    /// Creates a parser using the standard bound for the field
    pub const fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            bound: kind.bound(),
        }
    }

    /// Creates a parser for the field using a custom bound.
    ///
    /// Parsing never expands values, but [`Numberer::numbers`] and
    /// [`FieldParser::expand`] materialise every matched value, so `*` over a
    /// bound such as `0..=u32::MAX` allocates the whole range. Expand only
    /// bounds of schedule sized width.
    pub const fn with_bound(kind: FieldKind, bound: Bound) -> Self {
        Self { kind, bound }
    }

    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    pub const fn bound(&self) -> Bound {
        self.bound
    }

    /// Parses the field into an aggregate of one numberer per comma separated group.
    ///
    /// # Errors
    /// Returns the first lexing or group error encountered, in group order.
    pub fn parse(&self, field: &str) -> Result<Numberer, FieldError> {
        let parts = partition(Lexer::new(field))?;
        let members = parts
            .iter()
            .map(|part| pattern::assemble(part, self.bound))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Numberer::Aggregate(members))
    }

    /// Parses the field and expands it into ascending, de-duplicated values
    ///
    /// # Errors
    /// See [`FieldParser::parse`].
    pub fn expand(&self, field: &str) -> Result<Vec<u32>, FieldError> {
        self.parse(field).map(|numberer| numberer.numbers())
    }
}

/// The result of parsing one field: the field and the values it matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedField {
    field:   FieldKind,
    numbers: Vec<u32>,
}

impl ParsedField {
    pub const fn new(field: FieldKind, numbers: Vec<u32>) -> Self {
        Self { field, numbers }
    }

    pub const fn field(&self) -> FieldKind {
        self.field
    }

    /// Returns the matched values in ascending order
    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    /// Checks whether the field matches `value`
    pub fn matches(&self, value: u32) -> bool {
        self.numbers.binary_search(&value).is_ok()
    }
}

impl fmt::Display for ParsedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbers: Vec<String> = self.numbers.iter().map(ToString::to_string).collect();
        write!(
            f,
            "{:<width$} {}",
            self.field.to_string(),
            numbers.join(" "),
            width = NAME_WIDTH
        )
    }
}

/// Parses all five fields of a cron expression positionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parser {
    fields: [FieldParser; FIELD_COUNT],
}

impl Default for Parser {
    fn default() -> Self {
        Self::cron()
    }
}

impl Parser {
    pub const fn new(fields: [FieldParser; FIELD_COUNT]) -> Self {
        Self { fields }
    }

    /// The standard parser: minute, hour, day of month, month, day of week
    pub const fn cron() -> Self {
        Self::new([
            FieldParser::new(FieldKind::Minute),
            FieldParser::new(FieldKind::Hour),
            FieldParser::new(FieldKind::DayOfMonth),
            FieldParser::new(FieldKind::Month),
            FieldParser::new(FieldKind::DayOfWeek),
        ])
    }

    pub const fn fields(&self) -> &[FieldParser; FIELD_COUNT] {
        &self.fields
    }

    /// Parses each field with its field parser and expands it.
    ///
    /// # Errors
    /// Returns `Error::Arity` unless exactly `FIELD_COUNT` fields are given,
    /// otherwise `Error::Field` for the first field that fails.
    pub fn parse<S: AsRef<str>>(&self, fields: &[S]) -> Result<Vec<ParsedField>> {
        if fields.len() != self.fields.len() {
            return Err(Error::Arity {
                expected: self.fields.len(),
                actual:   fields.len(),
            });
        }
        self.fields
            .iter()
            .zip(fields)
            .map(|(parser, text)| -> Result<ParsedField> {
                let numberer = parser.parse(text.as_ref()).map_err(|source| Error::Field {
                    field: parser.kind(),
                    source,
                })?;
                let parsed = ParsedField::new(parser.kind(), numberer.numbers());
                log::debug!("parsed {} {:?} as {numberer}", parser.kind(), text.as_ref());
                Ok(parsed)
            })
            .collect()
    }
}
