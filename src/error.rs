use std::num::ParseIntError;

use crate::{Bound, FieldKind};

/// Convenient alias for `Result` with the crate level [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error raised while parsing a single field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The field text does not follow the field grammar.
    #[error("{0}")]
    Lex(String),

    /// A value, interval end or step size is not a base-10 integer.
    #[error("failed to parse ({text}) as an integer: {source}")]
    Parse {
        text:   String,
        #[source]
        source: ParseIntError,
    },

    /// A step of zero would select nothing.
    #[error("step (0) must be greater than zero")]
    ZeroStep,

    /// A single value falls outside the field's bound.
    #[error("number ({value}) must be in range ({bound})")]
    ValueOutOfRange { value: u32, bound: Bound },

    /// An interval reaches outside the field's bound.
    #[error("range ({start}-{end}) must be in range ({bound})")]
    IntervalOutOfRange { start: u32, end: u32, bound: Bound },

    /// The tokens of a group match no known shape. The lexer only produces
    /// shapes the assembler knows, so this points at a bug rather than bad input.
    #[error("numberer does not match any valid patterns")]
    Pattern,
}

/// Error type for parsing whole expressions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Wrong number of fields (or arguments) supplied.
    #[error("expected ({expected}) fields, got ({actual}) fields")]
    Arity { expected: usize, actual: usize },

    /// A field failed to parse.
    #[error("({field}): {source}")]
    Field {
        field:  FieldKind,
        #[source]
        source: FieldError,
    },

    /// A bound whose minimum is above its maximum.
    #[error("invalid bound: min ({min}) cannot be greater than max ({max})")]
    InvalidBound { min: u32, max: u32 },

    /// A crontab line with schedule fields but nothing to run.
    #[error("expression has no command after the schedule fields")]
    MissingCommand,
}

impl Error {
    /// Returns the field that failed, if the error came from a field.
    pub const fn field(&self) -> Option<FieldKind> {
        match self {
            Self::Field { field, .. } => Some(*field),
            Self::Arity { .. } | Self::InvalidBound { .. } | Self::MissingCommand => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_messages() {
        let err = FieldError::ValueOutOfRange {
            value: 70,
            bound: Bound::MINUTE,
        };
        assert_eq!(err.to_string(), "number (70) must be in range (0-59)");

        let err = FieldError::IntervalOutOfRange {
            start: 0,
            end:   13,
            bound: Bound::MONTH,
        };
        assert_eq!(err.to_string(), "range (0-13) must be in range (1-12)");
    }

    #[test]
    fn test_field_error_wraps_field_name() {
        let err = Error::Field {
            field:  FieldKind::DayOfMonth,
            source: FieldError::Lex("input cannot be empty".to_owned()),
        };
        assert_eq!(err.to_string(), "(day of month): input cannot be empty");
        assert_eq!(err.field(), Some(FieldKind::DayOfMonth));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let err = Error::Field {
            field:  FieldKind::Hour,
            source: FieldError::Pattern,
        };
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("numberer does not match any valid patterns"));
    }

    #[test]
    fn test_arity_message() {
        let err = Error::Arity {
            expected: 5,
            actual:   4,
        };
        assert_eq!(err.to_string(), "expected (5) fields, got (4) fields");
        assert_eq!(err.field(), None);
    }
}
