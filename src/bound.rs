use crate::{
    consts::{
        MAX_DAY_OF_MONTH, MAX_DAY_OF_WEEK, MAX_HOUR, MAX_MINUTE, MAX_MONTH, MIN_DAY_OF_MONTH,
        MIN_DAY_OF_WEEK, MIN_HOUR, MIN_MINUTE, MIN_MONTH,
    },
    error::{Error, FieldError},
    numberer::Numberer,
    prelude::*,
};
use serde::{Deserialize, Serialize};

/// The inclusive range of values a field accepts.
/// The minimum is guaranteed to be less than or equal to the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{min}-{max}")]
#[serde(try_from = "RawBound")]
pub struct Bound {
    min: u32,
    max: u32,
}

#[derive(Deserialize)]
struct RawBound {
    min: u32,
    max: u32,
}

impl TryFrom<RawBound> for Bound {
    type Error = Error;

    fn try_from(raw: RawBound) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl Bound {
    pub const MINUTE: Self = Self {
        min: MIN_MINUTE,
        max: MAX_MINUTE,
    };
    pub const HOUR: Self = Self {
        min: MIN_HOUR,
        max: MAX_HOUR,
    };
    pub const DAY_OF_MONTH: Self = Self {
        min: MIN_DAY_OF_MONTH,
        max: MAX_DAY_OF_MONTH,
    };
    pub const MONTH: Self = Self {
        min: MIN_MONTH,
        max: MAX_MONTH,
    };
    pub const DAY_OF_WEEK: Self = Self {
        min: MIN_DAY_OF_WEEK,
        max: MAX_DAY_OF_WEEK,
    };

    /// Creates a new Bound
    ///
    /// # Errors
    /// Returns `Error::InvalidBound` if `min > max`.
    pub const fn new(min: u32, max: u32) -> Result<Self, Error> {
        if min > max {
            return Err(Error::InvalidBound { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub const fn min(self) -> u32 {
        self.min
    }

    #[inline]
    pub const fn max(self) -> u32 {
        self.max
    }

    pub const fn contains(self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Parses a single value and checks it lies within the bound
    ///
    /// # Errors
    /// Returns `FieldError::Parse` if `text` is not a base-10 integer and
    /// `FieldError::ValueOutOfRange` if it lies outside the bound.
    pub fn parse_value(self, text: &str) -> Result<Numberer, FieldError> {
        let value = parse_u32(text)?;
        if !self.contains(value) {
            return Err(FieldError::ValueOutOfRange { value, bound: self });
        }
        Ok(Numberer::Value(value))
    }

    /// Parses an interval and checks its ends against the bound.
    ///
    /// Only the outer edges are checked: an inverted interval such as `10-2`
    /// is accepted and expands to nothing.
    ///
    /// # Errors
    /// Returns `FieldError::Parse` if either end is not a base-10 integer and
    /// `FieldError::IntervalOutOfRange` if `start < min` or `end > max`.
    pub fn parse_interval(self, start: &str, end: &str) -> Result<Numberer, FieldError> {
        let start = parse_u32(start)?;
        let end = parse_u32(end)?;
        if start < self.min || end > self.max {
            return Err(FieldError::IntervalOutOfRange {
                start,
                end,
                bound: self,
            });
        }
        Ok(Numberer::Interval { start, end })
    }

    /// Every value of the bound
    pub const fn wildcard(self) -> Numberer {
        Numberer::Wildcard(self)
    }
}

fn parse_u32(text: &str) -> Result<u32, FieldError> {
    text.parse::<u32>().map_err(|source| FieldError::Parse {
        text: text.to_owned(),
        source,
    })
}

/// The five fields of a cron expression, in positional order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "day of month")]
    DayOfMonth,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day of week")]
    DayOfWeek,
}

impl FieldKind {
    /// All fields in the order they appear in an expression
    pub const ALL: [Self; 5] = [
        Self::Minute,
        Self::Hour,
        Self::DayOfMonth,
        Self::Month,
        Self::DayOfWeek,
    ];

    /// Returns the values this field accepts
    pub const fn bound(self) -> Bound {
        match self {
            Self::Minute => Bound::MINUTE,
            Self::Hour => Bound::HOUR,
            Self::DayOfMonth => Bound::DAY_OF_MONTH,
            Self::Month => Bound::MONTH,
            Self::DayOfWeek => Bound::DAY_OF_WEEK,
        }
    }

    /// Zero based position of the field within an expression
    pub const fn position(self) -> usize {
        self as usize
    }
}
