use std::{collections::BTreeSet, fmt, num::NonZeroUsize};

use crate::{
    bound::Bound,
    consts::{ANY, GROUP_SEPARATOR, RANGE_SEPARATOR, STEP_SEPARATOR},
};

/// Produces the set of values a field, or part of a field, matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Numberer {
    /// A single value, e.g. `5`
    Value(u32),
    /// Every value from `start` to `end` inclusive, e.g. `1-5`.
    /// Empty when `start > end`.
    Interval { start: u32, end: u32 },
    /// Every value of a field, `*`
    Wildcard(Bound),
    /// Every `step`th value produced by `base`, counted by position
    Step { base: Box<Self>, step: NonZeroUsize },
    /// The union of several numberers, e.g. `1,5-7`
    Aggregate(Vec<Self>),
}

impl Numberer {
    /// Decorates `base` so only every `step`th value it produces is kept
    pub fn step(base: Self, step: NonZeroUsize) -> Self {
        Self::Step {
            base: Box::new(base),
            step,
        }
    }

    /// Expands into the values matched.
    ///
    /// Steps select by position in the base's own order, so `Step` keeps
    /// positions 0, n, 2n... of whatever the base emits. Only an
    /// `Aggregate` sorts and removes duplicates.
    pub fn numbers(&self) -> Vec<u32> {
        match self {
            Self::Value(value) => vec![*value],
            Self::Interval { start, end } => (*start..=*end).collect(),
            Self::Wildcard(bound) => (bound.min()..=bound.max()).collect(),
            Self::Step { base, step } => base.numbers().into_iter().step_by(step.get()).collect(),
            Self::Aggregate(members) => members
                .iter()
                .flat_map(Self::numbers)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
        }
    }
}

impl fmt::Display for Numberer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Interval { start, end } => write!(f, "{start}{RANGE_SEPARATOR}{end}"),
            Self::Wildcard(_) => write!(f, "{ANY}"),
            Self::Step { base, step } => write!(f, "{base}{STEP_SEPARATOR}{step}"),
            Self::Aggregate(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{GROUP_SEPARATOR}")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            },
        }
    }
}
