use std::num::NonZeroUsize;

use crate::{
    bound::Bound,
    error::FieldError,
    lexer::TokenType,
    numberer::Numberer,
    partition::Part,
};

/// Builds the numberer for one group of a field, matching on the shape of
/// its tokens and decorating it with a step when the group has one.
pub fn assemble(part: &Part<'_>, bound: Bound) -> Result<Numberer, FieldError> {
    let base = base_numberer(part, bound)?;
    if !part.contains(TokenType::Slash) {
        return Ok(base);
    }
    let step_text = part.last().ok_or(FieldError::Pattern)?.value();
    let step = parse_step(step_text)?;
    Ok(Numberer::step(base, step))
}

fn base_numberer(part: &Part<'_>, bound: Bound) -> Result<Numberer, FieldError> {
    if part.starts_with(TokenType::Any) {
        return Ok(bound.wildcard());
    }
    if part.contains(TokenType::Dash) {
        return match (part.first(), part.get(2)) {
            (Some(start), Some(end)) => bound.parse_interval(start.value(), end.value()),
            _ => Err(pattern_mismatch(part)),
        };
    }
    if part.starts_with(TokenType::Number) {
        return bound.parse_value(part[0].value());
    }
    Err(pattern_mismatch(part))
}

fn pattern_mismatch(part: &Part<'_>) -> FieldError {
    log::warn!("token shape {:?} matches no field pattern", part.types());
    FieldError::Pattern
}

fn parse_step(text: &str) -> Result<NonZeroUsize, FieldError> {
    let step = text.parse::<usize>().map_err(|source| FieldError::Parse {
        text: text.to_owned(),
        source,
    })?;
    NonZeroUsize::new(step).ok_or(FieldError::ZeroStep)
}
