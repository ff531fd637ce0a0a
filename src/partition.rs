use crate::{
    error::FieldError,
    lexer::{Token, TokenType},
    prelude::*,
};

/// The tokens of a single comma separated group within a field, e.g. `0-30/5`
/// within `0-30/5,40,50`. Never holds comma or error tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct Part<'a>(Vec<Token<'a>>);

impl<'a> Part<'a> {
    /// Returns the type of every token in the group, in order
    pub fn types(&self) -> Vec<TokenType> {
        self.0.iter().map(Token::kind).collect()
    }

    /// Whether the first token has the given type
    pub fn starts_with(&self, kind: TokenType) -> bool {
        self.0.first().is_some_and(|token| token.kind() == kind)
    }

    /// Whether any token has the given type
    pub fn contains(&self, kind: TokenType) -> bool {
        self.0.iter().any(|token| token.kind() == kind)
    }

    fn push(&mut self, token: Token<'a>) {
        self.0.push(token);
    }
}

/// Splits a token stream at its commas.
///
/// Always yields at least one part. The first error token aborts the whole
/// split, so callers never see a partial list.
///
/// # Errors
/// Returns `FieldError::Lex` with the error token's message.
pub fn partition<'a, I>(tokens: I) -> Result<Vec<Part<'a>>, FieldError>
where
    I: IntoIterator<Item = Token<'a>>,
{
    let mut parts = Vec::new();
    let mut part = Part::default();
    for token in tokens {
        match token.kind() {
            TokenType::Error => return Err(FieldError::Lex(token.value().to_owned())),
            TokenType::Comma => parts.push(std::mem::take(&mut part)),
            TokenType::Any | TokenType::Dash | TokenType::Slash | TokenType::Number => part.push(token),
        }
    }
    parts.push(part);
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn test_partition_splits_on_commas() {
        let tokens = vec![
            Token::new(TokenType::Number, "1"),
            Token::new(TokenType::Comma, ","),
            Token::new(TokenType::Number, "1"),
        ];
        let parts = partition(tokens).unwrap();
        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|part| part.types() == [TokenType::Number]));
    }

    #[test]
    fn test_partition_fails_on_error_token() {
        let tokens = vec![
            Token::new(TokenType::Number, "1"),
            Token::new(TokenType::Comma, ","),
            Token::new(TokenType::Error, "an error"),
        ];
        let result = partition(tokens);
        assert_eq!(result, Err(FieldError::Lex("an error".to_owned())));
    }

    #[test]
    fn test_partition_empty_stream_yields_one_empty_part() {
        let parts = partition(Vec::new()).unwrap();
        assert_eq!(parts.len(), 1);
        assert!(parts[0].is_empty());
    }

    #[test]
    fn test_partition_lexed_field() {
        let parts = partition(tokenize("1-4,*/15,7")).unwrap();
        let shapes: Vec<Vec<TokenType>> = parts.iter().map(Part::types).collect();
        assert_eq!(
            shapes,
            [
                vec![TokenType::Number, TokenType::Dash, TokenType::Number],
                vec![TokenType::Any, TokenType::Slash, TokenType::Number],
                vec![TokenType::Number],
            ]
        );
        assert!(parts.iter().all(|part| !part.contains(TokenType::Comma)));
    }

    #[test]
    fn test_part_pattern_helpers() {
        let parts = partition(tokenize("12/3")).unwrap();
        let part = &parts[0];
        assert!(part.starts_with(TokenType::Number));
        assert!(!part.starts_with(TokenType::Any));
        assert!(part.contains(TokenType::Slash));
        assert!(!part.contains(TokenType::Dash));
        assert_eq!(part[2].value(), "3");

        let empty = Part::default();
        assert!(!empty.starts_with(TokenType::Any));
        assert!(!empty.contains(TokenType::Number));
    }
}
