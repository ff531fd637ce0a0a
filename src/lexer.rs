//! Character level tokeniser for a single cron field.
//!
//! The lexer only checks that a field follows the field grammar; it does not
//! look at the values of the numbers. It is a small state machine where every
//! state emits at most one token and picks the next state from one character
//! of lookahead. Malformed input ends the stream with a single
//! [`TokenType::Error`] token carrying the diagnostic.

use std::{borrow::Cow, fmt, iter::FusedIterator};

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::{
    consts::{ANY, GROUP_SEPARATOR, RANGE_SEPARATOR, STEP_SEPARATOR},
    prelude::*,
};

/// The type of a token within a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TokenType {
    #[display(fmt = "error")]
    Error,
    #[display(fmt = "any")]
    Any,
    #[display(fmt = "comma")]
    Comma,
    #[display(fmt = "dash")]
    Dash,
    #[display(fmt = "slash")]
    Slash,
    #[display(fmt = "number")]
    Number,
}

/// A single token emitted by the [`Lexer`].
///
/// The value is the exact slice of the input the token covers, except for
/// error tokens where it holds the diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    kind:  TokenType,
    value: Cow<'a, str>,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenType, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Returns the type of the token
    pub const fn kind(&self) -> TokenType {
        self.kind
    }

    /// Returns the source text of the token, or the message of an error token
    pub fn value(&self) -> &str {
        &self.value
    }

    pub const fn is_error(&self) -> bool {
        matches!(self.kind, TokenType::Error)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Field,
    Any,
    Number,
    Range,
    RangeNumber,
    Step,
    StepNumber,
    Comma,
    Failed(String),
    Done,
}

/// Any Unicode decimal digit. Digits outside `0-9` lex as numbers and are
/// rejected later when the number is parsed.
fn is_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// The character a diagnostic complains about, or the end of the input.
struct Lookahead(Option<char>);

impl fmt::Display for Lookahead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "{c}"),
            None => f.write_str("end of input"),
        }
    }
}

/// Lazily tokenises one field. The stream is single pass and stops after
/// the first error token.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    start: usize,
    pos:   usize,
    state: State,
}

impl<'a> Lexer<'a> {
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            state: State::Field,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes the longest run of digits.
    fn accept_digits(&mut self) {
        while let Some(c) = self.peek().filter(|&c| is_digit(c)) {
            self.pos += c.len_utf8();
        }
    }

    fn emit(&mut self, kind: TokenType) -> Token<'a> {
        let input = self.input;
        let token = Token::new(kind, &input[self.start..self.pos]);
        self.start = self.pos;
        token
    }

    fn fail(&mut self, message: String) {
        self.state = State::Failed(message);
    }

    fn lex_field(&mut self) {
        match self.peek() {
            Some(ANY) => {
                self.bump();
                self.state = State::Any;
            },
            Some(c) if is_digit(c) => self.state = State::Number,
            None => self.fail("input cannot be empty".to_owned()),
            Some(c) => self.fail(format!(
                "({c}) is unexpected at the start of a statement, expected (* or [0-9]+)"
            )),
        }
    }

    fn lex_any(&mut self) -> Token<'a> {
        let token = self.emit(TokenType::Any);
        match self.bump() {
            Some(GROUP_SEPARATOR) => self.state = State::Comma,
            Some(STEP_SEPARATOR) => self.state = State::Step,
            None => {},
            Some(c) => self.fail(format!("({c}) is unexpected after (*), only (/,) expected")),
        }
        token
    }

    fn lex_number(&mut self) -> Token<'a> {
        self.accept_digits();
        let token = self.emit(TokenType::Number);
        match self.bump() {
            Some(GROUP_SEPARATOR) => self.state = State::Comma,
            Some(RANGE_SEPARATOR) => self.state = State::Range,
            Some(STEP_SEPARATOR) => self.state = State::Step,
            None => {},
            Some(c) => self.fail(format!("({c}) is unexpected after a number, only (,-/) expected")),
        }
        token
    }

    fn lex_range(&mut self) -> Token<'a> {
        let token = self.emit(TokenType::Dash);
        match self.peek() {
            Some(c) if is_digit(c) => self.state = State::RangeNumber,
            next => self.fail(format!(
                "({}) is unexpected in a range, only digits are expected",
                Lookahead(next)
            )),
        }
        token
    }

    fn lex_range_number(&mut self) -> Token<'a> {
        self.accept_digits();
        let token = self.emit(TokenType::Number);
        match self.bump() {
            Some(STEP_SEPARATOR) => self.state = State::Step,
            Some(GROUP_SEPARATOR) => self.state = State::Comma,
            None => {},
            Some(c) => self.fail(format!("({c}) is unexpected after a range, only (/,) expected")),
        }
        token
    }

    fn lex_step(&mut self) -> Token<'a> {
        let token = self.emit(TokenType::Slash);
        match self.peek() {
            Some(c) if is_digit(c) => self.state = State::StepNumber,
            next => self.fail(format!(
                "({}) is unexpected after a step, only numbers are expected",
                Lookahead(next)
            )),
        }
        token
    }

    fn lex_step_number(&mut self) -> Token<'a> {
        self.accept_digits();
        let token = self.emit(TokenType::Number);
        match self.bump() {
            Some(GROUP_SEPARATOR) => self.state = State::Comma,
            None => {},
            Some(c) => self.fail(format!("({c}) is unexpected after a step, only (,) is expected")),
        }
        token
    }

    fn lex_comma(&mut self) -> Token<'a> {
        let token = self.emit(TokenType::Comma);
        self.state = State::Field;
        token
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Each state sets its successor; leaving `Done` in place ends the stream.
            let token = match std::mem::replace(&mut self.state, State::Done) {
                State::Field => {
                    self.lex_field();
                    continue;
                },
                State::Any => self.lex_any(),
                State::Number => self.lex_number(),
                State::Range => self.lex_range(),
                State::RangeNumber => self.lex_range_number(),
                State::Step => self.lex_step(),
                State::StepNumber => self.lex_step_number(),
                State::Comma => self.lex_comma(),
                State::Failed(message) => Token::new(TokenType::Error, message),
                State::Done => return None,
            };
            log::trace!("lexed {token} from {:?}", self.input);
            return Some(token);
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Eagerly tokenises a field. If the field is malformed the last token is the error.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenType> {
        tokenize(input).iter().map(Token::kind).collect()
    }

    #[test]
    fn test_lex_errors() {
        struct TestCase {
            field:    &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                field:    "",
                expected: "input cannot be empty",
            },
            TestCase {
                field:    "a",
                expected: "(a) is unexpected at the start of a statement, expected (* or [0-9]+)",
            },
            TestCase {
                field:    "*a",
                expected: "(a) is unexpected after (*), only (/,) expected",
            },
            TestCase {
                field:    "*/a",
                expected: "(a) is unexpected after a step, only numbers are expected",
            },
            TestCase {
                field:    "*/12-",
                expected: "(-) is unexpected after a step, only (,) is expected",
            },
            TestCase {
                field:    "12a",
                expected: "(a) is unexpected after a number, only (,-/) expected",
            },
            TestCase {
                field:    "12-a",
                expected: "(a) is unexpected in a range, only digits are expected",
            },
            TestCase {
                field:    "12-13a",
                expected: "(a) is unexpected after a range, only (/,) expected",
            },
            TestCase {
                field:    "12-13-14",
                expected: "(-) is unexpected after a range, only (/,) expected",
            },
            TestCase {
                field:    "**",
                expected: "(*) is unexpected after (*), only (/,) expected",
            },
            TestCase {
                field:    "1,,2",
                expected: "(,) is unexpected at the start of a statement, expected (* or [0-9]+)",
            },
            TestCase {
                field:    "1,",
                expected: "input cannot be empty",
            },
            TestCase {
                field:    "5-",
                expected: "(end of input) is unexpected in a range, only digits are expected",
            },
            TestCase {
                field:    "*/",
                expected: "(end of input) is unexpected after a step, only numbers are expected",
            },
            TestCase {
                field:    " 5",
                expected: "( ) is unexpected at the start of a statement, expected (* or [0-9]+)",
            },
            TestCase {
                field:    "\u{0663}a",
                expected: "(a) is unexpected after a number, only (,-/) expected",
            },
        ];

        for case in &cases {
            let tokens = tokenize(case.field);
            let last = tokens.last().unwrap();
            assert!(last.is_error(), "Field {:?} should end in an error", case.field);
            assert_eq!(last.value(), case.expected, "Field {:?}", case.field);
            assert_eq!(
                tokens.iter().filter(|t| t.is_error()).count(),
                1,
                "Field {:?} should have exactly one error",
                case.field
            );
        }
    }

    #[test]
    fn test_lex_shapes() {
        use TokenType::{Any, Comma, Dash, Number, Slash};

        let cases: [(&str, &[TokenType]); 9] = [
            ("*", &[Any]),
            ("*/12", &[Any, Slash, Number]),
            ("12", &[Number]),
            ("*,*/12", &[Any, Comma, Any, Slash, Number]),
            ("12,13", &[Number, Comma, Number]),
            ("1-4,*/15", &[Number, Dash, Number, Comma, Any, Slash, Number]),
            ("4/12", &[Number, Slash, Number]),
            ("1-5/2", &[Number, Dash, Number, Slash, Number]),
            ("1-5/2,1", &[Number, Dash, Number, Slash, Number, Comma, Number]),
        ];

        for (field, expected) in cases {
            assert_eq!(kinds(field), expected, "Field {field:?}");
        }
    }

    #[test]
    fn test_lex_non_ascii_digits_as_numbers() {
        use TokenType::{Dash, Number};

        assert_eq!(kinds("\u{0663}"), [Number]);
        assert_eq!(kinds("1-\u{0663}"), [Number, Dash, Number]);

        let tokens = tokenize("1\u{0663}\u{0664}-2");
        assert_eq!(tokens[0].value(), "1\u{0663}\u{0664}");
        assert_eq!(tokens[2].value(), "2");
    }

    #[test]
    fn test_tokens_keep_source_text() {
        let tokens = tokenize("10-250/15,*");
        let values: Vec<&str> = tokens.iter().map(Token::value).collect();
        assert_eq!(values, ["10", "-", "250", "/", "15", ",", "*"]);
    }

    #[test]
    fn test_tokens_before_error_are_kept() {
        let tokens = tokenize("1-5,x");
        let values: Vec<&str> = tokens.iter().map(Token::value).collect();
        assert_eq!(values[..4], ["1", "-", "5", ","]);
        assert_eq!(tokens.len(), 5);
        assert!(tokens[4].is_error());
    }

    #[test]
    fn test_lexer_is_fused_after_error() {
        let mut lexer = Lexer::new("x");
        assert!(lexer.next().is_some_and(|t| t.is_error()));
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_token_type_display() {
        assert_eq!(TokenType::Any.to_string(), "any");
        assert_eq!(TokenType::Number.to_string(), "number");
        assert_eq!(Token::new(TokenType::Dash, "-").to_string(), "dash(-)");
    }
}
