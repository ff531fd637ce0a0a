use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ARG_COUNT, Error, FIELD_COUNT, FieldKind, NAME_WIDTH, ParsedField, Parser};

/// A full cron entry: the expanded schedule fields and the command they run.
///
/// The command is kept verbatim and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CronExpression {
    fields:  Vec<ParsedField>,
    command: String,
}

impl CronExpression {
    /// Parses positional arguments: the five schedule fields followed by the command.
    ///
    /// # Errors
    /// Returns `Error::Arity` unless exactly six arguments are given, or the
    /// error of the first field that fails to parse.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, Error> {
        match args {
            [fields @ .., command] if args.len() == ARG_COUNT => {
                Self::with_parser(&Parser::cron(), fields, command.as_ref())
            },
            _ => Err(Error::Arity {
                expected: ARG_COUNT,
                actual:   args.len(),
            }),
        }
    }

    /// Parses the schedule fields with `parser` and attaches `command`.
    ///
    /// # Errors
    /// See [`Parser::parse`].
    pub fn with_parser<S: AsRef<str>>(
        parser: &Parser,
        fields: &[S],
        command: &str,
    ) -> Result<Self, Error> {
        Ok(Self {
            fields:  parser.parse(fields)?,
            command: command.to_owned(),
        })
    }

    pub fn fields(&self) -> &[ParsedField] {
        &self.fields
    }

    /// Returns the parsed field of the given kind
    pub fn field(&self, kind: FieldKind) -> Option<&ParsedField> {
        self.fields.iter().find(|parsed| parsed.field() == kind)
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl FromStr for CronExpression {
    type Err = Error;

    /// Parses a crontab style line, e.g. `*/15 0 1,15 * 1-5 /usr/bin/find`.
    /// Everything after the fifth field is the command, inner spacing included.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rest = s.trim();
        let mut fields = Vec::with_capacity(FIELD_COUNT);
        while fields.len() < FIELD_COUNT {
            if rest.is_empty() {
                return Err(Error::Arity {
                    expected: FIELD_COUNT,
                    actual:   fields.len(),
                });
            }
            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            fields.push(&rest[..end]);
            rest = rest[end..].trim_start();
        }
        if rest.is_empty() {
            return Err(Error::MissingCommand);
        }
        Self::with_parser(&Parser::cron(), fields.as_slice(), rest)
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in &self.fields {
            writeln!(f, "{field}")?;
        }
        write!(f, "{:<width$} {}", "command", self.command, width = NAME_WIDTH)
    }
}
