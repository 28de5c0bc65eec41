//! Input commands for the pool simulation
//!
//! One command per line:
//!
//! ```text
//! Request 256K
//! Release A
//! ```

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const REQUEST: &str = "Request";
const RELEASE: &str = "Release";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Allocate a block able to hold `size` units
    Request { size: u64 },
    /// Free the block carrying identifier `id`
    Release { id: String },
}

impl Command {
    /// Parse one line, tokenized on whitespace
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or(ParseError::Empty)?;

        let command = match verb {
            REQUEST => {
                let operand = tokens.next().ok_or(ParseError::MissingOperand(REQUEST))?;
                Command::Request {
                    size: parse_size(operand)?,
                }
            }
            RELEASE => {
                let operand = tokens.next().ok_or(ParseError::MissingOperand(RELEASE))?;
                Command::Release {
                    id: operand.to_string(),
                }
            }
            other => return Err(ParseError::UnknownVerb(other.to_string())),
        };

        if let Some(extra) = tokens.next() {
            return Err(ParseError::TrailingInput(extra.to_string()));
        }

        Ok(command)
    }
}

/// Split `256K` into its numeric prefix and a single unit character.
///
/// The unit is not interpreted, but it must be present and must not be a digit.
fn parse_size(token: &str) -> Result<u64, ParseError> {
    let invalid = || ParseError::InvalidSize(token.to_string());

    let unit = token.chars().next_back().ok_or_else(invalid)?;
    if unit.is_ascii_digit() {
        return Err(invalid());
    }

    let digits = &token[..token.len() - unit.len_utf8()];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match digits.parse::<u64>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(size) => Ok(size),
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Request { size } => write!(f, "{} {}K", REQUEST, size),
            Command::Release { id } => write!(f, "{} {}", RELEASE, id),
        }
    }
}
