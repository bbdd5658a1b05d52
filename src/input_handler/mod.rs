//! Move input parsing.

use std::io::{self, BufRead};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::square::Square;

static COORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-h][1-8])([a-h][1-8])$").expect("COORD_RE regex should be valid"));

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
}

#[derive(Debug, PartialEq)]
pub enum MoveInput {
    Coordinate { from: Square, to: Square },
    Quit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        if trimmed == "quit" || trimmed == "q" {
            return Ok(MoveInput::Quit);
        }

        let invalid = || InputError::InvalidInput {
            input: input.to_string(),
        };
        let caps = COORD_RE.captures(&trimmed).ok_or_else(invalid)?;
        let from = Square::from_algebraic(&caps[1]).map_err(|_| invalid())?;
        let to = Square::from_algebraic(&caps[2]).map_err(|_| invalid())?;

        Ok(MoveInput::Coordinate { from, to })
    }
}

/// Reads one line from `reader` and parses it as a move.
pub fn read_move_input<R: BufRead>(reader: &mut R) -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let bytes_read = reader
        .read_line(&mut input)
        .map_err(|e| InputError::IOError {
            error: format!("Failed to read line: {}", e),
        })?;

    // end of input ends the session
    if bytes_read == 0 {
        return Ok(MoveInput::Quit);
    }

    input.parse()
}

pub fn parse_move_input() -> Result<MoveInput, InputError> {
    read_move_input(&mut io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_coordinate_move() {
        assert_eq!(
            Ok(MoveInput::Coordinate { from: E2, to: E4 }),
            "e2e4".parse::<MoveInput>()
        );
        assert_eq!(
            Ok(MoveInput::Coordinate { from: G8, to: F6 }),
            "  G8F6\n".parse::<MoveInput>()
        );
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(Ok(MoveInput::Quit), "quit".parse::<MoveInput>());
        assert_eq!(Ok(MoveInput::Quit), "q".parse::<MoveInput>());
    }

    #[test]
    fn test_rejects_malformed_input() {
        for input in &["e2", "e2e9", "i2i4", "e2-e4", "Nf3", ""] {
            assert_eq!(
                Err(InputError::InvalidInput {
                    input: input.to_string()
                }),
                input.parse::<MoveInput>()
            );
        }
    }

    #[test]
    fn test_read_move_input() {
        let mut reader = Cursor::new("d2d4\nquit\n");
        assert_eq!(
            Ok(MoveInput::Coordinate { from: D2, to: D4 }),
            read_move_input(&mut reader)
        );
        assert_eq!(Ok(MoveInput::Quit), read_move_input(&mut reader));
        // exhausted input
        assert_eq!(Ok(MoveInput::Quit), read_move_input(&mut reader));
    }
}
