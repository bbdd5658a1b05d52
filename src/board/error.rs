use thiserror::Error;

use super::color::Color;
use super::square::Square;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cannot put a piece on a square that is already occupied")]
    SquareOccupied,
    #[error("Square {square} is not on the board")]
    OutOfBounds { square: Square },
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },
    #[error("invalid square `{input}`; expected a file a-h followed by a rank 1-8")]
    InvalidAlgebraicSquare { input: String },
    #[error("expected exactly one {color} king, found {count}")]
    InvalidKingCount { color: Color, count: usize },
}
