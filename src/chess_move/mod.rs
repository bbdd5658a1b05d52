use core::fmt;

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::square::Square;

/// A piece and the side it belongs to.
pub type ColoredPiece = (Piece, Color);

/// A single trial transition on the board.
///
/// Moves are produced by move generation with `capture` unset. When a move is
/// handed to `Board::apply_move`, whatever occupied the destination square is
/// recorded in `capture` so that `Board::revert_move` can restore it exactly.
#[derive(Clone, Copy)]
pub struct ChessMove {
    from_square: Square,
    to_square: Square,
    piece: ColoredPiece,
    capture: Option<ColoredPiece>,
}

impl ChessMove {
    pub fn new(from_square: Square, to_square: Square, piece: ColoredPiece) -> Self {
        Self {
            from_square,
            to_square,
            piece,
            capture: None,
        }
    }

    pub fn from_square(&self) -> Square {
        self.from_square
    }

    pub fn to_square(&self) -> Square {
        self.to_square
    }

    pub fn piece(&self) -> ColoredPiece {
        self.piece
    }

    pub fn color(&self) -> Color {
        self.piece.1
    }

    /// The snapshot taken by the most recent `apply_move` of this move.
    pub fn capture(&self) -> Option<ColoredPiece> {
        self.capture
    }

    pub(crate) fn set_capture(&mut self, capture: Option<ColoredPiece>) {
        self.capture = capture;
    }

    /// Whether applying this move lands a pawn on its far rank.
    pub fn is_promotion(&self) -> bool {
        let (piece, color) = self.piece;
        piece == Piece::Pawn && self.to_square.rank() == color.promotion_rank()
    }

    /// Coordinate notation, e.g. `e2e4`.
    pub fn to_coordinate(&self) -> String {
        format!("{}{}", self.from_square, self.to_square)
    }
}

// The capture snapshot is transient bookkeeping, not part of a move's identity.
impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.from_square == other.from_square
            && self.to_square == other.to_square
            && self.piece == other.piece
    }
}

impl Eq for ChessMove {}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (piece, color) = self.piece;
        let capture_msg = match self.capture {
            Some((captured, captured_color)) => {
                format!(" (captures {})", captured.to_fen(captured_color))
            }
            None => "".to_string(),
        };
        let promotion_msg = if self.is_promotion() { "=Q" } else { "" };

        write!(
            f,
            "{} {}{}{}",
            piece.to_fen(color),
            self.to_coordinate(),
            promotion_msg,
            capture_msg
        )
    }
}

impl fmt::Debug for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}

#[macro_export]
macro_rules! std_move {
    ($from:expr, $to:expr, $piece:expr) => {
        $crate::chess_move::ChessMove::new($from, $to, $piece)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;

    #[test]
    fn test_coordinate_notation() {
        let chess_move = std_move!(E2, E4, (Piece::Pawn, Color::White));
        assert_eq!("e2e4", chess_move.to_coordinate());
    }

    #[test]
    fn test_equality_ignores_capture_snapshot() {
        let plain = std_move!(D1, D8, (Piece::Queen, Color::White));
        let mut applied = plain;
        applied.set_capture(Some((Piece::Rook, Color::Black)));
        assert_eq!(plain, applied);
        assert_ne!(plain, std_move!(D1, D7, (Piece::Queen, Color::White)));
    }

    #[test]
    fn test_is_promotion() {
        assert!(std_move!(A7, A8, (Piece::Pawn, Color::White)).is_promotion());
        assert!(std_move!(B2, C1, (Piece::Pawn, Color::Black)).is_promotion());
        assert!(!std_move!(A6, A7, (Piece::Pawn, Color::White)).is_promotion());
        assert!(!std_move!(A7, A8, (Piece::Rook, Color::White)).is_promotion());
    }

    #[test]
    fn test_display_includes_capture() {
        let mut chess_move = std_move!(E4, D5, (Piece::Pawn, Color::White));
        assert_eq!("P e4d5", format!("{}", chess_move));
        chess_move.set_capture(Some((Piece::Pawn, Color::Black)));
        assert_eq!("P e4d5 (captures p)", format!("{}", chess_move));
    }
}
