pub mod color;
pub mod error;
pub mod fen;
pub mod piece;
pub mod square;

mod display;


use log::trace;

use crate::chess_move::{ChessMove, ColoredPiece};
use crate::move_generation::targets;

use color::Color;
use error::BoardError;
use piece::Piece;
use square::Square;

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Represents the state of a chess board: an 8x8 grid where each square holds
/// at most one piece. Rank 0 is white's back rank.
///
/// The board is mutated in place both for permanent game moves and, during
/// search, for trial moves that are applied and then reverted. Reverts must
/// happen in exact reverse order of application.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Board {
    grid: [[Option<ColoredPiece>; 8]; 8],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        let mut board = Self::new();
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            board.grid[0][file] = Some((piece, Color::White));
            board.grid[1][file] = Some((Piece::Pawn, Color::White));
            board.grid[6][file] = Some((Piece::Pawn, Color::Black));
            board.grid[7][file] = Some((piece, Color::Black));
        }
        board
    }

    pub fn in_bounds(&self, square: Square) -> bool {
        square.in_bounds()
    }

    /// True only for on-board squares with nothing on them.
    pub fn is_empty(&self, square: Square) -> bool {
        square.in_bounds() && self.get(square).is_none()
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    pub fn get(&self, square: Square) -> Option<ColoredPiece> {
        let (rank, file) = square.index()?;
        self.grid[rank][file]
    }

    pub fn put(&mut self, square: Square, piece: Piece, color: Color) -> Result<(), BoardError> {
        let (rank, file) = square.index().ok_or(BoardError::OutOfBounds { square })?;
        if self.grid[rank][file].is_some() {
            return Err(BoardError::SquareOccupied);
        }
        self.grid[rank][file] = Some((piece, color));
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Option<ColoredPiece> {
        let (rank, file) = square.index()?;
        self.grid[rank][file].take()
    }

    fn set(&mut self, square: Square, contents: Option<ColoredPiece>) {
        if let Some((rank, file)) = square.index() {
            self.grid[rank][file] = contents;
        }
    }

    /// Iterates over every occupied square.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Applies `chess_move` in place, recording whatever stood on the
    /// destination square in the move's capture snapshot. A pawn landing on
    /// its far rank is replaced by a queen of the same color.
    ///
    /// No legality check is performed: callers must only apply moves obtained
    /// from `legal_moves` (or `pseudo_legal_moves` during generation), and must
    /// pair every call with `revert_move` in last-in, first-out order.
    pub fn apply_move(&mut self, chess_move: &mut ChessMove) {
        let from_square = chess_move.from_square();
        let to_square = chess_move.to_square();

        chess_move.set_capture(self.get(to_square));

        let moved = self.remove(from_square).map(|(piece, color)| {
            if piece == Piece::Pawn && to_square.rank() == color.promotion_rank() {
                (Piece::Queen, color)
            } else {
                (piece, color)
            }
        });
        self.set(to_square, moved);

        trace!("applied {}", chess_move);
    }

    /// Undoes the most recent `apply_move` of `chess_move`: whatever stands on
    /// the destination goes back to the origin and the capture snapshot is
    /// restored on the destination.
    ///
    /// The piece is moved back as it is, so reverting a promotion leaves the
    /// queen on the origin square rather than the pawn.
    pub fn revert_move(&mut self, chess_move: &ChessMove) {
        let from_square = chess_move.from_square();
        let to_square = chess_move.to_square();

        let moved = self.remove(to_square);
        self.set(from_square, moved);
        self.set(to_square, chess_move.capture());

        trace!("reverted {}", chess_move);
    }

    /// The first king of `color` in rank-major scan order.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, piece)| piece == (Piece::King, color))
            .map(|(sq, _)| sq)
    }

    /// Whether any opposing piece's pseudo-legal targets include the king of
    /// `color`. A side without a king is never in check.
    pub fn in_check(&self, color: Color) -> bool {
        let king = match self.find_king(color) {
            Some(sq) => sq,
            None => return false,
        };

        self.pieces()
            .filter(|&(_, (_, piece_color))| piece_color != color)
            .any(|(sq, (piece, piece_color))| {
                targets::generate(self, piece, piece_color, sq).contains(&king)
            })
    }

    /// Checks the single-king-per-side invariant that `find_king` relies on.
    pub fn validate_kings(&self) -> Result<(), BoardError> {
        for &color in Color::ALL.iter() {
            let count = self
                .pieces()
                .filter(|&(_, piece)| piece == (Piece::King, color))
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        use $crate::board::{color::Color, piece::Piece, square::Square, Board};
        let mut board = Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 64 squares
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let (piece, color): (Piece, Color) = Piece::from_fen(c)
                    .expect("Invalid character in chess position");
                // The macro input is from white's perspective, so the first
                // row of characters is rank 8.
                let rank = 7 - (i / 8) as i8;
                let file = (i % 8) as i8;
                board.put(Square::new(rank, file), piece, color).unwrap();
            }
        }
        board
    }};
}
