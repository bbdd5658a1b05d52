pub mod targets;

use log::trace;

use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::ChessMove;

impl Board {
    /// Every move the pieces of `color` could make, ignoring king safety.
    /// Moves are ordered by origin square (a1, b1, ..., h8) and then by the
    /// piece's own target order.
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<ChessMove> {
        self.pieces()
            .filter(|&(_, (_, piece_color))| piece_color == color)
            .flat_map(|(from_square, (piece, piece_color))| {
                targets::generate(self, piece, piece_color, from_square)
                    .into_iter()
                    .map(move |to_square| {
                        ChessMove::new(from_square, to_square, (piece, piece_color))
                    })
            })
            .collect()
    }

    /// The pseudo-legal moves of `color` that do not leave its own king in
    /// check. Each candidate is applied, tested and reverted on this board, so
    /// the board is left as it was found unless a candidate promotes: a
    /// reverted promotion leaves a queen where the pawn stood.
    pub fn legal_moves(&mut self, color: Color) -> Vec<ChessMove> {
        let candidates = self.pseudo_legal_moves(color);
        let candidate_count = candidates.len();

        let legal: Vec<ChessMove> = candidates
            .into_iter()
            .filter(|chess_move| {
                let mut trial = *chess_move;
                self.apply_move(&mut trial);
                let leaves_king_safe = !self.in_check(color);
                self.revert_move(&trial);
                leaves_king_safe
            })
            .collect();

        trace!(
            "{} has {} legal of {} pseudo-legal moves",
            color,
            legal.len(),
            candidate_count
        );
        legal
    }
}
