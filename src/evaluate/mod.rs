use std::fmt;

use crate::board::color::Color;
use crate::board::Board;

use self::piece_values::material_value;

mod piece_values;

/// Weight of each legal move of difference between the two sides.
pub const MOBILITY_WEIGHT: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Checkmate,
    Stalemate,
}

impl fmt::Display for GameEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEnding::Checkmate => write!(f, "checkmate"),
            GameEnding::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.in_check(color) && self.legal_moves(color).is_empty()
    }

    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.in_check(color) && self.legal_moves(color).is_empty()
    }

    /// Returns the game ending state for `color`, the side to move next, if
    /// it has no legal moves. Otherwise returns None.
    pub fn game_ending(&mut self, color: Color) -> Option<GameEnding> {
        if !self.legal_moves(color).is_empty() {
            return None;
        }

        if self.in_check(color) {
            Some(GameEnding::Checkmate)
        } else {
            Some(GameEnding::Stalemate)
        }
    }

    /// Static leaf heuristic from the point of view of `perspective`:
    /// material balance plus `MOBILITY_WEIGHT` times the difference in legal
    /// move counts.
    pub fn evaluate(&mut self, perspective: Color) -> i32 {
        let material = self.material_score(perspective);
        let own_mobility = self.legal_moves(perspective).len() as i32;
        let opponent_mobility = self.legal_moves(perspective.opposite()).len() as i32;

        material + MOBILITY_WEIGHT * (own_mobility - opponent_mobility)
    }

    /// Sum of piece values, positive for `perspective`'s pieces and negative
    /// for the opponent's.
    pub fn material_score(&self, perspective: Color) -> i32 {
        self.pieces()
            .map(|(_, (piece, color))| {
                let value = material_value(piece);
                if color == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}
