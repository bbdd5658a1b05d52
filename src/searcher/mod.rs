//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The searcher explores the game tree in place on the caller's board,
//! applying and reverting trial moves depth-first. Every score is reported
//! from the searcher's own color's point of view at every ply: the searcher
//! maximizes over its own moves and minimizes over its opponent's, but the
//! leaf evaluation is never negated.
//!
//! A position where either king is checkmated is a terminal node regardless of
//! which side is nominally to move there.

use log::debug;
use thiserror::Error;

use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::ChessMove;

#[cfg(test)]
mod tests;

/// Stand-ins for the unbounded search window. A maximizing node with no
/// moves reports `NEGATIVE_INFINITY`, a minimizing node `POSITIVE_INFINITY`.
pub const NEGATIVE_INFINITY: i32 = i32::MIN;
pub const POSITIVE_INFINITY: i32 = i32::MAX;

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("depth must be at least 1")]
    DepthTooLow,
}

pub struct Searcher {
    color: Color,
    search_depth: u8,
    pruning: bool,
    searched_position_count: usize,
    termination_count: usize,
}

impl Searcher {
    pub fn new(color: Color, depth: u8) -> Self {
        Self {
            color,
            search_depth: depth,
            pruning: true,
            searched_position_count: 0,
            termination_count: 0,
        }
    }

    /// Turns alpha-beta cutoffs on or off. With pruning off the searcher
    /// performs a plain minimax traversal in the same move order.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn opponent(&self) -> Color {
        self.color.opposite()
    }

    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    pub fn termination_count(&self) -> usize {
        self.termination_count
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.termination_count = 0;
    }

    /// Picks a move for this searcher's color. The board is returned to its
    /// original state before this returns.
    pub fn select_move(&mut self, board: &mut Board) -> Result<ChessMove, SearchError> {
        self.select_move_with_score(board)
            .map(|(chess_move, _)| chess_move)
    }

    /// Like `select_move`, but also returns the chosen move's minimax value.
    pub fn select_move_with_score(
        &mut self,
        board: &mut Board,
    ) -> Result<(ChessMove, i32), SearchError> {
        if self.search_depth == 0 {
            return Err(SearchError::DepthTooLow);
        }
        self.reset_stats();

        let candidates = board.legal_moves(self.color);
        let mut best_move: Option<ChessMove> = None;
        let mut best_score = NEGATIVE_INFINITY;

        for mut chess_move in candidates {
            board.apply_move(&mut chess_move);
            let score = self.search(
                board,
                self.search_depth - 1,
                NEGATIVE_INFINITY,
                POSITIVE_INFINITY,
                false,
            );
            board.revert_move(&chess_move);

            debug!("candidate {} scored {}", chess_move, score);

            // strictly greater: the first of equally scored moves wins, and a
            // move scoring NEGATIVE_INFINITY is never chosen
            if score > best_score {
                best_move = Some(chess_move);
                best_score = score;
            }
        }

        let best_move = best_move.ok_or(SearchError::NoAvailableMoves)?;
        debug!(
            "{} selected {} (score {}, depth {}, {} positions searched, {} cutoffs)",
            self.color,
            best_move,
            best_score,
            self.search_depth,
            self.searched_position_count,
            self.termination_count
        );

        Ok((best_move, best_score))
    }

    /// Minimax value of `board` from this searcher's point of view.
    /// `maximizing` selects whose moves are expanded: this searcher's own
    /// when true, its opponent's when false.
    ///
    /// Every node runs two full checkmate tests before expanding, and every
    /// leaf evaluation generates legal moves for both sides. That cost is part
    /// of the scoring rules, not an oversight to cache away.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.searched_position_count += 1;

        if depth == 0 || board.is_checkmate(self.color) || board.is_checkmate(self.opponent()) {
            return board.evaluate(self.color);
        }

        if maximizing {
            let mut max_eval = NEGATIVE_INFINITY;
            for mut chess_move in board.legal_moves(self.color) {
                board.apply_move(&mut chess_move);
                let score = self.search(board, depth - 1, alpha, beta, false);
                board.revert_move(&chess_move);

                max_eval = max_eval.max(score);
                alpha = alpha.max(score);
                if self.pruning && beta <= alpha {
                    self.termination_count += 1;
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = POSITIVE_INFINITY;
            for mut chess_move in board.legal_moves(self.opponent()) {
                board.apply_move(&mut chess_move);
                let score = self.search(board, depth - 1, alpha, beta, true);
                board.revert_move(&chess_move);

                min_eval = min_eval.min(score);
                beta = beta.min(score);
                if self.pruning && beta <= alpha {
                    self.termination_count += 1;
                    break;
                }
            }
            min_eval
        }
    }
}
