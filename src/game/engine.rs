use log::{debug, info};
use thiserror::Error;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::square::Square;
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::evaluate::GameEnding;
use crate::searcher::{SearchError, Searcher};

/// Core engine state and configuration
#[derive(Clone)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub starting_position: Board,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 2,
            starting_position: Board::starting_position(),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("Invalid move")]
    InvalidMove,
    #[error("The game is over ({ending})")]
    GameOver { ending: GameEnding },
    #[error("Board error: {error}")]
    BoardError { error: BoardError },
    #[error("Search error: {error}")]
    SearchError { error: SearchError },
}

impl From<BoardError> for EngineError {
    fn from(error: BoardError) -> Self {
        EngineError::BoardError { error }
    }
}

impl From<SearchError> for EngineError {
    fn from(error: SearchError) -> Self {
        EngineError::SearchError { error }
    }
}

/// Drives a game on a single board: tracks whose turn it is, validates
/// submitted moves against the legal move list, and asks a searcher for the
/// computer's moves. White moves first.
pub struct Engine {
    board: Board,
    turn: Color,
    move_history: Vec<ChessMove>,
    search_depth: u8,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            board: config.starting_position,
            turn: Color::White,
            move_history: Vec::new(),
            search_depth: config.search_depth,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    pub fn move_history(&self) -> &[ChessMove] {
        &self.move_history
    }

    /// Legal moves for the side to move.
    pub fn valid_moves(&mut self) -> Vec<ChessMove> {
        self.board.legal_moves(self.turn)
    }

    /// Legal destinations for the piece on `from`, if it belongs to the side
    /// to move.
    pub fn valid_destinations(&mut self, from: Square) -> Vec<Square> {
        self.valid_moves()
            .into_iter()
            .filter(|chess_move| chess_move.from_square() == from)
            .map(|chess_move| chess_move.to_square())
            .collect()
    }

    /// Checkmate or stalemate for the side to move, if either holds.
    pub fn check_game_over(&mut self) -> Option<GameEnding> {
        self.board.game_ending(self.turn)
    }

    pub fn make_move_by_squares(
        &mut self,
        from: Square,
        to: Square,
    ) -> Result<ChessMove, EngineError> {
        if let Some(ending) = self.check_game_over() {
            return Err(EngineError::GameOver { ending });
        }

        let chess_move = self
            .valid_moves()
            .into_iter()
            .find(|chess_move| chess_move.from_square() == from && chess_move.to_square() == to)
            .ok_or(EngineError::InvalidMove)?;

        Ok(self.commit(chess_move))
    }

    /// Searches for and plays a move for the side to move.
    pub fn make_computer_move(&mut self) -> Result<ChessMove, EngineError> {
        if let Some(ending) = self.check_game_over() {
            return Err(EngineError::GameOver { ending });
        }

        let mut searcher = Searcher::new(self.turn, self.search_depth);
        let chess_move = searcher.select_move(&mut self.board)?;
        debug!(
            "searched {} positions for {}",
            searcher.searched_position_count(),
            chess_move
        );

        Ok(self.commit(chess_move))
    }

    /// Takes back the most recent move, if any.
    pub fn undo_last_move(&mut self) -> Option<ChessMove> {
        let chess_move = self.move_history.pop()?;
        self.board.revert_move(&chess_move);
        self.turn = self.turn.opposite();
        Some(chess_move)
    }

    fn commit(&mut self, mut chess_move: ChessMove) -> ChessMove {
        self.board.apply_move(&mut chess_move);
        info!("{} played {}", self.turn, chess_move);
        self.move_history.push(chess_move);
        self.turn = self.turn.opposite();
        chess_move
    }
}
