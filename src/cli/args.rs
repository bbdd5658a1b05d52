//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{calculate_best_move::CalculateBestMoveArgs, play::PlayArgs};

#[derive(StructOpt)]
#[structopt(
    name = "chess",
    about = "A minimax chess engine with alpha-beta pruning ♛"
)]
pub enum Chess {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which will search for the best move using alpha-beta pruning at the given `--depth` (default: 2). Your color will be chosen at random unless you specify with `--color`. The initial piece placement can be given in FEN notation with `--fen` (default: starting position). Enter moves as coordinates, e.g. `e2e4`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Use the chess engine to determine the best move for `--color` from a position given in FEN notation with `--fen` (required). You can optionally specify the depth of the search with the `--depth` arg (default: 2)."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        match self {
            Self::Play(cmd) => cmd.execute(),
            Self::CalculateBestMove(cmd) => cmd.execute(),
        }
    }
}
