//! Calculate best move command - determine the best move from a position.

use minimax_chess::board::color::Color;
use minimax_chess::board::Board;
use minimax_chess::game::engine::{Engine, EngineConfig};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    #[structopt(short = "c", long = "color")]
    pub color: Color,
    #[structopt(long = "fen")]
    pub starting_position: Board,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let config = EngineConfig {
            search_depth: self.depth,
            starting_position: self.starting_position,
        };
        let mut engine = Engine::with_config(config);
        engine.set_turn(self.color);

        match engine.make_computer_move() {
            Ok(best_move) => println!("{}", best_move.to_coordinate()),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
