//! Play command - play a game against the computer.

use minimax_chess::board::color::Color;
use minimax_chess::board::fen::STARTING_POSITION_FEN;
use minimax_chess::board::Board;
use minimax_chess::game::engine::{Engine, EngineConfig, EngineError};
use minimax_chess::input_handler::{parse_move_input, MoveInput};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "2")]
    pub depth: u8,
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: Color,
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: Board,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = EngineConfig {
            search_depth: self.depth,
            starting_position: self.starting_position,
        };
        let mut engine = Engine::with_config(config);
        let human_color = self.color;
        println!("You are playing {}.", human_color);

        loop {
            println!("{}", engine.board());

            if let Some(ending) = engine.check_game_over() {
                println!("{} for {}. Game over.", ending, engine.turn());
                return;
            }

            if engine.turn() != human_color {
                match engine.make_computer_move() {
                    Ok(chess_move) => println!("Computer played {}", chess_move.to_coordinate()),
                    Err(err) => {
                        eprintln!("Computer failed to move: {}", err);
                        return;
                    }
                }
                continue;
            }

            println!("{} to move (e.g. e2e4, or quit):", engine.turn());
            let (from, to) = match parse_move_input() {
                Ok(MoveInput::Coordinate { from, to }) => (from, to),
                Ok(MoveInput::Quit) => return,
                Err(err) => {
                    println!("{}", err);
                    continue;
                }
            };

            match engine.make_move_by_squares(from, to) {
                Ok(_) => (),
                Err(EngineError::InvalidMove) => println!("Invalid move: {}{}", from, to),
                Err(err) => println!("{}", err),
            }
        }
    }
}
