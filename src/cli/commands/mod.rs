//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod calculate_best_move;
pub mod play;
