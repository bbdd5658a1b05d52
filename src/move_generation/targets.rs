//! Per-piece move shapes.
//!
//! Every generator here is a pure function of the board contents, the moving
//! side and the origin square. They never mutate the board and never consider
//! whether the mover's own king is left in check.

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::board::Board;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Squares a `piece` of `color` standing on `square` could move to.
pub fn generate(board: &Board, piece: Piece, color: Color, square: Square) -> Vec<Square> {
    match piece {
        Piece::Pawn => pawn_targets(board, color, square),
        Piece::Knight => step_targets(board, color, square, &KNIGHT_OFFSETS),
        Piece::Bishop => sliding_targets(board, color, square, &BISHOP_DIRECTIONS),
        Piece::Rook => sliding_targets(board, color, square, &ROOK_DIRECTIONS),
        Piece::Queen => sliding_targets(board, color, square, &QUEEN_DIRECTIONS),
        Piece::King => step_targets(board, color, square, &KING_OFFSETS),
    }
}

pub fn pawn_targets(board: &Board, color: Color, square: Square) -> Vec<Square> {
    let mut targets = vec![];
    let direction = color.pawn_direction();

    let single = square.offset(direction, 0);
    if board.is_empty(single) {
        targets.push(single);

        let double = square.offset(2 * direction, 0);
        if square.rank() == color.pawn_starting_rank() && board.is_empty(double) {
            targets.push(double);
        }
    }

    for &file_delta in [-1, 1].iter() {
        let diagonal = square.offset(direction, file_delta);
        if let Some((_, target_color)) = board.get(diagonal) {
            if target_color != color {
                targets.push(diagonal);
            }
        }
    }

    targets
}

/// Single-step movers (knight, king): any in-bounds offset not holding a
/// piece of the mover's own color.
fn step_targets(board: &Board, color: Color, square: Square, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .map(|&(rank_delta, file_delta)| square.offset(rank_delta, file_delta))
        .filter(|target| target.in_bounds())
        .filter(|&target| match board.get(target) {
            Some((_, target_color)) => target_color != color,
            None => true,
        })
        .collect()
}

/// Rays that run through empty squares, stop before a friendly piece and
/// stop on (capturing) an opposing one.
fn sliding_targets(
    board: &Board,
    color: Color,
    square: Square,
    directions: &[(i8, i8)],
) -> Vec<Square> {
    let mut targets = vec![];

    for &(rank_delta, file_delta) in directions {
        let mut target = square.offset(rank_delta, file_delta);
        while target.in_bounds() {
            match board.get(target) {
                None => targets.push(target),
                Some((_, target_color)) => {
                    if target_color != color {
                        targets.push(target);
                    }
                    break;
                }
            }
            target = target.offset(rank_delta, file_delta);
        }
    }

    targets
}
