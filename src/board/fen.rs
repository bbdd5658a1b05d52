use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::BoardError;
use super::piece::Piece;
use super::square::Square;
use super::Board;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

static PLACEMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        # `(?x)` - insignificant whitespace mode. makes it easier to comment
        ^
        ([pnbrqkPNBRQK1-8]{1,8}) # eighth rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # seventh rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # sixth rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # fifth rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # fourth rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # third rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # second rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # first rank
        $
        ",
    )
    .expect("PLACEMENT_RE regex should be valid")
});

impl Board {
    /// Builds a board from the piece-placement field of a FEN string. Any
    /// trailing fields (side to move, castling, ...) are ignored since the
    /// board carries no such state.
    ///
    /// The resulting position must hold exactly one king per side.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let invalid = |reason: &str| BoardError::InvalidFen {
            fen: fen.to_string(),
            reason: reason.to_string(),
        };

        let placement = fen
            .split_whitespace()
            .next()
            .ok_or_else(|| invalid("empty input"))?;
        let caps = PLACEMENT_RE
            .captures(placement)
            .ok_or_else(|| invalid("could not parse piece placement"))?;

        let mut board = Self::new();

        for rank_capture_index in 1..=8 {
            let rank_str = &caps[rank_capture_index];
            let rank = (8 - rank_capture_index) as i8;
            let mut file: i8 = 0;

            for fen_char in rank_str.chars() {
                if file >= 8 {
                    return Err(invalid("rank describes more than 8 squares"));
                }
                match Piece::from_fen(fen_char) {
                    Some((piece, color)) => {
                        board.put(Square::new(rank, file), piece, color)?;
                        file += 1;
                    }
                    None => {
                        // must be a run of empty squares
                        let empty_square_count = fen_char
                            .to_digit(10)
                            .ok_or_else(|| invalid("unexpected character"))?;
                        file += empty_square_count as i8;
                    }
                }
            }

            if file != 8 {
                return Err(invalid("rank does not describe exactly 8 squares"));
            }
        }

        board.validate_kings()?;
        Ok(board)
    }

    /// The piece-placement field of this position in FEN.
    pub fn to_fen(&self) -> String {
        let mut fen_rows = vec![];
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty_square_count = 0;
            for file in 0..8 {
                match self.get(Square::new(rank, file)) {
                    Some((piece, color)) => {
                        if empty_square_count > 0 {
                            row.push_str(&empty_square_count.to_string());
                            empty_square_count = 0;
                        }
                        row.push(piece.to_fen(color));
                    }
                    None => empty_square_count += 1,
                }
            }
            if empty_square_count > 0 {
                row.push_str(&empty_square_count.to_string());
            }
            fen_rows.push(row);
        }
        fen_rows.join("/")
    }
}

// used for parsing cli args
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Self::from_fen(fen)
    }
}
