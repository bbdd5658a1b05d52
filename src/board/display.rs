use std::fmt;

use super::square::Square;
use super::Board;

const FILE_LABELS: &str = "  a b c d e f g h";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", FILE_LABELS)?;
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let cell = match self.get(Square::new(rank, file)) {
                    Some((piece, color)) => piece.to_unicode(color),
                    None => '.',
                };
                write!(f, "{} ", cell)?;
            }
            writeln!(f, "{}", rank + 1)?;
        }
        write!(f, "{}", FILE_LABELS)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Board({})", self.to_fen())
    }
}
