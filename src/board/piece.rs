use super::color::Color;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    pub fn to_fen(&self, color: Color) -> char {
        match (self, color) {
            (Piece::Bishop, Color::Black) => 'b',
            (Piece::Bishop, Color::White) => 'B',
            (Piece::King, Color::Black) => 'k',
            (Piece::King, Color::White) => 'K',
            (Piece::Knight, Color::Black) => 'n',
            (Piece::Knight, Color::White) => 'N',
            (Piece::Pawn, Color::Black) => 'p',
            (Piece::Pawn, Color::White) => 'P',
            (Piece::Queen, Color::Black) => 'q',
            (Piece::Queen, Color::White) => 'Q',
            (Piece::Rook, Color::Black) => 'r',
            (Piece::Rook, Color::White) => 'R',
        }
    }

    pub fn from_fen(c: char) -> Option<(Piece, Color)> {
        match c {
            'b' => Some((Piece::Bishop, Color::Black)),
            'B' => Some((Piece::Bishop, Color::White)),
            'k' => Some((Piece::King, Color::Black)),
            'K' => Some((Piece::King, Color::White)),
            'n' => Some((Piece::Knight, Color::Black)),
            'N' => Some((Piece::Knight, Color::White)),
            'p' => Some((Piece::Pawn, Color::Black)),
            'P' => Some((Piece::Pawn, Color::White)),
            'q' => Some((Piece::Queen, Color::Black)),
            'Q' => Some((Piece::Queen, Color::White)),
            'r' => Some((Piece::Rook, Color::Black)),
            'R' => Some((Piece::Rook, Color::White)),
            _ => None,
        }
    }

    pub fn to_unicode(&self, color: Color) -> char {
        match (self, color) {
            (Piece::Pawn, Color::White) => '♙',
            (Piece::Knight, Color::White) => '♘',
            (Piece::Bishop, Color::White) => '♗',
            (Piece::Rook, Color::White) => '♖',
            (Piece::Queen, Color::White) => '♕',
            (Piece::King, Color::White) => '♔',
            (Piece::Pawn, Color::Black) => '♟',
            (Piece::Knight, Color::Black) => '♞',
            (Piece::Bishop, Color::Black) => '♝',
            (Piece::Rook, Color::Black) => '♜',
            (Piece::Queen, Color::Black) => '♛',
            (Piece::King, Color::Black) => '♚',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_case_encodes_color() {
        assert_eq!(Piece::Knight.to_fen(Color::White), 'N');
        assert_eq!(Piece::Knight.to_fen(Color::Black), 'n');
        assert_eq!(Piece::from_fen('Q'), Some((Piece::Queen, Color::White)));
        assert_eq!(Piece::from_fen('k'), Some((Piece::King, Color::Black)));
    }

    #[test]
    fn test_from_fen_rejects_digits() {
        assert_eq!(Piece::from_fen('3'), None);
    }
}
