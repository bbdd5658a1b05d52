use super::*;
use crate::board::piece::Piece;
use crate::board::square::*;
use crate::{chess_position, std_move};

#[test]
fn test_reply_to_e4_is_a_legal_black_move() {
    let mut board = Board::starting_position();
    let mut e4 = std_move!(E2, E4, (Piece::Pawn, Color::White));
    board.apply_move(&mut e4);

    let mut searcher = Searcher::new(Color::Black, 1);
    let reply = searcher.select_move(&mut board).unwrap();

    let legal = board.legal_moves(Color::Black);
    assert_eq!(20, legal.len());
    assert!(legal.contains(&reply), "{} is not a legal reply", reply);
    assert_eq!(Color::Black, reply.color());
}

#[test]
fn test_search_leaves_board_unchanged() {
    let mut board = chess_position! {
        r...k...
        ....p...
        ..n.....
        ........
        ...Q....
        ........
        ....P...
        ....K..R
    };
    let before = board.clone();

    let mut searcher = Searcher::new(Color::White, 2);
    searcher.select_move(&mut board).unwrap();

    assert_eq!(before, board);
}

#[test]
fn test_captures_hanging_queen() {
    let mut board = chess_position! {
        q......k
        ........
        ........
        ........
        ........
        ........
        ........
        R.....K.
    };
    let mut searcher = Searcher::new(Color::White, 1);
    let chess_move = searcher.select_move(&mut board).unwrap();
    assert_eq!(std_move!(A1, A8, (Piece::Rook, Color::White)), chess_move);
}

#[test]
fn test_black_captures_hanging_rook() {
    let mut board = chess_position! {
        r.....k.
        ........
        ........
        ........
        ........
        ........
        .......K
        R.......
    };
    let mut searcher = Searcher::new(Color::Black, 1);
    let chess_move = searcher.select_move(&mut board).unwrap();
    assert_eq!(std_move!(A8, A1, (Piece::Rook, Color::Black)), chess_move);
}

#[test]
fn test_first_move_wins_ties() {
    // Kd2, Ke2 and Kf2 all score the same; Kd2 is generated first.
    let mut board = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        ........
        ....K...
    };
    let mut searcher = Searcher::new(Color::White, 1);
    let (chess_move, score) = searcher.select_move_with_score(&mut board).unwrap();
    assert_eq!(std_move!(E1, D2, (Piece::King, Color::White)), chess_move);
    assert_eq!(30, score);
}

#[test]
fn test_no_move_when_checkmated() {
    let mut board = chess_position! {
        k.......
        .Q......
        ..K.....
        ........
        ........
        ........
        ........
        ........
    };
    let mut searcher = Searcher::new(Color::Black, 2);
    assert_eq!(
        Err(SearchError::NoAvailableMoves),
        searcher.select_move(&mut board)
    );
}

#[test]
fn test_no_move_when_stalemated() {
    let mut board = chess_position! {
        k.......
        ..Q.....
        .K......
        ........
        ........
        ........
        ........
        ........
    };
    let mut searcher = Searcher::new(Color::Black, 1);
    assert_eq!(
        Err(SearchError::NoAvailableMoves),
        searcher.select_move(&mut board)
    );
}

#[test]
fn test_zero_depth_is_rejected() {
    let mut board = Board::starting_position();
    let mut searcher = Searcher::new(Color::White, 0);
    assert_eq!(Err(SearchError::DepthTooLow), searcher.select_move(&mut board));
}

#[test]
fn test_leaf_score_is_never_negated() {
    let mut board = chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        ........
        R...K...
    };
    let expected = board.evaluate(Color::White);
    let mut searcher = Searcher::new(Color::White, 1);

    let as_max = searcher.search(&mut board, 0, NEGATIVE_INFINITY, POSITIVE_INFINITY, true);
    let as_min = searcher.search(&mut board, 0, NEGATIVE_INFINITY, POSITIVE_INFINITY, false);
    assert_eq!(expected, as_max);
    assert_eq!(expected, as_min);
}

#[test]
fn test_checkmate_is_terminal_for_either_side() {
    let mut board = chess_position! {
        k.......
        .Q......
        ..K.....
        ........
        ........
        ........
        ........
        ........
    };
    // black is mated; a white searcher stops here even with depth remaining
    let mut searcher = Searcher::new(Color::White, 3);
    let expected = board.evaluate(Color::White);
    let score = searcher.search(&mut board, 2, NEGATIVE_INFINITY, POSITIVE_INFINITY, true);
    assert_eq!(expected, score);
    assert_eq!(1, searcher.searched_position_count());
}

#[test]
fn test_stalemated_node_reports_unbounded_score() {
    let mut board = chess_position! {
        k.......
        ..Q.....
        .K......
        ........
        ........
        ........
        ........
        ........
    };
    // black is stalemated: the minimizing side has no moves to choose from
    let mut white_searcher = Searcher::new(Color::White, 2);
    let score = white_searcher.search(&mut board, 1, NEGATIVE_INFINITY, POSITIVE_INFINITY, false);
    assert_eq!(POSITIVE_INFINITY, score);

    // for a black searcher the same position is a maximizing node with no moves
    let mut black_searcher = Searcher::new(Color::Black, 2);
    let score = black_searcher.search(&mut board, 1, NEGATIVE_INFINITY, POSITIVE_INFINITY, true);
    assert_eq!(NEGATIVE_INFINITY, score);
}

#[test]
fn test_no_move_when_every_move_allows_stalemate() {
    // Ka7 is black's only move, and Qc8 then leaves black with none
    let mut board = chess_position! {
        k.......
        ..K.....
        ........
        ........
        ........
        .......Q
        ........
        ........
    };
    assert_eq!(1, board.legal_moves(Color::Black).len());

    let mut searcher = Searcher::new(Color::Black, 3);
    assert_eq!(
        Err(SearchError::NoAvailableMoves),
        searcher.select_move(&mut board)
    );

    let mut unpruned = Searcher::new(Color::Black, 3).with_pruning(false);
    assert_eq!(
        Err(SearchError::NoAvailableMoves),
        unpruned.select_move(&mut board)
    );
    assert_eq!(
        board,
        chess_position! {
            k.......
            ..K.....
            ........
            ........
            ........
            .......Q
            ........
            ........
        }
    );
}

fn assert_pruning_is_transparent(board: &mut Board, color: Color, depth: u8) {
    let mut pruned = Searcher::new(color, depth);
    let mut unpruned = Searcher::new(color, depth).with_pruning(false);

    let pruned_result = pruned.select_move_with_score(board).unwrap();
    let unpruned_result = unpruned.select_move_with_score(board).unwrap();

    assert_eq!(unpruned_result.0, pruned_result.0);
    assert_eq!(unpruned_result.1, pruned_result.1);
    assert_eq!(0, unpruned.termination_count());
    assert!(pruned.searched_position_count() <= unpruned.searched_position_count());
}

#[test]
fn test_alpha_beta_matches_minimax_at_depth_2() {
    let mut board = Board::starting_position();
    let mut e4 = std_move!(E2, E4, (Piece::Pawn, Color::White));
    board.apply_move(&mut e4);

    assert_pruning_is_transparent(&mut board, Color::Black, 2);
}

#[test]
fn test_alpha_beta_matches_minimax_at_depth_3() {
    let mut board = chess_position! {
        ....k...
        ..p.....
        ........
        ...n....
        ........
        ..N.....
        ....P...
        ....K...
    };
    assert_pruning_is_transparent(&mut board, Color::White, 3);
    assert_pruning_is_transparent(&mut board, Color::Black, 3);
}

#[test]
fn test_alpha_beta_prunes_something() {
    let mut board = chess_position! {
        ....k...
        ..p.....
        ........
        ...n....
        ........
        ..N.....
        ....P...
        ....K...
    };
    let mut searcher = Searcher::new(Color::White, 3);
    searcher.select_move(&mut board).unwrap();
    assert!(searcher.termination_count() > 0);
}
