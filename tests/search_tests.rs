//! Integration tests for the evaluator and the negamax search.

use minichess::board::{Board, Color};
use minichess::constants::MATE;
use minichess::eval::{evaluate, material};
use minichess::position::{Position, move_name};
use minichess::search::{ai_move, search};

/// Build a position from a board literal and a side to move.
fn position(text: &str, side: Color) -> Position {
    Position::from_board(Board::from_ascii(text).expect("valid board literal"), side)
}

// =============================================================================
// Evaluation
// =============================================================================

#[test]
fn test_starting_material_is_balanced() {
    let pos = Position::new();
    assert_eq!(material(&pos.board), 0);
    assert_eq!(evaluate(&pos), 0);
}

#[test]
fn test_material_sums_signed_piece_values() {
    // White rook and pawn against black knight and bishop; kings count zero.
    let pos = position(
        "....k...
         ........
         ..n.b...
         ........
         ........
         ........
         ...P....
         R...K...",
        Color::White,
    );
    assert_eq!(material(&pos.board), 5 + 1 - 3 - 3);
}

#[test]
fn test_evaluate_is_relative_to_side_to_move() {
    let text = "....k...
                ........
                ........
                ........
                ........
                ........
                ........
                Q...K...";
    let white_view = evaluate(&position(text, Color::White));
    let black_view = evaluate(&position(text, Color::Black));
    assert_eq!(white_view, 9);
    assert_eq!(black_view, -9);
}

// =============================================================================
// Forced moves and captures
// =============================================================================

#[test]
fn test_forced_queen_capture_at_depth_one() {
    // The adjacent queen checks the king and covers every flight square;
    // capturing it is the only legal move.
    let pos = position(
        "k.......
         ........
         ........
         ........
         ........
         ........
         ....q...
         ....K...",
        Color::White,
    );
    let moves = pos.legal_moves();
    assert_eq!(moves.len(), 1, "exactly one legal move expected");
    let best = ai_move(&pos, 1).expect("a legal move exists");
    assert_eq!(move_name(best), "e1e2");
}

#[test]
fn test_depth_one_picks_the_biggest_capture() {
    // The rook can take a queen or a rook; one ply of search prefers the
    // queen.
    let pos = position(
        ".......k
         .q......
         ........
         ........
         .R.....r
         ........
         ........
         ....K...",
        Color::White,
    );
    let best = ai_move(&pos, 1).expect("a legal move exists");
    assert_eq!(move_name(best), "b4b7");
}

// =============================================================================
// Mate and stalemate
// =============================================================================

#[test]
fn test_back_rank_mate_in_one() {
    let pos = position(
        ".......k
         ......pp
         ........
         ........
         ........
         ........
         ........
         R...K...",
        Color::White,
    );
    let result = search(&pos, 2);
    assert_eq!(
        result.best.map(move_name).as_deref(),
        Some("a1a8"),
        "rook to the back rank is mate"
    );
    assert_eq!(result.score, MATE);
}

#[test]
fn test_checkmated_side_has_no_move_and_mate_score() {
    let pos = position(
        "R......k
         ......pp
         ........
         ........
         ........
         ........
         ........
         ....K...",
        Color::Black,
    );
    assert!(pos.in_check(Color::Black));
    assert!(pos.legal_moves().is_empty());

    let result = search(&pos, 3);
    assert_eq!(result.best, None);
    assert_eq!(result.score, -MATE);
    assert_eq!(ai_move(&pos, 3), None);
}

#[test]
fn test_stalemate_scores_zero_not_mate() {
    // Black to move: the king is not attacked but has no square to go to.
    let pos = position(
        "k.......
         ..Q.....
         ..K.....
         ........
         ........
         ........
         ........
         ........",
        Color::Black,
    );
    assert!(!pos.in_check(Color::Black));
    assert!(pos.legal_moves().is_empty());

    let result = search(&pos, 3);
    assert_eq!(result.best, None);
    assert_eq!(result.score, 0, "stalemate is a draw, not a loss");
}

#[test]
fn test_losing_side_still_reports_a_move() {
    // Every white continuation loses to mate, but ai_move must still return
    // the move: a no-move answer is reserved for positions with no legal
    // move at all.
    let pos = position(
        "K.......
         ..k.....
         ........
         ........
         ........
         .q......
         ........
         ........",
        Color::White,
    );
    let moves = pos.legal_moves();
    assert_eq!(moves.len(), 1);
    assert_eq!(move_name(moves[0]), "a8a7");

    let result = search(&pos, 3);
    assert_eq!(result.best.map(move_name).as_deref(), Some("a8a7"));
    assert_eq!(result.score, -MATE, "the reply is mate, but the move stands");
}

// =============================================================================
// Determinism and accounting
// =============================================================================

#[test]
fn test_first_move_wins_score_ties() {
    // At depth 1 every opening move leaves the material balanced, so the
    // first move in generation order must be returned.
    let best = ai_move(&Position::new(), 1).expect("opening has legal moves");
    assert_eq!(move_name(best), "a2a3");
}

#[test]
fn test_depth_zero_is_clamped_to_one() {
    let best = ai_move(&Position::new(), 0).expect("opening has legal moves");
    assert_eq!(move_name(best), "a2a3");
}

#[test]
fn test_node_count_at_depth_two() {
    // 20 root moves, each answered by 20 replies: every root move costs one
    // depth-1 node plus 20 leaf evaluations.
    let result = search(&Position::new(), 2);
    assert_eq!(result.nodes, 20 * 21);
}

#[test]
fn test_search_is_deterministic() {
    let a = search(&Position::new(), 3);
    let b = search(&Position::new(), 3);
    assert_eq!(a.best, b.best);
    assert_eq!(a.score, b.score);
    assert_eq!(a.nodes, b.nodes);
}
