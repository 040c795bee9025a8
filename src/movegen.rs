//! Pseudo-legal move generation and the check-legality filter.
//!
//! Moves are produced in board scan order (row-major, then column within a
//! row) and, per square, in the offset/direction order of the tables in
//! [`crate::constants`]. The order is part of the engine's observable
//! behavior: the search breaks score ties in favor of the first move seen.

use crate::board::{Board, Piece, PieceType, Square};
use crate::constants::{BISHOP_DIRS, BOARD_SIZE, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRS, ROOK_DIRS};
use crate::position::{Move, Position};

/// Legal moves for the side to move, in generation order.
///
/// Filters [`pseudo_moves`] by making each candidate on one scratch clone
/// and discarding those that leave the mover's own king attacked.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mover = pos.side_to_move;
    let mut scratch = pos.clone();
    pseudo_moves(pos)
        .into_iter()
        .filter(|&mv| {
            let undo = scratch.make_move(mv);
            let safe = !scratch.board.in_check(mover);
            scratch.unmake_move(undo);
            safe
        })
        .collect()
}

/// Pseudo-legal moves for every piece of the side to move.
pub fn pseudo_moves(pos: &Position) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let from = (row, col);
            if let Some(piece) = pos.board.get(from) {
                if piece.color == pos.side_to_move {
                    piece_moves(&pos.board, from, piece, &mut moves);
                }
            }
        }
    }
    moves
}

/// Pseudo-legal destinations for one piece.
pub fn piece_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    match piece.kind {
        PieceType::Pawn => pawn_moves(board, from, piece, out),
        PieceType::Knight => step_moves(board, from, piece, &KNIGHT_OFFSETS, out),
        PieceType::Bishop => sliding_moves(board, from, piece, &BISHOP_DIRS, out),
        PieceType::Rook => sliding_moves(board, from, piece, &ROOK_DIRS, out),
        PieceType::Queen => sliding_moves(board, from, piece, &QUEEN_DIRS, out),
        PieceType::King => step_moves(board, from, piece, &KING_OFFSETS, out),
    }
}

/// Pawn pushes and captures. Single push onto an empty cell, double push
/// from the start row through two empty cells, diagonal captures left then
/// right. No en passant.
fn pawn_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let dir = piece.color.forward();
    if let Some(one) = Board::offset(from, dir, 0) {
        if board.get(one).is_none() {
            out.push(Move::new(from, one));
            if from.0 == piece.color.pawn_row() {
                if let Some(two) = Board::offset(one, dir, 0) {
                    if board.get(two).is_none() {
                        out.push(Move::new(from, two));
                    }
                }
            }
        }
    }
    for dc in [-1, 1] {
        if let Some(to) = Board::offset(from, dir, dc) {
            if let Some(target) = board.get(to) {
                if target.color != piece.color {
                    out.push(Move::new(from, to));
                }
            }
        }
    }
}

/// Fixed-offset movers (knight, king): land on empty or enemy cells.
fn step_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[(isize, isize)],
    out: &mut Vec<Move>,
) {
    for &(dr, dc) in offsets {
        if let Some(to) = Board::offset(from, dr, dc) {
            match board.get(to) {
                Some(target) if target.color == piece.color => {}
                _ => out.push(Move::new(from, to)),
            }
        }
    }
}

/// Sliding movers (rook, bishop, queen): each ray extends until the board
/// edge, stopping before a friendly piece and on an enemy piece.
fn sliding_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    dirs: &[(isize, isize)],
    out: &mut Vec<Move>,
) {
    for &(dr, dc) in dirs {
        let mut cur = Board::offset(from, dr, dc);
        while let Some(to) = cur {
            match board.get(to) {
                None => {
                    out.push(Move::new(from, to));
                    cur = Board::offset(to, dr, dc);
                }
                Some(target) => {
                    if target.color != piece.color {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
        }
    }
}

/// A uniformly random legal move, or `None` if the side to move has none.
///
/// Used by the console's random opponent and for quick smoke games.
pub fn random_move(pos: &Position) -> Option<Move> {
    let moves = legal_moves(pos);
    if moves.is_empty() {
        None
    } else {
        Some(moves[fastrand::usize(..moves.len())])
    }
}
