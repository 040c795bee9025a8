//! Game state and move execution.
//!
//! This module provides the mutable game state for chess, including:
//! - [`Position`]: one board plus a side-to-move flag
//! - Unchecked move application with an inverse-move log ([`Undo`])
//! - Validated move application returning [`MoveError`]
//! - Algebraic coordinate parsing and formatting
//!
//! Search and legality checking run make/unmake over a single mutable
//! position instead of cloning the whole state at every node.

use std::fmt;

use crate::board::{Board, Color, Piece, PieceType, Square};
use crate::movegen;

/// A move as an ordered pair of board coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// Inverse-move log entry: everything needed to restore the position a move
/// was made from. `moved` holds the piece as it stood before any promotion.
#[derive(Copy, Clone, Debug)]
pub struct Undo {
    mv: Move,
    moved: Option<Piece>,
    captured: Option<Piece>,
}

/// Result of attempting to play a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Source square is empty
    NoPiece,
    /// Source piece belongs to the opponent
    WrongColor,
    /// Move is pseudo-legal but leaves the mover's king attacked
    SelfCheck,
    /// Destination is not reachable for that piece
    Illegal,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPiece => write!(f, "illegal move: no piece on the source square"),
            MoveError::WrongColor => write!(f, "illegal move: piece belongs to the opponent"),
            MoveError::SelfCheck => write!(f, "illegal move: leaves the king in check"),
            MoveError::Illegal => write!(f, "illegal move: not a legal destination"),
        }
    }
}

impl std::error::Error for MoveError {}

/// A chess position: board plus side to move.
#[derive(Clone)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// The standard starting position, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::starting(),
            side_to_move: Color::White,
        }
    }

    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
        }
    }

    /// Apply a move without any validation.
    ///
    /// Relocates the source piece, overwriting whatever occupied the
    /// destination, promotes a pawn reaching its last rank to a queen, and
    /// flips the side to move. The caller must supply a move obtained from
    /// the move generator; anything else silently produces a rule-violating
    /// position. Returns the log entry for [`Position::unmake_move`].
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let moved = self.board.get(mv.from);
        let captured = self.board.get(mv.to);
        self.board.set(mv.from, None);
        let placed = match moved {
            Some(p) if p.kind == PieceType::Pawn && mv.to.0 == p.color.promotion_row() => {
                Some(Piece::new(p.color, PieceType::Queen))
            }
            other => other,
        };
        self.board.set(mv.to, placed);
        self.side_to_move = self.side_to_move.other();
        Undo {
            mv,
            moved,
            captured,
        }
    }

    /// Exact inverse of [`Position::make_move`].
    pub fn unmake_move(&mut self, undo: Undo) {
        self.board.set(undo.mv.from, undo.moved);
        self.board.set(undo.mv.to, undo.captured);
        self.side_to_move = self.side_to_move.other();
    }

    /// Validate and apply a move for the side to move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::NoPiece`] if the source square is empty
    /// - [`MoveError::WrongColor`] if the piece is the opponent's
    /// - [`MoveError::SelfCheck`] if the move ignores a check on the mover
    /// - [`MoveError::Illegal`] if the destination is unreachable
    pub fn play_move(&mut self, mv: Move) -> Result<(), MoveError> {
        match self.board.get(mv.from) {
            None => return Err(MoveError::NoPiece),
            Some(p) if p.color != self.side_to_move => return Err(MoveError::WrongColor),
            Some(_) => {}
        }
        if movegen::legal_moves(self).contains(&mv) {
            self.make_move(mv);
            Ok(())
        } else if movegen::pseudo_moves(self).contains(&mv) {
            Err(MoveError::SelfCheck)
        } else {
            Err(MoveError::Illegal)
        }
    }

    /// Legal moves for the side to move, in generation order.
    pub fn legal_moves(&self) -> Vec<Move> {
        movegen::legal_moves(self)
    }

    /// Whether `color`'s king is attacked in this position.
    pub fn in_check(&self, color: Color) -> bool {
        self.board.in_check(color)
    }
}

/// Parse an algebraic square name (e.g. "e2") into (row, col).
///
/// Returns `None` for anything that is not a file a-h followed by a rank 1-8.
pub fn parse_square(s: &str) -> Option<Square> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    let col = (file - b'a') as usize;
    let row = 7 - (rank - b'1') as usize;
    Some((row, col))
}

/// Format a square as its algebraic name (e.g. "e2").
pub fn square_name((row, col): Square) -> String {
    format!("{}{}", (b'a' + col as u8) as char, 8 - row)
}

/// Parse a move in from-to form (e.g. "e2e4").
pub fn parse_move(s: &str) -> Option<Move> {
    if s.len() != 4 || !s.is_ascii() {
        return None;
    }
    let from = parse_square(&s[..2])?;
    let to = parse_square(&s[2..])?;
    Some(Move::new(from, to))
}

/// Format a move in from-to form (e.g. "e2e4").
pub fn move_name(mv: Move) -> String {
    format!("{}{}", square_name(mv.from), square_name(mv.to))
}
