//! Board representation and attack detection.
//!
//! The board is a fixed 8x8 grid of optional pieces. Row 0 is the far rank
//! (Black's home), row 7 the near rank (White's home), so White pawns advance
//! toward row 0. Attack detection scans outward from a target square: pawn
//! attackers, knight jumps, orthogonal and diagonal rays, and adjacent kings.

use std::fmt;

use crate::constants::{BISHOP_DIRS, BOARD_SIZE, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRS};

/// A board coordinate as (row, col), both zero-indexed.
pub type Square = (usize, usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta a pawn of this color advances by.
    #[inline]
    pub fn forward(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row this color's pawns start on.
    #[inline]
    pub fn pawn_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which this color's pawns promote.
    #[inline]
    pub fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece: a type tagged with its color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
}

impl Piece {
    pub fn new(color: Color, kind: PieceType) -> Self {
        Self { color, kind }
    }

    /// ASCII code: uppercase for White, lowercase for Black.
    pub fn to_char(self) -> char {
        let c = match self.kind {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parse an ASCII piece code. Returns `None` for anything else.
    pub fn from_char(c: char) -> Option<Self> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, kind })
    }
}

/// An 8x8 chess board.
///
/// Nothing here enforces that exactly one king per color exists; positions
/// built by hand must keep that invariant if they want [`Board::in_check`]
/// to behave sensibly.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

/// Back-rank piece order, file a through h.
const BACK_RANK: [PieceType; BOARD_SIZE] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

impl Board {
    /// An empty board.
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard starting position.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for col in 0..BOARD_SIZE {
            board.cells[0][col] = Some(Piece::new(Color::Black, BACK_RANK[col]));
            board.cells[1][col] = Some(Piece::new(Color::Black, PieceType::Pawn));
            board.cells[6][col] = Some(Piece::new(Color::White, PieceType::Pawn));
            board.cells[7][col] = Some(Piece::new(Color::White, BACK_RANK[col]));
        }
        board
    }

    /// Build a board from eight lines of eight piece codes, far rank first,
    /// with `.` for empty cells. Whitespace-only lines are skipped.
    ///
    /// Returns `None` if the text is not exactly 8x8 or contains an unknown
    /// code. Intended for tests and demos.
    pub fn from_ascii(text: &str) -> Option<Self> {
        let mut board = Self::empty();
        let mut rows = 0;
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if rows == BOARD_SIZE || line.chars().count() != BOARD_SIZE {
                return None;
            }
            for (col, c) in line.chars().enumerate() {
                if c != '.' {
                    board.cells[rows][col] = Some(Piece::from_char(c)?);
                }
            }
            rows += 1;
        }
        if rows == BOARD_SIZE { Some(board) } else { None }
    }

    /// Piece on a square, or `None` if empty or out of bounds.
    pub fn get(&self, (row, col): Square) -> Option<Piece> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        self.cells[row][col]
    }

    pub fn set(&mut self, (row, col): Square, piece: Option<Piece>) {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            self.cells[row][col] = piece;
        }
    }

    /// Apply a (row, col) delta to a square, or `None` if it leaves the board.
    pub fn offset((row, col): Square, dr: isize, dc: isize) -> Option<Square> {
        let row = row as isize + dr;
        let col = col as isize + dc;
        if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col) {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }

    /// Locate a king of the given color, scanning row-major.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[row][col] == Some(Piece::new(color, PieceType::King)) {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Whether any piece of `by` attacks `sq`.
    pub fn square_attacked(&self, sq: Square, by: Color) -> bool {
        // Pawns attack from the two squares diagonally behind the target,
        // relative to their own forward direction.
        let behind = -by.forward();
        for dc in [-1, 1] {
            if let Some(from) = Self::offset(sq, behind, dc) {
                if self.get(from) == Some(Piece::new(by, PieceType::Pawn)) {
                    return true;
                }
            }
        }
        for &(dr, dc) in &KNIGHT_OFFSETS {
            if let Some(from) = Self::offset(sq, dr, dc) {
                if self.get(from) == Some(Piece::new(by, PieceType::Knight)) {
                    return true;
                }
            }
        }
        if self.ray_hits(sq, by, &ROOK_DIRS, PieceType::Rook) {
            return true;
        }
        if self.ray_hits(sq, by, &BISHOP_DIRS, PieceType::Bishop) {
            return true;
        }
        for &(dr, dc) in &KING_OFFSETS {
            if let Some(from) = Self::offset(sq, dr, dc) {
                if self.get(from) == Some(Piece::new(by, PieceType::King)) {
                    return true;
                }
            }
        }
        false
    }

    /// Scan rays from `sq`; true if the first occupied cell on any ray holds
    /// a `slider` or queen of color `by`.
    fn ray_hits(&self, sq: Square, by: Color, dirs: &[(isize, isize)], slider: PieceType) -> bool {
        for &(dr, dc) in dirs {
            let mut cur = Self::offset(sq, dr, dc);
            while let Some(s) = cur {
                if let Some(piece) = self.get(s) {
                    if piece.color == by && (piece.kind == slider || piece.kind == PieceType::Queen)
                    {
                        return true;
                    }
                    break;
                }
                cur = Self::offset(s, dr, dc);
            }
        }
        false
    }

    /// Whether `color`'s king is attacked. A board with no king of that
    /// color reports not-in-check rather than erroring.
    pub fn in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(sq) => self.square_attacked(sq, color.other()),
            None => false,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{}  ", BOARD_SIZE - i)?;
            for cell in row {
                let ch = match cell {
                    Some(piece) => piece.to_char(),
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        Ok(())
    }
}
