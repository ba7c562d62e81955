//! Array-form board: the 8x8 grid of cells used to build a position and to
//! hand snapshots to renderers and evaluators.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Placement text of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// An 8x8 grid of optional pieces, indexed `[rank][file]` with rank 0 = rank 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArrayBoard {
    cells: [[Option<Piece>; 8]; 8],
}

impl ArrayBoard {
    /// A board with no pieces.
    pub const fn empty() -> ArrayBoard {
        ArrayBoard { cells: [[None; 8]; 8] }
    }

    /// The standard starting array.
    pub fn starting_position() -> ArrayBoard {
        const BACK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut board = ArrayBoard::empty();
        for color in Color::ALL {
            for (file, kind) in BACK.into_iter().enumerate() {
                board.cells[color.back_rank() as usize][file] = Some(Piece::new(kind, color));
                board.cells[color.pawn_rank() as usize][file] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Piece at zero-based `rank`/`file`; `None` if empty or off the board.
    #[inline]
    pub fn get(&self, rank: i8, file: i8) -> Option<Piece> {
        if !(0..8).contains(&rank) || !(0..8).contains(&file) {
            return None;
        }
        self.cells[rank as usize][file as usize]
    }

    /// Place (or clear, with `None`) a cell.
    ///
    /// # Panics
    ///
    /// Panics if `rank` or `file` is not in `0..8`.
    #[inline]
    pub fn set(&mut self, rank: usize, file: usize, piece: Option<Piece>) {
        self.cells[rank][file] = piece;
    }

    /// Build a board from rows of cells, rank 8 first (reading order).
    ///
    /// Rejects anything that is not exactly 8 rows of 8 cells.
    pub fn from_rows(rows: &[Vec<Option<Piece>>]) -> Result<ArrayBoard, BoardError> {
        if rows.len() != 8 {
            return Err(BoardError::WrongRankCount { found: rows.len() });
        }
        let mut board = ArrayBoard::empty();
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != 8 {
                return Err(BoardError::BadRankLength {
                    rank: 8 - row_index,
                    length: row.len(),
                });
            }
            board.cells[7 - row_index].copy_from_slice(row);
        }
        Ok(board)
    }
}

impl FromStr for ArrayBoard {
    type Err = BoardError;

    /// Parse placement text: 8 `/`-separated rows, rank 8 first. Letters are
    /// pieces (uppercase White), digits skip that many empty squares, `.` is
    /// one empty square.
    fn from_str(s: &str) -> Result<ArrayBoard, BoardError> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(BoardError::WrongRankCount { found: rows.len() });
        }

        let mut board = ArrayBoard::empty();
        for (row_index, row) in rows.iter().enumerate() {
            let rank = 7 - row_index;
            let mut file = 0usize;
            for c in row.chars() {
                match c {
                    '1'..='8' => file += c as usize - '0' as usize,
                    '.' => file += 1,
                    _ => {
                        let piece = Piece::from_char(c).ok_or(BoardError::InvalidToken { token: c })?;
                        if file < 8 {
                            board.cells[rank][file] = Some(piece);
                        }
                        file += 1;
                    }
                }
            }
            if file != 8 {
                return Err(BoardError::BadRankLength { rank: rank + 1, length: file });
            }
        }
        Ok(board)
    }
}

impl fmt::Display for ArrayBoard {
    /// Placement text, the inverse of [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for cell in self.cells[rank] {
                match cell {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ArrayBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayBoard(\"{self}\")")
    }
}
