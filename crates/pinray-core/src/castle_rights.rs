//! Castling rights: four independent flags that can only ever be cleared.

use std::fmt;

use crate::array_board::ArrayBoard;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Which wing to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File the king lands on.
    #[inline]
    pub const fn king_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// File the rook starts on.
    #[inline]
    pub const fn rook_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File the rook lands on.
    #[inline]
    pub const fn rook_target_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// The side a king move from `origin` to `destination` castles toward,
    /// if it is a two-file king step.
    #[inline]
    pub const fn from_king_step(origin: Square, destination: Square) -> Option<CastleSide> {
        match destination.file() - origin.file() {
            2 => Some(CastleSide::KingSide),
            -2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// Square the king of `color` lands on.
    #[inline]
    pub const fn king_destination(self, color: Color) -> Square {
        back_rank_square(color, self.king_file())
    }

    /// Square the rook of `color` starts on.
    #[inline]
    pub const fn rook_origin(self, color: Color) -> Square {
        back_rank_square(color, self.rook_file())
    }

    /// Square the rook of `color` lands on.
    #[inline]
    pub const fn rook_destination(self, color: Color) -> Square {
        back_rank_square(color, self.rook_target_file())
    }
}

/// Home square of the king of `color`.
#[inline]
pub const fn king_home(color: Color) -> Square {
    back_rank_square(color, KING_HOME_FILE)
}

#[inline]
const fn back_rank_square(color: Color, file: i8) -> Square {
    Square::from_index_unchecked((color.back_rank() * 8 + file) as u8)
}

/// Bit 0 = white king-side, 1 = white queen-side, 2 = black king-side, 3 = black queen-side.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

/// Per-square rights revoked when a move leaves from or lands on that square.
const REVOKED_BY_SQUARE: [CastleRights; 64] = {
    let mut table = [CastleRights::NONE; 64];
    table[Square::E1.index()] = CastleRights::WHITE_BOTH;
    table[Square::H1.index()] = CastleRights::WHITE_KING;
    table[Square::A1.index()] = CastleRights::WHITE_QUEEN;
    table[Square::E8.index()] = CastleRights::BLACK_BOTH;
    table[Square::H8.index()] = CastleRights::BLACK_KING;
    table[Square::A8.index()] = CastleRights::BLACK_QUEEN;
    table
};

/// Home file of both kings.
const KING_HOME_FILE: i8 = 4;

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);
    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);
    pub const WHITE_BOTH: CastleRights = CastleRights(0b0011);
    pub const BLACK_BOTH: CastleRights = CastleRights(0b1100);

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The single flag for `color` castling toward `side`.
    #[inline]
    pub const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::flag(color, side).0 != 0
    }

    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Rights left after a move from `origin` to `destination`.
    ///
    /// A king leaving home, a rook leaving its corner, or anything landing on
    /// a corner (capturing the rook) clears the matching flags for good.
    #[inline]
    pub const fn after_move(self, origin: Square, destination: Square) -> CastleRights {
        self.remove(REVOKED_BY_SQUARE[origin.index()])
            .remove(REVOKED_BY_SQUARE[destination.index()])
    }

    /// Rights implied by a bare placement: a flag is set iff the king and the
    /// matching rook both stand on their home squares.
    pub fn infer(board: &ArrayBoard) -> CastleRights {
        let mut rights = CastleRights::NONE;
        for color in Color::ALL {
            let rank = color.back_rank();
            if board.get(rank, KING_HOME_FILE) != Some(Piece::new(PieceKind::King, color)) {
                continue;
            }
            for side in CastleSide::ALL {
                if board.get(rank, side.rook_file()) == Some(Piece::new(PieceKind::Rook, color)) {
                    rights = rights.insert(Self::flag(color, side));
                }
            }
        }
        rights
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        let letters = [(Self::WHITE_KING, 'K'), (Self::WHITE_QUEEN, 'Q'), (Self::BLACK_KING, 'k'), (Self::BLACK_QUEEN, 'q')];
        for (flag, letter) in letters {
            if self.0 & flag.0 != 0 {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}
