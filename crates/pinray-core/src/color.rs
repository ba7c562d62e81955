//! Side colors and the per-color geometry that pawns and castling depend on.

use std::fmt;
use std::ops::Not;

use crate::bitboard::Bitboard;

/// White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const COUNT: usize = 2;

    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction of pawn travel: `+1` for White, `-1` for Black.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Square-index offset of a single pawn push.
    #[inline]
    pub const fn forward(self) -> i8 {
        self.sign() * 8
    }

    /// Zero-based back rank of this color.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank pawns of this color start on (and may double-push from).
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        self.back_rank() + self.sign()
    }

    /// Rank pawns of this color promote on.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        self.flip().back_rank()
    }

    #[inline]
    pub const fn promotion_mask(self) -> Bitboard {
        Bitboard::rank(self.promotion_rank())
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
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
