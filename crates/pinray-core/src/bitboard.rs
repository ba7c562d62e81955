//! 64-bit square sets, one bit per square (index = rank * 8 + file).

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

use crate::square::Square;

/// A set of squares packed into a `u64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    /// No squares.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// All 64 squares.
    pub const FULL: Bitboard = Bitboard(!0);

    /// Rank 1 (a1..h1).
    pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    /// Rank 8 (a8..h8).
    pub const RANK_8: Bitboard = Bitboard(0xFF00_0000_0000_0000);
    /// File a (a1..a8).
    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    /// File h (h1..h8).
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);

    /// The a1-h8 diagonal.
    pub const DIAGONAL_A1H8: Bitboard = Bitboard(0x8040_2010_0804_0201);
    /// The h1-a8 anti-diagonal.
    pub const ANTI_DIAGONAL_H1A8: Bitboard = Bitboard(0x0102_0408_1020_4080);

    /// Wrap a raw `u64`.
    #[inline]
    pub const fn new(bits: u64) -> Bitboard {
        Bitboard(bits)
    }

    /// The raw `u64`.
    #[inline]
    pub const fn inner(self) -> u64 {
        self.0
    }

    /// Mask of the given rank (0 = rank 1). Out-of-range ranks give the empty set.
    #[inline]
    pub const fn rank(rank: i8) -> Bitboard {
        if rank < 0 || rank > 7 {
            Bitboard::EMPTY
        } else {
            Bitboard(Self::RANK_1.0 << (8 * rank as u32))
        }
    }

    /// Mask of the given file (0 = file a). Out-of-range files give the empty set.
    #[inline]
    pub const fn file(file: i8) -> Bitboard {
        if file < 0 || file > 7 {
            Bitboard::EMPTY
        } else {
            Bitboard(Self::FILE_A.0 << file as u32)
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_nonempty(self) -> bool {
        self.0 != 0
    }

    /// Population count.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 >> sq.index()) & 1 != 0
    }

    #[inline]
    pub const fn with(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | (1u64 << sq.index()))
    }

    #[inline]
    pub const fn without(self, sq: Square) -> Bitboard {
        Bitboard(self.0 & !(1u64 << sq.index()))
    }

    /// Set union, usable in `const` contexts.
    #[inline]
    pub const fn union(self, other: Bitboard) -> Bitboard {
        Bitboard(self.0 | other.0)
    }

    /// Set intersection, usable in `const` contexts.
    #[inline]
    pub const fn intersect(self, other: Bitboard) -> Bitboard {
        Bitboard(self.0 & other.0)
    }

    /// Lowest set square, or `None` if empty.
    #[inline]
    pub const fn lsb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_index_unchecked(self.0.trailing_zeros() as u8))
        }
    }

    /// Highest set square, or `None` if empty.
    #[inline]
    pub const fn msb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_index_unchecked(63 - self.0.leading_zeros() as u8))
        }
    }

    /// Keep only the lowest set bit.
    #[inline]
    pub const fn isolate_lsb(self) -> Bitboard {
        Bitboard(self.0 & self.0.wrapping_neg())
    }

    /// Keep only the highest set bit.
    #[inline]
    pub const fn isolate_msb(self) -> Bitboard {
        if self.0 == 0 {
            Bitboard::EMPTY
        } else {
            Bitboard(1u64 << (63 - self.0.leading_zeros()))
        }
    }

    /// Shift every square by `delta` indices; squares pushed off the board vanish.
    ///
    /// No file masking is applied: callers guard against edge wraparound.
    #[inline]
    pub const fn shift(self, delta: i8) -> Bitboard {
        if delta >= 0 {
            Bitboard(self.0 << delta as u32)
        } else {
            Bitboard(self.0 >> (-delta) as u32)
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl Shl<u32> for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn shl(self, rhs: u32) -> Bitboard {
        Bitboard(self.0 << rhs)
    }
}

impl Shr<u32> for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn shr(self, rhs: u32) -> Bitboard {
        Bitboard(self.0 >> rhs)
    }
}

impl Iterator for Bitboard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let sq = self.lsb()?;
        self.0 &= self.0 - 1;
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for Bitboard {}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for rank in (0..8).rev() {
            write!(f, "  {} ", rank + 1)?;
            for file in 0..8 {
                let bit = (self.0 >> (rank * 8 + file)) & 1;
                write!(f, "{} ", if bit == 1 { 'x' } else { '.' })?;
            }
            writeln!(f)?;
        }
        write!(f, "    a b c d e f g h")
    }
}
