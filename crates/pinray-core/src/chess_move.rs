//! A move as submitted to and reported by a position, bit-packed into a u16.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseMoveError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

const ORIGIN_MASK: u16 = 0x003F;
const DEST_MASK: u16 = 0x0FC0;
const PROMO_MASK: u16 = 0x7000;
const DEST_SHIFT: u32 = 6;
const PROMO_SHIFT: u32 = 12;

/// Origin, destination and optional promotion kind.
///
/// ```text
/// bits  0-5:  origin square      (0-63)
/// bits  6-11: destination square (0-63)
/// bits 12-14: promotion kind     (0 = none, else PieceKind index 1..=4)
/// ```
///
/// Castling is a king move of two files; en passant is a pawn's diagonal move
/// onto the en-passant target. Neither needs its own tag: the position tells
/// them apart when the move is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// A move with no promotion.
    #[inline]
    pub const fn new(origin: Square, destination: Square) -> Move {
        Move((origin.index() as u16) | ((destination.index() as u16) << DEST_SHIFT))
    }

    /// A pawn move promoting to `kind`.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `kind` is a knight, bishop, rook or queen.
    #[inline]
    pub const fn with_promotion(origin: Square, destination: Square, kind: PieceKind) -> Move {
        debug_assert!(kind.is_promotion_target());
        Move(Move::new(origin, destination).0 | ((kind.index() as u16) << PROMO_SHIFT))
    }

    /// A move carrying an optional promotion kind.
    #[inline]
    pub const fn from_parts(origin: Square, destination: Square, promotion: Option<PieceKind>) -> Move {
        match promotion {
            Some(kind) => Move::with_promotion(origin, destination, kind),
            None => Move::new(origin, destination),
        }
    }

    #[inline]
    pub const fn origin(self) -> Square {
        Square::from_index_unchecked((self.0 & ORIGIN_MASK) as u8)
    }

    #[inline]
    pub const fn destination(self) -> Square {
        Square::from_index_unchecked(((self.0 & DEST_MASK) >> DEST_SHIFT) as u8)
    }

    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        match (self.0 & PROMO_MASK) >> PROMO_SHIFT {
            0 => None,
            index => PieceKind::from_index(index as usize),
        }
    }
}

impl fmt::Display for Move {
    /// Coordinate notation: `e2e4`, `e7e8q`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin(), self.destination())?;
        if let Some(kind) = self.promotion() {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(ParseMoveError::BadLength { found: s.to_string() });
        }
        let origin: Square = s[0..2].parse()?;
        let destination: Square = s[2..4].parse()?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_letter(c) {
                Some(kind) if kind.is_promotion_target() => Some(kind),
                _ => return Err(ParseMoveError::BadPromotion { found: c }),
            },
        };
        Ok(Move::from_parts(origin, destination, promotion))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Move;
    use crate::error::ParseMoveError;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn size_of_move() {
        assert_eq!(std::mem::size_of::<Move>(), 2);
    }

    #[test]
    fn plain_move_fields() {
        let mv = Move::new(Square::E2, Square::E4);
        assert_eq!(mv.origin(), Square::E2);
        assert_eq!(mv.destination(), Square::E4);
        assert_eq!(mv.promotion(), None);
    }

    #[test]
    fn every_origin_destination_pair_unpacks() {
        for origin in Square::all() {
            for destination in Square::all() {
                let mv = Move::new(origin, destination);
                assert_eq!(mv.origin(), origin, "origin of {origin}{destination}");
                assert_eq!(mv.destination(), destination, "destination of {origin}{destination}");
            }
        }
    }

    #[test]
    fn promotions_keep_their_kind() {
        for kind in PieceKind::PROMOTIONS {
            let mv = Move::with_promotion(Square::H7, Square::H8, kind);
            assert_eq!(mv.promotion(), Some(kind));
            assert_eq!(mv.origin(), Square::H7);
            assert_eq!(mv.destination(), Square::H8);
        }
    }

    #[test]
    fn coordinate_notation() {
        assert_eq!(Move::new(Square::E2, Square::E4).to_string(), "e2e4");
        assert_eq!(
            Move::with_promotion(Square::E7, Square::E8, PieceKind::Knight).to_string(),
            "e7e8n"
        );
        assert_eq!("g1f3".parse::<Move>().unwrap(), Move::new(Square::G1, Square::F3));
        assert_eq!(
            "a2a1q".parse::<Move>().unwrap(),
            Move::with_promotion(Square::A2, Square::A1, PieceKind::Queen)
        );
    }

    #[test]
    fn parse_errors() {
        assert!(matches!("e2".parse::<Move>(), Err(ParseMoveError::BadLength { .. })));
        assert!(matches!("e2e9".parse::<Move>(), Err(ParseMoveError::BadSquare { .. })));
        assert_eq!(
            "e7e8k".parse::<Move>().unwrap_err(),
            ParseMoveError::BadPromotion { found: 'k' }
        );
    }

    #[test]
    fn equality_and_hash() {
        let mut set = HashSet::new();
        set.insert(Move::new(Square::E2, Square::E4));
        set.insert(Move::new(Square::E2, Square::E4));
        set.insert(Move::with_promotion(Square::E2, Square::E4, PieceKind::Queen));
        assert_eq!(set.len(), 2);
    }
}
