//! Knight destinations.

use crate::attacks::knight_attacks;
use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::position::Position;
use crate::square::Square;

/// Pseudo-legal destinations of a `color` knight on `sq`.
pub(crate) fn destinations(position: &Position, sq: Square, color: Color) -> Bitboard {
    knight_attacks(sq) & !position.color_occupancy(color)
}

#[cfg(test)]
mod tests {
    use super::destinations;
    use crate::array_board::ArrayBoard;
    use crate::color::Color;
    use crate::position::Position;
    use crate::square::Square;

    #[test]
    fn knight_skips_friendly_squares() {
        let pos = Position::starting_position();
        assert_eq!(
            destinations(&pos, Square::B1, Color::White),
            Square::A3.bitboard() | Square::C3.bitboard()
        );
    }

    #[test]
    fn pinned_knight_has_no_moves() {
        let board: ArrayBoard = "4k3/8/8/8/4r3/8/4N3/4K3".parse().unwrap();
        let pos = Position::new(&board).unwrap();
        assert_eq!(destinations(&pos, Square::E2, Color::White).count(), 6);
        assert!(pos.legal_destinations_of(Square::E2).is_empty());
    }
}
