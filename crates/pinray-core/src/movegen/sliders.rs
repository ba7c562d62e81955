//! Bishop, rook and queen destinations.

use crate::attacks::{slide_directions, slider_attacks};
use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Pseudo-legal destinations of a `color` slider of `kind` on `sq`: every
/// ray segment up to the first obstacle, minus friendly squares.
pub(crate) fn destinations(position: &Position, sq: Square, kind: PieceKind, color: Color) -> Bitboard {
    debug_assert!(!slide_directions(kind).is_empty(), "{kind:?} does not slide");
    slider_attacks(sq, position.occupancy(), slide_directions(kind)) & !position.color_occupancy(color)
}

#[cfg(test)]
mod tests {
    use super::destinations;
    use crate::array_board::ArrayBoard;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;
    use crate::square::Square;

    fn position(placement: &str) -> Position {
        Position::new(&placement.parse::<ArrayBoard>().unwrap()).unwrap()
    }

    #[test]
    fn boxed_in_at_the_start() {
        let pos = Position::starting_position();
        for (sq, kind) in [
            (Square::A1, PieceKind::Rook),
            (Square::C1, PieceKind::Bishop),
            (Square::D1, PieceKind::Queen),
        ] {
            assert!(destinations(&pos, sq, kind, Color::White).is_empty(), "{kind:?} on {sq}");
        }
    }

    #[test]
    fn rook_captures_but_stops() {
        let pos = position("4k3/8/3p4/8/8/8/8/3RK3");
        let targets = destinations(&pos, Square::D1, PieceKind::Rook, Color::White);
        assert!(targets.contains(Square::D6));
        assert!(!targets.contains(Square::D7));
        assert!(!targets.contains(Square::E1));
        assert_eq!(targets.count(), 8);
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        let pos = position("4k3/8/8/8/3Q4/8/8/4K3");
        let queen = destinations(&pos, Square::D4, PieceKind::Queen, Color::White);
        let rook = destinations(&pos, Square::D4, PieceKind::Rook, Color::White);
        let bishop = destinations(&pos, Square::D4, PieceKind::Bishop, Color::White);
        assert_eq!(queen, rook | bishop);
        assert_eq!(queen.count(), 27);
    }
}
