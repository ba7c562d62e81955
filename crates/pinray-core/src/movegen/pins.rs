//! Pin detection: restrict pinned pieces to the line through their king.

use crate::attacks::slide_directions;
use crate::bitboard::Bitboard;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::ray::{Direction, ray_between};
use crate::square::Square;

/// Narrow the destinations of every piece pinned to the king of the side to
/// move down to its pin line.
///
/// From the king, each direction is scanned treating only enemy pieces as
/// obstacles. If the first enemy piece slides along that direction and
/// exactly one friendly piece stands in between, that piece is pinned: it may
/// move only along the segment, capturing the pinner included. Two friendly
/// pieces on the segment shield each other and neither is pinned.
pub(crate) fn restrict(position: &Position, legal: &mut [Bitboard; Square::COUNT]) {
    let us = position.side_to_move();
    let king = position.king_square(us);
    let own = position.color_occupancy(us);
    let enemies = position.color_occupancy(us.flip());

    for dir in Direction::ALL {
        let segment = ray_between(king, enemies, dir);
        let Some(pinner) = (segment & enemies).lsb() else {
            continue;
        };
        if !slides_along(position.kind_at(pinner), dir) {
            continue;
        }
        let shield = segment & own;
        if shield.count() != 1 {
            continue;
        }
        if let Some(pinned) = shield.lsb() {
            legal[pinned.index()] &= segment;
        }
    }
}

fn slides_along(kind: Option<PieceKind>, dir: Direction) -> bool {
    kind.is_some_and(|kind| slide_directions(kind).contains(&dir))
}

#[cfg(test)]
mod tests {
    use crate::array_board::ArrayBoard;
    use crate::bitboard::Bitboard;
    use crate::position::Position;
    use crate::square::Square;

    fn position(placement: &str) -> Position {
        Position::new(&placement.parse::<ArrayBoard>().unwrap()).unwrap()
    }

    #[test]
    fn pinned_rook_slides_along_the_pin() {
        let pos = position("4r1k1/8/8/8/8/8/4R3/4K3");
        let expected = [Square::E3, Square::E4, Square::E5, Square::E6, Square::E7, Square::E8]
            .into_iter()
            .fold(Bitboard::EMPTY, |bb, sq| bb.with(sq));
        assert_eq!(pos.legal_destinations_of(Square::E2), expected);
    }

    #[test]
    fn diagonal_pin_freezes_a_rook() {
        let pos = position("6k1/8/8/b7/8/8/3R4/4K3");
        assert!(pos.legal_destinations_of(Square::D2).is_empty());
    }

    #[test]
    fn pinned_bishop_captures_the_pinner() {
        let pos = position("6k1/8/8/b7/8/8/3B4/4K3");
        assert_eq!(
            pos.legal_destinations_of(Square::D2),
            Square::C3.bitboard() | Square::B4.bitboard() | Square::A5.bitboard()
        );
    }

    #[test]
    fn wrong_slider_does_not_pin() {
        // A bishop on the file cannot pin along it.
        let pos = position("4b1k1/8/8/8/8/8/4R3/4K3");
        assert_eq!(pos.legal_destinations_of(Square::E2).count(), 13);
    }

    #[test]
    fn two_shields_mean_no_pin() {
        let pos = position("4r1k1/8/8/8/4N3/8/4R3/4K3");
        assert!(pos.legal_destinations_of(Square::E2).contains(Square::A2));
        assert_eq!(pos.legal_destinations_of(Square::E4).count(), 8);
    }

    #[test]
    fn enemy_blocker_breaks_the_pin() {
        let pos = position("4r1k1/8/8/4p3/8/8/4R3/4K3");
        assert!(pos.legal_destinations_of(Square::E2).contains(Square::H2));
    }
}
