//! Attack computation for one side against the other side's king.

use crate::attacks::piece_attacks;
use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::position::Position;
use crate::ray::squares_between;

/// Everything one side attacks, and how it bears on the other king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Threats {
    /// Union of all attack patterns.
    pub attacked: Bitboard,
    /// Number of pieces attacking the king.
    pub check_count: u8,
    /// Checker squares plus the squares between each slider checker and the king.
    pub checking_ray: Bitboard,
}

/// Attacks of `attacker` against the king of the opposite color.
///
/// Sliders see through the defending king, so a king cannot step back along
/// the line it is checked on.
pub(crate) fn compute(position: &Position, attacker: Color) -> Threats {
    let defender_king = position.king_square(attacker.flip());
    let occupied = position.occupancy().without(defender_king);

    let mut threats = Threats {
        attacked: Bitboard::EMPTY,
        check_count: 0,
        checking_ray: Bitboard::EMPTY,
    };
    for sq in position.color_occupancy(attacker) {
        let Some(kind) = position.kind_at(sq) else {
            continue;
        };
        let attacks = piece_attacks(kind, attacker, sq, occupied);
        threats.attacked |= attacks;
        if attacks.contains(defender_king) {
            threats.check_count += 1;
            // Leapers never have squares between them and the king.
            threats.checking_ray |= squares_between(sq, defender_king).with(sq);
        }
    }
    threats
}

#[cfg(test)]
mod tests {
    use super::compute;
    use crate::array_board::ArrayBoard;
    use crate::color::Color;
    use crate::position::Position;
    use crate::square::Square;

    fn position(placement: &str, side: Color) -> Position {
        Position::with_side_to_move(&placement.parse::<ArrayBoard>().unwrap(), side).unwrap()
    }

    #[test]
    fn quiet_position_has_no_checks() {
        let pos = Position::starting_position();
        let threats = compute(&pos, Color::Black);
        assert_eq!(threats.check_count, 0);
        assert!(threats.checking_ray.is_empty());
        assert_eq!(threats.attacked.count(), 22);
    }

    #[test]
    fn slider_check_records_ray_and_checker() {
        let pos = position("4r1k1/8/8/8/8/8/8/4K3", Color::White);
        let threats = compute(&pos, Color::Black);
        assert_eq!(threats.check_count, 1);
        assert_eq!(threats.checking_ray.count(), 7);
        assert!(threats.checking_ray.contains(Square::E8));
        assert!(threats.checking_ray.contains(Square::E2));
        assert!(!threats.checking_ray.contains(Square::E1));
    }

    #[test]
    fn sliders_see_through_the_king() {
        let pos = position("6k1/8/8/8/4r3/8/4K3/8", Color::White);
        let threats = compute(&pos, Color::Black);
        assert!(threats.attacked.contains(Square::E1));
    }

    #[test]
    fn knight_check_is_just_the_knight() {
        let pos = position("6k1/8/8/8/8/3n4/8/4K3", Color::White);
        let threats = compute(&pos, Color::Black);
        assert_eq!(threats.check_count, 1);
        assert_eq!(threats.checking_ray, Square::D3.bitboard());
    }

    #[test]
    fn double_check_counts_both() {
        let pos = position("4r1k1/8/8/8/8/3n4/8/4K3", Color::White);
        assert_eq!(compute(&pos, Color::Black).check_count, 2);
    }
}
