//! Check evasion filtering.

use crate::bitboard::Bitboard;
use crate::position::Position;
use crate::square::Square;

/// Restrict non-king pieces according to the check count: untouched out of
/// check, confined to the checking ray or checker square in single check,
/// frozen in double check. The king's own destinations are already safe.
pub(crate) fn restrict(position: &Position, legal: &mut [Bitboard; Square::COUNT]) {
    let king = position.king_square(position.side_to_move());
    let allowed = match position.check_count {
        0 => return,
        1 => position.checking_ray,
        _ => Bitboard::EMPTY,
    };
    for origin in position.color_occupancy(position.side_to_move()).without(king) {
        legal[origin.index()] &= allowed;
    }
}
