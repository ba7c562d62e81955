//! King steps and castling.

use crate::attacks::king_attacks;
use crate::bitboard::Bitboard;
use crate::castle_rights::{CastleSide, king_home};
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::ray::squares_between;
use crate::square::Square;

/// Destinations of the `color` king on `sq`: unattacked neighbours not held by
/// a friendly piece, plus any castling destination.
///
/// Relies on the position's attacked squares, which already see through the
/// king, so the result is fully legal.
pub(crate) fn destinations(position: &Position, sq: Square, color: Color) -> Bitboard {
    let steps = king_attacks(sq) & !position.color_occupancy(color) & !position.attacked;
    steps | castling_destinations(position, sq, color)
}

/// King destinations of every castle the position allows.
///
/// Requires the right, a king not in check, the rook on its corner, every
/// square between king and rook empty, and no attacked square on the king's
/// path, destination included.
fn castling_destinations(position: &Position, king: Square, color: Color) -> Bitboard {
    if position.check_count > 0 || king != king_home(color) {
        return Bitboard::EMPTY;
    }
    let occupied = position.occupancy();
    let rook = Piece::new(PieceKind::Rook, color);

    let mut targets = Bitboard::EMPTY;
    for side in CastleSide::ALL {
        if !position.castling.has(color, side) {
            continue;
        }
        let rook_origin = side.rook_origin(color);
        if position.piece_at(rook_origin) != Some(rook) {
            continue;
        }
        if (squares_between(king, rook_origin) & occupied).is_nonempty() {
            continue;
        }
        let destination = side.king_destination(color);
        let path = squares_between(king, destination).with(destination);
        if (path & position.attacked).is_nonempty() {
            continue;
        }
        targets |= destination.bitboard();
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::destinations;
    use crate::array_board::ArrayBoard;
    use crate::color::Color;
    use crate::position::Position;
    use crate::square::Square;

    fn position(placement: &str, side: Color) -> Position {
        Position::with_side_to_move(&placement.parse::<ArrayBoard>().unwrap(), side).unwrap()
    }

    #[test]
    fn both_castles_available() {
        let pos = position("r3k2r/8/8/8/8/8/8/R3K2R", Color::White);
        let targets = destinations(&pos, Square::E1, Color::White);
        assert!(targets.contains(Square::G1));
        assert!(targets.contains(Square::C1));
        assert_eq!(targets.count(), 7);
    }

    #[test]
    fn queen_side_b_file_must_be_empty_but_may_be_attacked() {
        let pos = position("1r2k3/8/8/8/8/8/8/R3K3", Color::White);
        assert!(destinations(&pos, Square::E1, Color::White).contains(Square::C1));

        let pos = position("4k3/8/8/8/8/8/8/RN2K3", Color::White);
        assert!(!destinations(&pos, Square::E1, Color::White).contains(Square::C1));
    }

    #[test]
    fn attacked_transit_square_blocks_castling() {
        let pos = position("4kr2/8/8/8/8/8/8/4K2R", Color::White);
        assert!(!destinations(&pos, Square::E1, Color::White).contains(Square::G1));
    }

    #[test]
    fn attacked_destination_blocks_castling() {
        let pos = position("4k1r1/8/8/8/8/8/8/4K2R", Color::White);
        assert!(!destinations(&pos, Square::E1, Color::White).contains(Square::G1));
    }

    #[test]
    fn no_castling_out_of_check() {
        let pos = position("4r1k1/8/8/8/8/8/8/R3K2R", Color::White);
        let targets = destinations(&pos, Square::E1, Color::White);
        assert!(!targets.contains(Square::G1));
        assert!(!targets.contains(Square::C1));
    }

    #[test]
    fn king_avoids_attacked_squares() {
        let pos = position("3rk3/8/8/8/8/8/8/4K3", Color::White);
        let targets = destinations(&pos, Square::E1, Color::White);
        assert!(!targets.contains(Square::D1));
        assert!(!targets.contains(Square::D2));
        assert_eq!(targets.count(), 3);
    }
}
