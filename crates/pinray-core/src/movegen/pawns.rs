//! Pawn pushes, captures and en passant.

use crate::attacks::{bishop_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Pseudo-legal destinations of a `color` pawn on `sq`: single and double
/// pushes onto empty squares, diagonal captures of enemy pieces. En passant
/// is added separately by [`add_en_passant`].
pub(crate) fn destinations(position: &Position, sq: Square, color: Color) -> Bitboard {
    let occupied = position.occupancy();
    let enemies = position.color_occupancy(color.flip());

    let mut targets = pawn_attacks(color, sq) & enemies;
    if let Some(one) = sq.offset(color.forward()).filter(|&s| !occupied.contains(s)) {
        targets |= one.bitboard();
        if sq.rank() == color.pawn_rank()
            && let Some(two) = one.offset(color.forward()).filter(|&s| !occupied.contains(s))
        {
            targets |= two.bitboard();
        }
    }
    targets
}

/// Grant the en-passant capture to every pawn that can make it without
/// leaving its own king attacked.
///
/// Runs after pin and check filtering: the capture removes two pawns from one
/// line at once, so it is checked against the full post-capture board instead.
pub(crate) fn add_en_passant(position: &Position, legal: &mut [Bitboard; Square::COUNT]) {
    let Some(target) = position.en_passant else {
        return;
    };
    let us = position.side_to_move();
    let Some(victim) = target.offset(-us.forward()) else {
        return;
    };
    let capturers = pawn_attacks(us.flip(), target) & position.pieces(PieceKind::Pawn, us);
    for origin in capturers {
        if king_safe_after_en_passant(position, origin, target, victim) {
            legal[origin.index()] |= target.bitboard();
        }
    }
}

fn king_safe_after_en_passant(position: &Position, origin: Square, target: Square, victim: Square) -> bool {
    let us = position.side_to_move();
    let king = position.king_square(us);
    let occupied = position.occupancy().without(origin).without(victim).with(target);
    let them = position.color_occupancy(us.flip()).without(victim);

    let straight = them & (position.kind_occupancy(PieceKind::Rook) | position.kind_occupancy(PieceKind::Queen));
    let diagonal = them & (position.kind_occupancy(PieceKind::Bishop) | position.kind_occupancy(PieceKind::Queen));
    let knights = them & position.kind_occupancy(PieceKind::Knight);
    let pawns = them & position.kind_occupancy(PieceKind::Pawn);

    (rook_attacks(king, occupied) & straight).is_empty()
        && (bishop_attacks(king, occupied) & diagonal).is_empty()
        && (knight_attacks(king) & knights).is_empty()
        && (pawn_attacks(us, king) & pawns).is_empty()
}
