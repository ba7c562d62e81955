//! Attack patterns: precomputed leaper tables and ray-built slider attacks.

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::ray::{Direction, ray_between};
use crate::square::Square;

/// Ranks `rank + d` for each `d` in `deltas`, intersected with files `file + e`
/// for each `e` in `file_deltas`. Off-board ranks and files contribute nothing.
const fn band(rank: i8, deltas: &[i8], file: i8, file_deltas: &[i8]) -> Bitboard {
    let mut ranks = Bitboard::EMPTY;
    let mut i = 0;
    while i < deltas.len() {
        ranks = ranks.union(Bitboard::rank(rank + deltas[i]));
        i += 1;
    }
    let mut files = Bitboard::EMPTY;
    let mut j = 0;
    while j < file_deltas.len() {
        files = files.union(Bitboard::file(file + file_deltas[j]));
        j += 1;
    }
    ranks.intersect(files)
}

const fn compute_knight_attacks() -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        let (rank, file) = ((sq / 8) as i8, (sq % 8) as i8);
        let near_rank_far_file = band(rank, &[-1, 1], file, &[-2, 2]);
        let far_rank_near_file = band(rank, &[-2, 2], file, &[-1, 1]);
        table[sq] = near_rank_far_file.union(far_rank_near_file);
        sq += 1;
    }
    table
}

/// 3x3 neighborhood minus the center.
const fn compute_king_attacks() -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        let (rank, file) = ((sq / 8) as i8, (sq % 8) as i8);
        let block = band(rank, &[-1, 0, 1], file, &[-1, 0, 1]);
        table[sq] = Bitboard::new(block.inner() & !(1u64 << sq));
        sq += 1;
    }
    table
}

/// The two forward diagonals, masked to the single destination rank so a
/// shift across the a/h edge can never land on the wrong rank.
const fn compute_pawn_attacks() -> [[Bitboard; 64]; 2] {
    let mut table = [[Bitboard::EMPTY; 64]; 2];
    let mut sq = 0;
    while sq < 64 {
        let bit = Bitboard::new(1u64 << sq);
        let rank = (sq / 8) as i8;
        let mut c = 0;
        while c < 2 {
            let color = if c == 0 { Color::White } else { Color::Black };
            let forward = color.forward();
            let target_rank = Bitboard::rank(rank + color.sign());
            let reach = bit.shift(forward - 1).union(bit.shift(forward + 1));
            table[c][sq] = reach.intersect(target_rank);
            c += 1;
        }
        sq += 1;
    }
    table
}

static KNIGHT_ATTACKS: [Bitboard; 64] = compute_knight_attacks();
static KING_ATTACKS: [Bitboard; 64] = compute_king_attacks();
static PAWN_ATTACKS: [[Bitboard; 64]; 2] = compute_pawn_attacks();

#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Squares a pawn of `color` on `sq` captures on.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// Union of [`ray_between`] over `dirs`.
#[inline]
pub fn slider_attacks(sq: Square, occupied: Bitboard, dirs: &[Direction]) -> Bitboard {
    dirs.iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_between(sq, occupied, dir))
}

#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slider_attacks(sq, occupied, &Direction::ORTHOGONAL)
}

#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slider_attacks(sq, occupied, &Direction::DIAGONAL)
}

#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slider_attacks(sq, occupied, &Direction::ALL)
}

/// Directions a piece kind slides along; empty for leapers and pawns.
#[inline]
pub const fn slide_directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Bishop => &Direction::DIAGONAL,
        PieceKind::Rook => &Direction::ORTHOGONAL,
        PieceKind::Queen => &Direction::ALL,
        _ => &[],
    }
}

/// Attack set of a `kind`/`color` piece standing on `sq` with the given occupancy.
pub fn piece_attacks(kind: PieceKind, color: Color, sq: Square, occupied: Bitboard) -> Bitboard {
    match kind {
        PieceKind::Pawn => pawn_attacks(color, sq),
        PieceKind::Knight => knight_attacks(sq),
        PieceKind::King => king_attacks(sq),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            slider_attacks(sq, occupied, slide_directions(kind))
        }
    }
}
