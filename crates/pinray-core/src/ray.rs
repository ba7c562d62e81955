//! Ray geometry: edge-to-edge rays, nearest-collision search, and the
//! slider segment built from both.
//!
//! Directions come in opposite pairs. Even discriminants scan toward higher
//! square indices (nearest hit = lowest set bit), odd ones toward lower
//! indices (nearest hit = highest set bit). Each direction is bounded by a
//! "wall": the board edge(s) its rays end on.

use crate::bitboard::Bitboard;
use crate::square::Square;

/// One of the eight compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
    NorthWest = 4,
    SouthEast = 5,
    NorthEast = 6,
    SouthWest = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::NorthEast,
        Direction::SouthWest,
    ];

    /// Rook directions.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Bishop directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::NorthEast,
        Direction::SouthWest,
    ];

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }

    /// `true` if scanning in this direction visits increasing square indices.
    #[inline]
    pub const fn is_increasing(self) -> bool {
        (self as u8) % 2 == 0
    }

    /// The board edge(s) every ray in this direction ends on.
    #[inline]
    pub const fn wall(self) -> Bitboard {
        match self {
            Direction::North => Bitboard::RANK_8,
            Direction::South => Bitboard::RANK_1,
            Direction::East => Bitboard::FILE_H,
            Direction::West => Bitboard::FILE_A,
            Direction::NorthWest => Bitboard::RANK_8.union(Bitboard::FILE_A),
            Direction::SouthEast => Bitboard::RANK_1.union(Bitboard::FILE_H),
            Direction::NorthEast => Bitboard::RANK_8.union(Bitboard::FILE_H),
            Direction::SouthWest => Bitboard::RANK_1.union(Bitboard::FILE_A),
        }
    }
}

/// Every square visible from `from` in direction `dir` up to the board edge,
/// `from` itself included.
///
/// Built from shifted file/rank/diagonal masks: no loop over squares.
#[inline]
pub const fn ray(dir: Direction, from: Square) -> Bitboard {
    let rank = from.rank() as u32;
    let file = from.file() as u32;
    let file_a = Bitboard::FILE_A.inner();
    let rank_1 = Bitboard::RANK_1.inner();
    let diag = Bitboard::DIAGONAL_A1H8.inner();
    let anti = Bitboard::ANTI_DIAGONAL_H1A8.inner();

    let bits = match dir {
        Direction::North => file_a << (file + 8 * rank),
        Direction::South => (file_a << file) >> (8 * (7 - rank)),
        Direction::East => (rank_1 >> file) << (file + 8 * rank),
        Direction::West => (rank_1 >> (7 - file)) << (8 * rank),
        // Keep the anti-diagonal's ranks 0..=file, slide it onto `from`'s file, lift to `from`'s rank.
        Direction::NorthWest => {
            ((anti << (8 * (7 - file))) >> (8 * (7 - file)) >> (7 - file)) << (8 * rank)
        }
        // Keep ranks file..=7 of the anti-diagonal, slide east, drop to `from`'s rank.
        Direction::SouthEast => ((anti >> (8 * file)) << (8 * file) << file) >> (8 * (7 - rank)),
        Direction::NorthEast => ((diag << (9 * file)) >> (8 * file)) << (8 * rank),
        Direction::SouthWest => ((diag >> (9 * (7 - file))) << (8 * (7 - file))) >> (8 * (7 - rank)),
    };
    Bitboard::new(bits)
}

/// The first square on `ray` that holds an obstacle or lies on the direction's wall.
///
/// `ray` must be a ray in `dir` (as returned by [`ray`]); such a ray always
/// reaches the wall, so a collision always exists.
#[inline]
pub fn nearest_collision(ray: Bitboard, obstacles: Bitboard, dir: Direction) -> Square {
    let hits = ray & (obstacles | dir.wall());
    let hit = if dir.is_increasing() { hits.lsb() } else { hits.msb() };
    hit.expect("a ray always reaches its wall")
}

/// Squares a slider on `from` reaches in direction `dir`: everything up to and
/// including the first obstacle (or the board edge), excluding `from`.
///
/// An obstacle on `from` itself is ignored. A slider standing on the wall, or
/// directly next to an obstacle, gets the empty set or that single square.
#[inline]
pub fn ray_between(from: Square, obstacles: Bitboard, dir: Direction) -> Bitboard {
    let forward = ray(dir, from);
    let stop = nearest_collision(forward, obstacles.without(from), dir);
    (forward & ray(dir.opposite(), stop)).without(from)
}

/// Squares strictly between two aligned squares, or empty when `a` and `b`
/// share no rank, file or diagonal.
pub fn squares_between(a: Square, b: Square) -> Bitboard {
    Direction::ALL
        .into_iter()
        .find(|&dir| ray(dir, a).without(a).contains(b))
        .map(|dir| ray(dir, a) & ray(dir.opposite(), b))
        .map_or(Bitboard::EMPTY, |segment| segment.without(a).without(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(dir: Direction) -> (i8, i8) {
        match dir {
            Direction::North => (1, 0),
            Direction::South => (-1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthWest => (1, -1),
            Direction::SouthEast => (-1, 1),
            Direction::NorthEast => (1, 1),
            Direction::SouthWest => (-1, -1),
        }
    }

    fn walk(dir: Direction, from: Square) -> Bitboard {
        let (dr, df) = step(dir);
        let mut bb = from.bitboard();
        let (mut r, mut f) = (from.rank() + dr, from.file() + df);
        while let Some(sq) = Square::from_coords(r, f) {
            bb = bb.with(sq);
            r += dr;
            f += df;
        }
        bb
    }

    #[test]
    fn ray_matches_square_walk_everywhere() {
        for dir in Direction::ALL {
            for sq in Square::all() {
                assert_eq!(ray(dir, sq), walk(dir, sq), "{dir:?} from {sq}");
            }
        }
    }

    #[test]
    fn every_ray_reaches_its_wall() {
        for dir in Direction::ALL {
            for sq in Square::all() {
                assert!((ray(dir, sq) & dir.wall()).is_nonempty(), "{dir:?} from {sq}");
            }
        }
    }

    #[test]
    fn index_parity_matches_direction() {
        for dir in Direction::ALL {
            let r = ray(dir, Square::D4).without(Square::D4);
            let nearest = if dir.is_increasing() { r.lsb() } else { r.msb() };
            let (dr, df) = step(dir);
            assert_eq!(nearest, Square::from_coords(3 + dr, 3 + df), "{dir:?}");
        }
    }

    #[test]
    fn opposite_pairs() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.is_increasing(), dir.opposite().is_increasing());
        }
    }

    #[test]
    fn collision_with_no_obstacles_is_the_wall() {
        let r = ray(Direction::North, Square::E4);
        assert_eq!(nearest_collision(r, Bitboard::EMPTY, Direction::North), Square::E8);
        let r = ray(Direction::SouthWest, Square::E4);
        assert_eq!(nearest_collision(r, Bitboard::EMPTY, Direction::SouthWest), Square::B1);
    }

    #[test]
    fn collision_picks_nearest_obstacle() {
        let obstacles = Square::E6.bitboard() | Square::E7.bitboard() | Square::E2.bitboard();
        let north = ray(Direction::North, Square::E4);
        assert_eq!(nearest_collision(north, obstacles, Direction::North), Square::E6);
        let south = ray(Direction::South, Square::E4);
        assert_eq!(nearest_collision(south, obstacles, Direction::South), Square::E2);
    }

    #[test]
    fn ray_between_open_board_reaches_edge() {
        let seg = ray_between(Square::D4, Bitboard::EMPTY, Direction::East);
        assert_eq!(seg.count(), 4);
        assert!(seg.contains(Square::H4));
        assert!(!seg.contains(Square::D4));
    }

    #[test]
    fn ray_between_includes_first_obstacle_only() {
        let obstacles = Square::D6.bitboard() | Square::D7.bitboard();
        let seg = ray_between(Square::D4, obstacles, Direction::North);
        assert_eq!(seg, Square::D5.bitboard() | Square::D6.bitboard());
    }

    #[test]
    fn ray_between_adjacent_obstacle_and_wall() {
        let seg = ray_between(Square::D4, Square::E5.bitboard(), Direction::NorthEast);
        assert_eq!(seg, Square::E5.bitboard());
        assert!(ray_between(Square::H3, Bitboard::EMPTY, Direction::East).is_empty());
        assert!(ray_between(Square::A8, Bitboard::FULL, Direction::NorthWest).is_empty());
    }

    #[test]
    fn ray_between_ignores_own_square() {
        let seg = ray_between(Square::A1, Bitboard::FULL, Direction::North);
        assert_eq!(seg, Square::A2.bitboard());
    }

    #[test]
    fn squares_between_aligned_and_not() {
        assert_eq!(
            squares_between(Square::E1, Square::E4),
            Square::E2.bitboard() | Square::E3.bitboard()
        );
        assert_eq!(squares_between(Square::A1, Square::H8).count(), 6);
        assert_eq!(squares_between(Square::H8, Square::A1).count(), 6);
        assert!(squares_between(Square::A1, Square::B3).is_empty());
        assert!(squares_between(Square::A1, Square::B2).is_empty());
    }
}
