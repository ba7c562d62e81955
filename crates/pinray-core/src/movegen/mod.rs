//! Legal destination tables.
//!
//! Every ply the whole pipeline runs from the primary bit sets: threats of
//! the side not to move, pseudo-legal destinations per piece, pin and check
//! restriction, and finally en passant with its own king-safety test.

mod check;
mod king;
mod knights;
mod pawns;
mod pins;
mod sliders;
pub(crate) mod threats;

use tracing::trace;

use crate::bitboard::Bitboard;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

impl Position {
    /// Rebuild attacked squares, check state and the legal-destination table.
    pub(crate) fn refresh(&mut self) {
        let us = self.side_to_move();
        let threats = threats::compute(self, us.flip());
        self.attacked = threats.attacked;
        self.check_count = threats.check_count;
        self.checking_ray = threats.checking_ray;

        let mut legal = [Bitboard::EMPTY; Square::COUNT];
        for origin in self.color_occupancy(us) {
            let Some(kind) = self.kind_at(origin) else {
                continue;
            };
            legal[origin.index()] = match kind {
                PieceKind::Pawn => pawns::destinations(self, origin, us),
                PieceKind::Knight => knights::destinations(self, origin, us),
                PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                    sliders::destinations(self, origin, kind, us)
                }
                PieceKind::King => king::destinations(self, origin, us),
            };
        }

        pins::restrict(self, &mut legal);
        check::restrict(self, &mut legal);
        pawns::add_en_passant(self, &mut legal);
        self.legal = legal;

        trace!(
            side = %us,
            checks = self.check_count,
            moves = legal.iter().map(|d| d.count()).sum::<u32>(),
            "legal table rebuilt"
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::array_board::ArrayBoard;
    use crate::bitboard::Bitboard;
    use crate::color::Color;
    use crate::position::Position;
    use crate::square::Square;

    fn total_destinations(pos: &Position) -> u32 {
        Square::all().map(|sq| pos.legal_destinations_of(sq).count()).sum()
    }

    #[test]
    fn twenty_moves_each_side_at_the_start() {
        let pos = Position::starting_position();
        assert_eq!(total_destinations(&pos), 20);
        for mv in pos.all_legal_moves() {
            let mut child = pos;
            assert!(child.submit_move(mv.origin(), mv.destination(), mv.promotion()));
            assert_eq!(total_destinations(&child), 20, "after {mv}");
        }
    }

    #[test]
    fn side_not_to_move_has_empty_table() {
        let pos = Position::starting_position();
        for sq in pos.color_occupancy(Color::Black) {
            assert_eq!(pos.legal_destinations_of(sq), Bitboard::EMPTY);
        }
    }

    #[test]
    fn king_cannot_retreat_along_checking_line() {
        let board: ArrayBoard = "4r1k1/8/8/8/8/8/4K3/8".parse().unwrap();
        let pos = Position::new(&board).unwrap();
        assert!(!pos.legal_destinations_of(Square::E2).contains(Square::E1));
        assert!(!pos.legal_destinations_of(Square::E2).contains(Square::E3));
        assert!(pos.legal_destinations_of(Square::E2).contains(Square::D1));
    }
}
