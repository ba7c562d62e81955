//! Move submission and in-place application.

use tracing::debug;

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::MoveError;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

impl Position {
    /// Play `origin` to `destination` if it is legal; returns whether it was.
    ///
    /// A rejected move leaves the position untouched. See
    /// [`try_move`](Self::try_move) for the reason.
    pub fn submit_move(&mut self, origin: Square, destination: Square, promotion: Option<PieceKind>) -> bool {
        match self.try_move(origin, destination, promotion) {
            Ok(()) => true,
            Err(err) => {
                debug!(%origin, %destination, ?promotion, %err, "move rejected");
                false
            }
        }
    }

    /// Play a move, or say why it cannot be played.
    ///
    /// `promotion` is required when a pawn reaches the last rank and ignored
    /// otherwise.
    pub fn try_move(
        &mut self,
        origin: Square,
        destination: Square,
        promotion: Option<PieceKind>,
    ) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        let us = self.side_to_move();
        let Some(kind) = self.kind_at(origin).filter(|_| self.color_occupancy(us).contains(origin)) else {
            return Err(MoveError::NoPieceToMove { color: us, square: origin });
        };
        if !self.legal[origin.index()].contains(destination) {
            return Err(MoveError::IllegalDestination { origin, destination });
        }

        let promotion = if kind == PieceKind::Pawn && destination.rank() == us.promotion_rank() {
            match promotion {
                Some(target) if target.is_promotion_target() => Some(target),
                _ => return Err(MoveError::InvalidPromotion { square: destination }),
            }
        } else {
            None
        };

        let mv = Move::from_parts(origin, destination, promotion);
        self.apply(mv);
        debug!(%mv, side = %us, "move applied");
        if self.is_game_over() {
            debug!(result = %self.terminal_state(), "game over");
        }
        Ok(())
    }

    /// Play a move by value. Same contract as [`try_move`](Self::try_move).
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        self.try_move(mv.origin(), mv.destination(), mv.promotion())
    }

    /// Apply a move already known to be legal, then rebuild derived state.
    pub(crate) fn apply(&mut self, mv: Move) {
        let us = self.side_to_move();
        let them = us.flip();
        let (origin, destination) = (mv.origin(), mv.destination());
        let kind = self.kind_at(origin).expect("a legal move starts on a piece");

        if let Some(captured) = self.kind_at(destination) {
            self.toggle(destination, captured, them);
        } else if kind == PieceKind::Pawn
            && self.en_passant == Some(destination)
            && let Some(victim) = destination.offset(-us.forward())
        {
            self.toggle(victim, PieceKind::Pawn, them);
        }

        self.toggle(origin, kind, us);
        self.toggle(destination, mv.promotion().unwrap_or(kind), us);

        if kind == PieceKind::King
            && let Some(side) = CastleSide::from_king_step(origin, destination)
        {
            self.toggle(side.rook_origin(us), PieceKind::Rook, us);
            self.toggle(side.rook_destination(us), PieceKind::Rook, us);
        }

        self.castling = self.castling.after_move(origin, destination);
        self.en_passant = if kind == PieceKind::Pawn && (destination.rank() - origin.rank()).abs() == 2 {
            origin.offset(us.forward())
        } else {
            None
        };
        self.ply_count += 1;
        self.last_move = Some(mv);
        self.refresh();
    }

    /// Flip one piece in or out of the bit sets.
    #[inline]
    fn toggle(&mut self, sq: Square, kind: PieceKind, color: Color) {
        let mask = sq.bitboard();
        self.kinds[kind.index()] ^= mask;
        self.colors[color.index()] ^= mask;
    }
}
