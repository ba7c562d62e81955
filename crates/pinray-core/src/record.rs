//! Fixed-size move records, the shape remote players exchange.
//!
//! ```text
//! byte 0: turn         (0 = white, 1 = black)
//! byte 1: action       (0 = play, 1 = resign, 2 = draw, 3 = end)
//! byte 2: origin       (square index, or 0x7F when not playing)
//! byte 3: destination  (square index, or 0x7F when not playing)
//! byte 4: promotion    (0 = none, else piece kind index 1..=4)
//! ```

use tracing::debug;

use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{MoveError, RecordError};
use crate::game_state::TerminalState;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Filler for the square bytes of non-move records.
const NO_SQUARE: u8 = 0x7F;

/// What a record asks the position to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    Play = 0,
    Resign = 1,
    Draw = 2,
    End = 3,
}

impl Action {
    pub const fn from_byte(byte: u8) -> Option<Action> {
        match byte {
            0 => Some(Action::Play),
            1 => Some(Action::Resign),
            2 => Some(Action::Draw),
            3 => Some(Action::End),
            _ => None,
        }
    }
}

/// One framed turn: who acts, what they do, and the move for [`Action::Play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub turn: Color,
    pub action: Action,
    pub mv: Option<Move>,
}

impl MoveRecord {
    /// Encoded size in bytes.
    pub const SIZE: usize = 5;

    pub const fn play(turn: Color, mv: Move) -> MoveRecord {
        MoveRecord { turn, action: Action::Play, mv: Some(mv) }
    }

    pub const fn action(turn: Color, action: Action) -> MoveRecord {
        MoveRecord { turn, action, mv: None }
    }

    pub fn to_bytes(&self) -> [u8; MoveRecord::SIZE] {
        let (origin, destination, promotion) = match self.mv {
            Some(mv) => (
                mv.origin().index() as u8,
                mv.destination().index() as u8,
                mv.promotion().map_or(0, |kind| kind.index() as u8),
            ),
            None => (NO_SQUARE, NO_SQUARE, 0),
        };
        [self.turn.index() as u8, self.action as u8, origin, destination, promotion]
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<MoveRecord, RecordError> {
        let &[turn, action, origin, destination, promotion] = bytes else {
            return Err(RecordError::WrongLength { expected: MoveRecord::SIZE, found: bytes.len() });
        };
        let turn = match turn {
            0 => Color::White,
            1 => Color::Black,
            byte => return Err(RecordError::BadTurn { byte }),
        };
        let action = Action::from_byte(action).ok_or(RecordError::UnknownAction { byte: action })?;
        if action != Action::Play {
            return Ok(MoveRecord::action(turn, action));
        }

        let square = |byte: u8| Square::from_index(byte).ok_or(RecordError::BadSquare { byte });
        let promotion = match promotion {
            0 => None,
            byte => match PieceKind::from_index(byte as usize) {
                Some(kind) if kind.is_promotion_target() => Some(kind),
                _ => return Err(RecordError::BadPromotion { byte }),
            },
        };
        let mv = Move::from_parts(square(origin)?, square(destination)?, promotion);
        Ok(MoveRecord::play(turn, mv))
    }
}

impl Position {
    /// Frame the most recently applied move, if any.
    pub fn last_move_record(&self) -> Option<MoveRecord> {
        let mv = self.last_move?;
        Some(MoveRecord::play(self.side_to_move().flip(), mv))
    }

    /// Apply a non-move action on behalf of `by`.
    ///
    /// Resigning hands the win to the other side, a draw ends the game drawn;
    /// both respect a result that is already final. Returns `true` if the
    /// result changed. `Play` and `End` change nothing here.
    pub fn apply_action(&mut self, action: Action, by: Color) -> bool {
        match action {
            Action::Resign => self.force_terminal_state(TerminalState::win_for(by.flip())),
            Action::Draw => self.force_terminal_state(TerminalState::Draw),
            Action::Play | Action::End => false,
        }
    }

    /// Apply a decoded record: play its move, or carry out its action.
    pub fn apply_record(&mut self, record: &MoveRecord) -> Result<(), MoveError> {
        match (record.action, record.mv) {
            (Action::Play, Some(mv)) => {
                if record.turn != self.side_to_move() {
                    return Err(MoveError::OutOfTurn { color: record.turn });
                }
                self.play(mv)
            }
            (Action::Play, None) => {
                debug!(turn = %record.turn, "play record without a move ignored");
                Ok(())
            }
            (action, _) => {
                self.apply_action(action, record.turn);
                Ok(())
            }
        }
    }
}
