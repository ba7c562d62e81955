//! Game result: derived from the legal-move table, or forced from outside.

use std::fmt;

use tracing::debug;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::position::Position;
use crate::square::Square;

/// Outcome of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalState {
    Ongoing,
    WhiteWins,
    BlackWins,
    Draw,
}

impl TerminalState {
    /// The state in which `color` has won.
    #[inline]
    pub const fn win_for(color: Color) -> TerminalState {
        match color {
            Color::White => TerminalState::WhiteWins,
            Color::Black => TerminalState::BlackWins,
        }
    }

    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, TerminalState::Ongoing)
    }

    /// The winning side, if any.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            TerminalState::WhiteWins => Some(Color::White),
            TerminalState::BlackWins => Some(Color::Black),
            TerminalState::Ongoing | TerminalState::Draw => None,
        }
    }
}

impl fmt::Display for TerminalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TerminalState::Ongoing => "*",
            TerminalState::WhiteWins => "1-0",
            TerminalState::BlackWins => "0-1",
            TerminalState::Draw => "1/2-1/2",
        };
        f.write_str(text)
    }
}

impl Position {
    /// Current outcome.
    ///
    /// A forced result wins over everything. Otherwise the game goes on while
    /// any legal destination exists; with none, the side to move is mated if
    /// in check and stalemated if not.
    pub fn terminal_state(&self) -> TerminalState {
        if let Some(forced) = self.forced_result {
            return forced;
        }
        if self.has_legal_move() {
            TerminalState::Ongoing
        } else if self.check_count > 0 {
            TerminalState::win_for(self.side_to_move().flip())
        } else {
            TerminalState::Draw
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.terminal_state().is_over()
    }

    /// Force a result from outside the rules (resignation, agreed draw).
    ///
    /// Only takes effect while the game is ongoing; a finished game keeps its
    /// result. Forcing [`TerminalState::Ongoing`] is a no-op. Returns `true`
    /// if the result was applied. An applied result empties the legal-move
    /// table, so no further move is accepted.
    pub fn force_terminal_state(&mut self, state: TerminalState) -> bool {
        let current = self.terminal_state();
        if current.is_over() {
            debug!(%current, requested = %state, "game already over, forced result ignored");
            return false;
        }
        if !state.is_over() {
            return false;
        }
        debug!(result = %state, "result forced");
        self.forced_result = Some(state);
        self.legal = [Bitboard::EMPTY; Square::COUNT];
        true
    }
}

#[cfg(test)]
mod tests {
    use super::TerminalState;
    use crate::color::Color;
    use crate::position::Position;
    use crate::Square;

    #[test]
    fn start_is_ongoing() {
        let pos = Position::starting_position();
        assert_eq!(pos.terminal_state(), TerminalState::Ongoing);
        assert!(!pos.is_game_over());
    }

    #[test]
    fn resignation_sticks() {
        let mut pos = Position::starting_position();
        assert!(pos.force_terminal_state(TerminalState::BlackWins));
        assert_eq!(pos.terminal_state(), TerminalState::BlackWins);
        assert!(!pos.force_terminal_state(TerminalState::Draw));
        assert_eq!(pos.terminal_state(), TerminalState::BlackWins);
        assert!(pos.all_legal_moves().is_empty());
        assert!(!pos.submit_move(Square::E2, Square::E4, None));
    }

    #[test]
    fn forcing_ongoing_changes_nothing() {
        let mut pos = Position::starting_position();
        assert!(!pos.force_terminal_state(TerminalState::Ongoing));
        assert_eq!(pos.all_legal_moves().len(), 20);
    }

    #[test]
    fn derived_mate_cannot_be_overridden() {
        let mut pos = Position::starting_position();
        for (origin, destination) in [
            (Square::F2, Square::F3),
            (Square::E7, Square::E5),
            (Square::G2, Square::G4),
            (Square::D8, Square::H4),
        ] {
            assert!(pos.submit_move(origin, destination, None));
        }
        assert_eq!(pos.terminal_state(), TerminalState::BlackWins);
        assert!(!pos.force_terminal_state(TerminalState::Draw));
        assert_eq!(pos.terminal_state(), TerminalState::BlackWins);
    }

    #[test]
    fn winner_and_display() {
        assert_eq!(TerminalState::win_for(Color::White), TerminalState::WhiteWins);
        assert_eq!(TerminalState::BlackWins.winner(), Some(Color::Black));
        assert_eq!(TerminalState::Draw.winner(), None);
        assert_eq!(TerminalState::Draw.to_string(), "1/2-1/2");
        assert_eq!(TerminalState::Ongoing.to_string(), "*");
    }
}
