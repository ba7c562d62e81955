//! Error types for board construction, move submission, and move records.

use crate::color::Color;
use crate::square::Square;

/// Malformed construction input. Fatal for the position being built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The placement does not describe exactly 8 ranks.
    #[error("expected 8 ranks, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank} describes {length} squares, expected 8")]
    BadRankLength {
        /// One-based rank number.
        rank: usize,
        /// Number of squares described.
        length: usize,
    },
    /// A character that is neither a piece letter, a digit, nor `.`.
    #[error("invalid piece token: '{token}'")]
    InvalidToken {
        /// The offending character.
        token: char,
    },
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: u32,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    /// The side not to move is already in check.
    #[error("{color} king is in check but {color} is not to move")]
    OpponentInCheck {
        /// The side whose king can be captured.
        color: Color,
    },
}

/// Why a submitted move was rejected. The position is never modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The game already has a result.
    #[error("game is over")]
    GameOver,
    /// The origin square holds no piece of the side to move.
    #[error("no {color} piece on {square}")]
    NoPieceToMove {
        /// The side to move.
        color: Color,
        /// The origin square.
        square: Square,
    },
    /// The destination is not a legal target for the piece on the origin.
    #[error("{origin}{destination} is not legal")]
    IllegalDestination {
        /// The origin square.
        origin: Square,
        /// The requested destination.
        destination: Square,
    },
    /// A move framed for the side that is not to move.
    #[error("{color} is not to move")]
    OutOfTurn {
        /// The side the move was framed for.
        color: Color,
    },
    /// A pawn reaching the last rank needs a knight, bishop, rook or queen.
    #[error("promotion on {square} requires a knight, bishop, rook or queen")]
    InvalidPromotion {
        /// The promotion square.
        square: Square,
    },
}

/// Failure to parse coordinate move notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    /// Not 4 or 5 characters long.
    #[error("expected 4 or 5 characters, found \"{found}\"")]
    BadLength {
        /// The input.
        found: String,
    },
    /// A square is not in `a1`..`h8`.
    #[error("invalid square: \"{found}\"")]
    BadSquare {
        /// The offending text.
        found: String,
    },
    /// The promotion suffix is not `n`, `b`, `r` or `q`.
    #[error("invalid promotion suffix: '{found}'")]
    BadPromotion {
        /// The offending character.
        found: char,
    },
}

/// A fixed-size move record that cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The byte slice is not exactly one record long.
    #[error("expected {expected} bytes, found {found}")]
    WrongLength {
        /// Record size.
        expected: usize,
        /// Bytes supplied.
        found: usize,
    },
    /// The turn byte is neither white nor black.
    #[error("invalid turn byte {byte}")]
    BadTurn {
        /// The offending byte.
        byte: u8,
    },
    /// The action byte is not a known action.
    #[error("unknown action byte {byte}")]
    UnknownAction {
        /// The offending byte.
        byte: u8,
    },
    /// A square byte is not in `0..64`.
    #[error("square byte {byte} out of range")]
    BadSquare {
        /// The offending byte.
        byte: u8,
    },
    /// The promotion byte is not a promotable piece kind.
    #[error("invalid promotion byte {byte}")]
    BadPromotion {
        /// The offending byte.
        byte: u8,
    },
}
