//! Bitboard chess rules: attack computation, legal destination tables, move
//! application and game results for a single copyable position.

mod array_board;
mod attacks;
mod bitboard;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod game_state;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod ray;
mod record;
mod square;

pub use array_board::{ArrayBoard, STARTING_PLACEMENT};
pub use attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};
pub use bitboard::Bitboard;
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, MoveError, ParseMoveError, RecordError};
pub use game_state::TerminalState;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use ray::{Direction, nearest_collision, ray, ray_between, squares_between};
pub use record::{Action, MoveRecord};
pub use square::Square;
