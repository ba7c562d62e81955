//! The position: primary bit sets plus the derived attack and legality tables.

use std::fmt;

use crate::array_board::ArrayBoard;
use crate::bitboard::Bitboard;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::BoardError;
use crate::game_state::TerminalState;
use crate::movegen::threats;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Complete game state.
///
/// The primary fields (occupancy, castling rights, en-passant target, ply
/// count) fully determine the derived ones, which are rebuilt after every
/// accepted move. Fixed-size and `Copy`: exploring a hypothetical successor
/// means copying the position and moving on the copy.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Occupancy per side, indexed by [`Color::index()`].
    pub(crate) colors: [Bitboard; Color::COUNT],
    /// Occupancy per piece kind, indexed by [`PieceKind::index()`].
    pub(crate) kinds: [Bitboard; PieceKind::COUNT],
    /// Squares attacked by the side not to move.
    pub(crate) attacked: Bitboard,
    /// Squares that resolve a single check when occupied.
    pub(crate) checking_ray: Bitboard,
    /// Legal destinations per origin square. Empty for the side not to move.
    pub(crate) legal: [Bitboard; Square::COUNT],
    /// Square skipped by the last two-square pawn advance.
    pub(crate) en_passant: Option<Square>,
    pub(crate) castling: CastleRights,
    /// Even: White to move.
    pub(crate) ply_count: u32,
    /// Enemy pieces attacking the king of the side to move.
    pub(crate) check_count: u8,
    /// Result set by resignation or agreement.
    pub(crate) forced_result: Option<TerminalState>,
    pub(crate) last_move: Option<Move>,
}

impl Position {
    /// Build a position with White to move.
    pub fn new(board: &ArrayBoard) -> Result<Position, BoardError> {
        Position::with_side_to_move(board, Color::White)
    }

    /// Build a position with `side_to_move` to move.
    ///
    /// Castling rights are inferred from home squares; there is no en-passant
    /// target. Fails if either side does not have exactly one king, if pawns
    /// stand on a back rank, or if the side not to move is in check.
    pub fn with_side_to_move(board: &ArrayBoard, side_to_move: Color) -> Result<Position, BoardError> {
        let mut colors = [Bitboard::EMPTY; Color::COUNT];
        let mut kinds = [Bitboard::EMPTY; PieceKind::COUNT];
        for sq in Square::all() {
            if let Some(piece) = board.get(sq.rank(), sq.file()) {
                colors[piece.color.index()] |= sq.bitboard();
                kinds[piece.kind.index()] |= sq.bitboard();
            }
        }

        let mut position = Position {
            colors,
            kinds,
            attacked: Bitboard::EMPTY,
            checking_ray: Bitboard::EMPTY,
            legal: [Bitboard::EMPTY; Square::COUNT],
            en_passant: None,
            castling: CastleRights::infer(board),
            ply_count: match side_to_move {
                Color::White => 0,
                Color::Black => 1,
            },
            check_count: 0,
            forced_result: None,
            last_move: None,
        };
        position.validate()?;
        position.refresh();
        Ok(position)
    }

    /// The standard starting position.
    pub fn starting_position() -> Position {
        Position::new(&ArrayBoard::starting_position()).expect("starting position is valid")
    }

    fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.pieces(PieceKind::King, color).count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        let back_ranks = Bitboard::RANK_1 | Bitboard::RANK_8;
        if (self.kind_occupancy(PieceKind::Pawn) & back_ranks).is_nonempty() {
            return Err(BoardError::PawnsOnBackRank);
        }

        let exposed = self.side_to_move().flip();
        if threats::compute(self, self.side_to_move()).check_count > 0 {
            return Err(BoardError::OpponentInCheck { color: exposed });
        }
        Ok(())
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.ply_count % 2 == 0 { Color::White } else { Color::Black }
    }

    /// Half-moves played since construction (offset by one if Black moved first).
    #[inline]
    pub fn ply_count(&self) -> u32 {
        self.ply_count
    }

    /// How many enemy pieces attack the king of the side to move: 0 for none,
    /// 1 for single check, 2 or more for double check.
    #[inline]
    pub fn check_count(&self) -> u8 {
        self.check_count
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.check_count > 0
    }

    /// Every square the side not to move attacks.
    #[inline]
    pub fn attacked_squares(&self) -> Bitboard {
        self.attacked
    }

    /// Squares a non-king piece may move to in order to resolve a single
    /// check: the checker's square plus, for a slider, the squares between it
    /// and the king.
    #[inline]
    pub fn checking_ray_or_square(&self) -> Bitboard {
        self.checking_ray
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn castling_rights(&self) -> CastleRights {
        self.castling
    }

    /// The most recently applied move.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// All occupied squares.
    #[inline]
    pub fn occupancy(&self) -> Bitboard {
        self.colors[Color::White.index()] | self.colors[Color::Black.index()]
    }

    #[inline]
    pub fn color_occupancy(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }

    /// Squares holding `kind`, both colors.
    #[inline]
    pub fn kind_occupancy(&self, kind: PieceKind) -> Bitboard {
        self.kinds[kind.index()]
    }

    /// Squares holding `kind` of `color`.
    #[inline]
    pub fn pieces(&self, kind: PieceKind, color: Color) -> Bitboard {
        self.kinds[kind.index()] & self.colors[color.index()]
    }

    /// # Panics
    ///
    /// Panics if `color` has no king, which construction rules out.
    pub fn king_square(&self, color: Color) -> Square {
        self.pieces(PieceKind::King, color)
            .lsb()
            .expect("position must have a king for each side")
    }

    pub fn kind_at(&self, sq: Square) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|&kind| self.kinds[kind.index()].contains(sq))
    }

    pub fn color_at(&self, sq: Square) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| self.colors[color.index()].contains(sq))
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        Some(Piece::new(self.kind_at(sq)?, self.color_at(sq)?))
    }

    /// `true` if the side not to move attacks `sq`.
    #[inline]
    pub fn is_square_attacked(&self, sq: Square) -> bool {
        self.attacked.contains(sq)
    }

    /// Legal destinations of the piece on `sq`; empty for empty squares and
    /// for pieces of the side not to move.
    #[inline]
    pub fn legal_destinations_of(&self, sq: Square) -> Bitboard {
        self.legal[sq.index()]
    }

    /// `true` if any piece of the side to move has a legal destination.
    pub fn has_legal_move(&self) -> bool {
        self.legal.iter().any(|destinations| destinations.is_nonempty())
    }

    /// One move per legal destination. A promoting destination appears once,
    /// carrying a queen promotion.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for origin in self.color_occupancy(self.side_to_move()) {
            let promotes = self.promotes_from(origin);
            for destination in self.legal[origin.index()] {
                let promotion = (promotes && self.is_promotion_square(destination)).then_some(PieceKind::Queen);
                moves.push(Move::from_parts(origin, destination, promotion));
            }
        }
        moves
    }

    /// Like [`all_legal_moves`](Self::all_legal_moves), with every promotion
    /// choice listed separately.
    pub fn expanded_legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for origin in self.color_occupancy(self.side_to_move()) {
            let promotes = self.promotes_from(origin);
            for destination in self.legal[origin.index()] {
                if promotes && self.is_promotion_square(destination) {
                    moves.extend(
                        PieceKind::PROMOTIONS
                            .into_iter()
                            .map(|kind| Move::with_promotion(origin, destination, kind)),
                    );
                } else {
                    moves.push(Move::new(origin, destination));
                }
            }
        }
        moves
    }

    fn promotes_from(&self, origin: Square) -> bool {
        self.kind_occupancy(PieceKind::Pawn).contains(origin)
    }

    fn is_promotion_square(&self, sq: Square) -> bool {
        self.side_to_move().promotion_mask().contains(sq)
    }

    /// Snapshot of the placement as an 8x8 array.
    pub fn to_array_board(&self) -> ArrayBoard {
        let mut board = ArrayBoard::empty();
        for sq in self.occupancy() {
            board.set(sq.rank() as usize, sq.file() as usize, self.piece_at(sq));
        }
        board
    }

    /// `true` if both positions have the same pieces on the same squares, the
    /// same side to move, castling rights and en-passant target.
    pub fn same_placement(&self, other: &Position) -> bool {
        self.colors == other.colors
            && self.kinds == other.kinds
            && self.side_to_move() == other.side_to_move()
            && self.castling == other.castling
            && self.en_passant == other.en_passant
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting_position()
    }
}

impl fmt::Display for Position {
    /// 8x8 grid, rank 8 at the top, `.` for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0..8 {
                let c = Square::from_coords(rank, file)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', Piece::to_char);
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position(\"{}\" {} {} ep={:?})",
            self.to_array_board(),
            self.side_to_move(),
            self.castling,
            self.en_passant
        )
    }
}
