//! Square-centric [`Board`] representation: one [`Cell`] per square, indexed
//! from a8 (0) to h1 (63).
//!
//! The board is the only mutable chess state. It is mutated exclusively through
//! [`Board::make_move`], which trusts its input: moves are expected to come
//! from the move generator or a trusted source, and no legality checks are
//! performed.

use std::fmt;

use anyhow::{bail, Context};
use arrayvec::ArrayString;
use itertools::Itertools;

use crate::chess::core::{
    Encoding,
    File,
    Move,
    Piece,
    PieceKind,
    Player,
    Rank,
    Square,
    BOARD_SIZE,
    BOARD_WIDTH,
};

/// Contents of a single square: the occupant and the transient per-piece
/// state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    piece: Option<Piece>,
    /// Set once the occupant made a move; travels with it.
    has_moved: bool,
    /// Set for one ply on the square a pawn passed through on a double step.
    en_passant: bool,
}

impl Cell {
    /// An empty square with all flags cleared.
    pub const EMPTY: Self = Self {
        piece: None,
        has_moved: false,
        en_passant: false,
    };

    const fn new(piece: Piece) -> Self {
        Self {
            piece: Some(piece),
            has_moved: false,
            en_passant: false,
        }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn piece(&self) -> Option<Piece> {
        self.piece
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn en_passant(&self) -> bool {
        self.en_passant
    }

    /// Packed form of the occupant.
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        Encoding::from(self.piece)
    }

    fn code(&self) -> ArrayString<2> {
        match self.piece {
            Some(piece) => piece.code(),
            None => {
                let mut code = ArrayString::new();
                code.push_str(EMPTY_SQUARE);
                code
            },
        }
    }
}

/// Rooks relocated when a king lands on a castling square: (king destination,
/// rook origin, rook destination, owner of the castling rook).
const CASTLING_ROOKS: [(Square, Square, Square, Player); 4] = [
    (Square::C8, Square::A8, Square::D8, Player::Black),
    (Square::G8, Square::H8, Square::F8, Player::Black),
    (Square::C1, Square::A1, Square::D1, Player::White),
    (Square::G1, Square::H1, Square::F1, Player::White),
];

/// Piece placement of the back ranks in the standard starting position.
const BACKRANK: [PieceKind; BOARD_WIDTH as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The chessboard: 64 [`Cell`]s in [`Square`] order.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE as usize],
}

impl Board {
    /// Creates the starting position of the standard chess variant.
    ///
    /// ```
    /// use firstmove::chess::board::Board;
    ///
    /// assert_eq!(
    ///     Board::starting().fen(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (file, kind) in File::ALL.into_iter().zip(BACKRANK) {
            for player in [Player::White, Player::Black] {
                board.place(
                    Square::new(file, Rank::backrank(player)),
                    Piece::new(player, kind),
                );
                board.place(
                    Square::new(file, Rank::pawns_starting(player)),
                    Piece::new(player, PieceKind::Pawn),
                );
            }
        }
        board
    }

    /// Creates a board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::EMPTY; BOARD_SIZE as usize],
        }
    }

    /// Returns the full contents of the square.
    #[must_use]
    pub const fn cell(&self, square: Square) -> &Cell {
        &self.cells[square.index()]
    }

    /// Returns the piece occupying the square, if any.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()].piece
    }

    /// Iterates over all squares in index order.
    pub fn cells(&self) -> impl Iterator<Item = (Square, &Cell)> + '_ {
        Square::ALL.into_iter().zip(self.cells.iter())
    }

    /// Puts a piece on the square. Pawns outside of their starting rank are
    /// considered to have moved: this is the only part of the piece history
    /// the move generator relies on.
    fn place(&mut self, square: Square, piece: Piece) {
        let mut cell = Cell::new(piece);
        cell.has_moved =
            piece.kind == PieceKind::Pawn && square.rank() != Rank::pawns_starting(piece.owner);
        self.cells[square.index()] = cell;
    }

    /// Parses the board from [Forsyth-Edwards Notation].
    ///
    /// Only the piece placement is required. If present, the side to move and
    /// the castling ability are validated but not stored (neither is a part of
    /// the board state) and the en passant target square is flagged. Halfmove
    /// clock and fullmove counter are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the placement does not describe 8 ranks of 8
    /// squares or any of the optional fields is malformed.
    ///
    /// [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    pub fn from_fen(input: &str) -> anyhow::Result<Self> {
        let mut parts = input.split_ascii_whitespace();
        let Some(placement) = parts.next() else {
            bail!("incorrect FEN: missing pieces placement")
        };
        let ranks = placement.split('/').collect_vec();
        if ranks.len() != BOARD_WIDTH as usize {
            bail!(
                "incorrect FEN: expected {BOARD_WIDTH} ranks, got {}",
                ranks.len()
            );
        }
        let mut board = Self::empty();
        for (rank, rank_fen) in Rank::ALL.into_iter().rev().zip(ranks) {
            let mut file: u8 = 0;
            for symbol in rank_fen.chars() {
                match symbol {
                    '1'..='8' => file += symbol as u8 - b'0',
                    _ => {
                        let piece = Piece::try_from(symbol)?;
                        let square = Square::new(
                            File::try_from(file)
                                .with_context(|| format!("incorrect FEN: rank {rank} overflows"))?,
                            rank,
                        );
                        board.place(square, piece);
                        file += 1;
                    },
                }
                if file > BOARD_WIDTH {
                    bail!("incorrect FEN: rank {rank} has more than {BOARD_WIDTH} squares");
                }
            }
            if file != BOARD_WIDTH {
                bail!("incorrect FEN: rank {rank} has {file} squares, expected {BOARD_WIDTH}");
            }
        }
        if let Some(side_to_move) = parts.next() {
            let _ = Player::try_from(side_to_move)?;
        }
        if let Some(castling) = parts.next() {
            if castling != "-" && !castling.chars().all(|symbol| "KQkq".contains(symbol)) {
                bail!("incorrect FEN: unknown castle rights {castling}");
            }
        }
        if let Some(en_passant) = parts.next() {
            if en_passant != "-" {
                let square = Square::try_from(en_passant)
                    .with_context(|| format!("incorrect FEN: en passant square {en_passant}"))?;
                board.cells[square.index()].en_passant = true;
            }
        }
        Ok(board)
    }

    /// Serializes the piece placement part of FEN.
    #[must_use]
    pub fn fen(&self) -> String {
        self.cells
            .chunks(BOARD_WIDTH as usize)
            .map(|row| {
                let mut result = String::new();
                let mut empty_squares = 0u8;
                for cell in row {
                    match cell.piece {
                        Some(piece) => {
                            if empty_squares != 0 {
                                result.push(char::from(b'0' + empty_squares));
                                empty_squares = 0;
                            }
                            result.push(piece.symbol());
                        },
                        None => empty_squares += 1,
                    }
                }
                if empty_squares != 0 {
                    result.push(char::from(b'0' + empty_squares));
                }
                result
            })
            .join(RANK_SEPARATOR)
    }

    /// Packs every square into its single-byte [`Encoding`]. The per-square
    /// flags are not part of this representation.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; BOARD_SIZE as usize] {
        self.cells.map(|cell| cell.encoding().bits())
    }

    /// Parses the move string and makes the move.
    ///
    /// # Errors
    ///
    /// Returns an error if the move is malformed; the board is unchanged in
    /// that case. The move is not checked for legality.
    pub fn apply(&mut self, next_move: &str) -> anyhow::Result<Move> {
        let next_move = Move::from_uci(next_move)?;
        self.make_move(&next_move);
        Ok(next_move)
    }

    /// Makes the move on the board without any validation.
    ///
    /// Apart from moving the piece this takes care of the side effects:
    ///
    /// - A promotion replaces the piece on the destination square with the
    ///   requested one of the same color, whatever the moved piece was.
    /// - A king landing on c1, g1, c8 or g8 brings the corresponding corner
    ///   rook to its castled square.
    /// - A pawn double step flags the square it passed through as capturable
    ///   en passant; a diagonal pawn move onto a flagged square removes the
    ///   pawn behind it.
    ///
    /// All en passant flags except the one on the destination square are
    /// cleared.
    pub fn make_move(&mut self, next_move: &Move) {
        let (from, to) = (next_move.from, next_move.to);
        log::trace!("{next_move} on {self:?}");
        self.cells[to.index()].piece = self.cells[from.index()].piece;
        self.cells[to.index()].has_moved = true;
        self.cells[from.index()] = Cell::EMPTY;
        for (square, cell) in Square::ALL.into_iter().zip(self.cells.iter_mut()) {
            if square != to {
                cell.en_passant = false;
            }
        }
        let Some(piece) = self.cells[to.index()].piece else {
            return;
        };
        if let Some(promotion) = next_move.promotion {
            self.cells[to.index()].piece = Some(Piece::new(piece.owner, promotion.into()));
            return;
        }
        match piece.kind {
            PieceKind::King => self.castle_rook(to),
            PieceKind::Pawn => self.pawn_side_effects(from, to),
            _ => (),
        }
    }

    fn castle_rook(&mut self, king_destination: Square) {
        if let Some((_, origin, destination, owner)) = CASTLING_ROOKS
            .iter()
            .find(|(square, ..)| *square == king_destination)
        {
            self.cells[origin.index()] = Cell::EMPTY;
            self.cells[destination.index()] = Cell::new(Piece::new(*owner, PieceKind::Rook));
        }
    }

    fn pawn_side_effects(&mut self, from: Square, to: Square) {
        let file_step = to.file() as i8 - from.file() as i8;
        let rank_step = to.rank() as i8 - from.rank() as i8;
        match (file_step.abs(), rank_step.abs()) {
            (0, 2) => {
                if let Some(passed) = from.offset(0, rank_step / 2) {
                    self.cells[passed.index()].en_passant = true;
                }
            },
            (1, 1) if self.cells[to.index()].en_passant => {
                if let Some(captured) = to.offset(0, -rank_step) {
                    self.cells[captured.index()] = Cell::EMPTY;
                }
            },
            _ => (),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl TryFrom<&[u8]> for Board {
    type Error = anyhow::Error;

    /// Unpacks a board from 64 [`Encoding`] bytes in square order. Pawns
    /// outside of their starting rank are marked as moved, no square is
    /// flagged for en passant.
    fn try_from(bytes: &[u8]) -> anyhow::Result<Self> {
        if bytes.len() != BOARD_SIZE as usize {
            bail!("expected {BOARD_SIZE} bytes, got {}", bytes.len());
        }
        let mut board = Self::empty();
        for (square, byte) in Square::ALL.into_iter().zip(bytes) {
            let occupant = Encoding::from_bits_retain(*byte)
                .piece()
                .with_context(|| format!("invalid encoding on {square}"))?;
            if let Some(piece) = occupant {
                board.place(square, piece);
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Prints the board a rank per line, each square as a two-letter code:
    /// `--` for an empty square, otherwise the color (`W` or `B`) followed by
    /// the piece letter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            &self
                .cells
                .chunks(BOARD_WIDTH as usize)
                .map(|row| row.iter().map(Cell::code).join(SQUARE_SEPARATOR))
                .join(LINE_SEPARATOR),
        )
    }
}

impl fmt::Debug for Board {
    /// Dumps the piece placement in FEN.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fen())
    }
}

const EMPTY_SQUARE: &str = "--";
const LINE_SEPARATOR: &str = "\n";
const RANK_SEPARATOR: &str = "/";
const SQUARE_SEPARATOR: &str = " ";
