//! Chess primitives commonly used within [`crate::chess`]: coordinates, pieces,
//! moves and the packed per-square piece encoding.

use std::fmt::{self, Write};

use anyhow::{bail, Context};
use arrayvec::ArrayString;
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// Represents a move in [coordinate algebraic notation]: the origin square,
/// the destination square and the piece a pawn is promoted to. A move does
/// not know anything about the board it is played on: castling is a king move
/// onto a castling square, en passant is a diagonal pawn move onto a flagged
/// square.
///
/// The move representation has one-to-one correspondence with the UCI move
/// string (`e2e4`, `e7e8q`).
///
/// [coordinate algebraic notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub(super) from: Square,
    pub(super) to: Square,
    pub(super) promotion: Option<Promotion>,
}

impl Move {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn new(from: Square, to: Square, promotion: Option<Promotion>) -> Self {
        Self {
            from,
            to,
            promotion,
        }
    }

    /// Parses a move from its 4- or 5-character notation.
    ///
    /// ```
    /// use firstmove::chess::core::{Move, Promotion, Square};
    ///
    /// let promotion = Move::from_uci("e7e8q").unwrap();
    /// assert_eq!(promotion.from(), Square::E7);
    /// assert_eq!(promotion.to(), Square::E8);
    /// assert_eq!(promotion.promotion(), Some(Promotion::Queen));
    /// assert!(Move::from_uci("e7e8k").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not `[a-h][1-8][a-h][1-8][qrbn]?`.
    pub fn from_uci(input: &str) -> anyhow::Result<Self> {
        if !input.is_ascii() {
            bail!("move should only contain ASCII characters, got '{input}'");
        }
        if input.len() != 4 && input.len() != 5 {
            bail!(
                "move should be 4 or 5 characters long, got '{input}' with {} characters",
                input.len()
            );
        }
        let from = Square::try_from(&input[0..2])
            .with_context(|| format!("invalid origin square in '{input}'"))?;
        let to = Square::try_from(&input[2..4])
            .with_context(|| format!("invalid destination square in '{input}'"))?;
        let promotion = match input[4..].chars().next() {
            Some(symbol) => Some(Promotion::try_from(symbol)?),
            None => None,
        };
        Ok(Self::new(from, to, promotion))
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[must_use]
    #[allow(missing_docs)]
    pub const fn promotion(&self) -> Option<Promotion> {
        self.promotion
    }

    /// Serializes the move without allocating.
    #[must_use]
    pub fn uci(&self) -> ArrayString<5> {
        let mut result = ArrayString::new();
        result.push_str(&self.from.to_algebraic());
        result.push_str(&self.to.to_algebraic());
        if let Some(promotion) = self.promotion {
            result.push(PieceKind::from(promotion).symbol());
        }
        result
    }
}

impl TryFrom<&str> for Move {
    type Error = anyhow::Error;

    fn try_from(input: &str) -> anyhow::Result<Self> {
        Self::from_uci(input)
    }
}

impl fmt::Display for Move {
    /// Serializes a move in [UCI format].
    ///
    /// [UCI format]: http://wbec-ridderkerk.nl/html/UCIProtocol.html
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uci())
    }
}

/// Board squares: from left to right, from top (rank 8) to the bottom (rank 1)
/// as seen by the White player.
///
/// ```
/// use firstmove::chess::core::Square;
///
/// assert_eq!(Square::A8 as u8, 0);
/// assert_eq!(Square::H8 as u8, 7);
/// assert_eq!(Square::E2 as u8, 52);
/// assert_eq!(Square::H1 as u8, 63);
/// ```
///
/// Square is a compact representation using only one byte.
///
/// ```
/// use firstmove::chess::core::Square;
///
/// assert_eq!(std::mem::size_of::<Square>(), 1);
/// ```
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[rustfmt::skip]
#[allow(missing_docs)]
pub enum Square {
    A8, B8, C8, D8, E8, F8, G8, H8,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A1, B1, C1, D1, E1, F1, G1, H1,
}

impl Square {
    /// All squares in index order.
    #[rustfmt::skip]
    pub const ALL: [Self; BOARD_SIZE as usize] = [
        Self::A8, Self::B8, Self::C8, Self::D8, Self::E8, Self::F8, Self::G8, Self::H8,
        Self::A7, Self::B7, Self::C7, Self::D7, Self::E7, Self::F7, Self::G7, Self::H7,
        Self::A6, Self::B6, Self::C6, Self::D6, Self::E6, Self::F6, Self::G6, Self::H6,
        Self::A5, Self::B5, Self::C5, Self::D5, Self::E5, Self::F5, Self::G5, Self::H5,
        Self::A4, Self::B4, Self::C4, Self::D4, Self::E4, Self::F4, Self::G4, Self::H4,
        Self::A3, Self::B3, Self::C3, Self::D3, Self::E3, Self::F3, Self::G3, Self::H3,
        Self::A2, Self::B2, Self::C2, Self::D2, Self::E2, Self::F2, Self::G2, Self::H2,
        Self::A1, Self::B1, Self::C1, Self::D1, Self::E1, Self::F1, Self::G1, Self::H1,
    ];

    /// Connects file (column) and rank (row) to form a full square.
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        let row = BOARD_WIDTH - 1 - rank as u8;
        Self::ALL[(file as u8 + row * BOARD_WIDTH) as usize]
    }

    /// Position of the square in the board array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns file (column) on which the square is located.
    #[must_use]
    pub const fn file(self) -> File {
        File::ALL[(self as u8 % BOARD_WIDTH) as usize]
    }

    /// Returns rank (row) on which the square is located.
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(BOARD_WIDTH - 1 - self as u8 / BOARD_WIDTH) as usize]
    }

    /// Returns the square `file_delta` files to the right and `rank_delta`
    /// ranks up (from White's perspective), or `None` if that leaves the
    /// board.
    #[must_use]
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        const WIDTH: i8 = BOARD_WIDTH as i8;
        let file = self.file() as i8 + file_delta;
        let rank = self.rank() as i8 + rank_delta;
        if !(0..WIDTH).contains(&file) || !(0..WIDTH).contains(&rank) {
            return None;
        }
        Some(Self::new(File::ALL[file as usize], Rank::ALL[rank as usize]))
    }

    /// Moves one step in the given direction.
    #[must_use]
    pub fn shift(self, direction: Direction) -> Option<Self> {
        let (file_delta, rank_delta) = direction.delta();
        self.offset(file_delta, rank_delta)
    }

    /// Two-character algebraic name of the square: file letter and rank
    /// digit.
    ///
    /// ```
    /// use firstmove::chess::core::Square;
    ///
    /// assert_eq!(Square::A8.to_algebraic().as_str(), "a8");
    /// assert_eq!(Square::try_from(60u8).unwrap().to_algebraic().as_str(), "e1");
    /// ```
    #[must_use]
    pub fn to_algebraic(self) -> ArrayString<2> {
        let mut result = ArrayString::new();
        result.push(self.file().symbol());
        result.push(self.rank().symbol());
        result
    }
}

impl TryFrom<u8> for Square {
    type Error = anyhow::Error;

    /// Creates a square given its position on the board.
    ///
    /// # Errors
    ///
    /// If given square index is outside 0..[`BOARD_SIZE`] range.
    fn try_from(square_index: u8) -> anyhow::Result<Self> {
        match Self::ALL.get(square_index as usize) {
            Some(square) => Ok(*square),
            None => bail!("square index should be in 0..BOARD_SIZE, got {square_index}"),
        }
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    fn try_from(square: &str) -> anyhow::Result<Self> {
        let (file, rank) = match square.chars().collect_tuple() {
            Some((file, rank)) => (file, rank),
            None => bail!(
                "square should be two-char, got {square} with {} chars",
                square.chars().count()
            ),
        };
        Ok(Self::new(file.try_into()?, rank.try_into()?))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}

/// Represents a column (vertical row) of the chessboard. In chess notation, it
/// is normally represented with a lowercase letter.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    #[allow(missing_docs)]
    pub const ALL: [Self; BOARD_WIDTH as usize] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
    ];

    const fn symbol(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

impl TryFrom<char> for File {
    type Error = anyhow::Error;

    fn try_from(file: char) -> anyhow::Result<Self> {
        match file {
            'a'..='h' => Ok(Self::ALL[(file as u8 - b'a') as usize]),
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        }
    }
}

impl TryFrom<u8> for File {
    type Error = anyhow::Error;

    fn try_from(column: u8) -> anyhow::Result<Self> {
        match Self::ALL.get(column as usize) {
            Some(file) => Ok(*file),
            None => bail!("file should be within 0..BOARD_WIDTH, got {column}"),
        }
    }
}

/// Represents a horizontal row of the chessboard. In chess notation, it is
/// represented with a number. The implementation assumes zero-based values
/// (i.e. rank 1 would be 0).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Rank {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

impl Rank {
    #[allow(missing_docs)]
    pub const ALL: [Self; BOARD_WIDTH as usize] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
    ];

    /// The rank the player's pieces start on.
    #[must_use]
    pub const fn backrank(player: Player) -> Self {
        match player {
            Player::White => Self::One,
            Player::Black => Self::Eight,
        }
    }

    /// The rank the player's pawns start on.
    #[must_use]
    pub const fn pawns_starting(player: Player) -> Self {
        match player {
            Player::White => Self::Two,
            Player::Black => Self::Seven,
        }
    }

    const fn symbol(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl TryFrom<char> for Rank {
    type Error = anyhow::Error;

    fn try_from(rank: char) -> anyhow::Result<Self> {
        match rank {
            '1'..='8' => Ok(Self::ALL[(rank as u8 - b'1') as usize]),
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = anyhow::Error;

    fn try_from(row: u8) -> anyhow::Result<Self> {
        match Self::ALL.get(row as usize) {
            Some(rank) => Ok(*rank),
            None => bail!("rank should be within 0..BOARD_WIDTH, got {row}"),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

/// A standard game of chess is played between two players: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Direction of the player's pawn advances.
    #[must_use]
    pub const fn push_direction(self) -> Direction {
        match self {
            Self::White => Direction::Up,
            Self::Black => Direction::Down,
        }
    }

    /// Directions the player's pawns capture in, in generation order.
    #[must_use]
    pub const fn pawn_attack_directions(self) -> [Direction; 2] {
        match self {
            Self::White => [Direction::UpRight, Direction::UpLeft],
            Self::Black => [Direction::DownLeft, Direction::DownRight],
        }
    }
}

impl TryFrom<&str> for Player {
    type Error = anyhow::Error;

    fn try_from(player: &str) -> anyhow::Result<Self> {
        match player {
            "w" => Ok(Self::White),
            "b" => Ok(Self::Black),
            _ => bail!("player should be 'w' or 'b', got '{player}'"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::White => 'w',
            Self::Black => 'b',
        })
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Bishop,
    Knight,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase letter used in FEN and move notation.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }
}

impl From<Promotion> for PieceKind {
    fn from(promotion: Promotion) -> Self {
        match promotion {
            Promotion::Queen => Self::Queen,
            Promotion::Rook => Self::Rook,
            Promotion::Bishop => Self::Bishop,
            Promotion::Knight => Self::Knight,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

/// Represents a specific piece owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[must_use]
    #[allow(missing_docs)]
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self { owner, kind }
    }

    /// Two-letter code used when printing the board: color (`W` or `B`)
    /// followed by the uppercase piece letter.
    ///
    /// ```
    /// use firstmove::chess::core::{Piece, PieceKind, Player};
    ///
    /// assert_eq!(Piece::new(Player::White, PieceKind::Knight).code().as_str(), "WN");
    /// assert_eq!(Piece::new(Player::Black, PieceKind::King).code().as_str(), "BK");
    /// ```
    #[must_use]
    pub fn code(self) -> ArrayString<2> {
        let mut code = ArrayString::new();
        code.push(match self.owner {
            Player::White => 'W',
            Player::Black => 'B',
        });
        code.push(self.kind.symbol().to_ascii_uppercase());
        code
    }

    /// FEN symbol: uppercase for White, lowercase for Black.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self.owner {
            Player::White => self.kind.symbol().to_ascii_uppercase(),
            Player::Black => self.kind.symbol(),
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let kind = match symbol.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => bail!("piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'"),
        };
        let owner = if symbol.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Ok(Self { owner, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

/// A pawn can be promoted to a queen, rook, bishop or a knight.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    /// Promotion choices in the order they are generated.
    pub const ALL: [Self; 4] = [Self::Queen, Self::Rook, Self::Bishop, Self::Knight];
}

impl TryFrom<char> for Promotion {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match symbol {
            'q' => Ok(Self::Queen),
            'r' => Ok(Self::Rook),
            'b' => Ok(Self::Bishop),
            'n' => Ok(Self::Knight),
            _ => bail!("promotion should be one of 'q', 'r', 'b' or 'n', got '{symbol}'"),
        }
    }
}

bitflags::bitflags! {
    /// Packed single-byte form of a square's occupant.
    ///
    /// The six low bits hold the piece type and the two high bits hold the
    /// color, each value being a single bit so that membership is one bitwise
    /// test:
    ///
    /// | Bit | Meaning |
    /// | --- | ------- |
    /// | 0 | Pawn |
    /// | 1 | Bishop |
    /// | 2 | Knight |
    /// | 3 | Rook |
    /// | 4 | Queen |
    /// | 5 | King |
    /// | 6 | White |
    /// | 7 | Black |
    ///
    /// An empty square is `0`. The engine itself works with [`Piece`]; this
    /// encoding only exists at the boundary (see
    /// [`crate::chess::board::Board::to_bytes`]).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Encoding: u8 {
        #[allow(missing_docs)]
        const PAWN = 1;
        #[allow(missing_docs)]
        const BISHOP = 1 << 1;
        #[allow(missing_docs)]
        const KNIGHT = 1 << 2;
        #[allow(missing_docs)]
        const ROOK = 1 << 3;
        #[allow(missing_docs)]
        const QUEEN = 1 << 4;
        #[allow(missing_docs)]
        const KING = 1 << 5;
        #[allow(missing_docs)]
        const WHITE = 1 << 6;
        #[allow(missing_docs)]
        const BLACK = 1 << 7;

        /// Mask of the piece type bits.
        const KIND = 0b0011_1111;
        /// Mask of the color bits.
        const COLOR = 0b1100_0000;
    }
}

const KIND_ENCODINGS: [(Encoding, PieceKind); 6] = [
    (Encoding::PAWN, PieceKind::Pawn),
    (Encoding::BISHOP, PieceKind::Bishop),
    (Encoding::KNIGHT, PieceKind::Knight),
    (Encoding::ROOK, PieceKind::Rook),
    (Encoding::QUEEN, PieceKind::Queen),
    (Encoding::KING, PieceKind::King),
];

const PLAYER_ENCODINGS: [(Encoding, Player); 2] = [
    (Encoding::WHITE, Player::White),
    (Encoding::BLACK, Player::Black),
];

impl Encoding {
    /// Unpacks the occupant.
    ///
    /// # Errors
    ///
    /// Fails if more than one type or color bit is set, or if only one of the
    /// two fields is present.
    pub fn piece(self) -> anyhow::Result<Option<Piece>> {
        let kind_bits = self & Self::KIND;
        let color_bits = self & Self::COLOR;
        if kind_bits.is_empty() && color_bits.is_empty() {
            return Ok(None);
        }
        let kind = KIND_ENCODINGS
            .iter()
            .find(|(bits, _)| *bits == kind_bits)
            .map(|(_, kind)| *kind)
            .with_context(|| {
                format!(
                    "expected exactly one piece type bit, got {:#010b}",
                    self.bits()
                )
            })?;
        let owner = PLAYER_ENCODINGS
            .iter()
            .find(|(bits, _)| *bits == color_bits)
            .map(|(_, player)| *player)
            .with_context(|| format!("expected exactly one color bit, got {:#010b}", self.bits()))?;
        Ok(Some(Piece { owner, kind }))
    }
}

impl From<PieceKind> for Encoding {
    fn from(kind: PieceKind) -> Self {
        KIND_ENCODINGS
            .iter()
            .find(|(_, candidate)| *candidate == kind)
            .map_or_else(Self::empty, |(bits, _)| *bits)
    }
}

impl From<Player> for Encoding {
    fn from(player: Player) -> Self {
        match player {
            Player::White => Self::WHITE,
            Player::Black => Self::BLACK,
        }
    }
}

impl From<Piece> for Encoding {
    fn from(piece: Piece) -> Self {
        Self::from(piece.kind) | Self::from(piece.owner)
    }
}

impl From<Option<Piece>> for Encoding {
    fn from(occupant: Option<Piece>) -> Self {
        occupant.map_or_else(Self::empty, Self::from)
    }
}

/// Directions on the board from a perspective of White player.
///
/// Traditionally those are North (Up), West (Left), East (Right), South (Down)
/// and their combinations. However, using cardinal directions is confusing,
/// hence they are replaced by relative directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Also known as NorthWest.
    UpLeft,
    /// Also known as North.
    Up,
    /// Also known as NorthEast.
    UpRight,
    /// Also known as East.
    Right,
    /// Also known as West.
    Left,
    /// Also known as SouthWest.
    DownLeft,
    /// Also known as South.
    Down,
    /// Also known as SouthEast.
    DownRight,
}

impl Direction {
    /// Directions a bishop slides in, in generation order.
    pub const DIAGONAL: [Self; 4] = [Self::DownRight, Self::DownLeft, Self::UpLeft, Self::UpRight];
    /// Directions a rook slides in, in generation order.
    pub const ORTHOGONAL: [Self; 4] = [Self::Right, Self::Left, Self::Down, Self::Up];

    /// File and rank increments of a single step.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::UpLeft => (-1, 1),
            Self::Up => (0, 1),
            Self::UpRight => (1, 1),
            Self::Right => (1, 0),
            Self::Left => (-1, 0),
            Self::DownLeft => (-1, -1),
            Self::Down => (0, -1),
            Self::DownRight => (1, -1),
        }
    }

    /// Whether the direction runs along a file or a rank.
    #[must_use]
    pub const fn is_orthogonal(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }
}
