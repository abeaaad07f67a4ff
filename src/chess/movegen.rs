//! Pseudo-legal move generation and the capture-priority rule.
//!
//! Generation walks the board in [`Square`] order and emits candidates per
//! piece type in a fixed direction order, so the resulting move list is
//! deterministic: the session engine always plays its first element.

use itertools::Itertools;

use crate::chess::board::Board;
use crate::chess::core::{Direction, Move, PieceKind, Player, Promotion, Rank, Square};
use crate::chess::safety;

/// Switches for the two places where the engine deviates from standard chess.
///
/// The defaults describe the engine's own rules: captures are mandatory and
/// knights are not considered when checking king safety.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    /// When any capture is available, only captures are legal.
    pub forced_captures: bool,
    /// Enemy knights give check.
    pub knight_checks: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            forced_captures: true,
            knight_checks: false,
        }
    }
}

/// A pseudo-legal move tagged with whether it takes something (or lands on a
/// square flagged for en passant).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    #[allow(missing_docs)]
    pub next_move: Move,
    #[allow(missing_docs)]
    pub is_capture: bool,
}

/// Raw output of the generator for one side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Candidates {
    /// Candidates in generation order.
    pub moves: Vec<Candidate>,
    /// Square of the side's king; the last one found if there are several.
    pub king: Option<Square>,
}

impl Candidates {
    fn push(&mut self, from: Square, to: Square, is_capture: bool) {
        self.moves.push(Candidate {
            next_move: Move::new(from, to, None),
            is_capture,
        });
    }

    /// Emits the pawn move once per promotion choice when it reaches the last
    /// rank.
    fn push_pawn(&mut self, player: Player, from: Square, to: Square, is_capture: bool) {
        if to.rank() == Rank::backrank(player.opponent()) {
            for promotion in Promotion::ALL {
                self.moves.push(Candidate {
                    next_move: Move::new(from, to, Some(promotion)),
                    is_capture,
                });
            }
        } else {
            self.push(from, to, is_capture);
        }
    }

    /// Applies the capture-priority rule: if any candidate captures, only the
    /// captures are kept.
    #[must_use]
    pub fn forced(self) -> Vec<Move> {
        let has_captures = self.moves.iter().any(|candidate| candidate.is_capture);
        self.moves
            .into_iter()
            .filter(|candidate| !has_captures || candidate.is_capture)
            .map(|candidate| candidate.next_move)
            .collect()
    }

    /// Drops the capture tags.
    #[must_use]
    pub fn all(self) -> Vec<Move> {
        self.moves
            .into_iter()
            .map(|candidate| candidate.next_move)
            .collect()
    }
}

/// File and rank steps of a knight jump, in generation order.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, -2),
    (-1, -2),
    (2, -1),
    (-2, -1),
    (-1, 2),
    (1, 2),
    (-2, 1),
    (2, 1),
];

/// King steps in generation order.
const KING_STEPS: [Direction; 8] = [
    Direction::Right,
    Direction::Left,
    Direction::Down,
    Direction::Up,
    Direction::DownRight,
    Direction::UpLeft,
    Direction::DownLeft,
    Direction::UpRight,
];

impl Board {
    /// Enumerates pseudo-legal moves of every piece owned by `player`: the
    /// movement rules and board occupancy are respected, king safety is not.
    /// Castling is never generated.
    #[must_use]
    pub fn candidates(&self, player: Player) -> Candidates {
        let mut candidates = Candidates::default();
        for (from, cell) in self.cells() {
            let Some(piece) = cell.piece() else {
                continue;
            };
            if piece.owner != player {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => self.pawn_moves(player, from, &mut candidates),
                PieceKind::Bishop => self.slide(player, from, &Direction::DIAGONAL, &mut candidates),
                PieceKind::Rook => {
                    self.slide(player, from, &Direction::ORTHOGONAL, &mut candidates);
                },
                PieceKind::Queen => {
                    self.slide(player, from, &Direction::DIAGONAL, &mut candidates);
                    self.slide(player, from, &Direction::ORTHOGONAL, &mut candidates);
                },
                PieceKind::Knight => {
                    for (file_delta, rank_delta) in KNIGHT_JUMPS {
                        if let Some(to) = from.offset(file_delta, rank_delta) {
                            self.step(player, from, to, &mut candidates);
                        }
                    }
                },
                PieceKind::King => {
                    candidates.king = Some(from);
                    for direction in KING_STEPS {
                        if let Some(to) = from.shift(direction) {
                            self.step(player, from, to, &mut candidates);
                        }
                    }
                },
            }
        }
        candidates
    }

    /// Calculates the list of moves `player` may make in this position under
    /// the given rules: pseudo-legal candidates, then the capture-priority
    /// rule, then the king-safety filter.
    ///
    /// ```
    /// use firstmove::chess::board::Board;
    /// use firstmove::chess::core::Player;
    /// use firstmove::chess::movegen::Rules;
    ///
    /// let board = Board::starting();
    /// assert_eq!(board.legal_moves(Player::White, Rules::default()).len(), 20);
    /// ```
    #[must_use]
    pub fn legal_moves(&self, player: Player, rules: Rules) -> Vec<Move> {
        let candidates = self.candidates(player);
        let king = candidates.king;
        log::debug!(
            "candidate moves for {player}: {}",
            candidates
                .moves
                .iter()
                .map(|candidate| candidate.next_move)
                .join(", ")
        );
        let moves = if rules.forced_captures {
            candidates.forced()
        } else {
            candidates.all()
        };
        safety::filter(self, player, moves, king, rules)
    }

    fn slide(
        &self,
        player: Player,
        from: Square,
        directions: &[Direction],
        candidates: &mut Candidates,
    ) {
        for &direction in directions {
            let mut current = from;
            while let Some(to) = current.shift(direction) {
                match self.at(to) {
                    None => candidates.push(from, to, false),
                    Some(piece) => {
                        if piece.owner != player {
                            candidates.push(from, to, true);
                        }
                        break;
                    },
                }
                current = to;
            }
        }
    }

    /// Single step of a knight or a king.
    fn step(&self, player: Player, from: Square, to: Square, candidates: &mut Candidates) {
        match self.at(to) {
            None => candidates.push(from, to, false),
            Some(piece) if piece.owner != player => candidates.push(from, to, true),
            Some(_) => (),
        }
    }

    fn pawn_moves(&self, player: Player, from: Square, candidates: &mut Candidates) {
        for direction in player.pawn_attack_directions() {
            let Some(to) = from.shift(direction) else {
                continue;
            };
            let takes_enemy = self.at(to).is_some_and(|piece| piece.owner != player);
            if takes_enemy || self.cell(to).en_passant() {
                candidates.push_pawn(player, from, to, true);
            }
        }
        let push = player.push_direction();
        if let Some(to) = from.shift(push) {
            if self.at(to).is_none() {
                candidates.push_pawn(player, from, to, false);
            }
        }
        if self.cell(from).has_moved() {
            return;
        }
        let (file_delta, rank_delta) = push.delta();
        if let Some(to) = from.offset(file_delta, 2 * rank_delta) {
            if self.at(to).is_none() {
                candidates.push_pawn(player, from, to, false);
            }
        }
    }
}

/// Counts the leaves of the move tree of the given depth, sides alternating
/// starting with `player`.
///
/// Moves that leave no legal reply end the branch early and are not counted
/// as leaves.
#[must_use]
pub fn perft(board: &Board, player: Player, depth: u8, rules: Rules) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = board.legal_moves(player, rules);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|next_move| {
            let mut next_board = *board;
            next_board.make_move(next_move);
            perft(&next_board, player.opponent(), depth - 1, rules)
        })
        .sum()
}
