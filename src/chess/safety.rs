//! King-safety filter: drops candidates that would leave the mover's king
//! attacked.
//!
//! Each candidate is simulated against the unchanged board: its origin square
//! reads as empty and its destination as occupied by the mover, so the board
//! is never copied or mutated.

use crate::chess::board::Board;
use crate::chess::core::{Direction, Move, Piece, PieceKind, Player, Square};
use crate::chess::movegen::Rules;

const RAYS: [Direction; 8] = [
    Direction::Right,
    Direction::Left,
    Direction::Down,
    Direction::Up,
    Direction::DownRight,
    Direction::UpLeft,
    Direction::DownLeft,
    Direction::UpRight,
];

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

/// What the simulated board holds on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Occupant {
    Empty,
    /// Destination of the simulated move.
    Mover,
    Piece(Piece),
}

/// A position right after `next_move` is made, seen from the king's side.
struct Simulation<'a> {
    board: &'a Board,
    player: Player,
    next_move: &'a Move,
}

impl Simulation<'_> {
    fn at(&self, square: Square) -> Occupant {
        if square == self.next_move.to() {
            return Occupant::Mover;
        }
        if square == self.next_move.from() {
            return Occupant::Empty;
        }
        self.board.at(square).map_or(Occupant::Empty, Occupant::Piece)
    }

    fn enemy(&self, square: Square) -> Option<PieceKind> {
        match self.at(square) {
            Occupant::Piece(piece) if piece.owner != self.player => Some(piece.kind),
            _ => None,
        }
    }

    /// Walks the ray until the first occupied square and tells whether the
    /// piece there attacks the king.
    fn ray_attacks(&self, king: Square, direction: Direction) -> bool {
        let mut current = king;
        let mut distance = 0;
        while let Some(square) = current.shift(direction) {
            distance += 1;
            match self.at(square) {
                Occupant::Empty => current = square,
                Occupant::Mover => return false,
                Occupant::Piece(piece) if piece.owner == self.player => return false,
                Occupant::Piece(piece) => {
                    return match piece.kind {
                        PieceKind::Queen => true,
                        PieceKind::Rook => direction.is_orthogonal(),
                        PieceKind::Bishop => !direction.is_orthogonal(),
                        PieceKind::King => distance == 1,
                        PieceKind::Pawn => {
                            distance == 1
                                && self.player.pawn_attack_directions().contains(&direction)
                        },
                        PieceKind::Knight => false,
                    }
                },
            }
        }
        false
    }

    fn knight_attacks(&self, king: Square) -> bool {
        KNIGHT_JUMPS.iter().any(|&(file_delta, rank_delta)| {
            king.offset(file_delta, rank_delta)
                .and_then(|square| self.enemy(square))
                == Some(PieceKind::Knight)
        })
    }

    fn king_attacked(&self, king: Square, rules: Rules) -> bool {
        RAYS.iter()
            .any(|&direction| self.ray_attacks(king, direction))
            || (rules.knight_checks && self.knight_attacks(king))
    }
}

/// Keeps the moves after which the king on `king` is not attacked, in order.
///
/// Without a king there is nothing to protect and all moves are kept.
#[must_use]
pub fn filter(
    board: &Board,
    player: Player,
    moves: Vec<Move>,
    king: Option<Square>,
    rules: Rules,
) -> Vec<Move> {
    let Some(king) = king else {
        log::warn!("{player} has no king on {board:?}, skipping king safety");
        return moves;
    };
    moves
        .into_iter()
        .filter(|next_move| {
            let simulation = Simulation {
                board,
                player,
                next_move,
            };
            let king = if next_move.from() == king {
                next_move.to()
            } else {
                king
            };
            let attacked = simulation.king_attacked(king, rules);
            if attacked {
                log::trace!("{next_move} leaves the king on {king} attacked");
            }
            !attacked
        })
        .collect()
}
