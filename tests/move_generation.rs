use firstmove::chess::board::Board;
use firstmove::chess::core::{Move, PieceKind, Player, Square};
use firstmove::chess::movegen::{perft, Rules};
use itertools::Itertools;
use pretty_assertions::assert_eq;
use shakmaty::{CastlingMode, Chess, Position};

/// Rules under which the engine agrees with standard chess, as long as no
/// pawn on its starting rank is blocked right in front of it.
const STANDARD: Rules = Rules {
    forced_captures: false,
    knight_checks: true,
};

fn setup(input: &str) -> Board {
    Board::from_fen(input).expect("parsing position: {input}")
}

fn play(moves: &[&str]) -> Board {
    let mut board = Board::starting();
    for next_move in moves {
        drop(board.apply(next_move).expect("valid move: {next_move}"));
    }
    board
}

fn get_moves(board: &Board, player: Player, rules: Rules) -> Vec<String> {
    board
        .legal_moves(player, rules)
        .iter()
        .map(Move::to_string)
        .sorted()
        .collect::<Vec<_>>()
}

fn sorted_moves(moves: &[&str]) -> Vec<String> {
    moves
        .iter()
        .map(|m| (*m).to_string())
        .sorted()
        .collect::<Vec<_>>()
}

fn reference_moves(fen: &str) -> Vec<String> {
    let setup: shakmaty::fen::Fen = fen.parse().expect("valid FEN: {fen}");
    let position: Chess = setup
        .into_position(CastlingMode::Standard)
        .expect("legal position: {fen}");
    position
        .legal_moves()
        .iter()
        .map(|m| m.to_uci(CastlingMode::Standard).to_string())
        .sorted()
        .collect::<Vec<_>>()
}

#[test]
fn starting_moves() {
    let board = Board::starting();
    assert_eq!(
        get_moves(&board, Player::White, Rules::default()),
        sorted_moves(&[
            "a2a3", "a2a4", "b1a3", "b1c3", "b2b3", "b2b4", "c2c3", "c2c4", "d2d3", "d2d4", "e2e3",
            "e2e4", "f2f3", "f2f4", "g1f3", "g1h3", "g2g3", "g2g4", "h2h3", "h2h4"
        ])
    );
    assert_eq!(
        get_moves(&board, Player::Black, Rules::default()),
        sorted_moves(&[
            "a7a6", "a7a5", "b8a6", "b8c6", "b7b6", "b7b5", "c7c6", "c7c5", "d7d6", "d7d5", "e7e6",
            "e7e5", "f7f6", "f7f5", "g8f6", "g8h6", "g7g6", "g7g5", "h7h6", "h7h5"
        ])
    );
    assert_eq!(
        board.candidates(Player::White).moves.len(),
        board.legal_moves(Player::White, Rules::default()).len()
    );
}

#[test]
fn queen_rays_stop_before_own_pieces() {
    let board = play(&["e2e4", "e7e5"]);
    let queen = board
        .legal_moves(Player::White, Rules::default())
        .into_iter()
        .filter(|next_move| next_move.from() == Square::D1)
        .map(|next_move| next_move.to_string())
        .collect::<Vec<_>>();
    assert_eq!(queen, vec!["d1e2", "d1f3", "d1g4", "d1h5"]);
    assert_eq!(get_moves(&board, Player::White, Rules::default()).len(), 29);
}

#[test]
fn en_passant() {
    let mut board = play(&["e2e4", "a7a6", "e4e5", "d7d5"]);
    // Both captures are available: en passant and the bishop taking on a6.
    assert_eq!(
        get_moves(&board, Player::White, Rules::default()),
        sorted_moves(&["e5d6", "f1a6"])
    );
    assert!(board
        .candidates(Player::White)
        .moves
        .iter()
        .any(|candidate| candidate.is_capture && candidate.next_move.to_string() == "e5d6"));
    drop(board.apply("e5d6").unwrap());
    assert_eq!(board.at(Square::D5), None);
    assert_eq!(
        board.at(Square::D6).map(|piece| piece.kind),
        Some(PieceKind::Pawn)
    );
}

#[test]
fn en_passant_expires() {
    let board = play(&["e2e4", "a7a6", "e4e5", "d7d5", "h2h3", "h7h6"]);
    assert!(!get_moves(&board, Player::White, Rules::default()).contains(&"e5d6".to_string()));
}

#[test]
fn capture_priority() {
    let board = play(&["e2e4", "d7d5", "b1c3", "g8f6"]);
    assert_eq!(
        get_moves(&board, Player::White, Rules::default()),
        sorted_moves(&["c3d5", "e4d5"])
    );
    let all = get_moves(
        &board,
        Player::White,
        Rules {
            forced_captures: false,
            ..Rules::default()
        },
    );
    assert!(all.len() > 2);
    assert!(all.contains(&"e4e5".to_string()));
}

#[test]
fn capture_priority_keeps_king_safety() {
    // Dropping the pinned bishop's capture does not bring the quiet moves
    // back.
    let board = setup("4r1k1/8/8/8/8/8/4B3/3pK3 w - - 0 1");
    let candidates = board.candidates(Player::White);
    assert_eq!(
        candidates
            .moves
            .iter()
            .filter(|candidate| candidate.is_capture)
            .count(),
        2
    );
    assert_eq!(
        get_moves(&board, Player::White, Rules::default()),
        sorted_moves(&["e1d1"])
    );
}

#[test]
fn king_safety() {
    let board = setup("3rk3/8/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(
        get_moves(&board, Player::White, Rules::default()),
        sorted_moves(&["e1e2", "e1f1", "e1f2"])
    );
    let board = setup("4k3/8/8/8/8/8/4r3/3RK3 w - - 0 1");
    assert_eq!(
        get_moves(&board, Player::White, Rules::default()),
        sorted_moves(&["e1e2"])
    );
}

#[test]
fn king_safety_keeps_unrelated_moves() {
    // The rook on d8 only takes d1 and d2 away from the king.
    let board = setup("3rk3/8/8/8/8/8/7R/4K3 w - - 0 1");
    let moves = get_moves(&board, Player::White, Rules::default());
    assert_eq!(
        moves,
        sorted_moves(&[
            "h2g2", "h2f2", "h2e2", "h2d2", "h2c2", "h2b2", "h2a2", "h2h1", "h2h3", "h2h4",
            "h2h5", "h2h6", "h2h7", "h2h8", "e1f1", "e1e2", "e1f2",
        ])
    );
    assert!(!moves.contains(&"e1d1".to_string()));
    assert!(!moves.contains(&"e1d2".to_string()));
}

#[test]
fn promotions() {
    let board = setup("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1");
    let mut moves = get_moves(&board, Player::White, Rules::default());
    moves.retain(|m| m.starts_with("b7"));
    assert_eq!(moves, sorted_moves(&["b7b8q", "b7b8r", "b7b8b", "b7b8n"]));
}

#[test]
fn perft_start() {
    let board = Board::starting();
    assert_eq!(perft(&board, Player::White, 1, Rules::default()), 20);
    assert_eq!(perft(&board, Player::White, 2, Rules::default()), 400);
    assert_eq!(perft(&board, Player::White, 2, STANDARD), 400);
}

#[test]
fn matches_standard_chess() {
    for (fen, player) in [
        (
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
            Player::White,
        ),
        (
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b - - 0 1",
            Player::Black,
        ),
        (
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w - - 0 2",
            Player::White,
        ),
        ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", Player::White),
        (
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w - - 0 1",
            Player::White,
        ),
        ("4k3/8/8/8/8/3n4/8/4K3 w - - 0 1", Player::White),
        ("3kn3/R2p1N2/8/8/7B/6K1/3R4/8 b - - 0 1", Player::Black),
        ("8/5Nk1/7p/4Bp2/3q4/8/8/5KR1 b - - 0 1", Player::Black),
        ("2R5/8/6k1/8/8/8/PPn5/KR6 w - - 0 1", Player::White),
    ] {
        assert_eq!(
            get_moves(&setup(fen), player, STANDARD),
            reference_moves(fen),
            "{fen}"
        );
    }
}
