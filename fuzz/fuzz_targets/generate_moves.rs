#![no_main]
use firstmove::chess::board::Board;
use firstmove::chess::core::Player;
use firstmove::chess::movegen::Rules;
use libfuzzer_sys::fuzz_target;

// Arbitrary boards, including ones that are unreachable in a real game, must
// never crash the generator or the applier.
fuzz_target!(|data: &[u8]| {
    let Some((flags, squares)) = data.split_first() else {
        return;
    };
    let Ok(board) = Board::try_from(squares) else {
        return;
    };
    let player = if flags & 1 == 0 {
        Player::White
    } else {
        Player::Black
    };
    let rules = Rules {
        forced_captures: flags & 2 == 0,
        knight_checks: flags & 4 != 0,
    };
    for next_move in board.legal_moves(player, rules) {
        let mut next = board;
        next.make_move(&next_move);
        let _ = next.legal_moves(player.opponent(), rules);
    }
});
