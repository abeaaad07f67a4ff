#![no_main]
use firstmove::chess::board::Board;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(board) = Board::from_fen(input) {
        let placement = board.fen();
        assert_eq!(Board::from_fen(&placement).map(|b| b.fen()).ok(), Some(placement));
    }
});
