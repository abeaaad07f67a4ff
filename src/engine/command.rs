use crate::chess::core::Move;

/// A single token of the session input.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command {
    Play(Move),
    End,
    Invalid { token: String, reason: String },
}

impl Command {
    pub(super) fn parse(token: &str) -> Self {
        if token == "end" {
            return Self::End;
        }
        match Move::from_uci(token) {
            Ok(next_move) => Self::Play(next_move),
            Err(e) => Self::Invalid {
                token: token.to_string(),
                reason: format!("{e:#}"),
            },
        }
    }
}
