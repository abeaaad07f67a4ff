//! Command-line configuration of the `firstmove` binary.
//!
//! ```text
//! firstmove [white|black] [--no-forced-captures] [--knight-checks] [-v|--verbose]...
//! ```
//!
//! Without a side the session is manual: both sides' moves are entered by
//! hand. The log level is taken from the number of `-v` flags or, if there
//! are none, from the [`LOG_ENV`] environment variable.

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

use crate::chess::core::Player;
use crate::chess::movegen::Rules;
use crate::Mode;

/// Environment variable holding the log filter, e.g. `debug` or
/// `firstmove::chess=trace`.
pub const LOG_ENV: &str = "FIRSTMOVE_LOG";

/// Levels selected by repeating `-v`.
const VERBOSITY: [LevelFilter; 3] = [LevelFilter::Info, LevelFilter::Debug, LevelFilter::Trace];

/// Side played by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// The engine opens the game.
    White,
    /// The engine answers the first human move.
    Black,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Self::White,
            Side::Black => Self::Black,
        }
    }
}

/// Chess session that always answers with the first legal move.
#[derive(Parser, Clone, Copy, Debug, PartialEq, Eq)]
#[command(version, about)]
pub struct Config {
    /// Side played by the engine. Without it both sides are entered by hand.
    #[arg(value_enum)]
    pub side: Option<Side>,
    /// Allow quiet moves even when a capture is available.
    #[arg(long)]
    pub no_forced_captures: bool,
    /// Let knights give check when filtering moves that expose the king.
    #[arg(long)]
    pub knight_checks: bool,
    /// Raise the log level: info, debug, then trace. Overrides `FIRSTMOVE_LOG`.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Session mode selected by the side argument.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.side.map_or(Mode::Manual, |side| Mode::Auto(side.into()))
    }

    /// Rule variations selected by the flags.
    #[must_use]
    pub const fn rules(&self) -> Rules {
        Rules {
            forced_captures: !self.no_forced_captures,
            knight_checks: self.knight_checks,
        }
    }

    /// Level requested with `-v` flags, if any.
    #[must_use]
    pub fn verbosity(&self) -> Option<LevelFilter> {
        match self.verbose {
            0 => None,
            count => Some(VERBOSITY[usize::from(count - 1).min(VERBOSITY.len() - 1)]),
        }
    }
}
