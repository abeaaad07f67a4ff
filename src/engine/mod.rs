//! The engine puts the board and move generation together and runs a game
//! session over text streams.
//!
//! [`Engine::run`] is the "main loop": it reads whitespace-separated move
//! tokens from the input, applies them and, when the engine plays one of the
//! sides, answers with the first legal move. The loop works on any
//! [`BufRead`]/[`Write`] pair, so the binary hands it stdin and stdout while
//! tests use in-memory buffers.

use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};

use anyhow::Context;

use crate::chess::board::Board;
use crate::chess::core::Player;
use crate::chess::movegen::Rules;
use crate::engine::command::Command;

mod command;

/// Who the engine plays for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Both sides are entered by hand.
    #[default]
    Manual,
    /// The engine plays the given side and answers every human move.
    Auto(Player),
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual => f.write_str("manual"),
            Self::Auto(player) => write!(f, "engine plays {}", side_name(*player)),
        }
    }
}

const fn side_name(player: Player) -> &'static str {
    match player {
        Player::White => "White",
        Player::Black => "Black",
    }
}

/// The Engine owns the board of a single game and handles the I/O.
pub struct Engine<'a, R: BufRead, W: Write> {
    board: Board,
    mode: Mode,
    rules: Rules,
    input: &'a mut R,
    output: &'a mut W,
    pending: VecDeque<String>,
}

impl<'a, R: BufRead, W: Write> Engine<'a, R, W> {
    /// Creates a new session in the starting position.
    #[must_use]
    pub fn new(mode: Mode, rules: Rules, input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            board: Board::starting(),
            mode,
            rules,
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Replaces the board the session starts from.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Current state of the game.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Plays the session until `end` is entered, the input is exhausted or
    /// the engine is left without a legal move.
    ///
    /// Moves entered by hand are not checked for legality; malformed ones are
    /// reported and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input or writing the output fails.
    pub fn run(&mut self) -> anyhow::Result<()> {
        log::info!("Starting session: {}", self.mode);
        self.print_board()?;
        if self.mode == Mode::Auto(Player::White) && !self.open()? {
            return Ok(());
        }
        loop {
            writeln!(self.output, "Make a move...")?;
            let Some(token) = self.next_token()? else {
                log::debug!("Input is exhausted");
                break;
            };
            match Command::parse(&token) {
                Command::End => break,
                Command::Invalid { token, reason } => {
                    writeln!(self.output, "Invalid move '{token}': {reason}")?;
                },
                Command::Play(next_move) => {
                    log::debug!("Player move: {next_move}");
                    self.board.make_move(&next_move);
                    self.print_board()?;
                    if let Mode::Auto(engine) = self.mode {
                        if !self.respond(engine)? {
                            break;
                        }
                    }
                },
            }
        }
        Ok(())
    }

    /// Makes the first move of the game for White, listing all candidates.
    fn open(&mut self) -> anyhow::Result<bool> {
        let moves = self.board.legal_moves(Player::White, self.rules);
        for next_move in &moves {
            writeln!(self.output, "{next_move}")?;
        }
        let Some(first) = moves.first() else {
            writeln!(self.output, "No legal moves left for White.")?;
            return Ok(false);
        };
        log::debug!("Engine move: {first}");
        self.board.make_move(first);
        self.print_board()?;
        Ok(true)
    }

    /// Answers with the first legal move. Returns `false` if there is none.
    fn respond(&mut self, engine: Player) -> anyhow::Result<bool> {
        let moves = self.board.legal_moves(engine, self.rules);
        let Some(first) = moves.first() else {
            writeln!(self.output, "No legal moves left for {}.", side_name(engine))?;
            return Ok(false);
        };
        writeln!(self.output, "Possible moves:")?;
        for next_move in &moves {
            write!(self.output, "{next_move}, ")?;
        }
        writeln!(self.output)?;
        writeln!(self.output, "Making move: {first}")?;
        log::debug!("Engine move: {first}");
        self.board.make_move(first);
        self.print_board()?;
        Ok(true)
    }

    fn print_board(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{}", self.board)?;
        Ok(())
    }

    fn next_token(&mut self) -> anyhow::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read from input")?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(ToString::to_string));
        }
    }
}
