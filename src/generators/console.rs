//! Human play through a text console.

use std::fmt::Display;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::str::FromStr;

use crate::core::GameState;

use super::{PlayError, PlayGenerator};

/// Renders the state, lists the legal plays and reads a play from input.
///
/// Unparsable or illegal input is reported and asked for again; only a
/// closed input stream ends the prompt without a play.
pub struct ConsolePlayGenerator<R, W> {
    input: R,
    output: W,
}

impl ConsolePlayGenerator<StdinLock<'static>, Stdout> {
    /// Prompt on standard output, read from standard input.
    #[must_use]
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePlayGenerator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<S, R, W> PlayGenerator<S> for ConsolePlayGenerator<R, W>
where
    S: GameState + Display,
    S::Move: FromStr + Display,
    R: BufRead,
    W: Write,
{
    fn find_play(&mut self, state: &S) -> Result<S::Move, PlayError> {
        let plays = state.legal_plays();
        if plays.is_empty() {
            return Err(PlayError::NoLegalPlays);
        }
        let listed: Vec<String> = plays.iter().map(ToString::to_string).collect();

        write!(self.output, "{state}")?;
        loop {
            writeln!(self.output, "Legal plays: {}", listed.join(", "))?;
            write!(self.output, "{} play: ", state.current_player())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayError::InputClosed);
            }
            let text = line.trim();
            if text.is_empty() {
                writeln!(self.output, "Invalid play. Try again.")?;
                continue;
            }

            match text.parse::<S::Move>() {
                Ok(play) if plays.contains(&play) => return Ok(play),
                Ok(play) => writeln!(self.output, "Chosen play '{play}' is not valid.")?,
                Err(_) => writeln!(self.output, "Invalid play. Input must be a number.")?,
            }
        }
    }
}
