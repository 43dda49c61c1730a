// ============================================================
// Layer 1 — Interactive Play Loop
// ============================================================
// The terminal stand-in for the game screen. One command per
// line:
//
//   draw <file>   classify a drawing (PNG/JPEG or .json strokes)
//                 and append the digit to the answer
//   clear         reset the answer to 0
//   submit        grade the answer, show the score
//   quit          leave the game
//
// Reads from any BufRead and writes to any Write so tests can
// drive it with in-memory buffers.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::application::play_use_case::PlayUseCase;
use crate::data::loader::open_producer;
use crate::domain::traits::DigitClassifier;

const HELP: &str = "commands: draw <file> | clear | submit | quit";

#[derive(Debug, PartialEq, Eq)]
pub enum PlayCommand {
    Draw(String),
    Clear,
    Submit,
    Quit,
    Unknown(String),
}

impl PlayCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match (word.to_ascii_lowercase().as_str(), rest.trim()) {
            ("draw", path) if !path.is_empty() => PlayCommand::Draw(path.to_string()),
            ("clear", "")                       => PlayCommand::Clear,
            ("submit", "")                      => PlayCommand::Submit,
            ("quit" | "exit", "")               => PlayCommand::Quit,
            _                                   => PlayCommand::Unknown(line.to_string()),
        }
    }
}

/// Run the game until the player quits, wins, or input ends.
pub fn run<C, R, W>(play: &mut PlayUseCase<C>, input: R, out: &mut W) -> Result<()>
where
    C: DigitClassifier,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{HELP}")?;
    show_state(play, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match PlayCommand::parse(&line) {
            PlayCommand::Draw(path) => {
                // A bad file is the player's mistake, not a reason to end the game
                match open_producer(&path).and_then(|p| play.input_drawing(p.as_ref())) {
                    Ok(digit)  => writeln!(out, "Read a {}", digit)?,
                    Err(e)     => {
                        tracing::warn!("Could not read drawing '{}': {:#}", path, e);
                        writeln!(out, "Could not read drawing: {e:#}")?;
                    }
                }
            }
            PlayCommand::Clear => play.clear(),
            PlayCommand::Submit => {
                let outcome = play.submit();
                writeln!(out, "{}", outcome.message())?;
                writeln!(out, "Score: {}", outcome.score)?;
                if outcome.won {
                    writeln!(out, "You win!")?;
                    return Ok(());
                }
            }
            PlayCommand::Quit => return Ok(()),
            PlayCommand::Unknown(cmd) => {
                writeln!(out, "Unknown command '{cmd}'; {HELP}")?;
                continue;
            }
        }
        show_state(play, out)?;
    }
    Ok(())
}

fn show_state<C: DigitClassifier, W: Write>(play: &PlayUseCase<C>, out: &mut W) -> Result<()> {
    writeln!(out, "{}{}", play.question(), play.answer())?;
    Ok(())
}
