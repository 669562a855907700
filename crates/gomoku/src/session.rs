//! Hot-seat match loop.
//!
//! Drives the engine through the caller sequence for every move:
//! place the mark, check the winner, check the draw, then pass the turn.
//! Input and output are generic so matches can be scripted.

use crate::config::Preferences;
use crate::render::{render_board, symbol};
use crate::stopwatch::Stopwatch;
use anyhow::{Context, Result};
use gomoku_engine::{EngineError, GameEngine, GameStatus, Side, Strike};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A side completed a run.
    Won {
        /// Winning side.
        side: Side,
        /// Endpoints of the winning run.
        strike: Strike,
    },
    /// The board filled up with no run.
    Draw,
    /// The players asked for a fresh match before this one ended.
    Restarted,
    /// The players quit or input ran out.
    Abandoned,
}

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at `(x, y)`.
    Move(usize, usize),
    /// Start over with a fresh board.
    Restart,
    /// End the match.
    Quit,
    /// Unparseable line, with the reason.
    Invalid(String),
}

impl Input {
    /// Parses `"x y"`, `"x,y"`, `restart` or `quit`.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Input::Quit,
            "r" | "restart" => return Input::Restart,
            _ => {}
        }

        let parts: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .collect();

        match parts.as_slice() {
            [x, y] => match (x.parse::<usize>(), y.parse::<usize>()) {
                (Ok(x), Ok(y)) => Input::Move(x, y),
                _ => Input::Invalid(format!("Not a coordinate pair: {}", line)),
            },
            _ => Input::Invalid("Enter a move as two numbers: x y".to_string()),
        }
    }
}

/// Plays matches built from `prefs` until the players stop.
///
/// Every match gets a fresh engine and a cleared clock. `restart` starts
/// over at once; after a win or draw the players are asked for a rematch.
/// Quitting or running out of input ends the session.
#[instrument(skip_all, fields(size = prefs.size(), win_length = prefs.win_length()))]
pub fn play_matches<R: BufRead, W: Write>(
    prefs: &Preferences,
    mut input: R,
    output: &mut W,
) -> Result<Vec<MatchOutcome>> {
    let mut stopwatch = Stopwatch::new();
    let mut outcomes = Vec::new();

    loop {
        let (p1, p2) = prefs.players();
        let mut game = GameEngine::new(p1, p2, *prefs.size(), *prefs.win_length())
            .context("Invalid match settings")?;
        stopwatch.reset();

        let outcome = play_match(&mut game, &mut stopwatch, &mut input, output)?;
        outcomes.push(outcome);

        let again = match outcome {
            MatchOutcome::Restarted => true,
            MatchOutcome::Abandoned => false,
            MatchOutcome::Won { .. } | MatchOutcome::Draw => ask_rematch(&mut input, output)?,
        };
        if !again {
            break;
        }
        info!(matches = outcomes.len(), "Restarting match");
    }

    Ok(outcomes)
}

/// Asks whether to play again; end of input means no.
fn ask_rematch<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    loop {
        writeln!(output, "Play again? [y/n]")?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read player input")? == 0 {
            return Ok(false);
        }
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Answer y or n")?,
        }
    }
}

/// Plays one match to completion, reading moves from `input`.
///
/// `stopwatch` runs while the match is played. Returns
/// [`MatchOutcome::Abandoned`] on `quit` or end of input and
/// [`MatchOutcome::Restarted`] on `restart`.
#[instrument(skip_all, fields(size = game.size(), win_length = game.win_length()))]
pub fn play_match<R: BufRead, W: Write>(
    game: &mut GameEngine,
    stopwatch: &mut Stopwatch,
    mut input: R,
    output: &mut W,
) -> Result<MatchOutcome> {
    stopwatch.start();
    info!("Match started");

    writeln!(output, "{}", render_board(game, None))?;

    let outcome = loop {
        let side = game.current_side();
        writeln!(
            output,
            "{}'s turn ({}), enter x y:",
            game.current_player(),
            symbol(side.mark())
        )?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read player input")?;
        if read == 0 {
            debug!("Input exhausted");
            break MatchOutcome::Abandoned;
        }

        let (x, y) = match Input::parse(&line) {
            Input::Move(x, y) => (x, y),
            Input::Restart => break MatchOutcome::Restarted,
            Input::Quit => break MatchOutcome::Abandoned,
            Input::Invalid(reason) => {
                writeln!(output, "{}", reason)?;
                continue;
            }
        };

        match game.place_mark(x, y) {
            Ok(true) => {}
            Ok(false) => {
                writeln!(output, "Cell ({}, {}) is already taken", x, y)?;
                continue;
            }
            Err(err @ EngineError::OutOfBounds { .. }) => {
                warn!(%err, "Rejected move");
                writeln!(output, "{}", err)?;
                continue;
            }
            Err(err) => return Err(err).context("Engine rejected placement"),
        }

        let strike = game.check_winner(x, y);
        game.check_draw();
        writeln!(output, "{}", render_board(game, strike.as_ref()))?;
        game.advance_turn();

        match game.status() {
            GameStatus::InProgress => {}
            GameStatus::Draw => break MatchOutcome::Draw,
            status => match (status.winner(), strike) {
                (Some(side), Some(strike)) => break MatchOutcome::Won { side, strike },
                _ => {
                    warn!(?status, "Terminal status without strike");
                    break MatchOutcome::Abandoned;
                }
            },
        }
    };

    stopwatch.stop();
    match outcome {
        MatchOutcome::Won { side, .. } => writeln!(output, "{} wins!", game.player(side))?,
        MatchOutcome::Draw => writeln!(output, "Draw!")?,
        MatchOutcome::Restarted => writeln!(output, "Match restarted.")?,
        MatchOutcome::Abandoned => writeln!(output, "Match abandoned.")?,
    }
    writeln!(output, "Time: {}", stopwatch)?;

    info!(?outcome, elapsed = %stopwatch, "Match finished");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(Input::parse("3 4\n"), Input::Move(3, 4));
        assert_eq!(Input::parse(" 10,2 "), Input::Move(10, 2));
        assert_eq!(Input::parse("1, 2"), Input::Move(1, 2));
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(Input::parse("quit"), Input::Quit);
        assert_eq!(Input::parse("Q\n"), Input::Quit);
    }

    #[test]
    fn test_parse_restart() {
        assert_eq!(Input::parse("restart\n"), Input::Restart);
        assert_eq!(Input::parse(" R "), Input::Restart);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(Input::parse("a b"), Input::Invalid(_)));
        assert!(matches!(Input::parse("1"), Input::Invalid(_)));
        assert!(matches!(Input::parse("1 2 3"), Input::Invalid(_)));
        assert!(matches!(Input::parse("-1 2"), Input::Invalid(_)));
    }
}
