//! Blocking read/validate/render loop over a single session.

use crate::game::{Cell, Feedback, GridGameModel, Symbol, Variant};
use crate::view::View;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Drives one game session over a line-oriented reader and writer.
///
/// Each turn performs one blocking read, one validated call to
/// [`GridGameModel::place_symbol`], and one render. Malformed or
/// rejected input re-prompts without touching the model.
#[derive(Debug)]
pub struct Controller<R, W> {
    model: GridGameModel,
    view: View,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    /// Creates a controller over the given model and streams.
    pub fn new(model: GridGameModel, view: View, input: R, output: W) -> Self {
        Self {
            model,
            view,
            input,
            output,
        }
    }

    /// Borrows the session model.
    pub fn model(&self) -> &GridGameModel {
        &self.model
    }

    /// Consumes the controller, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the session until the game ends or input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error only when the underlying streams fail.
    pub fn run(&mut self) -> Result<()> {
        while !self.model.is_game_over() {
            let player = self.model.current_player();
            writeln!(self.output, "{}", self.view.render_grid(&self.model))?;
            let choices = self
                .model
                .get_symbol_choices(player)
                .iter()
                .map(Symbol::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(self.output, "Player {player}, your symbols: {choices}")?;
            write!(self.output, "Enter move as `symbol row col`: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                info!("input exhausted, ending session");
                writeln!(self.output, "Session ended.")?;
                return Ok(());
            }
            let Some((symbol, cell)) = parse_move(&line, self.model.variant()) else {
                writeln!(self.output, "Could not read that move; use `symbol row col`.")?;
                continue;
            };
            let feedback = self.model.place_symbol(symbol, cell);
            debug!(?feedback, player, "move evaluated");
            match feedback {
                Feedback::Valid => {}
                Feedback::GameOver => writeln!(self.output, "The game is already over.")?,
                Feedback::InvalidSymbol => {
                    writeln!(self.output, "That symbol is not yours to place.")?
                }
                Feedback::OutOfBounds => writeln!(self.output, "That cell is off the grid.")?,
                Feedback::Occupied => writeln!(self.output, "That cell is taken.")?,
            }
        }

        writeln!(self.output, "{}", self.view.render_grid(&self.model))?;
        writeln!(self.output, "{}", self.view.render_status(&self.model))?;
        Ok(())
    }
}

/// Parses a `symbol row col` line; pick15 symbols must parse as numbers.
fn parse_move(line: &str, variant: Variant) -> Option<(Symbol, Cell)> {
    let mut parts = line.split_whitespace();
    let raw = parts.next()?;
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let symbol = match variant {
        Variant::Pick15 => Symbol::Number(raw.parse().ok()?),
        _ => Symbol::token(raw),
    };
    Some((symbol, Cell::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_token() {
        assert_eq!(
            parse_move("X 1 3\n", Variant::Tictactoe),
            Some((Symbol::token("X"), Cell::new(1, 3)))
        );
    }

    #[test]
    fn test_parse_move_pick15_number() {
        assert_eq!(
            parse_move("7 2 2\n", Variant::Pick15),
            Some((Symbol::Number(7), Cell::new(2, 2)))
        );
        assert_eq!(parse_move("seven 2 2\n", Variant::Pick15), None);
    }

    #[test]
    fn test_parse_move_rejects_malformed_lines() {
        assert_eq!(parse_move("", Variant::Tictactoe), None);
        assert_eq!(parse_move("X 1\n", Variant::Tictactoe), None);
        assert_eq!(parse_move("X one 1\n", Variant::Tictactoe), None);
        assert_eq!(parse_move("X 1 1 extra\n", Variant::Tictactoe), None);
    }
}
