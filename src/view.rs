//! Plain-text rendering of a game session.

use crate::game::{Cell, GridGameModel, Variant};

/// Text renderer over the model's read-only surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct View;

impl View {
    /// Creates a view.
    pub fn new() -> Self {
        Self
    }

    /// Renders the grid with coordinate headers; unoccupied cells show `.`.
    ///
    /// Cells are padded to the widest symbol so pick15's multi-digit
    /// numbers stay aligned.
    pub fn render_grid(&self, model: &GridGameModel) -> String {
        let n = model.grid_size();
        let occupied = model.occupied_cells();
        let width = occupied
            .values()
            .map(|symbol| symbol.to_string().len())
            .chain([n.to_string().len()])
            .max()
            .unwrap_or(1);

        let mut out = String::new();
        out.push_str(&" ".repeat(width));
        for col in 1..=n {
            out.push_str(&format!(" {col:>width$}"));
        }
        out.push('\n');
        for row in 1..=n {
            out.push_str(&format!("{row:>width$}"));
            for col in 1..=n {
                match occupied.get(&Cell::new(row, col)) {
                    Some(symbol) => out.push_str(&format!(" {:>width$}", symbol.to_string())),
                    None => out.push_str(&format!(" {:>width$}", ".")),
                }
            }
            out.push('\n');
        }
        out
    }

    /// One-line status: whose turn it is, or the final result.
    ///
    /// Notakto reports the same line-completer the rules engine does,
    /// narrated as completing a line rather than as winning.
    pub fn render_status(&self, model: &GridGameModel) -> String {
        if let Some(winner) = model.winner() {
            match model.variant() {
                Variant::Notakto => format!("Player {winner} completed a line - game over."),
                _ => format!("Player {winner} wins!"),
            }
        } else if model.is_game_over() {
            "Draw - the grid is full.".to_string()
        } else {
            format!("Player {} to move.", model.current_player())
        }
    }
}
