//! Per-variant win detection and symbol eligibility.

mod notakto;
mod pick15;
mod tictactoe;
mod wild;

pub use notakto::Notakto;
pub use pick15::Pick15;
pub use tictactoe::TicTacToe;
pub use wild::Wild;

use crate::game::field::{Cell, Field};
use crate::game::symbol::{PlayerId, Symbol, SymbolTable};

/// Win detection and symbol eligibility for one variant.
///
/// Strategies are stateless; the model selects one at construction
/// and never branches on the variant name in per-turn logic.
pub trait WinConditions: std::fmt::Debug {
    /// Scans the field for a winning line, returning the owning player.
    fn winner(&self, field: &Field, symbols: &SymbolTable) -> Option<PlayerId>;

    /// The symbols the given player may legally place.
    ///
    /// Default: the single symbol bound to the player.
    fn valid_symbols(
        &self,
        player: PlayerId,
        field: &Field,
        symbols: &SymbolTable,
    ) -> Vec<Symbol> {
        let _ = field;
        symbols.symbol_of(player).cloned().into_iter().collect()
    }

    /// Whether the model records symbol→player assignments as symbols
    /// are placed, instead of fixing them at construction (pick15).
    fn assigns_symbols_on_placement(&self) -> bool {
        false
    }
}

/// All row groups, in row order, each left to right.
pub(crate) fn row_groups(field: &Field) -> Vec<Vec<Cell>> {
    field
        .valid_coords()
        .map(|row| field.valid_coords().map(|k| Cell::new(row, k)).collect())
        .collect()
}

/// All column groups, in column order, each top to bottom.
pub(crate) fn col_groups(field: &Field) -> Vec<Vec<Cell>> {
    field
        .valid_coords()
        .map(|col| field.valid_coords().map(|k| Cell::new(k, col)).collect())
        .collect()
}

/// The two diagonals, 1-based: main (k, k), then anti (k, N - k + 1).
pub(crate) fn diagonals(field: &Field) -> Vec<Vec<Cell>> {
    let n = field.grid_size();
    vec![
        field.valid_coords().map(|k| Cell::new(k, k)).collect(),
        field
            .valid_coords()
            .map(|k| Cell::new(k, n - k + 1))
            .collect(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_and_col_groups_cover_grid() {
        let field = Field::new(3);
        let rows = row_groups(&field);
        let cols = col_groups(&field);
        assert_eq!(rows.len(), 3);
        assert_eq!(cols.len(), 3);
        assert_eq!(rows[0], vec![Cell::new(1, 1), Cell::new(1, 2), Cell::new(1, 3)]);
        assert_eq!(cols[2], vec![Cell::new(1, 3), Cell::new(2, 3), Cell::new(3, 3)]);
    }

    #[test]
    fn test_diagonals_one_based() {
        let field = Field::new(3);
        let diags = diagonals(&field);
        assert_eq!(diags[0], vec![Cell::new(1, 1), Cell::new(2, 2), Cell::new(3, 3)]);
        assert_eq!(diags[1], vec![Cell::new(1, 3), Cell::new(2, 2), Cell::new(3, 1)]);
    }
}
