//! Grid storage and coordinate validity.

use crate::game::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A one-based (row, column) coordinate on the grid.
///
/// Coordinates are signed so that diagonal formulas may legally
/// produce out-of-range cells; such cells are simply never occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Row coordinate, 1-based.
    pub row: i32,
    /// Column coordinate, 1-based.
    pub col: i32,
}

impl Cell {
    /// Creates a cell at the given 1-based coordinates.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Sparse N×N grid of placed symbols.
///
/// Unoccupied cells are absent from the map; there is no sentinel
/// "empty" symbol. Every key lies within [1, N]×[1, N].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    grid_size: i32,
    occupied: HashMap<Cell, Symbol>,
}

impl Field {
    /// Creates an empty field of the given size.
    pub fn new(grid_size: i32) -> Self {
        Self {
            grid_size,
            occupied: HashMap::new(),
        }
    }

    /// Returns the grid size N.
    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    /// The ordered sequence of valid coordinates, 1..=N.
    ///
    /// Row, column, and diagonal groups are built from this range.
    pub fn valid_coords(&self) -> std::ops::RangeInclusive<i32> {
        1..=self.grid_size
    }

    /// True iff both coordinates lie in [1, N].
    pub fn is_within_bounds(&self, cell: Cell) -> bool {
        self.valid_coords().contains(&cell.row) && self.valid_coords().contains(&cell.col)
    }

    /// Returns the symbol at the cell, if occupied.
    pub fn get_symbol_at(&self, cell: Cell) -> Option<&Symbol> {
        self.occupied.get(&cell)
    }

    /// Writes a symbol into a cell.
    ///
    /// Unconditional: the model validates bounds and occupancy before
    /// calling this.
    pub fn place_symbol(&mut self, symbol: Symbol, cell: Cell) {
        self.occupied.insert(cell, symbol);
    }

    /// True iff at least one in-bounds cell is unoccupied.
    pub fn has_unoccupied_cell(&self) -> bool {
        (self.occupied.len() as i64) < (self.grid_size as i64) * (self.grid_size as i64)
    }

    /// True iff every cell in the group is occupied and holds exactly `basis`.
    pub fn are_all_equal_to_basis(&self, basis: &Symbol, group: &[Cell]) -> bool {
        group
            .iter()
            .all(|cell| self.get_symbol_at(*cell) == Some(basis))
    }

    /// The full sparse mapping of occupied cells.
    pub fn occupied_cells(&self) -> &HashMap<Cell, Symbol> {
        &self.occupied
    }
}
