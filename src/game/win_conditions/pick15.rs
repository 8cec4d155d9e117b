//! Pick15: numeric symbols racing to the magic-square sum.

use super::{WinConditions, col_groups, row_groups};
use crate::game::field::{Cell, Field};
use crate::game::symbol::{PlayerId, Symbol, SymbolTable};
use tracing::instrument;

/// Pick15 rules: players place the integers 1..N²; a full line wins
/// when its symbols sum to the magic constant N·(N²+1)/2.
///
/// The winner is the player recorded for the symbol at the line's last
/// cell in iteration order, not the owner of a per-player symbol; the
/// model records who placed each number as the game runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pick15;

impl Pick15 {
    /// Magic constant for an N×N square: N·(N²+1)/2.
    fn target_sum(grid_size: i32) -> i32 {
        grid_size * (grid_size * grid_size + 1) / 2
    }
}

impl WinConditions for Pick15 {
    #[instrument(skip_all)]
    fn winner(&self, field: &Field, symbols: &SymbolTable) -> Option<PlayerId> {
        let n = field.grid_size();
        let target = Self::target_sum(n);
        // The anti-diagonal column is N - k - 1, one less than the
        // classic formula. This is contractual: for N=3 the group walks
        // off the grid and can never complete. Do not unify with the
        // classic geometry.
        let diagonals: Vec<Vec<Cell>> = vec![
            field.valid_coords().map(|k| Cell::new(k, k)).collect(),
            field
                .valid_coords()
                .map(|k| Cell::new(k, n - k - 1))
                .collect(),
        ];
        for groups in [row_groups(field), col_groups(field), diagonals] {
            for group in groups {
                let placed: Vec<&Symbol> = group
                    .iter()
                    .filter_map(|cell| field.get_symbol_at(*cell))
                    .collect();
                if placed.len() != group.len() {
                    continue;
                }
                let sum: i32 = placed.iter().filter_map(|s| s.as_number()).sum();
                if sum == target {
                    let last = *placed.last().unwrap_or_else(|| {
                        panic!("winning cell group {group:?} is empty")
                    });
                    let winner = symbols.owner_of(last).unwrap_or_else(|| {
                        panic!(
                            "winning symbol {last} in cell group {group:?} has no associated player"
                        )
                    });
                    return Some(winner);
                }
            }
        }
        None
    }

    /// Every integer 1..N² is a candidate; availability is enforced by
    /// cell occupancy, not by this method.
    fn valid_symbols(
        &self,
        _player: PlayerId,
        field: &Field,
        _symbols: &SymbolTable,
    ) -> Vec<Symbol> {
        let n = field.grid_size();
        (1..=n * n).map(Symbol::Number).collect()
    }

    fn assigns_symbols_on_placement(&self) -> bool {
        true
    }
}
