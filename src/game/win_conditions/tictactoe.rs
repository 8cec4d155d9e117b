//! Classic line-matching rules.

use super::{WinConditions, col_groups, diagonals, row_groups};
use crate::game::field::Field;
use crate::game::symbol::{PlayerId, SymbolTable};
use tracing::instrument;

/// Classic tic-tac-toe: each player owns one symbol, first full line wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

impl WinConditions for TicTacToe {
    #[instrument(skip_all)]
    fn winner(&self, field: &Field, symbols: &SymbolTable) -> Option<PlayerId> {
        line_winner(field, symbols)
    }
}

/// Shared line check: a group wins when every cell matches the basis
/// symbol found at its first cell. Evaluation order is rows, then
/// columns, then diagonals; the first full line decides.
///
/// # Panics
///
/// Panics if a winning symbol has no associated player. That means the
/// symbol table and the field diverged, which the model's constructor
/// invariants make structurally impossible.
pub(super) fn line_winner(field: &Field, symbols: &SymbolTable) -> Option<PlayerId> {
    for groups in [row_groups(field), col_groups(field), diagonals(field)] {
        for group in groups {
            let Some(basis) = field.get_symbol_at(group[0]) else {
                continue;
            };
            if field.are_all_equal_to_basis(basis, &group) {
                let winner = symbols.owner_of(basis).unwrap_or_else(|| {
                    panic!("winning symbol {basis} in cell group {group:?} has no associated player")
                });
                return Some(winner);
            }
        }
    }
    None
}
