//! Wild tic-tac-toe: any player may place any player's symbol.

use super::WinConditions;
use super::tictactoe::line_winner;
use crate::game::field::Field;
use crate::game::symbol::{PlayerId, Symbol, SymbolTable};
use tracing::instrument;

/// Wild rules: the geometry of classic tic-tac-toe, but every symbol
/// is available to every player.
///
/// A completed line still resolves ownership through the symbol table,
/// so a player can hand the win to an opponent by completing a line of
/// the opponent's symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wild;

impl WinConditions for Wild {
    #[instrument(skip_all)]
    fn winner(&self, field: &Field, symbols: &SymbolTable) -> Option<PlayerId> {
        line_winner(field, symbols)
    }

    fn valid_symbols(
        &self,
        _player: PlayerId,
        _field: &Field,
        symbols: &SymbolTable,
    ) -> Vec<Symbol> {
        symbols.all_symbols()
    }
}
