//! Notakto: one shared symbol for all players.

use super::WinConditions;
use super::tictactoe::line_winner;
use crate::game::field::Field;
use crate::game::symbol::{PlayerId, SymbolTable};
use tracing::instrument;

/// Notakto rules: every player places the same symbol.
///
/// Winner detection reuses the classic line check verbatim; no misère
/// inversion is applied here. A completed line resolves through the
/// shared symbol's table entry and is reported via the same `winner`
/// accessor, and the view narrates what that means for notakto.
#[derive(Debug, Clone, Copy, Default)]
pub struct Notakto;

impl WinConditions for Notakto {
    #[instrument(skip_all)]
    fn winner(&self, field: &Field, symbols: &SymbolTable) -> Option<PlayerId> {
        line_winner(field, symbols)
    }
}
