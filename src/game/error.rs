//! Constructor-time validation failures.

use crate::game::symbol::Symbol;
use derive_more::{Display, Error};

/// Rejected game configuration.
///
/// Raised once, at construction; fatal to session start and surfaced
/// verbatim to the caller. Move-time outcomes are never errors — see
/// [`Feedback`](crate::Feedback).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Fewer than two players were requested.
    #[display("must have at least two players (found {count})")]
    NotEnoughPlayers {
        /// The rejected player count.
        count: u32,
    },
    /// The grid has no cells.
    #[display("grid size must be at least 1 (found {size})")]
    GridTooSmall {
        /// The rejected grid size.
        size: i32,
    },
    /// The same symbol was supplied more than once.
    #[display("player symbols must be unique (found duplicate {symbol})")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: Symbol,
    },
    /// Classic and wild games need one symbol per player.
    #[display("expected exactly {expected} symbols, one per player (found {found})")]
    SymbolCountMismatch {
        /// One symbol per player.
        expected: u32,
        /// How many were supplied.
        found: usize,
    },
    /// Notakto is played with a single shared symbol.
    #[display("notakto uses exactly one shared symbol (found {found})")]
    SharedSymbolRequired {
        /// How many were supplied.
        found: usize,
    },
    /// Pick15 generates its own numeric symbols.
    #[display("pick15 generates its own symbols; none may be supplied (found {found})")]
    SymbolsNotAllowed {
        /// How many were supplied.
        found: usize,
    },
}
