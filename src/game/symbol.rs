//! Placeable symbols and the player↔symbol bookkeeping.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Player identifier, 1-based; turns rotate modulo the player count.
pub type PlayerId = u32;

/// A token placed into a grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Opaque marker for tictactoe, notakto, and wild (typically one character).
    Token(String),
    /// Numeric symbol for pick15, drawn from 1..N².
    Number(i32),
}

impl Symbol {
    /// Convenience constructor for an opaque marker.
    pub fn token(s: impl Into<String>) -> Self {
        Symbol::Token(s.into())
    }

    /// The numeric value, for sum-based win conditions.
    pub fn as_number(&self) -> Option<i32> {
        match self {
            Symbol::Number(n) => Some(*n),
            Symbol::Token(_) => None,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Token(s) => write!(f, "{s}"),
            Symbol::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Both directions of the player↔symbol bijection, stored explicitly.
///
/// The forward map is ordered by player id so symbol enumeration is
/// deterministic. The inverse is built by iterating the forward map;
/// later entries overwrite earlier ones, so notakto's shared symbol
/// resolves to the highest player id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    player_to_symbol: BTreeMap<PlayerId, Symbol>,
    symbol_to_player: HashMap<Symbol, PlayerId>,
}

impl SymbolTable {
    /// Builds the table from an ordered symbol list, assigning player
    /// ids 1.. in list order.
    pub fn from_ordered(symbols: &[Symbol]) -> Self {
        let player_to_symbol: BTreeMap<PlayerId, Symbol> = symbols
            .iter()
            .enumerate()
            .map(|(k, symbol)| (k as PlayerId + 1, symbol.clone()))
            .collect();
        let symbol_to_player = invert(&player_to_symbol);
        Self {
            player_to_symbol,
            symbol_to_player,
        }
    }

    /// Builds the shared-symbol table for notakto: every player places
    /// the same symbol.
    pub fn shared(symbol: Symbol, player_count: u32) -> Self {
        let player_to_symbol: BTreeMap<PlayerId, Symbol> =
            (1..=player_count).map(|k| (k, symbol.clone())).collect();
        let symbol_to_player = invert(&player_to_symbol);
        Self {
            player_to_symbol,
            symbol_to_player,
        }
    }

    /// An empty table; pick15 records assignments as symbols are placed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The symbol bound to a player, if any.
    pub fn symbol_of(&self, player: PlayerId) -> Option<&Symbol> {
        self.player_to_symbol.get(&player)
    }

    /// The player a symbol resolves to, if any.
    pub fn owner_of(&self, symbol: &Symbol) -> Option<PlayerId> {
        self.symbol_to_player.get(symbol).copied()
    }

    /// Every bound symbol, in player-id order.
    pub fn all_symbols(&self) -> Vec<Symbol> {
        self.player_to_symbol.values().cloned().collect()
    }

    /// Records which player placed a symbol; last write wins.
    pub fn record_placement(&mut self, symbol: Symbol, player: PlayerId) {
        self.symbol_to_player.insert(symbol, player);
    }
}

fn invert(forward: &BTreeMap<PlayerId, Symbol>) -> HashMap<Symbol, PlayerId> {
    forward
        .iter()
        .map(|(player, symbol)| (symbol.clone(), *player))
        .collect()
}
