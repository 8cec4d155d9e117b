//! The turn-taking state machine orchestrating field, symbols, and rules.

use crate::game::error::ConfigError;
use crate::game::field::{Cell, Field};
use crate::game::symbol::{PlayerId, Symbol, SymbolTable};
use crate::game::variant::Variant;
use crate::game::win_conditions::WinConditions;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

/// Outcome of a placement attempt.
///
/// Illegal moves are expected, user-facing events, so every attempt
/// returns a value from this closed set instead of an error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Feedback {
    /// The move was applied and the turn advanced.
    Valid,
    /// The game has already ended.
    GameOver,
    /// The symbol is not among the current player's choices.
    InvalidSymbol,
    /// The cell lies outside the grid.
    OutOfBounds,
    /// The cell already holds a symbol.
    Occupied,
}

/// One game session: grid, symbol bookkeeping, and turn order.
///
/// Constructed once from validated configuration and mutated in place
/// for the life of the game. [`GridGameModel::place_symbol`] is the
/// only mutating entry point.
#[derive(Debug)]
pub struct GridGameModel {
    field: Field,
    symbols: SymbolTable,
    player_count: u32,
    current_player: PlayerId,
    variant: Variant,
    win_conditions: Box<dyn WinConditions>,
}

impl GridGameModel {
    /// Builds a session from validated configuration.
    ///
    /// Classic and wild games take one symbol per player; notakto takes
    /// exactly one shared symbol; pick15 takes none and generates the
    /// integers 1..N² itself.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first rejected setting.
    #[instrument(skip(player_symbols))]
    pub fn new(
        grid_size: i32,
        player_symbols: Vec<Symbol>,
        player_count: u32,
        variant: Variant,
    ) -> Result<Self, ConfigError> {
        if player_count <= 1 {
            return Err(ConfigError::NotEnoughPlayers {
                count: player_count,
            });
        }
        if grid_size < 1 {
            return Err(ConfigError::GridTooSmall { size: grid_size });
        }
        if let Some(symbol) = first_duplicate(&player_symbols) {
            return Err(ConfigError::DuplicateSymbol {
                symbol: symbol.clone(),
            });
        }
        let symbols = match variant {
            Variant::Tictactoe | Variant::Wild => {
                if player_symbols.len() != player_count as usize {
                    return Err(ConfigError::SymbolCountMismatch {
                        expected: player_count,
                        found: player_symbols.len(),
                    });
                }
                SymbolTable::from_ordered(&player_symbols)
            }
            Variant::Notakto => match player_symbols.as_slice() {
                [symbol] => SymbolTable::shared(symbol.clone(), player_count),
                _ => {
                    return Err(ConfigError::SharedSymbolRequired {
                        found: player_symbols.len(),
                    });
                }
            },
            Variant::Pick15 => {
                if !player_symbols.is_empty() {
                    return Err(ConfigError::SymbolsNotAllowed {
                        found: player_symbols.len(),
                    });
                }
                SymbolTable::empty()
            }
        };
        Ok(Self {
            field: Field::new(grid_size),
            symbols,
            player_count,
            current_player: 1,
            variant,
            win_conditions: variant.win_conditions(),
        })
    }

    /// The full sparse mapping of occupied cells.
    pub fn occupied_cells(&self) -> &HashMap<Cell, Symbol> {
        self.field.occupied_cells()
    }

    /// Returns the grid size N.
    pub fn grid_size(&self) -> i32 {
        self.field.grid_size()
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The player who moves after the current one, wrapping to 1.
    pub fn next_player(&self) -> PlayerId {
        self.current_player % self.player_count + 1
    }

    /// How many players are in the session.
    pub fn player_count(&self) -> u32 {
        self.player_count
    }

    /// Which rule set this session plays.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// True when a winner exists or no unoccupied cell remains.
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some() || !self.field.has_unoccupied_cell()
    }

    /// Rescans the field through the active win conditions.
    ///
    /// Computed on demand; grids are small enough that caching would
    /// buy nothing.
    pub fn winner(&self) -> Option<PlayerId> {
        self.win_conditions.winner(&self.field, &self.symbols)
    }

    /// The symbols the given player may legally place this turn.
    pub fn get_symbol_choices(&self, player: PlayerId) -> Vec<Symbol> {
        self.win_conditions
            .valid_symbols(player, &self.field, &self.symbols)
    }

    /// Attempts a placement, returning the first failing guard.
    ///
    /// The guard order is contractual: symbol legality is checked
    /// before bounds, so an out-of-range cell with an illegal symbol
    /// reports `InvalidSymbol`, not `OutOfBounds`. Side effects happen
    /// only on the `Valid` path.
    #[instrument(skip(self))]
    pub fn place_symbol(&mut self, symbol: Symbol, cell: Cell) -> Feedback {
        if self.is_game_over() {
            return Feedback::GameOver;
        }
        if !self
            .get_symbol_choices(self.current_player)
            .contains(&symbol)
        {
            return Feedback::InvalidSymbol;
        }
        if !self.field.is_within_bounds(cell) {
            return Feedback::OutOfBounds;
        }
        if self.field.get_symbol_at(cell).is_some() {
            return Feedback::Occupied;
        }
        if self.win_conditions.assigns_symbols_on_placement() {
            self.symbols
                .record_placement(symbol.clone(), self.current_player);
        }
        debug!(player = self.current_player, %symbol, %cell, "placing symbol");
        self.field.place_symbol(symbol, cell);
        self.current_player = self.next_player();
        Feedback::Valid
    }
}

fn first_duplicate(symbols: &[Symbol]) -> Option<&Symbol> {
    let mut seen = HashSet::new();
    symbols.iter().find(|symbol| !seen.insert(*symbol))
}
