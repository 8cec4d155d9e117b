//! Turn rotation, guard ordering, and occupancy properties.

use grid_games::{Cell, Feedback, GridGameModel, Symbol, Variant};

fn classic() -> GridGameModel {
    GridGameModel::new(
        3,
        vec![Symbol::token("X"), Symbol::token("O")],
        2,
        Variant::Tictactoe,
    )
    .unwrap()
}

#[test]
fn test_turn_rotates_once_per_valid_move() {
    let mut model = GridGameModel::new(
        3,
        vec![Symbol::token("A"), Symbol::token("B"), Symbol::token("C")],
        3,
        Variant::Tictactoe,
    )
    .unwrap();

    let moves = [
        ("A", Cell::new(1, 1), 2),
        ("B", Cell::new(2, 1), 3),
        ("C", Cell::new(3, 1), 1),
        ("A", Cell::new(1, 2), 2),
    ];
    for (symbol, cell, expected_next) in moves {
        assert_eq!(model.place_symbol(Symbol::token(symbol), cell), Feedback::Valid);
        assert_eq!(model.current_player(), expected_next);
    }
}

#[test]
fn test_turn_does_not_advance_on_rejected_moves() {
    let mut model = classic();
    assert_eq!(
        model.place_symbol(Symbol::token("O"), Cell::new(1, 1)),
        Feedback::InvalidSymbol
    );
    assert_eq!(model.current_player(), 1);

    assert_eq!(
        model.place_symbol(Symbol::token("X"), Cell::new(0, 1)),
        Feedback::OutOfBounds
    );
    assert_eq!(model.current_player(), 1);

    assert_eq!(
        model.place_symbol(Symbol::token("X"), Cell::new(1, 1)),
        Feedback::Valid
    );
    assert_eq!(
        model.place_symbol(Symbol::token("O"), Cell::new(1, 1)),
        Feedback::Occupied
    );
    assert_eq!(model.current_player(), 2);
}

#[test]
fn test_symbol_legality_checked_before_bounds() {
    // An out-of-range cell with an illegal symbol reports the symbol,
    // not the bounds; guard order is externally observable.
    let mut model = classic();
    assert_eq!(
        model.place_symbol(Symbol::token("O"), Cell::new(0, 99)),
        Feedback::InvalidSymbol
    );
}

#[test]
fn test_out_of_bounds_never_mutates() {
    let mut model = classic();
    for cell in [Cell::new(0, 1), Cell::new(4, 3), Cell::new(2, 4)] {
        assert_eq!(
            model.place_symbol(Symbol::token("X"), cell),
            Feedback::OutOfBounds
        );
    }
    assert!(model.occupied_cells().is_empty());
}

#[test]
fn test_occupancy_grows_monotonically() {
    let mut model = classic();
    let mut last = 0;
    let attempts = [
        ("X", Cell::new(1, 1)),
        ("O", Cell::new(1, 1)), // occupied, rejected
        ("O", Cell::new(2, 2)),
        ("X", Cell::new(0, 0)), // out of bounds, rejected
        ("X", Cell::new(3, 3)),
    ];
    for (symbol, cell) in attempts {
        model.place_symbol(Symbol::token(symbol), cell);
        let size = model.occupied_cells().len();
        assert!(size >= last);
        last = size;
    }
    assert_eq!(last, 3);
}

#[test]
fn test_finished_game_only_reports_game_over() {
    let mut model = classic();
    for (symbol, cell) in [
        ("X", Cell::new(1, 1)),
        ("O", Cell::new(2, 1)),
        ("X", Cell::new(1, 2)),
        ("O", Cell::new(2, 2)),
        ("X", Cell::new(1, 3)),
    ] {
        assert_eq!(model.place_symbol(Symbol::token(symbol), cell), Feedback::Valid);
    }
    assert!(model.is_game_over());
    assert_eq!(model.winner(), Some(1));

    let occupied = model.occupied_cells().len();
    // Every argument shape gets the same answer, with no mutation.
    assert_eq!(
        model.place_symbol(Symbol::token("O"), Cell::new(3, 3)),
        Feedback::GameOver
    );
    assert_eq!(
        model.place_symbol(Symbol::token("?"), Cell::new(0, 0)),
        Feedback::GameOver
    );
    assert_eq!(model.occupied_cells().len(), occupied);
}

#[test]
fn test_full_grid_without_winner_is_a_draw() {
    let mut model = classic();
    // X O X / X O O / O X X leaves no line for either symbol.
    for (symbol, cell) in [
        ("X", Cell::new(1, 1)),
        ("O", Cell::new(1, 2)),
        ("X", Cell::new(1, 3)),
        ("O", Cell::new(2, 2)),
        ("X", Cell::new(2, 1)),
        ("O", Cell::new(2, 3)),
        ("X", Cell::new(3, 2)),
        ("O", Cell::new(3, 1)),
        ("X", Cell::new(3, 3)),
    ] {
        assert_eq!(model.place_symbol(Symbol::token(symbol), cell), Feedback::Valid);
    }
    assert!(model.is_game_over());
    assert_eq!(model.winner(), None);
    assert_eq!(
        model.place_symbol(Symbol::token("X"), Cell::new(1, 1)),
        Feedback::GameOver
    );
}

#[test]
fn test_next_player_accessor_wraps() {
    let mut model = classic();
    assert_eq!(model.next_player(), 2);
    assert_eq!(
        model.place_symbol(Symbol::token("X"), Cell::new(1, 1)),
        Feedback::Valid
    );
    assert_eq!(model.current_player(), 2);
    assert_eq!(model.next_player(), 1);
}

#[test]
fn test_symbol_choices_per_variant() {
    let classic = classic();
    assert_eq!(classic.get_symbol_choices(1), vec![Symbol::token("X")]);
    assert_eq!(classic.get_symbol_choices(2), vec![Symbol::token("O")]);

    let wild = GridGameModel::new(
        3,
        vec![Symbol::token("X"), Symbol::token("O")],
        2,
        Variant::Wild,
    )
    .unwrap();
    assert_eq!(
        wild.get_symbol_choices(1),
        vec![Symbol::token("X"), Symbol::token("O")]
    );

    let notakto = GridGameModel::new(3, vec![Symbol::token("#")], 2, Variant::Notakto).unwrap();
    assert_eq!(notakto.get_symbol_choices(2), vec![Symbol::token("#")]);

    let pick15 = GridGameModel::new(3, vec![], 2, Variant::Pick15).unwrap();
    assert_eq!(pick15.get_symbol_choices(1).len(), 9);
}
