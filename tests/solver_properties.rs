//! Game-theoretic properties of the solved table

mod common;

use tictacnet::{
    SolverConfig, TieBreak, TranspositionPolicy,
    solver::{Solver, solve_game},
    tictactoe::{CELL_COUNT, CellSet, LineAnalyzer, Player, Position},
};

#[test]
fn empty_board_is_a_draw() {
    let mut solver = Solver::new(SolverConfig::default());
    let root = solver.solve(&Position::new()).unwrap();
    assert_eq!(root.value, 0);
    assert_eq!(root.best_moves, CellSet::FULL, "every opening draws");
}

#[test]
fn two_in_a_row_with_open_third_cell_wins() {
    // X on cells 0 and 1, O on cell 3, X to move.
    let position = Position::from_bitboards(0b11, 0b1000, Player::X).unwrap();

    let mut solver = Solver::new(SolverConfig::default());
    let evaluation = solver.solve(&position).unwrap();
    assert_eq!(evaluation.value, 1);
    assert_eq!(evaluation.best_moves, CellSet::EMPTY.with(2));

    let mut solver = Solver::new(SolverConfig::new().with_tie_break(TieBreak::AllOptimal));
    let evaluation = solver.solve(&position).unwrap();
    assert_eq!(evaluation.value, 1);
    assert!(evaluation.best_moves.contains(2));
    assert_eq!(evaluation.best_moves, [2, 4, 5, 6, 7, 8].into_iter().collect::<CellSet>());
}

#[test]
fn immediate_wins_are_the_only_best_moves() {
    let table = common::default_table();
    let mut checked = 0;

    for position in common::reachable_positions() {
        if position.is_terminal() {
            continue;
        }
        let wins = position.immediate_wins();
        if wins.is_empty() {
            continue;
        }
        let entry = table.lookup(&position).unwrap();
        assert_eq!(
            entry.best_moves,
            wins,
            "position {} should only play its winning cells",
            position.key()
        );
        assert_eq!(entry.mover_value(position.to_move()), 1);
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn reachable_positions_never_have_two_winners() {
    for position in common::reachable_positions() {
        assert!(
            !(LineAnalyzer::has_won(position.x()) && LineAnalyzer::has_won(position.o())),
            "both players win in {}",
            position.key()
        );
    }
}

#[test]
fn legal_moves_fill_the_remaining_cells() {
    for position in common::reachable_positions() {
        assert_eq!(
            position.legal_moves().len() + position.x().len() + position.o().len(),
            CELL_COUNT,
            "cell accounting broken for {}",
            position.key()
        );
    }
}

#[test]
fn moves_increase_depth_by_one() {
    for position in common::reachable_positions() {
        if position.is_terminal() {
            continue;
        }
        for cell in position.legal_moves() {
            let child = position.apply_move(cell).unwrap();
            assert_eq!(child.depth(), position.depth() + 1);
            assert_eq!(child.to_move(), position.to_move().opponent());
        }
    }
}

#[test]
fn every_non_terminal_reachable_position_is_solved() {
    let table = common::default_table();
    let reachable = common::reachable_positions();
    let non_terminal: Vec<_> = reachable.iter().filter(|p| !p.is_terminal()).collect();

    assert_eq!(reachable.len(), 5478);
    assert_eq!(non_terminal.len(), table.len());
    for position in non_terminal {
        let entry = table.lookup(position).unwrap();
        assert!(!entry.best_moves.is_empty());
        assert!(position.empty_cells().is_superset(entry.best_moves));
    }
    for position in reachable.iter().filter(|p| p.is_terminal()) {
        assert!(table.lookup(position).is_none());
    }
}

#[test]
fn tie_break_only_narrows_the_best_set() {
    let preferred = common::default_table();
    let all = common::all_optimal_table();
    assert_eq!(preferred.len(), all.len());

    for (key, entry) in preferred {
        let full = all.get(key).unwrap();
        assert_eq!(entry.value, full.value, "values differ at {key}");
        assert!(full.best_moves.is_superset(entry.best_moves));
    }
}

#[test]
fn solving_twice_gives_identical_tables() {
    let first = solve_game(SolverConfig::default()).unwrap();
    let second = solve_game(SolverConfig::default()).unwrap();
    assert_eq!(first, second);

    let reused =
        solve_game(SolverConfig::new().with_transpositions(TranspositionPolicy::Reuse)).unwrap();
    assert_eq!(first, reused);
}

#[test]
fn resolving_a_solved_position_matches_the_table() {
    let mut solver = Solver::new(SolverConfig::default());
    solver.solve(&Position::new()).unwrap();

    let position = Position::from_string("X...O...._X").unwrap();
    let stored = *solver.table().lookup(&position).unwrap();
    let evaluation = solver.solve(&position).unwrap();
    assert_eq!(evaluation.value, stored.mover_value(Player::X));
    assert_eq!(evaluation.best_moves, stored.best_moves);
}
