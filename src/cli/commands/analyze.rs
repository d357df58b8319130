//! Analyze command - value and optimal moves of individual positions

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{config::SolverArgs, output},
    solver::{SolvedEntry, SolvedTable, Solver},
    tictactoe::Position,
};

#[derive(Parser, Debug)]
#[command(about = "Show the value and optimal moves of positions")]
pub struct AnalyzeArgs {
    /// Positions to analyze, e.g. "XX.O....._X" (default: empty board and the
    /// centre and corner openings)
    pub positions: Vec<String>,

    /// Look positions up in a saved table instead of solving them
    #[arg(long, conflicts_with_all = ["config", "tie_break", "transpositions"])]
    pub table: Option<PathBuf>,

    #[command(flatten)]
    pub solver: SolverArgs,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let positions: Vec<(String, Position)> = if args.positions.is_empty() {
        vec![
            ("Empty board".to_string(), Position::new()),
            ("Centre taken by X".to_string(), Position::from_string("....X...._O")?),
            ("Corner taken by X".to_string(), Position::from_string("X........_O")?),
        ]
    } else {
        args.positions
            .iter()
            .map(|text| {
                Position::from_string(text)
                    .map(|position| (text.clone(), position))
                    .with_context(|| format!("parsing position '{text}'"))
            })
            .collect::<Result<_>>()?
    };

    let saved = args.table.as_deref().map(super::load_table).transpose()?;
    let mut solver = Solver::new(args.solver.resolve()?);

    output::print_section("Position analysis");
    for (label, position) in &positions {
        let entry = match &saved {
            Some(table) => lookup(table, position),
            None => {
                let evaluation = solver
                    .solve(position)
                    .with_context(|| format!("solving '{label}'"))?;
                (!position.is_terminal()).then(|| {
                    SolvedEntry::from_mover(
                        position.to_move(),
                        evaluation.value,
                        evaluation.best_moves,
                    )
                })
            }
        };
        print_position(label, position, entry);
    }

    Ok(())
}

fn lookup(table: &SolvedTable, position: &Position) -> Option<SolvedEntry> {
    table.lookup(position).copied()
}

fn print_position(label: &str, position: &Position, entry: Option<SolvedEntry>) {
    output::print_subsection(label);
    println!("{position}\n");
    output::print_kv("Key", &position.key().to_string());
    output::print_kv("To move", &position.to_move().to_string());

    if position.is_terminal() {
        let outcome = match position.winner() {
            Some(player) => format!("{player} has won"),
            None => "draw".to_string(),
        };
        output::print_kv("Terminal", &outcome);
        return;
    }

    let Some(entry) = entry else {
        output::print_kv("Value", "not in table");
        return;
    };

    output::print_kv("Value (X)", &format!("{:+}", entry.value));
    output::print_kv(
        "Value (mover)",
        &format!("{:+}", entry.mover_value(position.to_move())),
    );
    let moves: Vec<String> = entry
        .best_moves
        .cells()
        .map(|cell| format!("{cell} (row {}, col {})", cell / 3, cell % 3))
        .collect();
    output::print_kv("Optimal moves", &moves.join(", "));
}
