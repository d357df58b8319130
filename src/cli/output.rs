//! Output formatting and progress spinners for CLI

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{export::DatasetSummary, solver::SolveStats};

/// Create a spinner for long-running tasks
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

pub fn print_solve_stats(stats: &SolveStats) {
    print_subsection("Search");
    let count = |n: u64| format_number(usize::try_from(n).unwrap_or(usize::MAX));
    print_kv("Nodes visited", &count(stats.nodes_visited));
    print_kv("Terminal nodes", &count(stats.terminal_nodes));
    print_kv("Transpositions", &count(stats.transpositions));
    print_kv("Positions stored", &count(stats.positions_stored));
}

pub fn print_dataset_summary(summary: &DatasetSummary) {
    print_subsection("Dataset");
    print_kv("Rows", &format_number(summary.rows));
    print_kv("X wins (+1)", &format_number(summary.x_wins));
    print_kv("Draws (0)", &format_number(summary.draws));
    print_kv("O wins (-1)", &format_number(summary.o_wins));
    print_kv("X to move", &format_number(summary.x_to_move));
    print_kv("O to move", &format_number(summary.o_to_move));
    print_kv("Optimal labels", &format_number(summary.labelled_moves));

    print_subsection("Positions by depth");
    for (depth, &rows) in summary.by_depth.iter().enumerate() {
        if rows > 0 {
            print_kv(&format!("Depth {depth}"), &format_number(rows));
        }
    }
}
