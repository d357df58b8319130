//! Game-tree solver
//!
//! [`Solver`] runs an exhaustive negamax search and fills a [`SolvedTable`]
//! with the value and optimal moves of every non-terminal position it
//! reaches. No pruning is done: every reachable position gets an exact score.

mod negamax;
mod table;

pub use negamax::{Evaluation, SolveStats, Solver, solve_game};
pub use table::{SolvedEntry, SolvedTable};
