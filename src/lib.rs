//! CFL-reachability over edge-labeled graphs.
//!
//! Given a grammar in Chomsky Normal Form and an n×n matrix of
//! terminal-labeled edges, computes for every ordered vertex pair the
//! nonterminals that derive the label sequence of some path between
//! them: CYK parsing lifted from strings to graphs.
//!
//! ```
//! use cyk_graph::{solve, GrammarIndex};
//!
//! let grammar = GrammarIndex::new(vec![
//!     ("A", vec![vec!["a"]]),
//!     ("B", vec![vec!["b"]]),
//!     ("S", vec![vec!["A", "B"]]),
//! ]).unwrap();
//! let closure = solve(&grammar, &[
//!     vec![None, Some("a"), None],
//!     vec![None, None, Some("b")],
//!     vec![None, None, None],
//! ]).unwrap();
//! assert_eq!(closure.labels(0, 2), &["S".to_string()]);
//! ```
//!
//! Set `CYK_DEBUG` in the environment to trace derivations on stderr.

#[macro_use]
extern crate lazy_static;

#[macro_use]
mod macros;
#[macro_use]
mod log;

pub mod closure;
pub mod errors;
pub mod grammar;
pub mod matrix;
pub mod naive;

pub use crate::closure::{ClosureEngine, ClosureStats, Fact, LabelClosure};
pub use crate::errors::ConfigurationError;
pub use crate::grammar::{GrammarIndex, Label};
pub use crate::matrix::{EdgeMatrix, Vertex};
pub use crate::naive::NaiveOracle;

/// Closes `rows` under `grammar`. Fails without doing any work if the
/// matrix is not square.
pub fn solve<R, S>(grammar: &GrammarIndex, rows: &[R]) -> Result<LabelClosure, ConfigurationError>
where
    R: AsRef<[Option<S>]>,
    S: AsRef<str>,
{
    ClosureEngine::new(grammar).solve(rows)
}
