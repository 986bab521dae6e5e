//! Brute-force closure used as a reference when testing `ClosureEngine`.
//!
//! Every cell starts as the set of nonterminals for its terminal. Each
//! pass then combines cell `(i, k)` with cell `(k, j)` into cell `(i, j)`
//! for all `i, j, k`, and passes repeat until one changes nothing. Cells
//! are updated in place, so a pass may already use labels it added
//! itself. This costs `O(n^3 * num_labels^2)` per pass and up to
//! `O(n^2 * num_labels)` passes; it is never used outside of tests and
//! benchmarks.

use crate::closure::LabelClosure;
use crate::errors::ConfigurationError;
use crate::grammar::{GrammarIndex, Label};
use crate::matrix::{EdgeMatrix, Vertex};
use std::collections::BTreeSet;

#[cfg(test)]
mod test;

pub struct NaiveOracle<'grammar> {
    grammar: &'grammar GrammarIndex,
}

impl<'grammar> NaiveOracle<'grammar> {
    pub fn new(grammar: &'grammar GrammarIndex) -> Self {
        NaiveOracle { grammar }
    }

    pub fn close_rows<R, S>(&self, rows: &[R]) -> Result<LabelClosure, ConfigurationError>
    where
        R: AsRef<[Option<S>]>,
        S: AsRef<str>,
    {
        let matrix = EdgeMatrix::from_rows(rows)?;
        Ok(self.close(&matrix))
    }

    pub fn close(&self, matrix: &EdgeMatrix) -> LabelClosure {
        let grammar = self.grammar;
        let n = matrix.size();

        let mut grid: Vec<BTreeSet<Label>> = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                let labels = match matrix.terminal(Vertex::from(i), Vertex::from(j)) {
                    Some(terminal) => grammar.lookup_by_terminal(terminal).iter().cloned().collect(),
                    None => BTreeSet::new(),
                };
                grid.push(labels);
            }
        }

        let mut passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            passes += 1;
            for k in 0..n {
                for i in 0..n {
                    for j in 0..n {
                        let derived: Vec<Label> = {
                            let right = &grid[k * n + j];
                            grid[i * n + k]
                                .iter()
                                .flat_map(|&l| right.iter().map(move |&r| (l, r)))
                                .flat_map(|(l, r)| grammar.lookup_by_pair(l, r).iter().cloned())
                                .collect()
                        };
                        for label in derived {
                            changed |= grid[i * n + j].insert(label);
                        }
                    }
                }
            }
            log!("naive pass {}: changed={}", passes, changed);
        }

        LabelClosure::from_fn(n, |i, j| {
            grid[i * n + j]
                .iter()
                .map(|&label| grammar.name(label).to_string())
                .collect()
        })
    }
}
