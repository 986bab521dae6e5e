//! Worklist closure of an edge matrix under a CNF grammar.
//!
//! Every derived edge is a `Fact`. A fact is admitted at most once; on
//! admission it is recorded in the fact set, in both directions of the
//! adjacency index, and queued. Popping a fact `(u, v, M)` tries to
//! combine it with every fact ending at `u` (`L` on `w -> u` gives
//! `A -> L M` on `w -> v`) and every fact starting at `v`. A pair of
//! facts is therefore combined when the later of the two is popped, so
//! the run is complete once the queue is empty. Facts are never removed,
//! and there are at most `n * n * num_labels` of them, so the run
//! terminates.

use crate::errors::ConfigurationError;
use crate::grammar::{GrammarIndex, Label};
use crate::matrix::{EdgeMatrix, Vertex};
use graph_algorithms::bit_set::BitSet;
use graph_algorithms::node_vec::NodeVec;
use graph_algorithms::Graph;
use std::collections::VecDeque;
use std::mem;

mod label_closure;
pub use self::label_closure::LabelClosure;


/// A derived edge `source -> target` labeled with a nonterminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fact {
    pub source: Vertex,
    pub target: Vertex,
    pub label: Label,
}

/// Counters from one run; they never influence the result.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClosureStats {
    /// facts admitted straight from terminal edges
    pub seeds: usize,
    /// all facts admitted, seeds included
    pub admitted: usize,
    pub pops: usize,
    /// pair lookups attempted while extending popped facts
    pub combinations: usize,
}

pub struct ClosureEngine<'grammar> {
    grammar: &'grammar GrammarIndex,
}

impl<'grammar> ClosureEngine<'grammar> {
    pub fn new(grammar: &'grammar GrammarIndex) -> Self {
        ClosureEngine { grammar }
    }

    /// Validates `rows` as a square matrix and closes it.
    pub fn solve<R, S>(&self, rows: &[R]) -> Result<LabelClosure, ConfigurationError>
    where
        R: AsRef<[Option<S>]>,
        S: AsRef<str>,
    {
        let matrix = EdgeMatrix::from_rows(rows)?;
        Ok(self.solve_matrix(&matrix))
    }

    pub fn solve_matrix(&self, matrix: &EdgeMatrix) -> LabelClosure {
        self.solve_with_stats(matrix).0
    }

    pub fn solve_with_stats(&self, matrix: &EdgeMatrix) -> (LabelClosure, ClosureStats) {
        let mut run = Propagation::new(self.grammar, matrix);
        run.seed(matrix);
        run.propagate();
        log!("solve: n={} {:?}", matrix.size(), run.stats);
        debug_assert_eq!(run.facts.bits.count(), run.stats.admitted);
        debug_assert!(matrix.nodes().all(|source| run.facts.row_in_step(source, &run.adjacency)));
        debug_assert!(run.worklist.is_empty());
        let stats = run.stats;
        (run.into_closure(matrix), stats)
    }
}

/// Which facts exist, one bit per `(source, target, label)`. The row of
/// `source` holds `size * num_labels` bits, `target`-major.
struct FactSet {
    bits: BitSet<EdgeMatrix>,
    num_labels: usize,
}

impl FactSet {
    fn new(matrix: &EdgeMatrix, num_labels: usize) -> Self {
        FactSet {
            bits: BitSet::new(matrix, matrix.size() * num_labels),
            num_labels,
        }
    }

    /// True if `fact` was not already present.
    fn insert(&mut self, fact: Fact) -> bool {
        let bit = fact.target.index() * self.num_labels + fact.label.index();
        self.bits.insert(fact.source, bit)
    }

    /// Facts starting at `source`, `(target, label)` in target order.
    fn facts_from<'a>(&'a self, source: Vertex) -> impl Iterator<Item = (Vertex, Label)> + 'a {
        let num_labels = self.num_labels;
        self.bits
            .bits(source)
            .iter()
            .map(move |bit| (Vertex::from(bit / num_labels), Label::from(bit % num_labels)))
    }

    /// The bit row of `source` and its forward adjacency hold the same facts.
    fn row_in_step(&self, source: Vertex, adjacency: &AdjacencyIndex) -> bool {
        let mut forward = adjacency.forward[source].clone();
        forward.sort();
        self.facts_from(source).eq(forward.into_iter())
    }
}

/// Admitted facts by endpoint, kept in step with the `FactSet`.
struct AdjacencyIndex {
    /// source -> (target, label)
    forward: NodeVec<EdgeMatrix, Vec<(Vertex, Label)>>,
    /// target -> (source, label)
    backward: NodeVec<EdgeMatrix, Vec<(Vertex, Label)>>,
}

struct Propagation<'run> {
    grammar: &'run GrammarIndex,
    facts: FactSet,
    adjacency: AdjacencyIndex,
    worklist: VecDeque<Fact>,
    stats: ClosureStats,
}

impl<'run> Propagation<'run> {
    fn new(grammar: &'run GrammarIndex, matrix: &EdgeMatrix) -> Self {
        Propagation {
            grammar,
            facts: FactSet::new(matrix, grammar.num_labels()),
            adjacency: AdjacencyIndex {
                forward: NodeVec::from_default(matrix),
                backward: NodeVec::from_default(matrix),
            },
            worklist: VecDeque::new(),
            stats: ClosureStats::default(),
        }
    }

    fn admit(&mut self, fact: Fact) {
        if !self.facts.insert(fact) {
            return;
        }
        self.adjacency.forward[fact.source].push((fact.target, fact.label));
        self.adjacency.backward[fact.target].push((fact.source, fact.label));
        self.worklist.push_back(fact);
        self.stats.admitted += 1;
        log!("admit {:?}", fact);
    }

    fn seed(&mut self, matrix: &EdgeMatrix) {
        let grammar = self.grammar;
        for source in matrix.nodes() {
            for target in matrix.successors(source) {
                let terminal = match matrix.terminal(source, target) {
                    Some(terminal) => terminal,
                    None => continue,
                };
                for &label in grammar.lookup_by_terminal(terminal) {
                    self.admit(Fact { source, target, label });
                }
            }
        }
        self.stats.seeds = self.stats.admitted;
        log!("seed: {} facts from {} edges", self.stats.seeds, matrix.num_edges());
    }

    fn propagate(&mut self) {
        while let Some(fact) = self.worklist.pop_front() {
            self.stats.pops += 1;
            self.extend_left(fact);
            self.extend_right(fact);
        }
    }

    /// `(w, u, left)` + `(u, v, mid)` => `(w, v, A)` for `A -> left mid`
    fn extend_left(&mut self, fact: Fact) {
        let grammar = self.grammar;
        let Fact { source: u, target: v, label: mid } = fact;
        // Facts admitted inside this loop meet `fact` when they are popped.
        for index in 0..self.adjacency.backward[u].len() {
            let (w, left) = self.adjacency.backward[u][index];
            self.stats.combinations += 1;
            for &label in grammar.lookup_by_pair(left, mid) {
                self.admit(Fact { source: w, target: v, label });
            }
        }
    }

    /// `(u, v, mid)` + `(v, w, right)` => `(u, w, A)` for `A -> mid right`
    fn extend_right(&mut self, fact: Fact) {
        let grammar = self.grammar;
        let Fact { source: u, target: v, label: mid } = fact;
        for index in 0..self.adjacency.forward[v].len() {
            let (w, right) = self.adjacency.forward[v][index];
            self.stats.combinations += 1;
            for &label in grammar.lookup_by_pair(mid, right) {
                self.admit(Fact { source: u, target: w, label });
            }
        }
    }

    fn into_closure(self, matrix: &EdgeMatrix) -> LabelClosure {
        let grammar = self.grammar;
        let size = matrix.size();
        let mut cells: Vec<Vec<String>> = vec![vec![]; size * size];
        for (source, targets) in self.adjacency.forward.iter_enumerated() {
            for &(target, label) in targets {
                cells[source.index() * size + target.index()].push(grammar.name(label).to_string());
            }
        }
        LabelClosure::from_fn(size, |source, target| {
            mem::replace(&mut cells[source * size + target], vec![])
        })
    }
}
