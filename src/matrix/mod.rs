use crate::errors::ConfigurationError;
use graph_algorithms as ga;
use std::iter;
use std::slice;


index! {
    pub struct Vertex = "v";
}

impl ga::NodeIndex for Vertex {}

/// A square n×n grid of edges. Cell `(i, j)` holds the terminal that
/// labels the edge `i -> j`, or nothing.
#[derive(Clone, Debug)]
pub struct EdgeMatrix {
    size: usize,
    cells: Vec<Option<String>>,
    successors: Vec<Vec<Vertex>>,
    predecessors: Vec<Vec<Vertex>>,
}

impl EdgeMatrix {
    /// A matrix of `size` vertices and no edges.
    pub fn empty(size: usize) -> Self {
        EdgeMatrix {
            size,
            cells: vec![None; size * size],
            successors: vec![vec![]; size],
            predecessors: vec![vec![]; size],
        }
    }

    pub fn from_rows<R, S>(rows: &[R]) -> Result<Self, ConfigurationError>
    where
        R: AsRef<[Option<S>]>,
        S: AsRef<str>,
    {
        let size = rows.len();
        let mut matrix = EdgeMatrix::empty(size);
        for (source, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(ConfigurationError::NonSquareMatrix {
                    row: source,
                    len: row.len(),
                    expected: size,
                });
            }
            for (target, cell) in row.iter().enumerate() {
                if let Some(terminal) = cell {
                    matrix.set(Vertex::from(source), Vertex::from(target), terminal.as_ref());
                }
            }
        }
        Ok(matrix)
    }

    /// Like `from_rows`, but every cell is a token and tokens equal to
    /// `no_edge` (conventionally `"0"`) mean "no edge".
    pub fn from_marked_rows<R, S>(rows: &[R], no_edge: &str) -> Result<Self, ConfigurationError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let rows: Vec<Vec<Option<&str>>> = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|token| Some(token.as_ref()).filter(|&t| t != no_edge))
                    .collect()
            })
            .collect();
        EdgeMatrix::from_rows(&rows)
    }

    pub fn with_edges<S>(size: usize, edges: &[(usize, usize, S)]) -> Result<Self, ConfigurationError>
    where
        S: AsRef<str>,
    {
        let mut matrix = EdgeMatrix::empty(size);
        for &(source, target, ref terminal) in edges {
            matrix.add_edge(source, target, terminal.as_ref())?;
        }
        Ok(matrix)
    }

    /// Puts `terminal` on the edge `source -> target`, returning the
    /// terminal it replaces, if any.
    pub fn add_edge(
        &mut self,
        source: usize,
        target: usize,
        terminal: &str,
    ) -> Result<Option<String>, ConfigurationError> {
        for &vertex in &[source, target] {
            if vertex >= self.size {
                return Err(ConfigurationError::VertexOutOfRange { vertex, size: self.size });
            }
        }
        Ok(self.set(Vertex::from(source), Vertex::from(target), terminal))
    }

    fn set(&mut self, source: Vertex, target: Vertex, terminal: &str) -> Option<String> {
        let cell = &mut self.cells[source.index() * self.size + target.index()];
        let previous = cell.replace(terminal.to_string());
        if previous.is_none() {
            self.successors[source.index()].push(target);
            self.predecessors[target.index()].push(source);
        }
        previous
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn terminal(&self, source: Vertex, target: Vertex) -> Option<&str> {
        self.cells[source.index() * self.size + target.index()]
            .as_ref()
            .map(|s| &s[..])
    }

    /// Every edge as `(source, target, terminal)`, row-major.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex, &str)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(index, cell)| {
            cell.as_ref()
                .map(|terminal| (Vertex::from(index / size), Vertex::from(index % size), &terminal[..]))
        })
    }

    pub fn num_edges(&self) -> usize {
        self.successors.iter().map(|s| s.len()).sum()
    }
}

impl ga::Graph for EdgeMatrix {
    type Node = Vertex;

    fn num_nodes(&self) -> usize {
        self.size
    }

    fn predecessors<'graph>(&'graph self, node: Vertex) -> <Self as ga::GraphPredecessors<'graph>>::Iter {
        self.predecessors[node.index()].iter().cloned()
    }

    fn successors<'graph>(&'graph self, node: Vertex) -> <Self as ga::GraphSuccessors<'graph>>::Iter {
        self.successors[node.index()].iter().cloned()
    }
}

impl<'graph> ga::GraphPredecessors<'graph> for EdgeMatrix {
    type Item = Vertex;
    type Iter = iter::Cloned<slice::Iter<'graph, Vertex>>;
}

impl<'graph> ga::GraphSuccessors<'graph> for EdgeMatrix {
    type Item = Vertex;
    type Iter = iter::Cloned<slice::Iter<'graph, Vertex>>;
}
