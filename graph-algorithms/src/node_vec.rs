use std::default::Default;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use super::{Graph, NodeIndex};

/// Dense per-node storage: exactly one `T` for each node of `G`.
pub struct NodeVec<G: Graph, T> {
    pub vec: Vec<T>,
    graph: PhantomData<G>,
}

impl<G: Graph, T: Default> NodeVec<G, T> {
    pub fn from_default(graph: &G) -> Self {
        NodeVec::from_fn(graph, |_| T::default())
    }
}

impl<G: Graph, T> NodeVec<G, T> {
    pub fn from_fn<F>(graph: &G, f: F) -> Self
        where F: FnMut(G::Node) -> T
    {
        NodeVec {
            vec: graph.nodes().map(f).collect(),
            graph: PhantomData,
        }
    }

    pub fn iter_enumerated<'a>(&'a self) -> impl Iterator<Item = (G::Node, &'a T)> + 'a
        where G: 'a, T: 'a
    {
        self.vec.iter().enumerate().map(|(index, data)| (G::Node::from(index), data))
    }
}

impl<G: Graph, T> Index<G::Node> for NodeVec<G, T> {
    type Output = T;

    fn index(&self, index: G::Node) -> &T {
        &self.vec[index.as_usize()]
    }
}

impl<G: Graph, T> IndexMut<G::Node> for NodeVec<G, T> {
    fn index_mut(&mut self, index: G::Node) -> &mut T {
        &mut self.vec[index.as_usize()]
    }
}
