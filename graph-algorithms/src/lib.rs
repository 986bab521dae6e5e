use std::fmt::Debug;
use std::hash::Hash;

pub mod bit_set;
pub mod node_vec;

#[cfg(test)]
mod test;

/// A directed graph over densely indexed nodes `0..num_nodes()`.
pub trait Graph
    where Self: for<'graph> GraphPredecessors<'graph, Item=<Self as Graph>::Node>,
          Self: for<'graph> GraphSuccessors<'graph, Item=<Self as Graph>::Node>
{
    type Node: NodeIndex;

    fn num_nodes(&self) -> usize;
    fn predecessors<'graph>(&'graph self, node: Self::Node)
                            -> <Self as GraphPredecessors<'graph>>::Iter;
    fn successors<'graph>(&'graph self, node: Self::Node)
                            -> <Self as GraphSuccessors<'graph>>::Iter;

    fn nodes(&self) -> NodeIter<Self::Node> {
        NodeIter { next: 0, end: self.num_nodes(), node: ::std::marker::PhantomData }
    }
}

pub trait GraphPredecessors<'graph> {
    type Item;
    type Iter: Iterator<Item=Self::Item>;
}

pub trait GraphSuccessors<'graph> {
    type Item;
    type Iter: Iterator<Item=Self::Item>;
}

pub trait NodeIndex: Copy + Debug + Eq + Ord + Hash + Into<usize> + From<usize> {
    fn as_usize(self) -> usize {
        self.into()
    }
}

/// Iterates over every node of a graph in index order.
pub struct NodeIter<N> {
    next: usize,
    end: usize,
    node: ::std::marker::PhantomData<N>,
}

impl<N: NodeIndex> Iterator for NodeIter<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        if self.next < self.end {
            let node = N::from(self.next);
            self.next += 1;
            Some(node)
        } else {
            None
        }
    }
}
