use std::collections::HashMap;
use std::cmp::max;
use std::slice;
use std::iter;

use super::{Graph, GraphPredecessors, GraphSuccessors, NodeIndex};
use super::node_vec::NodeVec;

pub struct TestGraph {
    num_nodes: usize,
    successors: HashMap<usize, Vec<usize>>,
    predecessors: HashMap<usize, Vec<usize>>,
}

impl TestGraph {
    pub fn new(edges: &[(usize, usize)]) -> Self {
        let mut graph = TestGraph {
            num_nodes: 0,
            successors: HashMap::new(),
            predecessors: HashMap::new()
        };
        for &(source, target) in edges {
            graph.num_nodes = max(graph.num_nodes, source + 1);
            graph.num_nodes = max(graph.num_nodes, target + 1);
            graph.successors.entry(source).or_insert(vec![]).push(target);
            graph.predecessors.entry(target).or_insert(vec![]).push(source);
        }
        for node in 0..graph.num_nodes {
            graph.successors.entry(node).or_insert(vec![]);
            graph.predecessors.entry(node).or_insert(vec![]);
        }
        graph
    }
}

impl Graph for TestGraph {
    type Node = usize;

    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    fn predecessors<'graph>(&'graph self, node: usize)
                            -> <Self as GraphPredecessors<'graph>>::Iter {
       self.predecessors[&node].iter().cloned()
    }

    fn successors<'graph>(&'graph self, node: usize)
                            -> <Self as GraphSuccessors<'graph>>::Iter {
        self.successors[&node].iter().cloned()
    }
}

impl<'graph> GraphPredecessors<'graph> for TestGraph {
    type Item = usize;
    type Iter = iter::Cloned<slice::Iter<'graph, usize>>;
}

impl<'graph> GraphSuccessors<'graph> for TestGraph {
    type Item = usize;
    type Iter = iter::Cloned<slice::Iter<'graph, usize>>;
}

impl NodeIndex for usize {
}

#[test]
fn nodes_in_index_order() {
    let graph = TestGraph::new(&[(2, 0), (0, 1)]);
    assert_eq!(graph.nodes().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn out_degree_per_node() {
    // 0 -> 1 -> 2
    // |         ^
    // +---------+
    let graph = TestGraph::new(&[(0, 1), (1, 2), (0, 2)]);
    let degrees: NodeVec<TestGraph, usize> =
        NodeVec::from_fn(&graph, |node| graph.successors(node).count());
    assert_eq!(degrees.vec, vec![2, 1, 0]);
    assert_eq!(graph.predecessors(2).collect::<Vec<_>>(), vec![1, 0]);
}
