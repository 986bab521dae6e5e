use std::marker::PhantomData;
use std::mem;

use super::{Graph, NodeIndex};


type Word = u32;

/// A fixed-width row of bits for every node in a graph.
pub struct BitSet<G: Graph> {
    bits_per_node: usize,
    words: Vec<Word>,
    graph: PhantomData<G>,
}

impl<G: Graph> BitSet<G> {
    pub fn new(graph: &G, bits_per_node: usize) -> Self {
        let num_nodes = graph.num_nodes();
        let words_per_node = words(bits_per_node);
        let words = vec![0; words_per_node * num_nodes];
        BitSet {
            bits_per_node: bits_per_node,
            words: words,
            graph: PhantomData,
        }
    }

    fn index(&self, node: G::Node) -> usize {
        node.as_usize() * words(self.bits_per_node)
    }

    pub fn bits(&self, node: G::Node) -> BitSlice {
        let start = self.index(node);
        let end = start + words(self.bits_per_node);
        BitSlice { words: &self.words[start..end] }
    }

    /// Sets `bit` in the row of `node`; returns true if it was not set before.
    pub fn insert(&mut self, node: G::Node, bit: usize) -> bool {
        assert!(bit < self.bits_per_node);
        let start = self.index(node);
        let (word, bit) = words_bits(bit);
        let old_value = self.words[start + word];
        let new_value = old_value | (1 << bit);
        self.words[start + word] = new_value;
        old_value != new_value
    }

    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[derive(Copy, Clone)]
pub struct BitSlice<'a> {
    words: &'a [Word]
}

impl<'a> BitSlice<'a> {
    pub fn get(self, index: usize) -> bool {
        let (word, bit) = words_bits(index);
        let old_value = self.words[word];
        (old_value & (1 << bit)) != 0
    }

    /// Indices of the set bits, ascending.
    pub fn iter(self) -> impl Iterator<Item = usize> + 'a {
        let d = mem::size_of::<Word>() * 8;
        self.words
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .flat_map(move |(index, &w)| {
                (0..d).filter(move |&bit| (w & (1 << bit)) != 0)
                      .map(move |bit| index * d + bit)
            })
    }
}

#[inline]
fn words_bits(x: usize) -> (usize, usize) {
    let d = mem::size_of::<Word>() * 8;
    (x / d, x % d)
}

#[inline]
fn words(x: usize) -> usize {
    let (w, b) = words_bits(x);
    if b != 0 {w + 1} else {w}
}
