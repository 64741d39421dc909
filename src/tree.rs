//! Huffman tree construction
//!
//! Classic greedy merge over a min-priority queue. Entries are ordered by
//! `(weight, sequence)` so that equal weights leave the queue first-in,
//! first-out and the resulting tree is the same on every run.

use crate::codes::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A node of a built Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: char,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Frequency of a leaf, or the sum of its children for an internal node
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } | HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    /// True for a symbol-carrying node
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    fn merge(left: HuffmanNode, right: HuffmanNode) -> HuffmanNode {
        HuffmanNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

struct QueueEntry {
    weight: u64,
    seq: u64,
    node: HuffmanNode,
}

impl Eq for QueueEntry {}
impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}
impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

/// An immutable Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Build the tree for a frequency table.
    ///
    /// The first node taken from the queue becomes the left child of each
    /// merge. A table with a single symbol yields a tree that is one leaf.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        let mut seq = 0u64;
        for (symbol, weight) in frequencies.iter() {
            heap.push(QueueEntry {
                weight,
                seq,
                node: HuffmanNode::Leaf { symbol, weight },
            });
            seq += 1;
        }

        while heap.len() > 1 {
            let (Some(first), Some(second)) = (heap.pop(), heap.pop()) else {
                break;
            };
            let merged = HuffmanNode::merge(first.node, second.node);
            tracing::trace!(weight = merged.weight(), seq, "merged nodes");
            heap.push(QueueEntry {
                weight: merged.weight(),
                seq,
                node: merged,
            });
            seq += 1;
        }

        let root = heap.pop().ok_or(HuffmanError::EmptyFrequencyTable)?.node;
        let tree = Self { root };
        tracing::debug!(
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            weight = tree.weight(),
            "built huffman tree"
        );
        Ok(tree)
    }

    /// Derive the prefix-code table; the tree can be kept to derive it again.
    pub fn code_table(&self) -> CodeTable {
        CodeTable::from_tree(self)
    }

    /// Root node of the tree
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Total weight, equal to the number of symbols counted.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Number of leaves, one per distinct symbol
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                HuffmanNode::Leaf { .. } => count += 1,
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push(&**left);
                    stack.push(&**right);
                }
            }
        }
        count
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { .. } => deepest = deepest.max(depth),
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push((&**left, depth + 1));
                    stack.push((&**right, depth + 1));
                }
            }
        }
        deepest
    }
}

/// Shorthand for [`HuffmanTree::from_frequencies`].
pub fn build_tree(frequencies: &FrequencyTable) -> Result<HuffmanTree> {
    HuffmanTree::from_frequencies(frequencies)
}
