//! Huffman tree construction.
//!
//! # Historical Context
//!
//! David Huffman (1952) developed this algorithm as a term paper at MIT.
//! Repeatedly merging the two lightest subtrees is provably optimal among
//! binary prefix codes for a known, fixed distribution.

use log::{debug, trace};

use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::queue::PriorityQueue;
use crate::Symbol;

/// Huffman tree node.
///
/// Children are owned boxes: every node has exactly one parent, and nothing
/// ever points back up the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    /// A single symbol and its occurrence count.
    Leaf {
        /// The symbol this leaf decodes to.
        symbol: S,
        /// Occurrence count.
        weight: u64,
    },
    /// A merge of two subtrees.
    Internal {
        /// Sum of both children's weights.
        weight: u64,
        /// Subtree reached by a `0` bit.
        left: Box<Node<S>>,
        /// Subtree reached by a `1` bit.
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    /// Create a leaf.
    pub fn leaf(symbol: S, weight: u64) -> Self {
        Node::Leaf { symbol, weight }
    }

    /// Join two subtrees under a new internal node; `left` takes the `0` edge.
    pub fn merge(left: Self, right: Self) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Weight of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// True for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The symbol held by a leaf; `None` for internal nodes.
    pub fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    /// Child reached by following `bit` (`false` is left); `None` for leaves.
    pub fn child(&self, bit: bool) -> Option<&Node<S>> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }

    fn height(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// A complete Huffman tree, or no tree at all for an empty alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Option<Node<S>>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Build the tree by greedily merging the two lightest nodes.
    ///
    /// One leaf is queued per table entry, in table order. The first node
    /// extracted becomes the left child. A one-entry table yields a lone
    /// leaf root; an empty table yields an empty tree.
    pub fn build(frequencies: &FrequencyTable<S>) -> Result<Self> {
        let mut queue = PriorityQueue::with_capacity(frequencies.len());
        for (symbol, weight) in frequencies.iter() {
            queue.insert(Node::leaf(symbol.clone(), weight));
        }

        if queue.is_empty() {
            return Ok(Self { root: None });
        }

        while queue.len() > 1 {
            let a = queue.extract_min()?;
            let b = queue.extract_min()?;
            trace!("merging weights {} + {}", a.weight(), b.weight());
            queue.insert(Node::merge(a, b));
        }

        let root = queue.extract_min()?;
        let tree = Self { root: Some(root) };
        debug!(
            "built huffman tree: {} leaves, weight {}, height {}",
            tree.leaf_count(),
            tree.weight(),
            tree.height()
        );
        Ok(tree)
    }
}

impl<S> HuffmanTree<S> {
    /// Root node, if the alphabet was non-empty.
    pub fn root(&self) -> Option<&Node<S>> {
        self.root.as_ref()
    }

    /// True if built from an empty table.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Root weight: the total number of symbols the tree was built from.
    pub fn weight(&self) -> u64 {
        self.root.as_ref().map_or(0, Node::weight)
    }

    /// Longest root-to-leaf path, in edges.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, Node::height)
    }

    /// Number of distinct symbols.
    pub fn leaf_count(&self) -> usize {
        self.root.as_ref().map_or(0, Node::leaf_count)
    }
}
