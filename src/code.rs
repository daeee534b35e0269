//! Prefix codes derived from a Huffman tree.

use std::collections::HashMap;
use std::fmt::{self, Write as _};

use bit_vec::BitVec;

use crate::tree::Node;
use crate::Symbol;

/// The bit path from the root to one leaf: `0` for left, `1` for right.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(BitVec);

impl Code {
    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for codes taken from a [`CodeTable`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bits in transmission order.
    pub fn iter(&self) -> bit_vec::Iter<'_> {
        self.0.iter()
    }

    /// The underlying bits.
    pub fn bits(&self) -> &BitVec {
        &self.0
    }

    /// True if `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len() <= other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_char(if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Mapping from each symbol in a tree to its code.
#[derive(Debug, Clone)]
pub struct CodeTable<S> {
    codes: HashMap<S, Code>,
}

impl<S: Symbol> CodeTable<S> {
    /// Walk the tree depth-first and record the path to every leaf.
    ///
    /// A lone leaf root has an empty path, so it is assigned `0` instead.
    pub fn from_tree(root: Option<&Node<S>>) -> Self {
        let mut codes = HashMap::new();
        match root {
            None => {}
            Some(Node::Leaf { symbol, .. }) => {
                codes.insert(symbol.clone(), Code(BitVec::from_elem(1, false)));
            }
            Some(root) => {
                let mut path = BitVec::new();
                collect(root, &mut path, &mut codes);
            }
        }
        Self { codes }
    }

    /// Code for `symbol`.
    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.codes.get(symbol)
    }

    /// Check that no code is a prefix of another.
    ///
    /// Sorted lexicographically, a code that prefixes any other also
    /// prefixes its immediate successor, so adjacent pairs suffice.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&Code> = self.codes.values().collect();
        codes.sort_by(|a, b| a.iter().cmp(b.iter()));
        codes.windows(2).all(|w| !w[0].is_prefix_of(w[1]))
    }
}

impl<S> CodeTable<S> {
    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True for the table of an empty alphabet.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Code)> + '_ {
        self.codes.iter()
    }
}

fn collect<S: Symbol>(node: &Node<S>, path: &mut BitVec, codes: &mut HashMap<S, Code>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(symbol.clone(), Code(path.clone()));
        }
        Node::Internal { left, right, .. } => {
            path.push(false);
            collect(left, path, codes);
            path.pop();

            path.push(true);
            collect(right, path, codes);
            path.pop();
        }
    }
}
