//! Symbol-level encoding and decoding.

use bit_vec::BitVec;
use log::debug;

use crate::code::{Code, CodeTable};
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};
use crate::Symbol;

/// A Huffman coding session: the frequency table, the tree built from it and
/// the derived code table.
///
/// Nothing is shared between coders; each owns its tree outright.
#[derive(Debug, Clone)]
pub struct Coder<S> {
    frequencies: FrequencyTable<S>,
    tree: HuffmanTree<S>,
    codes: CodeTable<S>,
}

impl<S: Symbol> Coder<S> {
    /// Scan `symbols` and build a coder for their alphabet.
    pub fn build(symbols: &[S]) -> Result<Self> {
        Self::from_frequencies(FrequencyTable::from_symbols(symbols))
    }

    /// Build a coder from a precomputed frequency table.
    pub fn from_frequencies(frequencies: FrequencyTable<S>) -> Result<Self> {
        let tree = HuffmanTree::build(&frequencies)?;
        let codes = CodeTable::from_tree(tree.root());
        debug!(
            "coder ready: {} symbols over {} distinct",
            frequencies.total(),
            codes.len()
        );
        Ok(Self {
            frequencies,
            tree,
            codes,
        })
    }

    /// Concatenate the code of each symbol, in order.
    ///
    /// # Errors
    /// Returns `Error::UnknownSymbol` for a symbol outside this coder's
    /// alphabet; nothing is returned for the symbols before it.
    pub fn encode(&self, symbols: &[S]) -> Result<BitVec> {
        let mut bits = BitVec::with_capacity(symbols.len());
        for symbol in symbols {
            bits.extend(self.code_for(symbol)?.iter());
        }
        Ok(bits)
    }

    /// Exact number of bits `encode` would produce.
    pub fn encoded_len(&self, symbols: &[S]) -> Result<usize> {
        symbols
            .iter()
            .try_fold(0, |total, symbol| Ok(total + self.code_for(symbol)?.len()))
    }

    fn code_for(&self, symbol: &S) -> Result<&Code> {
        self.codes
            .get(symbol)
            .ok_or_else(|| Error::UnknownSymbol(format!("{:?}", symbol)))
    }

    /// Recover `expected` symbols from `bits`. Bits left over after the last
    /// symbol are treated as padding.
    pub fn decode(&self, bits: &BitVec, expected: usize) -> Result<Vec<S>> {
        decode(self.tree.root(), bits, expected)
    }
}

impl<S> Coder<S> {
    /// The table the tree was built from.
    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.frequencies
    }

    /// The coding tree.
    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    /// Symbol to code mapping.
    pub fn code_table(&self) -> &CodeTable<S> {
        &self.codes
    }
}

enum DecodeState<'a, S> {
    AtRoot,
    Descending(&'a Node<S>),
}

/// Walk the tree rooted at `root` one bit at a time until `expected` symbols
/// have been emitted.
///
/// # Errors
/// - `Error::InvalidTree` if `root` is `None` but `bits` is not empty.
/// - `Error::MalformedBitstream` if the bits run out before `expected`
///   symbols are decoded, or do not describe a path in the tree.
pub fn decode<S: Symbol>(
    root: Option<&Node<S>>,
    bits: &BitVec,
    expected: usize,
) -> Result<Vec<S>> {
    let root = match root {
        Some(root) => root,
        None if !bits.is_empty() => return Err(Error::InvalidTree { bits: bits.len() }),
        None if expected == 0 => return Ok(Vec::new()),
        None => {
            return Err(Error::MalformedBitstream {
                position: 0,
                decoded: 0,
                expected,
            })
        }
    };

    if let Node::Leaf { symbol, .. } = root {
        return decode_lone_leaf(symbol, bits, expected);
    }

    // Every symbol costs at least one bit.
    let mut out = Vec::with_capacity(expected.min(bits.len()));
    let mut state = DecodeState::AtRoot;

    for (position, bit) in bits.iter().enumerate() {
        if out.len() == expected {
            break;
        }
        let from = match state {
            DecodeState::AtRoot => root,
            DecodeState::Descending(node) => node,
        };
        let next = from.child(bit).ok_or(Error::MalformedBitstream {
            position,
            decoded: out.len(),
            expected,
        })?;

        match next {
            Node::Leaf { symbol, .. } => {
                out.push(symbol.clone());
                state = DecodeState::AtRoot;
            }
            Node::Internal { .. } => state = DecodeState::Descending(next),
        }
    }

    if out.len() < expected {
        return Err(Error::MalformedBitstream {
            position: bits.len(),
            decoded: out.len(),
            expected,
        });
    }
    Ok(out)
}

/// A one-symbol tree has no edges; every symbol is a single `0` bit.
fn decode_lone_leaf<S: Symbol>(symbol: &S, bits: &BitVec, expected: usize) -> Result<Vec<S>> {
    let malformed = |position: usize| Error::MalformedBitstream {
        position,
        decoded: position.min(expected),
        expected,
    };

    if bits.len() < expected {
        return Err(malformed(bits.len()));
    }
    if let Some(position) = bits.iter().take(expected).position(|bit| bit) {
        return Err(malformed(position));
    }
    Ok(vec![symbol.clone(); expected])
}
