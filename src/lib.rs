//! # Huffman Coding
//!
//! *Greedy, optimal prefix codes for a known symbol distribution.*
//!
//! ## Intuition First
//!
//! Morse code gives `E` a single dot and `Q` four symbols: frequent letters
//! get short codes, rare ones long codes. Huffman coding does the same thing
//! systematically. Count how often every symbol occurs, then keep gluing the
//! two rarest "piles" together into a bigger pile until one pile remains. The
//! order in which piles were glued is a binary tree, and the path from the
//! root to each symbol (left = `0`, right = `1`) is that symbol's code.
//!
//! ## The Problem
//!
//! A fixed-width encoding spends 8 bits on every byte no matter how skewed
//! the data is. For `"AAAAABBBCCD"` that is 88 bits, while a Huffman code
//! needs 20. Because no code is a prefix of another, the concatenated bits
//! decode unambiguously without separators.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1949  Fano        Shannon-Fano coding: top-down, not always optimal
//! 1952  Huffman     Bottom-up greedy merging: optimal prefix codes
//! 1976  van Leeuwen Linear-time construction from sorted weights
//! 1989  Deflate     Huffman-coded LZ77 (zip, gzip, PNG)
//! ```
//!
//! ## Mathematical Formulation
//!
//! For symbols with weights $w_s$, Huffman's algorithm produces code lengths
//! $\ell_s$ minimizing
//!
//! ```text
//! L = sum_s w_s * l_s
//! ```
//!
//! over all prefix-free codes, and $L$ equals the sum of the weights of all
//! internal tree nodes. Within one bit per symbol of the entropy bound:
//! $H \le L / W < H + 1$ for total weight $W$.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(n \log n)$ for $n$ distinct symbols (binary-heap merges).
//! - **Encode / Decode**: $O(m)$ in the number of symbols / bits.
//! - **Space**: $2n - 1$ tree nodes.
//!
//! ## Failure Modes
//!
//! 1. **Integer-length codes**: a symbol with probability 0.99 still costs
//!    a full bit, so highly skewed sources lose against arithmetic coding or ANS.
//! 2. **Static model**: the tree is built from one complete scan; a source
//!    whose distribution drifts is coded with a stale model.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`FrequencyTable`], [`PriorityQueue`], [`HuffmanTree`] and [`CodeTable`]:
//!   the building blocks, each usable on its own.
//! - [`Coder`]: a self-contained session that encodes to and decodes from
//!   [`bit_vec::BitVec`].
//! - [`compress`] / [`decompress`]: a packed byte layout carrying the
//!   frequency table, from which the decoder rebuilds the identical tree.
//!
//! Equal weights leave the queue in insertion order and leaves are inserted
//! in first-seen order, so a given frequency table always produces the same
//! codes.
//!
//! ```
//! use huffman_coder::Coder;
//!
//! let input = b"AAAAABBBCCD";
//! let coder = Coder::build(input)?;
//! let bits = coder.encode(input)?;
//! assert!(bits.len() < input.len() * 8);
//! assert_eq!(coder.decode(&bits, input.len())?, input.to_vec());
//! # Ok::<(), huffman_coder::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cover, T. M. & Thomas, J. A. (2006). *Elements of Information Theory*, ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::fmt;
use std::hash::Hash;

pub mod code;
pub mod coder;
pub mod error;
pub mod frequency;
pub mod queue;
pub mod tree;
pub mod wire;

pub use code::{Code, CodeTable};
pub use coder::{decode, Coder};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use queue::PriorityQueue;
pub use tree::{HuffmanTree, Node};
pub use wire::{compress, decompress, PackedMessage, WireSymbol};

/// An element of the input alphabet.
///
/// Symbols are only ever compared for equality (and hashed for table
/// lookups); no ordering is required.
pub trait Symbol: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Symbol for T {}
