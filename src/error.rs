//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for Huffman operations.
#[derive(Debug, Error)]
pub enum Error {
    /// `extract_min` was called on an empty priority queue.
    ///
    /// Tree construction only extracts while two or more nodes remain, so
    /// seeing this means the builder itself is broken.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// The encoder was given a symbol that has no code in its table.
    #[error("symbol {0} has no entry in the code table")]
    UnknownSymbol(String),

    /// The bitstream ended early or contained a code the tree cannot follow.
    #[error("malformed bitstream at bit {position}: decoded {decoded} of {expected} symbols")]
    MalformedBitstream {
        /// Bit offset at which decoding gave up.
        position: usize,
        /// Symbols recovered before the failure.
        decoded: usize,
        /// Symbols the caller asked for.
        expected: usize,
    },

    /// Non-empty input was supplied for decoding without a tree.
    #[error("cannot decode {bits} bits without a tree")]
    InvalidTree {
        /// Length of the rejected bitstream.
        bits: usize,
    },

    /// A frequency table contained a zero weight or a repeated symbol.
    #[error("invalid frequency table: {0}")]
    InvalidFrequencyTable(String),

    /// A packed message header could not be parsed.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// A value does not fit in its field of the packed layout.
    #[error("{what} ({value}) exceeds the packed limit of {limit}")]
    LimitExceeded {
        /// Name of the offending field.
        what: &'static str,
        /// The value that was rejected.
        value: u64,
        /// Largest value the field can hold.
        limit: u64,
    },
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
