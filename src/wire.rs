//! Self-contained packed messages.
//!
//! ```text
//! [4 bytes]                  original symbol count, u32 LE
//! [2 bytes]                  distinct symbols k, u16 LE
//! [k x (WIDTH + 4 bytes)]    symbol, frequency as u32 LE, in table order
//! [remaining bytes]          code bits, MSB first, last byte zero-padded
//! ```
//!
//! The frequency table is stored rather than the tree: tree construction is
//! deterministic for a given table order, so the reader rebuilds the exact
//! tree the writer used.

use std::io::{Cursor, Read};

use bit_vec::BitVec;
use log::debug;

use crate::coder::Coder;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::Symbol;

/// Largest symbol count a packed message can describe.
pub const MAX_SYMBOL_COUNT: u64 = u32::MAX as u64;

/// Largest alphabet a packed message can describe.
pub const MAX_DISTINCT_SYMBOLS: u64 = u16::MAX as u64;

/// Largest per-symbol frequency a packed message can store.
pub const MAX_FREQUENCY: u64 = u32::MAX as u64;

/// Bytes before the frequency table.
pub const HEADER_LEN: usize = 6;

/// A symbol with a fixed-width byte representation.
pub trait WireSymbol: Symbol {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Append exactly `WIDTH` bytes to `out`.
    fn write_to(&self, out: &mut Vec<u8>);

    /// Parse `WIDTH` bytes; `None` if they do not name a valid symbol.
    fn read_from(bytes: &[u8]) -> Option<Self>;
}

impl WireSymbol for u8 {
    const WIDTH: usize = 1;

    fn write_to(&self, out: &mut Vec<u8>) {
        out.push(*self);
    }

    fn read_from(bytes: &[u8]) -> Option<Self> {
        bytes.first().copied()
    }
}

impl WireSymbol for char {
    const WIDTH: usize = 4;

    fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&u32::from(*self).to_le_bytes());
    }

    fn read_from(bytes: &[u8]) -> Option<Self> {
        let raw: [u8; 4] = bytes.try_into().ok()?;
        char::from_u32(u32::from_le_bytes(raw))
    }
}

/// An encoded message together with everything needed to decode it.
#[derive(Debug, Clone)]
pub struct PackedMessage<S> {
    symbol_count: usize,
    frequencies: FrequencyTable<S>,
    bits: BitVec,
}

impl<S: WireSymbol> Coder<S> {
    /// Encode `symbols` and bundle the result with this coder's table.
    pub fn pack(&self, symbols: &[S]) -> Result<PackedMessage<S>> {
        Ok(PackedMessage {
            symbol_count: symbols.len(),
            frequencies: self.frequencies().clone(),
            bits: self.encode(symbols)?,
        })
    }
}

impl<S: WireSymbol> PackedMessage<S> {
    /// Number of symbols the message decodes to.
    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// Table the decoding tree is rebuilt from.
    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.frequencies
    }

    /// Code bits. After `from_bytes` this includes any padding.
    pub fn bits(&self) -> &BitVec {
        &self.bits
    }

    /// Serialize to the packed layout.
    ///
    /// The stored table is the coder's, which may describe more symbols than
    /// the message holds; the count alone decides where decoding stops.
    ///
    /// # Errors
    /// Returns `Error::LimitExceeded` if a count does not fit its field.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let count = fit("symbol count", self.symbol_count as u64, MAX_SYMBOL_COUNT)? as u32;
        let distinct = fit(
            "distinct symbols",
            self.frequencies.len() as u64,
            MAX_DISTINCT_SYMBOLS,
        )? as u16;

        let payload = self.bits.to_bytes();
        let mut bytes = Vec::with_capacity(
            HEADER_LEN + self.frequencies.len() * (S::WIDTH + 4) + payload.len(),
        );
        bytes.extend_from_slice(&count.to_le_bytes());
        bytes.extend_from_slice(&distinct.to_le_bytes());

        for (symbol, weight) in self.frequencies.iter() {
            symbol.write_to(&mut bytes);
            let weight = fit("frequency", weight, MAX_FREQUENCY)? as u32;
            bytes.extend_from_slice(&weight.to_le_bytes());
        }
        bytes.extend_from_slice(&payload);

        debug!(
            "packed {} symbols into {} bytes ({} code bits)",
            self.symbol_count,
            bytes.len(),
            self.bits.len()
        );
        Ok(bytes)
    }

    /// Parse the packed layout.
    ///
    /// # Errors
    /// - `Error::InvalidHeader` if the header is truncated or names an
    ///   invalid symbol.
    /// - `Error::InvalidFrequencyTable` for zero or repeated entries.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);

        let symbol_count = u32::from_le_bytes(read_array(&mut cursor, "symbol count")?) as usize;
        let distinct = u16::from_le_bytes(read_array(&mut cursor, "distinct symbols")?);

        let mut weights = Vec::with_capacity(distinct as usize);
        let mut symbol_bytes = vec![0u8; S::WIDTH];
        for i in 0..distinct {
            cursor
                .read_exact(&mut symbol_bytes)
                .map_err(|_| truncated("frequency table"))?;
            let symbol = S::read_from(&symbol_bytes).ok_or_else(|| {
                Error::InvalidHeader(format!("entry {} holds an invalid symbol", i))
            })?;
            let weight = u32::from_le_bytes(read_array(&mut cursor, "frequency table")?);
            weights.push((symbol, u64::from(weight)));
        }

        let frequencies = FrequencyTable::from_weights(weights)?;

        let offset = cursor.position() as usize;
        Ok(Self {
            symbol_count,
            frequencies,
            bits: BitVec::from_bytes(&data[offset..]),
        })
    }

    /// Rebuild the tree from the stored table and decode the message.
    pub fn unpack(&self) -> Result<Vec<S>> {
        let coder = Coder::from_frequencies(self.frequencies.clone())?;
        coder.decode(&self.bits, self.symbol_count)
    }
}

/// Build a coder for `symbols` and return them as a packed message.
pub fn compress<S: WireSymbol>(symbols: &[S]) -> Result<Vec<u8>> {
    Coder::build(symbols)?.pack(symbols)?.to_bytes()
}

/// Inverse of [`compress`].
pub fn decompress<S: WireSymbol>(data: &[u8]) -> Result<Vec<S>> {
    PackedMessage::from_bytes(data)?.unpack()
}

fn fit(what: &'static str, value: u64, limit: u64) -> Result<u64> {
    if value > limit {
        return Err(Error::LimitExceeded { what, value, limit });
    }
    Ok(value)
}

fn truncated(section: &str) -> Error {
    Error::InvalidHeader(format!("truncated {}", section))
}

fn read_array<const N: usize>(cursor: &mut Cursor<&[u8]>, section: &str) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    cursor.read_exact(&mut buf).map_err(|_| truncated(section))?;
    Ok(buf)
}
