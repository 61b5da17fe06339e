//! The bitstream module packs Huffman codes into bytes and reads them back.
//!
//! Bits are written most-significant-bit first, in the order they are produced. A final
//! partial byte is padded with zeros in its least significant bits, so the caller must keep
//! the exact bit count to tell payload from padding.
//!
pub mod bitpacker;
pub mod bitreader;

use crate::error::{Error, Result};

/// Interpret one character of a '0'/'1' bitstring. `position` is only used for the error.
pub(crate) fn parse_bit(ch: char, position: usize) -> Result<bool> {
    match ch {
        '0' => Ok(false),
        '1' => Ok(true),
        _ => Err(Error::CorruptData(format!(
            "{:?} at position {} is not a binary digit",
            ch, position
        ))),
    }
}
