//! Code derivation plus encode/decode over a built Huffman tree.

use log::{debug, trace, warn};
use rustc_hash::FxHashMap;

use super::tree::{build_tree, Node};
use crate::bitstream::{bitpacker::BitPacker, bitreader::BitReader, parse_bit};
use crate::error::{Error, Result};
use crate::tools::freq_count::FrequencyTable;
use std::fmt::Debug;
use std::hash::Hash;

/// Symbol -> code of '0'/'1' characters.
pub type CodeTable<S> = FxHashMap<S, String>;
/// Code -> symbol. Unambiguous because the codes are prefix-free.
pub type InverseCodeTable<S> = FxHashMap<String, S>;

/// Packed output of an encode: MSB-first bytes, zero padded at the end, and the
/// number of bits that are payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedPayload {
    pub bytes: Vec<u8>,
    pub bit_count: usize,
}

impl EncodedPayload {
    /// Zero bits appended to fill the final byte.
    pub fn padding_bits(&self) -> usize {
        (self.bytes.len() * 8).saturating_sub(self.bit_count)
    }
}

/// Walk the tree depth first, left = '0' before right = '1', and record each leaf's path.
///
/// A lone leaf at the root gets the code "0". Fails with `InvalidInput` if the same
/// symbol sits on two leaves, since the inverse table could not tell them apart.
pub fn derive_codes<S>(root: &Node<S>) -> Result<(CodeTable<S>, InverseCodeTable<S>)>
where
    S: Eq + Hash + Clone + Debug,
{
    let mut codes = CodeTable::default();
    let mut inverse = InverseCodeTable::default();
    let mut path = String::new();
    walk(root, &mut path, &mut codes, &mut inverse)?;
    Ok((codes, inverse))
}

fn walk<S>(
    node: &Node<S>,
    path: &mut String,
    codes: &mut CodeTable<S>,
    inverse: &mut InverseCodeTable<S>,
) -> Result<()>
where
    S: Eq + Hash + Clone + Debug,
{
    match node {
        Node::Leaf { symbol, .. } => {
            let code = if path.is_empty() {
                "0".to_string()
            } else {
                path.clone()
            };
            if codes.insert(symbol.clone(), code.clone()).is_some() {
                return Err(Error::InvalidInput(format!(
                    "symbol {:?} appears on more than one leaf",
                    symbol
                )));
            }
            inverse.insert(code, symbol.clone());
        }
        Node::Internal { left, right, .. } => {
            path.push('0');
            walk(left, path, codes, inverse)?;
            path.pop();
            path.push('1');
            walk(right, path, codes, inverse)?;
            path.pop();
        }
    }
    Ok(())
}

/// A Huffman code built once for a fixed alphabet. Immutable after construction, so one
/// instance can serve any number of encode and decode calls, from any number of threads.
#[derive(Debug, Clone)]
pub struct Codec<S> {
    tree: Node<S>,
    codes: CodeTable<S>,
    inverse: InverseCodeTable<S>,
    max_code_len: usize,
}

impl<S> Codec<S>
where
    S: Eq + Hash + Clone + Debug,
{
    /// Build the tree for `frequencies` and derive its code tables.
    pub fn new(frequencies: &FrequencyTable<S>) -> Result<Self> {
        Self::from_tree(build_tree(frequencies)?)
    }

    /// Count the symbols, then build as `new` does.
    pub fn from_symbols<I: IntoIterator<Item = S>>(symbols: I) -> Result<Self> {
        Self::new(&FrequencyTable::from_symbols(symbols))
    }

    /// Derive the code tables from a tree built elsewhere.
    pub fn from_tree(tree: Node<S>) -> Result<Self> {
        let (codes, inverse) = derive_codes(&tree)?;
        let max_code_len = codes.values().map(String::len).max().unwrap_or(0);
        debug!(
            "Codec ready: {} symbols, longest code {} bits.",
            codes.len(),
            max_code_len
        );
        Ok(Self {
            tree,
            codes,
            inverse,
            max_code_len,
        })
    }

    pub fn code_table(&self) -> &CodeTable<S> {
        &self.codes
    }

    pub fn inverse_code_table(&self) -> &InverseCodeTable<S> {
        &self.inverse
    }

    pub fn tree(&self) -> &Node<S> {
        &self.tree
    }

    pub fn code_for(&self, symbol: &S) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    fn lookup(&self, symbol: &S, position: usize) -> Result<&str> {
        self.code_for(symbol).ok_or_else(|| Error::UnknownSymbol {
            symbol: format!("{:?}", symbol),
            position,
        })
    }

    fn codes_of<'a>(&'a self, symbols: &[S]) -> Result<Vec<&'a str>> {
        symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| self.lookup(symbol, i))
            .collect()
    }

    /// Encode and pack. Fails with `UnknownSymbol` if a symbol is not in the alphabet.
    pub fn encode(&self, symbols: &[S]) -> Result<EncodedPayload> {
        let codes = self.codes_of(symbols)?;
        let total: usize = codes.iter().map(|code| code.len()).sum();
        let mut bp = BitPacker::new((total + 7) / 8);
        for code in codes {
            bp.push_code(code)?;
        }
        trace!("Encoded {} symbols into {} bits at {}.", symbols.len(), total, bp.loc());
        let (bytes, bit_count) = bp.finish();
        Ok(EncodedPayload { bytes, bit_count })
    }

    /// Encode to the logical bitstring, one '0'/'1' character per bit.
    pub fn encode_as_bitstring(&self, symbols: &[S]) -> Result<String> {
        Ok(self.codes_of(symbols)?.concat())
    }

    /// Number of bits `encode` would produce, without packing anything.
    pub fn encoded_bit_len(&self, symbols: &[S]) -> Result<usize> {
        Ok(self.codes_of(symbols)?.iter().map(|code| code.len()).sum())
    }

    /// Decode the first `bit_count` bits of `bytes`. Anything after them is padding.
    ///
    /// Fails with `CorruptData` if `bytes` holds fewer bits than requested or the
    /// payload ends in the middle of a code.
    pub fn decode(&self, bytes: &[u8], bit_count: usize) -> Result<Vec<S>> {
        // Payload is left-aligned: it starts at the MSB of bytes[0], padding trails it.
        let mut br = BitReader::new(bytes);
        let available = br.bits_remaining();
        if available < bit_count {
            return Err(Error::CorruptData(format!(
                "{} bits requested but only {} available",
                bit_count, available
            )));
        }
        if available - bit_count > 7 {
            warn!(
                "Ignoring {} bits after the payload; more than a byte of padding.",
                available - bit_count
            );
        }
        let bits = (0..bit_count).map(|i| {
            br.bool_bit()
                .ok_or_else(|| Error::CorruptData(format!("bit stream ended at bit {}", i)))
        });
        let symbols = self.match_codes(bits)?;
        trace!("Decoded {} symbols, stopped at {}.", symbols.len(), br.loc());
        Ok(symbols)
    }

    pub fn decode_payload(&self, payload: &EncodedPayload) -> Result<Vec<S>> {
        self.decode(&payload.bytes, payload.bit_count)
    }

    /// Decode a string of '0'/'1' characters. Any other character is `CorruptData`.
    pub fn decode_bitstring(&self, bits: &str) -> Result<Vec<S>> {
        self.match_codes(bits.chars().enumerate().map(|(i, ch)| parse_bit(ch, i)))
    }

    /// Grow a candidate code bit by bit and emit a symbol whenever it matches.
    fn match_codes<I>(&self, bits: I) -> Result<Vec<S>>
    where
        I: Iterator<Item = Result<bool>>,
    {
        let mut symbols = Vec::new();
        let mut candidate = String::with_capacity(self.max_code_len);
        for (position, bit) in bits.enumerate() {
            candidate.push(if bit? { '1' } else { '0' });
            if let Some(symbol) = self.inverse.get(candidate.as_str()) {
                symbols.push(symbol.clone());
                candidate.clear();
            } else if candidate.len() >= self.max_code_len {
                return Err(Error::CorruptData(format!(
                    "no code matches {} ending at bit {}",
                    candidate, position
                )));
            }
        }
        if !candidate.is_empty() {
            return Err(Error::CorruptData(format!(
                "stream ends inside a code ({} unmatched bits)",
                candidate.len()
            )));
        }
        Ok(symbols)
    }
}

impl Codec<char> {
    /// Build a codec from the character counts of `text`.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(&FrequencyTable::from_text(text))
    }

    pub fn encode_str(&self, text: &str) -> Result<EncodedPayload> {
        self.encode(&text.chars().collect::<Vec<char>>())
    }

    pub fn decode_to_string(&self, bytes: &[u8], bit_count: usize) -> Result<String> {
        Ok(self.decode(bytes, bit_count)?.into_iter().collect())
    }
}

impl Codec<u8> {
    /// Build a codec from the byte counts of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::new(&FrequencyTable::from_bytes(data))
    }
}
