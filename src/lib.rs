//! Huffman coding for arbitrary symbol alphabets.
//!
//! Builds a prefix-free code from symbol frequencies with the classic greedy tree
//! construction, then packs encoded symbols into bytes and unpacks them again.
//!
//! Basic usage:
//!
//! ```
//! use huffcode::Codec;
//!
//! let codec = Codec::from_text("Huffman").unwrap();
//! let payload = codec.encode_str("Huffman").unwrap();
//! assert_eq!(payload.bit_count, 18);
//! assert_eq!(codec.decode_to_string(&payload.bytes, payload.bit_count).unwrap(), "Huffman");
//! ```
//!
pub mod bitstream;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use error::{Error, Result};
pub use huffman_coding::codec::{derive_codes, Codec, CodeTable, EncodedPayload, InverseCodeTable};
pub use huffman_coding::tree::{build_tree, Node};
pub use tools::freq_count::FrequencyTable;
