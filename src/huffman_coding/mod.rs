//! The huffman module turns symbol frequencies into a prefix-free code and applies it.
//!
//! - tree: builds the Huffman tree from a frequency table.
//! - codec: derives the code and inverse code tables from the tree, and encodes/decodes with them.
//!
//! Construction is deterministic: the same frequency table, in the same order, always yields the
//! same codes and therefore the same bytes.
//!

pub mod codec;
pub mod tree;
