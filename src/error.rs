//! Error types for the huffcode library.
//!
//! Every failure is reported synchronously to the caller of the offending
//! operation. Nothing is retried and no partial results are returned.

use thiserror::Error;

/// Errors returned by tree construction, code derivation, encoding and decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Empty or zero-frequency table, or a tree that cannot be turned into a code.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Encode met a symbol that was not in the frequency table.
    #[error("unknown symbol {symbol} at position {position}")]
    UnknownSymbol { symbol: String, position: usize },

    /// Decode ran out of bits mid-code, or was handed bits it cannot read.
    #[error("corrupt data: {0}")]
    CorruptData(String),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn display_test() {
        let e = Error::UnknownSymbol {
            symbol: "'z'".to_string(),
            position: 3,
        };
        assert_eq!(e.to_string(), "unknown symbol 'z' at position 3");
        let e = Error::CorruptData("stream ends mid-code".to_string());
        assert_eq!(e.to_string(), "corrupt data: stream ends mid-code");
    }
}
