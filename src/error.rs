//! Error types for letter-huffman

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffmanError {
    #[error("empty input")]
    EmptyInput,

    #[error("input contains no alphabetic characters")]
    NoAlphabeticContent,

    #[error("frequency table is empty, cannot build a huffman tree")]
    EmptyFrequencyTable,

    #[error("original text has zero size, ratio is undefined")]
    ZeroOriginalSize,

    #[error("invalid frequency table: {0}")]
    InvalidFrequencyTable(String),

    #[error("invalid code table: {0}")]
    InvalidCodeTable(String),

    #[error("original size overflows: {chars} characters at {bits_per_char} bits each")]
    BitCountOverflow { chars: usize, bits_per_char: usize },

    #[error("input too large: {size} characters exceeds limit of {limit}")]
    InputTooLarge { size: usize, limit: usize },

    #[error("invalid bit symbol {symbol:?} at position {position}")]
    InvalidBit { position: usize, symbol: char },

    #[error("encoded output ends with {trailing} bits that form no complete code")]
    TruncatedCode { trailing: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("batch task failed: {0}")]
    Task(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for HuffmanError {
    fn from(e: serde_json::Error) -> Self {
        HuffmanError::SerializationError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
