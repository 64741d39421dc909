//! letter-huffman: Huffman coding for the alphabetic content of text.
//!
//! The pipeline runs strictly forward:
//! - `frequency` counts alphabetic symbols (case-sensitive)
//! - `tree` builds the Huffman tree with deterministic tie-breaking
//! - `codes` derives the prefix-free code table
//! - `encoder` maps text to a sequence of bit symbols, and back
//! - `ratio` reports original vs. encoded size
//!
//! Non-alphabetic characters are never coded; encoding skips them.

pub mod batch;
pub mod codes;
pub mod config;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod ratio;
pub mod tree;

pub use crate::codes::CodeTable;
pub use crate::config::CompressionConfig;
pub use crate::encoder::{decode, encode, EncodedOutput};
pub use crate::error::{HuffmanError, Result};
pub use crate::frequency::FrequencyTable;
pub use crate::ratio::{report_ratio, CompressionRatio};
pub use crate::tree::{HuffmanNode, HuffmanTree};

use serde::{Deserialize, Serialize};

/// Compress `text`, returning the encoded bits and the code table used.
pub fn compress(text: &str) -> Result<(EncodedOutput, CodeTable)> {
    let frequencies = FrequencyTable::from_text(text)?;
    let tree = HuffmanTree::from_frequencies(&frequencies)?;
    let table = CodeTable::from_tree(&tree);
    let encoded = encode(text, &table);
    Ok((encoded, table))
}

/// Everything one compression run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressedText {
    pub encoded: EncodedOutput,
    pub codes: CodeTable,
    pub frequencies: FrequencyTable,
    pub ratio: CompressionRatio,
}

impl CompressedText {
    /// The alphabetic characters of the original text, in order.
    pub fn decode(&self) -> Result<String> {
        decode(&self.encoded, &self.codes)
    }

    /// Pretty-printed JSON report
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compressor with configurable limits and ratio reporting
#[derive(Debug, Clone, Default)]
pub struct Compressor {
    config: CompressionConfig,
}

impl Compressor {
    /// Create a compressor with the given configuration
    pub fn new(config: CompressionConfig) -> Self {
        Self { config }
    }

    /// The configuration this compressor was built with
    pub fn config(&self) -> &CompressionConfig {
        &self.config
    }

    /// Run the full pipeline on `text`.
    pub fn compress(&self, text: &str) -> Result<CompressedText> {
        self.check_size(text)?;

        let frequencies = FrequencyTable::from_text(text).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected input");
        })?;
        let tree = HuffmanTree::from_frequencies(&frequencies)?;
        let codes = CodeTable::from_tree(&tree);
        let encoded = encode(text, &codes);
        let ratio = ratio::report_ratio_with(text, &encoded, self.config.bits_per_char)?;

        tracing::debug!(
            original_bits = ratio.original_bits,
            encoded_bits = ratio.encoded_bits,
            ratio = ratio.ratio,
            "compressed text"
        );

        Ok(CompressedText {
            encoded,
            codes,
            frequencies,
            ratio,
        })
    }

    /// Encode `text` with a table built earlier, e.g. from another text.
    /// Symbols the table does not know are skipped.
    pub fn compress_with_table(
        &self,
        text: &str,
        codes: &CodeTable,
    ) -> Result<(EncodedOutput, CompressionRatio)> {
        self.check_size(text)?;
        if text.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }
        let encoded = encode(text, codes);
        let ratio = ratio::report_ratio_with(text, &encoded, self.config.bits_per_char)?;
        Ok((encoded, ratio))
    }

    fn check_size(&self, text: &str) -> Result<()> {
        let size = text.chars().count();
        if size > self.config.max_input_size {
            tracing::warn!(size, limit = self.config.max_input_size, "input too large");
            return Err(HuffmanError::InputTooLarge {
                size,
                limit: self.config.max_input_size,
            });
        }
        Ok(())
    }
}
