//! Compression ratio reporting
//!
//! The original size counts every character of the text, including the ones
//! that produced no bits, at a fixed number of bits per character.

use crate::encoder::EncodedOutput;
use crate::error::{HuffmanError, Result};
use serde::{Deserialize, Serialize};

/// Bits assumed per character by [`report_ratio`].
pub const DEFAULT_BITS_PER_CHAR: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressionRatio {
    pub original_bits: usize,
    pub encoded_bits: usize,
    /// `encoded_bits / original_bits`
    pub ratio: f64,
}

/// Sizes of `original_text` at 8 bits per character and of `encoded`.
pub fn report_ratio(original_text: &str, encoded: &EncodedOutput) -> Result<CompressionRatio> {
    report_ratio_with(original_text, encoded, DEFAULT_BITS_PER_CHAR)
}

/// Sizes of `original_text` at `bits_per_char` bits per character and of `encoded`.
pub fn report_ratio_with(
    original_text: &str,
    encoded: &EncodedOutput,
    bits_per_char: usize,
) -> Result<CompressionRatio> {
    let chars = original_text.chars().count();
    let original_bits = chars
        .checked_mul(bits_per_char)
        .ok_or(HuffmanError::BitCountOverflow {
            chars,
            bits_per_char,
        })?;
    if original_bits == 0 {
        return Err(HuffmanError::ZeroOriginalSize);
    }
    let encoded_bits = encoded.len();
    Ok(CompressionRatio {
        original_bits,
        encoded_bits,
        ratio: encoded_bits as f64 / original_bits as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_all_characters() {
        let encoded = EncodedOutput::try_from("10110").unwrap();
        let report = report_ratio("a-b-c", &encoded).unwrap();
        assert_eq!(report.original_bits, 40);
        assert_eq!(report.encoded_bits, 5);
        assert!((report.ratio - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let encoded = EncodedOutput::try_from("0").unwrap();
        let report = report_ratio("é", &encoded).unwrap();
        assert_eq!(report.original_bits, 8);
    }

    #[test]
    fn test_custom_width() {
        let encoded = EncodedOutput::try_from("01").unwrap();
        let report = report_ratio_with("ab", &encoded, 16).unwrap();
        assert_eq!(report.original_bits, 32);
    }

    #[test]
    fn test_oversized_width_overflows() {
        let encoded = EncodedOutput::try_from("01").unwrap();
        let result = report_ratio_with("ab", &encoded, usize::MAX);
        assert!(matches!(
            result,
            Err(HuffmanError::BitCountOverflow {
                chars: 2,
                bits_per_char: usize::MAX
            })
        ));
    }

    #[test]
    fn test_empty_text() {
        let result = report_ratio("", &EncodedOutput::default());
        assert!(matches!(result, Err(HuffmanError::ZeroOriginalSize)));
    }
}
