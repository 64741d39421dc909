//! Text encoding and decoding against a [`CodeTable`]
//!
//! The encoded form is a sequence of `'0'`/`'1'` symbols, one per bit. It is
//! not packed into bytes.

use crate::codes::CodeTable;
use crate::error::{HuffmanError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Concatenated codes of the alphabetic characters of a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EncodedOutput {
    bits: String,
}

impl EncodedOutput {
    /// Bits as a string of `'0'` and `'1'`
    pub fn as_str(&self) -> &str {
        &self.bits
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bits as booleans, `true` for `'1'`
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.bytes().map(|b| b == b'1')
    }
}

impl TryFrom<String> for EncodedOutput {
    type Error = HuffmanError;

    fn try_from(bits: String) -> Result<Self> {
        if let Some((position, symbol)) = bits.chars().enumerate().find(|&(_, c)| c != '0' && c != '1') {
            return Err(HuffmanError::InvalidBit { position, symbol });
        }
        Ok(Self { bits })
    }
}

impl TryFrom<&str> for EncodedOutput {
    type Error = HuffmanError;

    fn try_from(bits: &str) -> Result<Self> {
        Self::try_from(bits.to_string())
    }
}

impl From<EncodedOutput> for String {
    fn from(output: EncodedOutput) -> Self {
        output.bits
    }
}

impl fmt::Display for EncodedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }
}

/// Replace every character of `text` that has a code with that code.
/// Characters without one are skipped.
pub fn encode(text: &str, table: &CodeTable) -> EncodedOutput {
    let mut bits = String::new();
    let mut skipped = 0usize;
    for c in text.chars() {
        match table.get(c) {
            Some(code) => bits.push_str(code),
            None => skipped += 1,
        }
    }
    tracing::debug!(bits = bits.len(), skipped, "encoded text");
    EncodedOutput { bits }
}

/// Reverse [`encode`], yielding the alphabetic characters of the original
/// text in order.
pub fn decode(encoded: &EncodedOutput, table: &CodeTable) -> Result<String> {
    let lookup: HashMap<&str, char> = table.iter().map(|(c, code)| (code, c)).collect();
    let bits = encoded.as_str();

    let mut output = String::new();
    let mut start = 0;
    for end in 1..=bits.len() {
        if let Some(&symbol) = lookup.get(&bits[start..end]) {
            output.push(symbol);
            start = end;
        }
    }

    if start != bits.len() {
        return Err(HuffmanError::TruncatedCode {
            trailing: bits.len() - start,
        });
    }
    Ok(output)
}
