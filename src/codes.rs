//! Prefix-code table generation
//!
//! Codes are the root-to-leaf paths of a [`HuffmanTree`], `'0'` for a left
//! edge and `'1'` for a right edge.

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanNode, HuffmanTree};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from symbol to its non-empty, prefix-free bit string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCodeTable")]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

#[derive(Deserialize)]
struct RawCodeTable {
    codes: BTreeMap<char, String>,
}

impl TryFrom<RawCodeTable> for CodeTable {
    type Error = HuffmanError;

    fn try_from(raw: RawCodeTable) -> Result<Self> {
        if raw.codes.is_empty() {
            return Err(HuffmanError::InvalidCodeTable("no codes".into()));
        }
        for (symbol, code) in &raw.codes {
            if code.is_empty() {
                return Err(HuffmanError::InvalidCodeTable(format!(
                    "empty code for {symbol:?}"
                )));
            }
            if code.chars().any(|c| c != '0' && c != '1') {
                return Err(HuffmanError::InvalidCodeTable(format!(
                    "code {code:?} for {symbol:?} is not a bit string"
                )));
            }
        }
        let table = Self { codes: raw.codes };
        if !table.is_prefix_free() {
            return Err(HuffmanError::InvalidCodeTable("codes are not prefix-free".into()));
        }
        Ok(table)
    }
}

impl CodeTable {
    /// Walk `tree` depth-first and record the path to every leaf.
    ///
    /// A tree that is a single leaf gets the code `"0"`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        match tree.root() {
            HuffmanNode::Leaf { symbol, .. } => {
                codes.insert(*symbol, "0".to_string());
            }
            root => build_codes(root, String::new(), &mut codes),
        }
        tracing::debug!(symbols = codes.len(), "generated code table");
        Self { codes }
    }

    /// Code assigned to `symbol`, if it has one
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// True if `symbol` has a code
    pub fn contains(&self, symbol: char) -> bool {
        self.codes.contains_key(&symbol)
    }

    /// Entries in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&c, code)| (c, code.as_str()))
    }

    /// Number of coded symbols
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// True when no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        // In sorted order a prefix always lands directly before some code it prefixes.
        let mut sorted: Vec<&str> = self.codes.values().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
            .windows(2)
            .all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Encoded length in bits of a text with these symbol frequencies.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| code.len() as u64 * count))
            .sum()
    }
}

fn build_codes(node: &HuffmanNode, prefix: String, codes: &mut BTreeMap<char, String>) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            codes.insert(*symbol, prefix);
        }
        HuffmanNode::Internal { left, right, .. } => {
            let mut p = prefix.clone();
            p.push('0');
            build_codes(left, p, codes);
            let mut p = prefix;
            p.push('1');
            build_codes(right, p, codes);
        }
    }
}

/// Shorthand for [`CodeTable::from_tree`].
pub fn generate_codes(tree: &HuffmanTree) -> CodeTable {
    CodeTable::from_tree(tree)
}
