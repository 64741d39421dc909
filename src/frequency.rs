//! Symbol frequency counting
//!
//! Only alphabetic characters are counted. Case is preserved, so `'a'` and
//! `'A'` are separate symbols.

use crate::error::{HuffmanError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Counts per distinct alphabetic symbol, kept in order of first appearance.
///
/// Every entry has a count of at least one. The order is what makes tree
/// construction reproducible for a given input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFrequencyTable")]
pub struct FrequencyTable {
    entries: Vec<(char, u64)>,
}

#[derive(Deserialize)]
struct RawFrequencyTable {
    entries: Vec<(char, u64)>,
}

impl TryFrom<RawFrequencyTable> for FrequencyTable {
    type Error = HuffmanError;

    /// Entries must be distinct alphabetic symbols with non-zero counts. An
    /// empty list is let through and rejected by tree construction.
    fn try_from(raw: RawFrequencyTable) -> Result<Self> {
        let mut seen = HashSet::with_capacity(raw.entries.len());
        for &(symbol, count) in &raw.entries {
            if !symbol.is_alphabetic() {
                return Err(HuffmanError::InvalidFrequencyTable(format!(
                    "symbol {symbol:?} is not alphabetic"
                )));
            }
            if count == 0 {
                return Err(HuffmanError::InvalidFrequencyTable(format!(
                    "symbol {symbol:?} has a zero count"
                )));
            }
            if !seen.insert(symbol) {
                return Err(HuffmanError::InvalidFrequencyTable(format!(
                    "symbol {symbol:?} appears more than once"
                )));
            }
        }
        Ok(Self {
            entries: raw.entries,
        })
    }
}

impl FrequencyTable {
    /// Count the alphabetic characters of `text`.
    pub fn from_text(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let mut slots: HashMap<char, usize> = HashMap::new();
        let mut entries: Vec<(char, u64)> = Vec::new();
        for c in text.chars().filter(|c| c.is_alphabetic()) {
            let slot = *slots.entry(c).or_insert_with(|| {
                entries.push((c, 0));
                entries.len() - 1
            });
            entries[slot].1 += 1;
        }

        if entries.is_empty() {
            return Err(HuffmanError::NoAlphabeticContent);
        }

        tracing::debug!(symbols = entries.len(), "counted symbol frequencies");
        Ok(Self { entries })
    }

    /// Count for `symbol`, if it appeared
    pub fn get(&self, symbol: char) -> Option<u64> {
        self.entries
            .iter()
            .find(|&&(c, _)| c == symbol)
            .map(|&(_, count)| count)
    }

    /// Symbols with their counts, in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of alphabetic characters seen.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| count).sum()
    }
}

/// Shorthand for [`FrequencyTable::from_text`].
pub fn count_frequencies(text: &str) -> Result<FrequencyTable> {
    FrequencyTable::from_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_letters_only() {
        let table = count_frequencies("a1b2 a!").unwrap();
        assert_eq!(table.get('a'), Some(2));
        assert_eq!(table.get('b'), Some(1));
        assert_eq!(table.get('1'), None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_case_sensitive() {
        let table = count_frequencies("aAa").unwrap();
        assert_eq!(table.get('a'), Some(2));
        assert_eq!(table.get('A'), Some(1));
    }

    #[test]
    fn test_first_appearance_order() {
        let table = count_frequencies("cabbac").unwrap();
        let order: Vec<char> = table.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec!['c', 'a', 'b']);
    }

    #[test]
    fn test_unicode_letters() {
        let table = count_frequencies("été ß").unwrap();
        assert_eq!(table.get('é'), Some(2));
        assert_eq!(table.get('ß'), Some(1));
    }

    #[test]
    fn test_deserialize_roundtrip() {
        let table = count_frequencies("banana").unwrap();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"entries":[["b",1],["a",3],["n",2]]}"#);
        let parsed: FrequencyTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn test_deserialize_rejects_zero_count() {
        let err = serde_json::from_str::<FrequencyTable>(r#"{"entries":[["a",0]]}"#).unwrap_err();
        assert!(err.to_string().contains("zero count"));
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let err = serde_json::from_str::<FrequencyTable>(r#"{"entries":[["a",1],["a",2]]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_deserialize_rejects_non_alphabetic() {
        let result = serde_json::from_str::<FrequencyTable>(r#"{"entries":[["7",1]]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(count_frequencies(""), Err(HuffmanError::EmptyInput)));
    }

    #[test]
    fn test_no_letters() {
        assert!(matches!(
            count_frequencies("123 456"),
            Err(HuffmanError::NoAlphabeticContent)
        ));
    }
}
