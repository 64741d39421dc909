//! Configuration for letter-huffman

use crate::error::{HuffmanError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Widest character size accepted by [`CompressionConfig::validate`].
pub const MAX_BITS_PER_CHAR: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    /// Size assumed for every input character when reporting ratios.
    pub bits_per_char: usize,
    /// Longest accepted input, in characters.
    pub max_input_size: usize,
    /// Upper bound on batch workers running at once.
    pub max_concurrency: usize,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            bits_per_char: 8,
            max_input_size: 100 * 1024 * 1024, // 100 M chars
            max_concurrency: 4,
        }
    }
}

impl CompressionConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Reject zero values and character sizes above [`MAX_BITS_PER_CHAR`].
    pub fn validate(&self) -> Result<()> {
        if self.bits_per_char == 0 || self.bits_per_char > MAX_BITS_PER_CHAR {
            return Err(HuffmanError::InvalidConfig(format!(
                "bits_per_char must be in 1..={MAX_BITS_PER_CHAR}"
            )));
        }
        if self.max_input_size == 0 {
            return Err(HuffmanError::InvalidConfig("max_input_size must be > 0".into()));
        }
        if self.max_concurrency == 0 {
            return Err(HuffmanError::InvalidConfig("max_concurrency must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = CompressionConfig::default();
        assert_eq!(config.bits_per_char, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CompressionConfig::from_json_str(r#"{"max_concurrency": 2}"#).unwrap();
        assert_eq!(config.max_concurrency, 2);
        assert_eq!(config.bits_per_char, 8);
    }

    #[test]
    fn test_zero_bits_rejected() {
        let result = CompressionConfig::from_json_str(r#"{"bits_per_char": 0}"#);
        assert!(matches!(result, Err(HuffmanError::InvalidConfig(_))));
    }

    #[test]
    fn test_huge_bits_rejected() {
        let json = format!(r#"{{"bits_per_char": {}}}"#, usize::MAX);
        let result = CompressionConfig::from_json_str(&json);
        assert!(matches!(result, Err(HuffmanError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = CompressionConfig::from_json_str("{not json");
        assert!(matches!(result, Err(HuffmanError::SerializationError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"bits_per_char": 16, "max_input_size": 10}}"#).unwrap();
        let config = CompressionConfig::load(file.path()).unwrap();
        assert_eq!(config.bits_per_char, 16);
        assert_eq!(config.max_input_size, 10);
        assert_eq!(config.max_concurrency, 4);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CompressionConfig::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(HuffmanError::IoError(_))));
    }
}
