//! Configuration structures for the extraction pipelines.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration for the catat pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatatConfig {
    /// Transcript extraction configuration.
    pub transcript: TranscriptConfig,

    /// Receipt extraction configuration.
    pub receipt: ReceiptConfig,
}

impl Default for CatatConfig {
    fn default() -> Self {
        Self {
            transcript: TranscriptConfig::default(),
            receipt: ReceiptConfig::default(),
        }
    }
}

/// Transcript extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Maximum description length in characters.
    pub max_description_len: usize,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            max_description_len: 100,
        }
    }
}

/// Receipt extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptConfig {
    /// Oldest plausible year for a printed receipt date. Earlier dates are
    /// treated as OCR noise and replaced by today.
    pub min_year: i32,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self { min_year: 2020 }
    }
}

impl CatatConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = CatatConfig::default();
        assert_eq!(config.transcript.max_description_len, 100);
        assert_eq!(config.receipt.min_year, 2020);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: CatatConfig = serde_json::from_str(r#"{"receipt":{"min_year":2023}}"#).unwrap();
        assert_eq!(config.receipt.min_year, 2023);
        assert_eq!(config.transcript.max_description_len, 100);
    }
}
