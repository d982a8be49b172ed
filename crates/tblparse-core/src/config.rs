//! Configuration types for tblparse.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, EXCEL_MAX_COLS, EXCEL_MAX_ROWS};

/// Top-level configuration loaded from YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TblparseConfig {
    /// Detection settings
    pub detection: DetectionSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

impl TblparseConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        let config: TblparseConfig =
            serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        self.detection.validate()?;

        if self.logging.log_level.trim().is_empty() {
            return Err(Error::Config("logging.log_level cannot be empty".to_string()));
        }

        Ok(())
    }
}

/// Block detection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DetectionSettings {
    /// Consecutive empty rows needed to split two blocks
    pub min_gap_rows: u32,
    /// Blocks spanning fewer rows are discarded
    pub min_block_rows: u32,
    /// Column (0-based) whose cell provides each row's label
    pub label_column: u32,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            min_gap_rows: 1,
            min_block_rows: 1,
            label_column: 0,
        }
    }
}

impl DetectionSettings {
    /// Validate detection settings.
    pub fn validate(&self) -> crate::Result<()> {
        if self.min_gap_rows == 0 {
            return Err(Error::Config(
                "detection.min_gap_rows must be > 0".to_string(),
            ));
        }

        if self.min_gap_rows > EXCEL_MAX_ROWS {
            return Err(Error::Config(format!(
                "detection.min_gap_rows must be <= {EXCEL_MAX_ROWS}"
            )));
        }

        if self.min_block_rows == 0 {
            return Err(Error::Config(
                "detection.min_block_rows must be > 0".to_string(),
            ));
        }

        if self.label_column >= EXCEL_MAX_COLS {
            return Err(Error::Config(format!(
                "detection.label_column must be < {EXCEL_MAX_COLS}"
            )));
        }

        Ok(())
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error), overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TblparseConfig::default();
        assert_eq!(config.detection.min_gap_rows, 1);
        assert_eq!(config.detection.min_block_rows, 1);
        assert_eq!(config.detection.label_column, 0);
        assert_eq!(config.logging.log_level, "info");
    }

    #[test]
    fn test_config_validation() {
        let config = TblparseConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_min_gap_rows() {
        let mut config = TblparseConfig::default();
        config.detection.min_gap_rows = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_min_gap_rows_bounded_by_sheet_height() {
        let mut config = TblparseConfig::default();
        config.detection.min_gap_rows = EXCEL_MAX_ROWS;
        assert!(config.validate().is_ok());

        config.detection.min_gap_rows = EXCEL_MAX_ROWS + 1;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let result = TblparseConfig::from_yaml("detection:\n  min_gap_rows: 4294967295\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_min_block_rows() {
        let mut config = TblparseConfig::default();
        config.detection.min_block_rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_label_column() {
        let mut config = TblparseConfig::default();
        config.detection.label_column = EXCEL_MAX_COLS;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_log_level() {
        let mut config = TblparseConfig::default();
        config.logging.log_level = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
detection:
  min_gap_rows: 2
  min_block_rows: 3
  label_column: 1

logging:
  log_level: debug
"#;

        let config = TblparseConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.detection.min_gap_rows, 2);
        assert_eq!(config.detection.min_block_rows, 3);
        assert_eq!(config.detection.label_column, 1);
        assert_eq!(config.logging.log_level, "debug");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = TblparseConfig::from_yaml("detection:\n  min_gap_rows: 2\n").unwrap();
        assert_eq!(config.detection.min_gap_rows, 2);
        assert_eq!(config.detection.min_block_rows, 1);
        assert_eq!(config.logging.log_level, "info");
    }

    #[test]
    fn test_invalid_yaml_values_rejected() {
        let result = TblparseConfig::from_yaml("detection:\n  min_gap_rows: 0\n");
        assert!(matches!(result, Err(Error::Config(_))));

        let result = TblparseConfig::from_yaml("detection:\n  min_gap_rows: many\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = TblparseConfig::from_file("/nonexistent/tblparse.yaml");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
