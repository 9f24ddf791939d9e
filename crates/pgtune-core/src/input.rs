//! Caller-supplied hardware description and its validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{GB, MAX_MEMORY_GB};
use crate::error::{DeriveError, Result};

/// Documentation version used when the caller does not name one.
pub const DEFAULT_DB_VERSION: &str = "13";

/// Storage medium backing the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    #[default]
    Ssd,
    Hdd,
}

impl StorageType {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageType::Ssd => "ssd",
            StorageType::Hdd => "hdd",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageType {
    type Err = DeriveError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ssd" => Ok(StorageType::Ssd),
            "hdd" => Ok(StorageType::Hdd),
            other => Err(DeriveError::invalid(
                "storageType",
                format!("expected 'ssd' or 'hdd', got '{other}'"),
            )),
        }
    }
}

/// Inputs to a derivation. Never mutated by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInput {
    /// Opaque version token; only used to build documentation links.
    #[serde(default = "default_db_version")]
    pub db_version: String,
    pub cpu_cores: u32,
    #[serde(rename = "memoryGB")]
    pub memory_gb: f64,
    #[serde(default)]
    pub storage_type: StorageType,
}

fn default_db_version() -> String {
    DEFAULT_DB_VERSION.to_string()
}

impl ConfigInput {
    pub fn new(cpu_cores: u32, memory_gb: f64, storage_type: StorageType) -> Self {
        Self {
            db_version: default_db_version(),
            cpu_cores,
            memory_gb,
            storage_type,
        }
    }

    pub fn with_db_version(mut self, db_version: impl Into<String>) -> Self {
        self.db_version = db_version.into();
        self
    }

    /// Reject inputs the formulas would turn into NaN, infinity, or zeros.
    pub fn validate(&self) -> Result<()> {
        if self.cpu_cores < 1 {
            return Err(DeriveError::invalid("cpuCores", "must be at least 1"));
        }
        if !self.memory_gb.is_finite() {
            return Err(DeriveError::invalid(
                "memoryGB",
                format!("must be a finite number, got {}", self.memory_gb),
            ));
        }
        if self.memory_gb <= 0.0 {
            return Err(DeriveError::invalid(
                "memoryGB",
                format!("must be positive, got {}", self.memory_gb),
            ));
        }
        if self.memory_gb > MAX_MEMORY_GB {
            return Err(DeriveError::invalid(
                "memoryGB",
                format!(
                    "must not exceed {MAX_MEMORY_GB} (8 PiB), the largest size whose byte \
                     counts stay exact; got {}",
                    self.memory_gb
                ),
            ));
        }
        Ok(())
    }

    /// Total memory in bytes.
    pub fn memory_bytes(&self) -> f64 {
        self.memory_gb * GB
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_parse() {
        assert_eq!("ssd".parse::<StorageType>().unwrap(), StorageType::Ssd);
        assert_eq!(" HDD ".parse::<StorageType>().unwrap(), StorageType::Hdd);
    }

    #[test]
    fn test_storage_parse_rejects_unknown() {
        let err = "nvme".parse::<StorageType>().unwrap_err();
        assert_eq!(err.field(), "storageType");
        assert!(err.to_string().contains("nvme"));
    }

    #[test]
    fn test_validate_accepts_fractional_memory() {
        assert!(ConfigInput::new(1, 0.5, StorageType::Hdd).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_cores() {
        let err = ConfigInput::new(0, 8.0, StorageType::Ssd)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "cpuCores");
    }

    #[test]
    fn test_validate_rejects_bad_memory() {
        for memory in [0.0, -4.0, f64::NAN, f64::INFINITY, MAX_MEMORY_GB * 2.0] {
            let err = ConfigInput::new(4, memory, StorageType::Ssd)
                .validate()
                .unwrap_err();
            assert_eq!(err.field(), "memoryGB", "memory={memory}");
        }
    }

    #[test]
    fn test_memory_cap_explains_itself() {
        assert!(ConfigInput::new(4, MAX_MEMORY_GB, StorageType::Ssd).validate().is_ok());
        let err = ConfigInput::new(4, MAX_MEMORY_GB + 1.0, StorageType::Ssd)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "memoryGB");
        assert!(err.to_string().contains("byte counts stay exact"));
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let input: ConfigInput =
            serde_json::from_str(r#"{"cpuCores": 8, "memoryGB": 32}"#).unwrap();
        assert_eq!(input.cpu_cores, 8);
        assert_eq!(input.db_version, DEFAULT_DB_VERSION);
        assert_eq!(input.storage_type, StorageType::Ssd);
    }
}
