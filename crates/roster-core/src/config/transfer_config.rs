//! Import and export configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EXPORT_PATH;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ImportConfig {
    /// TSV file bulk-imported whenever the store is opened.
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Export target used when the caller does not name one.
    pub default_path: Option<PathBuf>,
}

impl ExportConfig {
    /// Returns the effective export path, defaulting to `new_student.tsv`.
    pub fn effective_default_path(&self) -> PathBuf {
        self.default_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH))
    }
}
