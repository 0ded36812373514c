use serde::{Deserialize, Serialize};

use crate::duration::DEFAULT_FRAME_RATE;

/// Top-level configuration loaded from `dubrank.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DubrankConfig {
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
}

/// Which catalog to load and the frame rate its deltas were timed at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CatalogConfig {
    pub path: Option<String>,
    pub frame_rate: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

/// How comparison results are printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_unselected: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            show_unselected: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Table,
    Json,
}
