//! Export settings read from `driverent.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "driverent.toml";

/// Where and what the exporter writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the artifacts are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Write the PDF confirmation
    #[serde(default = "default_enabled")]
    pub pdf: bool,
    /// Write the XLSX row
    #[serde(default = "default_enabled")]
    pub xlsx: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_enabled() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            output_dir: default_output_dir(),
            pdf: default_enabled(),
            xlsx: default_enabled(),
        }
    }
}
