use super::canny::CannyConfig;
use crate::error::{CannyError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config of the single-image `edge_stages` tool.
#[derive(Debug, Deserialize)]
pub struct StageToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub canny: CannyConfig,
    pub output: StageOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct StageOutputConfig {
    /// Folder receiving every stage image and the report.
    pub dir: PathBuf,
    /// Image format extension for the stage images.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Overrides the input file stem in artifact names.
    #[serde(default)]
    pub basename: Option<String>,
}

fn default_extension() -> String {
    "png".to_string()
}

pub fn load_stage_tool_config(path: &Path) -> Result<StageToolConfig> {
    let data = fs::read_to_string(path).map_err(|source| CannyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| CannyError::Json {
        path: path.to_path_buf(),
        source,
    })
}
