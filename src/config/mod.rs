//! JSON-backed configuration for the pipeline and its tools.
pub mod canny;
pub mod stages;

pub use canny::{load_canny_config, CannyConfig, ThresholdPair};
pub use stages::{load_stage_tool_config, StageOutputConfig, StageToolConfig};
