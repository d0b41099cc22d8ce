use super::timing::TimingBreakdown;
use crate::config::ThresholdPair;
use crate::edges::KernelSize;
use serde::Serialize;

/// Summary of one image written as `<base>_report.json`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReport {
    pub input: String,
    pub width: usize,
    pub height: usize,
    pub scales: Vec<ScaleReport>,
    pub artifacts_written: usize,
    pub total_ms: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleReport {
    pub sigma: f64,
    pub kernel: KernelSize,
    pub magnitude_max: f64,
    pub suppressed_nonzero: usize,
    pub edges: Vec<EdgeCount>,
    pub timing: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeCount {
    pub thresholds: ThresholdPair,
    pub edge_pixels: usize,
}
