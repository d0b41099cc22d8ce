//! Multi-scale edge pipeline driving every stage for one image.
//!
//! For each configured `sigma` the pipeline synthesises the derivative
//! kernels, computes gradients, magnitude and direction, quantizes the
//! direction, thins the magnitude and runs hysteresis once per threshold pair.
//! Scales are independent and run in parallel; results keep the configured
//! order.
//!
//! Typical usage:
//! ```no_run
//! use canny_scale::config::CannyConfig;
//! use canny_scale::image::io::load_grayscale_image;
//! use canny_scale::pipeline::run_pipeline;
//! use std::path::Path;
//!
//! # fn main() -> canny_scale::error::Result<()> {
//! let gray = load_grayscale_image(Path::new("lena.png"))?;
//! let output = run_pipeline(&gray.as_view(), &CannyConfig::default())?;
//! for scale in &output.scales {
//!     println!("sigma={} edges={}", scale.sigma, scale.edges[0].edges.count_nonzero());
//! }
//! # Ok(())
//! # }
//! ```

// Stages per scale
// - Kernel: support from (sigma, truncation), fixed-point Gx/Gy.
// - Gradient: zero-padded integer correlation, descaled fx/fy.
// - Fields: magnitude (hypot) and direction (degrees in [0, 360)).
// - Quantize: 4 direction classes.
// - NMS: thin magnitude along the class axis.
// - Hysteresis: one binary map per threshold pair.
//
// Submodules
// - `run`: stage execution and result assembly.
// - `export`: artifact naming, image/plot/report persistence.

mod export;
mod run;

pub use export::{format_sigma, save_image_outputs, Artifact};
pub use run::{run_pipeline, run_scale};

use crate::config::ThresholdPair;
use crate::diagnostics::TimingBreakdown;
use crate::edges::{DirectionField, GradientKernels, GradientPair, KernelSize, NormalizedField};
use crate::image::{GrayImageU8, ImageBuf};

/// Edge map for one threshold pair.
#[derive(Clone, Debug)]
pub struct ThresholdEdges {
    /// Thresholds as configured (before clamping and ordering)
    pub thresholds: ThresholdPair,
    pub edges: GrayImageU8,
}

/// Every intermediate field of one scale.
#[derive(Clone, Debug)]
pub struct ScaleResult {
    pub sigma: f64,
    pub kernel_size: KernelSize,
    pub kernels: GradientKernels,
    pub gradient: GradientPair,
    pub magnitude: NormalizedField,
    pub direction: DirectionField,
    /// Direction class labels 0..=3
    pub quantized: ImageBuf<u8>,
    pub suppressed: NormalizedField,
    pub edges: Vec<ThresholdEdges>,
    pub timing: TimingBreakdown,
}

/// Results of all scales for one image, in configured order.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub width: usize,
    pub height: usize,
    pub scales: Vec<ScaleResult>,
    pub elapsed_ms: f64,
}
