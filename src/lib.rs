#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod error;
pub mod image;
pub mod pipeline;

// Stage-level building blocks and collaborators.
pub mod diagnostics;
pub mod edges;
pub mod visualize;

// --- High-level re-exports -------------------------------------------------

pub use crate::config::{CannyConfig, ThresholdPair};
pub use crate::error::{CannyError, Result};
pub use crate::pipeline::{run_pipeline, run_scale, PipelineOutput, ScaleResult};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use canny_scale::prelude::*;
///
/// # fn main() -> canny_scale::Result<()> {
/// let (w, h) = (64usize, 48usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8::new(w, h, w, &gray)?;
///
/// let output = run_pipeline(&img, &CannyConfig::default())?;
/// println!("scales={} elapsed_ms={:.3}", output.scales.len(), output.elapsed_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8};
    pub use crate::{run_pipeline, CannyConfig, ThresholdPair};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::edges::{
        apply_masks, calculate_filter_size, calculate_gradient, compute_gradient_direction,
        compute_magnitude, convolve, quantize, quantize_angle, suppress, trace, DirectionClass,
        DirectionField, GradientKernels, GradientPair, KernelSize, NormalizedField,
    };
    pub use crate::image::{normalize_to_u8, ImageF64, ImageI32};
    pub use crate::visualize::render_quantized_directions;
}
