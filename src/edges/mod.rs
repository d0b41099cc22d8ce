//! Edge processing stages: kernels, convolution, gradients, direction
//! quantization, non‑maximum suppression and hysteresis.
//!
//! Each stage is a pure function from the previous stage's grids to a new
//! grid of the same shape:
//!
//! - `kernel`: fixed-point derivative-of-Gaussian `Gx`/`Gy` for a scale `sigma`.
//! - `convolve`: zero-padded same-size integer correlation.
//! - `grad`: descaled `fx`/`fy`, magnitude and direction in degrees.
//! - `orientation`: 4-class direction quantization (0°, 45°, 90°, 135°).
//! - `nms`: thinning along the quantized direction.
//! - `hysteresis`: high/low threshold flood fill producing a 0/255 map.
//!
//! Design goals
//! - Numeric fidelity over speed: integer convolution with `i64` accumulation,
//!   round half to even everywhere a value is rounded.
//! - Borders: zero padding for convolution, an untouched 1‑pixel frame for NMS
//!   and hysteresis.

pub mod convolve;
pub mod grad;
pub mod hysteresis;
pub mod kernel;
pub mod nms;
pub mod orientation;

pub use convolve::convolve;
pub use grad::{
    apply_masks, compute_gradient_direction, compute_magnitude, DirectionField, GradientPair,
    NormalizedField,
};
pub use hysteresis::{ordered_thresholds, trace, EDGE};
pub use kernel::{
    calculate_filter_size, calculate_gradient, GradientKernels, KernelSize, DEFAULT_SCALE_FACTOR,
};
pub use nms::suppress;
pub use orientation::{quantize, quantize_angle, DirectionClass};
