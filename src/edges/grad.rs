//! Gaussian-derivative gradients with magnitude and direction fields.
//!
//! - `apply_masks` convolves the input with the fixed-point `Gx`/`Gy` kernels
//!   and descales by the kernel scale factor (round half to even).
//! - `compute_magnitude` returns `hypot(fx, fy)` plus its min-max byte view.
//! - `compute_gradient_direction` returns `atan2(fy, fx)` in degrees wrapped to
//!   [0, 360) plus a byte view `round(deg / 360 * 255)`.
//!
//! Complexity: O(W·H·N²) for the masks, O(W·H) for the derived fields.
use super::convolve::convolve;
use super::kernel::GradientKernels;
use crate::error::Result;
use crate::image::{ensure_same_shape, normalize_to_u8, GrayImageU8, ImageF64, ImageI32, ImageU8};

/// Horizontal and vertical gradient estimates, co-indexed with the input.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientPair {
    /// Response to `Gx` (x = column offset)
    pub fx: ImageI32,
    /// Response to `Gy` (y = row offset)
    pub fy: ImageI32,
}

/// A float field paired with its min-max byte visualization.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedField {
    pub values: ImageF64,
    pub bytes: GrayImageU8,
}

impl NormalizedField {
    pub fn new(values: ImageF64) -> Self {
        let bytes = normalize_to_u8(&values);
        Self { values, bytes }
    }

    pub fn max_value(&self) -> f64 {
        self.values.data.iter().copied().fold(0.0, f64::max)
    }
}

/// Gradient direction in degrees and as a byte image.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionField {
    /// Angle of `(fx, fy)` in degrees, within [0, 360)
    pub degrees: ImageF64,
    pub bytes: GrayImageU8,
}

/// Convolve with both derivative kernels and descale to integer gradients.
pub fn apply_masks(image: &ImageU8<'_>, kernels: &GradientKernels) -> GradientPair {
    let wide = image.to_i32();
    let scale = f64::from(kernels.scale_factor);
    let descale = |v: i32| (f64::from(v) / scale).round_ties_even() as i32;

    let fx = convolve(&wide, &kernels.gx).map(descale);
    let fy = convolve(&wide, &kernels.gy).map(descale);
    log::debug!(
        "apply_masks: {}x{} image, kernel {}x{}",
        image.w,
        image.h,
        kernels.size(),
        kernels.size()
    );
    GradientPair { fx, fy }
}

/// Euclidean norm of the gradient; zero exactly where `fx == fy == 0`.
pub fn compute_magnitude(fx: &ImageI32, fy: &ImageI32) -> Result<NormalizedField> {
    ensure_same_shape(fx, fy, "gradient magnitude")?;
    let values = ImageF64::from_fn(fx.w, fx.h, |x, y| {
        f64::from(fx.get(x, y)).hypot(f64::from(fy.get(x, y)))
    });
    Ok(NormalizedField::new(values))
}

/// Gradient direction in degrees, wrapped into [0, 360).
pub fn compute_gradient_direction(fx: &ImageI32, fy: &ImageI32) -> Result<DirectionField> {
    ensure_same_shape(fx, fy, "gradient direction")?;
    let degrees = ImageF64::from_fn(fx.w, fx.h, |x, y| {
        let angle = f64::from(fy.get(x, y)).atan2(f64::from(fx.get(x, y)));
        wrap_degrees(angle.to_degrees())
    });
    let bytes = degrees.map(|d| (d / 360.0 * 255.0).round_ties_even().clamp(0.0, 255.0) as u8);
    Ok(DirectionField { degrees, bytes })
}

#[inline]
pub(crate) fn wrap_degrees(deg: f64) -> f64 {
    (deg + 360.0) % 360.0
}
