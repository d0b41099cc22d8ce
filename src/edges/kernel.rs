//! Derivative-of-Gaussian kernel synthesis.
//!
//! The support radius follows from the smoothing scale `sigma` and a
//! truncation probability `t`: `half = round(sqrt(-ln(t) * 2 * sigma^2))`,
//! giving an odd side `2 * half + 1`. Weights are the analytic partials of
//! `G(x, y) = exp(-(x^2 + y^2) / (2 sigma^2))`, quantized to integers by a
//! fixed-point `scale_factor` so convolution can run in integer arithmetic and
//! be descaled exactly afterwards.
//!
//! Matrix layout: row index is the y offset, column index the x offset, both
//! measured from the kernel centre. With that layout `gy` is the transpose of
//! `gx`.
use crate::error::{CannyError, Result};
use nalgebra::DMatrix;
use serde::Serialize;

/// Fixed-point scale applied to real-valued kernel weights.
pub const DEFAULT_SCALE_FACTOR: i32 = 255;
/// Smallest smoothing scale accepted by the kernel builders.
pub const MIN_SIGMA: f64 = 0.5;
/// Largest kernel half-width; with `t = 0.3` this admits sigma up to ~165.
pub const MAX_KERNEL_HALF: usize = 256;
/// Largest kernel side, `2 * MAX_KERNEL_HALF + 1`.
pub const MAX_KERNEL_SIZE: usize = 2 * MAX_KERNEL_HALF + 1;

/// Kernel side length and half-width, `size == 2 * half + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct KernelSize {
    pub size: usize,
    pub half: usize,
}

/// Integer `Gx`/`Gy` pair together with the scale they were quantized with.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientKernels {
    pub gx: DMatrix<i32>,
    pub gy: DMatrix<i32>,
    pub scale_factor: i32,
}

impl GradientKernels {
    pub fn size(&self) -> usize {
        self.gx.nrows()
    }
}

pub fn validate_sigma(sigma: f64) -> Result<()> {
    if !sigma.is_finite() || sigma < MIN_SIGMA {
        return Err(CannyError::InvalidParameter(format!(
            "sigma must be >= {MIN_SIGMA}, got {sigma}"
        )));
    }
    Ok(())
}

pub fn validate_truncation(t: f64) -> Result<()> {
    if !(t > 0.0 && t < 1.0) {
        return Err(CannyError::InvalidParameter(format!(
            "truncation probability must lie in (0, 1), got {t}"
        )));
    }
    Ok(())
}

pub fn validate_scale_factor(scale_factor: i32) -> Result<()> {
    if scale_factor <= 0 {
        return Err(CannyError::InvalidParameter(format!(
            "scale factor must be positive, got {scale_factor}"
        )));
    }
    Ok(())
}

/// Kernel support for smoothing scale `sigma` truncated at probability `t`.
pub fn calculate_filter_size(sigma: f64, t: f64) -> Result<KernelSize> {
    validate_sigma(sigma)?;
    validate_truncation(t)?;
    let half = (-t.ln() * 2.0 * sigma * sigma).sqrt().round_ties_even();
    if !half.is_finite() || half > MAX_KERNEL_HALF as f64 {
        return Err(CannyError::InvalidParameter(format!(
            "sigma {sigma} with truncation {t} needs a kernel half-width of {half}, \
             above the limit of {MAX_KERNEL_HALF}"
        )));
    }
    let half = half as usize;
    Ok(KernelSize {
        size: 2 * half + 1,
        half,
    })
}

/// Build the fixed-point `Gx`, `Gy` kernels for a filter of side `size`.
///
/// The half-width is `size / 2`, so an even `size` yields a kernel of side
/// `size + 1`; callers normally pass `KernelSize::size`.
pub fn calculate_gradient(size: usize, sigma: f64, scale_factor: i32) -> Result<GradientKernels> {
    validate_sigma(sigma)?;
    validate_scale_factor(scale_factor)?;
    if size > MAX_KERNEL_SIZE {
        return Err(CannyError::InvalidParameter(format!(
            "kernel side {size} exceeds the limit of {MAX_KERNEL_SIZE}"
        )));
    }

    let half = (size / 2) as isize;
    let n = (2 * half + 1) as usize;
    let sigma2 = sigma * sigma;
    let scale = f64::from(scale_factor);

    let weight = |offset: isize, r: usize, c: usize| -> i32 {
        let y = r as isize - half;
        let x = c as isize - half;
        let (xf, yf) = (x as f64, y as f64);
        let g = (-(xf * xf + yf * yf) / (2.0 * sigma2)).exp();
        let d = -(offset as f64 / sigma2) * g;
        (d * scale).round_ties_even() as i32
    };

    let gx = DMatrix::from_fn(n, n, |r, c| weight(c as isize - half, r, c));
    let gy = DMatrix::from_fn(n, n, |r, c| weight(r as isize - half, r, c));

    Ok(GradientKernels {
        gx,
        gy,
        scale_factor,
    })
}
