use super::{PipelineOutput, ScaleResult, ThresholdEdges};
use crate::config::CannyConfig;
use crate::diagnostics::{elapsed_ms, TimingBreakdown};
use crate::edges::{
    apply_masks, calculate_filter_size, calculate_gradient, compute_gradient_direction,
    compute_magnitude, quantize, suppress, trace,
};
use crate::error::Result;
use crate::image::ImageU8;
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Run every stage for a single smoothing scale.
pub fn run_scale(image: &ImageU8<'_>, sigma: f64, config: &CannyConfig) -> Result<ScaleResult> {
    let mut timing = TimingBreakdown::default();

    let kernel_size = calculate_filter_size(sigma, config.truncation)?;
    let kernels = timing.measure("kernel", || {
        calculate_gradient(kernel_size.size, sigma, config.scale_factor)
    })?;
    debug!(
        "sigma={sigma}: kernel {}x{} (half={})",
        kernel_size.size, kernel_size.size, kernel_size.half
    );

    let gradient = timing.measure("gradient", || apply_masks(image, &kernels));
    let magnitude = timing.measure("magnitude", || {
        compute_magnitude(&gradient.fx, &gradient.fy)
    })?;
    let direction = timing.measure("direction", || {
        compute_gradient_direction(&gradient.fx, &gradient.fy)
    })?;
    let quantized = timing.measure("quantize", || quantize(&direction.degrees));
    let suppressed = timing.measure("nms", || suppress(&magnitude.values, &quantized))?;

    let edges = timing.measure("hysteresis", || {
        config
            .thresholds
            .iter()
            .map(|&pair| ThresholdEdges {
                thresholds: pair,
                edges: trace(&suppressed.values, pair.high, pair.low),
            })
            .collect::<Vec<_>>()
    });
    debug!(
        "sigma={sigma}: {:.2} ms over {} stages",
        timing.total_ms,
        timing.stages.len()
    );

    Ok(ScaleResult {
        sigma,
        kernel_size,
        kernels,
        gradient,
        magnitude,
        direction,
        quantized,
        suppressed,
        edges,
        timing,
    })
}

/// Validate `config` and run all of its scales on `image`.
pub fn run_pipeline(image: &ImageU8<'_>, config: &CannyConfig) -> Result<PipelineOutput> {
    config.validate()?;
    let start = Instant::now();
    let scales = config
        .sigmas
        .par_iter()
        .map(|&sigma| run_scale(image, sigma, config))
        .collect::<Result<Vec<_>>>()?;
    Ok(PipelineOutput {
        width: image.w,
        height: image.h,
        scales,
        elapsed_ms: elapsed_ms(start),
    })
}
