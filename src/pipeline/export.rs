use super::{PipelineOutput, ScaleResult};
use crate::config::CannyConfig;
use crate::diagnostics::{EdgeCount, ImageReport, ScaleReport};
use crate::error::Result;
use crate::image::io::{save_grayscale_u8, save_rgb, write_json_file};
use crate::image::{normalize_to_u8, GrayImageU8};
use crate::visualize::{mask_threshold, render_quantized_directions};
use image::RgbImage;
use log::debug;
use std::path::Path;

/// Byte step between direction classes in the quantized grayscale image.
const CLASS_GRAY_STEP: u8 = 85;

/// A named 8-bit image ready to be written as `<name>.<ext>`.
#[derive(Clone, Debug)]
pub struct Artifact {
    pub name: String,
    pub image: GrayImageU8,
}

/// Scale label used in artifact names; always keeps a decimal point
/// (`0.5`, `1.0`, `2.0`).
pub fn format_sigma(sigma: f64) -> String {
    format!("{sigma:?}")
}

impl ScaleResult {
    /// Grayscale stage images of this scale, named after `base`.
    pub fn artifacts(&self, base: &str) -> Vec<Artifact> {
        let s = format_sigma(self.sigma);
        let mut out = vec![
            Artifact {
                name: format!("{base}_fx_{s}"),
                image: normalize_to_u8(&self.gradient.fx),
            },
            Artifact {
                name: format!("{base}_fy_{s}"),
                image: normalize_to_u8(&self.gradient.fy),
            },
            Artifact {
                name: format!("{base}_magnitude_{s}"),
                image: self.magnitude.bytes.clone(),
            },
            Artifact {
                name: format!("{base}_quantized_{s}"),
                image: self.quantized.map(|label| label.saturating_mul(CLASS_GRAY_STEP)),
            },
            Artifact {
                name: format!("{base}_suppressed_{s}"),
                image: self.suppressed.bytes.clone(),
            },
        ];
        out.extend(self.edges.iter().map(|e| Artifact {
            name: format!(
                "{base}_edges_{s}_{}_{}",
                e.thresholds.high, e.thresholds.low
            ),
            image: e.edges.clone(),
        }));
        out
    }

    /// Colour plot of the direction classes, masked below
    /// `mask_fraction * max(magnitude)`.
    pub fn direction_plot(&self, mask_fraction: f64) -> Result<RgbImage> {
        let mask = mask_threshold(&self.magnitude.values, mask_fraction);
        render_quantized_directions(&self.quantized, &self.magnitude.values, mask)
    }

    pub fn report(&self) -> ScaleReport {
        ScaleReport {
            sigma: self.sigma,
            kernel: self.kernel_size,
            magnitude_max: self.magnitude.max_value(),
            suppressed_nonzero: self.suppressed.values.data.iter().filter(|&&v| v != 0.0).count(),
            edges: self
                .edges
                .iter()
                .map(|e| EdgeCount {
                    thresholds: e.thresholds,
                    edge_pixels: e.edges.count_nonzero(),
                })
                .collect(),
            timing: self.timing.clone(),
        }
    }
}

/// Write every artifact and direction plot of `output` into `out_dir`, plus
/// `<base>_report.json` when the config asks for it.
pub fn save_image_outputs(
    output: &PipelineOutput,
    input: &Path,
    base: &str,
    out_dir: &Path,
    ext: &str,
    config: &CannyConfig,
) -> Result<ImageReport> {
    let ext = ext.trim_start_matches('.');
    let mut written = 0usize;

    for scale in &output.scales {
        for artifact in scale.artifacts(base) {
            let path = out_dir.join(format!("{}.{ext}", artifact.name));
            save_grayscale_u8(&artifact.image, &path)?;
            written += 1;
        }
        let plot = scale.direction_plot(config.mask_fraction)?;
        let plot_path = out_dir.join(format!(
            "{base}_quantized_plot_{}.{ext}",
            format_sigma(scale.sigma)
        ));
        save_rgb(&plot, &plot_path)?;
        written += 1;
    }

    let report = ImageReport {
        input: input.display().to_string(),
        width: output.width,
        height: output.height,
        scales: output.scales.iter().map(ScaleResult::report).collect(),
        artifacts_written: written,
        total_ms: output.elapsed_ms,
    };
    if config.write_report {
        write_json_file(&out_dir.join(format!("{base}_report.json")), &report)?;
    }
    debug!("{base}: wrote {written} images to {}", out_dir.display());
    Ok(report)
}
