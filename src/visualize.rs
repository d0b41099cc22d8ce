//! Colour rendering of quantized gradient directions.
//!
//! Each of the four direction classes gets a fixed colour sampled from the
//! jet colormap; pixels whose magnitude falls below a mask threshold are drawn
//! as white background so flat regions do not show arbitrary classes. A
//! legend strip on the right repeats the four colours from class 0 (top) to
//! class 3 (bottom).
use crate::edges::DirectionClass;
use crate::error::Result;
use crate::image::{ensure_same_shape, ImageBuf, ImageF64};
use image::{Rgb, RgbImage};

/// Jet colormap sampled at 0, 1/3, 2/3 and 1.
pub const CLASS_COLORS: [Rgb<u8>; 4] = [
    Rgb([0, 0, 128]),
    Rgb([0, 212, 255]),
    Rgb([255, 230, 0]),
    Rgb([128, 0, 0]),
];
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

const LEGEND_GAP: u32 = 4;
const LEGEND_WIDTH: u32 = 12;

pub fn class_color(class: DirectionClass) -> Rgb<u8> {
    CLASS_COLORS[class.label() as usize]
}

/// Mask threshold used by the pipeline: a fraction of the peak magnitude, or
/// zero for an all-zero field.
pub fn mask_threshold(magnitude: &ImageF64, fraction: f64) -> f64 {
    let peak = magnitude.data.iter().copied().fold(0.0, f64::max);
    if peak > 0.0 {
        fraction * peak
    } else {
        0.0
    }
}

/// Render `quantized` (labels 0..=3) with pixels of `magnitude < mask` masked.
pub fn render_quantized_directions(
    quantized: &ImageBuf<u8>,
    magnitude: &ImageF64,
    mask: f64,
) -> Result<RgbImage> {
    ensure_same_shape(quantized, magnitude, "direction plot")?;
    let w = quantized.w as u32;
    let h = quantized.h as u32;
    let legend = if h > 0 { LEGEND_GAP + LEGEND_WIDTH } else { 0 };
    let mut out = RgbImage::from_pixel(w + legend, h, BACKGROUND);

    for y in 0..quantized.h {
        for x in 0..quantized.w {
            if magnitude.get(x, y) < mask {
                continue;
            }
            let class = DirectionClass::from_label(quantized.get(x, y));
            out.put_pixel(x as u32, y as u32, class_color(class));
        }
    }

    for y in 0..h {
        let band = ((y as u64 * 4) / h as u64).min(3) as usize;
        for x in w + LEGEND_GAP..w + legend {
            out.put_pixel(x, y, CLASS_COLORS[band]);
        }
    }
    Ok(out)
}
