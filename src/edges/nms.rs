//! Non‑maximum suppression on gradient magnitude with direction alignment.
//!
//! Each interior pixel is compared with its two neighbours along the axis of
//! its quantized gradient direction and survives only if it is not smaller
//! than either of them (ties keep the pixel, so plateaus stay two pixels wide
//! rather than vanishing). Everything else becomes zero.
//!
//! The outermost 1‑pixel frame is never evaluated and stays zero, which keeps
//! neighbour lookup free of bounds checks.
use super::grad::NormalizedField;
use super::orientation::DirectionClass;
use crate::error::Result;
use crate::image::{ensure_same_shape, ImageBuf, ImageF64, ImageView};

/// Thin `magnitude` along the directions in `quantized` (labels 0..=3).
pub fn suppress(magnitude: &ImageF64, quantized: &ImageBuf<u8>) -> Result<NormalizedField> {
    ensure_same_shape(magnitude, quantized, "non-maxima suppression")?;
    let w = magnitude.w;
    let h = magnitude.h;
    let mut out = ImageF64::new(w, h);
    if w < 3 || h < 3 {
        return Ok(NormalizedField::new(out));
    }

    let mut kept = 0usize;
    for y in 1..h - 1 {
        let mag_rows = [
            magnitude.row(y - 1),
            magnitude.row(y),
            magnitude.row(y + 1),
        ];
        let q_row = quantized.row(y);
        for x in 1..w - 1 {
            let mag = mag_rows[1][x];
            let [(dx1, dy1), (dx2, dy2)] = DirectionClass::from_label(q_row[x]).neighbor_offsets();
            let n1 = mag_rows[(1 + dy1) as usize][(x as isize + dx1) as usize];
            let n2 = mag_rows[(1 + dy2) as usize][(x as isize + dx2) as usize];
            if mag >= n1 && mag >= n2 {
                out.set(x, y, mag);
                kept += 1;
            }
        }
    }
    log::debug!(
        "suppress: kept {kept} of {} interior pixels",
        (w - 2) * (h - 2)
    );

    Ok(NormalizedField::new(out))
}
