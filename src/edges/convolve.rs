//! Same-size integer correlation with zero padding.
//!
//! The kernel is not flipped: output `(x, y)` is the sum over the footprint of
//! `padded[y + ky][x + kx] * kernel[ky][kx]`, which keeps the sign convention
//! of the derivative kernels. Products are accumulated in `i64` and narrowed to
//! `i32` with saturation.
//!
//! Complexity: O(W·H·kh·kw); memory: one padded copy of the input.
use crate::image::{ImageI32, ImageView, ImageViewMut};
use nalgebra::DMatrix;

/// Correlate `image` with `kernel`; the output has the same shape as `image`.
pub fn convolve(image: &ImageI32, kernel: &DMatrix<i32>) -> ImageI32 {
    let (kh, kw) = kernel.shape();
    let mut out = ImageI32::new(image.w, image.h);
    if kh == 0 || kw == 0 || image.is_empty() {
        return out;
    }

    let padded = pad_zero(image, kh / 2, kw / 2);
    // Row-major copy of the taps so the inner loop walks contiguous memory.
    let taps: Vec<i64> = (0..kh)
        .flat_map(|r| (0..kw).map(move |c| i64::from(kernel[(r, c)])))
        .collect();

    for y in 0..image.h {
        let dst = out.row_mut(y);
        for (x, px) in dst.iter_mut().enumerate() {
            let mut acc = 0i64;
            for (ky, tap_row) in taps.chunks_exact(kw).enumerate() {
                let window = &padded.row(y + ky)[x..x + kw];
                acc += window
                    .iter()
                    .zip(tap_row)
                    .map(|(&s, &t)| i64::from(s) * t)
                    .sum::<i64>();
            }
            *px = narrow(acc);
        }
    }
    out
}

/// Embed `image` in a zero frame of `pad_y` rows and `pad_x` columns per side.
pub fn pad_zero(image: &ImageI32, pad_y: usize, pad_x: usize) -> ImageI32 {
    let mut padded = ImageI32::new(image.w + 2 * pad_x, image.h + 2 * pad_y);
    for y in 0..image.h {
        padded.row_mut(y + pad_y)[pad_x..pad_x + image.w].copy_from_slice(image.row(y));
    }
    padded
}

#[inline]
fn narrow(acc: i64) -> i32 {
    acc.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
