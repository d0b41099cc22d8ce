//! Conversions from numeric grids to 8-bit images.
//!
//! `normalize_to_u8` is the single min-max rule shared by the magnitude,
//! suppression and hysteresis stages: a constant field maps to all zeros,
//! otherwise `(v - min) / (max - min) * 255` truncated toward zero.
use super::buf::{GrayImageU8, ImageBuf};

/// Min-max stretch of any numeric grid to the full byte range.
pub fn normalize_to_u8<T>(image: &ImageBuf<T>) -> GrayImageU8
where
    T: Copy + Default + Into<f64>,
{
    let Some((lo, hi)) = min_max(image) else {
        return GrayImageU8::new(image.w, image.h);
    };
    if hi == lo {
        return GrayImageU8::new(image.w, image.h);
    }
    let range = hi - lo;
    image.map(|v| {
        let norm = (v.into() - lo) / range;
        // `as` saturates and truncates, matching the byte cast of the stretch.
        (norm * 255.0) as u8
    })
}

/// Smallest and largest sample, `None` for an empty grid.
pub fn min_max<T>(image: &ImageBuf<T>) -> Option<(f64, f64)>
where
    T: Copy + Into<f64>,
{
    image.data.iter().fold(None, |acc, &v| {
        let v: f64 = v.into();
        Some(match acc {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ImageF64, ImageI32};

    #[test]
    fn constant_field_maps_to_zero() {
        let img = ImageF64::from_fn(4, 3, |_, _| 17.5);
        let out = normalize_to_u8(&img);
        assert!(out.data.iter().all(|&v| v == 0));
        assert_eq!((out.w, out.h), (4, 3));
    }

    #[test]
    fn stretch_truncates() {
        let img = ImageI32::from_vec(4, 1, vec![-10, 0, 10, 30]).unwrap();
        let out = normalize_to_u8(&img);
        // (0 + 10) / 40 * 255 = 63.75, (10 + 10) / 40 * 255 = 127.5
        assert_eq!(out.data, vec![0, 63, 127, 255]);
    }

    #[test]
    fn empty_grid_has_no_extrema() {
        let img = ImageF64::new(0, 0);
        assert!(min_max(&img).is_none());
        assert!(normalize_to_u8(&img).data.is_empty());
    }
}
