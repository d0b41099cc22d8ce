//! Owned single-channel image in row-major layout (stride == width).
//!
//! One generic buffer backs every grid that flows through the edge pipeline:
//! 8-bit visualizations, 32-bit convolution results and 64-bit float
//! magnitude/direction fields. Stages never mutate their inputs; each one
//! allocates a fresh buffer of the same shape.
use super::traits::{ImageView, ImageViewMut};
use super::u8::ImageU8;
use crate::error::{CannyError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct ImageBuf<T> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<T>,
}

/// Owned 8-bit grayscale buffer (inputs, normalized views, edge maps).
pub type GrayImageU8 = ImageBuf<u8>;
/// Signed 32-bit grid used for convolution and gradient results.
pub type ImageI32 = ImageBuf<i32>;
/// Double precision grid used for magnitude, direction and NMS output.
pub type ImageF64 = ImageBuf<f64>;

impl<T: Copy + Default> ImageBuf<T> {
    /// Construct a zero-initialized (`T::default()`) buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![T::default(); w * h],
        }
    }

    /// Wrap an existing row-major vector; fails if `data.len() != w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != w * h {
            return Err(CannyError::ShapeMismatch(format!(
                "buffer of {} samples cannot hold a {w}x{h} image",
                data.len()
            )));
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Apply `f` to every sample, producing a new buffer of the same shape.
    pub fn map<U: Copy + Default>(&self, f: impl FnMut(T) -> U) -> ImageBuf<U> {
        ImageBuf {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: self.data.iter().copied().map(f).collect(),
        }
    }
}

impl<T> ImageBuf<T> {
    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> T
    where
        T: Copy,
    {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    pub fn same_shape<U>(&self, other: &ImageBuf<U>) -> bool {
        self.w == other.w && self.h == other.h
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

impl GrayImageU8 {
    /// Copy a borrowed (possibly strided) view into a tightly packed buffer.
    pub fn from_view(view: &ImageU8<'_>) -> Self {
        let mut out = Self::new(view.w, view.h);
        for y in 0..view.h {
            out.row_mut(y).copy_from_slice(view.row(y));
        }
        out
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.w,
            h: self.h,
            stride: self.stride,
            data: &self.data,
        }
    }

    /// Number of non-zero samples, used to summarise binary edge maps.
    pub fn count_nonzero(&self) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|&&v| v != 0).count())
            .sum()
    }
}

/// Fail with `ShapeMismatch` unless both grids share width and height.
pub fn ensure_same_shape<A, B>(a: &ImageBuf<A>, b: &ImageBuf<B>, context: &str) -> Result<()> {
    if a.same_shape(b) {
        Ok(())
    } else {
        Err(CannyError::ShapeMismatch(format!(
            "{context}: {}x{} vs {}x{}",
            a.w, a.h, b.w, b.h
        )))
    }
}

impl<T: Copy> ImageView for ImageBuf<T> {
    type Pixel = T;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl<T: Copy> ImageViewMut for ImageBuf<T> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = ImageI32::from_vec(3, 2, vec![0; 5]).unwrap_err();
        assert!(matches!(err, CannyError::ShapeMismatch(_)));
    }

    #[test]
    fn from_fn_is_row_major() {
        let img = ImageI32::from_fn(3, 2, |x, y| (10 * y + x) as i32);
        assert_eq!(img.data, vec![0, 1, 2, 10, 11, 12]);
        assert_eq!(img.get(2, 1), 12);
        assert_eq!(img.row(1), &[10, 11, 12]);
    }

    #[test]
    fn strided_view_is_packed_on_copy() {
        let raw = [1u8, 2, 99, 3, 4, 99];
        let view = ImageU8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &raw,
        };
        let packed = GrayImageU8::from_view(&view);
        assert_eq!(packed.data, vec![1, 2, 3, 4]);
        assert_eq!(packed.stride, 2);
    }
}
