//! Borrowed 8-bit grayscale view, the input form of the edge pipeline.
use super::buf::ImageI32;
use super::traits::ImageView;
use crate::error::{CannyError, Result};

#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Checked constructor: `stride >= w` and `data` covers every row.
    pub fn new(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Result<Self> {
        if stride < w {
            return Err(CannyError::ShapeMismatch(format!(
                "stride {stride} is smaller than width {w}"
            )));
        }
        let needed = if h == 0 { 0 } else { (h - 1) * stride + w };
        if data.len() < needed {
            return Err(CannyError::ShapeMismatch(format!(
                "{} bytes cannot back a {w}x{h} view with stride {stride}",
                data.len()
            )));
        }
        Ok(Self { w, h, stride, data })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Widen into a packed signed grid for integer convolution.
    pub fn to_i32(&self) -> ImageI32 {
        ImageI32::from_fn(self.w, self.h, |x, y| i32::from(self.get(x, y)))
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

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
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
