//! Four-way quantization of gradient direction.
//!
//! Edges are undirected lines, so an angle and its 180° opposite share a
//! class. Bands are half-open `[lo, hi)`:
//!
//! | class | bands (degrees)                            |
//! |-------|--------------------------------------------|
//! | 0     | [337.5, 360) ∪ [0, 22.5) ∪ [157.5, 202.5)  |
//! | 1     | [22.5, 67.5) ∪ [202.5, 247.5)              |
//! | 2     | [67.5, 112.5) ∪ [247.5, 292.5)             |
//! | 3     | [112.5, 157.5) ∪ [292.5, 337.5)            |
use crate::image::{ImageBuf, ImageF64};
use serde::Serialize;

/// Discrete line orientation of the gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DirectionClass {
    /// Gradient near 0°/180°: compare left and right neighbours
    Horizontal = 0,
    /// Gradient near 45°/225°: compare up-right and down-left
    Diagonal45 = 1,
    /// Gradient near 90°/270°: compare up and down
    Vertical = 2,
    /// Gradient near 135°/315°: compare up-left and down-right
    Diagonal135 = 3,
}

impl DirectionClass {
    pub const ALL: [DirectionClass; 4] = [
        DirectionClass::Horizontal,
        DirectionClass::Diagonal45,
        DirectionClass::Vertical,
        DirectionClass::Diagonal135,
    ];

    /// Label stored in quantized grids; anything above 2 reads as class 3.
    pub fn from_label(label: u8) -> Self {
        match label {
            0 => DirectionClass::Horizontal,
            1 => DirectionClass::Diagonal45,
            2 => DirectionClass::Vertical,
            _ => DirectionClass::Diagonal135,
        }
    }

    pub fn label(self) -> u8 {
        self as u8
    }

    /// The two `(dx, dy)` neighbour offsets along the gradient axis.
    pub fn neighbor_offsets(self) -> [(isize, isize); 2] {
        match self {
            DirectionClass::Horizontal => [(-1, 0), (1, 0)],
            DirectionClass::Diagonal45 => [(1, -1), (-1, 1)],
            DirectionClass::Vertical => [(0, -1), (0, 1)],
            DirectionClass::Diagonal135 => [(-1, -1), (1, 1)],
        }
    }
}

/// Class of a single angle in degrees. Non-finite input maps to class 0.
#[inline]
pub fn quantize_angle(degrees: f64) -> DirectionClass {
    let a = degrees % 360.0;
    let a = if a < 0.0 { a + 360.0 } else { a };
    if (22.5..67.5).contains(&a) || (202.5..247.5).contains(&a) {
        DirectionClass::Diagonal45
    } else if (67.5..112.5).contains(&a) || (247.5..292.5).contains(&a) {
        DirectionClass::Vertical
    } else if (112.5..157.5).contains(&a) || (292.5..337.5).contains(&a) {
        DirectionClass::Diagonal135
    } else {
        DirectionClass::Horizontal
    }
}

/// Quantize a direction field (degrees) into a grid of class labels 0..=3.
pub fn quantize(phi_degrees: &ImageF64) -> ImageBuf<u8> {
    phi_degrees.map(|d| quantize_angle(d).label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_are_half_open() {
        let cases = [
            (0.0, 0),
            (22.4999, 0),
            (22.5, 1),
            (67.5, 2),
            (112.5, 3),
            (157.5, 0),
            (202.5, 1),
            (247.5, 2),
            (292.5, 3),
            (337.5, 0),
            (359.999, 0),
        ];
        for (deg, class) in cases {
            assert_eq!(quantize_angle(deg).label(), class, "angle {deg}");
        }
    }

    #[test]
    fn opposite_angles_share_a_class() {
        let mut deg = 0.0;
        while deg < 180.0 {
            let a = quantize_angle(deg);
            let b = quantize_angle(deg + 180.0);
            assert_eq!(a, b, "angle {deg}");
            assert!(a.label() <= 3);
            deg += 0.37;
        }
    }

    #[test]
    fn out_of_range_angles_are_wrapped() {
        assert_eq!(quantize_angle(-45.0), DirectionClass::Diagonal135);
        assert_eq!(quantize_angle(405.0), DirectionClass::Diagonal45);
        assert_eq!(quantize_angle(f64::NAN), DirectionClass::Horizontal);
    }

    #[test]
    fn grid_quantization_keeps_shape() {
        let phi = ImageF64::from_vec(2, 2, vec![10.0, 50.0, 100.0, 300.0]).unwrap();
        let q = quantize(&phi);
        assert_eq!((q.w, q.h), (2, 2));
        assert_eq!(q.data, vec![0, 1, 2, 3]);
    }

    #[test]
    fn labels_round_trip() {
        for class in DirectionClass::ALL {
            assert_eq!(DirectionClass::from_label(class.label()), class);
        }
    }
}
