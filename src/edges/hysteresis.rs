//! Double-threshold edge linking over the suppressed magnitude field.
//!
//! The field is first stretched to bytes with the shared min-max rule. Every
//! interior pixel at or above the high threshold seeds a flood fill that
//! claims all 8-connected interior pixels at or above the low threshold. The
//! fill uses an explicit stack, so arbitrarily long contours cannot exhaust the
//! call stack. The 1-pixel frame is neither a seed nor a fill target.
use crate::image::{normalize_to_u8, GrayImageU8, ImageF64};

/// Value written for edge pixels in the output map.
pub const EDGE: u8 = 255;

const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Clamp both thresholds to [0, 255] and order them as `(high, low)`.
pub fn ordered_thresholds(th: i32, tl: i32) -> (u8, u8) {
    let th = th.clamp(0, 255) as u8;
    let tl = tl.clamp(0, 255) as u8;
    if tl > th {
        (tl, th)
    } else {
        (th, tl)
    }
}

/// Binary edge map (0 / 255) for thresholds `th` (seed) and `tl` (follow),
/// both expressed on the normalized 0..=255 scale.
pub fn trace(suppressed: &ImageF64, th: i32, tl: i32) -> GrayImageU8 {
    let (high, low) = ordered_thresholds(th, tl);
    let strength = normalize_to_u8(suppressed);
    let w = strength.w;
    let h = strength.h;
    let mut edges = GrayImageU8::new(w, h);
    if w < 3 || h < 3 {
        return edges;
    }

    let mut visited = vec![false; w * h];
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut seeds = 0usize;

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let idx = strength.idx(x, y);
            if visited[idx] || strength.data[idx] < high {
                continue;
            }
            seeds += 1;
            stack.push((x, y));
            while let Some((cx, cy)) = stack.pop() {
                let ci = strength.idx(cx, cy);
                if visited[ci] {
                    continue;
                }
                visited[ci] = true;
                edges.data[ci] = EDGE;

                for (dx, dy) in NEIGHBORS_8 {
                    let nx = cx as isize + dx;
                    let ny = cy as isize + dy;
                    if nx < 1 || ny < 1 || nx >= (w - 1) as isize || ny >= (h - 1) as isize {
                        continue;
                    }
                    let (nx, ny) = (nx as usize, ny as usize);
                    let ni = strength.idx(nx, ny);
                    if !visited[ni] && strength.data[ni] >= low {
                        stack.push((nx, ny));
                    }
                }
            }
        }
    }
    log::debug!(
        "trace: high={high} low={low} seeds={seeds} edges={}",
        edges.count_nonzero()
    );

    edges
}
