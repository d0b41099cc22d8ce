/// Generates a simple high-contrast checkerboard image.
#[allow(dead_code)]
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = x / cell;
            let cy = y / cell;
            img[y * width + x] = if (cx + cy) & 1 == 0 { 32 } else { 220 };
        }
    }
    img
}

/// Dark image with a single bright column at `column`.
#[allow(dead_code)]
pub fn bright_column_u8(width: usize, height: usize, column: usize) -> Vec<u8> {
    assert!(column < width, "column outside the image");
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        img[y * width + column] = 255;
    }
    img
}

/// Dark image with a bright axis-aligned rectangle `[x0, x1) × [y0, y1)`.
#[allow(dead_code)]
pub fn bright_rect_u8(
    width: usize,
    height: usize,
    (x0, y0): (usize, usize),
    (x1, y1): (usize, usize),
) -> Vec<u8> {
    let mut img = vec![20u8; width * height];
    for y in y0..y1.min(height) {
        for x in x0..x1.min(width) {
            img[y * width + x] = 200;
        }
    }
    img
}
