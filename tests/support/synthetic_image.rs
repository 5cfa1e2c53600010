use common::{ImageInfo, PixelBuffer};

/// Alternating dark and bright cells of `cell` pixels.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> PixelBuffer {
    assert!(cell > 0, "cell size must be positive");
    PixelBuffer::from_fn(ImageInfo::new(width, height), |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            32
        } else {
            220
        }
    })
}
