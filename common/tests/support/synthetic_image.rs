use common::{ImageInfo, Intensity, PixelBuffer};

/// Dark background crossed by one bright vertical line at column `line`.
pub fn vertical_line(width: usize, height: usize, line: usize) -> PixelBuffer {
    assert!(line < width, "line must lie inside the image");
    PixelBuffer::from_fn(ImageInfo::new(width, height), |x, _| {
        if x == line {
            255
        } else {
            0
        }
    })
}

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

pub fn from_bytes(width: usize, height: usize, bytes: &[u8]) -> PixelBuffer {
    let pixels = bytes.iter().map(|&b| Intensity::from(b)).collect();
    PixelBuffer::from_pixels(ImageInfo::new(width, height), pixels)
}
