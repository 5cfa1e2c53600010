#[macro_use]
extern crate log;
extern crate rayon;

pub mod kernel;
pub mod parallel;
pub mod sequential;

use std::cmp::{max, min};
use std::ops::Range;

/// Grayscale intensity. Inputs are 0..=255, filter outputs are 0 or 255.
pub type Intensity = i32;

pub const THRESHOLD: Intensity = 128;
pub const EDGE: Intensity = 255;
pub const BACKGROUND: Intensity = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: usize,
    pub height: usize,
}

impl ImageInfo {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn image_offset(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// The rectangle of pixels at least `margin` away from every edge.
    pub fn interior(&self, margin: usize) -> Region {
        let border = margin.saturating_mul(2);
        let width = self.width.saturating_sub(border);
        let height = self.height.saturating_sub(border);
        Region::new(margin, margin, width, height)
    }
}

/// Row-major intensity buffer with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    info: ImageInfo,
    pixels: Vec<Intensity>,
}

impl PixelBuffer {
    /// Zero-initialized buffer.
    pub fn new(info: ImageInfo) -> Self {
        Self {
            info,
            pixels: vec![BACKGROUND; info.len()],
        }
    }

    pub fn from_pixels(info: ImageInfo, pixels: Vec<Intensity>) -> Self {
        assert_eq!(
            pixels.len(),
            info.len(),
            "pixel count does not match {}x{}",
            info.width,
            info.height
        );
        Self { info, pixels }
    }

    pub fn from_fn<F>(info: ImageInfo, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Intensity,
    {
        let mut pixels = Vec::with_capacity(info.len());
        for y in 0..info.height {
            for x in 0..info.width {
                pixels.push(f(x, y));
            }
        }
        Self { info, pixels }
    }

    pub fn info(&self) -> ImageInfo {
        self.info
    }

    pub fn get(&self, x: usize, y: usize) -> Intensity {
        self.pixels[self.info.image_offset(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: Intensity) {
        let offset = self.info.image_offset(x, y);
        self.pixels[offset] = value;
    }

    pub fn pixels(&self) -> &[Intensity] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Intensity] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<Intensity> {
        self.pixels
    }
}

/// Sub-rectangle of an image: origin column `x`, origin row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn full(info: ImageInfo) -> Self {
        Self::new(0, 0, info.width, info.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn right(&self) -> usize {
        self.x + self.width
    }

    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn lies_within(&self, info: ImageInfo) -> bool {
        self.right() <= info.width && self.bottom() <= info.height
    }

    /// Splits at the midpoints into top-left, top-right, bottom-left and
    /// bottom-right. The far halves take the odd row/column, so the four
    /// quadrants tile `self` exactly.
    pub fn quarter(&self) -> (Region, Region, Region, Region) {
        let left = self.width / 2;
        let top = self.height / 2;
        let right = self.width - left;
        let bottom = self.height - top;
        (
            Region::new(self.x, self.y, left, top),
            Region::new(self.x + left, self.y, right, top),
            Region::new(self.x, self.y + top, left, bottom),
            Region::new(self.x + left, self.y + top, right, bottom),
        )
    }

    pub fn intersect(&self, other: &Region) -> Region {
        let x = max(self.x, other.x);
        let y = max(self.y, other.y);
        let right = min(self.right(), other.right());
        let bottom = min(self.bottom(), other.bottom());
        Region::new(
            x,
            y,
            right.saturating_sub(x),
            bottom.saturating_sub(y),
        )
    }

    pub fn columns(&self) -> Range<usize> {
        self.x..self.right()
    }

    pub fn rows(&self) -> Range<usize> {
        self.y..self.bottom()
    }
}
