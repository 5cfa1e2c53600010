use super::{Intensity, PixelBuffer, BACKGROUND, EDGE, THRESHOLD};

/// Per-pixel neighborhood evaluation shared by both executors.
///
/// The window is anchored one pixel up and left of the center: window cell
/// `(m, n)` reads the input at `(x + m - 1, y + n - 1)`. Callers must keep
/// `(x, y)` at least `margin()` pixels away from every image edge.
pub trait Kernel: Sync {
    /// Side length of the square neighborhood window.
    fn side(&self) -> usize;

    /// Border width left untouched by the executors.
    fn margin(&self) -> usize {
        self.side()
    }

    fn evaluate(&self, input: &PixelBuffer, x: usize, y: usize) -> Intensity;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelSize {
    Three,
    Five,
}

impl KernelSize {
    pub fn from_side(side: usize) -> Option<Self> {
        match side {
            3 => Some(KernelSize::Three),
            5 => Some(KernelSize::Five),
            _ => None,
        }
    }

    pub fn side(&self) -> usize {
        match *self {
            KernelSize::Three => 3,
            KernelSize::Five => 5,
        }
    }
}

const HORIZONTAL_3: [Intensity; 9] = [
    -1, 0, 1,
    -1, 0, 1,
    -1, 0, 1,
];

const VERTICAL_3: [Intensity; 9] = [
    -1, -1, -1,
     0,  0,  0,
     1,  1,  1,
];

const HORIZONTAL_5: [Intensity; 25] = [
     9,  9,  9,  9,  9,
     9,  5,  5,  5,  9,
    -7, -3,  0, -3, -7,
    -7, -3, -3, -3, -7,
    -7, -7, -7, -7, -7,
];

const VERTICAL_5: [Intensity; 25] = [
    9, 9, -7, -7, -7,
    9, 5, -3, -3, -7,
    9, 5,  0, -3, -7,
    9, 5, -3, -3, -7,
    9, 9, -7, -7, -7,
];

/// Prewitt gradient magnitude: `|Gx| + |Gy|` thresholded to an edge map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrewittOperator {
    side: usize,
    horizontal: Vec<Intensity>,
    vertical: Vec<Intensity>,
}

impl PrewittOperator {
    pub fn new(size: KernelSize) -> Self {
        let (horizontal, vertical): (&[Intensity], &[Intensity]) = match size {
            KernelSize::Three => (&HORIZONTAL_3[..], &VERTICAL_3[..]),
            KernelSize::Five => (&HORIZONTAL_5[..], &VERTICAL_5[..]),
        };
        Self::with_weights(size.side(), horizontal.to_vec(), vertical.to_vec())
    }

    /// Custom operator pair, row-major `side x side` weights each.
    pub fn with_weights(side: usize, horizontal: Vec<Intensity>, vertical: Vec<Intensity>) -> Self {
        assert!(side % 2 == 1, "operator side must be odd, got {}", side);
        assert_eq!(horizontal.len(), side * side);
        assert_eq!(vertical.len(), side * side);
        Self {
            side,
            horizontal,
            vertical,
        }
    }

    /// Raw `|Gx| + |Gy|` before thresholding.
    pub fn magnitude(&self, input: &PixelBuffer, x: usize, y: usize) -> Intensity {
        let info = input.info();
        let pixels = input.pixels();
        let mut gx = 0;
        let mut gy = 0;
        for n in 0..self.side {
            let row = info.image_offset(0, y + n - 1);
            for m in 0..self.side {
                let p = pixels[row + x + m - 1];
                let w = n * self.side + m;
                gx += p * self.horizontal[w];
                gy += p * self.vertical[w];
            }
        }
        gx.abs() + gy.abs()
    }
}

impl Kernel for PrewittOperator {
    fn side(&self) -> usize {
        self.side
    }

    fn evaluate(&self, input: &PixelBuffer, x: usize, y: usize) -> Intensity {
        if self.magnitude(input, x, y) > THRESHOLD {
            EDGE
        } else {
            BACKGROUND
        }
    }
}

/// Neighborhood contrast test.
///
/// Marks a pixel when its window holds a sample above the threshold
/// together with a sample below it. A window made only of samples equal to
/// the threshold is also marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastTest {
    side: usize,
}

impl ContrastTest {
    /// Largest radius whose window side and doubled margin fit in `usize`.
    pub const MAX_RADIUS: usize = (usize::MAX / 2 - 1) / 2;

    /// Window of `2 * radius + 1` pixels per side.
    pub fn new(radius: usize) -> Self {
        assert!(radius <= Self::MAX_RADIUS, "radius {} too large", radius);
        Self {
            side: 2 * radius + 1,
        }
    }

    pub fn radius(&self) -> usize {
        self.side / 2
    }
}

impl Kernel for ContrastTest {
    fn side(&self) -> usize {
        self.side
    }

    fn evaluate(&self, input: &PixelBuffer, x: usize, y: usize) -> Intensity {
        let info = input.info();
        let pixels = input.pixels();
        let mut above = false;
        let mut not_below = true;
        for n in 0..self.side {
            let row = info.image_offset(0, y + n - 1);
            for &p in &pixels[row + x - 1..row + x - 1 + self.side] {
                if p > THRESHOLD {
                    above = true;
                }
                if p < THRESHOLD {
                    not_below = false;
                }
            }
        }
        if above != not_below {
            EDGE
        } else {
            BACKGROUND
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use {ImageInfo, PixelBuffer, BACKGROUND, EDGE, THRESHOLD};

    fn patch(values: &[(usize, usize, Intensity)]) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(ImageInfo::new(5, 5));
        for &(x, y, v) in values {
            buffer.set(x, y, v);
        }
        buffer
    }

    #[test]
    fn magnitude_at_threshold_is_background() {
        let operator = PrewittOperator::new(KernelSize::Three);
        // window cell (2, 1) only carries horizontal weight +1
        let at = patch(&[(2, 1, 128)]);
        assert_eq!(operator.magnitude(&at, 1, 1), 128);
        assert_eq!(operator.evaluate(&at, 1, 1), BACKGROUND);

        let above = patch(&[(2, 1, 129)]);
        assert_eq!(operator.magnitude(&above, 1, 1), 129);
        assert_eq!(operator.evaluate(&above, 1, 1), EDGE);
    }

    #[test]
    fn five_by_five_uses_anchored_window() {
        let operator = PrewittOperator::new(KernelSize::Five);
        let mut buffer = PixelBuffer::new(ImageInfo::new(12, 12));
        // center of the window at (5, 5) sits at (x + 1, y + 1) and has zero weight
        buffer.set(6, 6, 200);
        assert_eq!(operator.magnitude(&buffer, 5, 5), 0);
        // window cell (0, 0) at (x - 1, y - 1): weight 9 in both directions
        buffer.set(4, 4, 10);
        assert_eq!(operator.magnitude(&buffer, 5, 5), 180);
    }

    #[test]
    fn evaluation_is_repeatable() {
        let info = ImageInfo::new(12, 12);
        let input = PixelBuffer::from_fn(info, |x, y| ((x * 37 + y * 91) % 256) as Intensity);
        let prewitt = PrewittOperator::new(KernelSize::Five);
        let contrast = ContrastTest::new(1);
        for &(x, y) in &[(5, 5), (6, 5), (6, 6)] {
            assert_eq!(prewitt.evaluate(&input, x, y), prewitt.evaluate(&input, x, y));
            assert_eq!(contrast.evaluate(&input, x, y), contrast.evaluate(&input, x, y));
        }
    }

    #[test]
    fn contrast_ignores_uniform_bright_window() {
        let input = PixelBuffer::from_fn(ImageInfo::new(9, 9), |_, _| 200);
        assert_eq!(ContrastTest::new(1).evaluate(&input, 4, 4), BACKGROUND);
    }

    #[test]
    fn contrast_marks_mixed_window() {
        let input = PixelBuffer::from_fn(ImageInfo::new(9, 9), |x, _| if x < 4 { 0 } else { 200 });
        let test = ContrastTest::new(1);
        // window spans columns x - 1 ..= x + 1
        assert_eq!(test.evaluate(&input, 3, 4), EDGE);
        assert_eq!(test.evaluate(&input, 2, 4), BACKGROUND);
        assert_eq!(test.evaluate(&input, 5, 4), BACKGROUND);
    }

    #[test]
    fn contrast_marks_window_exactly_at_threshold() {
        let input = PixelBuffer::from_fn(ImageInfo::new(9, 9), |_, _| THRESHOLD);
        assert_eq!(ContrastTest::new(2).evaluate(&input, 4, 4), EDGE);
    }

    #[test]
    fn margins_follow_window_side() {
        assert_eq!(PrewittOperator::new(KernelSize::Three).margin(), 3);
        assert_eq!(PrewittOperator::new(KernelSize::Five).margin(), 5);
        assert_eq!(ContrastTest::new(2).margin(), 5);
        assert_eq!(ContrastTest::new(2).radius(), 2);
        assert_eq!(KernelSize::from_side(4), None);
    }

    #[test]
    fn largest_radius_leaves_small_images_blank() {
        let test = ContrastTest::new(ContrastTest::MAX_RADIUS);
        assert_eq!(test.radius(), ContrastTest::MAX_RADIUS);
        let info = ImageInfo::new(16, 16);
        assert!(info.interior(test.margin()).is_empty());
    }

    #[test]
    #[should_panic]
    fn oversized_radius_is_rejected() {
        ContrastTest::new(ContrastTest::MAX_RADIUS + 1);
    }
}
