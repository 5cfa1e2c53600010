use kernel::Kernel;
use PixelBuffer;

/// Single pass over every interior pixel. Pixels within `kernel.margin()`
/// of an edge keep whatever `output` already holds.
pub fn apply<K: Kernel>(kernel: &K, input: &PixelBuffer, output: &mut PixelBuffer) {
    let info = input.info();
    assert_eq!(info, output.info(), "input and output dimensions differ");

    let interior = info.interior(kernel.margin());
    for y in interior.rows() {
        for x in interior.columns() {
            output.set(x, y, kernel.evaluate(input, x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::{ContrastTest, KernelSize, PrewittOperator};
    use {ImageInfo, Intensity, BACKGROUND, EDGE};

    fn noise(info: ImageInfo) -> PixelBuffer {
        PixelBuffer::from_fn(info, |x, y| ((x * 7919 + y * 104_729) % 256) as Intensity)
    }

    fn assert_border_untouched(output: &PixelBuffer, margin: usize) {
        let info = output.info();
        let interior = info.interior(margin);
        for y in 0..info.height {
            for x in 0..info.width {
                if !interior.contains(x, y) {
                    assert_eq!(output.get(x, y), 0, "border pixel ({}, {}) written", x, y);
                }
            }
        }
    }

    #[test]
    fn border_stays_zero() {
        let info = ImageInfo::new(31, 17);
        let input = noise(info);

        let prewitt = PrewittOperator::new(KernelSize::Five);
        let mut output = PixelBuffer::new(info);
        apply(&prewitt, &input, &mut output);
        assert_border_untouched(&output, prewitt.margin());

        let contrast = ContrastTest::new(2);
        let mut output = PixelBuffer::new(info);
        apply(&contrast, &input, &mut output);
        assert_border_untouched(&output, contrast.margin());
    }

    #[test]
    fn uniform_bright_image_has_no_contrast() {
        let info = ImageInfo::new(20, 20);
        let input = PixelBuffer::from_fn(info, |_, _| 200);
        let mut output = PixelBuffer::new(info);
        apply(&ContrastTest::new(1), &input, &mut output);
        assert!(output.pixels().iter().all(|&p| p == BACKGROUND));
    }

    #[test]
    fn vertical_line_marks_both_flanks() {
        let info = ImageInfo::new(24, 20);
        let line = 12;
        let input = PixelBuffer::from_fn(info, |x, _| if x == line { 255 } else { 0 });
        let operator = PrewittOperator::new(KernelSize::Three);
        let mut output = PixelBuffer::new(info);
        apply(&operator, &input, &mut output);

        let interior = info.interior(operator.margin());
        for y in interior.rows() {
            for x in interior.columns() {
                let expected = if x + 1 == line || x == line + 1 {
                    EDGE
                } else {
                    BACKGROUND
                };
                assert_eq!(output.get(x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn image_smaller_than_margins_is_left_blank() {
        let info = ImageInfo::new(9, 40);
        let input = noise(info);
        let mut output = PixelBuffer::new(info);
        apply(&PrewittOperator::new(KernelSize::Five), &input, &mut output);
        assert!(output.pixels().iter().all(|&p| p == 0));
    }
}
