use common::PixelBuffer;
use errors::*;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Pass,
    Fail {
        mismatches: usize,
        /// First differing pixel in row-major order.
        first: (usize, usize),
    },
}

impl Verification {
    pub fn passed(&self) -> bool {
        *self == Verification::Pass
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Verification::Pass => write!(f, "PASS."),
            Verification::Fail {
                mismatches,
                first: (x, y),
            } => write!(f, "FAIL! ({} pixels differ, first at {}, {})", mismatches, x, y),
        }
    }
}

/// Exact comparison over the full extent of both buffers.
pub fn compare(expected: &PixelBuffer, actual: &PixelBuffer) -> Result<Verification> {
    let (left, right) = (expected.info(), actual.info());
    if left != right {
        bail!(ErrorKind::DimensionMismatch(
            (left.width, left.height),
            (right.width, right.height)
        ));
    }

    let mut mismatches = expected
        .pixels()
        .iter()
        .zip(actual.pixels())
        .enumerate()
        .filter(|&(_, (a, b))| a != b)
        .map(|(i, _)| i);

    let first = match mismatches.next() {
        Some(i) => i,
        None => return Ok(Verification::Pass),
    };
    Ok(Verification::Fail {
        mismatches: 1 + mismatches.count(),
        first: (first % left.width, first / left.width),
    })
}
