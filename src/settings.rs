use common::kernel::{ContrastTest, KernelSize};
use errors::*;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const USAGE: &str = "usage: parallel-edge-detection input.bmp \
outputSerialPrewitt.bmp outputParallelPrewitt.bmp \
outputSerialEdge.bmp outputParallelEdge.bmp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub serial_prewitt: PathBuf,
    pub parallel_prewitt: PathBuf,
    pub serial_edge: PathBuf,
    pub parallel_edge: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub input: PathBuf,
    pub outputs: OutputPaths,
}

impl Paths {
    /// Takes the positional arguments, program name already skipped.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        if args.len() != 5 {
            bail!(ErrorKind::Usage);
        }
        let mut args = args.into_iter().map(PathBuf::from);
        let mut next = || args.next().ok_or_else(|| Error::from(ErrorKind::Usage));
        Ok(Paths {
            input: next()?,
            outputs: OutputPaths {
                serial_prewitt: next()?,
                parallel_prewitt: next()?,
                serial_edge: next()?,
                parallel_edge: next()?,
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub outputs: OutputPaths,
    pub prewitt: KernelSize,
    /// Contrast test radius; the window is `2 * radius + 1` pixels wide.
    pub radius: usize,
}

impl Settings {
    pub fn new(paths: Paths, prewitt: KernelSize, radius: usize) -> Self {
        Settings {
            input: paths.input,
            outputs: paths.outputs,
            prewitt,
            radius,
        }
    }

    /// Asks for the filter parameters the arguments do not carry.
    pub fn prompt<R, W>(paths: Paths, input: &mut R, output: &mut W) -> Result<Self>
    where
        R: BufRead,
        W: Write,
    {
        write!(
            output,
            "What Prewitt operator dimension do you want?\n1. 3x3\n2. 5x5\n>>  "
        )?;
        output.flush()?;
        let prewitt = parse_kernel_size(&read_answer(input)?)?;

        write!(output, "Enter surrounding width for edge detection\n>>  ")?;
        output.flush()?;
        let radius = parse_radius(&read_answer(input)?)?;

        Ok(Settings::new(paths, prewitt, radius))
    }
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .chain_err(|| "Could not read answer")?;
    Ok(line.trim().to_string())
}

/// Menu entry `1`/`2` or the operator side `3`/`5`.
pub fn parse_kernel_size(answer: &str) -> Result<KernelSize> {
    match answer.trim() {
        "1" | "3" => Ok(KernelSize::Three),
        "2" | "5" => Ok(KernelSize::Five),
        other => bail!(ErrorKind::InvalidKernelSize(other.to_string())),
    }
}

/// Non-negative radius small enough for its window and margin to fit in
/// `usize`.
pub fn parse_radius(answer: &str) -> Result<usize> {
    let answer = answer.trim();
    match answer.parse::<usize>() {
        Ok(radius) if radius <= ContrastTest::MAX_RADIUS => Ok(radius),
        _ => bail!(ErrorKind::InvalidRadius(answer.to_string())),
    }
}
