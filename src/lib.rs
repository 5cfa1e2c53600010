#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate common;
extern crate image;

pub mod bitmap;
pub mod errors;
pub mod profiler;
pub mod settings;
pub mod verify;

use common::kernel::{ContrastTest, Kernel, PrewittOperator};
use common::{parallel, sequential, PixelBuffer};
use errors::*;
use profiler::Profiler;
use settings::Settings;
use std::fmt;
use std::time::Duration;
use verify::Verification;

/// The four runs the driver performs on one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    SerialPrewitt,
    ParallelPrewitt,
    SerialEdge,
    ParallelEdge,
}

impl Execution {
    pub const ALL: [Execution; 4] = [
        Execution::SerialPrewitt,
        Execution::ParallelPrewitt,
        Execution::SerialEdge,
        Execution::ParallelEdge,
    ];
}

impl fmt::Display for Execution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Execution::SerialPrewitt => "Serial Prewitt",
            Execution::ParallelPrewitt => "Parallel Prewitt",
            Execution::SerialEdge => "Serial edge detection",
            Execution::ParallelEdge => "Parallel edge detection",
        };
        f.write_str(name)
    }
}

/// Kernel descriptors built once per run and shared by both executors.
#[derive(Debug, Clone)]
pub struct Filters {
    pub prewitt: PrewittOperator,
    pub contrast: ContrastTest,
}

impl Filters {
    pub fn new(settings: &Settings) -> Self {
        Filters {
            prewitt: PrewittOperator::new(settings.prewitt),
            contrast: ContrastTest::new(settings.radius),
        }
    }
}

/// Runs one execution into `output` and returns its wall time.
pub fn run_execution(
    execution: Execution,
    filters: &Filters,
    input: &PixelBuffer,
    output: &mut PixelBuffer,
    profiler: &mut Profiler,
) -> Duration {
    profiler.step(&format!("Running {}", execution));
    match execution {
        Execution::SerialPrewitt => sequential::apply(&filters.prewitt, input, output),
        Execution::ParallelPrewitt => parallel::apply(&filters.prewitt, input, output),
        Execution::SerialEdge => sequential::apply(&filters.contrast, input, output),
        Execution::ParallelEdge => parallel::apply(&filters.contrast, input, output),
    }
    profiler.finish().unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct Report {
    pub timings: Vec<(Execution, Duration)>,
    pub prewitt: Verification,
    pub edge: Verification,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.prewitt.passed() && self.edge.passed()
    }
}

/// Loads the input, runs all four executions, checks each serial/parallel
/// pair and stores the four edge maps.
pub fn run(settings: &Settings) -> Result<Report> {
    let mut profiler = Profiler::new();

    profiler.step("Reading input image");
    let input = bitmap::load(&settings.input)?;
    let info = input.info();
    info!("Image size: {}x{}", info.width, info.height);

    let filters = Filters::new(settings);
    info!(
        "Prewitt operator {0}x{0}, edge detection window {1}x{1}",
        filters.prewitt.side(),
        filters.contrast.side()
    );

    let mut serial_prewitt = PixelBuffer::new(info);
    let mut parallel_prewitt = PixelBuffer::new(info);
    let mut serial_edge = PixelBuffer::new(info);
    let mut parallel_edge = PixelBuffer::new(info);

    let mut timings = Vec::with_capacity(Execution::ALL.len());
    for &execution in &Execution::ALL {
        let output = match execution {
            Execution::SerialPrewitt => &mut serial_prewitt,
            Execution::ParallelPrewitt => &mut parallel_prewitt,
            Execution::SerialEdge => &mut serial_edge,
            Execution::ParallelEdge => &mut parallel_edge,
        };
        let elapsed = run_execution(execution, &filters, &input, output, &mut profiler);
        timings.push((execution, elapsed));
    }

    profiler.step("Verifying");
    let prewitt = verify::compare(&serial_prewitt, &parallel_prewitt)?;
    let edge = verify::compare(&serial_edge, &parallel_edge)?;
    if !prewitt.passed() || !edge.passed() {
        warn!("Prewitt {}, edge detection {}", prewitt, edge);
    }

    profiler.step("Saving images");
    let outputs = &settings.outputs;
    bitmap::store(&serial_prewitt, &outputs.serial_prewitt)?;
    bitmap::store(&parallel_prewitt, &outputs.parallel_prewitt)?;
    bitmap::store(&serial_edge, &outputs.serial_edge)?;
    bitmap::store(&parallel_edge, &outputs.parallel_edge)?;

    Ok(Report {
        timings,
        prewitt,
        edge,
    })
}
