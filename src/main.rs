extern crate env_logger;
extern crate parallel_edge_detection;

use parallel_edge_detection::errors::{Error, ErrorKind};
use parallel_edge_detection::settings::{Paths, Settings, USAGE};
use std::env;
use std::io;
use std::process;

fn report_error(e: &Error) -> ! {
    eprintln!("error: {}", e);

    for e in e.iter().skip(1) {
        eprintln!("caused by: {}", e);
    }

    if let Some(backtrace) = e.backtrace() {
        eprintln!("backtrace: {:?}", backtrace);
    }

    process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let paths = match Paths::from_args(env::args().skip(1)) {
        Ok(paths) => paths,
        Err(Error(ErrorKind::Usage, _)) => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
        Err(ref e) => report_error(e),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let settings = match Settings::prompt(paths, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(settings) => settings,
        Err(ref e) => report_error(e),
    };

    let report = match parallel_edge_detection::run(&settings) {
        Ok(report) => report,
        Err(ref e) => report_error(e),
    };

    for &(execution, elapsed) in &report.timings {
        println!(
            "{} took {:.6} seconds",
            execution,
            elapsed.as_secs() as f64 + f64::from(elapsed.subsec_nanos()) / 1e9
        );
    }
    println!("Verification: Prewitt {}", report.prewitt);
    println!("Verification: Edge detection {}", report.edge);

    if !report.passed() {
        process::exit(1);
    }
}
