use std::time::{Duration, Instant};

fn seconds(elapsed: Duration) -> f64 {
    elapsed.as_secs() as f64 + elapsed.subsec_nanos() as f64 / 1_000_000_000.0
}

pub struct Profiler {
    start_time: Instant,
    curr: Option<Step>,
}

struct Step {
    start_time: Instant,
    name: String,
}

impl Profiler {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            curr: None,
        }
    }

    pub fn step(&mut self, step_name: &str) {
        self.finish();
        info!("{} - START", step_name);
        self.curr = Some(Step {
            start_time: Instant::now(),
            name: step_name.to_string(),
        });
    }

    /// Closes the current step and returns how long it ran.
    pub fn finish(&mut self) -> Option<Duration> {
        self.curr.take().map(|step| {
            let elapsed = step.start_time.elapsed();
            info!("{} - STOP {:.3} s", step.name, seconds(elapsed));
            elapsed
        })
    }

    pub fn total(&mut self) -> Duration {
        self.finish();
        let elapsed = self.start_time.elapsed();
        info!("TOTAL - {:.3} s", seconds(elapsed));
        elapsed
    }
}

impl Drop for Profiler {
    fn drop(&mut self) {
        self.total();
    }
}
