use std::time::Instant;
use tracing::debug;

/// Stage timer for a generation run, reporting through `tracing` at debug level.
pub struct PerformanceProfiler {
    start_time: Instant,
    last_time: Instant,
}

impl PerformanceProfiler {
    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            last_time: start_time,
        }
    }

    /// Milliseconds since `from`; also marks the end of the current stage.
    pub fn get_elapsed_time_in_ms(&mut self, from: Instant) -> u128 {
        let current_time = Instant::now();
        let time_in_ms = current_time.duration_since(from).as_millis();
        self.last_time = current_time;
        return time_in_ms;
    }

    pub fn log_elapsed_time_in_ms(&mut self, stage: &str) {
        let elapsed_ms = self.get_elapsed_time_in_ms(self.last_time);
        debug!(stage, elapsed_ms = elapsed_ms as u64, "stage finished");
    }

    pub fn log_total_elapsed_time_in_ms(&mut self, stage: &str) {
        let elapsed_ms = self.get_elapsed_time_in_ms(self.start_time);
        debug!(stage, elapsed_ms = elapsed_ms as u64, "run finished");
    }
}
