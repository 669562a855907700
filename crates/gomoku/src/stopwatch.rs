//! Match clock.

use std::time::{Duration, Instant};

/// Elapsed time since the match started, paused while stopped.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
    accumulated: Duration,
}

impl Stopwatch {
    /// Creates a stopped clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the clock; no-op while running.
    pub fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    /// Stops the clock, keeping the elapsed time.
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.accumulated += started.elapsed();
        }
    }

    /// Stops the clock and clears it to zero.
    pub fn reset(&mut self) {
        self.started = None;
        self.accumulated = Duration::ZERO;
    }

    /// Returns the elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.accumulated + self.started.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

impl std::fmt::Display for Stopwatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_elapsed(self.elapsed()))
    }
}

/// Formats a duration as `HH:MM:SS`, wrapping at 24 hours.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs() % 86_400;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}
