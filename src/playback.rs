//! Step-by-step replay of the path labels.
//!
//! When replay is on, labels appear one at a time in step order so the robot's run can be followed
//! as it happened. When it is off, every label is shown at once.

use std::time::{Duration, Instant};

use log::debug;

use crate::path::Label;

/// Default delay between two revealed labels, in milliseconds.
pub(crate) const STEP_DELAY_MS: u64 = 200;

/// Replay state manager for the path labels.
///
/// This structure tracks whether replay is active, how many labels have been revealed so far and
/// when the last one was revealed.
#[derive(Debug)]
pub(crate) struct Playback {
    /// Whether labels are revealed progressively.
    pub(crate) enabled: bool,
    /// Number of labels revealed so far.
    ///
    /// Only meaningful while replay is enabled.
    pub(crate) revealed: usize,
    /// Time to wait between two revealed labels.
    pub(crate) delay: Duration,
    /// Timestamp of the last reveal, or of the last restart.
    pub(crate) last_update_time: Instant,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(false, Duration::from_millis(STEP_DELAY_MS))
    }
}

impl Playback {
    /// Creates a replay manager with nothing revealed yet.
    pub(crate) fn new(enabled: bool, delay: Duration) -> Self {
        Self {
            enabled,
            revealed: 0,
            delay,
            last_update_time: Instant::now(),
        }
    }

    /// Hides every label again and restarts the timing.
    pub(crate) fn restart(&mut self) {
        self.revealed = 0;
        self.last_update_time = Instant::now();
    }

    /// Switches between replay and showing every label, starting over either way.
    pub(crate) fn toggle(&mut self) {
        self.enabled = !self.enabled;
        self.restart();
        debug!("replay {}", if self.enabled { "on" } else { "off" });
    }

    /// Reveals the next label once the delay has elapsed.
    ///
    /// At most one label is revealed per call and the count never goes past `total`. Replay stops
    /// on the last label instead of starting over.
    pub(crate) fn update(&mut self, total: usize) {
        if !self.enabled || self.revealed >= total {
            return;
        }

        if self.last_update_time.elapsed() >= self.delay {
            self.last_update_time = Instant::now();
            self.revealed += 1;

            if self.revealed == total {
                debug!("replay reached the last of {total} steps");
            }
        }
    }

    /// Returns the labels currently visible.
    pub(crate) fn visible<'labels>(&self, labels: &'labels [Label]) -> &'labels [Label] {
        if self.enabled {
            labels.get(..self.revealed).unwrap_or(labels)
        } else {
            labels
        }
    }
}
