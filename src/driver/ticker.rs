//! Frame pacing for the run loop

use std::time::{Duration, Instant};

/// Gates generation advances to at most one per fixed interval.
///
/// The first call is due straight away; afterwards the deadline moves
/// forward by exactly one interval per due tick, so a slow frame does
/// not shift the schedule.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_tick: Duration,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_tick: Duration::ZERO,
        }
    }

    /// Whether a generation is due at `elapsed` time since the loop started
    pub fn is_due(&mut self, elapsed: Duration) -> bool {
        if elapsed >= self.next_tick {
            self.next_tick += self.interval;
            true
        } else {
            false
        }
    }
}

/// Caps the loop at a fixed number of frames per second
#[derive(Debug)]
pub struct FramePacer {
    frame_time: Duration,
    last_frame: Instant,
}

impl FramePacer {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame_time: Duration::from_secs(1) / frame_rate.max(1),
            last_frame: Instant::now(),
        }
    }

    /// Sleep out whatever is left of the current frame
    pub fn wait(&mut self) {
        let spent = self.last_frame.elapsed();
        if let Some(remaining) = self.frame_time.checked_sub(spent) {
            std::thread::sleep(remaining);
        }
        self.last_frame = Instant::now();
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }
}
