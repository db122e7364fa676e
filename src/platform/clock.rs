//! Frame timing: fixed-step accumulator, frame limiter and FPS counter

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::settings::FpsLimit;

/// Longest frame the accumulator will absorb (seconds)
const MAX_FRAME_DT: f64 = 0.1;

/// Converts variable frame times into a whole number of simulation ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    accumulator: f64,
    step: f64,
    max_substeps: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f64, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    /// Add a frame's elapsed time; returns how many ticks to run now
    pub fn advance(&mut self, frame_dt: f64) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        // Drop whatever we could not catch up on
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        substeps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Holds each frame to the configured frame budget
#[derive(Debug, Clone, Copy)]
pub struct FrameLimiter {
    frame_time: Option<f64>,
}

impl FrameLimiter {
    pub fn new(limit: FpsLimit) -> Self {
        Self {
            frame_time: limit.frame_time(),
        }
    }

    /// Time left in this frame's budget (None when nothing is left or unlocked)
    pub fn remaining(&self, elapsed: f64) -> Option<f64> {
        let target = self.frame_time?;
        let remaining = target - elapsed;
        (remaining > 0.0).then_some(remaining)
    }

    /// Block until the frame budget that started at `frame_start` is spent.
    /// `now` reads the same clock as `frame_start`.
    pub fn wait(&self, frame_start: f64, now: impl Fn() -> f64) {
        let Some(target) = self.frame_time else {
            return;
        };
        if self.remaining(now() - frame_start).is_none() {
            return;
        }

        // Native: use sleep for bulk, then spin-wait for precision
        #[cfg(not(target_arch = "wasm32"))]
        {
            let spin_margin = 0.002;
            while now() - frame_start + spin_margin < target {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            while now() - frame_start < target {
                std::hint::spin_loop();
            }
        }
        // WASM: the browser paces frames for us
        #[cfg(target_arch = "wasm32")]
        let _ = target;
    }
}

/// Rolling average over the last 60 frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    /// Record a frame timestamp (seconds)
    pub fn record(&mut self, time: f64) {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();

        // Oldest sample is the one we will overwrite next
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = ((self.frame_times.len() - 1) as f64 / elapsed).round() as u32;
            }
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
