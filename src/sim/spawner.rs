//! Tick-counted traffic spawner
//!
//! The cadence is fixed: with threshold `T` exactly one obstacle appears every
//! `T + 1` ticks. Only the lane position is random.

use rand::Rng;

use super::entity::Obstacle;
use crate::consts::SPAWN_THRESHOLD;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spawner {
    /// Ticks since the last spawn
    pub timer: u32,
    pub threshold: u32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(SPAWN_THRESHOLD)
    }
}

impl Spawner {
    pub fn new(threshold: u32) -> Self {
        Self { timer: 0, threshold }
    }

    /// Count one tick; returns a new obstacle when the timer passes the threshold
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Option<Obstacle> {
        self.timer += 1;
        if self.timer > self.threshold {
            self.timer = 0;
            Some(Obstacle::spawn(rng))
        } else {
            None
        }
    }
}
