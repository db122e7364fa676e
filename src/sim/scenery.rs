//! Parallax scenery: lane markings, clouds and roadside tree rows
//!
//! Each layer scrolls at its own speed to sell forward motion. Scenery lives
//! outside the session, so a restart keeps the road where it was.

use rand::Rng;

use super::entity::{Cloud, Side};
use crate::consts::*;

/// Tree rows move by this much per simulation tick
pub const TREE_SPEED_PER_TICK: f32 = TREE_SPEED_PER_SECOND / TICKS_PER_SECOND;

#[derive(Debug, Clone)]
pub struct Scenery {
    /// Top edge of each centre-line dash
    pub lines: Vec<f32>,
    pub clouds: Vec<Cloud>,
    /// Row phase in `[0, TREE_SPACING)`
    pub tree_offset: f32,
}

impl Scenery {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut lines = Vec::new();
        let mut y = -LINE_LENGTH;
        while y < SCREEN_HEIGHT + LINE_SPACING {
            lines.push(y);
            y += LINE_SPACING;
        }

        let mut clouds = Vec::with_capacity(CLOUDS_PER_SIDE * 2);
        for _ in 0..CLOUDS_PER_SIDE {
            clouds.push(Cloud::new(Side::Left, rng));
            clouds.push(Cloud::new(Side::Right, rng));
        }

        Self {
            lines,
            clouds,
            tree_offset: 0.0,
        }
    }

    /// Advance lane markings and tree rows by one tick
    pub fn advance_road(&mut self) {
        for y in &mut self.lines {
            *y += LINE_SPEED;
            if *y > SCREEN_HEIGHT {
                *y = -LINE_LENGTH;
            }
        }
        self.tree_offset = (self.tree_offset + TREE_SPEED_PER_TICK) % TREE_SPACING;
    }

    /// Advance every cloud by one tick
    pub fn advance_clouds<R: Rng>(&mut self, rng: &mut R) {
        let speed = LINE_SPEED * CLOUD_SPEED_FACTOR;
        for cloud in &mut self.clouds {
            cloud.advance(speed, rng);
        }
    }

    /// Baseline y of every visible tree row, phase applied
    pub fn tree_rows(&self) -> impl Iterator<Item = f32> + '_ {
        let mut base = TREE_FIRST_ROW;
        std::iter::from_fn(move || {
            if base >= SCREEN_HEIGHT + TREE_SPACING {
                return None;
            }
            let y = base + self.tree_offset;
            base += TREE_SPACING;
            Some(y)
        })
    }
}
