//! Runs simulation ticks from rendered frames

use super::clock::FixedStep;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Owns the world and feeds it fixed ticks as frame time accumulates
#[derive(Debug, Clone)]
pub struct Driver {
    pub state: GameState,
    step: FixedStep,
    /// Restart stays pending until a tick has consumed it
    pending_restart: bool,
    /// Events from every tick run during the last frame
    frame_events: Vec<GameEvent>,
}

impl Driver {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            step: FixedStep::default(),
            pending_restart: false,
            frame_events: Vec::new(),
        }
    }

    /// Run as many ticks as `frame_dt` seconds allow; returns the tick count
    pub fn update(&mut self, input: &TickInput, frame_dt: f64) -> u32 {
        self.frame_events.clear();
        self.pending_restart |= input.restart;

        let substeps = self.step.advance(frame_dt);
        let mut input = input.clone();
        for _ in 0..substeps {
            input.restart = self.pending_restart;
            tick(&mut self.state, &input);
            // One-shot inputs are spent by the first tick that sees them
            self.pending_restart = false;

            let restarted = self
                .state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::Restarted { .. }));
            self.frame_events.extend_from_slice(&self.state.events);
            if restarted {
                self.step.reset();
                break;
            }
        }
        substeps
    }

    pub fn frame_events(&self) -> &[GameEvent] {
        &self.frame_events
    }
}
