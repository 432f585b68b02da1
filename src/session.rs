//! Frame driver
//!
//! Turns variable frame times into whole simulation ticks, swaps in autopilot
//! input for automated sides, holds the real-time pause after a win, and
//! carries the run/quit flag.

use std::time::Duration;

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::settings::{Controller, Settings};
use crate::sim::{Autopilot, GameEvent, GamePhase, KeyState, MatchState, Side, tick};

/// A running game: match state plus its clock
#[derive(Debug)]
pub struct Session {
    state: MatchState,
    autopilots: Vec<Autopilot>,
    tick_dt: f32,
    win_pause: Duration,
    accumulator: f32,
    /// Remaining real-time pause after a win (seconds)
    stall: f32,
    running: bool,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        let autopilots = [Side::Left, Side::Right]
            .into_iter()
            .filter(|&side| settings.controller(side) == Controller::Autopilot)
            .map(|side| Autopilot::new(side, settings.autopilot_seed))
            .collect();

        Self {
            state: MatchState::new(settings),
            autopilots,
            tick_dt: settings.tick_dt(),
            win_pause: settings.win_pause(),
            accumulator: 0.0,
            stall: 0.0,
            running: true,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True while the post-win pause is holding the simulation
    pub fn is_stalled(&self) -> bool {
        self.stall > 0.0
    }

    /// Stop ticking; takes effect at the next `update`
    pub fn request_quit(&mut self) {
        if self.running {
            log::info!("Quit requested after {} ticks", self.state.time_ticks);
        }
        self.running = false;
    }

    /// Advance by `dt` seconds of wall-clock time
    pub fn update(&mut self, dt: f32, keys: &KeyState) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.running {
            return events;
        }

        let elapsed = dt.max(0.0);

        // Slow frames count in full toward the pause
        if self.stall > 0.0 {
            self.stall -= elapsed;
            if self.stall > 0.0 {
                return events;
            }
            // Time left over after the pause elapses is not simulated
            self.stall = 0.0;
            self.accumulator = 0.0;
            return events;
        }

        self.accumulator += elapsed.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.tick_dt && substeps < MAX_SUBSTEPS {
            let input = self.input_for_tick(keys);
            let tick_events = tick(&mut self.state, &input);
            self.accumulator -= self.tick_dt;
            substeps += 1;

            let won = tick_events
                .iter()
                .any(|e| matches!(e, GameEvent::MatchWon { .. }));
            events.extend(tick_events);

            if won {
                self.stall = self.win_pause.as_secs_f32();
                self.accumulator = 0.0;
                break;
            }
        }

        // Don't carry a backlog past the substep cap
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.tick_dt);
        }

        events
    }

    /// Human keys with automated sides overridden
    fn input_for_tick(&mut self, keys: &KeyState) -> KeyState {
        if self.state.phase != GamePhase::Playing {
            return *keys;
        }
        let mut input = *keys;
        for pilot in &mut self.autopilots {
            let side = pilot.side();
            let (up, down) = pilot.keys(&self.state).for_side(side);
            input = input.with_side(side, up, down);
        }
        input
    }
}
