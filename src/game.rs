//! Frame loop driver
//!
//! Owns the session state and hands it to the simulation by mutable borrow
//! each step. One frame = poll input, run fixed steps, render, present.

use std::time::{Duration, Instant};

use crate::highscores::{HighScoreEntry, HighScores, now_timestamp};
use crate::platform::{InputState, RenderBackend};
use crate::renderer::{Projection, build_scene, submit};
use crate::settings::Settings;
use crate::sim::{FixedTimestep, GameState, TickInput, TickReport, tick};

/// How a frame ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    /// Backend asked to close
    Quit,
    /// Health ran out this frame or earlier
    GameOver,
}

/// Game instance holding all state
pub struct Game {
    pub settings: Settings,
    pub state: GameState,
    pub timestep: FixedTimestep,
    pub input: InputState,
    /// Steer automatically instead of reading keys
    pub autopilot: bool,
    pub frames: u64,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let state = GameState::from_settings(&settings);
        Self {
            settings,
            state,
            timestep: FixedTimestep::default(),
            input: InputState::default(),
            autopilot: false,
            frames: 0,
        }
    }

    pub fn open_window(&self, backend: &mut dyn RenderBackend) {
        let s = &self.settings;
        backend.create_window(s.window_width, s.window_height, Projection::from_settings(s));
        backend.set_camera(s.initial_eye, s.initial_target, glam::Vec3::Y);
    }

    /// Run simulation steps for `elapsed` seconds of wall time
    pub fn update(&mut self, elapsed: f32) -> Vec<TickReport> {
        let steps = self.timestep.advance(elapsed);
        let input = TickInput {
            keys: self.input.keys(),
            autopilot: self.autopilot,
        };

        let mut reports = Vec::with_capacity(steps as usize);
        for _ in 0..steps {
            if self.state.is_over() {
                break;
            }
            reports.push(tick(&mut self.state, &input));
        }
        reports
    }

    pub fn render(&self, backend: &mut dyn RenderBackend) {
        submit(&build_scene(&self.state), backend);
    }

    /// Poll, simulate and draw one frame
    pub fn frame(&mut self, backend: &mut dyn RenderBackend, elapsed: f32) -> FrameOutcome {
        let events = backend.poll_events();
        self.input.apply(&events);
        if self.input.quit {
            return FrameOutcome::Quit;
        }

        self.update(elapsed);
        self.render(backend);
        self.frames += 1;

        if self.state.is_over() {
            FrameOutcome::GameOver
        } else {
            FrameOutcome::Continue
        }
    }

    /// Run frames until quit or game over, pacing with the configured delay
    pub fn run(&mut self, backend: &mut dyn RenderBackend) -> FrameOutcome {
        self.open_window(backend);
        let delay = Duration::from_millis(self.settings.frame_delay_ms);
        let mut last = Instant::now();
        loop {
            let now = Instant::now();
            let elapsed = now.duration_since(last).as_secs_f32();
            last = now;

            let outcome = self.frame(backend, elapsed);
            if outcome != FrameOutcome::Continue {
                log::info!(
                    "Session ended ({:?}) after {} frames: score {}, health {}",
                    outcome,
                    self.frames,
                    self.state.player.score,
                    self.state.player.health
                );
                return outcome;
            }
            std::thread::sleep(delay);
        }
    }

    /// Put the finished run on the leaderboard
    pub fn record_score(&self, scores: &mut HighScores) -> Option<usize> {
        scores.add_score(HighScoreEntry {
            score: self.state.player.score,
            ticks: self.state.time_ticks,
            health: self.state.player.health,
            timestamp: now_timestamp(),
        })
    }
}
