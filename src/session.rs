//! Session: level flow around the arena simulation
//!
//! Owns the actor, the active arena, completion progress and the fixed-step
//! clock. Frontends feed it input and elapsed time and read state back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::progress::Progress;
use crate::sim::levels::LEVEL_COUNT;
use crate::sim::{Actor, Arena, ArenaEvent, FixedStep, Rect, Surface};
use crate::tuning::Tuning;

/// Debug-placed platforms are this size, centred on the click
pub const DEBUG_PLATFORM_SIZE: Vec2 = Vec2::new(100.0, 20.0);

/// Where the session is in its level flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No level running
    Menu,
    /// Arena ticking
    Playing,
    /// Level cleared, showing the result
    LevelComplete,
    /// Transition into the next level
    LevelChange,
}

/// Events for the UI, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    LevelStarted { level: u32 },
    LevelFinished { level: u32, ticks: u64, new_best: bool },
    /// Every level has been cleared in sequence
    RunFinished,
    Arena(ArenaEvent),
}

/// Game-wide state for one player session
#[derive(Debug, Clone)]
pub struct Session {
    pub actor: Actor,
    pub arena: Arena,
    pub progress: Progress,
    phase: SessionPhase,
    level: u32,
    /// Countdown for the `LevelComplete` and `LevelChange` phases
    phase_ticks: u32,
    /// Level timer, frozen once the level is cleared
    elapsed_ticks: u64,
    /// Click-to-place platforms; on until a frontend turns it off
    debug: bool,
    clock: FixedStep,
    events: Vec<SessionEvent>,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        log::info!("New session (seed {}, {} tuning)", seed, tuning.preset.as_str());
        Self {
            actor: Actor::default(),
            arena: Arena::new(seed, tuning),
            progress: Progress::new(LEVEL_COUNT as usize),
            phase: SessionPhase::Menu,
            level: 0,
            phase_ticks: 0,
            elapsed_ticks: 0,
            debug: true,
            clock: FixedStep::new(),
            events: Vec::new(),
        }
    }

    /// Build a level and start playing it. Indices past the last level wrap to 0.
    pub fn start_level(&mut self, index: u32) {
        let index = if index < LEVEL_COUNT { index } else { 0 };
        self.level = index;
        self.arena.build(index);
        self.arena.place_actor(&mut self.actor);
        self.elapsed_ticks = 0;
        self.phase_ticks = 0;
        self.phase = SessionPhase::Playing;
        self.clock.reset();
        self.events.push(SessionEvent::LevelStarted { level: index });
    }

    /// Held directions, applied from the next tick on
    pub fn set_intent(&mut self, left: bool, right: bool) {
        self.actor.set_intent(left, right);
    }

    /// Jump if playing and standing on something
    pub fn jump(&mut self) -> bool {
        self.phase == SessionPhase::Playing && self.actor.jump(&self.arena.tuning)
    }

    /// Abandon the current level
    pub fn return_to_menu(&mut self) {
        if self.phase != SessionPhase::Menu {
            log::info!("Back to menu from level {}", self.level);
        }
        self.phase = SessionPhase::Menu;
        self.phase_ticks = 0;
        self.actor.set_intent(false, false);
        self.clock.reset();
    }

    /// Feed real elapsed seconds; runs the fixed ticks that fit and returns how many ran
    pub fn frame(&mut self, elapsed: f32) -> u32 {
        let ticks = self.clock.advance(elapsed);
        for _ in 0..ticks {
            self.tick();
        }
        ticks
    }

    /// Advance the session by one fixed tick
    pub fn tick(&mut self) {
        match self.phase {
            SessionPhase::Menu => {}

            SessionPhase::Playing => {
                self.arena.tick(&mut self.actor);
                self.elapsed_ticks = self.arena.time_ticks;
                self.events
                    .extend(self.arena.drain_events().into_iter().map(SessionEvent::Arena));

                if self.arena.is_completed() {
                    self.finish_level();
                }
            }

            SessionPhase::LevelComplete => {
                self.phase_ticks = self.phase_ticks.saturating_sub(1);
                if self.phase_ticks == 0 {
                    if self.level + 1 < LEVEL_COUNT {
                        self.phase = SessionPhase::LevelChange;
                        self.phase_ticks = LEVEL_CHANGE_TICKS;
                    } else {
                        log::info!(
                            "All levels cleared ({}/{})",
                            self.completed_count(),
                            self.level_count()
                        );
                        self.events.push(SessionEvent::RunFinished);
                        self.return_to_menu();
                    }
                }
            }

            SessionPhase::LevelChange => {
                self.phase_ticks = self.phase_ticks.saturating_sub(1);
                if self.phase_ticks == 0 {
                    self.start_level(self.level + 1);
                }
            }
        }
    }

    fn finish_level(&mut self) {
        let ticks = self.elapsed_ticks;
        let new_best = self.progress.record(self.level as usize, ticks);
        log::info!(
            "Level {} cleared in {} ticks{}",
            self.level,
            ticks,
            if new_best { " (best)" } else { "" }
        );
        self.events.push(SessionEvent::LevelFinished {
            level: self.level,
            ticks,
            new_best,
        });
        self.phase = SessionPhase::LevelComplete;
        self.phase_ticks = LEVEL_COMPLETE_TICKS;
    }

    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
        log::debug!("Debug placement {}", if enabled { "on" } else { "off" });
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Drop a static platform centred on a point. Only in debug mode while playing.
    pub fn debug_place_platform(&mut self, x: f32, y: f32) -> Option<usize> {
        if !self.debug || self.phase != SessionPhase::Playing {
            log::warn!(
                "Platform placement at ({:.0}, {:.0}) rejected (debug={}, phase={:?})",
                x,
                y,
                self.debug,
                self.phase
            );
            return None;
        }
        let size = DEBUG_PLATFORM_SIZE;
        let rect = Rect::new(x - size.x / 2.0, y - size.y / 2.0, size.x, size.y);
        Some(self.arena.add_surface(Surface::new_static(rect)))
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Index of the current (or last played) level
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    pub fn is_level_completed(&self, level: u32) -> bool {
        self.progress.is_completed(level as usize)
    }

    pub fn completed_count(&self) -> usize {
        self.progress.completed_count()
    }

    pub fn level_count(&self) -> usize {
        LEVEL_COUNT as usize
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}
