//! Arena state: everything a level owns between ticks

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::boss::Boss;
use super::hazard::{Goal, Hazard, HazardKind};
use super::levels::{self, LevelLayout};
use super::rect::Rect;
use super::surface::{Surface, SurfaceTag};
use crate::tuning::Tuning;

/// Why the actor was sent back to the respawn point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RespawnCause {
    Hazard(HazardKind),
    FellOut,
}

/// Things that happened during a tick, for sound and UI cues
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ArenaEvent {
    SurfaceVanished { index: usize },
    SurfaceReappeared { index: usize },
    /// Gameplay failure: actor respawned and every vanishing surface restored
    Respawned { cause: RespawnCause },
    CascadeFired,
    CascadeRestored,
    BossHit { hits: u32, x: f32, y: f32 },
    BossDefeated,
    LevelCompleted,
}

/// A set of cascading surfaces that drop together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CascadeGroup {
    /// Indices into `Arena::surfaces`
    pub members: Vec<usize>,
    /// Resting on this member fires the group
    pub top: usize,
    pub fired: bool,
}

/// RNG state wrapper for reproducible runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }
}

/// One level's simulation state. The actor is borrowed per tick, never owned.
#[derive(Debug, Clone)]
pub struct Arena {
    pub level_id: u32,
    pub name: String,
    pub tuning: Tuning,
    /// Collision order is stable: the order the layout listed them
    pub surfaces: Vec<Surface>,
    pub hazards: Vec<Hazard>,
    pub goal: Goal,
    pub boss: Option<Boss>,
    pub cascade: Option<CascadeGroup>,
    pub respawn: Vec2,
    /// Top of the ground slab; the cascade trap rearms when the actor reaches it
    pub ground_line: f32,
    /// Below this y the actor has left the level
    pub fall_limit: f32,
    pub palette: u32,
    pub background: u32,
    pub completed: bool,
    /// Ticks since the last build
    pub time_ticks: u64,
    pub rng_state: RngState,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<ArenaEvent>,
}

impl Arena {
    /// Create an arena holding the fallback level
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let rng_state = RngState::new(seed);
        let mut arena = Self {
            level_id: levels::FALLBACK_LEVEL,
            name: String::new(),
            tuning,
            surfaces: Vec::new(),
            hazards: Vec::new(),
            goal: Goal::new(Rect::default()),
            boss: None,
            cascade: None,
            respawn: Vec2::ZERO,
            ground_line: 0.0,
            fall_limit: 0.0,
            palette: 0,
            background: 0,
            completed: false,
            time_ticks: 0,
            rng: rng_state.to_rng(),
            rng_state,
            events: Vec::new(),
        };
        arena.build(levels::FALLBACK_LEVEL);
        arena
    }

    /// Clear and repopulate from the built-in table (unknown ids fall back)
    pub fn build(&mut self, level_id: u32) {
        let layout = levels::layout(level_id);
        let id = if level_id < levels::LEVEL_COUNT {
            level_id
        } else {
            levels::FALLBACK_LEVEL
        };
        self.build_from_layout(id, &layout);
    }

    /// Clear and repopulate from an arbitrary layout
    pub fn build_from_layout(&mut self, level_id: u32, layout: &LevelLayout) {
        self.level_id = level_id;
        self.name = layout.name.clone();
        self.surfaces = layout.surfaces.iter().map(|s| s.build()).collect();
        self.hazards = layout
            .hazards
            .iter()
            .map(|h| Hazard::new(h.rect, h.kind))
            .collect();
        self.goal = Goal::new(layout.goal);
        self.boss = layout
            .boss
            .as_ref()
            .map(|b| Boss::new(Vec2::new(b.x, b.y), b.max_hits));
        let cascade = layout
            .cascade
            .as_ref()
            .and_then(|c| self.validate_cascade(&c.members, c.top));
        self.cascade = cascade;
        self.respawn = Vec2::new(layout.respawn.0, layout.respawn.1);
        self.ground_line = layout.ground_line;
        self.fall_limit = layout.fall_limit;
        self.palette = layout.palette;
        self.background = layout.background;
        self.completed = false;
        self.time_ticks = 0;
        self.events.clear();

        // Same level + same seed replays identically
        self.rng_state.stream = u64::from(level_id);
        self.rng = self.rng_state.to_rng();

        log::info!(
            "Built level {} '{}': {} surfaces, {} hazards, boss={}, cascade={}",
            level_id,
            self.name,
            self.surfaces.len(),
            self.hazards.len(),
            self.boss.is_some(),
            self.cascade.is_some()
        );
    }

    /// Keep only members that exist and are cascading surfaces
    fn validate_cascade(&self, members: &[usize], top: usize) -> Option<CascadeGroup> {
        let members: Vec<usize> = members
            .iter()
            .copied()
            .filter(|&i| {
                let ok = self
                    .surfaces
                    .get(i)
                    .is_some_and(|s| s.tag() == SurfaceTag::CascadingVanishing);
                if !ok {
                    log::warn!("Cascade member {} is not a cascading surface, skipped", i);
                }
                ok
            })
            .collect();

        if !members.contains(&top) {
            log::warn!("Cascade top {} is not a valid member, trap disabled", top);
            return None;
        }
        Some(CascadeGroup {
            members,
            top,
            fired: false,
        })
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Boss hit counter for HUDs
    pub fn boss_hits(&self) -> Option<u32> {
        self.boss.as_ref().map(|b| b.hits)
    }

    /// Append a surface at the end of the collision order
    pub fn add_surface(&mut self, surface: Surface) -> usize {
        self.surfaces.push(surface);
        self.surfaces.len() - 1
    }

    /// Put the actor at the respawn point with no momentum
    pub fn place_actor(&self, actor: &mut Actor) {
        actor.respawn(self.respawn);
    }

    /// Gameplay failure: respawn and restore every vanishing surface
    pub fn fail(&mut self, actor: &mut Actor, cause: RespawnCause) {
        actor.respawn(self.respawn);
        for surface in &mut self.surfaces {
            surface.reset();
        }
        if let Some(group) = &mut self.cascade {
            group.fired = false;
        }
        log::debug!("Respawn ({:?}) at tick {}", cause, self.time_ticks);
        self.events.push(ArenaEvent::Respawned { cause });
    }

    /// Advance one fixed tick
    pub fn tick(&mut self, actor: &mut Actor) {
        super::tick::tick(self, actor);
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[ArenaEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<ArenaEvent> {
        std::mem::take(&mut self.events)
    }
}
