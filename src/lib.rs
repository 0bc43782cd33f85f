//! Vault Vault - A fixed-timestep 2D platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor physics, collision resolution, platform state machines)
//! - `session`: Level flow, completion tracking and the fixed-step frame driver
//! - `progress`: In-memory completion flags and best times
//! - `tuning`: Data-driven physics and gameplay constants

pub mod progress;
pub mod session;
pub mod sim;
pub mod tuning;

pub use progress::Progress;
pub use session::{Session, SessionEvent, SessionPhase};
pub use tuning::{Tuning, TuningPreset};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest real-time slice a single frame may feed the accumulator
    pub const MAX_FRAME_SECS: f32 = 0.1;

    /// Playfield dimensions (pixels, y grows downward)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Actor box
    pub const ACTOR_WIDTH: f32 = 30.0;
    pub const ACTOR_HEIGHT: f32 = 50.0;

    /// Where the actor appears on level start and after every failure
    pub const RESPAWN_X: f32 = 50.0;
    pub const RESPAWN_Y: f32 = 300.0;

    /// Top edge of the shared ground slab
    pub const GROUND_LINE: f32 = 500.0;
    /// Falling below this y counts as leaving the level
    pub const FALL_LIMIT: f32 = 600.0;

    /// Boss box
    pub const BOSS_WIDTH: f32 = 50.0;
    pub const BOSS_HEIGHT: f32 = 50.0;

    /// Session transitions (ticks)
    pub const LEVEL_COMPLETE_TICKS: u32 = 60;
    pub const LEVEL_CHANGE_TICKS: u32 = 45;
}

/// Pack an RGB triple into the `0xRRGGBB` color tags carried by surfaces and hazards
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}
