//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (collection order of the level layout)
//! - No rendering or platform dependencies

pub mod actor;
pub mod arena;
pub mod boss;
pub mod clock;
pub mod collision;
pub mod hazard;
pub mod levels;
pub mod rect;
pub mod surface;
pub mod tick;

pub use actor::{Actor, Traction};
pub use arena::{Arena, ArenaEvent, CascadeGroup, RespawnCause, RngState};
pub use boss::{Boss, BossOutcome};
pub use clock::FixedStep;
pub use collision::{CollisionResult, Face, resolve_against};
pub use hazard::{Contact, Goal, Hazard, HazardKind};
pub use levels::{LEVEL_COUNT, LevelLayout};
pub use rect::Rect;
pub use surface::{Axis, Surface, SurfaceKind, SurfaceTag, Vanish, VanishConfig, VanishPhase};
pub use tick::tick;
