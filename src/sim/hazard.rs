//! Danger zones and the goal marker

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::rgb;

/// Hazard types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    Spike,
    Lava,
    Electric,
    Saw,
    /// Walkable, low friction, never lethal
    Ice,
}

/// What touching a hazard does to the actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Immediate respawn
    Lethal,
    /// Acts as a slippery floor
    Tractive,
}

impl HazardKind {
    pub fn classify(&self) -> Contact {
        match self {
            HazardKind::Ice => Contact::Tractive,
            HazardKind::Spike | HazardKind::Lava | HazardKind::Electric | HazardKind::Saw => {
                Contact::Lethal
            }
        }
    }

    pub fn is_lethal(&self) -> bool {
        self.classify() == Contact::Lethal
    }

    /// Default render color
    pub fn color(&self) -> u32 {
        match self {
            HazardKind::Spike => rgb(128, 128, 128),
            HazardKind::Lava => rgb(255, 200, 0),
            HazardKind::Electric => rgb(80, 220, 255),
            HazardKind::Saw => rgb(192, 192, 192),
            HazardKind::Ice => rgb(180, 240, 255),
        }
    }
}

/// A typed danger zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub rect: Rect,
    pub kind: HazardKind,
    /// Cosmetic animation counter
    #[serde(skip)]
    pub anim_ticks: u32,
}

impl Hazard {
    pub fn new(rect: Rect, kind: HazardKind) -> Self {
        Self {
            rect,
            kind,
            anim_ticks: 0,
        }
    }

    pub fn classify(&self) -> Contact {
        self.kind.classify()
    }

    pub fn update(&mut self) {
        self.anim_ticks = self.anim_ticks.wrapping_add(1);
    }
}

/// The level exit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub rect: Rect,
    /// Cosmetic pulse counter
    #[serde(skip)]
    pub anim_ticks: u32,
}

impl Goal {
    pub fn new(rect: Rect) -> Self {
        Self { rect, anim_ticks: 0 }
    }

    pub fn update(&mut self) {
        self.anim_ticks = self.anim_ticks.wrapping_add(1);
    }
}
