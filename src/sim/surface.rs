//! Platforms the actor can stand on or be blocked by
//!
//! One `Surface` type with shared geometry and a closed behavior payload:
//! - `Static`: never changes
//! - `Kinetic`: linear back-and-forth sweep along one axis
//! - `Vanishing`: timed disappear/reappear state machine, parameterized by
//!   `VanishConfig` to cover the once-only and cascade-group variants

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Axis a kinetic surface travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Oscillating motion between `start` and `end` (inclusive)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kinetic {
    pub axis: Axis,
    pub start: f32,
    pub end: f32,
    /// Pixels per tick
    pub speed: f32,
    /// Current coordinate along `axis`
    pub position: f32,
    pub forward: bool,
}

impl Kinetic {
    pub fn new(axis: Axis, start: f32, end: f32, speed: f32, position: f32) -> Self {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        Self {
            axis,
            start,
            end,
            speed: speed.abs(),
            position: position.clamp(start, end),
            forward: true,
        }
    }

    /// Advance one tick; flips direction on reaching either bound
    pub fn step(&mut self) {
        if self.forward {
            self.position = (self.position + self.speed).min(self.end);
            if self.position >= self.end {
                self.forward = false;
            }
        } else {
            self.position = (self.position - self.speed).max(self.start);
            if self.position <= self.start {
                self.forward = true;
            }
        }
    }
}

/// Which flavour of vanishing behavior a surface has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VanishConfig {
    /// After the first disappear/reappear cycle the surface stays solid for good
    pub permanent_after_first_cycle: bool,
    /// A cascade controller may set visibility directly
    pub externally_resettable: bool,
}

impl VanishConfig {
    pub const PLAIN: Self = Self {
        permanent_after_first_cycle: false,
        externally_resettable: false,
    };
    pub const ONCE: Self = Self {
        permanent_after_first_cycle: true,
        externally_resettable: false,
    };
    pub const CASCADE: Self = Self {
        permanent_after_first_cycle: false,
        externally_resettable: true,
    };
}

/// Observable state of a vanishing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VanishPhase {
    Visible,
    Hidden { counter: u32 },
    PermanentlyVisible,
}

/// Timed disappear/reappear state machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vanish {
    pub config: VanishConfig,
    /// Ticks spent hidden before reappearing
    pub duration: u32,
    visible: bool,
    counter: u32,
    cycle_complete: bool,
}

impl Vanish {
    pub fn new(duration: u32, config: VanishConfig) -> Self {
        Self {
            config,
            duration,
            visible: true,
            counter: 0,
            cycle_complete: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Solid exactly when visible
    pub fn is_solid(&self) -> bool {
        self.visible
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn cycle_complete(&self) -> bool {
        self.cycle_complete
    }

    pub fn phase(&self) -> VanishPhase {
        if !self.visible {
            VanishPhase::Hidden {
                counter: self.counter,
            }
        } else if self.cycle_complete {
            VanishPhase::PermanentlyVisible
        } else {
            VanishPhase::Visible
        }
    }

    /// Hide the surface. Returns true if it actually vanished.
    pub fn trigger(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        if self.config.permanent_after_first_cycle && self.cycle_complete {
            return false;
        }
        self.visible = false;
        self.counter = 0;
        true
    }

    /// Advance the hidden countdown. Returns true if the surface reappeared this tick.
    pub fn step(&mut self) -> bool {
        if self.visible {
            return false;
        }
        self.counter += 1;
        if self.counter >= self.duration {
            self.visible = true;
            self.counter = 0;
            if self.config.permanent_after_first_cycle {
                self.cycle_complete = true;
            }
            return true;
        }
        false
    }

    /// Back to the untriggered default
    pub fn reset(&mut self) {
        self.visible = true;
        self.counter = 0;
        self.cycle_complete = false;
    }

    /// Direct visibility control for cascade groups. Ignored unless externally resettable.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if !self.config.externally_resettable {
            return false;
        }
        self.visible = visible;
        self.counter = 0;
        true
    }
}

/// Surface behavior payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceKind {
    Static,
    Kinetic(Kinetic),
    Vanishing(Vanish),
}

/// Variant tag for renderers and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceTag {
    Static,
    Kinetic,
    Vanishing,
    VanishingOnce,
    CascadingVanishing,
}

/// A platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub rect: Rect,
    /// Render color (`0xRRGGBB`); `None` uses the level palette
    pub color: Option<u32>,
    pub kind: SurfaceKind,
}

impl Surface {
    pub fn new_static(rect: Rect) -> Self {
        Self {
            rect,
            color: None,
            kind: SurfaceKind::Static,
        }
    }

    /// A kinetic surface; `start`/`end` are along `axis`, the other coordinate is fixed
    pub fn new_kinetic(rect: Rect, axis: Axis, start: f32, end: f32, speed: f32) -> Self {
        let position = match axis {
            Axis::Horizontal => rect.x,
            Axis::Vertical => rect.y,
        };
        let mut surface = Self {
            rect,
            color: None,
            kind: SurfaceKind::Kinetic(Kinetic::new(axis, start, end, speed, position)),
        };
        surface.sync_kinetic_rect();
        surface
    }

    pub fn new_vanishing(rect: Rect, duration: u32, config: VanishConfig) -> Self {
        Self {
            rect,
            color: None,
            kind: SurfaceKind::Vanishing(Vanish::new(duration, config)),
        }
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn tag(&self) -> SurfaceTag {
        match &self.kind {
            SurfaceKind::Static => SurfaceTag::Static,
            SurfaceKind::Kinetic(_) => SurfaceTag::Kinetic,
            SurfaceKind::Vanishing(v) if v.config.externally_resettable => {
                SurfaceTag::CascadingVanishing
            }
            SurfaceKind::Vanishing(v) if v.config.permanent_after_first_cycle => {
                SurfaceTag::VanishingOnce
            }
            SurfaceKind::Vanishing(_) => SurfaceTag::Vanishing,
        }
    }

    /// Invisible surfaces take part in no collision checks
    pub fn is_visible(&self) -> bool {
        match &self.kind {
            SurfaceKind::Vanishing(v) => v.is_visible(),
            _ => true,
        }
    }

    pub fn vanish(&self) -> Option<&Vanish> {
        match &self.kind {
            SurfaceKind::Vanishing(v) => Some(v),
            _ => None,
        }
    }

    pub fn vanish_mut(&mut self) -> Option<&mut Vanish> {
        match &mut self.kind {
            SurfaceKind::Vanishing(v) => Some(v),
            _ => None,
        }
    }

    /// Advance motion or timers by one tick. Returns true if a hidden surface reappeared.
    pub fn update(&mut self) -> bool {
        match &mut self.kind {
            SurfaceKind::Static => false,
            SurfaceKind::Kinetic(k) => {
                k.step();
                self.sync_kinetic_rect();
                false
            }
            SurfaceKind::Vanishing(v) => v.step(),
        }
    }

    /// Hide a vanishing surface; no-op for the others
    pub fn trigger_disappear(&mut self) -> bool {
        self.vanish_mut().is_some_and(Vanish::trigger)
    }

    /// Restore a vanishing surface to its default; no-op for the others
    pub fn reset(&mut self) {
        if let Some(v) = self.vanish_mut() {
            v.reset();
        }
    }

    fn sync_kinetic_rect(&mut self) {
        if let SurfaceKind::Kinetic(k) = &self.kind {
            // Rendered and collided on whole pixels
            let snapped = k.position.trunc();
            match k.axis {
                Axis::Horizontal => self.rect.x = snapped,
                Axis::Vertical => self.rect.y = snapped,
            }
        }
    }
}
