//! The player-controlled body

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Horizontal traction the actor had at the end of the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Traction {
    /// Normal ground or air: horizontal speed follows intent directly
    #[default]
    Firm,
    /// Standing on ice: horizontal speed carries over between ticks
    Ice,
}

/// The player body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Resting on something solid; only the collision resolver and `jump` touch this
    pub grounded: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub traction: Traction,
}

impl Default for Actor {
    fn default() -> Self {
        Self::new(Vec2::new(RESPAWN_X, RESPAWN_Y))
    }
}

impl Actor {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(ACTOR_WIDTH, ACTOR_HEIGHT),
            vel: Vec2::ZERO,
            grounded: false,
            move_left: false,
            move_right: false,
            traction: Traction::Firm,
        }
    }

    /// Record held directions; both held cancel out
    pub fn set_intent(&mut self, left: bool, right: bool) {
        self.move_left = left;
        self.move_right = right;
    }

    /// Intended horizontal direction: -1, 0 or +1
    pub fn intent_axis(&self) -> f32 {
        match (self.move_left, self.move_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    /// Jump if standing on something. Returns true if the jump happened.
    pub fn jump(&mut self, tuning: &Tuning) -> bool {
        if !self.grounded {
            return false;
        }
        self.vel.y = tuning.jump_impulse;
        self.grounded = false;
        true
    }

    /// Accelerate downward while airborne
    pub fn apply_gravity(&mut self, tuning: &Tuning) {
        if !self.grounded {
            self.vel.y += tuning.gravity;
        }
    }

    /// Turn intent into velocity and integrate position
    pub fn update_intent(&mut self, tuning: &Tuning) {
        // On ice the previous tick's speed carries; friction is applied after collisions
        if self.traction == Traction::Firm {
            self.vel.x = self.intent_axis() * tuning.move_speed;
        }
        self.vel.y = self.vel.y.min(tuning.max_fall_speed);
        self.pos += self.vel;
    }

    /// Horizontal friction for the surface the actor ended the tick on
    pub fn apply_traction(&mut self, on_ice: bool, tuning: &Tuning) {
        if !on_ice {
            self.traction = Traction::Firm;
            self.vel.x = self.intent_axis() * tuning.move_speed;
            return;
        }

        self.traction = Traction::Ice;
        let axis = self.intent_axis();
        if axis != 0.0 {
            let target = axis * tuning.move_speed;
            if tuning.ice_accel >= 1.0 {
                self.vel.x = target;
            } else {
                self.vel.x += (target - self.vel.x) * tuning.ice_accel;
            }
        } else {
            self.vel.x *= tuning.ice_decay;
            if self.vel.x.abs() < tuning.ice_rest_epsilon {
                self.vel.x = 0.0;
            }
        }
    }

    /// Teleport to a point with no momentum
    pub fn respawn(&mut self, point: Vec2) {
        self.pos = point;
        self.vel = Vec2::ZERO;
        self.grounded = false;
        self.traction = Traction::Firm;
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Full bounding box
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Thin strip along the top face, inset from the corners
    pub fn top_strip(&self, tuning: &Tuning) -> Rect {
        let inset = tuning.edge_strip_inset;
        Rect::new(
            self.pos.x + inset,
            self.pos.y,
            self.size.x - inset * 2.0,
            tuning.edge_strip_depth,
        )
    }

    pub fn bottom_strip(&self, tuning: &Tuning) -> Rect {
        let inset = tuning.edge_strip_inset;
        let depth = tuning.edge_strip_depth;
        Rect::new(
            self.pos.x + inset,
            self.bottom() - depth,
            self.size.x - inset * 2.0,
            depth,
        )
    }

    pub fn left_strip(&self, tuning: &Tuning) -> Rect {
        let inset = tuning.edge_strip_inset;
        Rect::new(
            self.pos.x,
            self.pos.y + inset,
            tuning.edge_strip_depth,
            self.size.y - inset * 2.0,
        )
    }

    pub fn right_strip(&self, tuning: &Tuning) -> Rect {
        let inset = tuning.edge_strip_inset;
        let depth = tuning.edge_strip_depth;
        Rect::new(
            self.right() - depth,
            self.pos.y + inset,
            depth,
            self.size.y - inset * 2.0,
        )
    }
}
