//! Directional collision resolution between the actor and boxes
//!
//! The actor's full box decides *whether* it touches something; four thin edge
//! strips decide *which face* is touching so the snap goes the right way.

use super::actor::Actor;
use super::rect::Rect;
use crate::tuning::Tuning;

/// Which face of the actor made contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Feet on a surface top
    Bottom,
    /// Head against a surface underside
    Top,
    Left,
    Right,
}

/// Result of resolving the actor against one box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    /// Landing or head bump
    pub vertical: Option<Face>,
    /// Wall contact, resolved independently of `vertical`
    pub side: Option<Face>,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self::default()
    }

    pub fn hit(&self) -> bool {
        self.vertical.is_some() || self.side.is_some()
    }

    pub fn landed(&self) -> bool {
        self.vertical == Some(Face::Bottom)
    }
}

/// Will a falling actor reach this box's top within the lookahead window?
///
/// Only fires while the feet are still clearly above the top edge, so a
/// vanishing surface disappears just before it would be landed on.
pub fn predicts_landing(actor: &Actor, rect: &Rect, tuning: &Tuning) -> bool {
    if !tuning.predictive_vanish_enabled() || actor.vel.y <= 0.0 {
        return false;
    }
    let bottom = actor.bottom();
    let lookahead = actor.vel.y * tuning.vanish_lookahead_ticks as f32;
    bottom <= rect.top() - tuning.vanish_margin
        && bottom + lookahead >= rect.top()
        && actor.bounds().overlaps_x(rect)
}

/// Are the actor's feet within tolerance of the box top (given current fall speed)?
pub fn is_landing(actor: &Actor, rect: &Rect, tuning: &Tuning) -> bool {
    let bottom = actor.bottom();
    bottom <= rect.top() + tuning.ground_tolerance
        && bottom + actor.vel.y >= rect.top()
        && actor.bounds().overlaps_x(rect)
}

/// Snap the actor onto the box top and mark it grounded
pub fn land_on(actor: &mut Actor, rect: &Rect) {
    actor.pos.y = rect.top() - actor.size.y;
    actor.vel.y = 0.0;
    actor.grounded = true;
}

/// Resolve the actor against a solid box, moving it out along the touching faces
pub fn resolve_against(actor: &mut Actor, rect: &Rect, tuning: &Tuning) -> CollisionResult {
    let mut result = CollisionResult::miss();

    // Landing wins over the head bump
    if is_landing(actor, rect, tuning) {
        land_on(actor, rect);
        result.vertical = Some(Face::Bottom);
    } else if actor.vel.y < 0.0 && actor.top_strip(tuning).intersects(rect) {
        actor.pos.y = rect.bottom();
        actor.vel.y = 0.0;
        result.vertical = Some(Face::Top);
    }

    // Side strips are taken after any vertical snap
    if actor.vel.x < 0.0 && actor.left_strip(tuning).intersects(rect) {
        actor.pos.x = rect.right();
        result.side = Some(Face::Left);
    } else if actor.vel.x > 0.0 && actor.right_strip(tuning).intersects(rect) {
        actor.pos.x = rect.left() - actor.size.x;
        result.side = Some(Face::Right);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn platform() -> Rect {
        Rect::new(50.0, 150.0, 200.0, 20.0)
    }

    #[test]
    fn test_landing_snaps_feet_to_top() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(Vec2::new(100.0, 103.0));
        actor.vel.y = 5.0;

        let result = resolve_against(&mut actor, &platform(), &tuning);
        assert!(result.landed());
        assert_eq!(actor.pos.y, 100.0);
        assert_eq!(actor.vel.y, 0.0);
        assert!(actor.grounded);
    }

    #[test]
    fn test_landing_is_idempotent() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(Vec2::new(100.0, 100.0));
        actor.grounded = true;

        for _ in 0..10 {
            let result = resolve_against(&mut actor, &platform(), &tuning);
            assert!(result.landed());
            assert_eq!(actor.pos, Vec2::new(100.0, 100.0));
            assert!(actor.grounded);
        }
    }

    #[test]
    fn test_no_landing_without_horizontal_overlap() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(Vec2::new(260.0, 103.0));
        actor.vel.y = 5.0;
        let result = resolve_against(&mut actor, &platform(), &tuning);
        assert!(!result.hit());
        assert!(!actor.grounded);
    }

    #[test]
    fn test_head_bump() {
        let tuning = Tuning::default();
        // Head 3px into the underside, rising
        let mut actor = Actor::new(Vec2::new(100.0, 167.0));
        actor.vel.y = -8.0;

        let result = resolve_against(&mut actor, &platform(), &tuning);
        assert_eq!(result.vertical, Some(Face::Top));
        assert_eq!(actor.pos.y, 170.0);
        assert_eq!(actor.vel.y, 0.0);
        assert!(!actor.grounded);
    }

    #[test]
    fn test_side_push_out() {
        let tuning = Tuning::default();
        let wall = Rect::new(200.0, 0.0, 20.0, 300.0);

        // Walking right into the wall's left face
        let mut actor = Actor::new(Vec2::new(173.0, 100.0));
        actor.vel.x = 5.0;
        let result = resolve_against(&mut actor, &wall, &tuning);
        assert_eq!(result.side, Some(Face::Right));
        assert_eq!(actor.pos.x, 170.0);

        // Walking left into its right face
        let mut actor = Actor::new(Vec2::new(217.0, 100.0));
        actor.vel.x = -5.0;
        let result = resolve_against(&mut actor, &wall, &tuning);
        assert_eq!(result.side, Some(Face::Left));
        assert_eq!(actor.pos.x, 220.0);
    }

    #[test]
    fn test_standing_actor_does_not_side_collide_with_floor() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(Vec2::new(100.0, 100.0));
        actor.vel.x = 5.0;
        let result = resolve_against(&mut actor, &platform(), &tuning);
        assert!(result.landed());
        assert_eq!(result.side, None);
        assert_eq!(actor.pos.x, 100.0);
    }

    #[test]
    fn test_predicts_landing_window() {
        let tuning = Tuning::default();
        let rect = platform();

        // 10px above, falling 3/tick: reaches the top within 5 ticks
        let mut actor = Actor::new(Vec2::new(100.0, 90.0));
        actor.vel.y = 3.0;
        assert!(predicts_landing(&actor, &rect, &tuning));

        // Too slow to get there in time
        actor.vel.y = 1.0;
        assert!(!predicts_landing(&actor, &rect, &tuning));

        // Rising never predicts
        actor.vel.y = -3.0;
        assert!(!predicts_landing(&actor, &rect, &tuning));

        // Within the margin the trigger no longer fires
        let mut close = Actor::new(Vec2::new(100.0, 97.0));
        close.vel.y = 3.0;
        assert!(!predicts_landing(&close, &rect, &tuning));
    }

    #[test]
    fn test_lookahead_zero_disables_prediction() {
        let tuning = Tuning {
            vanish_lookahead_ticks: 0,
            ..Tuning::default()
        };
        let mut actor = Actor::new(Vec2::new(100.0, 90.0));
        actor.vel.y = 3.0;
        assert!(!predicts_landing(&actor, &platform(), &tuning));
    }
}
