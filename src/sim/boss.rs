//! Boss encounter: stomp it enough times to clear the arena

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::rect::Rect;
use super::surface::Surface;
use crate::consts::*;
use crate::tuning::Tuning;

/// Band used when no platform can hold the boss
pub const FALLBACK_X_RANGE: (f32, f32) = (100.0, 700.0);
pub const FALLBACK_Y_RANGE: (f32, f32) = (150.0, 350.0);

/// Outcome of a boss update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BossOutcome {
    /// Nothing happened this tick
    Idle,
    /// Stomped and relocated
    Hit { hits: u32, moved_to: Vec2 },
    /// Final stomp
    Defeated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub hits: u32,
    pub max_hits: u32,
    /// Ticks until the boss can be stomped again
    pub cooldown: u32,
    pub defeated: bool,
}

impl Boss {
    pub fn new(pos: Vec2, max_hits: u32) -> Self {
        Self {
            pos,
            size: Vec2::new(BOSS_WIDTH, BOSS_HEIGHT),
            hits: 0,
            max_hits: max_hits.max(1),
            cooldown: 0,
            defeated: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Falling onto the top of the boss, not brushing its side
    pub fn is_stomped_by(&self, actor: &Actor, tuning: &Tuning) -> bool {
        let bounds = self.bounds();
        actor.bounds().intersects(&bounds)
            && actor.vel.y > 0.0
            && actor.bottom() <= bounds.top() + tuning.boss_stomp_margin
    }

    /// Run one tick of the encounter against the actor
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        actor: &mut Actor,
        surfaces: &[Surface],
        ground_line: f32,
        tuning: &Tuning,
        rng: &mut R,
    ) -> BossOutcome {
        if self.defeated {
            return BossOutcome::Idle;
        }
        if self.cooldown > 0 {
            self.cooldown -= 1;
        }
        if self.cooldown > 0 || !self.is_stomped_by(actor, tuning) {
            return BossOutcome::Idle;
        }

        self.hits += 1;
        self.cooldown = tuning.boss_cooldown_ticks;
        actor.vel.y = tuning.boss_bounce;
        actor.grounded = false;

        if self.hits >= self.max_hits {
            self.defeated = true;
            return BossOutcome::Defeated;
        }

        self.pos = self.pick_position(surfaces, ground_line, rng);
        BossOutcome::Hit {
            hits: self.hits,
            moved_to: self.pos,
        }
    }

    /// A random spot on an elevated, visible surface wide enough to stand on
    pub fn pick_position<R: Rng + ?Sized>(
        &self,
        surfaces: &[Surface],
        ground_line: f32,
        rng: &mut R,
    ) -> Vec2 {
        let eligible: Vec<&Surface> = surfaces
            .iter()
            .filter(|s| s.is_visible() && s.rect.top() < ground_line && s.rect.w >= self.size.x)
            .collect();

        match eligible.choose(rng) {
            Some(surface) => {
                let slack = surface.rect.w - self.size.x;
                let offset = if slack > 0.0 {
                    rng.random_range(0.0..=slack)
                } else {
                    0.0
                };
                Vec2::new(surface.rect.x + offset, surface.rect.top() - self.size.y)
            }
            None => {
                // An oversized boss pins to the left edge of the band
                let max_x = (FALLBACK_X_RANGE.1 - self.size.x).max(FALLBACK_X_RANGE.0);
                Vec2::new(
                    rng.random_range(FALLBACK_X_RANGE.0..=max_x),
                    rng.random_range(FALLBACK_Y_RANGE.0..=FALLBACK_Y_RANGE.1),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn stomper(boss: &Boss) -> Actor {
        let mut actor = Actor::new(Vec2::new(boss.pos.x + 10.0, boss.pos.y - 45.0));
        actor.vel.y = 4.0;
        actor
    }

    #[test]
    fn test_stomp_counts_and_bounces() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut boss = Boss::new(Vec2::new(400.0, 300.0), 5);
        let mut actor = stomper(&boss);

        let outcome = boss.update(&mut actor, &[], GROUND_LINE, &tuning, &mut rng);
        assert!(matches!(outcome, BossOutcome::Hit { hits: 1, .. }));
        assert_eq!(boss.cooldown, tuning.boss_cooldown_ticks);
        assert_eq!(actor.vel.y, tuning.boss_bounce);
    }

    #[test]
    fn test_cooldown_blocks_repeat_hits() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let mut boss = Boss::new(Vec2::new(400.0, 300.0), 5);
        boss.cooldown = 10;
        let mut actor = stomper(&boss);

        let outcome = boss.update(&mut actor, &[], GROUND_LINE, &tuning, &mut rng);
        assert_eq!(outcome, BossOutcome::Idle);
        assert_eq!(boss.hits, 0);
        assert_eq!(boss.cooldown, 9);
    }

    #[test]
    fn test_rising_actor_does_not_stomp() {
        let tuning = Tuning::default();
        let boss = Boss::new(Vec2::new(400.0, 300.0), 5);
        let mut actor = stomper(&boss);
        actor.vel.y = -4.0;
        assert!(!boss.is_stomped_by(&actor, &tuning));
    }

    #[test]
    fn test_side_contact_is_not_a_stomp() {
        let tuning = Tuning::default();
        let boss = Boss::new(Vec2::new(400.0, 300.0), 5);
        let mut actor = Actor::new(Vec2::new(375.0, 300.0));
        actor.vel.y = 2.0;
        assert!(!boss.is_stomped_by(&actor, &tuning));
    }

    #[test]
    fn test_relocates_onto_eligible_surface() {
        let mut rng = Pcg32::seed_from_u64(3);
        let boss = Boss::new(Vec2::ZERO, 5);
        let surfaces = vec![
            Surface::new_static(Rect::new(0.0, 500.0, 800.0, 50.0)), // ground
            Surface::new_static(Rect::new(100.0, 400.0, 30.0, 20.0)), // too narrow
            Surface::new_static(Rect::new(300.0, 250.0, 120.0, 20.0)),
        ];
        for _ in 0..20 {
            let pos = boss.pick_position(&surfaces, GROUND_LINE, &mut rng);
            assert_eq!(pos.y, 250.0 - BOSS_HEIGHT);
            assert!(pos.x >= 300.0 && pos.x + BOSS_WIDTH <= 420.0);
        }
    }

    #[test]
    fn test_fallback_band_when_nothing_fits() {
        let mut rng = Pcg32::seed_from_u64(4);
        let boss = Boss::new(Vec2::ZERO, 5);
        let pos = boss.pick_position(&[], GROUND_LINE, &mut rng);
        assert!(pos.x >= FALLBACK_X_RANGE.0 && pos.x <= FALLBACK_X_RANGE.1 - BOSS_WIDTH);
        assert!(pos.y >= FALLBACK_Y_RANGE.0 && pos.y <= FALLBACK_Y_RANGE.1);
    }

    #[test]
    fn test_oversized_boss_fallback_stays_in_band() {
        let mut rng = Pcg32::seed_from_u64(6);
        let mut boss = Boss::new(Vec2::ZERO, 5);
        boss.size = Vec2::new(900.0, BOSS_HEIGHT);
        for _ in 0..10 {
            let pos = boss.pick_position(&[], GROUND_LINE, &mut rng);
            assert_eq!(pos.x, FALLBACK_X_RANGE.0);
            assert!(pos.y >= FALLBACK_Y_RANGE.0 && pos.y <= FALLBACK_Y_RANGE.1);
        }
    }

    #[test]
    fn test_defeat_after_max_hits() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut boss = Boss::new(Vec2::new(400.0, 300.0), 2);

        let mut actor = stomper(&boss);
        boss.update(&mut actor, &[], GROUND_LINE, &tuning, &mut rng);
        boss.cooldown = 0;
        let mut actor = stomper(&boss);
        let outcome = boss.update(&mut actor, &[], GROUND_LINE, &tuning, &mut rng);

        assert_eq!(outcome, BossOutcome::Defeated);
        assert!(boss.defeated);
        let mut actor = stomper(&boss);
        assert_eq!(
            boss.update(&mut actor, &[], GROUND_LINE, &tuning, &mut rng),
            BossOutcome::Idle
        );
    }
}
