#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use vault_vault::sim::{ArenaEvent, LEVEL_COUNT, SurfaceKind};
use vault_vault::{Session, SessionEvent, SessionPhase};

/// Held input for one tick: (left, right, jump)
fn input() -> impl Strategy<Value = (bool, bool, bool)> {
    (any::<bool>(), any::<bool>(), prop::bool::weighted(0.1))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn actor_never_escapes_the_level(
        level in 0..LEVEL_COUNT,
        seed in 0u64..1000,
        inputs in prop::collection::vec(input(), 50..400),
    ) {
        let mut session = Session::new(seed);
        session.start_level(level);
        let max_fall = session.arena.tuning.max_fall_speed + session.arena.tuning.gravity;

        for (left, right, jump) in inputs {
            session.set_intent(left, right);
            if jump {
                session.jump();
            }
            session.tick();
            if session.phase() != SessionPhase::Playing {
                break;
            }

            let respawned = session.drain_events().iter().any(|e| {
                matches!(e, SessionEvent::Arena(ArenaEvent::Respawned { .. }))
            });
            let actor = &session.actor;
            let arena = &session.arena;

            prop_assert!(actor.pos.y <= arena.fall_limit, "y={}", actor.pos.y);
            prop_assert!(actor.vel.y <= max_fall, "vy={}", actor.vel.y);

            if respawned {
                prop_assert_eq!(actor.pos, arena.respawn);
                prop_assert_eq!(actor.vel, glam::Vec2::ZERO);
                prop_assert!(arena.surfaces.iter().all(|s| s.is_visible()));
            }

            for surface in &arena.surfaces {
                if let SurfaceKind::Kinetic(k) = &surface.kind {
                    prop_assert!(k.position >= k.start && k.position <= k.end);
                }
            }
        }
    }

    #[test]
    fn grounded_actor_without_input_stays_put(
        x in 0.0f32..770.0,
        ticks in 1usize..120,
    ) {
        let mut session = Session::new(1);
        session.start_level(0);
        session.actor.pos = glam::Vec2::new(x, 450.0);
        session.actor.grounded = true;

        for _ in 0..ticks {
            session.tick();
            if session.phase() != SessionPhase::Playing {
                break;
            }
            prop_assert_eq!(session.actor.pos.y, 450.0);
            prop_assert!(session.actor.grounded);
        }
    }
}
