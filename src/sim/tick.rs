//! Fixed timestep simulation tick
//!
//! Advances one arena by exactly one step. The order of the phases below is
//! part of the contract: replays depend on it.

use super::actor::Actor;
use super::arena::{Arena, ArenaEvent, RespawnCause};
use super::boss::BossOutcome;
use super::collision;
use super::hazard::Contact;

/// Advance the arena and the actor by one fixed timestep
pub fn tick(arena: &mut Arena, actor: &mut Actor) {
    arena.time_ticks += 1;

    // Surfaces move and count down first
    for (index, surface) in arena.surfaces.iter_mut().enumerate() {
        if surface.update() {
            arena.events.push(ArenaEvent::SurfaceReappeared { index });
        }
    }

    actor.update_intent(&arena.tuning);
    actor.grounded = false;
    actor.apply_gravity(&arena.tuning);

    resolve_surfaces(arena, actor);
    let on_ice = stand_on_ice(arena, actor);

    // --- FAILURE ---
    let mut failure = arena
        .hazards
        .iter()
        .find(|h| h.kind.is_lethal() && actor.bounds().intersects(&h.rect))
        .map(|h| RespawnCause::Hazard(h.kind));
    if failure.is_none() && actor.pos.y > arena.fall_limit {
        failure = Some(RespawnCause::FellOut);
    }

    match failure {
        Some(cause) => arena.fail(actor, cause),
        None => actor.apply_traction(on_ice, &arena.tuning),
    }

    arena.goal.update();
    if !arena.completed && actor.bounds().intersects(&arena.goal.rect) {
        complete(arena);
    }

    for hazard in &mut arena.hazards {
        hazard.update();
    }

    update_cascade(arena, actor);
    update_boss(arena, actor);
}

/// Resolve the actor against every visible surface in collection order
fn resolve_surfaces(arena: &mut Arena, actor: &mut Actor) {
    let tuning = &arena.tuning;
    for (index, surface) in arena.surfaces.iter_mut().enumerate() {
        if !surface.is_visible() {
            continue;
        }

        // --- PREDICTIVE VANISH ---
        // Drop the surface just before the actor would land on it. The surface
        // still resolves this tick; it stops blocking from the next one.
        if surface.vanish().is_some()
            && collision::predicts_landing(actor, &surface.rect, tuning)
            && surface.trigger_disappear()
        {
            arena.events.push(ArenaEvent::SurfaceVanished { index });
        }

        collision::resolve_against(actor, &surface.rect, tuning);
    }
}

/// Ice hazards are floors too. Returns true if the actor ended up standing on one.
fn stand_on_ice(arena: &Arena, actor: &mut Actor) -> bool {
    let mut on_ice = false;
    for hazard in &arena.hazards {
        if hazard.classify() != Contact::Tractive {
            continue;
        }
        if collision::is_landing(actor, &hazard.rect, &arena.tuning) {
            collision::land_on(actor, &hazard.rect);
            on_ice = true;
        }
    }
    on_ice
}

fn complete(arena: &mut Arena) {
    arena.completed = true;
    arena.events.push(ArenaEvent::LevelCompleted);
    log::info!(
        "Level {} complete after {} ticks",
        arena.level_id,
        arena.time_ticks
    );
}

/// One-shot floor trap: standing on the top member drops the whole group,
/// reaching the ground rearms it
fn update_cascade(arena: &mut Arena, actor: &Actor) {
    let Some(group) = arena.cascade.as_mut() else {
        return;
    };
    let tolerance = arena.tuning.cascade_tolerance;

    if !group.fired {
        let Some(top) = arena.surfaces.get(group.top) else {
            return;
        };
        let resting = top.is_visible()
            && actor.vel.y == 0.0
            && (actor.bottom() - top.rect.top()).abs() <= tolerance
            && actor.bounds().overlaps_x(&top.rect);
        if resting {
            for &index in &group.members {
                if let Some(surface) = arena.surfaces.get_mut(index) {
                    surface.trigger_disappear();
                }
            }
            group.fired = true;
            log::debug!("Cascade fired at tick {}", arena.time_ticks);
            arena.events.push(ArenaEvent::CascadeFired);
        }
    } else if actor.bottom() >= arena.ground_line - tolerance {
        for &index in &group.members {
            if let Some(vanish) = arena.surfaces.get_mut(index).and_then(|s| s.vanish_mut()) {
                vanish.set_visible(true);
            }
        }
        group.fired = false;
        log::debug!("Cascade restored at tick {}", arena.time_ticks);
        arena.events.push(ArenaEvent::CascadeRestored);
    }
}

fn update_boss(arena: &mut Arena, actor: &mut Actor) {
    let Some(boss) = arena.boss.as_mut() else {
        return;
    };

    let outcome = boss.update(
        actor,
        &arena.surfaces,
        arena.ground_line,
        &arena.tuning,
        &mut arena.rng,
    );
    match outcome {
        BossOutcome::Idle => {}
        BossOutcome::Hit { hits, moved_to } => {
            log::debug!(
                "Boss hit {}/{}, moved to ({:.0}, {:.0})",
                hits,
                boss.max_hits,
                moved_to.x,
                moved_to.y
            );
            arena.events.push(ArenaEvent::BossHit {
                hits,
                x: moved_to.x,
                y: moved_to.y,
            });
        }
        BossOutcome::Defeated => {
            log::info!("Boss defeated");
            arena.events.push(ArenaEvent::BossDefeated);
            if !arena.completed {
                complete(arena);
            }
        }
    }
}
