//! Vault Vault - headless runner
//!
//! Plays one level with scripted input (hold right, hop on a fixed period)
//! and reports what happened. Rendering and windowing live elsewhere.
//!
//! Usage: `vault-vault [level] [ticks]`

use vault_vault::sim::{ArenaEvent, LEVEL_COUNT};
use vault_vault::{Session, SessionEvent, SessionPhase};

/// Ticks between scripted jumps
const JUMP_PERIOD: u64 = 40;
const DEFAULT_TICKS: u64 = 3600;
const SEED: u64 = 0x5EED;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let level = args.next().and_then(|a| a.parse::<u32>().ok()).unwrap_or(0);
    let max_ticks = args
        .next()
        .and_then(|a| a.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TICKS);

    if level >= LEVEL_COUNT {
        log::warn!("Level {} out of range, wrapping to 0", level);
    }

    let mut session = Session::new(SEED);
    session.start_level(level);
    log::info!(
        "Running level {} '{}' for up to {} ticks",
        session.level(),
        session.arena.name,
        max_ticks
    );

    let mut respawns = 0u32;
    let mut cleared = false;
    let mut ticks = 0u64;

    while ticks < max_ticks && session.phase() == SessionPhase::Playing {
        session.set_intent(false, true);
        if ticks % JUMP_PERIOD == 0 {
            session.jump();
        }
        session.tick();
        ticks += 1;

        for event in session.drain_events() {
            match event {
                SessionEvent::Arena(ArenaEvent::Respawned { cause }) => {
                    respawns += 1;
                    log::info!("tick {}: respawned ({:?})", ticks, cause);
                }
                SessionEvent::Arena(ArenaEvent::BossHit { hits, .. }) => {
                    log::info!("tick {}: boss hit ({})", ticks, hits);
                }
                SessionEvent::LevelFinished { ticks: t, .. } => {
                    cleared = true;
                    log::info!("tick {}: level cleared in {} ticks", ticks, t);
                }
                other => log::debug!("tick {}: {:?}", ticks, other),
            }
        }
    }

    let actor = &session.actor;
    println!(
        "level {} '{}': {} after {} ticks, {} respawns, actor at ({:.1}, {:.1})",
        session.level(),
        session.arena.name,
        if cleared { "cleared" } else { "not cleared" },
        ticks,
        respawns,
        actor.pos.x,
        actor.pos.y
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web frontends drive `Session::frame` directly
}
