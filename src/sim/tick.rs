//! Fixed timestep simulation tick
//!
//! Core game loop step: expire effects, move pursuers, resolve collisions,
//! ramp difficulty, then end the run if anything lethal was touched.

use super::difficulty;
use super::geometry::overlaps;
use super::pursuit;
use super::state::{DeathCause, GameEvent, GamePhase, GameState};

/// Advance the game state by one fixed timestep. Does nothing unless Running.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;
    state.clock_ms += state.tuning.tick_ms;

    if state.slow.update(state.clock_ms) {
        log::debug!("Slow effect ended at {:.0} ms", state.clock_ms);
        state.events.push(GameEvent::SlowEnded);
    }

    let target = state.player.pos;
    let multiplier = state.slow.speed_multiplier(state.tuning.slow_factor);
    pursuit::advance(state.pursuers.iter_mut(), target, multiplier);

    let death = resolve_collisions(state);

    difficulty::apply(state);

    if let Some(cause) = death {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver {
            score: state.score,
            cause,
        });
        log::info!("Game over ({:?}) with score {}", cause, state.score);
    }
}

/// Player-vs-everything collisions for this tick, in fixed order:
/// collectibles, power-ups, pursuers, hazards.
///
/// Returns the first lethal contact, if any. Only one is reported even when
/// several pursuers or hazards overlap at once.
pub fn resolve_collisions(state: &mut GameState) -> Option<DeathCause> {
    let player = state.player.bounds();

    // Replacements spawned below are not checked until the next tick
    let eaten = state
        .collectibles
        .consume_where(|c| overlaps(player, c.bounds()));
    for _ in &eaten {
        state.score += state.tuning.collectible_reward;
        state.spawn_collectible();
        state.events.push(GameEvent::CollectibleEaten { score: state.score });

        if state.roll_power_up() {
            let p = state.spawn_power_up();
            log::debug!("Power-up dropped at ({:.0}, {:.0})", p.pos.x, p.pos.y);
            state.events.push(GameEvent::PowerUpSpawned);
        }
    }

    // Includes power-ups dropped this tick
    let grabbed = state
        .power_ups
        .consume_where(|p| overlaps(player, p.bounds()));
    for _ in &grabbed {
        state
            .slow
            .activate(state.clock_ms, state.tuning.slow_duration_ms);
        log::debug!("Slow effect started at {:.0} ms", state.clock_ms);
        state.events.push(GameEvent::SlowStarted);
    }

    let hitbox = state.tuning.pursuer_hitbox_size;
    if state
        .pursuers
        .iter()
        .any(|p| overlaps(player, p.hitbox(hitbox)))
    {
        return Some(DeathCause::Pursuer);
    }

    if state.hazards.iter().any(|h| overlaps(player, h.bounds())) {
        return Some(DeathCause::Hazard);
    }

    None
}
