//! Difficulty ramp
//!
//! The level rises when the score sits exactly on the next threshold
//! multiple. The check compares against the current level, so running it
//! every tick at the same score raises the level only once. A score that
//! jumps over a multiple (two collectibles in one tick) skips that level-up.

use super::state::{GameEvent, GameState};

/// True when `score` is exactly the multiple of `threshold` that matches `level`
#[inline]
pub fn should_level_up(score: u64, level: u32, threshold: u64) -> bool {
    score > 0 && score % threshold == 0 && u64::from(level) == score / threshold
}

/// Raise the level if due, adding one pursuer and one hazard.
/// Returns true if the level changed.
pub fn apply(state: &mut GameState) -> bool {
    if !should_level_up(state.score, state.level, state.tuning.level_threshold) {
        return false;
    }

    state.level += 1;
    state.spawn_pursuer();
    state.spawn_hazard();
    state.events.push(GameEvent::LevelUp { level: state.level });
    log::info!("Level {} at score {}", state.level, state.score);
    true
}
