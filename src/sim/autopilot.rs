//! Idle/demo mode: picks a pointer position so the game can play itself
//!
//! The pilot heads for the nearest collectible, but steps away from any
//! pursuer or hazard that gets too close. It moves the pointer at most
//! `max_step` pixels per call so the avatar glides instead of teleporting.

use glam::Vec2;

use super::state::GameState;

/// Threats closer than this (center to center) trigger evasion
pub const DANGER_RADIUS: f32 = 70.0;

/// Next pointer position for the demo player, or `None` if not running
pub fn steer(state: &GameState, max_step: f32) -> Option<Vec2> {
    if !state.is_running() {
        return None;
    }

    let me = state.player.bounds().center();
    let hitbox = state.tuning.pursuer_hitbox_size;

    let threats = state
        .pursuers
        .iter()
        .map(|p| p.hitbox(hitbox).center())
        .chain(state.hazards.iter().map(|h| h.bounds().center()));

    // Sum of push-away vectors from nearby threats, closer ones push harder
    let mut flee = Vec2::ZERO;
    for threat in threats {
        let away = me - threat;
        let dist = away.length();
        if dist < DANGER_RADIUS {
            flee += away.normalize_or_zero() * (DANGER_RADIUS - dist);
        }
    }

    let desired = if flee != Vec2::ZERO {
        flee
    } else {
        let nearest = state
            .collectibles
            .iter()
            .map(|c| c.bounds().center())
            .min_by(|a, b| a.distance_squared(me).total_cmp(&b.distance_squared(me)))?;
        nearest - me
    };

    let step = desired.clamp_length_max(max_step);
    let w = state.tuning.canvas_width;
    let h = state.tuning.canvas_height;
    Some((me + step).clamp(Vec2::ZERO, Vec2::new(w, h)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Collectible, Pursuer};
    use crate::tuning::Tuning;

    fn running() -> GameState {
        let mut state = GameState::new(9, Tuning::default());
        state.begin_run();
        state.collectibles.clear();
        state.pursuers.clear();
        state.player.pos = Vec2::new(100.0, 100.0);
        state
    }

    #[test]
    fn test_idle_returns_none() {
        let state = GameState::new(9, Tuning::default());
        assert!(steer(&state, 5.0).is_none());
    }

    #[test]
    fn test_heads_for_collectible() {
        let mut state = running();
        state.collectibles.push(Collectible {
            pos: Vec2::new(400.0, 100.0),
            size: 30.0,
        });
        let target = steer(&state, 5.0).unwrap();
        // Player center is (115, 115); collectible center (415, 115)
        assert!((target - Vec2::new(120.0, 115.0)).length() < 1e-3);
    }

    #[test]
    fn test_flees_close_pursuer() {
        let mut state = running();
        state.collectibles.push(Collectible {
            pos: Vec2::new(400.0, 100.0),
            size: 30.0,
        });
        state.pursuers.push(Pursuer {
            pos: Vec2::new(135.0, 105.0),
            size: 30.0,
            speed: 1.0,
        });
        let target = steer(&state, 5.0).unwrap();
        // Pursuer is to the right, so the pilot moves left
        assert!(target.x < 115.0);
    }
}
