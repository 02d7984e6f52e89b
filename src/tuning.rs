//! Data-driven game balance
//!
//! Every simulation rule reads its numbers from a [`Tuning`]. Defaults come
//! from [`crate::consts`]; a JSON table may override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance table for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Milliseconds between simulation ticks
    pub tick_ms: f64,

    pub player_start_x: f32,
    pub player_start_y: f32,
    pub player_size: f32,

    pub collectible_size: f32,
    pub power_up_size: f32,
    pub hazard_size: f32,
    pub pursuer_visual_size: f32,
    pub pursuer_hitbox_size: f32,

    pub collectible_reward: u64,
    pub level_threshold: u64,
    /// Probability (0-1) of a power-up drop per collectible eaten
    pub power_up_chance: f64,

    pub slow_duration_ms: f64,
    /// Multiplier applied to pursuer speed while slowed
    pub slow_factor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            tick_ms: TICK_MS,

            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,
            player_size: PLAYER_SIZE,

            collectible_size: COLLECTIBLE_SIZE,
            power_up_size: POWER_UP_SIZE,
            hazard_size: HAZARD_SIZE,
            pursuer_visual_size: PURSUER_VISUAL_SIZE,
            pursuer_hitbox_size: PURSUER_HITBOX_SIZE,

            collectible_reward: COLLECTIBLE_REWARD,
            level_threshold: LEVEL_THRESHOLD,
            power_up_chance: POWER_UP_CHANCE,

            slow_duration_ms: SLOW_DURATION_MS,
            slow_factor: SLOW_FACTOR,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON balance table.
    ///
    /// Returns `None` if the JSON is malformed or the table would break the
    /// spawn rules (an entity larger than the canvas, a zero threshold, a
    /// non-positive tick).
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Tuning>(json) {
            Ok(tuning) if tuning.is_valid() => Some(tuning),
            Ok(_) => {
                log::warn!("Rejected tuning table with out-of-range values");
                None
            }
            Err(e) => {
                log::warn!("Failed to parse tuning table: {}", e);
                None
            }
        }
    }

    /// Check the values the simulation relies on
    pub fn is_valid(&self) -> bool {
        let largest = self
            .collectible_size
            .max(self.power_up_size)
            .max(self.hazard_size)
            .max(self.pursuer_hitbox_size);
        self.tick_ms > 0.0
            && self.level_threshold > 0
            && (0.0..=1.0).contains(&self.power_up_chance)
            && largest > 0.0
            && largest < self.canvas_width
            && largest < self.canvas_height
            && self.pursuer_hitbox_size < self.canvas_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.canvas_width, 750.0);
        assert_eq!(t.level_threshold, 50);
        assert_eq!(t.collectible_reward, 10);
        assert!(t.is_valid());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "collectible_reward": 25 }"#).unwrap();
        assert_eq!(t.collectible_reward, 25);
        assert_eq!(t.slow_duration_ms, SLOW_DURATION_MS);
    }

    #[test]
    fn test_rejects_bad_tables() {
        assert!(Tuning::from_json("not json").is_none());
        assert!(Tuning::from_json(r#"{ "level_threshold": 0 }"#).is_none());
        assert!(Tuning::from_json(r#"{ "hazard_size": 900.0 }"#).is_none());
    }
}
