//! Spawn rules for every entity kind
//!
//! Items land uniformly inside the canvas; pursuers enter from an edge.

use glam::Vec2;
use rand::Rng;

use super::state::{Collectible, Hazard, PowerUp, Pursuer};
use crate::tuning::Tuning;

/// Canvas edge a pursuer enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Top-left corner for a square of side `size` that stays fully on the canvas
pub fn in_bounds<R: Rng>(rng: &mut R, size: f32, tuning: &Tuning) -> Vec2 {
    Vec2::new(
        rng.random_range(0.0..tuning.canvas_width - size),
        rng.random_range(0.0..tuning.canvas_height - size),
    )
}

/// Entry point on `edge`. Right and bottom entries are inset by the pursuer
/// hit-box so the pursuer starts touching the canvas border.
pub fn on_edge<R: Rng>(rng: &mut R, edge: Edge, tuning: &Tuning) -> Vec2 {
    let w = tuning.canvas_width;
    let h = tuning.canvas_height;
    let inset = tuning.pursuer_hitbox_size;
    match edge {
        Edge::Top => Vec2::new(rng.random_range(0.0..w), 0.0),
        Edge::Right => Vec2::new(w - inset, rng.random_range(0.0..h)),
        Edge::Bottom => Vec2::new(rng.random_range(0.0..w), h - inset),
        Edge::Left => Vec2::new(0.0, rng.random_range(0.0..h)),
    }
}

pub fn collectible<R: Rng>(rng: &mut R, tuning: &Tuning) -> Collectible {
    let size = tuning.collectible_size;
    Collectible {
        pos: in_bounds(rng, size, tuning),
        size,
    }
}

pub fn power_up<R: Rng>(rng: &mut R, tuning: &Tuning) -> PowerUp {
    let size = tuning.power_up_size;
    PowerUp {
        pos: in_bounds(rng, size, tuning),
        size,
    }
}

pub fn hazard<R: Rng>(rng: &mut R, tuning: &Tuning) -> Hazard {
    let size = tuning.hazard_size;
    Hazard {
        pos: in_bounds(rng, size, tuning),
        size,
    }
}

/// A pursuer on a random edge whose speed is the current difficulty level
pub fn pursuer<R: Rng>(rng: &mut R, tuning: &Tuning, level: u32) -> Pursuer {
    let edge = Edge::random(rng);
    Pursuer {
        pos: on_edge(rng, edge, tuning),
        size: tuning.pursuer_visual_size,
        speed: level as f32,
    }
}

/// Bernoulli trial with probability `chance` (clamped to 0-1)
pub fn roll<R: Rng>(rng: &mut R, chance: f64) -> bool {
    rng.random_bool(chance.clamp(0.0, 1.0))
}
