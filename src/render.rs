//! Frame drawing
//!
//! Turns the game state into draw calls. Layering, back to front: hazards,
//! player, collectibles, pursuers, power-ups.

use crate::platform::{RenderSurface, SpriteKind};
use crate::sim::{GamePhase, GameState};

/// Draw one frame. Idle games draw nothing; a finished game keeps its last
/// frame on screen behind the game-over overlay.
pub fn draw_frame(state: &GameState, surface: &mut dyn RenderSurface) {
    surface.clear();
    if state.phase == GamePhase::Idle {
        return;
    }

    for h in &state.hazards {
        surface.draw(SpriteKind::Hazard, h.pos.x, h.pos.y, h.size, h.size);
    }

    let p = &state.player;
    surface.draw(SpriteKind::Player, p.pos.x, p.pos.y, p.size, p.size);

    for c in &state.collectibles {
        surface.draw(SpriteKind::Collectible, c.pos.x, c.pos.y, c.size, c.size);
    }

    for e in &state.pursuers {
        surface.draw(SpriteKind::Pursuer, e.pos.x, e.pos.y, e.size, e.size);
    }

    for u in &state.power_ups {
        surface.draw(SpriteKind::PowerUp, u.pos.x, u.pos.y, u.size, u.size);
    }
}
