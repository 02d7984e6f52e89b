//! Pursuer movement
//!
//! Each axis is stepped on its own: a pursuer moves one effective-speed step
//! along x and one along y toward the player's top-left corner, so diagonal
//! motion is faster than straight motion. There is no overshoot correction.

use glam::Vec2;

use super::state::Pursuer;

/// Step a single coordinate toward `target`
#[inline]
fn step_axis(value: f32, target: f32, speed: f32) -> f32 {
    if value < target {
        value + speed
    } else if value > target {
        value - speed
    } else {
        value
    }
}

/// Move one pursuer a single tick toward `target`
pub fn step_toward(pursuer: &mut Pursuer, target: Vec2, multiplier: f32) {
    let speed = pursuer.speed * multiplier;
    pursuer.pos.x = step_axis(pursuer.pos.x, target.x, speed);
    pursuer.pos.y = step_axis(pursuer.pos.y, target.y, speed);
}

/// Advance every pursuer one tick
pub fn advance<'a>(
    pursuers: impl IntoIterator<Item = &'a mut Pursuer>,
    target: Vec2,
    multiplier: f32,
) {
    for pursuer in pursuers {
        step_toward(pursuer, target, multiplier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pursuer_at(x: f32, y: f32, speed: f32) -> Pursuer {
        Pursuer {
            pos: Vec2::new(x, y),
            size: 30.0,
            speed,
        }
    }

    #[test]
    fn test_diagonal_step() {
        let mut p = pursuer_at(0.0, 0.0, 2.0);
        step_toward(&mut p, Vec2::new(100.0, 100.0), 1.0);
        assert_eq!(p.pos, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_slowed_step() {
        let mut p = pursuer_at(0.0, 0.0, 2.0);
        step_toward(&mut p, Vec2::new(100.0, 100.0), 0.5);
        assert_eq!(p.pos, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_aligned_axis_does_not_move() {
        let mut p = pursuer_at(100.0, 0.0, 3.0);
        step_toward(&mut p, Vec2::new(100.0, 50.0), 1.0);
        assert_eq!(p.pos, Vec2::new(100.0, 3.0));
    }

    #[test]
    fn test_moves_up_and_left() {
        let mut p = pursuer_at(500.0, 400.0, 1.0);
        step_toward(&mut p, Vec2::new(0.0, 0.0), 1.0);
        assert_eq!(p.pos, Vec2::new(499.0, 399.0));
    }

    #[test]
    fn test_overshoots_when_close() {
        // Step size beats the remaining gap; no snapping to the target
        let mut p = pursuer_at(0.0, 0.0, 4.0);
        step_toward(&mut p, Vec2::new(1.0, 0.0), 1.0);
        assert_eq!(p.pos, Vec2::new(4.0, 0.0));
    }

    #[test]
    fn test_advance_moves_all() {
        let mut ps = vec![pursuer_at(0.0, 0.0, 1.0), pursuer_at(10.0, 10.0, 2.0)];
        advance(ps.iter_mut(), Vec2::new(5.0, 5.0), 1.0);
        assert_eq!(ps[0].pos, Vec2::new(1.0, 1.0));
        assert_eq!(ps[1].pos, Vec2::new(8.0, 8.0));
    }

    proptest! {
        #[test]
        fn prop_step_is_bounded_per_axis(
            px in -100.0f32..900.0, py in -100.0f32..900.0,
            tx in -100.0f32..900.0, ty in -100.0f32..900.0,
            speed in 0.0f32..10.0, slowed: bool,
        ) {
            let mult = if slowed { 0.5 } else { 1.0 };
            let mut p = pursuer_at(px, py, speed);
            step_toward(&mut p, Vec2::new(tx, ty), mult);
            let step = speed * mult;
            prop_assert!((p.pos.x - px).abs() <= step + 1e-3);
            prop_assert!((p.pos.y - py).abs() <= step + 1e-3);
        }
    }
}
