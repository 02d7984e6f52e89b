//! Axis-aligned box overlap
//!
//! Every collision in the game is a rectangle-vs-rectangle test. Boxes are
//! anchored at their top-left corner in canvas pixels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box (top-left corner + extent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// A square box of side `side` at `pos`
    #[inline]
    pub fn square(pos: Vec2, side: f32) -> Self {
        Self {
            min: pos,
            size: Vec2::splat(side),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }
}

/// Strict AABB overlap. Boxes that only share an edge do not overlap.
#[inline]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.min.x < b.min.x + b.size.x
        && a.min.x + a.size.x > b.min.x
        && a.min.y < b.min.y + b.size.y
        && a.min.y + a.size.y > b.min.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_partial() {
        let a = Rect::new(0.0, 0.0, 30.0, 30.0);
        let b = Rect::new(20.0, 20.0, 30.0, 30.0);
        assert!(overlaps(a, b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 30.0, 30.0);
        // Right edge of a == left edge of b
        assert!(!overlaps(a, Rect::new(30.0, 0.0, 30.0, 30.0)));
        // Bottom edge of a == top edge of b
        assert!(!overlaps(a, Rect::new(0.0, 30.0, 30.0, 30.0)));
        // Corner contact only
        assert!(!overlaps(a, Rect::new(30.0, 30.0, 10.0, 10.0)));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(overlaps(outer, inner));
        assert!(overlaps(inner, outer));
    }

    #[test]
    fn test_non_square_boxes() {
        let wide = Rect::new(0.0, 0.0, 100.0, 10.0);
        assert!(overlaps(wide, Rect::new(90.0, 5.0, 20.0, 20.0)));
        assert!(!overlaps(wide, Rect::new(90.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn test_center() {
        let r = Rect::square(Vec2::new(10.0, 20.0), 30.0);
        assert_eq!(r.center(), Vec2::new(25.0, 35.0));
        assert_eq!(r.max(), Vec2::new(40.0, 50.0));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -800.0f32..800.0, ay in -800.0f32..800.0, aw in 1.0f32..100.0,
            bx in -800.0f32..800.0, by in -800.0f32..800.0, bw in 1.0f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, aw);
            let b = Rect::new(bx, by, bw, bw);
            prop_assert_eq!(overlaps(a, b), overlaps(b, a));
        }

        #[test]
        fn prop_box_overlaps_itself(x in -800.0f32..800.0, y in -800.0f32..800.0, s in 1.0f32..100.0) {
            let r = Rect::new(x, y, s, s);
            prop_assert!(overlaps(r, r));
        }
    }
}
