//! Sprite positions for the animated phases
//!
//! Positions are in cell units relative to the board's top-left corner; a
//! renderer multiplies by its own cell size.

use crate::types::{Coord, TileKind};

/// Where and how to draw one tile this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSprite {
    pub coord: Coord,
    pub kind: TileKind,
    pub x: f32,
    pub y: f32,
    /// 0.0 (invisible) ..= 1.0 (opaque)
    pub alpha: f32,
}

impl TileSprite {
    pub fn resting(coord: Coord, kind: TileKind) -> Self {
        Self {
            coord,
            kind,
            x: coord.x as f32,
            y: coord.y as f32,
            alpha: 1.0,
        }
    }
}

/// Quadratic ease-out from `begin` by `change` over `duration` steps
pub fn ease_out_quad(step: u32, begin: f32, change: f32, duration: u32) -> f32 {
    let t = step.min(duration) as f32 / duration.max(1) as f32;
    -change * t * (t - 2.0) + begin
}

/// Quadratic ease-in from `begin` by `change` over `duration` steps
pub fn ease_in_quad(step: u32, begin: f32, change: f32, duration: u32) -> f32 {
    let t = step.min(duration) as f32 / duration.max(1) as f32;
    change * t * t + begin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints() {
        assert_eq!(ease_out_quad(0, -3.0, 5.0, 50), -3.0);
        assert_eq!(ease_out_quad(50, -3.0, 5.0, 50), 2.0);
        assert_eq!(ease_in_quad(0, 2.0, 10.0, 17), 2.0);
        assert_eq!(ease_in_quad(17, 2.0, 10.0, 17), 12.0);
    }

    #[test]
    fn ease_out_is_ahead_of_ease_in_midway() {
        let out = ease_out_quad(25, 0.0, 1.0, 50);
        let inn = ease_in_quad(25, 0.0, 1.0, 50);
        assert!(out > 0.5 && inn < 0.5);
    }
}
