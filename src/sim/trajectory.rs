//! Aim-preview trajectory prediction
//!
//! Integrates the flight model forward from a candidate launch without
//! touching real state. The result is a lazy, finite iterator: the caller
//! recomputes it on every aim-input update and never accumulates it.

use glam::Vec2;

use crate::consts::*;

/// Lazy sequence of predicted positions, newest aim input wins
#[derive(Debug, Clone)]
pub struct Trajectory {
    pos: Vec2,
    vel: Vec2,
    remaining: usize,
}

/// Predict up to [`TRAJECTORY_POINTS`] future positions for a launch from
/// `start` with velocity `vel`. Stops early once a point would leave the
/// vertical play area.
pub fn predict(start: Vec2, vel: Vec2) -> Trajectory {
    Trajectory {
        pos: start,
        vel,
        remaining: TRAJECTORY_POINTS,
    }
}

impl Iterator for Trajectory {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.remaining == 0 {
            return None;
        }
        let point = self.pos;
        self.remaining -= 1;

        // Same semi-implicit step as the flight integrator
        self.vel.y += GRAVITY;
        self.pos.y += self.vel.y;
        self.pos.x += self.vel.x;
        self.vel.x *= DRAG_FACTOR;

        if !(0.0..=GAME_HEIGHT).contains(&self.pos.y) {
            self.remaining = 0;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(self.remaining > 0), Some(self.remaining))
    }
}
