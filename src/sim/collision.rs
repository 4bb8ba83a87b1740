//! Collision detection and scoring
//!
//! Everything is axis-aligned boxes against the *current* (post-animation)
//! pipe shapes. Runs once per tick while the bird is airborne; fatal
//! collisions and goal crossings are mutually exclusive outcomes of the
//! same pass.

use glam::Vec2;

use super::state::GameState;
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap test (touching edges do not count)
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

/// What the collision pass decided for this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Nothing happened (coins may still have been collected)
    None,
    /// Bird hit the ground band, ceiling or a pipe body
    Fatal,
    /// A goal line was crossed and one point was credited
    Scored,
}

/// Evaluate the bird against ground, pipes, coins and goal lines.
///
/// Mutates coin/pipe one-shot flags, the bird's size multiplier, the score
/// and the screen watermark; the caller reacts to the returned outcome
/// (explosion, stop-flight, win check).
///
/// Goal tie-break: pipes are stored in ascending screen order, so the first
/// qualifying goal line is the lowest qualifying screen index, and at most
/// one scoring event fires per tick.
pub fn resolve(state: &mut GameState) -> CollisionOutcome {
    let GameState {
        bird,
        pipes,
        coins,
        score,
        last_scored_screen,
        ..
    } = state;
    let bb = bird.aabb();

    // 1. Ceiling and ground band are both fatal
    if bb.min.y <= 0.0 || bb.max.y >= GAME_HEIGHT - GROUND_HEIGHT {
        return CollisionOutcome::Fatal;
    }

    // 2. Pipe bodies: overlapping a pipe column is fatal unless the bird is
    //    fully inside the gap
    for pipe in pipes.iter() {
        let overlaps_x = bb.max.x > pipe.x && bb.min.x < pipe.right();
        if overlaps_x && (bb.min.y < pipe.top || bb.max.y > pipe.top + pipe.gap) {
            return CollisionOutcome::Fatal;
        }
    }

    // 3. Coin pickups: one-shot, permanently inert afterwards
    for coin in coins.iter_mut() {
        if !coin.collected && bb.intersects(&coin.aabb()) {
            coin.collected = true;
            bird.shrink();
            log::debug!(
                "coin {} collected, size multiplier {:.2}",
                coin.id,
                bird.size_multiplier
            );
        }
    }

    // 4. Goal lines, gated by the screen watermark
    for pipe in pipes.iter_mut() {
        if !pipe.is_goal || pipe.passed {
            continue;
        }
        if last_scored_screen.is_some_and(|s| pipe.screen <= s) {
            continue;
        }
        if bb.min.x >= pipe.goal_line() {
            pipe.passed = true;
            *last_scored_screen = Some(pipe.screen);
            *score += 1;
            bird.grow();
            log::debug!("goal pipe {} (screen {}) crossed, score {}", pipe.id, pipe.screen, score);
            return CollisionOutcome::Scored;
        }
    }

    CollisionOutcome::None
}
