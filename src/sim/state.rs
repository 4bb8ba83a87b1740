//! Game state and core simulation types
//!
//! The session aggregate [`GameState`] owns everything a run mutates: bird,
//! pipes, coins, score, camera and the phase machine. Sub-systems receive it
//! by `&mut` so all mutation funnels through one writer.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::level::{self, LevelError};
use super::trajectory::{self, Trajectory};
use crate::consts::*;

/// Current phase of the session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Initial menu state, no level generated yet
    Start,
    /// Active run (aiming or airborne)
    Playing,
    /// Fatal collision happened, explosion animation running
    Exploding,
    /// Run ended in a crash
    GameOver,
    /// Run ended with the win threshold reached
    Win,
}

/// The player's projectile
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bird {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Scales the collision box, adjusted by coin pickups and goal crossings
    pub size_multiplier: f32,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(BIRD_START_X, BIRD_START_Y),
            vel: Vec2::ZERO,
            size_multiplier: 1.0,
        }
    }

    /// Current bounding-box side length
    pub fn size(&self) -> f32 {
        BASE_BIRD_SIZE * self.size_multiplier
    }

    /// Axis-aligned bounds used for all collision tests
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(self.size()))
    }

    /// Heading angle derived from velocity, presentation only
    pub fn rotation(&self) -> f32 {
        self.vel.y.atan2(self.vel.x)
    }

    /// Coin pickup: shrink toward the floor
    pub fn shrink(&mut self) {
        self.size_multiplier = (self.size_multiplier - COIN_SHRINK_STEP).max(SIZE_MULTIPLIER_MIN);
    }

    /// Goal crossing: grow toward the cap
    pub fn grow(&mut self) {
        self.size_multiplier = (self.size_multiplier + PASS_GROW_STEP).min(SIZE_MULTIPLIER_MAX);
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// How a pipe's effective shape moves over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovePattern {
    None,
    Vertical,
    Horizontal,
    Both,
}

impl MovePattern {
    pub fn moves_vertically(self) -> bool {
        matches!(self, MovePattern::Vertical | MovePattern::Both)
    }

    pub fn moves_horizontally(self) -> bool {
        matches!(self, MovePattern::Horizontal | MovePattern::Both)
    }
}

/// A gap obstacle. Base attributes are fixed at generation time; `x` and
/// `top` are the effective shape, recomputed every tick from absolute time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    pub id: u32,
    /// Screen index this pipe belongs to (keys the difficulty schedules)
    pub screen: u32,
    pub base_x: f32,
    pub base_top: f32,
    /// Vertical gap size; animation moves the gap, never resizes it
    pub gap: f32,
    /// Only the last pipe of a screen advances the score
    pub is_goal: bool,
    pub pattern: MovePattern,
    /// Random phase so pipes on the same schedule don't move in lockstep
    pub phase_offset: f32,
    /// Effective world X (post-animation)
    pub x: f32,
    /// Effective top-gap height (post-animation)
    pub top: f32,
    /// Set exactly once when the goal line is crossed
    pub passed: bool,
}

impl Pipe {
    /// Recompute the effective shape for the given absolute sim time.
    ///
    /// Pure in `(base values, time, phase_offset)`: no accumulated deltas,
    /// so the animation is drift-free and resumable from any time.
    pub fn animate(&mut self, time_secs: f32) {
        self.top = effective_top_height(self.base_top, time_secs, self.phase_offset, self.pattern);
        self.x = effective_world_x(self.base_x, time_secs, self.phase_offset, self.pattern);
    }

    /// Right edge of the effective pipe body
    pub fn right(&self) -> f32 {
        self.x + PIPE_WIDTH
    }

    /// World X the bird must reach for a goal crossing
    pub fn goal_line(&self) -> f32 {
        self.right() + GOAL_LINE_OFFSET
    }
}

/// Effective top-gap height for a pipe at an absolute time
pub fn effective_top_height(base_top: f32, time_secs: f32, offset: f32, pattern: MovePattern) -> f32 {
    if pattern.moves_vertically() {
        base_top + ((time_secs + offset) * PIPE_VERTICAL_FREQ).sin() * PIPE_VERTICAL_AMPLITUDE
    } else {
        base_top
    }
}

/// Effective world X for a pipe at an absolute time
pub fn effective_world_x(base_x: f32, time_secs: f32, offset: f32, pattern: MovePattern) -> f32 {
    if pattern.moves_horizontally() {
        base_x + ((time_secs + offset) * PIPE_HORIZONTAL_FREQ).sin() * PIPE_HORIZONTAL_AMPLITUDE
    } else {
        base_x
    }
}

/// A collectible coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    /// Owning pipe, spawn-time association only
    pub pipe_id: u32,
    pub pos: Vec2,
    /// One-shot: a collected coin never re-collides
    pub collected: bool,
}

impl Coin {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(COIN_SIZE))
    }
}

/// Aim (drag) gesture state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AimState {
    Idle,
    /// Dragging from the mouse-down anchor; pulling the pointer back past the
    /// anchor stores a forward launch vector (slingshot semantics)
    Dragging { anchor: Vec2, pointer: Vec2 },
}

/// Explosion sub-animation state
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    /// World position of the fatal collision
    pub origin: Vec2,
    /// Discrete scale, stepped up each tick until the max
    pub scale: f32,
}

/// Complete session state (serializable snapshot)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Base seed; each run derives its own RNG stream from it
    pub seed: u64,
    /// Runs started so far, salts the per-run level RNG
    pub runs: u32,
    pub phase: GamePhase,
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub coins: Vec<Coin>,
    pub score: u32,
    /// Process-wide best, persisted by the embedding application
    pub high_score: u32,
    /// World-to-screen translation, eased toward `camera_target`
    pub camera_x: f32,
    pub camera_target: f32,
    /// True between release and the next stop/crash
    pub airborne: bool,
    pub aim: AimState,
    /// Highest screen index already credited (scoring watermark)
    pub last_scored_screen: Option<u32>,
    pub explosion: Option<Explosion>,
    /// Ticks to linger after the explosion finishes growing
    pub gameover_delay: u32,
    /// Simulation tick counter, drives all time-based animation
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh session in the start menu phase
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            runs: 0,
            phase: GamePhase::Start,
            bird: Bird::new(),
            pipes: Vec::new(),
            coins: Vec::new(),
            score: 0,
            high_score: 0,
            camera_x: 0.0,
            camera_target: 0.0,
            airborne: false,
            aim: AimState::Idle,
            last_scored_screen: None,
            explosion: None,
            gameover_delay: 0,
            time_ticks: 0,
        }
    }

    /// Absolute sim time in seconds
    pub fn time_secs(&self) -> f32 {
        self.time_ticks as f32 * SIM_DT
    }

    /// RNG stream for the current run
    fn run_rng(&self) -> Pcg32 {
        let salt = (self.runs as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Pcg32::seed_from_u64(self.seed.wrapping_add(salt))
    }

    /// Reset all entities, regenerate the level and enter `Playing`.
    ///
    /// Valid from any phase; a restart after `GameOver`/`Win` bypasses the
    /// start menu. Carries nothing over from the previous run except the
    /// high score.
    pub fn start_game(&mut self) -> Result<(), LevelError> {
        self.runs += 1;
        let mut rng = self.run_rng();
        let level = level::generate(SCREEN_COUNT, &mut rng)?;

        self.bird = Bird::new();
        self.pipes = level.pipes;
        self.coins = level.coins;
        self.score = 0;
        self.camera_x = 0.0;
        self.camera_target = 0.0;
        self.airborne = false;
        self.aim = AimState::Idle;
        self.last_scored_screen = None;
        self.explosion = None;
        self.gameover_delay = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;

        log::info!(
            "run {}: level generated ({} pipes, {} coins)",
            self.runs,
            self.pipes.len(),
            self.coins.len()
        );
        Ok(())
    }

    /// Start the aim gesture at a world-space pointer position.
    ///
    /// Silently ignored unless playing, grounded, and the pointer is within
    /// the capture radius of the bird.
    pub fn begin_aim(&mut self, pointer: Vec2) {
        if self.phase != GamePhase::Playing || self.airborne {
            return;
        }
        if self.aim != AimState::Idle {
            return;
        }
        let capture = self.bird.size() * CAPTURE_RADIUS_FACTOR;
        if pointer.distance(self.bird.pos) < capture {
            self.aim = AimState::Dragging {
                anchor: self.bird.pos,
                pointer,
            };
        }
    }

    /// Update the pointer position of an active aim gesture
    pub fn update_aim(&mut self, new_pointer: Vec2) {
        if let AimState::Dragging { ref mut pointer, .. } = self.aim {
            *pointer = new_pointer;
        }
    }

    /// Launch velocity the current drag would produce
    pub fn aim_velocity(&self) -> Option<Vec2> {
        match self.aim {
            AimState::Dragging { anchor, pointer } => Some((anchor - pointer) * LAUNCH_POWER),
            AimState::Idle => None,
        }
    }

    /// Aim-preview trajectory for the current drag.
    ///
    /// Recomputed fresh on every call; the iterator is lazy and never
    /// outlives the aim input that produced it.
    pub fn aim_trajectory(&self) -> Option<Trajectory> {
        self.aim_velocity()
            .map(|vel| trajectory::predict(self.bird.pos, vel))
    }

    /// Release the drag: launch the bird and end the gesture
    pub fn release_aim(&mut self) {
        if let Some(vel) = self.aim_velocity() {
            self.bird.vel = vel;
            self.airborne = true;
            self.aim = AimState::Idle;
            log::debug!("launched with velocity ({:.2}, {:.2})", vel.x, vel.y);
        }
    }
}
