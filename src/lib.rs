//! Slingshot Bird - a side-scrolling slingshot arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level generation, physics, collisions, game state)
//! - `highscore`: Persisted high-score watermark
//!
//! Rendering, pointer-event plumbing and menu screens are external
//! collaborators: they read the public fields of [`sim::GameState`] each tick
//! and feed the aim gesture back in through its methods.

pub mod highscore;
pub mod sim;

pub use highscore::HighScoreStore;
pub use sim::{GamePhase, GameState};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (50 Hz; the physics tick rate)
    pub const SIM_DT: f32 = 1.0 / 50.0;

    /// Play area dimensions (world units)
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 700.0;
    /// Height of the ground band at the bottom of the play area
    pub const GROUND_HEIGHT: f32 = 64.0;

    /// Bird defaults
    pub const BIRD_START_X: f32 = 150.0;
    pub const BIRD_START_Y: f32 = 350.0;
    /// Side length of the bird's bounding box at size multiplier 1.0
    pub const BASE_BIRD_SIZE: f32 = 30.0;
    /// Size multiplier bounds
    pub const SIZE_MULTIPLIER_MIN: f32 = 0.4;
    pub const SIZE_MULTIPLIER_MAX: f32 = 2.5;
    /// Size multiplier delta per coin pickup (shrink) and goal crossing (grow)
    pub const COIN_SHRINK_STEP: f32 = 0.08;
    pub const PASS_GROW_STEP: f32 = 0.25;

    /// Physics
    pub const GRAVITY: f32 = 0.4;
    /// Horizontal drag applied to vx once per tick
    pub const DRAG_FACTOR: f32 = 0.995;

    /// Slingshot launch: velocity = pull vector * LAUNCH_POWER
    pub const LAUNCH_POWER: f32 = 0.15;
    /// Aim capture radius, in bird sizes (pointer must be this close to grab)
    pub const CAPTURE_RADIUS_FACTOR: f32 = 2.0;
    /// Maximum points in an aim-preview trajectory
    pub const TRAJECTORY_POINTS: usize = 60;

    /// Level layout
    pub const SCREEN_COUNT: u32 = 30;
    /// World X of the first screen
    pub const LEVEL_START_X: f32 = 600.0;
    /// Horizontal spacing between screens
    pub const SCREEN_SPACING: f32 = 500.0;
    pub const PIPE_WIDTH: f32 = 80.0;
    /// Base gap between top and bottom pipe bodies
    pub const PIPE_GAP: f32 = 200.0;
    /// Minimum margin above and below the gap
    pub const PIPE_MIN_MARGIN: f32 = 180.0;
    /// Goal line sits this far past the right edge of a goal pipe
    pub const GOAL_LINE_OFFSET: f32 = 96.0;

    /// Pipe movement (applied as sin of absolute time plus per-pipe offset)
    pub const PIPE_VERTICAL_AMPLITUDE: f32 = 60.0;
    pub const PIPE_VERTICAL_FREQ: f32 = 1.5;
    pub const PIPE_HORIZONTAL_AMPLITUDE: f32 = 40.0;
    pub const PIPE_HORIZONTAL_FREQ: f32 = 1.2;

    /// Coins
    pub const COIN_SIZE: f32 = 20.0;
    pub const COINS_PER_PIPE: u32 = 5;
    /// First coin sits this far past the owning pipe's right edge
    pub const COIN_START_OFFSET: f32 = 50.0;
    pub const COIN_X_STEP: f32 = 60.0;
    /// Vertical amplitude of the coin sine arc around the gap center
    pub const COIN_WAVE_AMPLITUDE: f32 = 40.0;

    /// Score needed to win the run
    pub const WIN_SCORE: u32 = 30;

    /// Camera easing: fraction of remaining distance covered per tick
    pub const CAMERA_EASE: f32 = 0.1;
    /// Camera snaps to target when within this distance
    pub const CAMERA_SNAP_DIST: f32 = 1.0;
    /// Camera target after a goal crossing: bird X minus this margin
    pub const CAMERA_MARGIN: f32 = 150.0;

    /// Explosion sub-animation: scale grows one step per tick up to the max,
    /// then lingers a couple of ticks before the game-over transition
    pub const EXPLOSION_MAX_SCALE: f32 = 15.0;
    pub const EXPLOSION_SCALE_STEP: f32 = 1.0;
    pub const EXPLOSION_LINGER_TICKS: u32 = 2;
}
