//! Procedural level generation
//!
//! One call per run produces the full pipe/coin layout. Difficulty is keyed
//! by screen index: later screens trade a slightly wider gap for more pipes
//! per screen and more mobile pipes.

use std::f32::consts::TAU;
use std::fmt;

use glam::Vec2;
use rand::Rng;

use super::state::{Coin, MovePattern, Pipe};
use crate::consts::*;

/// Generated layout for a single run
#[derive(Debug, Clone)]
pub struct Level {
    pub pipes: Vec<Pipe>,
    pub coins: Vec<Coin>,
}

/// Invalid generator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    /// A run needs at least one screen
    NoScreens,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::NoScreens => write!(f, "screen count must be at least 1"),
        }
    }
}

impl std::error::Error for LevelError {}

/// Pipes per screen: single early on, packed late
pub fn pipes_per_screen(screen: u32) -> u32 {
    if screen >= 20 {
        4
    } else if screen >= 15 {
        2
    } else {
        1
    }
}

/// Gap size per screen: wider on later screens to offset the pipe count
pub fn gap_for_screen(screen: u32) -> f32 {
    if screen >= 20 {
        260.0
    } else if screen >= 15 {
        240.0
    } else {
        PIPE_GAP
    }
}

/// Movement pattern schedule: motion complexity rises with screen index
fn pattern_for_screen(screen: u32, rng: &mut impl Rng) -> MovePattern {
    if screen >= 20 {
        MovePattern::Vertical
    } else if screen >= 10 {
        MovePattern::Both
    } else if screen >= 5 {
        if rng.random_bool(0.5) {
            MovePattern::Vertical
        } else {
            MovePattern::Horizontal
        }
    } else {
        MovePattern::None
    }
}

/// Generate the full layout for `screen_count` screens.
///
/// Fails fast on a zero screen count; every other input is covered by the
/// schedules. Gap placement always leaves `PIPE_MIN_MARGIN` of pipe body
/// above and below the gap.
pub fn generate(screen_count: u32, rng: &mut impl Rng) -> Result<Level, LevelError> {
    if screen_count == 0 {
        return Err(LevelError::NoScreens);
    }

    let mut pipes = Vec::new();
    let mut coins = Vec::new();
    let mut pipe_id = 0u32;
    let mut coin_id = 0u32;

    for screen in 0..screen_count {
        let screen_start = LEVEL_START_X + screen as f32 * SCREEN_SPACING;
        let count = pipes_per_screen(screen);

        for slot in 0..count {
            let gap = gap_for_screen(screen);
            let top = rng.random_range(PIPE_MIN_MARGIN..GAME_HEIGHT - gap - PIPE_MIN_MARGIN);
            let pattern = pattern_for_screen(screen, rng);
            let phase_offset = rng.random_range(0.0..TAU);

            // Multiple pipes subdivide the screen spacing evenly
            let x = screen_start + slot as f32 * (SCREEN_SPACING / count as f32);

            pipes.push(Pipe {
                id: pipe_id,
                screen,
                base_x: x,
                base_top: top,
                gap,
                is_goal: slot == count - 1,
                pattern,
                phase_offset,
                x,
                top,
                passed: false,
            });

            // Coins trail the first pipe of each screen only (which is the
            // single pipe on early screens)
            if slot == 0 {
                let wave_phase = if screen >= 15 {
                    rng.random_range(0.0..TAU)
                } else {
                    0.0
                };
                let start_x = x + PIPE_WIDTH + COIN_START_OFFSET;
                let gap_center_y = top + gap / 2.0;

                for j in 0..COINS_PER_PIPE {
                    let coin_x = start_x + j as f32 * COIN_X_STEP;
                    let offset_y = (TAU * j as f32 / COINS_PER_PIPE as f32 + wave_phase).sin()
                        * COIN_WAVE_AMPLITUDE;
                    coins.push(Coin {
                        id: coin_id,
                        pipe_id,
                        pos: Vec2::new(coin_x, gap_center_y + offset_y),
                        collected: false,
                    });
                    coin_id += 1;
                }
            }

            pipe_id += 1;
        }
    }

    Ok(Level { pipes, coins })
}
