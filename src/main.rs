//! Slingshot Bird entry point
//!
//! Headless autoplay demo: generates a run, aims each shot by grid-searching
//! launch velocities through the trajectory predictor, and plays until the
//! run ends. Useful for exercising the simulation end to end and for
//! balance-tuning from logs (RUST_LOG=debug for per-event detail).

use glam::Vec2;

use slingshot_bird::HighScoreStore;
use slingshot_bird::consts::*;
use slingshot_bird::sim::{self, GamePhase, GameState};

const MAX_LAUNCHES: u32 = 200;
const MAX_FLIGHT_TICKS: u32 = 5_000;

fn main() {
    env_logger::init();

    let mut store = HighScoreStore::open(".slingshot-bird-highscore.json");
    let seed: u64 = rand::random();
    log::info!("starting demo run, seed {seed}");

    let mut state = GameState::new(seed);
    state.high_score = store.best();
    if let Err(err) = state.start_game() {
        log::error!("could not start run: {err}");
        std::process::exit(1);
    }

    let mut launches = 0;
    while state.phase == GamePhase::Playing && launches < MAX_LAUNCHES {
        aim_and_release(&mut state);
        launches += 1;

        let mut flight_ticks = 0;
        while state.airborne && state.phase == GamePhase::Playing {
            sim::tick(&mut state);
            flight_ticks += 1;
            if flight_ticks > MAX_FLIGHT_TICKS {
                log::warn!("flight never settled, abandoning run");
                return;
            }
        }
        while state.phase == GamePhase::Exploding {
            sim::tick(&mut state);
        }
    }

    match state.phase {
        GamePhase::Win => println!("WIN in {launches} launches, score {}", state.score),
        GamePhase::GameOver => println!("crashed after {launches} launches, score {}", state.score),
        _ => println!("run abandoned at score {}", state.score),
    }
    if store.record(state.high_score) {
        println!("new high score: {}", state.high_score);
    }
}

/// Pick a launch by scoring candidate velocities against the aim preview,
/// then drive it through the drag-gesture interface.
fn aim_and_release(state: &mut GameState) {
    let goal_line = state
        .pipes
        .iter()
        .find(|p| p.is_goal && !p.passed)
        .map(|p| p.base_x + PIPE_WIDTH + GOAL_LINE_OFFSET)
        .unwrap_or(state.bird.pos.x + SCREEN_SPACING);

    let mut best = (f32::MIN, Vec2::new(8.0, -8.0));
    for vx in (4..=30).step_by(2) {
        for vy in (-40..=0).step_by(4) {
            let vel = Vec2::new(vx as f32, vy as f32);
            let score = score_launch(state, vel, goal_line);
            if score > best.0 {
                best = (score, vel);
            }
        }
    }

    // The slingshot stores the inverse of the pull vector
    let pull = best.1 / LAUNCH_POWER;
    state.begin_aim(state.bird.pos);
    state.update_aim(state.bird.pos - pull);
    state.release_aim();
}

/// Walk the preview trajectory: disqualify launches that clip a pipe body or
/// the ground, otherwise reward horizontal progress toward the goal line.
fn score_launch(state: &GameState, vel: Vec2, goal_line: f32) -> f32 {
    let clearance = BASE_BIRD_SIZE;
    let mut best_x = f32::MIN;

    for point in sim::predict(state.bird.pos, vel) {
        if point.y >= GAME_HEIGHT - GROUND_HEIGHT - clearance {
            break;
        }
        // Coarse body check against base shapes; moving pipes get extra slack
        let hits_pipe = state.pipes.iter().any(|pipe| {
            point.x > pipe.base_x - clearance
                && point.x < pipe.base_x + PIPE_WIDTH + clearance
                && (point.y < pipe.base_top + clearance
                    || point.y > pipe.base_top + pipe.gap - clearance)
        });
        if hits_pipe {
            return f32::MIN;
        }
        if point.x >= goal_line {
            // Crossing the line is always better than any partial flight
            return 1_000_000.0 - vel.length();
        }
        best_x = best_x.max(point.x);
    }
    best_x
}
