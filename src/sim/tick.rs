//! Fixed timestep simulation tick
//!
//! The original game ran physics, pipe animation, camera easing and the
//! explosion timer on four independent timers. Here they collapse into one
//! step function so the ordering invariant holds by construction: obstacle
//! shapes update before collision evaluation, every tick.

use glam::Vec2;

use super::collision::{self, CollisionOutcome};
use super::state::{Explosion, GamePhase, GameState};
use crate::consts::*;

/// Advance the session by one fixed timestep
pub fn tick(state: &mut GameState) {
    match state.phase {
        GamePhase::Playing => tick_playing(state),
        GamePhase::Exploding => tick_exploding(state),
        GamePhase::Start | GamePhase::GameOver | GamePhase::Win => {}
    }
}

fn tick_playing(state: &mut GameState) {
    state.time_ticks += 1;
    let time = state.time_secs();

    // Obstacles first, so collision always sees this tick's geometry
    for pipe in &mut state.pipes {
        pipe.animate(time);
    }

    if state.airborne {
        // Semi-implicit Euler, no terminal velocity
        let bird = &mut state.bird;
        bird.vel.y += GRAVITY;
        bird.pos.y += bird.vel.y;
        bird.pos.x += bird.vel.x;
        bird.vel.x *= DRAG_FACTOR;

        match collision::resolve(state) {
            CollisionOutcome::Fatal => {
                trigger_explosion(state);
                return;
            }
            CollisionOutcome::Scored => on_goal_crossed(state),
            CollisionOutcome::None => {}
        }
    }

    if state.phase == GamePhase::Playing {
        ease_camera(state);
    }
}

/// A goal crossing always stops the flight; winning short-circuits the
/// camera re-center.
fn on_goal_crossed(state: &mut GameState) {
    state.airborne = false;
    state.bird.vel = Vec2::ZERO;

    if state.score >= WIN_SCORE {
        state.phase = GamePhase::Win;
        update_high_score(state);
        log::info!("run won with score {}", state.score);
        return;
    }

    state.camera_target = state.bird.pos.x - CAMERA_MARGIN;
}

fn trigger_explosion(state: &mut GameState) {
    state.explosion = Some(Explosion {
        origin: state.bird.pos,
        scale: 1.0,
    });
    state.airborne = false;
    state.bird.vel = Vec2::ZERO;
    state.gameover_delay = EXPLOSION_LINGER_TICKS;
    state.phase = GamePhase::Exploding;
    log::info!(
        "fatal collision at ({:.0}, {:.0}), score {}",
        state.bird.pos.x,
        state.bird.pos.y,
        state.score
    );
}

/// Discrete scale-up, a short linger, then the game-over transition. The
/// high-score watermark updates here, not at the moment of collision.
fn tick_exploding(state: &mut GameState) {
    if let Some(explosion) = state.explosion.as_mut() {
        if explosion.scale < EXPLOSION_MAX_SCALE {
            explosion.scale += EXPLOSION_SCALE_STEP;
        } else if state.gameover_delay > 0 {
            state.gameover_delay -= 1;
        } else {
            state.phase = GamePhase::GameOver;
            update_high_score(state);
            log::info!("game over, score {}", state.score);
        }
    }
}

fn update_high_score(state: &mut GameState) {
    if state.score > state.high_score {
        state.high_score = state.score;
        log::info!("new high score: {}", state.high_score);
    }
}

/// Single-pole easing toward the camera target, snapping when close
fn ease_camera(state: &mut GameState) {
    let diff = state.camera_target - state.camera_x;
    if diff.abs() < CAMERA_SNAP_DIST {
        state.camera_x = state.camera_target;
    } else {
        state.camera_x += diff * CAMERA_EASE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{MovePattern, Pipe};
    use std::f32::consts::FRAC_PI_2;

    fn goal_pipe(id: u32, screen: u32, x: f32) -> Pipe {
        Pipe {
            id,
            screen,
            base_x: x,
            base_top: 300.0,
            gap: 200.0,
            is_goal: true,
            pattern: MovePattern::None,
            phase_offset: 0.0,
            x,
            top: 300.0,
            passed: false,
        }
    }

    fn playing_state() -> GameState {
        let mut state = GameState::new(0);
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_tick_noop_outside_active_phases() {
        for phase in [GamePhase::Start, GamePhase::GameOver, GamePhase::Win] {
            let mut state = GameState::new(0);
            state.phase = phase;
            tick(&mut state);
            assert_eq!(state.time_ticks, 0);
            assert_eq!(state.phase, phase);
        }
    }

    #[test]
    fn test_grounded_bird_does_not_move() {
        let mut state = playing_state();
        let before = state.bird.pos;
        tick(&mut state);
        assert_eq!(state.bird.pos, before);
    }

    #[test]
    fn test_fall_to_game_over_scores_zero() {
        // Full run through the real generator: launch straight down into the
        // ground, clearing nothing
        let mut state = GameState::new(123);
        state.start_game().unwrap();
        state.airborne = true;

        for _ in 0..1000 {
            if state.phase == GamePhase::GameOver {
                break;
            }
            tick(&mut state);
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 0);
        assert!(state.explosion.is_some());
    }

    #[test]
    fn test_goal_crossing_stops_flight_and_recenters() {
        let mut state = playing_state();
        state.pipes.push(goal_pipe(0, 0, 600.0));
        state.bird.pos = Vec2::new(900.0, 400.0);
        state.bird.vel = Vec2::new(5.0, 0.0);
        state.airborne = true;

        tick(&mut state);
        assert_eq!(state.score, 1);
        assert!(!state.airborne);
        assert_eq!(state.bird.vel, Vec2::ZERO);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!((state.camera_target - (state.bird.pos.x - CAMERA_MARGIN)).abs() < 1e-3);
    }

    #[test]
    fn test_thirty_crossings_win_and_set_high_score() {
        let mut state = playing_state();
        for screen in 0..WIN_SCORE {
            state
                .pipes
                .push(goal_pipe(screen, screen, 600.0 + screen as f32 * SCREEN_SPACING));
        }

        for screen in 0..WIN_SCORE {
            // Park the bird just past this screen's goal line, inside the gap
            let line = state.pipes[screen as usize].goal_line();
            state.bird.pos = Vec2::new(line + state.bird.size(), 400.0);
            state.bird.vel = Vec2::ZERO;
            state.airborne = true;
            tick(&mut state);
            assert_eq!(state.score, screen + 1);
            assert!(!state.airborne);
        }

        assert_eq!(state.phase, GamePhase::Win);
        assert_eq!(state.high_score, WIN_SCORE);
    }

    #[test]
    fn test_win_short_circuits_camera_recenter() {
        let mut state = playing_state();
        state.score = WIN_SCORE - 1;
        state.last_scored_screen = Some(28);
        state.pipes.push(goal_pipe(29, 29, 600.0));
        state.bird.pos = Vec2::new(state.pipes[0].goal_line() + 100.0, 400.0);
        state.airborne = true;
        state.camera_target = 0.0;

        tick(&mut state);
        assert_eq!(state.phase, GamePhase::Win);
        // Camera target untouched by the winning crossing
        assert_eq!(state.camera_target, 0.0);
    }

    #[test]
    fn test_high_score_updates_at_game_over_not_collision() {
        let mut state = playing_state();
        state.score = 5;
        state.high_score = 2;
        state.bird.pos = Vec2::new(150.0, GAME_HEIGHT - GROUND_HEIGHT);
        state.airborne = true;

        tick(&mut state);
        assert_eq!(state.phase, GamePhase::Exploding);
        assert_eq!(state.high_score, 2);

        let mut ticks = 0;
        while state.phase == GamePhase::Exploding {
            tick(&mut state);
            ticks += 1;
            assert!(ticks < 30, "explosion never finished");
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.high_score, 5);
    }

    #[test]
    fn test_explosion_scale_steps_up() {
        let mut state = playing_state();
        state.bird.pos = Vec2::new(150.0, GAME_HEIGHT - GROUND_HEIGHT);
        state.airborne = true;
        tick(&mut state);

        let first = state.explosion.as_ref().map(|e| e.scale).unwrap_or(0.0);
        tick(&mut state);
        let second = state.explosion.as_ref().map(|e| e.scale).unwrap_or(0.0);
        assert_eq!(second, first + EXPLOSION_SCALE_STEP);
    }

    #[test]
    fn test_camera_eases_and_snaps() {
        let mut state = playing_state();
        state.camera_target = 100.0;

        tick(&mut state);
        assert!((state.camera_x - 100.0 * CAMERA_EASE).abs() < 1e-3);

        for _ in 0..200 {
            tick(&mut state);
        }
        assert_eq!(state.camera_x, 100.0);
    }

    #[test]
    fn test_collision_sees_current_tick_geometry() {
        // A vertical pipe whose animated top swallows the bird on the very
        // first tick: if collision ran against the base shape, this would be
        // a clean pass through the gap.
        let mut state = playing_state();
        let mut pipe = goal_pipe(0, 0, 600.0);
        pipe.pattern = MovePattern::Vertical;
        // sin peaks at the first tick: top jumps from 300 to 360
        pipe.phase_offset = FRAC_PI_2 / PIPE_VERTICAL_FREQ - SIM_DT;
        state.pipes.push(pipe);

        // Safe against base geometry (bb 315..345 vs top 300), fatal against
        // the animated top at 360
        state.bird.pos = Vec2::new(620.0, 330.0);
        state.airborne = true;

        tick(&mut state);
        assert_eq!(state.phase, GamePhase::Exploding);
    }
}
