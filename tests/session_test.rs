//! End-to-end session scenarios through the public API

use lane_runner::consts::*;
use lane_runner::sim::{GameState, Mode, Obstacle, tick};
use lane_runner::FrameDriver;

fn obstacle_on_player(state: &GameState) -> Obstacle {
    Obstacle {
        lane: state.player.lane,
        x: state.config.lane_origin(state.player.lane, state.config.obstacle_width),
        y: state.config.ground_level,
        width: state.config.obstacle_width,
        height: state.config.obstacle_height,
    }
}

#[test]
fn test_session_lifecycle() {
    let mut driver = FrameDriver::new(900.0, 600.0, 1234);
    assert_eq!(driver.state().mode, Mode::Instructions);

    // Nothing moves before the run starts
    driver.frame();
    assert_eq!(driver.state().elapsed, 0.0);

    driver.state_mut().start_game(1, false);
    // Five seconds: long enough for spawns, short enough that nothing has
    // scrolled down to the player yet
    for _ in 0..300 {
        driver.frame();
    }

    let state = driver.state();
    assert_eq!(state.mode, Mode::Running);
    assert!((state.elapsed - 5.0).abs() < 0.01);
    assert!(state.speed > INITIAL_SPEED);
    assert!(state.speed <= MAX_SPEED);
    assert!(state.distance > 0.0);
    assert!(state.display_score() >= 29, "at least the per-tick trickle");
    assert!(!state.obstacles.is_empty() || !state.coins.is_empty());
}

#[test]
fn test_pause_freezes_and_resumes() {
    let mut driver = FrameDriver::new(900.0, 600.0, 1234);
    driver.state_mut().start_game(1, false);
    for _ in 0..60 {
        driver.frame();
    }
    driver.state_mut().toggle_pause();
    let frozen_score = driver.state().score;
    let frozen_distance = driver.state().distance;
    for _ in 0..120 {
        driver.frame();
    }
    assert_eq!(driver.state().score, frozen_score);
    assert_eq!(driver.state().distance, frozen_distance);

    driver.state_mut().toggle_pause();
    driver.frame();
    assert!(driver.state().score > frozen_score);
}

#[test]
fn test_collision_game_over_then_restart() {
    let mut driver = FrameDriver::new(900.0, 600.0, 1234);
    driver.state_mut().start_game(1, false);
    for _ in 0..30 {
        driver.frame();
    }

    let obstacle = obstacle_on_player(driver.state());
    driver.state_mut().obstacles.push(obstacle);
    driver.frame();

    let state = driver.state();
    assert_eq!(state.mode, Mode::GameOver);
    assert_eq!(state.lives, 0);
    assert_eq!(state.final_score, state.display_score());

    driver.state_mut().restart_game();
    let state = driver.state();
    assert_eq!(state.mode, Mode::Instructions);
    assert_eq!(state.score, 0.0);
    assert_eq!(state.speed, INITIAL_SPEED);
    assert_eq!(state.lives, 1);
    assert!(!state.has_booster);
    assert!(state.obstacles.is_empty());
    assert!(state.coins.is_empty());
}

#[test]
fn test_bonus_lives_survive_hits() {
    let mut state = GameState::new(900.0, 600.0, 1234);
    state.start_game(3, true);

    for hit in 0..2 {
        let obstacle = obstacle_on_player(&state);
        state.obstacles.push(obstacle);
        tick(&mut state);
        assert_eq!(state.mode, Mode::Running);
        assert_eq!(state.lives, 2 - hit);
        assert_eq!(state.player.lane, state.config.center_lane());
    }

    let obstacle = obstacle_on_player(&state);
    state.obstacles.push(obstacle);
    tick(&mut state);
    assert_eq!(state.mode, Mode::GameOver);
}

#[test]
fn test_win_then_restart() {
    let mut state = GameState::new(900.0, 600.0, 1234);
    state.start_game(1, false);
    state.touch_cat();
    state.score = WIN_SCORE as f64 - 0.05;
    tick(&mut state);

    assert_eq!(state.mode, Mode::Win);
    assert_eq!(state.final_score, WIN_SCORE);
    assert!(!state.cat_touched);

    state.restart_game();
    assert_eq!(state.mode, Mode::Instructions);
    assert_eq!(state.score, 0.0);
    assert_eq!(state.lives, 1);
}

#[test]
fn test_long_run_invariants() {
    let mut driver = FrameDriver::new(900.0, 600.0, 98765);
    driver.state_mut().start_game(3, false);

    let mut previous_speed = driver.state().speed;
    for _ in 0..3600 {
        // Step out of any lane with a threat bearing down on the player
        {
            let state = driver.state_mut();
            let lane = state.player.lane;
            let player_top = state.player.y;
            let threatened = state
                .obstacles
                .iter()
                .any(|o| o.lane == lane && o.y + o.height > player_top - 150.0 && o.y < player_top);
            if threatened {
                if lane > 0 {
                    state.lane_left();
                } else {
                    state.lane_right();
                }
            }
        }
        driver.frame();

        let state = driver.state();
        if state.mode != Mode::Running {
            break;
        }
        assert!(state.speed >= previous_speed);
        assert!(state.speed <= MAX_SPEED);
        assert!(state.player.lane < state.config.lanes);
        assert!(state.player.y <= state.config.ground_level);
        previous_speed = state.speed;
    }
}
