//! Fixed timestep simulation tick
//!
//! Advances one Running tick: clock/progression first, then the player,
//! then obstacles and coins. Every other mode freezes the simulation.

use super::collision::{circle_proximity, rects_overlap};
use super::state::{GameState, Mode};
use crate::consts::*;

/// Advance the game state by one fixed 1/60 s step
pub fn tick(state: &mut GameState) {
    if state.mode != Mode::Running {
        return;
    }

    // Clock and progression
    state.distance += state.speed;
    state.elapsed += SIM_DT;
    state.speed = (state.speed + state.config.speed_increment).min(state.config.max_speed);
    state.score += SCORE_PER_TICK;

    if state.display_score() >= WIN_SCORE {
        state.final_score = state.display_score();
        state.mode = Mode::Win;
        state.cat_touched = false;
        log::info!("run won, final score {}", state.final_score);
        // The winning tick still finishes; the next one is frozen.
    }

    update_player(state);
    update_obstacles(state);
    update_coins(state);
}

fn update_player(state: &mut GameState) {
    let config = &state.config;
    let player = &mut state.player;

    // Horizontal position follows the lane immediately
    player.x = config.lane_origin(player.lane, player.width);

    if player.jumping {
        player.velocity_y += config.jump_gravity;
        player.y += player.velocity_y;
        if player.y >= config.ground_level {
            player.y = config.ground_level;
            player.jumping = false;
            player.velocity_y = 0.0;
        }
    } else {
        // No free fall: grounded means pinned to the ground exactly
        player.y = config.ground_level;
    }

    if player.sliding {
        player.slide_time_left -= SIM_DT;
        if player.slide_time_left <= 0.0 {
            player.sliding = false;
            player.slide_time_left = 0.0;
        }
    }
}

fn update_obstacles(state: &mut GameState) {
    if let Some(obstacle) = state.spawner.maybe_spawn_obstacle(state.elapsed, &state.config) {
        state.obstacles.push(obstacle);
    }

    // Back-to-front so in-place removal never skips or double-processes
    for i in (0..state.obstacles.len()).rev() {
        state.obstacles[i].y += state.speed;

        // Overlap is tested before off-screen removal: an obstacle crossing
        // the bottom edge while overlapping the player still counts as a hit.
        if rects_overlap(&state.player.hitbox(), &state.obstacles[i].rect()) {
            state.obstacles.remove(i);
            life_lost(state);
        } else if state.obstacles[i].y > state.config.viewport_height {
            state.obstacles.remove(i);
            state.score += DODGE_SCORE;
        }
    }
}

fn update_coins(state: &mut GameState) {
    if let Some(coin) = state.spawner.maybe_spawn_coin(state.elapsed, &state.config) {
        state.coins.push(coin);
    }

    for i in (0..state.coins.len()).rev() {
        state.coins[i].y += state.speed;
        state.coins[i].rotation += COIN_SPIN_RATE;

        let coin = &state.coins[i];
        let threshold = state.player.width + coin.radius;
        if circle_proximity(state.player.center(), coin.center(), threshold) {
            state.coins.remove(i);
            state.score += COIN_SCORE;
        } else if state.coins[i].y > state.config.viewport_height {
            state.coins.remove(i);
        }
    }
}

/// One life gone. With none left the run ends and the score is captured;
/// otherwise the player respawns at the ground in the center lane with the
/// live entities untouched.
fn life_lost(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.final_score = state.display_score();
        state.mode = Mode::GameOver;
        log::info!("game over, final score {}", state.final_score);
    } else {
        state.player.respawn(&state.config);
        log::info!("life lost, {} remaining", state.lives);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Coin, Obstacle};
    use proptest::prelude::*;

    fn running_state() -> GameState {
        let mut state = GameState::new(900.0, 600.0, 7);
        state.start_game(1, false);
        state
    }

    /// An obstacle centered in `lane` at vertical position `y`
    fn obstacle_at(state: &GameState, lane: usize, y: f32) -> Obstacle {
        Obstacle {
            lane,
            x: state.config.lane_origin(lane, state.config.obstacle_width),
            y,
            width: state.config.obstacle_width,
            height: state.config.obstacle_height,
        }
    }

    #[test]
    fn test_progression_single_tick() {
        let mut state = running_state();
        tick(&mut state);
        assert_eq!(state.distance, INITIAL_SPEED);
        assert!((state.elapsed - SIM_DT).abs() < 1e-6);
        assert!((state.speed - (INITIAL_SPEED + SPEED_INCREMENT)).abs() < 1e-6);
        assert!((state.score - SCORE_PER_TICK).abs() < 1e-9);
    }

    #[test]
    fn test_speed_clamped_at_max() {
        let mut state = running_state();
        state.speed = state.config.max_speed - 0.0001;
        tick(&mut state);
        tick(&mut state);
        assert_eq!(state.speed, state.config.max_speed);
    }

    #[test]
    fn test_frozen_modes_do_not_advance() {
        for mode in [Mode::Instructions, Mode::Paused, Mode::GameOver, Mode::Win] {
            let mut state = running_state();
            state.obstacles.push(obstacle_at(&state, 0, 100.0));
            state.mode = mode;
            let before_score = state.score;
            let before_y = state.obstacles[0].y;
            tick(&mut state);
            assert_eq!(state.score, before_score);
            assert_eq!(state.obstacles[0].y, before_y);
            assert_eq!(state.distance, 0.0);
        }
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut state = running_state();
        let ground = state.config.ground_level;
        state.jump();

        let mut left_ground = false;
        for _ in 0..200 {
            tick(&mut state);
            assert!(state.player.y <= ground, "never below the ground");
            if state.player.y < ground {
                left_ground = true;
            }
            if !state.player.jumping {
                break;
            }
        }
        assert!(left_ground);
        assert!(!state.player.jumping);
        assert_eq!(state.player.y, ground);
        assert_eq!(state.player.velocity_y, 0.0);
    }

    #[test]
    fn test_slide_expires_after_duration() {
        let mut state = running_state();
        state.slide();
        for _ in 0..25 {
            tick(&mut state);
        }
        assert!(state.player.sliding, "half a second has not yet passed");
        for _ in 0..6 {
            tick(&mut state);
        }
        assert!(!state.player.sliding);
        assert_eq!(state.player.slide_time_left, 0.0);
    }

    #[test]
    fn test_obstacle_dodge_scores_ten() {
        let mut state = running_state();
        // Off the player's lane, one step from the bottom edge
        state.obstacles.push(obstacle_at(&state, 0, 599.0));
        let before = state.score;
        tick(&mut state);
        assert!(state.obstacles.is_empty());
        assert!((state.score - before - DODGE_SCORE - SCORE_PER_TICK).abs() < 1e-9);
        assert_eq!(state.mode, Mode::Running);
    }

    #[test]
    fn test_obstacle_hit_on_last_life_is_game_over() {
        let mut state = running_state();
        assert_eq!(state.lives, 1);
        let y = state.config.ground_level; // right on top of the player
        state.obstacles.push(obstacle_at(&state, state.player.lane, y));
        tick(&mut state);
        assert_eq!(state.mode, Mode::GameOver);
        assert_eq!(state.lives, 0);
        assert_eq!(state.final_score, state.display_score());
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_obstacle_hit_with_lives_left_respawns() {
        let mut state = GameState::new(900.0, 600.0, 7);
        state.start_game(3, true);
        state.lane_left();
        state.jump();
        let y = state.config.ground_level - 5.0;
        state.obstacles.push(obstacle_at(&state, 0, y));
        // A second obstacle far away survives the hit untouched
        state.obstacles.push(obstacle_at(&state, 2, 50.0));
        tick(&mut state);

        assert_eq!(state.mode, Mode::Running);
        assert_eq!(state.lives, 2);
        assert_eq!(state.player.lane, state.config.center_lane());
        assert_eq!(state.player.y, state.config.ground_level);
        assert!(!state.player.jumping);
        assert!(!state.player.sliding);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].lane, 2);
    }

    #[test]
    fn test_slide_ducks_under_high_obstacle() {
        let mut state = running_state();
        state.slide();
        tick(&mut state); // apply the crouch before placing the obstacle
        // Obstacle bottom ends where the crouched hitbox begins
        let player = &state.player;
        let y = player.y + player.height * 0.5 - state.config.obstacle_height - state.speed;
        state.obstacles.push(obstacle_at(&state, player.lane, y));
        tick(&mut state);
        assert_eq!(state.mode, Mode::Running, "crouched player clears it");
        assert_eq!(state.lives, 1);
    }

    #[test]
    fn test_coin_pickup_scores_fifty() {
        let mut state = running_state();
        let center = state.player.center();
        state.coins.push(Coin {
            lane: state.player.lane,
            x: center.x,
            y: center.y - state.speed, // lands on the player this tick
            radius: state.config.coin_radius,
            rotation: 0.0,
        });
        let before = state.score;
        tick(&mut state);
        assert!(state.coins.is_empty());
        assert!((state.score - before - COIN_SCORE - SCORE_PER_TICK).abs() < 1e-9);
    }

    #[test]
    fn test_missed_coin_exits_without_score() {
        let mut state = running_state();
        state.coins.push(Coin {
            lane: 0,
            x: state.config.lane_center(0),
            y: 599.0,
            radius: state.config.coin_radius,
            rotation: 0.0,
        });
        tick(&mut state);
        assert!(state.coins.is_empty());
        assert!((state.score - SCORE_PER_TICK).abs() < 1e-9);
    }

    #[test]
    fn test_coin_rotation_advances() {
        let mut state = running_state();
        state.coins.push(Coin {
            lane: 0,
            x: state.config.lane_center(0),
            y: 100.0,
            radius: state.config.coin_radius,
            rotation: 0.0,
        });
        tick(&mut state);
        tick(&mut state);
        assert!((state.coins[0].rotation - 2.0 * COIN_SPIN_RATE).abs() < 1e-6);
    }

    #[test]
    fn test_win_at_score_threshold() {
        let mut state = running_state();
        state.cat_touched = true;
        state.score = WIN_SCORE as f64 - 0.05;
        tick(&mut state);
        assert_eq!(state.mode, Mode::Win);
        assert_eq!(state.final_score, WIN_SCORE);
        assert!(!state.cat_touched);
    }

    #[test]
    fn test_score_fraction_persists_across_ticks() {
        let mut state = running_state();
        for _ in 0..25 {
            tick(&mut state);
        }
        // 25 ticks of +0.1: the accumulator holds 2.5, the display floors it
        assert!((state.score - 2.5).abs() < 1e-9);
        assert_eq!(state.display_score(), 2);
    }

    #[test]
    fn test_spawner_feeds_the_run() {
        let mut state = running_state();
        // Two seconds of game time is past both spawn intervals
        for _ in 0..150 {
            tick(&mut state);
        }
        let total = state.obstacles.len() + state.coins.len();
        assert!(total > 0, "something must have spawned by now");
        for obstacle in &state.obstacles {
            assert!(obstacle.lane < state.config.lanes);
        }
        for coin in &state.coins {
            assert!(coin.lane < state.config.lanes);
        }
    }

    proptest! {
        /// Speed is monotonically non-decreasing and capped while Running
        #[test]
        fn prop_speed_monotone_and_capped(ticks in 1usize..3000) {
            let mut state = running_state();
            let mut previous = state.speed;
            for _ in 0..ticks {
                tick(&mut state);
                prop_assert!(state.speed >= previous);
                prop_assert!(state.speed <= state.config.max_speed);
                previous = state.speed;
            }
        }

        /// Lane stays in range and the player never sinks below ground under
        /// arbitrary command sequences (0=left, 1=right, 2=jump, 3=slide)
        #[test]
        fn prop_player_invariants(commands in proptest::collection::vec(0u8..4, 1..200)) {
            let mut state = running_state();
            for command in commands {
                match command {
                    0 => state.lane_left(),
                    1 => state.lane_right(),
                    2 => state.jump(),
                    _ => state.slide(),
                }
                tick(&mut state);
                prop_assert!(state.player.lane < state.config.lanes);
                prop_assert!(state.player.y <= state.config.ground_level);
                prop_assert!(!(state.player.jumping && state.player.sliding));
                if !state.player.jumping {
                    prop_assert_eq!(state.player.y, state.config.ground_level);
                }
            }
        }

        /// Score strictly increases every Running tick
        #[test]
        fn prop_score_strictly_increases(ticks in 1usize..500) {
            let mut state = running_state();
            let mut previous = state.score;
            for _ in 0..ticks {
                tick(&mut state);
                prop_assert!(state.score > previous);
                previous = state.score;
                if state.mode != Mode::Running {
                    // A spawned obstacle may end the run; ticks freeze then
                    break;
                }
            }
        }
    }
}
