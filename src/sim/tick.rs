//! Frame step
//!
//! Advances the game by exactly one frame: input, enemy AI, ball motion,
//! collisions. Called once per tick by the platform loop.

use super::collision::{CollisionResult, resolve_ball_collisions};
use super::state::{GamePhase, GameState};
use crate::consts::ENEMY_MAX_STEP;

/// Input sampled for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest pointer y in arena pixels
    pub pointer_y: i32,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> CollisionResult {
    if input.pause {
        state.phase = state.phase.toggled();
        log::info!("Game {:?}", state.phase);
    }

    if state.phase == GamePhase::Paused {
        return CollisionResult::default();
    }

    state.frame += 1;

    move_player(state, input.pointer_y);
    move_enemy(state);

    state.ball.pos += state.ball_vel;

    let result = resolve_ball_collisions(
        &state.ball,
        &mut state.ball_vel,
        &state.player,
        &state.enemy,
        &mut state.score,
        state.width,
        state.height,
    );

    if result.player_hit {
        log::debug!("hit! dy={}", state.ball_vel.y);
    }
    if result.player_scored || result.enemy_scored {
        log::info!(
            "Score {} - {} (frame {})",
            state.score.player,
            state.score.enemy,
            state.frame
        );
    }

    result
}

/// Center the player paddle on the pointer. Velocity is how far the center
/// moved upward this frame; the paddle is not clamped to the arena.
fn move_player(state: &mut GameState, pointer_y: i32) {
    let paddle = &mut state.player;
    paddle.velocity = paddle.center_y() - pointer_y;
    paddle.rect.y = pointer_y - paddle.rect.h / 2;
}

/// Track the ball. Downward catch-up is capped, upward is not.
fn move_enemy(state: &mut GameState) {
    let delta = state.ball.pos.y - state.enemy.rect.y;
    state.enemy.velocity = if delta < ENEMY_MAX_STEP {
        delta
    } else {
        ENEMY_MAX_STEP
    };
    state.enemy.rect.y += state.enemy.velocity;
}
