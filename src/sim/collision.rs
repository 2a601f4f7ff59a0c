//! Collision detection and response
//!
//! Axis-aligned rectangles only. The ball collides as the square around its
//! center, paddles as their rectangles, and the arena edges as lines.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle, Score};
use crate::consts::{HIT_BIAS, MAX_Y_VEL};

/// Integer rectangle in arena pixels (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// True when the two rectangles overlap by at least one pixel on both
    /// axes. Touching edges and empty rectangles never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        span_overlaps(self.x, self.w, other.x, other.w)
            && span_overlaps(self.y, self.h, other.y, other.h)
    }
}

fn span_overlaps(a_min: i32, a_len: i32, b_min: i32, b_len: i32) -> bool {
    let lo = a_min.max(b_min);
    let hi = (a_min + a_len).min(b_min + b_len);
    hi > lo
}

/// What happened during one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    /// Ball bounced off the top or bottom wall
    pub wall_bounce: bool,
    /// Ball left past the player's edge; enemy scored
    pub enemy_scored: bool,
    /// Ball left past the enemy's edge; player scored
    pub player_scored: bool,
    pub player_hit: bool,
    pub enemy_hit: bool,
}

/// Vertical speed the ball takes from a player hit.
///
/// The negated paddle velocity is used directly when `|-v + 5| < 10`,
/// otherwise the result saturates at ±10 with the sign of `-v`. The bias makes
/// the accepted window asymmetric: `-v` in `-14..=4` passes through.
pub fn deflect_dy(paddle_velocity: i32) -> i32 {
    let dy = -paddle_velocity;
    if (dy + HIT_BIAS).abs() < MAX_Y_VEL {
        dy
    } else if dy < 0 {
        -MAX_Y_VEL
    } else {
        MAX_Y_VEL
    }
}

/// Resolve ball collisions against the walls, both paddles and both scoring
/// edges. Must run after the ball has been moved for this frame.
///
/// Checks run in a fixed order and each re-reads the velocity the previous
/// one may have flipped: vertical first, then the side the ball is heading
/// toward (scoring edge, then paddle).
pub fn resolve_ball_collisions(
    ball: &Ball,
    vel: &mut IVec2,
    player: &Paddle,
    enemy: &Paddle,
    score: &mut Score,
    width: i32,
    height: i32,
) -> CollisionResult {
    let mut result = CollisionResult::default();
    let bounds = ball.bounds();

    if vel.y < 0 {
        if ball.top() < 0 {
            vel.y = -vel.y;
            result.wall_bounce = true;
        }
    } else if ball.bottom() > height {
        vel.y = -vel.y;
        result.wall_bounce = true;
    }

    if vel.x < 0 {
        if ball.left() < 0 {
            vel.x = -vel.x;
            score.enemy += 1;
            result.enemy_scored = true;
        }
        if player.rect.intersects(&bounds) && vel.x < 0 {
            vel.y = deflect_dy(player.velocity);
            vel.x = -vel.x;
            result.player_hit = true;
        }
    } else {
        if ball.right() > width {
            vel.x = -vel.x;
            score.player += 1;
            result.player_scored = true;
        }
        if enemy.rect.intersects(&bounds) && vel.x > 0 {
            vel.x = -vel.x;
            result.enemy_hit = true;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_at(x: i32, y: i32, velocity: i32) -> Paddle {
        let mut paddle = Paddle::new(x, y);
        paddle.velocity = velocity;
        paddle
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
        assert!(a.intersects(&Rect::new(2, 2, 2, 2)));
        // Shared edge is not an overlap
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
        assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
        assert!(!a.intersects(&Rect::new(20, 20, 5, 5)));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(2, 2, 0, 5)));
        assert!(!Rect::new(2, 2, 5, -1).intersects(&a));
    }

    #[test]
    fn test_deflect_dy_clamp_formula() {
        assert_eq!(deflect_dy(8), -8);
        assert_eq!(deflect_dy(-8), 10);
        assert_eq!(deflect_dy(20), -10);
        assert_eq!(deflect_dy(-20), 10);
    }

    #[test]
    fn test_deflect_dy_window_edges() {
        assert_eq!(deflect_dy(0), 0);
        assert_eq!(deflect_dy(-4), 4);
        // -v + 5 == 10 is rejected
        assert_eq!(deflect_dy(-5), 10);
        assert_eq!(deflect_dy(14), -14);
        assert_eq!(deflect_dy(15), -10);
    }

    #[test]
    fn test_top_wall_bounce_only_when_moving_up() {
        let player = paddle_at(30, 275, 0);
        let enemy = paddle_at(770, 275, 0);
        let mut score = Score::default();

        let ball = Ball::new(400, 3);
        let mut vel = IVec2::new(10, -5);
        let r = resolve_ball_collisions(&ball, &mut vel, &player, &enemy, &mut score, 800, 600);
        assert!(r.wall_bounce);
        assert_eq!(vel.y, 5);

        // Already heading down: no flip even though the edge is past 0
        let mut vel = IVec2::new(10, 5);
        let r = resolve_ball_collisions(&ball, &mut vel, &player, &enemy, &mut score, 800, 600);
        assert!(!r.wall_bounce);
        assert_eq!(vel.y, 5);
    }

    #[test]
    fn test_left_exit_scores_for_enemy() {
        let player = paddle_at(30, 0, 0);
        let enemy = paddle_at(770, 275, 0);
        let mut score = Score::default();
        let ball = Ball::new(5, 300);
        let mut vel = IVec2::new(-10, 5);

        let r = resolve_ball_collisions(&ball, &mut vel, &player, &enemy, &mut score, 800, 600);
        assert!(r.enemy_scored);
        assert!(!r.player_hit);
        assert_eq!(vel.x, 10);
        assert_eq!(score, Score { player: 0, enemy: 1 });
    }

    #[test]
    fn test_right_exit_scores_for_player() {
        let player = paddle_at(30, 275, 0);
        let enemy = paddle_at(770, 0, 0);
        let mut score = Score::default();
        let ball = Ball::new(795, 300);
        let mut vel = IVec2::new(10, 5);

        let r = resolve_ball_collisions(&ball, &mut vel, &player, &enemy, &mut score, 800, 600);
        assert!(r.player_scored);
        assert_eq!(vel.x, -10);
        assert_eq!(score, Score { player: 1, enemy: 0 });
    }

    #[test]
    fn test_player_hit_redirects_dy() {
        // Paddle spans x 30..45, y 275..325; ball box 38..52 x 293..307
        let player = paddle_at(30, 275, 20);
        let enemy = paddle_at(770, 275, 0);
        let mut score = Score::default();
        let ball = Ball::new(45, 300);
        let mut vel = IVec2::new(-10, 3);

        let r = resolve_ball_collisions(&ball, &mut vel, &player, &enemy, &mut score, 800, 600);
        assert!(r.player_hit);
        assert_eq!(vel, IVec2::new(10, -10));
        assert_eq!(score, Score::default());
    }

    #[test]
    fn test_enemy_hit_keeps_dy() {
        let player = paddle_at(30, 275, 0);
        let enemy = paddle_at(770, 275, 6);
        let mut score = Score::default();
        let ball = Ball::new(765, 300);
        let mut vel = IVec2::new(10, 3);

        let r = resolve_ball_collisions(&ball, &mut vel, &player, &enemy, &mut score, 800, 600);
        assert!(r.enemy_hit);
        assert_eq!(vel, IVec2::new(-10, 3));
    }

    #[test]
    fn test_score_then_hit_same_frame_only_scores() {
        // Paddle dragged to the left edge overlapping the ball as it exits
        let player = paddle_at(0, 290, 0);
        let enemy = paddle_at(770, 275, 0);
        let mut score = Score::default();
        let ball = Ball::new(4, 300);
        let mut vel = IVec2::new(-10, 2);

        let r = resolve_ball_collisions(&ball, &mut vel, &player, &enemy, &mut score, 800, 600);
        assert!(r.enemy_scored);
        // dx was flipped by the score check, so the hit check's dx < 0 fails
        assert!(!r.player_hit);
        assert_eq!(vel, IVec2::new(10, 2));
        assert_eq!(score.enemy, 1);
    }

    #[test]
    fn test_zero_dx_uses_right_side_checks() {
        let player = paddle_at(30, 275, 0);
        let enemy = paddle_at(770, 275, 0);
        let mut score = Score::default();
        let ball = Ball::new(797, 300);
        let mut vel = IVec2::new(0, 0);

        let r = resolve_ball_collisions(&ball, &mut vel, &player, &enemy, &mut score, 800, 600);
        assert!(r.player_scored);
        assert_eq!(score.player, 1);
    }
}
