//! Game state and core simulation types
//!
//! Everything the frame step reads or writes lives in [`GameState`].

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Frame step is suspended; the last frame keeps being drawn
    Paused,
}

impl GamePhase {
    pub fn toggled(self) -> Self {
        match self {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
        }
    }
}

/// A paddle: its rectangle plus the vertical velocity it had this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Vertical velocity. For the player this is derived from pointer motion
    /// and only feeds collision response.
    pub velocity: i32,
}

impl Paddle {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, PADDLE_WIDTH, PADDLE_HEIGHT),
            velocity: 0,
        }
    }

    /// Vertical center of the paddle (integer half-height, as the step uses)
    pub fn center_y(&self) -> i32 {
        self.rect.y + self.rect.h / 2
    }
}

/// The ball. `pos` is the center; `size` is both the circle radius and the
/// half-side of the square used for collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    pub size: i32,
}

impl Ball {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: BALL_SIZE,
        }
    }

    pub fn top(&self) -> i32 {
        self.pos.y - self.size
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size
    }

    pub fn left(&self) -> i32 {
        self.pos.x - self.size
    }

    pub fn right(&self) -> i32 {
        self.pos.x + self.size
    }

    /// Square of side `2 * size` centered on the ball
    pub fn bounds(&self) -> Rect {
        Rect::new(self.left(), self.top(), self.size * 2, self.size * 2)
    }
}

/// Points scored by each side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub enemy: u32,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub width: i32,
    pub height: i32,
    pub phase: GamePhase,
    pub player: Paddle,
    pub enemy: Paddle,
    pub ball: Ball,
    pub ball_vel: IVec2,
    pub score: Score,
    /// Frames stepped while running
    pub frame: u64,
}

impl GameState {
    /// Create the opening layout for an arena of the given size
    pub fn new(width: i32, height: i32) -> Self {
        let paddle_y = height / 2 - PADDLE_HEIGHT / 2;
        Self {
            width,
            height,
            phase: GamePhase::Running,
            player: Paddle::new(PADDLE_INSET, paddle_y),
            enemy: Paddle::new(width - PADDLE_INSET, paddle_y),
            ball: Ball::new(width / 2, height / 2),
            ball_vel: IVec2::new(BALL_START_VEL.0, BALL_START_VEL.1),
            score: Score::default(),
            frame: 0,
        }
    }

    /// Update arena bounds and re-anchor the enemy paddle to the right edge
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.enemy.rect.x = width - PADDLE_INSET;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
