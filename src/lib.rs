//! Pong - a two-paddle ball game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (paddles, ball, collisions, score)
//! - `renderer`: wgpu rendering pipeline
//! - `platform`: Native window, input and frame pacing
//! - `settings`: Presentation settings

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::PongError;
pub use settings::Settings;

/// Game rule constants
pub mod consts {
    /// Default arena dimensions (pixels)
    pub const DEFAULT_WIDTH: i32 = 800;
    pub const DEFAULT_HEIGHT: i32 = 600;

    /// Distance of each paddle's left edge from its side of the arena
    pub const PADDLE_INSET: i32 = 30;
    pub const PADDLE_WIDTH: i32 = 15;
    pub const PADDLE_HEIGHT: i32 = 50;

    /// Ball half-size; also the rendered circle radius
    pub const BALL_SIZE: i32 = 7;
    pub const BALL_START_VEL: (i32, i32) = (10, 5);

    /// Max per-frame downward catch-up of the enemy paddle
    pub const ENEMY_MAX_STEP: i32 = 6;
    /// Max vertical speed imparted to the ball by a player hit (maxYVel)
    pub const MAX_Y_VEL: i32 = 10;
    /// Bias added to the negated paddle velocity before the maxYVel test
    pub const HIT_BIAS: i32 = 5;

    /// Score pips
    pub const PIP_SIZE: i32 = 8;
    pub const PIP_SPACING: i32 = 16;
    pub const PIP_TOP: i32 = 10;
    pub const PLAYER_PIPS_X: i32 = 10;

    /// Center divider dots
    pub const DIVIDER_DOT: i32 = 8;
    pub const DIVIDER_OFFSET: i32 = 6;

    /// Default frame pacing delay (milliseconds)
    pub const FRAME_DELAY_MS: u64 = 17;
}
