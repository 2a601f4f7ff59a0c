//! Simulation module
//!
//! All gameplay logic lives here. Pure integer arithmetic over owned state:
//! - One step per frame, no sub-stepping
//! - No rendering or platform dependencies

pub mod collision;
pub mod draw;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, Rect, deflect_dy, resolve_ball_collisions};
pub use draw::{Circle, DrawList, draw_list};
pub use state::{Ball, GamePhase, GameState, Paddle, Score};
pub use tick::{TickInput, tick};
