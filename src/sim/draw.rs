//! Render values derived from game state
//!
//! The renderer never reads game rules; it tessellates this list.

use glam::IVec2;

use super::collision::Rect;
use super::state::GameState;
use crate::consts::*;

/// Filled circle in arena pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: IVec2,
    pub radius: i32,
}

/// Everything drawn for one frame, all in the foreground color
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawList {
    pub rects: Vec<Rect>,
    pub circles: Vec<Circle>,
}

/// One 8x8 pip per point, left to right from `x`
pub fn score_pips(x: i32, points: u32) -> impl Iterator<Item = Rect> {
    (0..points as i32).map(move |i| Rect::new(x + i * PIP_SPACING, PIP_TOP, PIP_SIZE, PIP_SIZE))
}

/// Dotted center line: every other 8px slot down the midline
pub fn center_divider(width: i32, height: i32) -> impl Iterator<Item = Rect> {
    let x = width / 2 - DIVIDER_OFFSET;
    (0..height / DIVIDER_DOT)
        .filter(|i| i % 2 == 0)
        .map(move |i| Rect::new(x, i * DIVIDER_DOT, DIVIDER_DOT, DIVIDER_DOT))
}

/// Build the draw list for the current frame
pub fn draw_list(state: &GameState) -> DrawList {
    let mut rects = vec![state.player.rect, state.enemy.rect];
    rects.extend(score_pips(PLAYER_PIPS_X, state.score.player));

    // Enemy pips end flush with the right edge
    let enemy_x = state.width - state.score.enemy as i32 * PIP_SPACING;
    rects.extend(score_pips(enemy_x, state.score.enemy));

    rects.extend(center_divider(state.width, state.height));

    DrawList {
        rects,
        circles: vec![Circle {
            center: state.ball.pos,
            radius: state.ball.size,
        }],
    }
}
