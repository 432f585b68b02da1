//! Frame description built from match state

use glam::Vec2;

use super::shapes::{self, BLACK, Color, Shape, TextAnchor, WHITE};
use crate::sim::{GamePhase, MatchState, Paddle, Side};

pub const SCORE_FONT_SIZE: f32 = 50.0;
pub const BANNER_FONT_SIZE: f32 = 50.0;
/// Top of the score text
pub const SCORE_TOP: f32 = 20.0;

/// Everything to draw for one frame, back to front
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub background: Color,
    pub shapes: Vec<Shape>,
}

/// Announcement shown while a won match is held
pub fn winner_banner(winner: Side) -> String {
    format!("{} Player Won!", winner.as_str())
}

pub fn build_scene(state: &MatchState) -> Scene {
    let field = state.field;
    let mut out = Vec::with_capacity(32);

    let w = field.width as f32;
    out.push(shapes::text(
        state.left_score.to_string(),
        Vec2::new(w / 4.0, SCORE_TOP),
        SCORE_FONT_SIZE,
        TextAnchor::TopCenter,
    ));
    out.push(shapes::text(
        state.right_score.to_string(),
        Vec2::new(w * 3.0 / 4.0, SCORE_TOP),
        SCORE_FONT_SIZE,
        TextAnchor::TopCenter,
    ));

    out.push(paddle_rect(&state.left));
    out.push(paddle_rect(&state.right));
    out.extend(shapes::center_divider(field.width, field.height, WHITE));

    let ball = &state.ball;
    out.push(shapes::circle(ball.pos.x, ball.pos.y, ball.radius, WHITE));

    if let GamePhase::MatchWon { winner } = state.phase {
        out.push(shapes::text(
            winner_banner(winner),
            Vec2::new(w / 2.0, field.height as f32 / 2.0),
            BANNER_FONT_SIZE,
            TextAnchor::Center,
        ));
    }

    Scene {
        width: w,
        height: field.height as f32,
        background: BLACK,
        shapes: out,
    }
}

fn paddle_rect(paddle: &Paddle) -> Shape {
    shapes::rect(
        paddle.pos.x,
        paddle.pos.y,
        paddle.size.x,
        paddle.size.y,
        WHITE,
    )
}
