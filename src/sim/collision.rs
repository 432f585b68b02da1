//! Collision response for the ball
//!
//! Pure per-tick velocity changes: a wall reflection and a paddle bounce with
//! the offset-based deflection. Positions are never corrected, so the ball may
//! overshoot a wall for a tick.

use super::state::{Ball, Paddle, Side};
use crate::consts::DEFLECTION_DIVISOR;

/// What the ball touched this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    /// Vertical velocity was reflected off the top or bottom wall
    pub wall: bool,
    /// Horizontal velocity was reversed by this paddle
    pub paddle: Option<Side>,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self::default()
    }

    pub fn any(&self) -> bool {
        self.wall || self.paddle.is_some()
    }
}

/// Apply wall and paddle bounces for the ball's post-integration position
pub fn resolve_collisions(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    field_height: i32,
) -> CollisionResult {
    let mut result = CollisionResult::miss();

    if touches_wall(ball, field_height) {
        ball.vel.y = -ball.vel.y;
        result.wall = true;
    }

    // Only the paddle the ball travels toward can be hit
    let (side, paddle) = if ball.vel.x < 0 {
        (Side::Left, left)
    } else {
        (Side::Right, right)
    };

    if hits_paddle(ball, paddle, side) {
        ball.vel.x = -ball.vel.x;
        ball.vel.y = deflection(ball.pos.y, paddle);
        result.paddle = Some(side);
    }

    result
}

/// Ball's vertical extent reaches either horizontal boundary
#[inline]
pub fn touches_wall(ball: &Ball, field_height: i32) -> bool {
    ball.pos.y + ball.radius >= field_height || ball.pos.y - ball.radius <= 0
}

/// Center inside the paddle's vertical span and leading edge at or past its face
pub fn hits_paddle(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let within_span = ball.pos.y >= paddle.top() && ball.pos.y <= paddle.bottom();
    if !within_span {
        return false;
    }
    match side {
        Side::Left => ball.left_edge() <= paddle.right_edge(),
        Side::Right => ball.right_edge() >= paddle.pos.x,
    }
}

/// Vertical velocity after a paddle hit at height `ball_y`
///
/// Integer division truncates toward zero, so offsets within one divisor of
/// the paddle center return the ball flat.
#[inline]
pub fn deflection(ball_y: i32, paddle: &Paddle) -> i32 {
    (ball_y - paddle.center_y()) / DEFLECTION_DIVISOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    const HEIGHT: i32 = 500;

    fn paddles() -> (Paddle, Paddle) {
        (
            Paddle::new(10, 200, 20, 100, 4),
            Paddle::new(670, 200, 20, 100, 4),
        )
    }

    fn ball_at(x: i32, y: i32, vx: i32, vy: i32) -> Ball {
        let mut ball = Ball::new(350, 250, 7, 5);
        ball.pos = IVec2::new(x, y);
        ball.vel = IVec2::new(vx, vy);
        ball
    }

    #[test]
    fn test_wall_reflection_bottom() {
        let (left, right) = paddles();
        let mut ball = ball_at(350, HEIGHT - 7, 5, 3);
        let result = resolve_collisions(&mut ball, &left, &right, HEIGHT);
        assert!(result.wall);
        assert_eq!(ball.vel, IVec2::new(5, -3));
    }

    #[test]
    fn test_wall_reflection_top() {
        let (left, right) = paddles();
        let mut ball = ball_at(350, 7, -5, -2);
        resolve_collisions(&mut ball, &left, &right, HEIGHT);
        assert_eq!(ball.vel.y, 2);
    }

    #[test]
    fn test_overshoot_still_reflects() {
        let (left, right) = paddles();
        let mut ball = ball_at(350, -3, 5, -4);
        resolve_collisions(&mut ball, &left, &right, HEIGHT);
        assert_eq!(ball.vel.y, 4);
        assert_eq!(ball.pos.y, -3);
    }

    #[test]
    fn test_no_collision_mid_field() {
        let (left, right) = paddles();
        let mut ball = ball_at(350, 250, 5, 1);
        let result = resolve_collisions(&mut ball, &left, &right, HEIGHT);
        assert!(!result.any());
        assert_eq!(ball.vel, IVec2::new(5, 1));
    }

    #[test]
    fn test_left_paddle_deflection_below_center() {
        let (left, right) = paddles();
        // Paddle center is 250; offset +23
        let mut ball = ball_at(36, 273, -5, 0);
        let result = resolve_collisions(&mut ball, &left, &right, HEIGHT);
        assert_eq!(result.paddle, Some(Side::Left));
        assert_eq!(ball.vel, IVec2::new(5, 2));
    }

    #[test]
    fn test_left_paddle_deflection_truncates_toward_zero() {
        let (left, right) = paddles();
        // Offset -23 truncates to -2, not -3
        let mut ball = ball_at(36, 227, -5, 0);
        resolve_collisions(&mut ball, &left, &right, HEIGHT);
        assert_eq!(ball.vel, IVec2::new(5, -2));
    }

    #[test]
    fn test_near_center_hit_returns_flat() {
        let (left, right) = paddles();
        let mut ball = ball_at(664, 259, 5, 3);
        resolve_collisions(&mut ball, &left, &right, HEIGHT);
        assert_eq!(ball.vel, IVec2::new(-5, 0));
    }

    #[test]
    fn test_only_approached_paddle_is_tested() {
        let (left, right) = paddles();
        // Overlapping the left paddle but travelling right: no bounce
        let mut ball = ball_at(30, 250, 5, 0);
        let result = resolve_collisions(&mut ball, &left, &right, HEIGHT);
        assert_eq!(result.paddle, None);
        assert_eq!(ball.vel.x, 5);
    }

    #[test]
    fn test_containment_uses_ball_center() {
        let (left, right) = paddles();
        // Ball edge overlaps the paddle top but center is above it
        let mut ball = ball_at(30, 195, -5, 0);
        let result = resolve_collisions(&mut ball, &left, &right, HEIGHT);
        assert_eq!(result.paddle, None);

        // Span is inclusive at both ends
        let mut ball = ball_at(30, 300, -5, 0);
        let result = resolve_collisions(&mut ball, &left, &right, HEIGHT);
        assert_eq!(result.paddle, Some(Side::Left));
        assert_eq!(ball.vel.y, 5);
    }

    #[test]
    fn test_leading_edge_must_reach_face() {
        let (left, right) = paddles();
        let mut ball = ball_at(38, 250, -5, 0);
        assert!(!resolve_collisions(&mut ball, &left, &right, HEIGHT).any());

        let mut ball = ball_at(37, 250, -5, 0);
        assert_eq!(
            resolve_collisions(&mut ball, &left, &right, HEIGHT).paddle,
            Some(Side::Left)
        );

        let mut ball = ball_at(663, 250, 5, 0);
        assert_eq!(
            resolve_collisions(&mut ball, &left, &right, HEIGHT).paddle,
            Some(Side::Right)
        );
    }

    #[test]
    fn test_wall_then_paddle_in_same_tick() {
        let (mut left, right) = paddles();
        left.pos.y = 2;
        let mut ball = ball_at(30, 5, -5, -3);
        let result = resolve_collisions(&mut ball, &left, &right, HEIGHT);
        assert!(result.wall);
        assert_eq!(result.paddle, Some(Side::Left));
        // Paddle deflection overrides the wall reflection: (5 - 52) / 10
        assert_eq!(ball.vel, IVec2::new(5, -4));
    }
}
