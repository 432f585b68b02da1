//! Match state and core entity types
//!
//! Positions and velocities are integer pixels. Division truncates toward
//! zero, which the deflection model depends on.

use glam::IVec2;

use crate::settings::Settings;

/// Paddle move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Which player / paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// A player reached the win score; the next tick resets the match
    MatchWon { winner: Side },
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce,
    PaddleHit { side: Side },
    PointScored { scorer: Side, left: u32, right: u32 },
    MatchWon { winner: Side, left: u32, right: u32 },
    /// Scores zeroed and entities recentered after a win
    MatchReset,
}

/// A player's paddle. `pos` is the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub pos: IVec2,
    pub size: IVec2,
    /// Pixels per move
    pub speed: i32,
    home: IVec2,
}

impl Paddle {
    pub fn new(x: i32, y: i32, width: i32, height: i32, speed: i32) -> Self {
        let pos = IVec2::new(x, y);
        Self {
            pos,
            size: IVec2::new(width, height),
            speed,
            home: pos,
        }
    }

    /// Shift one step. Bounds are the caller's concern.
    pub fn move_in(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.pos.y -= self.speed,
            Direction::Down => self.pos.y += self.speed,
        }
    }

    /// Return to the starting height; x never changes
    pub fn reset(&mut self) {
        self.pos.y = self.home.y;
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_y(&self) -> i32 {
        self.pos.y + self.size.y / 2
    }

    #[inline]
    pub fn right_edge(&self) -> i32 {
        self.pos.x + self.size.x
    }
}

/// The ball. `pos` is the center.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
    pub radius: i32,
    home: IVec2,
}

impl Ball {
    /// New ball at rest vertically, serving right
    pub fn new(x: i32, y: i32, radius: i32, speed: i32) -> Self {
        let pos = IVec2::new(x, y);
        Self {
            pos,
            vel: IVec2::new(speed, 0),
            radius,
            home: pos,
        }
    }

    /// Advance one tick
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Recenter and serve the other way
    pub fn reset(&mut self) {
        self.pos = self.home;
        self.vel = IVec2::new(-self.vel.x, 0);
    }

    #[inline]
    pub fn left_edge(&self) -> i32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right_edge(&self) -> i32 {
        self.pos.x + self.radius
    }
}

/// Playing field bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub width: i32,
    pub height: i32,
    /// Paddles stay at least this far from the top/bottom edge
    pub margin: i32,
}

/// Complete match state. Owns exactly one ball and two paddles.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub field: Field,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub left_score: u32,
    pub right_score: u32,
    pub win_score: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl MatchState {
    pub fn new(settings: &Settings) -> Self {
        let field = Field {
            width: settings.field_width,
            height: settings.field_height,
            margin: settings.paddle_margin,
        };
        let paddle_y = field.height / 2 - settings.paddle_height / 2;
        let left = Paddle::new(
            settings.paddle_inset,
            paddle_y,
            settings.paddle_width,
            settings.paddle_height,
            settings.paddle_speed,
        );
        let right = Paddle::new(
            field.width - settings.paddle_width - settings.paddle_inset,
            paddle_y,
            settings.paddle_width,
            settings.paddle_height,
            settings.paddle_speed,
        );
        let ball = Ball::new(
            field.width / 2,
            field.height / 2,
            settings.ball_radius,
            settings.ball_speed,
        );

        Self {
            field,
            left,
            right,
            ball,
            left_score: 0,
            right_score: 0,
            win_score: settings.win_score,
            phase: GamePhase::Playing,
            time_ticks: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    /// Award a point; returns the new score
    pub fn award_point(&mut self, scorer: Side) -> u32 {
        let score = match scorer {
            Side::Left => &mut self.left_score,
            Side::Right => &mut self.right_score,
        };
        *score += 1;
        *score
    }

    /// Side that has reached the win score, if any
    pub fn leader_at_win(&self) -> Option<Side> {
        if self.left_score >= self.win_score {
            Some(Side::Left)
        } else if self.right_score >= self.win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Recenter ball and both paddles after a point
    pub fn reset_entities(&mut self) {
        self.ball.reset();
        self.left.reset();
        self.right.reset();
    }

    /// Zero scores and recenter everything
    pub fn reset_match(&mut self) {
        self.reset_entities();
        self.left_score = 0;
        self.right_score = 0;
        self.phase = GamePhase::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = MatchState::new(&Settings::default());
        assert_eq!(state.left.pos, IVec2::new(10, 200));
        assert_eq!(state.right.pos, IVec2::new(670, 200));
        assert_eq!(state.ball.pos, IVec2::new(350, 250));
        assert_eq!(state.ball.vel, IVec2::new(5, 0));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!((state.left_score, state.right_score), (0, 0));
    }

    #[test]
    fn test_paddle_move_has_no_bounds() {
        let mut paddle = Paddle::new(10, 0, 20, 100, 4);
        paddle.move_in(Direction::Up);
        assert_eq!(paddle.pos.y, -4);
        paddle.move_in(Direction::Down);
        paddle.move_in(Direction::Down);
        assert_eq!(paddle.pos.y, 4);
    }

    #[test]
    fn test_paddle_reset_keeps_x() {
        let mut paddle = Paddle::new(670, 200, 20, 100, 4);
        paddle.pos.y = 17;
        paddle.reset();
        assert_eq!(paddle.pos, IVec2::new(670, 200));
        assert_eq!(paddle.center_y(), 250);
        assert_eq!(paddle.bottom(), 300);
        assert_eq!(paddle.right_edge(), 690);
    }

    #[test]
    fn test_ball_integrate() {
        let mut ball = Ball::new(350, 250, 7, 5);
        ball.vel.y = -3;
        ball.integrate();
        assert_eq!(ball.pos, IVec2::new(355, 247));
    }

    #[test]
    fn test_serve_alternates() {
        let mut ball = Ball::new(350, 250, 7, 5);
        ball.pos = IVec2::new(12, 40);
        ball.vel = IVec2::new(-5, 3);

        ball.reset();
        assert_eq!(ball.pos, IVec2::new(350, 250));
        assert_eq!(ball.vel, IVec2::new(5, 0));

        ball.reset();
        assert_eq!(ball.vel, IVec2::new(-5, 0));
    }

    #[test]
    fn test_reset_match_zeroes_scores() {
        let mut state = MatchState::new(&Settings::default());
        state.left_score = 10;
        state.right_score = 4;
        state.left.pos.y = 2;
        state.phase = GamePhase::MatchWon { winner: Side::Left };

        state.reset_match();
        assert_eq!((state.left_score, state.right_score), (0, 0));
        assert_eq!(state.left.pos.y, 200);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_leader_at_win() {
        let mut state = MatchState::new(&Settings::default());
        assert_eq!(state.leader_at_win(), None);
        for _ in 0..10 {
            state.award_point(Side::Right);
        }
        assert_eq!(state.leader_at_win(), Some(Side::Right));
        assert_eq!(state.score(Side::Right), 10);
    }
}
