//! Key state to paddle moves
//!
//! A move is issued only when one step from the current position stays inside
//! the field margins. The check uses the pre-move position.

use super::state::{Direction, Field, Paddle, Side};

/// Pressed state of the four paddle controls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl KeyState {
    /// Up/down pair for one side
    pub fn for_side(&self, side: Side) -> (bool, bool) {
        match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        }
    }

    /// Replace one side's pair, keeping the other
    pub fn with_side(mut self, side: Side, up: bool, down: bool) -> Self {
        match side {
            Side::Left => {
                self.left_up = up;
                self.left_down = down;
            }
            Side::Right => {
                self.right_up = up;
                self.right_down = down;
            }
        }
        self
    }
}

/// Move both paddles for this tick
pub fn apply_input(keys: &KeyState, left: &mut Paddle, right: &mut Paddle, field: &Field) {
    let (up, down) = keys.for_side(Side::Left);
    steer(left, up, down, field);
    let (up, down) = keys.for_side(Side::Right);
    steer(right, up, down, field);
}

fn steer(paddle: &mut Paddle, up: bool, down: bool, field: &Field) {
    if up && can_move(paddle, Direction::Up, field) {
        paddle.move_in(Direction::Up);
    }
    if down && can_move(paddle, Direction::Down, field) {
        paddle.move_in(Direction::Down);
    }
}

/// Whether one step in `direction` keeps the paddle within the margins
pub fn can_move(paddle: &Paddle, direction: Direction, field: &Field) -> bool {
    match direction {
        Direction::Up => paddle.pos.y - paddle.speed >= field.margin,
        Direction::Down => {
            paddle.pos.y + paddle.speed <= field.height - paddle.size.y - field.margin
        }
    }
}
