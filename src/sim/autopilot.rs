//! Ball-tracking autopilot for demo and single-player games
//!
//! Produces key presses only; the input mapper still decides whether each
//! move is allowed, so an autopilot paddle obeys the same margins as a human.

use rand::Rng;
use rand_pcg::Pcg32;

use super::input::KeyState;
use super::state::{MatchState, Side};

/// Automatic controller for one paddle
#[derive(Debug, Clone)]
pub struct Autopilot {
    side: Side,
    rng: Pcg32,
    /// Where on the paddle the ball is aimed, relative to its center
    aim_offset: i32,
    /// Horizontal direction of the ball when the aim was last rolled
    last_dir: i32,
}

impl Autopilot {
    pub fn new(side: Side, seed: u64) -> Self {
        // Different streams per side so a shared seed doesn't mirror
        let stream = match side {
            Side::Left => 1,
            Side::Right => 2,
        };
        Self {
            side,
            rng: Pcg32::new(seed, stream),
            aim_offset: 0,
            last_dir: 0,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Key presses for this tick
    pub fn keys(&mut self, state: &MatchState) -> KeyState {
        let paddle = state.paddle(self.side);
        let ball = &state.ball;

        // Re-aim each time the ball turns around
        let dir = ball.vel.x.signum();
        if dir != self.last_dir {
            self.last_dir = dir;
            // Keep the ball on the paddle even at the dead zone's edge
            let reach = (paddle.size.y / 2 - paddle.speed - 1).max(0);
            self.aim_offset = self.rng.random_range(-reach..=reach);
        }

        let target = ball.pos.y - self.aim_offset;
        let error = target - paddle.center_y();
        let up = error < -paddle.speed;
        let down = error > paddle.speed;

        KeyState::default().with_side(self.side, up, down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::tick;

    #[test]
    fn test_moves_toward_ball() {
        let mut state = MatchState::new(&Settings::default());
        let mut pilot = Autopilot::new(Side::Right, 7);

        state.ball.pos.y = 20;
        let keys = pilot.keys(&state);
        assert_eq!(keys.for_side(Side::Right), (true, false));
        assert_eq!(keys.for_side(Side::Left), (false, false));

        state.ball.pos.y = 480;
        let keys = pilot.keys(&state);
        assert_eq!(keys.for_side(Side::Right), (false, true));
    }

    #[test]
    fn test_same_seed_same_keys() {
        let settings = Settings::default();
        let mut a = MatchState::new(&settings);
        let mut b = MatchState::new(&settings);
        let mut pilot_a = Autopilot::new(Side::Left, 99);
        let mut pilot_b = Autopilot::new(Side::Left, 99);

        for _ in 0..500 {
            let ka = pilot_a.keys(&a);
            let kb = pilot_b.keys(&b);
            assert_eq!(ka, kb);
            tick(&mut a, &ka);
            tick(&mut b, &kb);
        }
        assert_eq!(a.left.pos, b.left.pos);
        assert_eq!(a.ball.pos, b.ball.pos);
    }

    #[test]
    fn test_autopilots_rally() {
        let settings = Settings::default();
        let mut state = MatchState::new(&settings);
        let mut left = Autopilot::new(Side::Left, 3);
        let mut right = Autopilot::new(Side::Right, 3);
        let mut hits = 0;

        for _ in 0..2_000 {
            let keys = KeyState::default();
            let (up, down) = left.keys(&state).for_side(Side::Left);
            let keys = keys.with_side(Side::Left, up, down);
            let (up, down) = right.keys(&state).for_side(Side::Right);
            let keys = keys.with_side(Side::Right, up, down);
            hits += tick(&mut state, &keys)
                .iter()
                .filter(|e| matches!(e, crate::sim::GameEvent::PaddleHit { .. }))
                .count();
        }
        assert!(hits > 0);
    }
}
