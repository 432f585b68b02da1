//! Fixed timestep simulation tick
//!
//! One call advances the match by exactly one tick: input, integration,
//! collisions, scoring, then the win check, always in that order.

use super::collision::resolve_collisions;
use super::input::{KeyState, apply_input};
use super::state::{GameEvent, GamePhase, MatchState, Side};

/// Advance the match by one tick
pub fn tick(state: &mut MatchState, keys: &KeyState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // A won match is held for one tick so the front-end can announce it,
    // then everything starts over. No input or physics on this tick.
    if let GamePhase::MatchWon { winner } = state.phase {
        state.reset_match();
        log::info!("{} player won, starting a new match", winner.as_str());
        events.push(GameEvent::MatchReset);
        return events;
    }

    state.time_ticks += 1;

    apply_input(keys, &mut state.left, &mut state.right, &state.field);

    state.ball.integrate();

    let contact = resolve_collisions(
        &mut state.ball,
        &state.left,
        &state.right,
        state.field.height,
    );
    if contact.wall {
        events.push(GameEvent::WallBounce);
    }
    if let Some(side) = contact.paddle {
        log::debug!(
            "{} paddle hit at tick {}, ball vel {:?}",
            side.as_str(),
            state.time_ticks,
            state.ball.vel
        );
        events.push(GameEvent::PaddleHit { side });
    }

    let Some(scorer) = out_of_bounds(state) else {
        return events;
    };

    state.award_point(scorer);
    state.reset_entities();
    log::info!(
        "{} scores: {} - {}",
        scorer.as_str(),
        state.left_score,
        state.right_score
    );
    events.push(GameEvent::PointScored {
        scorer,
        left: state.left_score,
        right: state.right_score,
    });

    if let Some(winner) = state.leader_at_win() {
        state.phase = GamePhase::MatchWon { winner };
        log::info!(
            "{} player wins the match {} - {}",
            winner.as_str(),
            state.left_score,
            state.right_score
        );
        events.push(GameEvent::MatchWon {
            winner,
            left: state.left_score,
            right: state.right_score,
        });
    }

    events
}

/// Side awarded the point when the ball has left the field horizontally
fn out_of_bounds(state: &MatchState) -> Option<Side> {
    if state.ball.pos.x <= 0 {
        Some(Side::Right)
    } else if state.ball.pos.x >= state.field.width {
        Some(Side::Left)
    } else {
        None
    }
}
