//! Pure reducer: state transitions only, no I/O.
//!
//! The reducer MUST NOT call `Instant::now()` (time is passed as `now`),
//! perform I/O, or spawn tasks.

use std::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

pub fn reduce(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    // Every state-changing action needs a redraw
    let should_mark_dirty = !matches!(action, Action::None | Action::Render);

    let effects = reduce_inner(state, action, now);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    match action {
        Action::None => vec![],
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Resize => vec![],
        Action::Render => {
            state.clear_expired_timers(now);
            vec![Effect::Render]
        }
        Action::Tick => reduce_tick(state, now),
    }
}

fn reduce_tick(state: &mut AppState, now: Instant) -> Vec<Effect> {
    state.schedule.arm(now);

    match state.cycler.tick(&mut state.board) {
        Ok(letter) => vec![Effect::RecordTick {
            tick: state.cycler.ticks(),
            letter,
        }],
        Err(e) => {
            let message = e.to_string();
            state.messages.set_error_at(message.clone(), now);
            vec![Effect::RecordFailure { message }]
        }
    }
}
