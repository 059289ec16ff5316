//! The cycling loop.
//!
//! Waits for whichever comes first: an incoming action or the next deadline
//! from [`next_deadline`]. A due deadline becomes a `Tick`; any other wake-up
//! (message expiry) becomes a `Render`. Every iteration runs to completion
//! before the next one starts. A closed action channel counts as `Quit`.

use std::time::Instant;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::action::Action;
use crate::effect::Effect;
use crate::effect_runner::EffectRunner;
use crate::ports::renderer::Renderer;
use crate::reducer::reduce;
use crate::state::AppState;
use crate::tick_schedule::next_deadline;

/// Runs until an `Action::Quit` arrives or every action sender is gone.
pub async fn run(
    state: &mut AppState,
    runner: &mut EffectRunner,
    renderer: &mut dyn Renderer,
    actions: &mut mpsc::Receiver<Action>,
) -> Result<()> {
    tracing::info!(
        surface = %state.cycler.surface_id(),
        interval_ms = state.schedule.interval().as_millis() as u64,
        policy = %state.cycler.policy(),
        "cycler started"
    );
    state.messages.set_info_at(
        format!("cycling surface {}", state.cycler.surface_id()),
        now(),
    );

    let effects = reduce(state, Action::Render, now());
    runner.run(effects, renderer, state)?;
    state.clear_dirty();

    while !state.should_quit {
        let deadline = next_deadline(state, now());

        let action = tokio::select! {
            action = actions.recv() => action.unwrap_or(Action::Quit),
            () = sleep_until(deadline) => {
                if state.schedule.is_due(now()) {
                    Action::Tick
                } else {
                    Action::Render
                }
            }
        };

        let at = now();
        let mut effects = reduce(state, action, at);
        if state.render_dirty {
            state.clear_expired_timers(at);
            effects.push(Effect::Render);
        }
        runner.run(effects, renderer, state)?;
        state.clear_dirty();
    }

    tracing::info!(
        ticks = state.cycler.ticks(),
        frames = runner.frames(),
        "cycler stopped"
    );
    Ok(())
}

// tokio's clock, so paused time in tests moves the schedule too
fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await,
        None => std::future::pending::<()>().await,
    }
}
