//! Helpers for building states in tests of the crates above this one.

use std::time::Instant;

use lettercycle_domain::{InvalidLetterPolicy, Letter};

use crate::ports::display::{DisplayHost, DisplaySurface};
use crate::settings::Settings;
use crate::state::AppState;

/// State with the default surface showing `start`.
pub fn state_starting_at(start: char, policy: InvalidLetterPolicy, now: Instant) -> AppState {
    let settings = Settings {
        start: Letter::new(start).expect("start must be a lowercase letter"),
        on_invalid: policy,
        ..Default::default()
    };
    AppState::new(&settings, now).expect("default surface exists")
}

/// Overwrites the cycled surface, bypassing the cycler.
pub fn overwrite_surface(state: &mut AppState, text: &str) {
    let id = state.cycler.surface_id().clone();
    state
        .board
        .surface_mut(&id)
        .expect("cycled surface exists")
        .set_text(text);
}
