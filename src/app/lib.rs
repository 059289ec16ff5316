pub mod action;
pub mod cycler;
pub mod effect;
pub mod effect_runner;
pub mod message_state;
pub mod ports;
pub mod reducer;
pub mod run_loop;
pub mod settings;
pub mod state;
pub mod surface_board;
pub mod tick_schedule;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
