//! Side effects returned by the reducer, executed by EffectRunner.

use lettercycle_domain::Letter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Render,

    /// A tick wrote `letter`; `tick` counts successful ticks since start
    RecordTick {
        tick: u64,
        letter: Letter,
    },

    RecordFailure {
        message: String,
    },
}
