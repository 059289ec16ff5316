//! Executes side effects returned by the reducer.
//!
//! Render effects within one batch are coalesced into a single draw.

use color_eyre::eyre::Result;

use crate::effect::Effect;
use crate::ports::renderer::Renderer;
use crate::state::AppState;

#[derive(Debug, Default)]
pub struct EffectRunner {
    frames: u64,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(
        &mut self,
        effects: Vec<Effect>,
        renderer: &mut dyn Renderer,
        state: &AppState,
    ) -> Result<()> {
        let mut needs_render = false;

        for effect in effects {
            match effect {
                Effect::Render => needs_render = true,
                Effect::RecordTick { tick, letter } => {
                    tracing::debug!(
                        tick,
                        %letter,
                        surface = %state.cycler.surface_id(),
                        "tick"
                    );
                }
                Effect::RecordFailure { message } => {
                    tracing::warn!(surface = %state.cycler.surface_id(), "tick failed: {}", message);
                }
            }
        }

        if needs_render {
            renderer.draw(state)?;
            self.frames += 1;
            tracing::trace!(frame = self.frames, "rendered");
        }

        Ok(())
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
