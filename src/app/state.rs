use std::time::Instant;

use lettercycle_domain::Letter;

use crate::cycler::{CyclerError, LetterCycler};
use crate::message_state::MessageState;
use crate::settings::Settings;
use crate::surface_board::SurfaceBoard;
use crate::tick_schedule::TickSchedule;

#[derive(Debug, Clone)]
pub struct AppState {
    pub board: SurfaceBoard,
    pub cycler: LetterCycler,
    pub schedule: TickSchedule,
    pub messages: MessageState,
    pub should_quit: bool,
    pub render_dirty: bool,
}

impl AppState {
    /// Builds the host board, attaches the cycler (writing the start letter)
    /// and arms the first tick.
    pub fn new(settings: &Settings, now: Instant) -> Result<Self, CyclerError> {
        let mut board = SurfaceBoard::new(settings.surfaces.iter().cloned());
        let cycler = LetterCycler::attach(
            &mut board,
            settings.surface.clone(),
            settings.start,
            settings.on_invalid,
        )?;
        let mut schedule = TickSchedule::new(settings.interval);
        schedule.arm(now);

        Ok(Self {
            board,
            cycler,
            schedule,
            messages: MessageState::default(),
            should_quit: false,
            render_dirty: true,
        })
    }

    /// Raw text of the cycled surface.
    pub fn displayed_text(&self) -> &str {
        self.board
            .text_of(self.cycler.surface_id())
            .unwrap_or_default()
    }

    pub fn current_letter(&self) -> Option<Letter> {
        self.cycler.current(&self.board)
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }

    pub fn clear_expired_timers(&mut self, now: Instant) {
        self.messages.clear_expired_at(now);
    }
}
