use color_eyre::eyre::Result;

use lettercycle_app::ports::renderer::Renderer;
use lettercycle_app::state::AppState;

use crate::components::layout::MainLayout;
use crate::tui::TuiRunner;

pub struct TuiAdapter<'a> {
    tui: &'a mut TuiRunner,
}

impl<'a> TuiAdapter<'a> {
    pub fn new(tui: &'a mut TuiRunner) -> Self {
        Self { tui }
    }
}

impl Renderer for TuiAdapter<'_> {
    fn draw(&mut self, state: &AppState) -> Result<()> {
        self.tui.terminal().draw(|frame| {
            MainLayout::render(frame, state);
        })?;
        Ok(())
    }
}
