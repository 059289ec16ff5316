use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use lettercycle_app::state::AppState;

use super::footer::Footer;
use super::header::Header;
use super::letter_panel::LetterPanel;

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let [header_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        Header::render(frame, header_area, state);
        LetterPanel::render(frame, main_area, state);
        Footer::render(frame, footer_area, state);
    }
}
