use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use lettercycle_app::state::AppState;

use super::atoms::panel_block;
use crate::theme::Theme;

pub struct LetterPanel;

impl LetterPanel {
    /// Draws the cycled surface's text centered in a bordered panel.
    /// Text that is not a letter is shown as-is, in the error color.
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = panel_block(state.cycler.surface_id().as_str());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let color = if state.current_letter().is_some() {
            Theme::LETTER_FG
        } else {
            Theme::STATUS_ERROR
        };
        let text = Line::styled(
            state.displayed_text().to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );

        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), row);
    }
}
