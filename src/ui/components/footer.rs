use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use lettercycle_app::state::AppState;

use super::atoms::key_text;
use super::status_message::status_line;
use crate::theme::Theme;

const HINTS: [(&str, &str); 1] = [("q", "Quit")];

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let line = match state.messages.current() {
            Some(message) => status_line(message),
            None => Self::hint_line(state.cycler.ticks()),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Format: "q Quit  tick N"
    fn hint_line(ticks: u64) -> Line<'static> {
        let mut spans = Vec::new();
        for (key, desc) in HINTS {
            spans.push(key_text(key));
            spans.push(Span::styled(
                format!(" {}  ", desc),
                Style::default().fg(Theme::TEXT_SECONDARY),
            ));
        }
        spans.push(Span::styled(
            format!("tick {}", ticks),
            Style::default().fg(Theme::TEXT_SECONDARY),
        ));
        Line::from(spans)
    }
}
