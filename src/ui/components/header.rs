use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use lettercycle_app::state::AppState;

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let interval = format!("every {}ms", state.schedule.interval().as_millis());
        let policy = format!("on invalid: {}", state.cycler.policy());

        let line = Line::from(vec![
            Span::styled("lettercycle", Style::default().fg(Color::Cyan)),
            Span::raw(" | surface "),
            Span::styled(
                state.cycler.surface_id().to_string(),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(" | "),
            Span::raw(interval),
            Span::raw(" | "),
            Span::raw(policy),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
