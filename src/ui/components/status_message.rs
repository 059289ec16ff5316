use ratatui::style::Style;
use ratatui::text::{Line, Span};

use lettercycle_app::message_state::{MessageLevel, StatusMessage};

use crate::theme::Theme;

pub fn status_line(message: &StatusMessage) -> Line<'static> {
    let color = match message.level {
        MessageLevel::Error => Theme::STATUS_ERROR,
        MessageLevel::Info => Theme::STATUS_INFO,
    };

    Line::from(Span::styled(
        message.text.clone(),
        Style::default().fg(color),
    ))
}
