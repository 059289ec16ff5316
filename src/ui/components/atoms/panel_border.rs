use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders};

use crate::theme::Theme;

/// Rounded panel titled with the surface id.
pub fn panel_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::PANEL_BORDER))
}
