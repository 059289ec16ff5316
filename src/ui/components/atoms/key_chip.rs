use ratatui::style::Style;
use ratatui::text::Span;

use crate::theme::Theme;

/// Key text without background, for footer hints.
pub fn key_text(key: &str) -> Span<'static> {
    Span::styled(key.to_string(), Style::default().fg(Theme::TEXT_ACCENT))
}
