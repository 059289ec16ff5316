use ratatui::style::Color;

/// Application color theme constants
pub struct Theme;

impl Theme {
    pub const PANEL_BORDER: Color = Color::Rgb(0x58, 0x5b, 0x70);
    pub const LETTER_FG: Color = Color::Rgb(0xf9, 0xe2, 0xaf);

    pub const TEXT_ACCENT: Color = Color::Cyan;
    pub const TEXT_SECONDARY: Color = Color::DarkGray;

    pub const STATUS_ERROR: Color = Color::Red;
    pub const STATUS_INFO: Color = Color::Green;
}
