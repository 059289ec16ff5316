use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use lettercycle::app::state::AppState;
use lettercycle::app::test_support::state_starting_at;
use lettercycle::domain::InvalidLetterPolicy;
use lettercycle::ui::components::layout::MainLayout;

pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 12;

pub fn create_test_state(start: char) -> AppState {
    state_starting_at(start, InvalidLetterPolicy::Reject, Instant::now())
}

pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

pub fn render_to_lines(terminal: &mut Terminal<TestBackend>, state: &AppState) -> Vec<String> {
    terminal
        .draw(|frame| MainLayout::render(frame, state))
        .unwrap();

    buffer_to_lines(terminal.backend().buffer())
}

/// Non-blank content between the letter panel's side borders.
pub fn panel_contents(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| {
            let inner = line.strip_prefix('│')?.trim_end().strip_suffix('│')?;
            let content = inner.trim();
            (!content.is_empty()).then(|| content.to_string())
        })
        .collect()
}

fn buffer_to_lines(buffer: &Buffer) -> Vec<String> {
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.cell((x, y)).unwrap().symbol().to_string())
                .collect()
        })
        .collect()
}
