mod harness;

use std::time::Instant;

use harness::{
    TEST_HEIGHT, create_test_state, create_test_terminal, panel_contents, render_to_lines,
};

use lettercycle::app::action::Action;
use lettercycle::app::reducer::reduce;
use lettercycle::app::test_support::overwrite_surface;
use lettercycle::ui::theme::Theme;

#[test]
fn initial_frame_shows_start_letter() {
    let state = create_test_state('a');
    let mut terminal = create_test_terminal();

    let lines = render_to_lines(&mut terminal, &state);

    assert_eq!(panel_contents(&lines), vec!["a"]);
}

#[test]
fn header_describes_cycler() {
    let state = create_test_state('a');
    let mut terminal = create_test_terminal();

    let lines = render_to_lines(&mut terminal, &state);

    assert!(
        lines[0].starts_with("lettercycle | surface a | every 100ms | on invalid: reject"),
        "header was {:?}",
        lines[0]
    );
}

#[test]
fn panel_is_titled_with_surface_id() {
    let state = create_test_state('a');
    let mut terminal = create_test_terminal();

    let lines = render_to_lines(&mut terminal, &state);

    assert!(lines[1].starts_with('╭'));
    assert!(lines[1].contains(" a "));
}

#[test]
fn frame_follows_ticks() {
    let now = Instant::now();
    let mut state = create_test_state('y');
    let mut terminal = create_test_terminal();

    reduce(&mut state, Action::Tick, now);
    let after_one = render_to_lines(&mut terminal, &state);
    reduce(&mut state, Action::Tick, now);
    let after_two = render_to_lines(&mut terminal, &state);

    assert_eq!(panel_contents(&after_one), vec!["z"]);
    assert_eq!(panel_contents(&after_two), vec!["a"]);
}

#[test]
fn footer_shows_quit_hint_and_tick_count() {
    let now = Instant::now();
    let mut state = create_test_state('a');
    let mut terminal = create_test_terminal();
    for _ in 0..3 {
        reduce(&mut state, Action::Tick, now);
    }

    let lines = render_to_lines(&mut terminal, &state);

    let footer = lines.last().unwrap();
    assert!(footer.starts_with("q Quit  tick 3"), "footer was {:?}", footer);
}

#[test]
fn rejected_tick_shows_error_in_footer() {
    let now = Instant::now();
    let mut state = create_test_state('a');
    let mut terminal = create_test_terminal();
    overwrite_surface(&mut state, "7");

    reduce(&mut state, Action::Tick, now);
    let lines = render_to_lines(&mut terminal, &state);

    assert_eq!(panel_contents(&lines), vec!["7"]);
    let footer = lines.last().unwrap();
    assert!(
        footer.starts_with("surface 'a' does not hold a letter"),
        "footer was {:?}",
        footer
    );
}

#[test]
fn info_message_shows_in_footer_in_info_color() {
    let mut state = create_test_state('a');
    let mut terminal = create_test_terminal();
    state
        .messages
        .set_info_at("cycling surface a".to_string(), Instant::now());

    let lines = render_to_lines(&mut terminal, &state);

    let footer = lines.last().unwrap();
    assert!(
        footer.starts_with("cycling surface a"),
        "footer was {:?}",
        footer
    );
    let first_cell = terminal
        .backend()
        .buffer()
        .cell((0, TEST_HEIGHT - 1))
        .unwrap();
    assert_eq!(first_cell.fg, Theme::STATUS_INFO);
}
