use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use lettercycle_app::action::Action;

use super::Event;

pub fn handle_event(event: Event) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Resize => Action::Resize,
        Event::Key(key) => handle_key_event(key),
    }
}

// Raw mode swallows SIGINT, so Ctrl+C arrives as a key
fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q') | KeyCode::Esc, _) => Action::Quit,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[rstest]
    #[case(key(KeyCode::Char('q')))]
    #[case(key(KeyCode::Esc))]
    #[case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))]
    fn quit_keys(#[case] input: KeyEvent) {
        assert_eq!(handle_event(Event::Key(input)), Action::Quit);
    }

    #[rstest]
    #[case(key(KeyCode::Char('c')))]
    #[case(key(KeyCode::Char('a')))]
    #[case(key(KeyCode::Enter))]
    #[case(key(KeyCode::Up))]
    fn other_keys_are_ignored(#[case] input: KeyEvent) {
        assert_eq!(handle_event(Event::Key(input)), Action::None);
    }

    #[test]
    fn init_requests_render() {
        assert_eq!(handle_event(Event::Init), Action::Render);
    }

    #[test]
    fn resize_is_forwarded() {
        assert_eq!(handle_event(Event::Resize), Action::Resize);
    }
}
