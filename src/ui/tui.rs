use std::io::{Stdout, stdout};

use color_eyre::eyre::Result;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::{FutureExt, StreamExt};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use lettercycle_app::action::Action;

use crate::event::Event;
use crate::event::handler::handle_event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal and a background task turning terminal events into
/// actions.
pub struct TuiRunner {
    terminal: Tui,
    task: Option<JoinHandle<()>>,
    cancellation_token: CancellationToken,
}

impl TuiRunner {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

        Ok(Self {
            terminal,
            task: None,
            cancellation_token: CancellationToken::new(),
        })
    }

    pub fn enter(&mut self, action_tx: Sender<Action>) -> Result<()> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        self.terminal.hide_cursor()?;
        self.start_event_loop(action_tx);
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stop_event_loop();
        if crossterm::terminal::is_raw_mode_enabled()? {
            self.terminal.show_cursor()?;
            execute!(stdout(), LeaveAlternateScreen)?;
            disable_raw_mode()?;
        }
        Ok(())
    }

    fn start_event_loop(&mut self, action_tx: Sender<Action>) {
        let cancellation_token = self.cancellation_token.clone();

        self.task = Some(tokio::spawn(async move {
            let mut event_stream = EventStream::new();

            if action_tx.send(handle_event(Event::Init)).await.is_err() {
                return;
            }

            loop {
                let event = tokio::select! {
                    () = cancellation_token.cancelled() => break,
                    crossterm_event = event_stream.next().fuse() => {
                        match crossterm_event {
                            Some(Ok(CrosstermEvent::Key(key)))
                                if key.kind == KeyEventKind::Press =>
                            {
                                Event::Key(key)
                            }
                            Some(Ok(CrosstermEvent::Resize(..))) => Event::Resize,
                            Some(Ok(_)) => continue,
                            // Without terminal input the loop could never be quit
                            Some(Err(_)) | None => {
                                let _ = action_tx.send(Action::Quit).await;
                                break;
                            }
                        }
                    }
                };

                let action = handle_event(event);
                if action.is_none() {
                    continue;
                }
                if action_tx.send(action).await.is_err() {
                    break;
                }
            }
        }));
    }

    fn stop_event_loop(&mut self) {
        self.cancellation_token.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}
