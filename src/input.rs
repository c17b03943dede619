use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// The five events the session understands. Raw key codes stay behind the
/// backend that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Up,
    Down,
    Confirm,
    Quit,
    Other,
}

pub trait InputBackend {
    /// Blocks until one input event is available.
    fn read_event(&mut self) -> Result<InputEvent>;
}

/// Terminal key reader. Expects the terminal to be in raw mode.
pub struct CrosstermInput;

impl InputBackend for CrosstermInput {
    fn read_event(&mut self) -> Result<InputEvent> {
        loop {
            // Key releases and repeats are reported on some platforms; only
            // presses count. Resize/focus/mouse events are swallowed here.
            match event::read().context("reading terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(match key.code {
                        KeyCode::Up | KeyCode::Char('k') => InputEvent::Up,
                        KeyCode::Down | KeyCode::Char('j') => InputEvent::Down,
                        KeyCode::Enter => InputEvent::Confirm,
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputEvent::Quit,
                        _ => InputEvent::Other,
                    });
                }
                _ => {}
            }
        }
    }
}
