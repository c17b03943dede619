use crate::input::InputEvent;
use crate::menu::{MenuDocument, MenuEntry, ParseError};
use crate::nav::{Direction, NavigationState};

/// What the run loop should do after one input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
    /// Hand the selection to the executor. `command` may be absent, in which
    /// case there is nothing to run and the user is told so.
    Activate {
        label: String,
        command: Option<String>,
    },
}

/// One menu session: a navigation cursor plus the event-to-outcome mapping.
pub struct App {
    nav: NavigationState,
}

impl App {
    pub fn new(document: MenuDocument) -> Result<Self, ParseError> {
        Ok(Self {
            nav: NavigationState::new(document)?,
        })
    }

    pub fn document(&self) -> &MenuDocument {
        self.nav.document()
    }

    pub fn cursor(&self) -> usize {
        self.nav.cursor()
    }

    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        match event {
            InputEvent::Up => {
                self.nav.move_cursor(Direction::Up);
                Outcome::Continue
            }
            InputEvent::Down => {
                self.nav.move_cursor(Direction::Down);
                Outcome::Continue
            }
            InputEvent::Confirm => match self.nav.selected() {
                MenuEntry::Item { label, command } => {
                    if is_exit_label(label) {
                        Outcome::Quit
                    } else {
                        Outcome::Activate {
                            label: label.clone(),
                            command: command.clone(),
                        }
                    }
                }
                // The cursor invariant keeps headers unselectable.
                MenuEntry::Header { .. } => Outcome::Continue,
            },
            InputEvent::Quit => Outcome::Quit,
            InputEvent::Other => Outcome::Continue,
        }
    }
}

/// An item labelled `exit` (any case, surrounding whitespace ignored) ends
/// the session instead of reaching the executor.
pub fn is_exit_label(label: &str) -> bool {
    label.trim().eq_ignore_ascii_case("exit")
}
