use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{self, Clear, ClearType},
};

use crate::menu::{MenuDocument, MenuEntry};

const BANNER: &str = "Use ↑/↓ to move, Enter to select, q to quit";

/// Owns the terminal for the lifetime of the menu: raw mode on, cursor
/// hidden. `Drop` restores the terminal even on an error path.
pub struct Screen {
    out: Stdout,
}

impl Screen {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        let mut out = io::stdout();
        execute!(out, cursor::Hide).context("hiding cursor")?;
        Ok(Self { out })
    }

    /// Clears and repaints the whole menu with the cursor row highlighted.
    pub fn draw(&mut self, document: &MenuDocument, cursor_index: usize) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        queue!(
            self.out,
            SetForegroundColor(Color::Yellow),
            Print(BANNER),
            ResetColor,
            Print("\r\n\r\n"),
        )?;

        for (i, entry) in document.entries().iter().enumerate() {
            match entry {
                MenuEntry::Header { text } => queue!(
                    self.out,
                    SetAttribute(Attribute::Bold),
                    SetForegroundColor(Color::Cyan),
                    Print(text),
                    SetAttribute(Attribute::Reset),
                    ResetColor,
                    Print("\r\n"),
                )?,
                MenuEntry::Item { label, .. } if i == cursor_index => queue!(
                    self.out,
                    Print("  "),
                    SetForegroundColor(Color::Black),
                    SetBackgroundColor(Color::White),
                    Print(label),
                    ResetColor,
                    Print("\r\n"),
                )?,
                MenuEntry::Item { label, .. } => queue!(
                    self.out,
                    Print("   "),
                    SetForegroundColor(Color::Grey),
                    Print(label),
                    ResetColor,
                    Print("\r\n"),
                )?,
            }
        }

        self.out.flush().context("flushing menu frame")?;
        Ok(())
    }

    /// Hands the terminal back to cooked mode so a child process can use it.
    pub fn suspend(&mut self) -> Result<()> {
        execute!(
            self.out,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            cursor::Show,
        )?;
        terminal::disable_raw_mode().context("leaving raw mode")?;
        Ok(())
    }

    /// Re-takes the terminal after `suspend`.
    pub fn resume(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("re-entering raw mode")?;
        execute!(self.out, cursor::Hide)?;
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(
            self.out,
            cursor::Show,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0),
        );
    }
}
