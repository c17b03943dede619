use crate::menu::{MenuDocument, MenuEntry, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Index of the first selectable entry in document order.
///
/// `parse` guarantees one exists; the error arm covers documents built by
/// other means.
pub fn first_selectable(document: &MenuDocument) -> Result<usize, ParseError> {
    document
        .entries()
        .iter()
        .position(MenuEntry::is_selectable)
        .ok_or(ParseError::NoSelectableItems)
}

/// A cursor over a menu document. The cursor always rests on an `Item`.
#[derive(Debug, Clone)]
pub struct NavigationState {
    document: MenuDocument,
    cursor: usize,
}

impl NavigationState {
    pub fn new(document: MenuDocument) -> Result<Self, ParseError> {
        let cursor = first_selectable(&document)?;
        Ok(Self { document, cursor })
    }

    pub fn document(&self) -> &MenuDocument {
        &self.document
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> &MenuEntry {
        &self.document.entries()[self.cursor]
    }

    /// Steps the cursor one entry up or down, skipping headers, wrapping
    /// around at both ends. A full scan with no selectable entry leaves the
    /// cursor unchanged; that cannot happen for a parsed document.
    pub fn move_cursor(&mut self, direction: Direction) {
        let len = self.document.len();
        let mut index = self.cursor;
        for _ in 0..len {
            index = match direction {
                Direction::Down => (index + 1) % len,
                Direction::Up => (index + len - 1) % len,
            };
            if self.document.is_selectable(index) {
                self.cursor = index;
                return;
            }
        }
    }
}
