//! FAQ accordion: at most one entry open at a time.

use super::faq::Faq;

#[derive(Debug, Clone)]
pub struct Accordion {
    items: Vec<Faq>,
    open: Option<usize>,
    cursor: usize,
}

impl Accordion {
    pub fn new(items: Vec<Faq>) -> Self {
        Self {
            items,
            open: None,
            cursor: 0,
        }
    }

    pub fn items(&self) -> &[Faq] {
        &self.items
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Toggle entry `index`: an open entry closes, a closed one opens and
    /// closes every other. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        let was_open = self.is_open(index);
        self.open = None;
        if !was_open {
            self.open = Some(index);
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_next(&mut self) {
        if !self.items.is_empty() {
            self.cursor = (self.cursor + 1).min(self.items.len() - 1);
        }
    }

    pub fn cursor_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn toggle_at_cursor(&mut self) {
        self.toggle(self.cursor);
    }
}
