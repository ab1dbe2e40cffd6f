//! The shared editing surface
//!
//! Holds the live text of whichever tab is active. Its text only reaches a
//! tab through an explicit flush performed by the session manager.

use serde::{Deserialize, Serialize};

/// Selected range in char offsets, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Default)]
pub struct Editor {
    text: String,
    selection: Option<Selection>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text as a user edit. An existing selection is clamped to
    /// the new length.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if let Some(selection) = self.selection {
            self.select(selection.start, selection.end);
        }
    }

    /// Append typed text at the end.
    pub fn type_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Load a tab's content verbatim, dropping any selection.
    pub fn load(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.selection = None;
    }

    /// Select a char range. Offsets may come in either order and are clamped
    /// to the text.
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.text.chars().count();
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        self.selection = Some(Selection {
            start: start.min(len),
            end: end.min(len),
        });
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Text under a non-empty selection.
    pub fn selected_text(&self) -> Option<&str> {
        let selection = self.selection.filter(|s| !s.is_collapsed())?;
        let start = self.byte_offset(selection.start);
        let end = self.byte_offset(selection.end);
        Some(&self.text[start..end])
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_clears_selection() {
        let mut editor = Editor::new();
        editor.set_text("hello world");
        editor.select(0, 5);
        assert_eq!(editor.selected_text(), Some("hello"));

        editor.load("other");
        assert_eq!(editor.text(), "other");
        assert!(editor.selection().is_none());
    }

    #[test]
    fn test_selection_is_normalized_and_clamped() {
        let mut editor = Editor::new();
        editor.set_text("héllo");

        editor.select(4, 1);
        assert_eq!(editor.selection(), Some(Selection { start: 1, end: 4 }));
        assert_eq!(editor.selected_text(), Some("éll"));

        editor.select(2, 99);
        assert_eq!(editor.selected_text(), Some("llo"));

        editor.set_text("hé");
        assert_eq!(editor.selection(), Some(Selection { start: 2, end: 2 }));
        assert_eq!(editor.selected_text(), None);
    }

    #[test]
    fn test_collapsed_selection_has_no_text() {
        let mut editor = Editor::new();
        editor.set_text("abc");
        editor.select(1, 1);
        assert!(editor.selected_text().is_none());

        editor.clear_selection();
        assert!(editor.selection().is_none());
    }

    #[test]
    fn test_type_str_appends() {
        let mut editor = Editor::new();
        editor.type_str("# My");
        editor.type_str(" Doc");
        assert_eq!(editor.text(), "# My Doc");
    }
}
