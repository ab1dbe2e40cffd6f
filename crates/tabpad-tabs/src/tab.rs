//! Tab data structure

use serde::{Deserialize, Serialize};

use crate::title::heading_title;

/// Tab identifier. Serialized as a plain JSON integer.
pub type TabId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier, also the join key for tab strip elements
    pub id: TabId,
    /// Label shown in the tab strip
    pub title: String,
    /// Full document text
    pub content: String,
}

impl Tab {
    pub fn new(id: TabId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: String::new(),
        }
    }

    /// Default title for the `position`-th tab (1-based).
    pub fn default_title(position: usize) -> String {
        format!("Untitled {}", position)
    }

    /// Replace the stored text and re-derive the title from a heading line.
    ///
    /// Returns true when the title changed.
    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        self.content = content.into();

        match heading_title(&self.content) {
            Some(title) if title != self.title => {
                self.title = title;
                true
            }
            _ => false,
        }
    }

    /// Explicit rename. Blank titles are ignored and return false.
    pub fn rename(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }

        self.title = title.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tab() {
        let tab = Tab::new(1, Tab::default_title(1));
        assert_eq!(tab.id, 1);
        assert_eq!(tab.title, "Untitled 1");
        assert!(tab.content.is_empty());
    }

    #[test]
    fn test_set_content_derives_title() {
        let mut tab = Tab::new(1, "Untitled 1");

        assert!(!tab.set_content("just text"));
        assert_eq!(tab.title, "Untitled 1");

        assert!(tab.set_content("# Hello\nworld"));
        assert_eq!(tab.title, "Hello");
        assert_eq!(tab.content, "# Hello\nworld");

        // Removing the heading keeps the last derived title
        assert!(!tab.set_content("world"));
        assert_eq!(tab.title, "Hello");
    }

    #[test]
    fn test_heading_overrides_rename() {
        let mut tab = Tab::new(1, "Untitled 1");

        assert!(tab.rename("  Notes  "));
        assert_eq!(tab.title, "Notes");

        tab.set_content("# Draft");
        assert_eq!(tab.title, "Draft");
    }

    #[test]
    fn test_blank_rename_ignored() {
        let mut tab = Tab::new(1, "Keep me");
        assert!(!tab.rename("   \t "));
        assert_eq!(tab.title, "Keep me");
    }

    #[test]
    fn test_serialized_shape() {
        let tab = Tab {
            id: 7,
            title: "T".to_string(),
            content: "c".to_string(),
        };
        let json = serde_json::to_value(&tab).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "title": "T", "content": "c"}));
    }
}
