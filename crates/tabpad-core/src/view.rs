//! View description handed to the front-end

use serde::Serialize;
use tabpad_session::{Prompt, Session};
use tabpad_tabs::TabId;

use crate::stats::TextStats;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabItem {
    pub id: TabId,
    pub title: String,
    pub active: bool,
}

/// Tab strip in display order. Exactly one item is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TabStrip {
    pub items: Vec<TabItem>,
}

impl TabStrip {
    pub fn from_session(session: &Session) -> Self {
        let active = session.active_tab_id();
        Self {
            items: session
                .tabs()
                .iter()
                .map(|tab| TabItem {
                    id: tab.id,
                    title: tab.title.clone(),
                    active: tab.id == active,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotepadView {
    pub tabs: TabStrip,
    pub active_tab_id: TabId,
    /// Editor text
    pub text: String,
    pub counts: TextStats,
    /// Counts for a non-empty selection
    pub selection: Option<TextStats>,
    /// Rendered Markdown when the split view is showing
    pub preview_html: Option<String>,
    pub preview_enabled: bool,
    pub theme: Theme,
    pub prompt: Prompt,
    /// Prefill for the rename prompt
    pub rename_draft: Option<String>,
    /// Advisory message raised by the last event
    pub notice: Option<String>,
}

impl NotepadView {
    pub fn split_view(&self) -> bool {
        self.preview_html.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabpad_tabs::Tab;

    #[test]
    fn test_exactly_one_active() {
        let session = Session::from_parts(
            vec![Tab::new(1, "a"), Tab::new(2, "b"), Tab::new(3, "c")],
            Some(2),
        )
        .unwrap();

        let strip = TabStrip::from_session(&session);
        assert_eq!(strip.items.len(), 3);
        assert_eq!(strip.items.iter().filter(|item| item.active).count(), 1);
        assert!(strip.items[1].active);
        assert_eq!(
            strip.items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}
