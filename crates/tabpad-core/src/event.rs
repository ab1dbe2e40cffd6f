//! UI events consumed by the notepad

use serde::{Deserialize, Serialize};
use tabpad_tabs::TabId;

use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    /// Front-end finished loading; state is read again from the store
    DocumentReady,
    AddTab,
    SelectTab { id: TabId },
    /// Close button on a tab; opens the confirmation prompt
    CloseTab { id: TabId },
    ConfirmClose,
    CancelClose,
    /// Context menu on a tab; opens the rename prompt
    OpenTabMenu { id: TabId },
    ConfirmRename { title: String },
    CancelRename,
    /// Editor text after a keystroke
    ContentChanged { text: String },
    SetTheme { theme: Theme },
    TogglePreview { enabled: bool },
    /// Selection in char offsets
    SelectText { start: usize, end: usize },
    ClearSelection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let event: UiEvent = serde_json::from_str(r#"{"event":"select_tab","id":2}"#).unwrap();
        assert_eq!(event, UiEvent::SelectTab { id: 2 });

        let event: UiEvent = serde_json::from_str(r#"{"event":"add_tab"}"#).unwrap();
        assert_eq!(event, UiEvent::AddTab);

        let event: UiEvent =
            serde_json::from_str(r#"{"event":"set_theme","theme":"dark"}"#).unwrap();
        assert_eq!(event, UiEvent::SetTheme { theme: Theme::Dark });

        assert!(serde_json::from_str::<UiEvent>(r#"{"event":"explode"}"#).is_err());
    }
}
