//! Modal prompt gate
//!
//! ```text
//! Idle
//!   ↓ close requested          ↓ tab menu opened
//! ConfirmClose(id)           Rename(id)
//!   ↓ confirm / cancel         ↓ confirm / cancel
//! Idle                       Idle
//! ```

use serde::{Deserialize, Serialize};
use tabpad_tabs::TabId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "tab_id", rename_all = "snake_case")]
pub enum Prompt {
    /// No prompt is showing
    #[default]
    Idle,
    /// Waiting for the user to confirm closing a tab
    ConfirmClose(TabId),
    /// Waiting for a new title for a tab
    Rename(TabId),
}

impl Prompt {
    /// Check if moving to another prompt state is valid
    pub fn can_transition_to(&self, target: Prompt) -> bool {
        match (self, target) {
            // Any prompt can be opened from idle
            (Prompt::Idle, _) => true,
            // Any prompt can be dismissed
            (_, Prompt::Idle) => true,
            // One prompt at a time
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Prompt::Idle => "idle",
            Prompt::ConfirmClose(_) => "confirm_close",
            Prompt::Rename(_) => "rename",
        }
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        assert!(Prompt::Idle.can_transition_to(Prompt::ConfirmClose(1)));
        assert!(Prompt::Idle.can_transition_to(Prompt::Rename(1)));
        assert!(Prompt::ConfirmClose(1).can_transition_to(Prompt::Idle));
        assert!(Prompt::Rename(1).can_transition_to(Prompt::Idle));
    }

    #[test]
    fn test_invalid_transitions() {
        // Can't stack a rename on a pending close
        assert!(!Prompt::ConfirmClose(1).can_transition_to(Prompt::Rename(1)));
        assert!(!Prompt::Rename(1).can_transition_to(Prompt::ConfirmClose(2)));
        assert!(!Prompt::Rename(1).can_transition_to(Prompt::Rename(2)));
    }

    #[test]
    fn test_serialized_shape() {
        assert_eq!(
            serde_json::to_value(Prompt::ConfirmClose(3)).unwrap(),
            serde_json::json!({"kind": "confirm_close", "tab_id": 3})
        );
        assert_eq!(
            serde_json::to_value(Prompt::Idle).unwrap(),
            serde_json::json!({"kind": "idle"})
        );
    }
}
