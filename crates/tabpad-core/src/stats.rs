//! Character counts

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Every character
    pub all: usize,
    /// Characters other than whitespace (spaces, tabs, line breaks)
    pub no_spaces: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        let mut stats = Self::default();
        for c in text.chars() {
            stats.all += 1;
            if !c.is_whitespace() {
                stats.no_spaces += 1;
            }
        }
        stats
    }
}
