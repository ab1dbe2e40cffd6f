//! Tab id allocation

use crate::tab::{Tab, TabId};

/// Issues tab ids from a counter.
///
/// The counter sits above every id it has observed, so an id freed by a
/// close is not handed out again for the life of the allocator.
#[derive(Debug, Clone, Default)]
pub struct TabIds {
    last: TabId,
}

impl TabIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocator positioned above the ids of `tabs`.
    pub fn after(tabs: &[Tab]) -> Self {
        let mut ids = Self::new();
        for tab in tabs {
            ids.observe(tab.id);
        }
        ids
    }

    /// Record an id that exists elsewhere.
    pub fn observe(&mut self, id: TabId) {
        self.last = self.last.max(id);
    }

    /// Next id above everything observed, or `None` once the counter is
    /// exhausted.
    pub fn next_id(&mut self) -> Option<TabId> {
        let id = self.last.checked_add(1)?;
        self.last = id;
        Some(id)
    }

    /// Smallest positive id not used by `tabs`.
    pub fn lowest_free(tabs: &[Tab]) -> TabId {
        (1..)
            .find(|id| tabs.iter().all(|t| t.id != *id))
            .unwrap_or(TabId::MIN)
    }
}
