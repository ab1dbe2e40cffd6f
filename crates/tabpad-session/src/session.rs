//! Session data structure
//!
//! Pure state transitions over the tab list. Nothing here touches the store
//! or the editor.

use serde::Serialize;
use tabpad_tabs::{Tab, TabId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Tabs in display order, never empty
    tabs: Vec<Tab>,
    /// Id of the tab loaded into the editor
    active_tab_id: TabId,
}

/// Outcome of removing a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedTab {
    pub tab: Tab,
    /// Position the tab occupied before removal
    pub index: usize,
    /// Whether the active pointer moved to another tab
    pub reselected: bool,
}

impl Session {
    /// First-run session: one empty tab.
    pub fn default_session() -> Self {
        let tab = Tab::new(1, Tab::default_title(1));
        Self {
            active_tab_id: tab.id,
            tabs: vec![tab],
        }
    }

    /// Rebuild a session from persisted parts.
    ///
    /// Returns `None` for an empty tab list. Later tabs reusing an earlier id
    /// are dropped. An active id that matches no tab falls back to the first.
    pub fn from_parts(tabs: Vec<Tab>, active_tab_id: Option<TabId>) -> Option<Self> {
        let mut unique: Vec<Tab> = Vec::with_capacity(tabs.len());
        for tab in tabs {
            if unique.iter().any(|t| t.id == tab.id) {
                tracing::warn!(tab_id = tab.id, "Dropping tab with duplicate id");
                continue;
            }
            unique.push(tab);
        }

        let first_id = unique.first()?.id;
        let active_tab_id = match active_tab_id {
            Some(id) if unique.iter().any(|t| t.id == id) => id,
            Some(id) => {
                tracing::warn!(
                    tab_id = id,
                    fallback = first_id,
                    "Persisted active tab not found"
                );
                first_id
            }
            None => first_id,
        };

        Some(Self {
            tabs: unique,
            active_tab_id,
        })
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Never true for a loaded session.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_tab_id(&self) -> TabId {
        self.active_tab_id
    }

    pub fn active_tab(&self) -> &Tab {
        // active_tab_id always names a tab
        &self.tabs[self.active_index()]
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.tabs.iter().any(|t| t.id == id)
    }

    pub fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Copy the editor text into the active tab and re-derive its title.
    ///
    /// Returns true when the title changed.
    pub fn flush(&mut self, text: &str) -> bool {
        let index = self.active_index();
        self.tabs[index].set_content(text)
    }

    /// Point the session at another tab. Unknown ids are ignored.
    pub fn activate(&mut self, id: TabId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.active_tab_id = id;
        true
    }

    /// Append a tab. The caller owns id uniqueness.
    pub fn push(&mut self, tab: Tab) {
        debug_assert!(!self.contains(tab.id));
        self.tabs.push(tab);
    }

    /// Remove a tab, re-pointing the active id to the previous neighbour when
    /// the removed tab was active. Refuses to remove the last tab.
    pub fn remove(&mut self, id: TabId) -> Option<RemovedTab> {
        if self.tabs.len() <= 1 {
            return None;
        }

        let index = self.position(id)?;
        let tab = self.tabs.remove(index);

        let reselected = tab.id == self.active_tab_id;
        if reselected {
            self.active_tab_id = self.tabs[index.saturating_sub(1)].id;
        }

        Some(RemovedTab {
            tab,
            index,
            reselected,
        })
    }

    /// Explicitly rename a tab. Blank titles and unknown ids are ignored.
    pub fn rename(&mut self, id: TabId, title: &str) -> bool {
        self.tabs
            .iter_mut()
            .find(|t| t.id == id)
            .map(|tab| tab.rename(title))
            .unwrap_or(false)
    }

    fn active_index(&self) -> usize {
        self.position(self.active_tab_id).unwrap_or(0)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::default_session()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_tabs() -> Session {
        Session::from_parts(
            vec![Tab::new(1, "one"), Tab::new(2, "two"), Tab::new(3, "three")],
            Some(1),
        )
        .unwrap()
    }

    #[test]
    fn test_default_session() {
        let session = Session::default_session();
        assert_eq!(session.len(), 1);
        assert_eq!(session.active_tab_id(), 1);
        assert_eq!(session.active_tab().title, "Untitled 1");
        assert!(session.active_tab().content.is_empty());
    }

    #[test]
    fn test_from_parts_fallbacks() {
        assert!(Session::from_parts(Vec::new(), Some(1)).is_none());

        let session =
            Session::from_parts(vec![Tab::new(4, "a"), Tab::new(9, "b")], Some(42)).unwrap();
        assert_eq!(session.active_tab_id(), 4);

        let session = Session::from_parts(vec![Tab::new(4, "a"), Tab::new(9, "b")], None).unwrap();
        assert_eq!(session.active_tab_id(), 4);

        let session =
            Session::from_parts(vec![Tab::new(4, "a"), Tab::new(9, "b")], Some(9)).unwrap();
        assert_eq!(session.active_tab_id(), 9);
    }

    #[test]
    fn test_from_parts_drops_duplicate_ids() {
        let session =
            Session::from_parts(vec![Tab::new(1, "a"), Tab::new(1, "b")], Some(1)).unwrap();
        assert_eq!(session.len(), 1);
        assert_eq!(session.active_tab().title, "a");
    }

    #[test]
    fn test_flush_touches_only_active_tab() {
        let mut session = three_tabs();
        assert!(session.flush("# Shopping\nmilk"));

        assert_eq!(session.tab(1).unwrap().content, "# Shopping\nmilk");
        assert_eq!(session.tab(1).unwrap().title, "Shopping");
        assert!(session.tab(2).unwrap().content.is_empty());
        assert_eq!(session.tab(2).unwrap().title, "two");
    }

    #[test]
    fn test_remove_active_middle_selects_previous() {
        let mut session = three_tabs();
        session.activate(2);

        let removed = session.remove(2).unwrap();
        assert_eq!(removed.index, 1);
        assert!(removed.reselected);
        assert_eq!(session.active_tab_id(), 1);
    }

    #[test]
    fn test_remove_active_first_selects_new_first() {
        let mut session = three_tabs();

        let removed = session.remove(1).unwrap();
        assert_eq!(removed.index, 0);
        assert_eq!(session.active_tab_id(), 2);
    }

    #[test]
    fn test_remove_inactive_keeps_active() {
        let mut session = three_tabs();
        session.activate(3);

        let removed = session.remove(1).unwrap();
        assert!(!removed.reselected);
        assert_eq!(session.active_tab_id(), 3);
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_remove_refuses_last_and_unknown() {
        let mut session = Session::default_session();
        assert!(session.remove(1).is_none());
        assert_eq!(session.len(), 1);

        let mut session = three_tabs();
        assert!(session.remove(99).is_none());
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_activate_unknown_is_ignored() {
        let mut session = three_tabs();
        assert!(!session.activate(99));
        assert_eq!(session.active_tab_id(), 1);
    }

    #[test]
    fn test_rename() {
        let mut session = three_tabs();
        assert!(session.rename(2, " Renamed "));
        assert_eq!(session.tab(2).unwrap().title, "Renamed");

        assert!(!session.rename(2, "   "));
        assert_eq!(session.tab(2).unwrap().title, "Renamed");

        assert!(!session.rename(99, "Ghost"));
    }
}
