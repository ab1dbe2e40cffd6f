//! Session Manager
//!
//! Threads UI events through the session, the shared editor and the store.
//! Every mutation is written back before the handler returns.

use tabpad_storage::KeyValueStore;
use tabpad_tabs::{Tab, TabId, TabIds};

use crate::editor::Editor;
use crate::error::SessionError;
use crate::prompt::Prompt;
use crate::session::Session;
use crate::Result;

/// Store key for the serialized tab list
pub const TABS_KEY: &str = "notepad-tabs";
/// Store key for the serialized active tab id
pub const ACTIVE_TAB_KEY: &str = "notepad-active-tab";

/// User-visible advisory messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A close was requested while only one tab exists
    LastTab,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::LastTab => "You cannot close the last tab.",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of asking to close a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseRequest {
    /// Confirmation prompt is open for this tab
    Pending(TabId),
    /// Refused with a notice; nothing changed
    Refused(Notice),
    /// Unknown tab or another prompt already open
    Ignored,
}

pub struct SessionManager<S: KeyValueStore> {
    /// Persistent store
    store: S,
    /// Tab list and active pointer
    session: Session,
    /// Shared editing surface
    editor: Editor,
    /// Id allocator for new tabs
    ids: TabIds,
    /// Open modal, if any
    prompt: Prompt,
    /// Last advisory message, until taken
    notice: Option<Notice>,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// Load the persisted session, or the default one, and put the active
    /// tab's content into the editor. Loading never writes.
    pub fn load(store: S) -> Self {
        let session = Self::read_session(&store);
        let ids = TabIds::after(session.tabs());

        let mut manager = Self {
            store,
            session,
            editor: Editor::new(),
            ids,
            prompt: Prompt::Idle,
            notice: None,
        };
        manager.load_active_into_editor();

        tracing::info!(
            tab_count = manager.session.len(),
            active_tab_id = manager.session.active_tab_id(),
            "Loaded tab session"
        );

        manager
    }

    /// Discard in-memory state and load again from the store.
    pub fn reload(&mut self) {
        self.session = Self::read_session(&self.store);
        self.ids = TabIds::after(self.session.tabs());
        self.prompt = Prompt::Idle;
        self.notice = None;
        self.load_active_into_editor();
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Mutable editor access for typing and selection. Call [`Self::on_edit`]
    /// after changing the text.
    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prompt(&self) -> Prompt {
        self.prompt
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Make another tab active.
    ///
    /// The outgoing tab is flushed from the editor before the target's
    /// content is loaded. Unknown ids are a no-op.
    pub fn switch(&mut self, target: TabId) -> bool {
        if !self.session.contains(target) {
            tracing::debug!(tab_id = target, "Switch to unknown tab ignored");
            return false;
        }

        self.session.flush(self.editor.text());
        self.session.activate(target);
        self.load_active_into_editor();
        self.persist();

        tracing::debug!(tab_id = target, "Switched tab");
        true
    }

    /// Append a new empty tab and switch to it.
    pub fn add(&mut self) -> TabId {
        let id = self.ids.next_id().unwrap_or_else(|| {
            let id = TabIds::lowest_free(self.session.tabs());
            tracing::warn!(tab_id = id, "Tab id counter exhausted, reusing a free id");
            id
        });
        let tab = Tab::new(id, Tab::default_title(self.session.len() + 1));
        tracing::info!(tab_id = id, title = %tab.title, "Created new tab");

        self.session.push(tab);
        self.switch(id);
        id
    }

    /// Ask to close a tab. The last tab is refused with a notice and no
    /// write; otherwise the confirmation prompt opens.
    pub fn request_close(&mut self, id: TabId) -> CloseRequest {
        if self.session.len() <= 1 {
            self.notice = Some(Notice::LastTab);
            return CloseRequest::Refused(Notice::LastTab);
        }

        if !self.session.contains(id) {
            tracing::debug!(tab_id = id, "Close of unknown tab ignored");
            return CloseRequest::Ignored;
        }

        if !self.open_prompt(Prompt::ConfirmClose(id)) {
            return CloseRequest::Ignored;
        }

        CloseRequest::Pending(id)
    }

    /// Confirm the pending close.
    pub fn confirm_close(&mut self) -> bool {
        match self.prompt {
            Prompt::ConfirmClose(id) => {
                self.prompt = Prompt::Idle;
                self.close(id)
            }
            _ => false,
        }
    }

    pub fn cancel_close(&mut self) {
        if matches!(self.prompt, Prompt::ConfirmClose(_)) {
            self.prompt = Prompt::Idle;
        }
    }

    /// Remove a tab without confirmation.
    ///
    /// When the closed tab was active, the previous neighbour (or the new
    /// first tab) becomes active and the editor's unflushed text is dropped.
    pub fn close(&mut self, id: TabId) -> bool {
        let Some(removed) = self.session.remove(id) else {
            tracing::debug!(
                tab_id = id,
                tab_count = self.session.len(),
                "Close refused"
            );
            return false;
        };

        self.load_active_into_editor();
        self.persist();

        tracing::info!(
            tab_id = id,
            title = %removed.tab.title,
            index = removed.index,
            active_tab_id = self.session.active_tab_id(),
            "Closed tab"
        );
        true
    }

    /// Open the rename prompt for a tab, returning its current title for
    /// prefilling.
    pub fn open_rename(&mut self, id: TabId) -> Option<&str> {
        if !self.session.contains(id) || !self.open_prompt(Prompt::Rename(id)) {
            return None;
        }
        self.session.tab(id).map(|t| t.title.as_str())
    }

    /// Apply the rename prompt. A blank title closes the prompt and changes
    /// nothing.
    pub fn confirm_rename(&mut self, title: &str) -> bool {
        match self.prompt {
            Prompt::Rename(id) => {
                self.prompt = Prompt::Idle;
                self.rename(id, title)
            }
            _ => false,
        }
    }

    pub fn cancel_rename(&mut self) {
        if matches!(self.prompt, Prompt::Rename(_)) {
            self.prompt = Prompt::Idle;
        }
    }

    /// Set a tab's title explicitly. Blank titles and unknown ids are ignored.
    pub fn rename(&mut self, id: TabId, title: &str) -> bool {
        if !self.session.rename(id, title) {
            return false;
        }

        self.persist();
        tracing::info!(tab_id = id, title = %title.trim(), "Renamed tab");
        true
    }

    /// Keystroke handler: flush the editor into the active tab and persist.
    pub fn on_edit(&mut self) {
        if self.session.flush(self.editor.text()) {
            tracing::debug!(
                tab_id = self.session.active_tab_id(),
                title = %self.session.active_tab().title,
                "Title derived from heading"
            );
        }
        self.persist();
    }

    /// Replace the editor text and run the keystroke handler.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.editor.set_text(text);
        self.on_edit();
    }

    fn open_prompt(&mut self, prompt: Prompt) -> bool {
        if !self.prompt.can_transition_to(prompt) {
            tracing::debug!(from = %self.prompt, to = %prompt, "Prompt already open");
            return false;
        }
        self.prompt = prompt;
        true
    }

    fn load_active_into_editor(&mut self) {
        self.editor.load(&self.session.active_tab().content);
    }

    /// Write the session; failures are logged and absorbed.
    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::error!("Failed to save tab session: {}", e);
        }
    }

    fn save(&self) -> Result<()> {
        self.store.set_json(TABS_KEY, self.session.tabs())?;
        self.store
            .set_json(ACTIVE_TAB_KEY, &self.session.active_tab_id())?;
        Ok(())
    }

    fn read_session(store: &S) -> Session {
        match Self::read_persisted(store) {
            Ok(Some(session)) => session,
            Ok(None) => {
                tracing::info!("No saved tabs, starting with a default tab");
                Session::default_session()
            }
            Err(e) => {
                tracing::warn!("Discarding saved tabs: {}", e);
                Session::default_session()
            }
        }
    }

    fn read_persisted(store: &S) -> Result<Option<Session>> {
        let Some(tabs) = store.get_json::<Vec<Tab>>(TABS_KEY)? else {
            return Ok(None);
        };

        let active_tab_id = match store.get_json::<TabId>(ACTIVE_TAB_KEY) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("Unreadable active tab id: {}", e);
                None
            }
        };

        Session::from_parts(tabs, active_tab_id)
            .map(Some)
            .ok_or(SessionError::EmptyTabList)
    }
}
