//! Main notepad state container
//!
//! Owns the tab session manager plus the display preferences, applies UI
//! events and describes the result as a [`NotepadView`].

use tabpad_session::{Prompt, SessionManager};
use tabpad_storage::{Database, KeyValueStore};

use crate::config::Config;
use crate::event::UiEvent;
use crate::preview::preview_html;
use crate::stats::TextStats;
use crate::theme::Theme;
use crate::view::{NotepadView, TabStrip};
use crate::Result;

/// Store key for the selected theme
pub const THEME_KEY: &str = "notepad-theme";
/// Store key for the split view toggle
pub const SPLIT_TOGGLE_KEY: &str = "split-toggle-state";

pub struct Notepad<S: KeyValueStore> {
    /// Configuration
    config: Config,
    /// Tabs, editor and persistence
    sessions: SessionManager<S>,
    /// Current theme
    theme: Theme,
    /// Markdown split view toggle
    preview_enabled: bool,
}

impl Notepad<Database> {
    /// Open the database named by `config` and load the saved state.
    pub fn open(config: Config) -> Result<Self> {
        let db = Database::open(&config.database_path)?;
        Ok(Self::with_store(config, db))
    }
}

impl<S: KeyValueStore> Notepad<S> {
    pub fn with_store(config: Config, store: S) -> Self {
        let sessions = SessionManager::load(store);
        let mut notepad = Self {
            theme: config.default_theme,
            preview_enabled: config.preview_enabled,
            config,
            sessions,
        };
        notepad.load_preferences();

        tracing::info!(
            theme = %notepad.theme,
            preview_enabled = notepad.preview_enabled,
            "Notepad initialized"
        );

        notepad
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sessions(&self) -> &SessionManager<S> {
        &self.sessions
    }

    pub fn sessions_mut(&mut self) -> &mut SessionManager<S> {
        &mut self.sessions
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn preview_enabled(&self) -> bool {
        self.preview_enabled
    }

    /// Apply one event and describe the resulting state. A notice raised by
    /// the event appears in this view only.
    pub fn handle(&mut self, event: UiEvent) -> NotepadView {
        tracing::trace!(?event, "Handling event");
        self.apply(event);

        let view = self.view();
        self.sessions.take_notice();
        view
    }

    pub fn view(&self) -> NotepadView {
        let session = self.sessions.session();
        let editor = self.sessions.editor();
        let text = editor.text();

        let prompt = self.sessions.prompt();
        let rename_draft = match prompt {
            Prompt::Rename(id) => session.tab(id).map(|t| t.title.clone()),
            _ => None,
        };

        NotepadView {
            tabs: TabStrip::from_session(session),
            active_tab_id: session.active_tab_id(),
            text: text.to_string(),
            counts: TextStats::of(text),
            selection: editor.selected_text().map(TextStats::of),
            preview_html: preview_html(text, self.preview_enabled),
            preview_enabled: self.preview_enabled,
            theme: self.theme,
            prompt,
            rename_draft,
            notice: self.sessions.notice().map(|n| n.to_string()),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.sessions.store().set(THEME_KEY, theme.as_str()) {
            tracing::error!("Failed to save theme: {}", e);
        }
        tracing::debug!(theme = %theme, "Theme changed");
    }

    pub fn set_preview_enabled(&mut self, enabled: bool) {
        self.preview_enabled = enabled;
        let value = if enabled { "true" } else { "false" };
        if let Err(e) = self.sessions.store().set(SPLIT_TOGGLE_KEY, value) {
            tracing::error!("Failed to save split toggle: {}", e);
        }
    }

    fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::DocumentReady => {
                self.sessions.reload();
                self.load_preferences();
            }
            UiEvent::AddTab => {
                self.sessions.add();
            }
            UiEvent::SelectTab { id } => {
                self.sessions.switch(id);
            }
            UiEvent::CloseTab { id } => {
                self.sessions.request_close(id);
            }
            UiEvent::ConfirmClose => {
                self.sessions.confirm_close();
            }
            UiEvent::CancelClose => self.sessions.cancel_close(),
            UiEvent::OpenTabMenu { id } => {
                self.sessions.open_rename(id);
            }
            UiEvent::ConfirmRename { title } => {
                self.sessions.confirm_rename(&title);
            }
            UiEvent::CancelRename => self.sessions.cancel_rename(),
            UiEvent::ContentChanged { text } => self.sessions.edit(text),
            UiEvent::SetTheme { theme } => self.set_theme(theme),
            UiEvent::TogglePreview { enabled } => self.set_preview_enabled(enabled),
            UiEvent::SelectText { start, end } => self.sessions.editor_mut().select(start, end),
            UiEvent::ClearSelection => self.sessions.editor_mut().clear_selection(),
        }
    }

    fn load_preferences(&mut self) {
        let store = self.sessions.store();

        self.theme = match store.get(THEME_KEY) {
            Ok(Some(name)) => name.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, using {}", e, self.config.default_theme);
                self.config.default_theme
            }),
            Ok(None) => self.config.default_theme,
            Err(e) => {
                tracing::warn!("Failed to read theme: {}", e);
                self.config.default_theme
            }
        };

        self.preview_enabled = match store.get(SPLIT_TOGGLE_KEY) {
            Ok(Some(value)) => value == "true",
            Ok(None) => self.config.preview_enabled,
            Err(e) => {
                tracing::warn!("Failed to read split toggle: {}", e);
                self.config.preview_enabled
            }
        };
    }
}
