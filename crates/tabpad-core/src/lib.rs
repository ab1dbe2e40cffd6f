//! Tabpad Core
//!
//! Central coordination layer for the notepad. All state lives here; a
//! front-end only forwards events and draws the returned view.

mod config;
mod error;
mod event;
mod notepad;
mod preview;
mod stats;
mod theme;
mod view;

pub use config::Config;
pub use error::CoreError;
pub use event::UiEvent;
pub use notepad::{Notepad, SPLIT_TOGGLE_KEY, THEME_KEY};
pub use preview::{has_markdown, preview_html, render_markdown};
pub use stats::TextStats;
pub use theme::Theme;
pub use view::{NotepadView, TabItem, TabStrip};

// Re-export core components
pub use tabpad_session::{
    CloseRequest, Editor, Notice, Prompt, Selection, Session, SessionError, SessionManager,
};
pub use tabpad_storage::{Database, KeyValueStore, MemoryStore, StorageError};
pub use tabpad_tabs::{Tab, TabId};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging. Output goes to stderr so stdout can carry data.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
