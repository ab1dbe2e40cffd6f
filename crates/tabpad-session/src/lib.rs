//! Tabpad Session Management
//!
//! A session is the ordered tab list plus the active-tab pointer:
//! - Exactly one tab is active and loaded into the shared editor
//! - The active tab's stored text is refreshed from the editor before the
//!   editor is trusted for anything else
//! - Every mutation is written back to the store immediately
//! - The last tab cannot be closed

mod editor;
mod error;
mod manager;
mod prompt;
mod session;

pub use editor::{Editor, Selection};
pub use error::SessionError;
pub use manager::{CloseRequest, Notice, SessionManager, ACTIVE_TAB_KEY, TABS_KEY};
pub use prompt::Prompt;
pub use session::{RemovedTab, Session};

pub type Result<T> = std::result::Result<T, SessionError>;
