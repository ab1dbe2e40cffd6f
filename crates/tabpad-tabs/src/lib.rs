//! Tabpad Tabs
//!
//! A tab is one independently persisted document: an id, a title and the
//! full text. Several tabs share a single editing surface.

mod ids;
mod tab;
mod title;

pub use ids::TabIds;
pub use tab::{Tab, TabId};
pub use title::{heading_title, UNTITLED};
