//! Tabpad Storage Layer
//!
//! Key-value persistence for notepad state. Every key is written on its own;
//! no transaction spans two keys.

mod database;
mod error;
mod memory;
mod migrations;
mod store;

pub use database::Database;
pub use error::StorageError;
pub use memory::MemoryStore;
pub use store::KeyValueStore;

pub type Result<T> = std::result::Result<T, StorageError>;
