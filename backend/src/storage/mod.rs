//! # Storage Module
//!
//! Persists the kiosk configuration blob.
//!
//! The domain layer only sees the [`ConfigStorage`] trait; the concrete
//! backend is a single pretty-printed JSON file in the data directory.
//!
//! ```text
//! data/
//! └── config.json    ← weather, calendars, chores (tasks, kids, rotation settings)
//! ```

pub mod error;
pub mod json;
pub mod traits;

pub use error::StorageError;
pub use json::JsonConfigRepository;
pub use traits::ConfigStorage;
