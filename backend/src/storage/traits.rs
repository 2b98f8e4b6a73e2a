//! # Storage Traits
//!
//! Abstraction over where the kiosk configuration lives, so the chore
//! service can run against the JSON file in production and a temp
//! directory in tests.

use anyhow::Result;
use shared::AppConfig;

use crate::domain::models::rotation::RotationUpdate;

pub trait ConfigStorage: Send + Sync {
    /// Load the configuration, creating the default one on first use
    fn load_config(&self) -> Result<AppConfig>;

    /// Replace the whole configuration
    fn save_config(&self, config: &AppConfig) -> Result<()>;

    /// Persist a rotation fragment: tasks and rotation settings are replaced,
    /// the roster and every other key are left as stored
    fn save_rotation(&self, update: &RotationUpdate) -> Result<()>;
}
