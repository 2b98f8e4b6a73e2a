//! Test environment with automatic cleanup.
//!
//! The temp directory lives as long as the environment, so the config file
//! disappears even if a test panics.

use chrono::{DateTime, Local, TimeZone};
use shared::{AppConfig, Kid, Rotation, Task};
use std::sync::Arc;
use tempfile::TempDir;

use crate::domain::FixedClock;
use crate::storage::{ConfigStorage, JsonConfigRepository};
use crate::AppState;

pub struct TestEnvironment {
    _temp_dir: TempDir,
    pub repo: Arc<JsonConfigRepository>,
    pub clock: FixedClock,
    pub state: AppState,
}

impl TestEnvironment {
    /// Empty data directory, clock fixed at Wednesday 2024-05-15 10:00 local
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = JsonConfigRepository::new(temp_dir.path()).expect("Failed to create repo");
        let repo = Arc::new(repo);
        let clock = FixedClock::new(wednesday_morning());
        let state = AppState::new(repo.clone(), Arc::new(clock.clone()));

        Self {
            _temp_dir: temp_dir,
            repo,
            clock,
            state,
        }
    }

    /// Environment pre-seeded with [`family_config`]
    pub fn with_family() -> Self {
        let env = Self::new();
        env.repo
            .save_config(&family_config())
            .expect("Failed to seed config");
        env
    }
}

pub fn wednesday_morning() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 5, 15, 10, 0, 0)
        .single()
        .expect("valid local time")
}

/// Two kids, one weekly, one daily and one fixed chore, no rotation yet
pub fn family_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.chores.kids = vec![
        Kid {
            id: "1".to_string(),
            name: "Max".to_string(),
            color: "#f97316".to_string(),
            photo: None,
        },
        Kid {
            id: "2".to_string(),
            name: "Moritz".to_string(),
            color: "#22c55e".to_string(),
            photo: None,
        },
    ];
    config.chores.tasks = vec![
        Task {
            id: "dishes".to_string(),
            label: "Dishes".to_string(),
            icon: "utensils".to_string(),
            description: None,
            rotation: Rotation::Weekly,
            assigned_to: Some("1".to_string()),
        },
        Task {
            id: "trash".to_string(),
            label: "Trash".to_string(),
            icon: "trash".to_string(),
            description: Some("Take the bins out".to_string()),
            rotation: Rotation::Daily,
            assigned_to: Some("2".to_string()),
        },
        Task {
            id: "plants".to_string(),
            label: "Plants".to_string(),
            icon: "leaf".to_string(),
            description: None,
            rotation: Rotation::Never,
            assigned_to: Some("1".to_string()),
        },
    ];
    config
}
