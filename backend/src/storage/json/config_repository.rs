//! # JSON Config Repository
//!
//! File-based storage for the kiosk configuration using a single
//! `config.json` at the root of the data directory.
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "weatherLocation": "Berlin",
//!   "enabledCalendars": ["family", "school", "garbage"],
//!   "showSeconds": false,
//!   "schoolNames": [],
//!   "chores": {
//!     "tasks": [
//!       { "id": "t1", "label": "Dishes", "rotation": "weekly", "assignedTo": "1" }
//!     ],
//!     "kids": [{ "id": "1", "name": "Max", "color": "#f97316" }],
//!     "settings": { "nextWeeklyRotation": 1716156000000, "nextDailyRotation": null }
//!   }
//! }
//! ```
//!
//! ## Features
//!
//! - Default config written on first load
//! - Unknown top-level keys survive a load/save round trip
//! - Atomic file writes with temp files

use anyhow::{Context, Result};
use shared::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::domain::models::rotation::RotationUpdate;
use crate::storage::error::StorageError;
use crate::storage::traits::ConfigStorage;

const CONFIG_FILE_NAME: &str = "config.json";

/// JSON-file configuration repository
#[derive(Debug, Clone)]
pub struct JsonConfigRepository {
    base_directory: PathBuf,
}

impl JsonConfigRepository {
    /// Create a repository rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();

        if !base_directory.exists() {
            fs::create_dir_all(&base_directory).map_err(|source| StorageError::Io {
                path: base_directory.clone(),
                source,
            })?;
            info!("Created data directory: {:?}", base_directory);
        }

        Ok(Self { base_directory })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the configuration file
    pub fn config_path(&self) -> PathBuf {
        self.base_directory.join(CONFIG_FILE_NAME)
    }

    /// Load config from file, creating the default if it doesn't exist
    fn load_or_create_config(&self) -> Result<AppConfig> {
        let config_path = self.config_path();

        if config_path.exists() {
            let json_content = fs::read_to_string(&config_path).map_err(|source| StorageError::Io {
                path: config_path.clone(),
                source,
            })?;
            let config: AppConfig =
                serde_json::from_str(&json_content).map_err(|source| StorageError::Parse {
                    path: config_path.clone(),
                    source,
                })?;
            debug!("Loaded config from {:?}", config_path);
            Ok(config)
        } else {
            let config = AppConfig::default();
            self.write_config(&config)?;
            info!("Created default config at {:?}", config_path);
            Ok(config)
        }
    }

    /// Write config to file
    fn write_config(&self, config: &AppConfig) -> Result<()> {
        let config_path = self.config_path();
        let json_content = serde_json::to_string_pretty(config).map_err(StorageError::Serialize)?;

        // Write to a temp file first, then rename over the real one
        let temp_path = config_path.with_extension("tmp");
        fs::write(&temp_path, json_content).map_err(|source| StorageError::Io {
            path: temp_path.clone(),
            source,
        })?;
        fs::rename(&temp_path, &config_path).map_err(|source| StorageError::Io {
            path: config_path.clone(),
            source,
        })?;

        debug!("Saved config to {:?}", config_path);
        Ok(())
    }
}

impl ConfigStorage for JsonConfigRepository {
    fn load_config(&self) -> Result<AppConfig> {
        self.load_or_create_config()
    }

    fn save_config(&self, config: &AppConfig) -> Result<()> {
        self.write_config(config)?;
        info!(
            "Saved config with {} tasks and {} kids",
            config.chores.tasks.len(),
            config.chores.kids.len()
        );
        Ok(())
    }

    fn save_rotation(&self, update: &RotationUpdate) -> Result<()> {
        let mut config = self
            .load_or_create_config()
            .context("Failed to load config before saving rotation")?;
        update.apply_to(&mut config.chores);
        self.write_config(&config)
            .context("Failed to save rotated chores")?;
        info!("Saved rotated chores ({} tasks)", update.tasks.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::{Kid, Rotation, RotationSettings, Task};
    use tempfile::TempDir;

    fn setup_test_repo() -> (JsonConfigRepository, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo = JsonConfigRepository::new(temp_dir.path()).expect("Failed to create repository");
        (repo, temp_dir)
    }

    fn sample_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.weather_location = "Hamburg".to_string();
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
                photo: Some("moritz.jpg".to_string()),
            },
        ];
        config.chores.tasks = vec![Task {
            id: "t1".to_string(),
            label: "Dishes".to_string(),
            icon: "utensils".to_string(),
            description: Some("Load and empty the dishwasher".to_string()),
            rotation: Rotation::Weekly,
            assigned_to: Some("1".to_string()),
        }];
        config
    }

    #[test]
    fn test_load_creates_default() {
        let (repo, _temp_dir) = setup_test_repo();
        assert!(!repo.config_path().exists());

        let config = repo.load_config().unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(repo.config_path().exists());
    }

    #[test]
    fn test_new_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("kiosk").join("data");

        let repo = JsonConfigRepository::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(repo.base_directory(), nested.as_path());
    }

    #[test]
    fn test_save_and_reload() {
        let (repo, temp_dir) = setup_test_repo();
        let config = sample_config();
        repo.save_config(&config).unwrap();

        // A fresh repository instance sees the same data (simulating a restart)
        let repo2 = JsonConfigRepository::new(temp_dir.path()).unwrap();
        assert_eq!(repo2.load_config().unwrap(), config);
        assert!(!repo.config_path().with_extension("tmp").exists());
    }

    #[test]
    fn test_file_uses_camel_case_keys() {
        let (repo, _temp_dir) = setup_test_repo();
        repo.save_config(&sample_config()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(repo.config_path()).unwrap()).unwrap();
        assert_eq!(raw["weatherLocation"], "Hamburg");
        assert_eq!(raw["chores"]["tasks"][0]["assignedTo"], "1");
        assert!(raw["chores"]["settings"]["nextWeeklyRotation"].is_null());
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let (repo, _temp_dir) = setup_test_repo();
        let raw = json!({
            "weatherLocation": "Berlin",
            "google": { "selectedCalendars": ["family@group.calendar.google.com"] }
        });
        fs::write(repo.config_path(), raw.to_string()).unwrap();

        let config = repo.load_config().unwrap();
        repo.save_config(&config).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(repo.config_path()).unwrap()).unwrap();
        assert_eq!(
            saved["google"]["selectedCalendars"][0],
            "family@group.calendar.google.com"
        );
    }

    #[test]
    fn test_save_rotation_keeps_roster_and_other_settings() {
        let (repo, _temp_dir) = setup_test_repo();
        let config = sample_config();
        repo.save_config(&config).unwrap();

        let mut tasks = config.chores.tasks.clone();
        tasks[0].assigned_to = Some("2".to_string());
        let update = RotationUpdate {
            tasks,
            settings: RotationSettings {
                next_weekly_rotation: Some(1_716_156_000_000),
                next_daily_rotation: None,
            },
        };
        repo.save_rotation(&update).unwrap();

        let reloaded = repo.load_config().unwrap();
        assert_eq!(reloaded.chores.tasks[0].assigned_to.as_deref(), Some("2"));
        assert_eq!(reloaded.chores.settings.next_weekly_rotation, Some(1_716_156_000_000));
        assert_eq!(reloaded.chores.kids, config.chores.kids);
        assert_eq!(reloaded.weather_location, "Hamburg");
    }

    #[test]
    fn test_malformed_file_reports_parse_error() {
        let (repo, _temp_dir) = setup_test_repo();
        fs::write(repo.config_path(), "{ not json").unwrap();

        let err = repo.load_config().unwrap_err();
        match err.downcast_ref::<StorageError>() {
            Some(StorageError::Parse { path, .. }) => assert_eq!(path, &repo.config_path()),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }
}
