use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A household member who can hold chores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kid {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// CSS color used by the chore widgets
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Kid {
    /// Mint a fresh kid ID
    pub fn generate_id() -> String {
        format!("kid::{}", uuid::Uuid::new_v4())
    }
}

/// How often a chore changes hands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    /// Rotates at local midnight every day
    Daily,
    /// Rotates at local midnight between Sunday and Monday
    Weekly,
    /// Stays with whoever holds it until reassigned by hand
    #[default]
    #[serde(rename = "none")]
    Never,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Daily => write!(f, "daily"),
            Rotation::Weekly => write!(f, "weekly"),
            Rotation::Never => write!(f, "none"),
        }
    }
}

/// A recurring household chore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub label: String,
    /// Icon name rendered by the chore widget
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub rotation: Rotation,
    /// Kid ID of the current holder; may point at a kid that no longer exists
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl Task {
    /// Mint a fresh task ID
    pub fn generate_id() -> String {
        format!("task::{}", uuid::Uuid::new_v4())
    }
}

/// Persisted rotation schedule.
///
/// Both fields are absolute instants in epoch milliseconds. `None` means the
/// class has never rotated and is due immediately.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationSettings {
    #[serde(default)]
    pub next_weekly_rotation: Option<i64>,
    #[serde(default)]
    pub next_daily_rotation: Option<i64>,
}

/// The chores section of the kiosk configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoreConfig {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub kids: Vec<Kid>,
    #[serde(default)]
    pub settings: RotationSettings,
}

impl ChoreConfig {
    /// Position of a kid in the roster
    pub fn kid_index(&self, kid_id: &str) -> Option<usize> {
        self.kids.iter().position(|k| k.id == kid_id)
    }

    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }
}

/// The whole kiosk configuration blob as stored on disk and served to the UI.
///
/// Keys the server does not model are kept in `extra` so that a round trip
/// through the server never drops settings owned by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub weather_location: String,
    pub enabled_calendars: Vec<String>,
    pub show_seconds: bool,
    pub school_names: Vec<String>,
    pub chores: ChoreConfig,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            weather_location: "Berlin".to_string(),
            enabled_calendars: vec![
                "family".to_string(),
                "school".to_string(),
                "garbage".to_string(),
            ],
            show_seconds: false,
            school_names: Vec::new(),
            chores: ChoreConfig::default(),
            extra: Map::new(),
        }
    }
}

/// Response after replacing the configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConfigResponse {
    pub config: AppConfig,
    pub success_message: String,
}

/// Request for handing a chore to a specific kid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReassignTaskRequest {
    pub task_id: String,
    /// `None` clears the assignment
    pub kid_id: Option<String>,
}

/// Response after a manual reassignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReassignTaskResponse {
    pub task: Task,
    pub success_message: String,
}

/// Snapshot of the rotation schedule for the chore widgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationStatusResponse {
    pub next_weekly_rotation: Option<i64>,
    pub next_daily_rotation: Option<i64>,
    /// RFC 3339 rendering of `next_weekly_rotation` in server local time
    pub next_weekly_rotation_at: Option<String>,
    /// RFC 3339 rendering of `next_daily_rotation` in server local time
    pub next_daily_rotation_at: Option<String>,
    pub weekly_rotates_tomorrow: bool,
    pub daily_task_count: usize,
    pub weekly_task_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
