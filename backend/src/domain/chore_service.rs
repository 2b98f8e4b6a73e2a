use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use shared::{AppConfig, Kid, Rotation, Task};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

use crate::domain::clock::Clock;
use crate::domain::commands::chores::{ReassignTaskCommand, ReassignTaskResult};
use crate::domain::commands::config::{UpdateConfigCommand, UpdateConfigResult};
use crate::domain::dates::{instant_from_millis, is_same_day, next_midnight};
use crate::domain::error::ChoreError;
use crate::domain::models::rotation::RotationStatus;
use crate::domain::rotation::evaluate_rotation;
use crate::storage::ConfigStorage;

/// Service that owns every read and write of the kiosk configuration.
///
/// Reading the configuration is also what drives chore rotation: each load
/// runs the rotation engine and persists the result when something was due.
/// All load-evaluate-save sequences run under one lock, so two requests
/// arriving in the same due period commit a single rotation.
#[derive(Clone)]
pub struct ChoreService {
    storage: Arc<dyn ConfigStorage>,
    clock: Arc<dyn Clock>,
    write_lock: Arc<Mutex<()>>,
}

impl ChoreService {
    /// Create a new ChoreService
    pub fn new(storage: Arc<dyn ConfigStorage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            clock,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load the configuration and apply any due rotation, returning the
    /// instant it was evaluated at. Caller holds the lock.
    fn load_rotated(&self) -> Result<(AppConfig, DateTime<Local>)> {
        let mut config = self.storage.load_config()?;
        let now = self.clock.now();

        if let Some(update) = evaluate_rotation(&config.chores, &now) {
            self.storage
                .save_rotation(&update)
                .context("Failed to persist chore rotation")?;
            update.apply_to(&mut config.chores);
        }

        Ok((config, now))
    }

    /// Get the current configuration with chores rotated as of now
    pub fn get_config(&self) -> Result<AppConfig> {
        let _guard = self.lock();
        let (config, _) = self.load_rotated()?;
        Ok(config)
    }

    /// Replace the whole configuration
    pub fn update_config(&self, command: UpdateConfigCommand) -> Result<UpdateConfigResult> {
        let mut config = command.config;
        assign_missing_ids(&mut config);
        validate_chores(&config)?;

        let _guard = self.lock();
        self.storage.save_config(&config)?;

        info!(
            "Updated config: {} kids, {} tasks",
            config.chores.kids.len(),
            config.chores.tasks.len()
        );

        Ok(UpdateConfigResult {
            config,
            success_message: "Configuration saved successfully".to_string(),
        })
    }

    /// Hand a task to a specific kid, or clear its assignment.
    ///
    /// Any rotation that is due is committed first, so the manual choice is
    /// what remains until the next trigger.
    pub fn reassign_task(&self, command: ReassignTaskCommand) -> Result<ReassignTaskResult> {
        info!("Reassigning task: {:?}", command);

        let _guard = self.lock();
        let (mut config, _) = self.load_rotated()?;

        if let Some(kid_id) = &command.kid_id {
            if config.chores.kid_index(kid_id).is_none() {
                return Err(ChoreError::KidNotFound(kid_id.clone()).into());
            }
        }

        let task = config
            .chores
            .tasks
            .iter_mut()
            .find(|t| t.id == command.task_id)
            .ok_or_else(|| ChoreError::TaskNotFound(command.task_id.clone()))?;
        task.assigned_to = command.kid_id.clone();
        let task = task.clone();

        self.storage.save_config(&config)?;

        let success_message = match &command.kid_id {
            Some(kid_id) => format!("'{}' is now assigned to {}", task.label, kid_id),
            None => format!("'{}' is now unassigned", task.label),
        };
        info!("{}", success_message);

        Ok(ReassignTaskResult {
            task,
            success_message,
        })
    }

    /// Describe the rotation schedule after applying any due rotation
    pub fn rotation_status(&self) -> Result<RotationStatus> {
        let (config, now) = {
            let _guard = self.lock();
            self.load_rotated()?
        };
        let settings = &config.chores.settings;

        let next_weekly_rotation = settings
            .next_weekly_rotation
            .and_then(|ms| instant_from_millis(&Local, ms));
        let next_daily_rotation = settings
            .next_daily_rotation
            .and_then(|ms| instant_from_millis(&Local, ms));
        let weekly_rotates_tomorrow = next_weekly_rotation
            .map(|next| is_same_day(&next_midnight(&now), &next))
            .unwrap_or(false);

        Ok(RotationStatus {
            next_weekly_rotation,
            next_daily_rotation,
            weekly_rotates_tomorrow,
            daily_task_count: count_rotation(&config.chores.tasks, Rotation::Daily),
            weekly_task_count: count_rotation(&config.chores.tasks, Rotation::Weekly),
        })
    }
}

fn count_rotation(tasks: &[Task], rotation: Rotation) -> usize {
    tasks.iter().filter(|t| t.rotation == rotation).count()
}

/// Give freshly created kids and tasks an ID
fn assign_missing_ids(config: &mut AppConfig) {
    for kid in config.chores.kids.iter_mut().filter(|k| k.id.trim().is_empty()) {
        kid.id = Kid::generate_id();
    }
    for task in config.chores.tasks.iter_mut().filter(|t| t.id.trim().is_empty()) {
        task.id = Task::generate_id();
    }
}

fn validate_chores(config: &AppConfig) -> Result<(), ChoreError> {
    let mut kid_ids = HashSet::new();
    for kid in &config.chores.kids {
        if !kid_ids.insert(kid.id.as_str()) {
            return Err(ChoreError::Invalid(format!("duplicate kid id '{}'", kid.id)));
        }
    }

    let mut task_ids = HashSet::new();
    for task in &config.chores.tasks {
        if !task_ids.insert(task.id.as_str()) {
            return Err(ChoreError::Invalid(format!("duplicate task id '{}'", task.id)));
        }
        if let Some(kid_id) = &task.assigned_to {
            if !kid_ids.contains(kid_id.as_str()) {
                // Allowed: the next rotation hands the task to the first kid
                warn!("Task '{}' is assigned to unknown kid '{}'", task.id, kid_id);
            }
        }
    }

    Ok(())
}
