//! Domain models for chore rotation.
use chrono::{DateTime, Local, TimeZone};
use shared::{ChoreConfig, Rotation, RotationSettings, Task};
use std::fmt;

use crate::domain::dates::{next_midnight, next_monday_midnight};

/// A recurrence class the rotation engine schedules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationClass {
    Daily,
    Weekly,
}

impl RotationClass {
    pub const ALL: [RotationClass; 2] = [RotationClass::Daily, RotationClass::Weekly];

    /// The task rotation this class drives
    pub fn rotation(self) -> Rotation {
        match self {
            RotationClass::Daily => Rotation::Daily,
            RotationClass::Weekly => Rotation::Weekly,
        }
    }

    /// Stored next trigger for this class, in epoch millis
    pub fn next_trigger(self, settings: &RotationSettings) -> Option<i64> {
        match self {
            RotationClass::Daily => settings.next_daily_rotation,
            RotationClass::Weekly => settings.next_weekly_rotation,
        }
    }

    pub fn set_next_trigger(self, settings: &mut RotationSettings, millis: i64) {
        match self {
            RotationClass::Daily => settings.next_daily_rotation = Some(millis),
            RotationClass::Weekly => settings.next_weekly_rotation = Some(millis),
        }
    }

    /// The first trigger instant of this class strictly after `now`
    pub fn next_trigger_after<Tz: TimeZone>(self, now: &DateTime<Tz>) -> DateTime<Tz> {
        match self {
            RotationClass::Daily => next_midnight(now),
            RotationClass::Weekly => next_monday_midnight(now),
        }
    }
}

impl fmt::Display for RotationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rotation())
    }
}

/// The `{ tasks, settings }` fragment produced when a rotation fires
#[derive(Debug, Clone, PartialEq)]
pub struct RotationUpdate {
    pub tasks: Vec<Task>,
    pub settings: RotationSettings,
}

impl RotationUpdate {
    /// Merge the fragment into a chore configuration; the roster is untouched
    pub fn apply_to(&self, chores: &mut ChoreConfig) {
        chores.tasks = self.tasks.clone();
        chores.settings = self.settings.clone();
    }
}

/// Snapshot of the schedule as seen by the chore widgets
#[derive(Debug, Clone, PartialEq)]
pub struct RotationStatus {
    pub next_weekly_rotation: Option<DateTime<Local>>,
    pub next_daily_rotation: Option<DateTime<Local>>,
    /// The weekly trigger falls on the calendar day after now
    pub weekly_rotates_tomorrow: bool,
    pub daily_task_count: usize,
    pub weekly_task_count: usize,
}
