//! Chore rotation engine.
//!
//! Decides from the persisted next-trigger timestamps and the current instant
//! whether daily and weekly chores pass to the next kid in the roster. The
//! engine is pure: it borrows the configuration, never reads a clock and
//! returns a fresh `{ tasks, settings }` fragment only when something changed.
//!
//! ## Rules
//!
//! - Fewer than two kids, or no tasks at all: nothing happens.
//! - Each class (daily, weekly) is checked on its own and both may fire in
//!   the same call. A class with no tasks is skipped and its timestamp is
//!   neither read nor written.
//! - A class is due when its timestamp is unset or `now >= timestamp`.
//! - Firing moves every task of that class one place along the roster,
//!   wrapping at the end. Unassigned tasks and tasks held by a kid who has
//!   left the roster go to the first kid.
//! - The new trigger is stored as an absolute instant (next local midnight,
//!   or next Monday's local midnight), so restarts never retrigger a period.

use chrono::{DateTime, TimeZone};
use shared::{ChoreConfig, Kid};
use tracing::{debug, info};

use crate::domain::models::rotation::{RotationClass, RotationUpdate};

/// Minimum roster size for a rotation to make sense
pub const MIN_ROSTER_SIZE: usize = 2;

/// Evaluate both rotation classes at `now`.
///
/// Returns `None` when nothing is due, which callers use to skip persisting.
pub fn evaluate_rotation<Tz: TimeZone>(
    chores: &ChoreConfig,
    now: &DateTime<Tz>,
) -> Option<RotationUpdate> {
    if chores.kids.len() < MIN_ROSTER_SIZE {
        debug!(kids = chores.kids.len(), "Roster too small to rotate chores");
        return None;
    }
    if chores.tasks.is_empty() {
        return None;
    }

    let now_millis = now.timestamp_millis();
    let mut tasks = chores.tasks.clone();
    let mut settings = chores.settings.clone();
    let mut updated = false;

    for class in RotationClass::ALL {
        let rotation = class.rotation();
        if !tasks.iter().any(|t| t.rotation == rotation) {
            continue;
        }

        let next_trigger = class.next_trigger(&settings);
        if !is_due(next_trigger, now_millis) {
            debug!(%class, next_trigger, now_millis, "Rotation not due yet");
            continue;
        }

        let mut rotated = 0usize;
        for task in tasks.iter_mut().filter(|t| t.rotation == rotation) {
            let next_holder = next_assignee(task.assigned_to.as_deref(), &chores.kids);
            debug!(
                task = %task.id,
                from = task.assigned_to.as_deref().unwrap_or("-"),
                to = %next_holder,
                "Rotating chore"
            );
            task.assigned_to = Some(next_holder);
            rotated += 1;
        }

        let next = class.next_trigger_after(now);
        class.set_next_trigger(&mut settings, next.timestamp_millis());
        info!(
            %class,
            rotated,
            next_rotation = %next.naive_local(),
            "Rotated chores"
        );
        updated = true;
    }

    updated.then(|| RotationUpdate { tasks, settings })
}

/// A class is due when it never ran or its trigger instant has been reached
pub fn is_due(next_trigger: Option<i64>, now_millis: i64) -> bool {
    match next_trigger {
        Some(trigger) => now_millis >= trigger,
        None => true,
    }
}

/// Round-robin successor of `current` in `kids`.
///
/// Unknown or missing holders restart at the head of the roster. `kids` must
/// not be empty.
fn next_assignee(current: Option<&str>, kids: &[Kid]) -> String {
    let position = current.and_then(|id| kids.iter().position(|k| k.id == id));
    let index = match position {
        Some(i) => (i + 1) % kids.len(),
        None => 0,
    };
    kids[index].id.clone()
}
