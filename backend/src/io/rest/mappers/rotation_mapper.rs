//! Mapper for converting the rotation status domain model into its shared DTO.

use crate::domain::models::rotation::RotationStatus;
use shared::RotationStatusResponse;

pub struct RotationMapper;

impl RotationMapper {
    pub fn to_dto(domain: RotationStatus) -> RotationStatusResponse {
        RotationStatusResponse {
            next_weekly_rotation: domain.next_weekly_rotation.map(|dt| dt.timestamp_millis()),
            next_daily_rotation: domain.next_daily_rotation.map(|dt| dt.timestamp_millis()),
            next_weekly_rotation_at: domain.next_weekly_rotation.map(|dt| dt.to_rfc3339()),
            next_daily_rotation_at: domain.next_daily_rotation.map(|dt| dt.to_rfc3339()),
            weekly_rotates_tomorrow: domain.weekly_rotates_tomorrow,
            daily_task_count: domain.daily_task_count,
            weekly_task_count: domain.weekly_task_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_to_dto() {
        let monday = Local.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap();
        let status = RotationStatus {
            next_weekly_rotation: Some(monday),
            next_daily_rotation: None,
            weekly_rotates_tomorrow: true,
            daily_task_count: 0,
            weekly_task_count: 2,
        };

        let dto = RotationMapper::to_dto(status);
        assert_eq!(dto.next_weekly_rotation, Some(monday.timestamp_millis()));
        assert_eq!(dto.next_weekly_rotation_at, Some(monday.to_rfc3339()));
        assert_eq!(dto.next_daily_rotation, None);
        assert_eq!(dto.next_daily_rotation_at, None);
        assert!(dto.weekly_rotates_tomorrow);
        assert_eq!(dto.weekly_task_count, 2);
    }
}
