//! Date arithmetic for the chore rotation schedule.
//!
//! Weekdays are numbered Sunday-based wherever a number is needed:
//! 0 = Sunday, 1 = Monday, ..., 6 = Saturday. Triggers are local midnights
//! in whatever zone the caller's `DateTime` carries.

use chrono::{
    DateTime, Datelike, Days, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Weekday,
};

/// Days from `weekday` until the next Monday. Never zero: a Monday maps to
/// the Monday one week later. With the Sunday-based index `w` this is 1 for
/// Sunday and `8 - w` otherwise.
pub fn days_until_next_monday(weekday: Weekday) -> u64 {
    match weekday {
        Weekday::Sun => 1,
        Weekday::Mon => 7,
        Weekday::Tue => 6,
        Weekday::Wed => 5,
        Weekday::Thu => 4,
        Weekday::Fri => 3,
        Weekday::Sat => 2,
    }
}

/// First instant of `date` in `tz`.
///
/// Ambiguous midnights resolve to the earlier instant. When a DST jump skips
/// midnight entirely, the first local minute that exists on that date is used.
pub fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => (1..=24 * 60)
            .find_map(|minutes| {
                tz.from_local_datetime(&(midnight + Duration::minutes(minutes)))
                    .earliest()
            })
            .unwrap_or_else(|| tz.from_utc_datetime(&midnight)),
    }
}

/// Local midnight at the start of the calendar day after `now`
pub fn next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let tomorrow = now.date_naive().succ_opt().unwrap_or(NaiveDate::MAX);
    start_of_day(&now.timezone(), tomorrow)
}

/// Local midnight of the next Monday strictly after `now`
pub fn next_monday_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let days = days_until_next_monday(now.weekday());
    let monday = now
        .date_naive()
        .checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX);
    start_of_day(&now.timezone(), monday)
}

/// Whether two instants fall on the same calendar day in `a`'s zone
pub fn is_same_day<Tz: TimeZone, Tz2: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz2>) -> bool {
    a.date_naive() == b.with_timezone(&a.timezone()).date_naive()
}

/// Convert a persisted epoch-millisecond timestamp into `tz`
pub fn instant_from_millis<Tz: TimeZone>(tz: &Tz, millis: i64) -> Option<DateTime<Tz>> {
    tz.timestamp_millis_opt(millis).single()
}
