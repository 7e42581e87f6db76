//! Unlock-time computation.
//!
//! Picks stay hidden from other league members until Saturday noon of the
//! week they were made in. The reference clock is a fixed UTC−5 offset that
//! approximates US Eastern Time; this reproduces the original product
//! behavior, including across the October/November DST boundary. The offset
//! and the rule live here so a switch to a tz-aware calculation is a
//! one-site change.

use chrono::{DateTime, Datelike, Duration, FixedOffset, TimeZone, Utc, Weekday};

/// Fixed hour shift approximating US Eastern Time.
pub const EASTERN_OFFSET_HOURS: i32 = 5;

/// Hour of day (in the offset clock) at which picks unlock.
pub const UNLOCK_HOUR: u32 = 12;

fn eastern_offset() -> FixedOffset {
    // Constant is always in range for FixedOffset.
    FixedOffset::west_opt(EASTERN_OFFSET_HOURS * 3600).unwrap()
}

/// Compute the visibility-unlock timestamp for a pick created at `now`.
///
/// Returns the Saturday at 12:00 (in the fixed offset clock) of the
/// Sunday-first calendar week containing `now`. Saturday is the last day of
/// that week, so the result is always on the same day as or after `now`;
/// a pick made on Saturday afternoon unlocks immediately.
pub fn unlock_at_for(now: DateTime<Utc>) -> DateTime<Utc> {
    let offset = eastern_offset();
    let local = now.with_timezone(&offset);

    let days_to_saturday = (Weekday::Sat.num_days_from_sunday()
        - local.weekday().num_days_from_sunday()) as i64;
    let saturday = local.date_naive() + Duration::days(days_to_saturday);

    // Both constructions are infallible: noon exists on every date and a
    // fixed offset maps local times one-to-one.
    let noon = saturday.and_hms_opt(UNLOCK_HOUR, 0, 0).unwrap();
    offset
        .from_local_datetime(&noon)
        .single()
        .unwrap()
        .with_timezone(&Utc)
}
