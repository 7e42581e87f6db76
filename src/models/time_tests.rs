#[cfg(test)]
mod tests {
    use crate::models::time::unlock_at_for;
    use chrono::{TimeZone, Utc};

    // Saturday 12:00 in the fixed UTC-5 clock is 17:00 UTC.

    #[test]
    fn test_tuesday_unlocks_upcoming_saturday() {
        // 2025-09-02 is a Tuesday.
        let now = Utc.with_ymd_and_hms(2025, 9, 2, 14, 30, 0).unwrap();
        let unlock = unlock_at_for(now);
        assert_eq!(unlock, Utc.with_ymd_and_hms(2025, 9, 6, 17, 0, 0).unwrap());
    }

    #[test]
    fn test_sunday_starts_a_new_week() {
        // 2025-08-31 is a Sunday; its week ends Saturday 2025-09-06.
        let now = Utc.with_ymd_and_hms(2025, 8, 31, 18, 0, 0).unwrap();
        let unlock = unlock_at_for(now);
        assert_eq!(unlock, Utc.with_ymd_and_hms(2025, 9, 6, 17, 0, 0).unwrap());
    }

    #[test]
    fn test_saturday_morning_unlocks_same_day() {
        // 2025-09-06 is a Saturday; 15:00 UTC is 10:00 in the offset clock.
        let now = Utc.with_ymd_and_hms(2025, 9, 6, 15, 0, 0).unwrap();
        let unlock = unlock_at_for(now);
        assert_eq!(unlock, Utc.with_ymd_and_hms(2025, 9, 6, 17, 0, 0).unwrap());
        assert!(unlock > now);
    }

    #[test]
    fn test_saturday_afternoon_unlock_already_past() {
        // 18:00 UTC Saturday is 13:00 in the offset clock; the unlock moment
        // for that week has already passed, so the pick is visible at once.
        let now = Utc.with_ymd_and_hms(2025, 9, 6, 18, 0, 0).unwrap();
        let unlock = unlock_at_for(now);
        assert_eq!(unlock, Utc.with_ymd_and_hms(2025, 9, 6, 17, 0, 0).unwrap());
        assert!(unlock <= now);
    }

    #[test]
    fn test_week_boundary_respects_offset_clock() {
        // 02:00 UTC Sunday is still 21:00 Saturday in the offset clock, so
        // the pick belongs to the week that just ended.
        let now = Utc.with_ymd_and_hms(2025, 9, 7, 2, 0, 0).unwrap();
        let unlock = unlock_at_for(now);
        assert_eq!(unlock, Utc.with_ymd_and_hms(2025, 9, 6, 17, 0, 0).unwrap());
    }

    #[test]
    fn test_fixed_offset_holds_across_dst_boundary() {
        // US DST ends 2025-11-02. The fixed UTC-5 clock keeps the unlock
        // instant at 17:00 UTC on both sides of the boundary.
        let before = Utc.with_ymd_and_hms(2025, 10, 28, 12, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 11, 4, 12, 0, 0).unwrap();
        assert_eq!(
            unlock_at_for(before),
            Utc.with_ymd_and_hms(2025, 11, 1, 17, 0, 0).unwrap()
        );
        assert_eq!(
            unlock_at_for(after),
            Utc.with_ymd_and_hms(2025, 11, 8, 17, 0, 0).unwrap()
        );
    }
}
