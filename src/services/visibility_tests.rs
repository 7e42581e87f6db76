#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;

    use crate::api::{GameId, LeagueId, Pick, PickResult, Season, UserId, Week};
    use crate::models::pick::{SessionScope, Side};
    use crate::models::time::unlock_at_for;
    use crate::services::visibility::{is_visible, pick_view, pick_window_open, PickView};

    const OWNER: UserId = UserId(7);
    const OTHER: UserId = UserId(8);

    fn pick_with_unlock(unlock_at: Option<chrono::DateTime<Utc>>) -> Pick {
        let created = Utc.with_ymd_and_hms(2025, 9, 2, 14, 0, 0).unwrap();
        Pick {
            key: SessionScope::new(LeagueId(1), OWNER, Season(2025), Week(3)).key_for(GameId(1)),
            side: Side::Home,
            line_value: -3.5,
            locked: true,
            unlock_at,
            result: Some(PickResult::Win),
            points: Some(1.0),
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_owner_always_sees_own_pick() {
        let unlock = Utc.with_ymd_and_hms(2025, 9, 6, 17, 0, 0).unwrap();
        let pick = pick_with_unlock(Some(unlock));

        assert!(is_visible(&pick, OWNER, unlock - Duration::days(30)));
        assert!(is_visible(&pick, OWNER, unlock + Duration::days(30)));
    }

    #[test]
    fn test_missing_unlock_means_unrestricted() {
        let pick = pick_with_unlock(None);
        let any_time = Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap();
        assert!(is_visible(&pick, OTHER, any_time));
    }

    #[test]
    fn test_non_owner_sees_pick_only_from_unlock() {
        let unlock = Utc.with_ymd_and_hms(2025, 9, 6, 17, 0, 0).unwrap();
        let pick = pick_with_unlock(Some(unlock));

        assert!(!is_visible(&pick, OTHER, unlock - Duration::seconds(1)));
        // The boundary instant itself is visible.
        assert!(is_visible(&pick, OTHER, unlock));
        assert!(is_visible(&pick, OTHER, unlock + Duration::seconds(1)));
    }

    #[test]
    fn test_tuesday_pick_scenario() {
        // Scenario D: pick created Tuesday unlocks the upcoming Saturday at
        // 12:00 in the fixed offset clock (17:00 UTC).
        let tuesday = Utc.with_ymd_and_hms(2025, 9, 2, 15, 0, 0).unwrap();
        let pick = pick_with_unlock(Some(unlock_at_for(tuesday)));

        let wednesday = Utc.with_ymd_and_hms(2025, 9, 3, 15, 0, 0).unwrap();
        assert!(!is_visible(&pick, OTHER, wednesday));

        // Saturday 13:00 in the offset clock is 18:00 UTC.
        let saturday_afternoon = Utc.with_ymd_and_hms(2025, 9, 6, 18, 0, 0).unwrap();
        assert!(is_visible(&pick, OTHER, saturday_afternoon));
    }

    #[test]
    fn test_locked_view_redacts_selection_details() {
        let unlock = Utc.with_ymd_and_hms(2025, 9, 6, 17, 0, 0).unwrap();
        let pick = pick_with_unlock(Some(unlock));
        let before = unlock - Duration::hours(1);

        match pick_view(&pick, OTHER, before) {
            PickView::Locked { unlock_at } => assert_eq!(unlock_at, unlock),
            PickView::Visible { .. } => panic!("pick must be redacted before unlock"),
        }
    }

    #[test]
    fn test_visible_view_carries_selection_details() {
        let unlock = Utc.with_ymd_and_hms(2025, 9, 6, 17, 0, 0).unwrap();
        let pick = pick_with_unlock(Some(unlock));

        match pick_view(&pick, OTHER, unlock) {
            PickView::Visible {
                side,
                line_value,
                result,
                points,
            } => {
                assert_eq!(side, Side::Home);
                assert_eq!(line_value, -3.5);
                assert_eq!(result, Some(PickResult::Win));
                assert_eq!(points, Some(1.0));
            }
            PickView::Locked { .. } => panic!("pick must be visible at unlock"),
        }
    }

    #[test]
    fn test_pick_window_closes_at_kickoff() {
        let kickoff = Utc.with_ymd_and_hms(2025, 9, 6, 19, 30, 0).unwrap();
        assert!(pick_window_open(kickoff, kickoff - Duration::minutes(1)));
        assert!(!pick_window_open(kickoff, kickoff));
        assert!(!pick_window_open(kickoff, kickoff + Duration::minutes(1)));
    }

    proptest! {
        /// P5: for a fixed unlock time, non-owner visibility is exactly
        /// `now >= unlock_at`, and owner visibility holds everywhere.
        #[test]
        fn prop_visibility_is_monotonic(offset_days in -14i64..14) {
            let unlock = Utc.with_ymd_and_hms(2025, 9, 6, 17, 0, 0).unwrap();
            let pick = pick_with_unlock(Some(unlock));
            let now = unlock + Duration::days(offset_days);

            prop_assert_eq!(is_visible(&pick, OTHER, now), now >= unlock);
            prop_assert!(is_visible(&pick, OWNER, now));
        }
    }
}
