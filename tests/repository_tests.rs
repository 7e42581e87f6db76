//! Local repository semantics: upsert keying, delete preconditions, and
//! configuration validation at the boundary.

use chrono::{TimeZone, Utc};
use pickem_rust::api::{GameId, LeagueId, Pick, PickWriteRequest, Season, Side, UserId, Week};
use pickem_rust::db::repositories::LocalRepository;
use pickem_rust::db::repository::{PickRepository, RepositoryError};
use pickem_rust::models::league::LeagueConfig;
use pickem_rust::models::pick::{PickResult, SessionScope};

fn scope() -> SessionScope {
    SessionScope::new(LeagueId(5), UserId(1), Season(2025), Week(1))
}

fn write_request(game: i64, side: Side, line_value: f64) -> PickWriteRequest {
    PickWriteRequest::new(
        scope().key_for(GameId(game)),
        side,
        line_value,
        Utc.with_ymd_and_hms(2025, 9, 6, 17, 0, 0).unwrap(),
    )
}

#[tokio::test]
async fn upsert_overwrites_on_composite_key() {
    let repo = LocalRepository::new();

    repo.upsert_picks(&[write_request(1, Side::Home, -3.0)])
        .await
        .unwrap();
    repo.upsert_picks(&[write_request(1, Side::Away, 3.0)])
        .await
        .unwrap();

    assert_eq!(repo.pick_count(), 1);
    let pick = repo.pick(&scope().key_for(GameId(1))).unwrap();
    assert_eq!(pick.side, Side::Away);
    assert_eq!(pick.line_value, 3.0);
}

#[tokio::test]
async fn upsert_preserves_creation_timestamp() {
    let repo = LocalRepository::new();

    repo.upsert_picks(&[write_request(1, Side::Home, -3.0)])
        .await
        .unwrap();
    let created_at = repo.pick(&scope().key_for(GameId(1))).unwrap().created_at;

    repo.upsert_picks(&[write_request(1, Side::Away, 3.0)])
        .await
        .unwrap();
    let pick = repo.pick(&scope().key_for(GameId(1))).unwrap();
    assert_eq!(pick.created_at, created_at);
    assert!(pick.updated_at >= created_at);
}

#[tokio::test]
async fn upsert_rejects_non_finite_lines_atomically() {
    let repo = LocalRepository::new();
    let batch = vec![
        write_request(1, Side::Home, -3.0),
        write_request(2, Side::Away, f64::NAN),
    ];

    let err = repo.upsert_picks(&batch).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
    // The valid half of the batch must not have been written.
    assert_eq!(repo.pick_count(), 0);
}

#[tokio::test]
async fn fetch_scopes_by_week_and_orders_by_game() {
    let repo = LocalRepository::new();
    repo.upsert_picks(&[
        write_request(7, Side::Home, -1.0),
        write_request(2, Side::Home, -2.0),
    ])
    .await
    .unwrap();

    let other_scope = SessionScope::new(LeagueId(5), UserId(1), Season(2025), Week(2));
    repo.upsert_picks(&[PickWriteRequest::new(
        other_scope.key_for(GameId(2)),
        Side::Away,
        2.0,
        Utc.with_ymd_and_hms(2025, 9, 13, 17, 0, 0).unwrap(),
    )])
    .await
    .unwrap();

    let picks = repo.fetch_durable_picks(&scope()).await.unwrap();
    let games: Vec<GameId> = picks.iter().map(|p| p.key.game).collect();
    assert_eq!(games, vec![GameId(2), GameId(7)]);
}

#[tokio::test]
async fn delete_refuses_locked_and_graded_picks() {
    let repo = LocalRepository::new();
    let now = Utc::now();
    let base = Pick {
        key: scope().key_for(GameId(1)),
        side: Side::Home,
        line_value: -3.0,
        locked: false,
        unlock_at: None,
        result: None,
        points: None,
        created_at: now,
        updated_at: now,
    };

    let locked = Pick {
        key: scope().key_for(GameId(2)),
        locked: true,
        ..base.clone()
    };
    let graded = Pick {
        key: scope().key_for(GameId(3)),
        result: Some(PickResult::Loss),
        points: Some(0.0),
        ..base.clone()
    };
    repo.seed_pick(base.clone());
    repo.seed_pick(locked);
    repo.seed_pick(graded);

    assert!(repo.delete_pick(&scope().key_for(GameId(1))).await.is_ok());
    assert!(matches!(
        repo.delete_pick(&scope().key_for(GameId(2))).await,
        Err(RepositoryError::ValidationError { .. })
    ));
    assert!(matches!(
        repo.delete_pick(&scope().key_for(GameId(3))).await,
        Err(RepositoryError::ValidationError { .. })
    ));
    assert!(matches!(
        repo.delete_pick(&scope().key_for(GameId(99))).await,
        Err(RepositoryError::NotFound { .. })
    ));
    assert_eq!(repo.pick_count(), 2);
}

#[tokio::test]
async fn league_config_is_validated_at_the_boundary() {
    let repo = LocalRepository::new();

    assert!(matches!(
        repo.fetch_league_config(LeagueId(5)).await,
        Err(RepositoryError::NotFound { .. })
    ));

    repo.insert_league_config(
        LeagueId(5),
        LeagueConfig {
            pick_limit: 0,
            ..Default::default()
        },
    );
    assert!(matches!(
        repo.fetch_league_config(LeagueId(5)).await,
        Err(RepositoryError::ValidationError { .. })
    ));

    repo.insert_league_config(LeagueId(5), LeagueConfig::default());
    let config = repo.fetch_league_config(LeagueId(5)).await.unwrap();
    assert_eq!(config.pick_limit, 5);
}

#[tokio::test]
async fn seeding_from_json_round_trips_through_fetch() {
    let repo = LocalRepository::new();
    let json = r#"[
        {
            "key": {"league": 5, "user": 1, "season": 2025, "week": 1, "game": 4},
            "side": "HOME",
            "line_value": -4.5,
            "locked": false,
            "unlock_at": "2025-09-06T17:00:00Z",
            "result": null,
            "points": null,
            "created_at": "2025-09-02T14:00:00Z",
            "updated_at": "2025-09-02T14:00:00Z"
        }
    ]"#;

    assert_eq!(repo.seed_picks_json(json).unwrap(), 1);
    let picks = repo.fetch_durable_picks(&scope()).await.unwrap();
    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0].side, Side::Home);

    assert!(matches!(
        repo.seed_picks_json("not json"),
        Err(RepositoryError::ValidationError { .. })
    ));
}
