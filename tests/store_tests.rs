use std::time::Duration;

use chrono::NaiveDate;

use scoreboard_sync_lambda::model::GameScore;
use scoreboard_sync_lambda::store::{ScoreStore, SqliteScoreStore};
use scoreboard_sync_lambda::sync::sync_body;

fn knights_game() -> GameScore {
    GameScore {
        game_id: "G1".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 6, 1),
        home_team_name: Some("River City Knights".to_string()),
        visiting_team_name: Some("Lakeside Herons".to_string()),
        home_team_score: Some(3),
        visiting_team_score: Some(1),
        game_status: Some("In Progress".to_string()),
        innings_played: Some(5),
        regulation_innings: Some(9),
        gametime: Some("7:05 PM".to_string()),
        field: Some("Memorial Stadium".to_string()),
        timezone: Some("America/Chicago".to_string()),
    }
}

#[tokio::test]
async fn repeated_upsert_keeps_fields_and_advances_last_updated() {
    let store = SqliteScoreStore::in_memory().await.expect("sqlite");
    let game = knights_game();

    let first = {
        let mut writer = store.acquire().await.expect("acquire");
        writer.upsert(&game).await.expect("first upsert");
        drop(writer);
        store.get("G1").await.expect("get").expect("row exists")
    };

    tokio::time::sleep(Duration::from_millis(5)).await;

    let second = {
        let mut writer = store.acquire().await.expect("acquire");
        writer.upsert(&game).await.expect("second upsert");
        drop(writer);
        store.get("G1").await.expect("get").expect("row exists")
    };

    assert_eq!(first.score, game);
    assert_eq!(second.score, game);
    assert!(second.last_updated > first.last_updated, "{:?} !> {:?}", second.last_updated, first.last_updated);
    assert_eq!(store.count().await.expect("count"), 1);
}

#[tokio::test]
async fn feed_update_overwrites_existing_row_instead_of_duplicating() {
    let store = SqliteScoreStore::in_memory().await.expect("sqlite");
    {
        let mut writer = store.acquire().await.expect("acquire");
        writer.upsert(&knights_game()).await.expect("seed");
    }

    sync_body(r#"{"games": [{"gameid": "G1", "homescore": 5}]}"#, &store).await.expect("sync");

    let stored = store.get("G1").await.expect("get").expect("row exists");
    assert_eq!(stored.score.home_team_score, Some(5));
    // every mutable column is replaced, so fields missing from the feed are now null
    assert_eq!(stored.score.home_team_name, None);
    assert_eq!(stored.score.date, None);
    assert_eq!(store.count().await.expect("count"), 1);
}

#[tokio::test]
async fn missing_feed_fields_are_stored_as_null() {
    let store = SqliteScoreStore::in_memory().await.expect("sqlite");
    let body = r#"{"games": [{"gameid": "G7", "gamedate": "2025-06-07", "homescore": 0, "hometeam": {"teamname": ""}}]}"#;
    sync_body(body, &store).await.expect("sync");

    let stored = store.get("G7").await.expect("get").expect("row exists");
    assert_eq!(stored.score.field, None);
    assert_eq!(stored.score.visiting_team_score, None);
    assert_eq!(stored.score.visiting_team_name, None);
    // explicit values, even zero and empty, pass through untouched
    assert_eq!(stored.score.home_team_score, Some(0));
    assert_eq!(stored.score.home_team_name.as_deref(), Some(""));
    assert_eq!(stored.score.date, NaiveDate::from_ymd_opt(2025, 6, 7));
}

#[tokio::test]
async fn count_starts_at_zero_and_tracks_distinct_games() {
    let store = SqliteScoreStore::in_memory().await.expect("sqlite");
    assert_eq!(store.count().await.expect("count"), 0);

    sync_body(r#"{"games": [{"gameid": "A"}, {"gameid": "B"}, {"gameid": "A"}]}"#, &store).await.expect("sync");
    assert_eq!(store.count().await.expect("count"), 2);
}

#[tokio::test]
async fn full_fixture_round_trips_through_sqlite() {
    let store = SqliteScoreStore::in_memory().await.expect("sqlite");
    sync_body(include_str!("scoreboard_games.json"), &store).await.expect("sync");
    sync_body(include_str!("scoreboard_single.json"), &store).await.expect("sync");

    assert_eq!(store.count().await.expect("count"), 4);
    let stored = store.get("33002").await.expect("get").expect("row exists");
    assert_eq!(stored.score.game_status.as_deref(), Some("Final/10"));
    assert_eq!(stored.score.visiting_team_score, Some(4));
    assert!(store.get("missing").await.expect("get").is_none());
}

#[tokio::test]
async fn sqlite_file_store_persists_across_reopen() {
    let path = std::env::temp_dir().join(format!("scores-{}.db", std::process::id()));
    let path_str = path.to_string_lossy().to_string();
    let _ = std::fs::remove_file(&path);

    {
        let store = SqliteScoreStore::open(&path_str).await.expect("open");
        sync_body(include_str!("scoreboard_single.json"), &store).await.expect("sync");
        store.close().await;
    }

    let reopened = SqliteScoreStore::open(&path_str).await.expect("reopen");
    assert_eq!(reopened.count().await.expect("count"), 1);
    reopened.close().await;
    let _ = std::fs::remove_file(&path);
}
