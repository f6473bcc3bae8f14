use coffeehouse::{
    persistence::{PreferencesStore, SnapshotStore},
    state::{AppState, Preferences},
    ClockState, Player, RunState,
};

#[tokio::test]
async fn missing_files_load_as_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let snapshots = SnapshotStore::new(dir.path().join("state.json"));
    let prefs = PreferencesStore::new(dir.path().join("prefs.json"));

    assert!(snapshots.load().await.unwrap().is_none());
    assert_eq!(prefs.load().await, Preferences::default());
}

#[tokio::test]
async fn snapshot_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("nested").join("state.json"));

    let first = AppState::new(Preferences::default()).unwrap();
    first.start(Player::Player1).unwrap();
    first.swap().unwrap();
    let saved = first.snapshot().unwrap();
    store.save(&saved).await.unwrap();

    let loaded = store.load().await.unwrap().unwrap();
    assert_eq!(loaded.clock, saved);

    let second = AppState::new(Preferences::default()).unwrap();
    let view = second.restore_paused(loaded.clock).unwrap();
    assert_eq!(view.run_state, RunState::Paused);
    let view = second.resume().unwrap();
    assert_eq!(view.active_player, Some(Player::Player2));
}

#[tokio::test]
async fn snapshot_file_uses_documented_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    SnapshotStore::new(&path).save(&ClockState::default()).await.unwrap();

    let json: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(json["player1RemainingMs"], 600_000);
    assert_eq!(json["player2RemainingMs"], 600_000);
    assert_eq!(json["runState"], "notStarted");
    assert_eq!(json["baseDurationMs"], 600_000);
    assert_eq!(json["incrementMs"], 5_000);
    assert!(json["activePlayer"].is_null());
    assert!(json["savedAt"].is_string());
}

#[tokio::test]
async fn corrupt_snapshot_is_rejected_on_restore() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(
        &path,
        r#"{
            "savedAt": "2025-01-16T12:00:00Z",
            "player1RemainingMs": 1000,
            "player2RemainingMs": 1000,
            "activePlayer": null,
            "runState": "running",
            "baseDurationMs": 600000,
            "incrementMs": 5000
        }"#,
    )
    .unwrap();

    let loaded = SnapshotStore::new(&path).load().await.unwrap().unwrap();
    let state = AppState::new(Preferences::default()).unwrap();
    assert!(state.restore(loaded.clock).is_err());
    assert_eq!(state.snapshot().unwrap(), ClockState::default());
}

#[tokio::test]
async fn invalid_preferences_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    std::fs::write(&path, "not json").unwrap();
    assert_eq!(PreferencesStore::new(&path).load().await, Preferences::default());

    std::fs::write(&path, r#"{"isDarkMode": false, "minutes": 500, "incrementSeconds": 2}"#).unwrap();
    assert_eq!(
        PreferencesStore::new(&path).load().await,
        Preferences {
            is_dark_mode: false,
            minutes: 10,
            increment_seconds: 2,
        }
    );

    let custom = Preferences {
        is_dark_mode: false,
        minutes: 30,
        increment_seconds: 0,
    };
    PreferencesStore::new(&path).save(&custom).await.unwrap();
    assert_eq!(PreferencesStore::new(&path).load().await, custom);
}
