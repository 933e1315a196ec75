//! Loader pipeline and state integration tests

use mockall::mock;
use serde_json::json;
use std::sync::Arc;
use transporter_core::{
    HostInputs, MemoryStore, NO_PERSISTENCE_SENTINEL, Pattern, PatternSequence,
    PersistenceEngine, RawStore, TransporterError, TransporterOptions, TransporterResult,
    energize,
};

mock! {
    pub Engine {}

    impl PersistenceEngine for Engine {
        fn load(&self) -> TransporterResult<RawStore>;
        fn save(&self, pattern: &Pattern) -> TransporterResult<()>;
    }
}

fn user_pattern() -> Pattern {
    Pattern::builder()
        .sequence(
            "user-firstName",
            PatternSequence::new("User's First Name")
                .with_description("A variable for holding the User's First Name.")
                .with_cli_flags(["f", "fn"]),
        )
        .sequence(
            "user-lastName",
            PatternSequence::new("User's Last Name")
                .with_description("A variable for holding the User's Last Name.")
                .with_cli_flags(["l", "ln"])
                .without_persistence(),
        )
        .sequence(
            "user-age",
            PatternSequence::new("User's Age")
                .with_description("A variable for holding the user's age.")
                .with_cli_flags(["a", "age"])
                .with_env_vars(["AGE"]),
        )
        .build()
        .unwrap()
}

#[test]
fn test_cli_flag_sets_value() {
    let pattern = Pattern::builder()
        .sequence("user-age", PatternSequence::new("Age").with_cli_flags(["age"]))
        .build()
        .unwrap();

    let state = energize(
        pattern,
        TransporterOptions::new(),
        HostInputs::new().with_args(["--age", "21"]),
    )
    .unwrap();
    assert_eq!(state.get("user-age").unwrap(), "21");
}

#[test]
fn test_persisted_value_is_loaded() {
    let store = Arc::new(MemoryStore::new());
    store.insert_raw(
        "user-age",
        json!({"Value": "25", "DisablePersistence": false}),
    );

    let state = energize(
        user_pattern(),
        TransporterOptions::new().with_persistence(store),
        HostInputs::new(),
    )
    .unwrap();
    assert_eq!(state.get("user-age").unwrap(), "25");
}

#[test]
fn test_precedence_store_env_cli() {
    let store = Arc::new(MemoryStore::new());
    store.insert_raw(
        "user-age",
        json!({"Value": "25", "DisablePersistence": false}),
    );

    let state = energize(
        user_pattern(),
        TransporterOptions::new()
            .with_env_prefix("T_")
            .with_persistence(store),
        HostInputs::new()
            .with_env(["T_AGE=30", "PATH=/usr/bin"])
            .with_args(["--age", "21"]),
    )
    .unwrap();
    assert_eq!(state.get("user-age").unwrap(), "21");
}

#[test]
fn test_load_failure_is_not_fatal() {
    let mut engine = MockEngine::new();
    engine
        .expect_load()
        .times(1)
        .returning(|| Err(TransporterError::load("json file does not exist")));

    let state = energize(
        user_pattern(),
        TransporterOptions::new().with_persistence(Arc::new(engine)),
        HostInputs::new().with_args(["--fn", "sean"]),
    )
    .unwrap();
    assert_eq!(state.get("user-firstName").unwrap(), "sean");
    assert_eq!(state.get("user-age").unwrap(), "");
}

#[test]
fn test_materialize_payload_is_redacted() {
    let mut engine = MockEngine::new();
    engine.expect_load().returning(|| Ok(RawStore::new()));
    engine
        .expect_save()
        .times(1)
        .withf(|pattern: &Pattern| {
            pattern.value("user-lastName") == Some(NO_PERSISTENCE_SENTINEL)
                && pattern.value("user-firstName") == Some("sean")
        })
        .returning(|_| Ok(()));

    let state = energize(
        user_pattern(),
        TransporterOptions::new().with_persistence(Arc::new(engine)),
        HostInputs::new().with_args(["--fn", "sean", "--ln", "secret"]),
    )
    .unwrap();
    assert_eq!(state.get("user-lastName").unwrap(), "secret");

    state.materialize().unwrap();
}

#[test]
fn test_save_error_propagates_verbatim() {
    let mut engine = MockEngine::new();
    engine.expect_load().returning(|| Ok(RawStore::new()));
    engine
        .expect_save()
        .times(1)
        .returning(|_| Err(TransporterError::persistence_with_context("disk full", "/tmp/x")));

    let state = energize(
        user_pattern(),
        TransporterOptions::new().with_persistence(Arc::new(engine)),
        HostInputs::new().with_args(["--age", "40"]),
    )
    .unwrap();

    let before = state.stored_snapshot();
    let err = state.materialize().unwrap_err();
    assert_eq!(
        err,
        TransporterError::persistence_with_context("disk full", "/tmp/x")
    );
    // Stored only moves on a successful save
    assert!(Arc::ptr_eq(&before, &state.stored_snapshot()));
}

#[test]
fn test_materialize_then_reload() {
    let store = Arc::new(MemoryStore::new());
    let options = TransporterOptions::new().with_persistence(store.clone());

    let state = energize(
        user_pattern(),
        options.clone(),
        HostInputs::new().with_args(["--f", "sean", "--ln", "test", "--age", "21"]),
    )
    .unwrap();
    state.materialize().unwrap();
    drop(state);

    let reloaded = energize(user_pattern(), options, HostInputs::new()).unwrap();
    assert_eq!(reloaded.get("user-firstName").unwrap(), "sean");
    assert_eq!(reloaded.get("user-age").unwrap(), "21");
    // Persistence-disabled records are never loaded back
    assert_eq!(reloaded.get("user-lastName").unwrap(), "");
    // ...but the stored record itself reads back as the sentinel
    let raw = store.load().unwrap();
    assert_eq!(raw["user-lastName"]["Value"], NO_PERSISTENCE_SENTINEL);
    assert_eq!(raw["user-lastName"]["DisablePersistence"], true);
}

#[test]
fn test_get_absent_key() {
    let state = energize(user_pattern(), TransporterOptions::new(), HostInputs::new()).unwrap();
    assert!(matches!(
        state.get("user-height"),
        Err(TransporterError::NotFound { .. })
    ));
}
