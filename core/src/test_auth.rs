use crate::store::AUTH_STATE_KEY;
use crate::{
    AdminCredentials, App, AppError, Gate, KvStore, MemoryStore, PrivilegedAction,
    StaticCredentials,
};

fn verifier() -> Box<StaticCredentials> {
    Box::new(StaticCredentials::new("admin", "200817"))
}

fn setup() -> App<MemoryStore> {
    App::init(MemoryStore::new(), verifier())
}

fn creds(username: &str, password: &str) -> AdminCredentials {
    AdminCredentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn test_login_with_matching_pair_enters_admin() {
    let mut app = setup();
    assert!(app.login(&creds("admin", "200817")).unwrap());
    assert!(app.auth().is_authenticated);
    assert!(app.auth().is_admin);
}

#[test]
fn test_login_with_wrong_password_stays_anonymous() {
    let mut app = setup();
    assert!(!app.login(&creds("admin", "wrong")).unwrap());
    assert!(!app.auth().is_authenticated);
    assert!(!app.auth().is_admin);

    // Nothing was persisted for the failed attempt.
    let store = app.into_store();
    assert!(store.get(AUTH_STATE_KEY).is_none());
}

#[test]
fn test_login_persists_session_for_restore() {
    let mut app = setup();
    assert!(app.login(&creds("admin", "200817")).unwrap());

    let raw = app.into_store().get(AUTH_STATE_KEY).unwrap();
    assert_eq!(raw, r#"{"isAuthenticated":true,"isAdmin":true}"#);
}

#[test]
fn test_restore_resumes_admin_session() {
    let mut app = setup();
    assert!(app.login(&creds("admin", "200817")).unwrap());

    let resumed = App::init(app.into_store(), verifier());
    assert!(resumed.auth().is_admin);
}

#[test]
fn test_logout_clears_state_and_store() {
    let mut app = setup();
    assert!(app.login(&creds("admin", "200817")).unwrap());

    app.logout();
    assert!(!app.auth().is_admin);

    // Idempotent from Anonymous.
    app.logout();
    assert!(!app.auth().is_authenticated);

    let store = app.into_store();
    assert!(store.get(AUTH_STATE_KEY).is_none());
}

#[test]
fn test_restore_clears_malformed_auth_state() {
    let mut store = MemoryStore::new();
    store.set(AUTH_STATE_KEY, "{not json at all").unwrap();

    let app = App::init(store, verifier());
    assert!(!app.auth().is_authenticated);
    assert!(!app.auth().is_admin);

    // The corrupt entry was cleared, not left to fail again next start.
    assert!(app.into_store().get(AUTH_STATE_KEY).is_none());
}

#[test]
fn test_adjust_requires_admin() {
    let mut app = setup();
    let err = app
        .adjust_collected("museu-historia", 100, "duplicate entry")
        .unwrap_err();
    assert!(matches!(err, AppError::NotAuthorized));
}

#[test]
fn test_anonymous_gate_refuses_adjust() {
    let mut store = MemoryStore::new();
    let gate = Gate::restore(&mut store, verifier());
    assert!(!gate.is_authorized_for(PrivilegedAction::AdjustCollected));
}

#[test]
fn test_admin_gate_authorizes_adjust() {
    let mut store = MemoryStore::new();
    let mut gate = Gate::restore(&mut store, verifier());
    assert!(gate.login(&mut store, &creds("admin", "200817")).unwrap());
    assert!(gate.is_authorized_for(PrivilegedAction::AdjustCollected));
}

#[test]
fn test_verifier_pair_is_injected_not_compiled_in() {
    let mut app = App::init(
        MemoryStore::new(),
        Box::new(StaticCredentials::new("prefeitura", "s3creta")),
    );
    assert!(!app.login(&creds("admin", "200817")).unwrap());
    assert!(app.login(&creds("prefeitura", "s3creta")).unwrap());
}
