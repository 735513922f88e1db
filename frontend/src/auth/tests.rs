use super::*;

fn candidate() -> Employee {
    Employee {
        id: Some(7),
        first_name: Some("Ada".into()),
        email: Some("ada@example.com".into()),
        ..Employee::default()
    }
}

#[test]
fn initial_state_is_anonymous() {
    let state = AuthState::default();
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert!(state.user.is_none());
    assert!(state.error.is_none());
}

#[test]
fn pending_sets_loading_and_clears_stale_error() {
    let mut state = AuthState {
        error: Some("Invalid".into()),
        ..AuthState::default()
    };
    state.login_pending();
    assert!(state.is_loading);
    assert!(state.error.is_none());
}

#[test]
fn success_stores_the_exact_record_and_authenticates() {
    let mut state = AuthState::default();
    state.login_pending();
    state.login_succeeded(candidate(), Some("t-1".into()));

    assert!(state.is_authenticated);
    assert!(!state.is_loading);
    assert_eq!(state.user, Some(candidate()));
    assert_eq!(state.token.as_deref(), Some("t-1"));
    assert!(state.error.is_none());
}

#[test]
fn failure_returns_to_anonymous_with_the_message() {
    let mut state = AuthState::default();
    state.login_pending();
    state.login_failed("Invalid".into());

    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some("Invalid"));
}

#[test]
fn authenticated_always_implies_a_user() {
    let mut state = AuthState::default();
    state.login_succeeded(candidate(), None);
    assert!(state.is_authenticated && state.user.is_some());

    state.login_failed("nope".into());
    assert!(!state.is_authenticated);

    state.reset();
    assert!(!state.is_authenticated && state.user.is_none());
}

#[test]
fn logout_clears_everything() {
    let mut state = AuthState::default();
    state.login_succeeded(candidate(), Some("t-1".into()));
    state.reset();
    assert_eq!(state, AuthState::default());
}

#[test]
fn persisted_record_only_carries_the_whitelist() {
    let record = PersistedAuth {
        user: Some(candidate()),
        token: None,
        is_authenticated: true,
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["isAuthenticated"], true);
    assert!(json.get("isLoading").is_none());
    assert!(json.get("error").is_none());
}
