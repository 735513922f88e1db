use super::*;

// =========================================================
// Login normalization
// =========================================================

#[test]
fn login_success_returns_the_candidate_record() {
    let body = r#"{"status": "success", "candidate": {"employee_fristname": "Ada", "id": 7}}"#;
    let session = normalize_login(true, body).unwrap();
    assert_eq!(session.user.first_name.as_deref(), Some("Ada"));
    assert_eq!(session.user.id, Some(7));
    assert_eq!(session.token, None);
}

#[test]
fn login_surfaces_field_validation_messages_verbatim() {
    let body = r#"{"status": "error", "errors": {"email": ["Invalid"]}}"#;
    assert_eq!(normalize_login(true, body), Err("Invalid".to_string()));
}

#[test]
fn login_joins_messages_across_fields() {
    let body = r#"{
        "status": "error",
        "errors": {"email": ["Invalid"], "tracking_number": ["Required"]}
    }"#;
    assert_eq!(
        normalize_login(true, body),
        Err("Invalid, Required".to_string())
    );
}

#[test]
fn login_error_status_falls_back_to_message_then_literal() {
    let with_message = r#"{"status": "error", "message": "Account disabled"}"#;
    assert_eq!(
        normalize_login(true, with_message),
        Err("Account disabled".to_string())
    );

    let bare = r#"{"status": "error"}"#;
    assert_eq!(normalize_login(true, bare), Err("Login failed".to_string()));

    // error payload wins even on a 2xx transport status
    assert_eq!(normalize_login(false, bare), Err("Login failed".to_string()));
}

#[test]
fn login_non_2xx_uses_service_message() {
    let body = r#"{"message": "Too many attempts"}"#;
    assert_eq!(
        normalize_login(false, body),
        Err("Too many attempts".to_string())
    );
    assert_eq!(
        normalize_login(false, r#"{}"#),
        Err("Login failed".to_string())
    );
}

#[test]
fn login_2xx_without_candidate_is_a_failure() {
    let body = r#"{"status": "success", "message": ""}"#;
    assert_eq!(normalize_login(true, body), Err("Login failed".to_string()));
}

#[test]
fn login_unparseable_body_is_generic() {
    assert_eq!(
        normalize_login(true, "<html>gateway timeout</html>"),
        Err("An unexpected error occurred".to_string())
    );
}

#[test]
fn login_picks_up_a_token_when_the_service_sends_one() {
    let body = r#"{"status": "success", "candidate": {"id": 1}, "token": "t-123"}"#;
    let session = normalize_login(true, body).unwrap();
    assert_eq!(session.token.as_deref(), Some("t-123"));
}

// =========================================================
// Roster normalization
// =========================================================

#[test]
fn roster_accepts_either_envelope() {
    let data = r#"{"data": [{"id": 1}, {"id": 2}]}"#;
    assert_eq!(normalize_employees(true, data).unwrap().len(), 2);

    let employees = r#"{"employees": [{"id": 3}]}"#;
    let list = normalize_employees(true, employees).unwrap();
    assert_eq!(list[0].id, Some(3));

    assert!(normalize_employees(true, r#"{"success": true}"#)
        .unwrap()
        .is_empty());
}

#[test]
fn roster_failure_uses_service_message_then_fallback() {
    assert_eq!(
        normalize_employees(false, r#"{"message": "Company not found"}"#),
        Err("Company not found".to_string())
    );
    assert_eq!(
        normalize_employees(false, r#"{}"#),
        Err("Failed to fetch employees".to_string())
    );
    assert_eq!(
        normalize_employees(true, "not json"),
        Err("An unexpected error occurred".to_string())
    );
}

// =========================================================
// Offer normalization
// =========================================================

#[test]
fn accept_offer_returns_the_envelope_on_success() {
    let body = r#"{"employees": {"id": 7, "offer_accepted": true}, "message": "done"}"#;
    let resp = normalize_accept(true, body).unwrap();
    assert_eq!(resp.employees.and_then(|e| e.offer_accepted), Some(true));
}

#[test]
fn accept_offer_failure_uses_service_message_then_fallback() {
    assert_eq!(
        normalize_accept(false, r#"{"message": "Offer expired"}"#),
        Err("Offer expired".to_string())
    );
    assert_eq!(
        normalize_accept(false, r#"{}"#),
        Err("Failed to accept offer".to_string())
    );
    assert_eq!(
        normalize_accept(true, ""),
        Err("An unexpected error occurred".to_string())
    );
}

// =========================================================
// Client configuration
// =========================================================

#[test]
fn base_url_is_normalized() {
    let api = PortalApi::new("https://api.example.com/api/");
    assert_eq!(
        api.url("/candidatelogin"),
        "https://api.example.com/api/candidatelogin"
    );
    assert_eq!(
        api.url("candidatelogin"),
        "https://api.example.com/api/candidatelogin"
    );
}
