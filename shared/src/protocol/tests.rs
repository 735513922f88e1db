use super::*;
use crate::employee::Employee;

// =========================================================
// Envelope parsing
// =========================================================

#[test]
fn login_response_parses_success_envelope() {
    let body = r#"{
        "status": "success",
        "candidate": {
            "id": 42,
            "employee_fristname": "Ada",
            "employee_lastname": "Lovelace",
            "employee_email": "ada@example.com",
            "company_id": 59
        }
    }"#;
    let resp: LoginResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.status, Some(ApiStatus::Success));
    let user = resp.candidate.unwrap();
    assert_eq!(user.first_name.as_deref(), Some("Ada"));
    assert_eq!(user.id, Some(42));
    assert_eq!(user.company_id, Some(59));
}

#[test]
fn login_response_keeps_unknown_candidate_fields() {
    let body = r#"{
        "status": "success",
        "candidate": {"employee_fristname": "Ada", "shoe_size": "38"}
    }"#;
    let resp: LoginResponse = serde_json::from_str(body).unwrap();
    let user = resp.candidate.unwrap();
    assert_eq!(
        user.extra.get("shoe_size").and_then(|v| v.as_str()),
        Some("38")
    );
}

#[test]
fn joined_errors_collapses_field_messages() {
    let body = r#"{
        "status": "error",
        "errors": {
            "email": ["Invalid"],
            "tracking_number": ["Required", "Must be numeric"]
        }
    }"#;
    let resp: LoginResponse = serde_json::from_str(body).unwrap();
    assert_eq!(
        resp.joined_errors().as_deref(),
        Some("Invalid, Required, Must be numeric")
    );
}

#[test]
fn joined_errors_is_none_when_absent_or_empty() {
    let resp = LoginResponse::default();
    assert_eq!(resp.joined_errors(), None);

    let resp: LoginResponse = serde_json::from_str(r#"{"errors": {}}"#).unwrap();
    assert_eq!(resp.joined_errors(), None);
}

#[test]
fn roster_envelope_prefers_first_non_empty_array() {
    let data: EmployeesResponse =
        serde_json::from_str(r#"{"data": [{"id": 1}], "employees": [{"id": 2}]}"#).unwrap();
    assert_eq!(data.into_employees()[0].id, Some(1));

    let empty_data: EmployeesResponse =
        serde_json::from_str(r#"{"data": [], "employees": [{"id": 2}]}"#).unwrap();
    assert_eq!(empty_data.into_employees()[0].id, Some(2));

    let neither: EmployeesResponse = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
    assert!(neither.into_employees().is_empty());
}

// =========================================================
// Paths
// =========================================================

#[test]
fn roster_path_carries_company_and_viewer_id() {
    let req = FetchEmployeesRequest {
        company_id: 59,
        id: 7,
    };
    assert_eq!(req.path(), "/fetchalleemployees/59?company_id=59&id=7");
    assert_eq!(FetchEmployeesRequest::METHOD, HttpMethod::Get);
}

// =========================================================
// Offer derivation
// =========================================================

fn offer_ready_user() -> Employee {
    Employee {
        tracking_number: Some("TRK-9".into()),
        email: Some("ada@example.com".into()),
        company_id: Some(59),
        ..Employee::default()
    }
}

#[test]
fn offer_request_uses_fallback_chains() {
    let req = AcceptOfferRequest::for_employee(&offer_ready_user()).unwrap();
    assert_eq!(req.tracking_number, "TRK-9");
    assert_eq!(req.email, "ada@example.com");
    assert_eq!(req.company_id, 59);

    // tracking number falls back to employee_id, then to the record id
    let mut user = offer_ready_user();
    user.tracking_number = None;
    user.employee_id = Some("EMP-4".into());
    assert_eq!(
        AcceptOfferRequest::for_employee(&user).unwrap().tracking_number,
        "EMP-4"
    );
    user.employee_id = None;
    user.id = Some(911);
    assert_eq!(
        AcceptOfferRequest::for_employee(&user).unwrap().tracking_number,
        "911"
    );

    // email falls back to the official address
    let mut user = offer_ready_user();
    user.email = Some("".into());
    user.official_email = Some("ada@corp.example".into());
    assert_eq!(
        AcceptOfferRequest::for_employee(&user).unwrap().email,
        "ada@corp.example"
    );

    // company id falls back to the camel-cased alias in the extension map
    let mut user = offer_ready_user();
    user.company_id = None;
    user.extra
        .insert("companyId".into(), serde_json::json!("61"));
    assert_eq!(
        AcceptOfferRequest::for_employee(&user).unwrap().company_id,
        61
    );
}

#[test]
fn offer_request_fails_locally_per_missing_field() {
    let empty = Employee::default();
    assert_eq!(
        AcceptOfferRequest::for_employee(&empty),
        Err(OfferFieldError::TrackingNumber)
    );

    let mut user = offer_ready_user();
    user.email = None;
    assert_eq!(
        AcceptOfferRequest::for_employee(&user),
        Err(OfferFieldError::Email)
    );

    let mut user = offer_ready_user();
    user.company_id = None;
    assert_eq!(
        AcceptOfferRequest::for_employee(&user),
        Err(OfferFieldError::CompanyId)
    );
}

#[test]
fn persisted_employee_round_trips_through_wire_names() {
    let user: Employee = serde_json::from_str(
        r#"{"employee_fristname": "Ada", "Highest_qualification": "MSc", "postcode/zipcode": "SW1"}"#,
    )
    .unwrap();
    assert_eq!(user.highest_qualification.as_deref(), Some("MSc"));
    assert_eq!(user.postcode.as_deref(), Some("SW1"));

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["employee_fristname"], "Ada");
    assert_eq!(json["Highest_qualification"], "MSc");
    assert!(json.get("employee_lastname").is_none());
}
