//! Request/response definitions for the onboarding service.
//!
//! The remote API reports failures both through the HTTP status and through
//! an embedded `status`/`errors` payload; response types here keep every
//! envelope variant explicit so the client layer can normalize them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::employee::Employee;

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A trait that defines the request-response relationship and metadata for
/// an API endpoint.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The URL path (including any path/query parameters).
    fn path(&self) -> String;
}

/// Application-level status embedded in 2xx responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

// =========================================================
// Login
// =========================================================

/// Candidate login by email + tracking number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub tracking_number: String,
}

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/candidatelogin".to_string()
    }
}

/// Login envelope.
///
/// On validation failure the service returns `status: "error"` with a map
/// of field name → messages; `BTreeMap` keeps the surfaced join order
/// deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApiStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<Employee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl LoginResponse {
    /// Flatten the field-level validation messages into one comma-joined
    /// line (the UI only ever surfaces a single line of text).
    pub fn joined_errors(&self) -> Option<String> {
        let errors = self.errors.as_ref()?;
        let joined: Vec<&str> = errors.values().flatten().map(String::as_str).collect();
        if joined.is_empty() {
            None
        } else {
            Some(joined.join(", "))
        }
    }
}

// =========================================================
// Roster
// =========================================================

/// Company-scoped roster read. The service ignores requests without an
/// `id` parameter, so one is always sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchEmployeesRequest {
    pub company_id: u64,
    pub id: u64,
}

impl ApiRequest for FetchEmployeesRequest {
    type Response = EmployeesResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!(
            "/fetchalleemployees/{}?company_id={}&id={}",
            self.company_id, self.company_id, self.id
        )
    }
}

/// Roster envelope. The service answers with either a `data` array or an
/// `employees` array depending on the deployment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Employee>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<Vec<Employee>>,
}

impl EmployeesResponse {
    /// First non-empty of `data` / `employees`, else an empty roster.
    pub fn into_employees(self) -> Vec<Employee> {
        match self.data {
            Some(data) if !data.is_empty() => data,
            _ => self.employees.unwrap_or_default(),
        }
    }
}

// =========================================================
// Offer acceptance
// =========================================================

/// Required field missing from the session record when deriving an offer
/// submission; fails the acceptance locally, before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferFieldError {
    TrackingNumber,
    Email,
    CompanyId,
}

impl fmt::Display for OfferFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self {
            OfferFieldError::TrackingNumber => "tracking number",
            OfferFieldError::Email => "email address",
            OfferFieldError::CompanyId => "company id",
        };
        write!(f, "Missing {field} required to accept the offer")
    }
}

impl std::error::Error for OfferFieldError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptOfferRequest {
    pub tracking_number: String,
    pub email: String,
    pub company_id: u64,
}

impl AcceptOfferRequest {
    /// Derive the submission triple from the session record via the
    /// documented field fallback chains.
    pub fn for_employee(user: &Employee) -> Result<Self, OfferFieldError> {
        let tracking_number = user
            .tracking_number()
            .ok_or(OfferFieldError::TrackingNumber)?;
        let email = user
            .contact_email()
            .ok_or(OfferFieldError::Email)?
            .to_string();
        let company_id = user.company_ref().ok_or(OfferFieldError::CompanyId)?;
        Ok(Self {
            tracking_number,
            email,
            company_id,
        })
    }
}

impl ApiRequest for AcceptOfferRequest {
    type Response = AcceptOfferResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/acceptoffer".to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcceptOfferResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<AcceptedOffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcceptedOffer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_accepted: Option<bool>,
}

#[cfg(test)]
mod tests;
