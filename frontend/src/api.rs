//! 门户 API 客户端
//!
//! 三个远程操作共用同一套错误归一化策略：服务端的各种错误形态
//! （字段级校验信息、顶层 message、传输失败）最终都折叠成单行
//! 文本，因为界面只会向用户展示一行错误。

use onboarding_shared::{
    AcceptOfferRequest, AcceptOfferResponse, ApiRequest, ApiStatus, Employee,
    EmployeesResponse, HttpMethod, LoginRequest, LoginResponse,
};

use crate::web::{HttpClient, HttpError};

/// 生产环境 API 根地址
pub const API_BASE_URL: &str = "https://api.kylianerp.com/api";
/// 文档（offer letter 等）所在的静态资源根地址
pub const ASSET_BASE_URL: &str = "https://api.kylianerp.com";

/// Roster 端点缺省的查看者 id。The endpoint returns nothing without an
/// `id` parameter; the logged-in user's record id is passed when known.
pub const DEFAULT_ROSTER_VIEWER_ID: u64 = 911_115;

const GENERIC_ERROR: &str = "An unexpected error occurred";
const LOGIN_FALLBACK: &str = "Login failed";
const ROSTER_FALLBACK: &str = "Failed to fetch employees";
const OFFER_FALLBACK: &str = "Failed to accept offer";

/// 登录成功后得到的会话数据
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedCandidate {
    pub user: Employee,
    /// 服务目前不下发 token，字段保留以兼容未来的响应
    pub token: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PortalApi {
    base_url: String,
}

impl Default for PortalApi {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl PortalApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 传输层：按 `ApiRequest` 元数据发送请求，返回 (2xx?, body)
    async fn send<R: ApiRequest>(&self, req: &R) -> Result<(bool, String), HttpError> {
        let url = self.url(&req.path());
        let builder = match R::METHOD {
            HttpMethod::Get => HttpClient::get(&url).header("Content-Type", "application/json"),
            HttpMethod::Post => {
                let body = serde_json::to_string(req)
                    .map_err(|e| HttpError::RequestBuildFailed(e.to_string()))?;
                HttpClient::post(&url)
                    .header("Content-Type", "application/json")
                    .body(body)
            }
        };
        let res = builder.send().await?;
        let ok = res.ok();
        let body = res.text().await?;
        Ok((ok, body))
    }

    /// 候选人登录
    pub async fn login(
        &self,
        email: String,
        tracking_number: String,
    ) -> Result<AuthenticatedCandidate, String> {
        let req = LoginRequest {
            email,
            tracking_number,
        };
        match self.send(&req).await {
            Ok((ok, body)) => normalize_login(ok, &body),
            Err(e) => Err(transport_failure("login", e)),
        }
    }

    /// 拉取公司团队名单
    pub async fn fetch_employees(
        &self,
        company_id: u64,
        employee_id: Option<u64>,
    ) -> Result<Vec<Employee>, String> {
        let req = onboarding_shared::FetchEmployeesRequest {
            company_id,
            id: employee_id.unwrap_or(DEFAULT_ROSTER_VIEWER_ID),
        };
        match self.send(&req).await {
            Ok((ok, body)) => normalize_employees(ok, &body),
            Err(e) => Err(transport_failure("fetch_employees", e)),
        }
    }

    /// 接受录用通知
    pub async fn accept_offer(
        &self,
        req: AcceptOfferRequest,
    ) -> Result<AcceptOfferResponse, String> {
        match self.send(&req).await {
            Ok((ok, body)) => normalize_accept(ok, &body),
            Err(e) => Err(transport_failure("accept_offer", e)),
        }
    }
}

fn transport_failure(operation: &str, e: HttpError) -> String {
    web_sys::console::warn_1(&format!("[Api] {operation}: {e}").into());
    GENERIC_ERROR.to_string()
}

// =========================================================
// 响应归一化（纯函数，原生测试覆盖）
// =========================================================

fn message_or(message: Option<String>, fallback: &str) -> String {
    message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// 登录响应归一化。
///
/// 先看应用层 `status`（服务端用 2xx 也可能携带错误负载），再看传输
/// 状态，最后要求确实带回 candidate 记录。
fn normalize_login(ok: bool, body: &str) -> Result<AuthenticatedCandidate, String> {
    let Ok(resp) = serde_json::from_str::<LoginResponse>(body) else {
        return Err(GENERIC_ERROR.to_string());
    };
    if resp.status == Some(ApiStatus::Error) {
        let joined = resp.joined_errors();
        return Err(joined.unwrap_or_else(|| message_or(resp.message, LOGIN_FALLBACK)));
    }
    if !ok {
        return Err(message_or(resp.message, LOGIN_FALLBACK));
    }
    match resp.candidate {
        Some(user) => Ok(AuthenticatedCandidate {
            user,
            token: resp.token,
        }),
        None => Err(message_or(resp.message, LOGIN_FALLBACK)),
    }
}

fn normalize_employees(ok: bool, body: &str) -> Result<Vec<Employee>, String> {
    let Ok(resp) = serde_json::from_str::<EmployeesResponse>(body) else {
        return Err(GENERIC_ERROR.to_string());
    };
    if !ok {
        return Err(message_or(resp.message, ROSTER_FALLBACK));
    }
    Ok(resp.into_employees())
}

fn normalize_accept(ok: bool, body: &str) -> Result<AcceptOfferResponse, String> {
    let Ok(resp) = serde_json::from_str::<AcceptOfferResponse>(body) else {
        return Err(GENERIC_ERROR.to_string());
    };
    if !ok {
        return Err(message_or(resp.message, OFFER_FALLBACK));
    }
    Ok(resp)
}

#[cfg(test)]
mod tests;
