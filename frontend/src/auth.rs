//! 认证模块
//!
//! 管理候选人会话状态。状态机：
//! `anonymous → authenticating → authenticated`，失败回到 `anonymous`
//! 并携带错误；登出回到初始状态并清除持久化记录。
//! 状态迁移是 `AuthState` 上的纯方法，便于原生测试。

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use onboarding_shared::Employee;

use crate::api::PortalApi;
use crate::web::LocalStorage;

/// 持久化键。只落盘白名单子集 `{user, token, isAuthenticated}`。
const STORAGE_AUTH_KEY: &str = "auth";

/// 认证状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    /// 会话中的候选人记录（仅认证成功后存在）
    pub user: Option<Employee>,
    pub token: Option<String>,
    /// 是否已认证。不变式：为 true 时 `user` 一定存在。
    pub is_authenticated: bool,
    /// 登录请求进行中
    pub is_loading: bool,
    /// 最近一次登录失败的提示
    pub error: Option<String>,
}

impl AuthState {
    /// anonymous → authenticating
    pub fn login_pending(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// authenticating → authenticated
    pub fn login_succeeded(&mut self, user: Employee, token: Option<String>) {
        self.is_loading = false;
        self.user = Some(user);
        self.token = token;
        self.is_authenticated = true;
        self.error = None;
    }

    /// authenticating → anonymous（带错误）
    pub fn login_failed(&mut self, message: String) {
        self.is_loading = false;
        self.is_authenticated = false;
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// 登出：回到初始状态
    pub fn reset(&mut self) {
        *self = AuthState::default();
    }
}

/// 持久化白名单。`is_loading` / `error` 永不落盘，重载后总是默认值。
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedAuth {
    user: Option<Employee>,
    token: Option<String>,
    #[serde(rename = "isAuthenticated")]
    is_authenticated: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 认证标志信号（供路由守卫注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态：从 LocalStorage 恢复白名单字段
pub fn init_auth(ctx: &AuthContext) {
    let Some(persisted) = LocalStorage::get_json::<PersistedAuth>(STORAGE_AUTH_KEY) else {
        return;
    };
    ctx.set_state.update(|state| {
        let user_present = persisted.user.is_some();
        state.user = persisted.user;
        state.token = persisted.token;
        // 恢复时同样维持 authenticated ⇒ user 存在 的不变式
        state.is_authenticated = persisted.is_authenticated && user_present;
    });
}

/// 登录并保存会话
///
/// # Returns
/// 登录是否成功
pub async fn login(ctx: &AuthContext, email: String, tracking_number: String) -> bool {
    ctx.set_state.update(|state| state.login_pending());

    match PortalApi::default().login(email, tracking_number).await {
        Ok(session) => {
            let record = PersistedAuth {
                user: Some(session.user.clone()),
                token: session.token.clone(),
                is_authenticated: true,
            };
            LocalStorage::set_json(STORAGE_AUTH_KEY, &record);

            ctx.set_state
                .update(|state| state.login_succeeded(session.user, session.token));
            true
        }
        Err(message) => {
            ctx.set_state.update(|state| state.login_failed(message));
            false
        }
    }
}

/// 注销并清除状态
///
/// 持久化记录必须删除（purge），否则旧的已认证快照会在下次加载时
/// 复活。删除是尽力而为：失败只记录警告，不阻塞页面跳转。
pub fn logout(ctx: &AuthContext) {
    if !LocalStorage::delete(STORAGE_AUTH_KEY) {
        web_sys::console::warn_1(&"[Auth] failed to purge persisted session".into());
    }
    ctx.set_state.update(|state| state.reset());
}

/// 清除上一次的登录错误（进入登录页时调用）
pub fn clear_error(ctx: &AuthContext) {
    ctx.set_state.update(|state| state.clear_error());
}

#[cfg(test)]
mod tests;
