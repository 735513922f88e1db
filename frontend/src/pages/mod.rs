//! 页面层
//!
//! 每个受保护页面都挂一个响应式认证守卫：挂载后以及认证标志变化时
//! 检查，未认证一律跳回登录页。这是组件级守卫而非路由中间件，
//! 重定向完成前内容可能闪现（接受的取舍）。

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::use_auth;

pub mod dashboard;
pub mod job_offer;
pub mod login;
pub mod not_found;
pub mod settings;
pub mod support;
pub mod teams;

/// 注册认证守卫 Effect
pub(crate) fn use_auth_guard() {
    let auth = use_auth();
    let navigate = use_navigate();
    Effect::new(move |_| {
        let state = auth.state.get();
        if !state.is_loading && !state.is_authenticated {
            navigate("/", Default::default());
        }
    });
}

/// 按当地时间给出问候语
pub(crate) fn time_based_greeting() -> &'static str {
    let hour = js_sys::Date::new_0().get_hours();
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// 文档链接：服务端有时返回相对路径，补全为静态资源地址
pub(crate) fn document_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", crate::api::ASSET_BASE_URL, path)
    }
}
