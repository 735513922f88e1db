//! 入职门户前端应用
//!
//! Context-Driven 架构：
//! - `auth`: 会话状态机（登录/登出 + 持久化白名单）
//! - `employees`: 团队名单 store（请求代号排序）
//! - `api`: 远程服务客户端（错误归一化）
//! - `theme`: 暗色模式与侧边栏开关
//! - `pages` / `components`: UI 层，页面自带响应式认证守卫

pub mod api;
pub mod auth;
pub mod employees;
pub mod theme;

mod components {
    pub mod header;
    pub mod icons;
    pub mod onboarding_card;
    pub mod sidebar;
}
mod pages;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::auth::{AuthContext, init_auth};
use crate::employees::{EmployeesContext, init_employees};
use crate::pages::dashboard::DashboardPage;
use crate::pages::job_offer::JobOfferPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::settings::SettingsPage;
use crate::pages::support::SupportPage;
use crate::pages::teams::TeamsPage;
use crate::theme::{provide_sidebar, provide_theme};

#[component]
pub fn App() -> impl IntoView {
    // 1. 会话上下文，启动时从持久化存储恢复白名单字段
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 2. 名单上下文，恢复上次的列表（登出后仍保留）
    let employees_ctx = EmployeesContext::new();
    provide_context(employees_ctx);
    init_employees(&employees_ctx);

    // 3. 纯展示层开关
    provide_theme();
    provide_sidebar();

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/dashboard") view=DashboardPage />
                <Route path=path!("/job-offer") view=JobOfferPage />
                <Route path=path!("/teams") view=TeamsPage />
                <Route path=path!("/settings") view=SettingsPage />
                <Route path=path!("/support") view=SupportPage />
            </Routes>
        </Router>
    }
}
