use leptos::prelude::*;
use leptos::task::spawn_local;

use onboarding_shared::profile;

use crate::auth::use_auth;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::employees::{fetch_employees, use_employees};
use crate::pages::{time_based_greeting, use_auth_guard};

/// 会话记录缺公司 id 时使用的公司缺省值
const DEFAULT_COMPANY_ID: u64 = 59;

#[component]
pub fn TeamsPage() -> impl IntoView {
    let auth = use_auth();
    let roster = use_employees();
    use_auth_guard();

    let greeting = move || {
        auth.state.with(|s| {
            format!(
                "{}, {}! 👋",
                time_based_greeting(),
                profile::greeting_name(s.user.as_ref())
            )
        })
    };

    // 公司 id（含回退链）+ 查看者 id，两者共同决定拉取请求
    let fetch_key = move || {
        auth.state.with(|s| {
            let company_id = s
                .user
                .as_ref()
                .and_then(|u| u.company_ref())
                .unwrap_or(DEFAULT_COMPANY_ID);
            let viewer_id = s.user.as_ref().and_then(|u| u.id);
            (company_id, viewer_id)
        })
    };

    // 挂载及会话记录变化时拉取名单
    Effect::new(move |_| {
        let (company_id, viewer_id) = fetch_key();
        spawn_local(async move {
            fetch_employees(&roster, company_id, viewer_id).await;
        });
    });

    let is_loading = move || roster.state.with(|s| s.is_loading);
    let error = move || roster.state.with(|s| s.error.clone());
    let is_empty = move || roster.state.with(|s| s.employees.is_empty());

    view! {
        <div class="flex min-h-screen bg-gray-50 dark:bg-gray-900 transition-colors">
            <Sidebar />

            <div class="flex-1 flex flex-col">
                <Header />

                <main class="flex-1 bg-[#00002B] p-6 overflow-y-auto">
                    <div class="mb-6">
                        <h2 class="text-2xl font-bold text-white mb-1">{greeting}</h2>
                        <p class="text-white/80">"Welcome to kylian."</p>
                    </div>

                    <h2 class="text-4xl font-bold text-white mb-8">"Meet the team"</h2>

                    <Show when=is_loading>
                        <div class="flex items-center justify-center py-12">
                            <div class="text-white text-lg">"Loading employees..."</div>
                        </div>
                    </Show>

                    <Show when=move || error().is_some()>
                        <div class="bg-red-50 border border-red-200 rounded-lg p-4 mb-6">
                            <p class="text-red-600">{move || error().unwrap_or_default()}</p>
                        </div>
                    </Show>

                    <Show when=move || !is_loading() && error().is_none()>
                        <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                            <Show when=move || is_empty()>
                                <div class="col-span-full text-center py-12">
                                    <p class="text-white text-lg">"No employees found."</p>
                                </div>
                            </Show>
                            <For
                                each=move || roster.state.get().employees
                                key=|employee| {
                                    (employee.id, employee.display_name().unwrap_or_default())
                                }
                                children=move |employee| {
                                    let name = employee
                                        .display_name()
                                        .unwrap_or_else(|| "Unknown Employee".to_string());
                                    let role = employee
                                        .display_role()
                                        .unwrap_or_else(|| "Employee".to_string());
                                    let avatar = employee.avatar_url().map(str::to_string);
                                    let initial = name
                                        .chars()
                                        .next()
                                        .map(|c| c.to_uppercase().to_string())
                                        .unwrap_or_else(|| "?".to_string());
                                    view! {
                                        <div class="bg-white rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow">
                                            <div class="aspect-square bg-gray-200 overflow-hidden">
                                                {match avatar {
                                                    Some(src) => {
                                                        view! {
                                                            <img
                                                                src=src
                                                                alt=name.clone()
                                                                class="w-full h-full object-cover"
                                                            />
                                                        }
                                                            .into_any()
                                                    }
                                                    None => {
                                                        view! {
                                                            <div class="w-full h-full flex items-center justify-center bg-gray-300">
                                                                <span class="text-4xl text-gray-500">{initial}</span>
                                                            </div>
                                                        }
                                                            .into_any()
                                                    }
                                                }}
                                            </div>
                                            <div class="p-4 bg-white">
                                                <h3 class="font-bold text-[#00002B] text-lg mb-1">{name}</h3>
                                                <p class="text-sm text-gray-600">{role}</p>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </main>
            </div>
        </div>
    }
}
