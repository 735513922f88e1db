use leptos::prelude::*;

use onboarding_shared::profile;

use crate::auth::use_auth;
use crate::components::header::Header;
use crate::components::icons::UserRound;
use crate::components::onboarding_card::OnboardingCard;
use crate::components::sidebar::Sidebar;
use crate::pages::{document_url, time_based_greeting, use_auth_guard};

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
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
    let full_name = move || auth.state.with(|s| profile::full_name(s.user.as_ref()));
    let title_line = move || auth.state.with(|s| profile::title_line(s.user.as_ref()));
    let initials = move || auth.state.with(|s| profile::initials(s.user.as_ref()));
    let avatar_class = move || {
        let color = auth.state.with(|s| profile::avatar_color(s.user.as_ref()));
        format!(
            "w-32 h-32 rounded-lg flex items-center justify-center text-white text-3xl font-bold {color}"
        )
    };
    let offer_letter = move || {
        auth.state.with(|s| {
            s.user
                .as_ref()
                .and_then(|u| non_empty(&u.offer_letter_url))
                .map(document_url)
        })
    };

    // 个人信息格子：只展示已填写的字段
    let info_rows = move || {
        auth.state.with(|s| {
            let Some(u) = s.user.as_ref() else {
                return Vec::new();
            };
            let mut rows: Vec<(&'static str, String)> = Vec::new();
            if let Some(v) = non_empty(&u.first_name) {
                rows.push(("First name", v.to_string()));
            }
            if let Some(v) = non_empty(&u.last_name) {
                rows.push(("Last name", v.to_string()));
            }
            if let Some(v) = u.contact_email() {
                rows.push(("Email Address", v.to_string()));
            }
            if let Some(v) = non_empty(&u.phone1) {
                rows.push(("Mobile Number", v.to_string()));
            }
            if let Some(v) = non_empty(&u.marital_status) {
                rows.push(("Marital Status", v.to_string()));
            }
            if let Some(v) = non_empty(&u.city).or_else(|| non_empty(&u.address)) {
                rows.push(("City", v.to_string()));
            }
            if let Some(year) = profile::birth_year(u.date_of_birth.as_deref()) {
                rows.push(("Year of Birth", year.to_string()));
            }
            if let Some(v) = non_empty(&u.sex) {
                rows.push(("Gender", v.to_string()));
            }
            rows
        })
    };

    view! {
        <div class="flex min-h-screen bg-gray-50 dark:bg-gray-900 transition-colors">
            <Sidebar />

            <div class="flex-1 flex flex-col">
                <Header />

                <main class="flex-1 p-6 overflow-y-auto bg-gray-50 dark:bg-gray-900 transition-colors">
                    <div class="mb-6">
                        <h2 class="text-2xl font-bold text-[#00002B] dark:text-white mb-1">
                            {greeting}
                        </h2>
                        <p class="text-gray-600 dark:text-gray-400">"Welcome to kylian."</p>
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                        <div class="lg:col-span-2 space-y-6">
                            // 用户资料卡
                            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm p-6 transition-colors">
                                <div class="flex flex-col md:flex-row gap-6">
                                    <div class=avatar_class>{initials}</div>
                                    <div class="flex-1">
                                        <h3 class="text-xl font-bold text-[#00002B] dark:text-white mb-1">
                                            {full_name}
                                        </h3>
                                        <Show when=move || title_line().is_some()>
                                            <p class="text-gray-600 dark:text-gray-400 mb-4">
                                                {move || title_line().unwrap_or_default()}
                                            </p>
                                        </Show>
                                        <Show when=move || offer_letter().is_some()>
                                            <div class="flex gap-3">
                                                <a
                                                    href=move || offer_letter().unwrap_or_default()
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="px-4 py-2 bg-[#00002B] text-white font-semibold rounded-lg hover:opacity-90 transition-opacity"
                                                >
                                                    "View Offer Letter"
                                                </a>
                                                <a
                                                    href=move || offer_letter().unwrap_or_default()
                                                    download
                                                    class="px-4 py-2 border-2 border-[#00002B] text-[#00002B] dark:text-white dark:border-white font-semibold rounded-lg hover:bg-gray-50 dark:hover:bg-gray-700 transition-colors"
                                                >
                                                    "Download Offer Letter"
                                                </a>
                                            </div>
                                        </Show>
                                    </div>
                                </div>
                            </div>

                            // 个人信息
                            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm p-6 transition-colors">
                                <div class="flex items-center gap-2 mb-4">
                                    <UserRound class="h-5 w-5 text-[#00002B] dark:text-white" />
                                    <h3 class="text-lg font-bold text-[#00002B] dark:text-white">
                                        "Personal Information"
                                    </h3>
                                </div>
                                <div class="grid grid-cols-2 gap-4">
                                    {move || {
                                        info_rows()
                                            .into_iter()
                                            .map(|(label, value)| {
                                                view! {
                                                    <div>
                                                        <p class="text-sm text-gray-500 dark:text-gray-400 mb-1">
                                                            {label}
                                                        </p>
                                                        <p class="text-[#00002B] dark:text-white font-medium">
                                                            {value}
                                                        </p>
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </div>
                            </div>
                        </div>

                        <div class="space-y-6">
                            <OnboardingCard />
                        </div>
                    </div>
                </main>
            </div>
        </div>
    }
}
