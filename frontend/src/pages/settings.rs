use leptos::prelude::*;

use onboarding_shared::profile;

use crate::auth::use_auth;
use crate::components::header::Header;
use crate::components::icons::{Moon, Sun, UserRound};
use crate::components::sidebar::Sidebar;
use crate::pages::use_auth_guard;
use crate::theme::use_theme;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();
    let theme = use_theme();
    use_auth_guard();

    let full_name = move || auth.state.with(|s| profile::full_name(s.user.as_ref()));
    let email = move || {
        auth.state.with(|s| {
            s.user
                .as_ref()
                .and_then(|u| u.contact_email().map(str::to_string))
                .unwrap_or_default()
        })
    };
    let phone = move || {
        auth.state
            .with(|s| s.user.as_ref().and_then(|u| u.phone1.clone()).unwrap_or_default())
    };

    view! {
        <div class="flex min-h-screen bg-gray-50 dark:bg-gray-900 transition-colors">
            <Sidebar />

            <div class="flex-1 flex flex-col">
                <Header />

                <main class="flex-1 p-6 overflow-y-auto bg-gray-50 dark:bg-gray-900 transition-colors">
                    <div class="mb-6">
                        <h2 class="text-2xl font-bold text-[#00002B] dark:text-white mb-1">
                            "Settings"
                        </h2>
                        <p class="text-gray-600 dark:text-gray-400">
                            "Manage your account settings and preferences"
                        </p>
                    </div>

                    <div class="max-w-4xl space-y-6">
                        // 账户信息（只读，来自会话记录）
                        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 p-6 transition-colors">
                            <div class="flex items-center gap-3 mb-6">
                                <UserRound class="h-6 w-6 text-[#00002B] dark:text-white" />
                                <h3 class="text-xl font-semibold text-[#00002B] dark:text-white">
                                    "Account Settings"
                                </h3>
                            </div>

                            <div class="space-y-4">
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                        "Full Name"
                                    </label>
                                    <input
                                        type="text"
                                        prop:value=full_name
                                        disabled
                                        class="w-full px-4 py-2 bg-gray-50 dark:bg-gray-700 border border-gray-200 dark:border-gray-600 rounded-lg text-gray-600 dark:text-gray-300"
                                    />
                                </div>

                                <div>
                                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                        "Email Address"
                                    </label>
                                    <input
                                        type="email"
                                        prop:value=email
                                        disabled
                                        class="w-full px-4 py-2 bg-gray-50 dark:bg-gray-700 border border-gray-200 dark:border-gray-600 rounded-lg text-gray-600 dark:text-gray-300"
                                    />
                                </div>

                                <div>
                                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                        "Phone Number"
                                    </label>
                                    <input
                                        type="tel"
                                        prop:value=phone
                                        disabled
                                        class="w-full px-4 py-2 bg-gray-50 dark:bg-gray-700 border border-gray-200 dark:border-gray-600 rounded-lg text-gray-600 dark:text-gray-300"
                                    />
                                </div>
                            </div>
                        </div>

                        // 外观偏好
                        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 p-6 transition-colors">
                            <div class="flex items-center gap-3 mb-6">
                                <Show
                                    when=move || theme.is_dark.get()
                                    fallback=|| view! { <Sun class="h-6 w-6 text-[#00002B] dark:text-white" /> }
                                >
                                    <Moon class="h-6 w-6 text-[#00002B] dark:text-white" />
                                </Show>
                                <h3 class="text-xl font-semibold text-[#00002B] dark:text-white">
                                    "Appearance"
                                </h3>
                            </div>

                            <div class="flex items-center justify-between">
                                <div>
                                    <p class="font-medium text-gray-900 dark:text-white">"Dark Mode"</p>
                                    <p class="text-sm text-gray-500 dark:text-gray-400">
                                        "Switch to dark theme"
                                    </p>
                                </div>
                                <label class="relative inline-flex items-center cursor-pointer">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || theme.is_dark.get()
                                        on:change=move |_| theme.toggle()
                                        class="sr-only peer"
                                    />
                                    <div class="w-11 h-6 bg-gray-200 dark:bg-gray-700 rounded-full peer peer-checked:after:translate-x-full peer-checked:after:border-white after:content-[''] after:absolute after:top-[2px] after:left-[2px] after:bg-white after:border-gray-300 after:border after:rounded-full after:h-5 after:w-5 after:transition-all peer-checked:bg-[#00002B]"></div>
                                </label>
                            </div>
                        </div>
                    </div>
                </main>
            </div>
        </div>
    }
}
