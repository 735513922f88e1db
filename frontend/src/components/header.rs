use leptos::prelude::*;

use onboarding_shared::profile;

use crate::auth::use_auth;
use crate::components::icons::Menu;
use crate::theme::use_sidebar;

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let sidebar = use_sidebar();

    let user_name = move || auth.state.with(|s| profile::full_name(s.user.as_ref()));
    let user_email = move || {
        auth.state.with(|s| {
            s.user
                .as_ref()
                .and_then(|u| u.contact_email().map(str::to_string))
                .unwrap_or_default()
        })
    };
    let initials = move || auth.state.with(|s| profile::initials(s.user.as_ref()));
    let avatar_class = move || {
        let color = auth.state.with(|s| profile::avatar_color(s.user.as_ref()));
        format!(
            "w-10 h-10 rounded-full flex items-center justify-center text-white text-sm font-bold {color}"
        )
    };

    view! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700 px-6 py-4 flex items-center justify-between transition-colors">
            <div class="flex items-center gap-4">
                <button
                    on:click=move |_| sidebar.toggle()
                    class="p-2 hover:bg-gray-100 dark:hover:bg-gray-700 rounded-lg transition-colors"
                >
                    <Menu class="h-6 w-6 text-[#00002B] dark:text-white" />
                </button>
                <h1 class="text-xl font-bold text-[#00002B] dark:text-white">"Candidate Portal"</h1>
            </div>

            <div class="flex items-center gap-3 pl-4 border-l border-gray-200 dark:border-gray-700">
                <div class=avatar_class>{initials}</div>
                <div class="flex flex-col">
                    <span class="text-sm font-semibold text-[#00002B] dark:text-white">
                        {user_name}
                    </span>
                    <span class="text-xs text-gray-500 dark:text-gray-400">{user_email}</span>
                </div>
            </div>
        </header>
    }
}
