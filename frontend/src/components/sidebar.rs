use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth::{logout, use_auth};
use crate::components::icons::*;
use crate::theme::use_sidebar;

/// 单个导航项；当前路径命中时高亮
#[component]
fn NavItem(path: &'static str, label: &'static str, children: Children) -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();
    let is_active = move || location.pathname.get() == path;

    view! {
        <button
            on:click=move |_| navigate(path, Default::default())
            class=move || {
                if is_active() {
                    "w-full flex items-center gap-3 px-6 py-3 transition-colors bg-[#00002B] text-white border-l-4 border-[#00002B]"
                } else {
                    "w-full flex items-center gap-3 px-6 py-3 transition-colors text-[#00002B] dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700"
                }
            }
        >
            {children()}
            <span class="font-medium">{label}</span>
        </button>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let sidebar = use_sidebar();
    let navigate = use_navigate();

    let on_logout = move |_| {
        logout(&auth);
        navigate("/", Default::default());
    };

    // 折叠时整体隐藏，保持挂载以免丢失滚动位置
    let container_class = move || {
        if sidebar.collapsed.get() {
            "hidden"
        } else {
            "w-64 bg-white dark:bg-gray-800 min-h-screen flex flex-col border-r border-gray-200 dark:border-gray-700 transition-colors"
        }
    };

    view! {
        <div class=container_class>
            <div class="p-6 border-b border-gray-200 dark:border-gray-700">
                <span class="text-xl font-bold text-[#00002B] dark:text-white">"kylian"</span>
            </div>

            <nav class="flex-1 py-4">
                <NavItem path="/dashboard" label="Dashboard">
                    <LayoutDashboard class="h-5 w-5" />
                </NavItem>
                <NavItem path="/job-offer" label="Job Offer">
                    <Briefcase class="h-5 w-5" />
                </NavItem>
                <NavItem path="/teams" label="Teams">
                    <Users class="h-5 w-5" />
                </NavItem>
                <NavItem path="/settings" label="Settings">
                    <SettingsGear class="h-5 w-5" />
                </NavItem>
                <NavItem path="/support" label="Support">
                    <HelpCircle class="h-5 w-5" />
                </NavItem>
            </nav>

            <div class="p-4 border-t border-gray-200 dark:border-gray-700">
                <button
                    on:click=on_logout
                    class="w-full flex items-center gap-3 px-6 py-3 text-[#00002B] dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors rounded"
                >
                    <LogOut class="h-5 w-5" />
                    <span class="font-medium">"Logout"</span>
                </button>
            </div>
        </div>
    }
}
