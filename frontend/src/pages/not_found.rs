use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::icons::{ArrowLeft, Home};

/// 浏览器后退（等价于 history.back()）
fn go_back() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.back();
        }
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    let quick_links = [
        ("/dashboard", "Dashboard"),
        ("/job-offer", "Job Offer"),
        ("/teams", "Teams"),
        ("/settings", "Settings"),
        ("/support", "Support"),
    ];

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex items-center justify-center px-4 transition-colors">
            <div class="text-center max-w-md w-full">
                <div class="mb-8">
                    <h1 class="text-9xl font-bold text-[#00002B] dark:text-white leading-none">
                        "404"
                    </h1>
                </div>

                <div class="mb-8">
                    <h2 class="text-3xl font-bold text-gray-900 dark:text-white mb-4">
                        "Page Not Found"
                    </h2>
                    <p class="text-gray-600 dark:text-gray-400 text-lg">
                        "Sorry, we couldn't find the page you're looking for. The page might have been moved, deleted, or the URL might be incorrect."
                    </p>
                </div>

                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button
                        on:click=move |_| go_back()
                        class="flex items-center justify-center gap-2 px-6 py-3 border border-gray-300 dark:border-gray-600 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors font-medium text-gray-700 dark:text-gray-300"
                    >
                        <ArrowLeft class="h-5 w-5" />
                        "Go Back"
                    </button>
                    <button
                        on:click={
                            let navigate = navigate.clone();
                            move |_| navigate("/dashboard", Default::default())
                        }
                        class="flex items-center justify-center gap-2 px-6 py-3 bg-[#00002B] text-white rounded-lg hover:opacity-90 transition-colors font-medium"
                    >
                        <Home class="h-5 w-5" />
                        "Go to Dashboard"
                    </button>
                </div>

                <div class="mt-12 pt-8 border-t border-gray-200 dark:border-gray-700">
                    <p class="text-sm text-gray-500 dark:text-gray-400 mb-4">
                        "You might be looking for:"
                    </p>
                    <div class="flex flex-wrap justify-center gap-4">
                        {quick_links
                            .into_iter()
                            .map(|(path, label)| {
                                let navigate = navigate.clone();
                                view! {
                                    <button
                                        on:click=move |_| navigate(path, Default::default())
                                        class="text-sm text-[#00002B] dark:text-blue-400 hover:underline"
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
