use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::auth::{clear_error, login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (tracking_id, set_tracking_id) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    // 进入登录页时清掉上一次的错误
    clear_error(&auth);

    // 已认证（含持久化恢复）则直接进入面板
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            let state = auth.state.get();
            if !state.is_loading && state.is_authenticated {
                navigate("/dashboard", Default::default());
            }
        }
    });

    let error_msg = move || auth.state.get().error;
    let is_loading = move || auth.state.get().is_loading;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        clear_error(&auth);

        if email.get().trim().is_empty() || tracking_id.get().trim().is_empty() {
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            // 跳转交给上面的认证 Effect，成功后标志翻转即离开本页
            login(&auth, email.get_untracked(), tracking_id.get_untracked()).await;
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-white dark:bg-gray-900 flex flex-col lg:flex-row transition-colors">
            <div class="hidden lg:flex lg:w-1/2 bg-gray-50 dark:bg-gray-800 items-center justify-center p-8">
                <div class="text-center">
                    <h1 class="text-5xl font-bold text-[#00002B] dark:text-white mb-4">"kylian"</h1>
                    <p class="text-lg text-gray-600 dark:text-gray-400">
                        "Your onboarding journey starts here."
                    </p>
                </div>
            </div>

            <div class="w-full lg:w-1/2 flex flex-col">
                <div class="flex-1 flex items-center justify-center px-6 lg:px-12 xl:px-16 py-8">
                    <div class="w-full max-w-md">
                        <div class="mb-8">
                            <h1 class="text-2xl lg:text-3xl font-bold text-[#00002B] dark:text-white mb-2 leading-tight">
                                "Welcome to Onboarding!"
                            </h1>
                            <p class="text-lg text-[#00002B] dark:text-gray-300">
                                "Lets get you started."
                            </p>
                        </div>

                        <h2 class="text-3xl text-center lg:text-4xl font-bold text-[#00002B] dark:text-white mb-2">
                            "Sign In"
                        </h2>
                        <p class="text-base text-center text-[#00002B] dark:text-gray-300 mb-8">
                            "Enter your credentials to access your dashboard"
                        </p>

                        <Show when=move || error_msg().is_some()>
                            <div class="mb-4 p-3 bg-red-50 dark:bg-red-900/30 border border-red-200 dark:border-red-800 rounded-lg">
                                <p class="text-sm text-red-600 dark:text-red-300 text-center">
                                    {move || error_msg().unwrap_or_default()}
                                </p>
                            </div>
                        </Show>

                        <form on:submit=on_submit class="space-y-6">
                            <div>
                                <label
                                    for="email"
                                    class="block text-sm font-medium text-[#00002B] dark:text-gray-300 mb-2"
                                >
                                    "Email Address"
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class="w-full px-4 py-3 bg-gray-100 dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg focus:outline-none focus:ring-2 focus:ring-[#00002B] text-[#00002B] dark:text-white text-base"
                                    required
                                />
                            </div>

                            <div>
                                <label
                                    for="tracking-id"
                                    class="block text-sm font-medium text-[#00002B] dark:text-gray-300 mb-2"
                                >
                                    "Employee Tracking ID"
                                </label>
                                <input
                                    id="tracking-id"
                                    type="text"
                                    on:input=move |ev| set_tracking_id.set(event_target_value(&ev))
                                    prop:value=tracking_id
                                    class="w-full px-4 py-3 bg-gray-100 dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg focus:outline-none focus:ring-2 focus:ring-[#00002B] text-[#00002B] dark:text-white text-base"
                                    required
                                />
                            </div>

                            <button
                                type="submit"
                                disabled=move || is_loading() || is_submitting.get()
                                class="w-full py-3 bg-[#00002B] text-white font-bold rounded-lg hover:opacity-90 transition-opacity focus:outline-none text-base disabled:opacity-50 disabled:cursor-not-allowed"
                            >
                                {move || {
                                    if is_loading() || is_submitting.get() {
                                        "Signing In..."
                                    } else {
                                        "Sign In"
                                    }
                                }}
                            </button>
                        </form>

                        <p class="text-xs text-center text-gray-500 dark:text-gray-400 mt-8">
                            "By signing in, you agree to our Terms of Service and Privacy Policy"
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
