use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use onboarding_shared::{AcceptOfferRequest, profile};

use crate::api::PortalApi;
use crate::auth::{logout, use_auth};
use crate::components::header::Header;
use crate::components::icons::{Check, FileText, XMark};
use crate::components::onboarding_card::OnboardingCard;
use crate::components::sidebar::Sidebar;
use crate::pages::{document_url, time_based_greeting, use_auth_guard};

/// Offer 工作流状态。`Accepted` / `Rejected` 对本次 offer 都是终态，
/// 没有撤销路径。
#[derive(Clone, Copy, PartialEq, Eq)]
enum OfferStatus {
    Pending,
    Accepted,
    Rejected,
}

#[component]
pub fn JobOfferPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    use_auth_guard();

    let (offer_status, set_offer_status) = signal(OfferStatus::Pending);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (show_accept_confirm, set_show_accept_confirm) = signal(false);
    let (show_reject_confirm, set_show_reject_confirm) = signal(false);
    let (show_success, set_show_success) = signal(false);

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
    let role = move || auth.state.with(|s| profile::role_line(s.user.as_ref()));
    let education = move || auth.state.with(|s| profile::education_line(s.user.as_ref()));
    let initials = move || auth.state.with(|s| profile::initials(s.user.as_ref()));
    let avatar_class = move || {
        let color = auth.state.with(|s| profile::avatar_color(s.user.as_ref()));
        format!(
            "w-32 h-32 rounded-full flex items-center justify-center text-white text-3xl font-bold border-4 border-gray-100 dark:border-gray-700 {color}"
        )
    };
    let offer_letter = move || {
        auth.state.with(|s| {
            s.user
                .as_ref()
                .and_then(|u| u.offer_letter_url.as_deref())
                .filter(|p| !p.trim().is_empty())
                .map(document_url)
        })
    };

    // 接受流程：确认 → 从会话记录推导提交三元组（缺字段立即本地失败，
    // 不发请求）→ 远程调用 → 成功进入终态并弹出成功提示
    let on_confirm_accept = move |_| {
        set_show_accept_confirm.set(false);
        set_error_msg.set(None);

        let submission = auth
            .state
            .with_untracked(|s| s.user.as_ref().map(AcceptOfferRequest::for_employee));
        let Some(submission) = submission else {
            set_error_msg.set(Some("User information not available".to_string()));
            return;
        };
        let request = match submission {
            Ok(request) => request,
            Err(missing) => {
                set_error_msg.set(Some(missing.to_string()));
                return;
            }
        };

        set_is_submitting.set(true);
        spawn_local(async move {
            match PortalApi::default().accept_offer(request).await {
                Ok(_) => {
                    set_offer_status.set(OfferStatus::Accepted);
                    set_show_success.set(true);
                }
                Err(message) => set_error_msg.set(Some(message)),
            }
            set_is_submitting.set(false);
        });
    };

    // 拒绝只是本地终态：服务端没有对应的 reject 端点
    let on_confirm_reject = move |_| {
        set_show_reject_confirm.set(false);
        set_offer_status.set(OfferStatus::Rejected);
    };

    // 成功弹窗关闭后强制登出：清内存、purge 持久化会话、回登录页
    let on_success_continue = {
        let navigate = navigate.clone();
        move |_| {
            set_show_success.set(false);
            logout(&auth);
            navigate("/", Default::default());
        }
    };

    let accept_class = move || match (offer_status.get(), is_submitting.get()) {
        (OfferStatus::Pending, false) => {
            "flex-1 py-3 px-4 rounded-lg font-semibold text-sm flex items-center justify-center gap-2 bg-green-600 text-white hover:bg-green-700 shadow-md transition-all"
        }
        (OfferStatus::Pending, true) => {
            "flex-1 py-3 px-4 rounded-lg font-semibold text-sm flex items-center justify-center gap-2 bg-green-400 text-white cursor-not-allowed"
        }
        (OfferStatus::Accepted, _) => {
            "flex-1 py-3 px-4 rounded-lg font-semibold text-sm flex items-center justify-center gap-2 bg-green-100 text-green-700 cursor-not-allowed dark:bg-green-900/30 dark:text-green-300"
        }
        _ => {
            "flex-1 py-3 px-4 rounded-lg font-semibold text-sm flex items-center justify-center gap-2 bg-gray-100 text-gray-400 cursor-not-allowed"
        }
    };
    let reject_class = move || match offer_status.get() {
        OfferStatus::Pending => {
            "flex-1 py-3 px-4 rounded-lg font-semibold text-sm flex items-center justify-center gap-2 bg-red-600 text-white hover:bg-red-700 shadow-md transition-all"
        }
        OfferStatus::Rejected => {
            "flex-1 py-3 px-4 rounded-lg font-semibold text-sm flex items-center justify-center gap-2 bg-red-100 text-red-700 cursor-not-allowed"
        }
        OfferStatus::Accepted => {
            "flex-1 py-3 px-4 rounded-lg font-semibold text-sm flex items-center justify-center gap-2 bg-gray-100 text-gray-400 cursor-not-allowed"
        }
    };

    view! {
        <div class="flex min-h-screen bg-gray-50 dark:bg-gray-900 transition-colors">
            <Sidebar />

            <div class="flex-1 flex flex-col">
                <Header />

                <main class="flex-1 bg-white dark:bg-gray-900 p-6 overflow-y-auto transition-colors">
                    <div class="mb-6">
                        <h2 class="text-2xl font-bold text-[#00002B] dark:text-white mb-1">
                            {greeting}
                        </h2>
                        <p class="text-[#00002B]/80 dark:text-gray-400">"Welcome to kylian."</p>
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <div class="space-y-6">
                            // 候选人卡片
                            <div class="bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg p-6 transition-colors">
                                <div class="flex flex-col items-center">
                                    <div class="relative mb-4">
                                        <div class=avatar_class>{initials}</div>
                                    </div>
                                    <h3 class="text-xl font-bold text-[#00002B] dark:text-white mb-1">
                                        {full_name}
                                    </h3>
                                    <p class="text-sm text-gray-600 dark:text-gray-400 mb-1">{role}</p>
                                    <p class="text-sm text-gray-500 dark:text-gray-500 mb-4">
                                        {education}
                                    </p>
                                </div>
                            </div>

                            // Offer letter 区域
                            <div class="bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg p-6 transition-colors">
                                <h3 class="text-lg font-bold text-[#00002B] dark:text-white mb-4">
                                    "Offer Letter"
                                </h3>
                                <Show
                                    when=move || offer_letter().is_some()
                                    fallback=|| {
                                        view! {
                                            <div class="text-center py-12 text-gray-500 dark:text-gray-400">
                                                <FileText class="h-12 w-12 mx-auto mb-3 opacity-50" />
                                                <p class="text-lg font-medium mb-1">
                                                    "No offer letter available"
                                                </p>
                                                <p class="text-sm">
                                                    "Please contact HR if you believe this is an error."
                                                </p>
                                            </div>
                                        }
                                    }
                                >
                                    <div class="border border-gray-300 dark:border-gray-600 rounded-lg overflow-hidden mb-4 bg-gray-50 dark:bg-gray-900">
                                        <iframe
                                            src=move || {
                                                format!(
                                                    "{}#toolbar=0&navpanes=0&scrollbar=1",
                                                    offer_letter().unwrap_or_default(),
                                                )
                                            }
                                            class="w-full h-[600px] border-none"
                                            title="Offer Letter"
                                        ></iframe>
                                    </div>

                                    <Show when=move || error_msg.get().is_some()>
                                        <div class="mb-4 p-3 rounded-lg bg-red-50 dark:bg-red-900/30 border border-red-200 dark:border-red-800">
                                            <p class="text-sm font-medium text-red-800 dark:text-red-300">
                                                {move || error_msg.get().unwrap_or_default()}
                                            </p>
                                        </div>
                                    </Show>

                                    <Show when=move || offer_status.get() != OfferStatus::Pending>
                                        <div class=move || {
                                            if offer_status.get() == OfferStatus::Accepted {
                                                "mb-4 p-3 rounded-lg bg-green-50 dark:bg-green-900/30 border border-green-200 dark:border-green-800"
                                            } else {
                                                "mb-4 p-3 rounded-lg bg-red-50 dark:bg-red-900/30 border border-red-200 dark:border-red-800"
                                            }
                                        }>
                                            <p class=move || {
                                                if offer_status.get() == OfferStatus::Accepted {
                                                    "text-sm font-medium text-green-800 dark:text-green-300"
                                                } else {
                                                    "text-sm font-medium text-red-800 dark:text-red-300"
                                                }
                                            }>
                                                {move || {
                                                    if offer_status.get() == OfferStatus::Accepted {
                                                        "✓ You have accepted this job offer"
                                                    } else {
                                                        "✗ You have rejected this job offer"
                                                    }
                                                }}
                                            </p>
                                        </div>
                                    </Show>

                                    <div class="flex gap-3">
                                        <button
                                            on:click=move |_| set_show_accept_confirm.set(true)
                                            disabled=move || {
                                                offer_status.get() != OfferStatus::Pending
                                                    || is_submitting.get()
                                            }
                                            class=accept_class
                                        >
                                            <Check class="h-4 w-4" />
                                            {move || {
                                                if is_submitting.get() { "Accepting..." } else { "Accept Offer" }
                                            }}
                                        </button>
                                        <button
                                            on:click=move |_| set_show_reject_confirm.set(true)
                                            disabled=move || offer_status.get() != OfferStatus::Pending
                                            class=reject_class
                                        >
                                            <XMark class="h-4 w-4" />
                                            "Reject Offer"
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        </div>

                        <div class="space-y-6">
                            <OnboardingCard />
                        </div>
                    </div>
                </main>
            </div>

            // 接受确认弹窗
            <Show when=move || show_accept_confirm.get()>
                <div class="fixed inset-0 bg-black/50 dark:bg-black/70 flex items-center justify-center z-50">
                    <div class="bg-white dark:bg-gray-800 rounded-lg p-8 max-w-md w-full mx-4 shadow-xl border border-gray-200 dark:border-gray-700">
                        <div class="flex flex-col items-center text-center">
                            <div class="w-16 h-16 bg-green-100 dark:bg-green-900/30 rounded-full flex items-center justify-center mb-4">
                                <Check class="h-8 w-8 text-green-600 dark:text-green-400" />
                            </div>
                            <h3 class="text-2xl font-bold text-[#00002B] dark:text-white mb-2">
                                "Accept Job Offer?"
                            </h3>
                            <p class="text-gray-600 dark:text-gray-400 mb-6">
                                "Are you sure you want to accept this job offer? This action will finalize your acceptance."
                            </p>
                            <div class="flex gap-3 w-full">
                                <button
                                    on:click=move |_| set_show_accept_confirm.set(false)
                                    class="flex-1 border-2 border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300 py-3 px-6 rounded-lg font-semibold hover:bg-gray-50 dark:hover:bg-gray-700 transition-colors"
                                >
                                    "Cancel"
                                </button>
                                <button
                                    on:click=on_confirm_accept
                                    class="flex-1 bg-green-600 text-white py-3 px-6 rounded-lg font-semibold hover:bg-green-700 transition-colors"
                                >
                                    "Yes, Accept Offer"
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>

            // 拒绝确认弹窗
            <Show when=move || show_reject_confirm.get()>
                <div class="fixed inset-0 bg-black/50 dark:bg-black/70 flex items-center justify-center z-50">
                    <div class="bg-white dark:bg-gray-800 rounded-lg p-8 max-w-md w-full mx-4 shadow-xl border border-gray-200 dark:border-gray-700">
                        <div class="flex flex-col items-center text-center">
                            <div class="w-16 h-16 bg-red-100 dark:bg-red-900/30 rounded-full flex items-center justify-center mb-4">
                                <XMark class="h-8 w-8 text-red-600 dark:text-red-400" />
                            </div>
                            <h3 class="text-2xl font-bold text-[#00002B] dark:text-white mb-2">
                                "Reject Job Offer?"
                            </h3>
                            <p class="text-gray-600 dark:text-gray-400 mb-6">
                                "Are you sure you want to reject this job offer? This action cannot be undone."
                            </p>
                            <div class="flex gap-3 w-full">
                                <button
                                    on:click=move |_| set_show_reject_confirm.set(false)
                                    class="flex-1 border-2 border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300 py-3 px-6 rounded-lg font-semibold hover:bg-gray-50 dark:hover:bg-gray-700 transition-colors"
                                >
                                    "Cancel"
                                </button>
                                <button
                                    on:click=on_confirm_reject
                                    class="flex-1 bg-red-600 text-white py-3 px-6 rounded-lg font-semibold hover:bg-red-700 transition-colors"
                                >
                                    "Yes, Reject Offer"
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>

            // 接受成功弹窗；关闭即登出
            <Show when=move || show_success.get()>
                <div class="fixed inset-0 bg-black/50 dark:bg-black/70 flex items-center justify-center z-50">
                    <div class="bg-white dark:bg-gray-800 rounded-lg p-8 max-w-md w-full mx-4 shadow-xl border border-gray-200 dark:border-gray-700">
                        <div class="flex flex-col items-center text-center">
                            <div class="w-16 h-16 bg-green-100 dark:bg-green-900/30 rounded-full flex items-center justify-center mb-4">
                                <Check class="h-8 w-8 text-green-600 dark:text-green-400" />
                            </div>
                            <h3 class="text-2xl font-bold text-[#00002B] dark:text-white mb-2">
                                "Offer Accepted Successfully!"
                            </h3>
                            <p class="text-gray-600 dark:text-gray-400 mb-6">
                                "Congratulations! You have successfully accepted the job offer. You will be logged out and redirected to the login page."
                            </p>
                            <button
                                on:click=on_success_continue.clone()
                                class="w-full bg-[#00002B] text-white py-3 px-6 rounded-lg font-semibold hover:opacity-90 transition-colors"
                            >
                                "Continue"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
