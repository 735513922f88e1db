use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::icons::{HelpCircle, Mail, Phone, Send};
use crate::components::sidebar::Sidebar;
use crate::pages::use_auth_guard;

#[component]
pub fn SupportPage() -> impl IntoView {
    use_auth_guard();

    let (category, set_category) = signal("general".to_string());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitted, set_submitted) = signal(false);

    // 表单只在本地处理：确认提交并清空；没有对应的远程端点
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if subject.get().trim().is_empty() || message.get().trim().is_empty() {
            return;
        }
        set_category.set("general".to_string());
        set_subject.set(String::new());
        set_message.set(String::new());
        set_submitted.set(true);
        set_timeout(
            move || set_submitted.set(false),
            std::time::Duration::from_secs(3),
        );
    };

    view! {
        <div class="flex min-h-screen bg-gray-50 dark:bg-gray-900 transition-colors">
            <Sidebar />

            <div class="flex-1 flex flex-col">
                <Header />

                <main class="flex-1 p-6 overflow-y-auto bg-gray-50 dark:bg-gray-900 transition-colors">
                    <div class="mb-6">
                        <h2 class="text-2xl font-bold text-[#00002B] dark:text-white mb-1">
                            "Support"
                        </h2>
                        <p class="text-gray-600 dark:text-gray-400">
                            "Get help or contact our support team"
                        </p>
                    </div>

                    <Show when=move || submitted.get()>
                        <div class="max-w-4xl mb-6 p-3 bg-green-50 dark:bg-green-900/30 border border-green-200 dark:border-green-800 rounded-lg">
                            <p class="text-sm text-green-800 dark:text-green-300">
                                "Support request submitted successfully! We will get back to you soon."
                            </p>
                        </div>
                    </Show>

                    <div class="max-w-4xl grid grid-cols-1 lg:grid-cols-3 gap-6">
                        <div class="lg:col-span-1 space-y-4">
                            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 p-6 transition-colors">
                                <div class="flex items-center gap-3 mb-4">
                                    <Mail class="h-6 w-6 text-[#00002B] dark:text-white" />
                                    <h3 class="text-lg font-semibold text-[#00002B] dark:text-white">
                                        "Email Support"
                                    </h3>
                                </div>
                                <p class="text-gray-600 dark:text-gray-400 text-sm mb-2">
                                    "Send us an email and we'll respond within 24 hours"
                                </p>
                                <a
                                    href="mailto:support@kylianerp.com"
                                    class="text-[#00002B] dark:text-blue-400 hover:underline font-medium"
                                >
                                    "support@kylianerp.com"
                                </a>
                            </div>

                            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 p-6 transition-colors">
                                <div class="flex items-center gap-3 mb-4">
                                    <Phone class="h-6 w-6 text-[#00002B] dark:text-white" />
                                    <h3 class="text-lg font-semibold text-[#00002B] dark:text-white">
                                        "Phone Support"
                                    </h3>
                                </div>
                                <p class="text-gray-600 dark:text-gray-400 text-sm mb-2">
                                    "Call us during business hours"
                                </p>
                                <a
                                    href="tel:+1234567890"
                                    class="text-[#00002B] dark:text-blue-400 hover:underline font-medium"
                                >
                                    "+1 (234) 567-890"
                                </a>
                            </div>
                        </div>

                        <div class="lg:col-span-2">
                            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 p-6 transition-colors">
                                <div class="flex items-center gap-3 mb-6">
                                    <HelpCircle class="h-6 w-6 text-[#00002B] dark:text-white" />
                                    <h3 class="text-xl font-semibold text-[#00002B] dark:text-white">
                                        "Submit a Request"
                                    </h3>
                                </div>

                                <form on:submit=on_submit class="space-y-4">
                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                            "Category"
                                        </label>
                                        <select
                                            on:change=move |ev| set_category.set(event_target_value(&ev))
                                            prop:value=category
                                            class="w-full px-4 py-2 bg-gray-50 dark:bg-gray-700 border border-gray-200 dark:border-gray-600 rounded-lg text-gray-700 dark:text-gray-300"
                                        >
                                            <option value="general">"General Question"</option>
                                            <option value="onboarding">"Onboarding Issue"</option>
                                            <option value="documents">"Document Problem"</option>
                                            <option value="technical">"Technical Issue"</option>
                                        </select>
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                            "Subject"
                                        </label>
                                        <input
                                            type="text"
                                            on:input=move |ev| set_subject.set(event_target_value(&ev))
                                            prop:value=subject
                                            placeholder="How can we help?"
                                            class="w-full px-4 py-2 bg-gray-50 dark:bg-gray-700 border border-gray-200 dark:border-gray-600 rounded-lg text-gray-700 dark:text-gray-300"
                                            required
                                        />
                                    </div>

                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                            "Message"
                                        </label>
                                        <textarea
                                            on:input=move |ev| set_message.set(event_target_value(&ev))
                                            prop:value=message
                                            rows="6"
                                            placeholder="Describe your issue or question..."
                                            class="w-full px-4 py-2 bg-gray-50 dark:bg-gray-700 border border-gray-200 dark:border-gray-600 rounded-lg text-gray-700 dark:text-gray-300"
                                            required
                                        ></textarea>
                                    </div>

                                    <button
                                        type="submit"
                                        class="flex items-center gap-2 px-6 py-3 bg-[#00002B] text-white font-semibold rounded-lg hover:opacity-90 transition-opacity"
                                    >
                                        <Send class="h-4 w-4" />
                                        "Submit Request"
                                    </button>
                                </form>
                            </div>
                        </div>
                    </div>
                </main>
            </div>
        </div>
    }
}
