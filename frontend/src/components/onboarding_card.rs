use leptos::prelude::*;

use onboarding_shared::profile;

use crate::auth::use_auth;

/// 进度环的半径与周长（视图框 128x128，描边 12）
const RING_RADIUS: f64 = 56.0;
const RING_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * RING_RADIUS;

/// Onboarding progress ring plus the remaining-steps checklist.
/// Recomputed from the session record on every render.
#[component]
pub fn OnboardingCard() -> impl IntoView {
    let auth = use_auth();

    let progress = Signal::derive(move || {
        auth.state
            .with(|s| profile::onboarding_progress(s.user.as_ref()))
    });
    let dash = move || {
        let filled = RING_CIRCUMFERENCE * f64::from(progress.get()) / 100.0;
        format!("{filled:.2} {RING_CIRCUMFERENCE:.2}")
    };

    let progress_items = [("Accept Job Offer", 50u8), ("Check Your Team", 50u8)];

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 p-6 transition-colors">
            <h3 class="text-lg font-bold text-[#00002B] dark:text-white mb-4">
                "Onboarding Status"
            </h3>
            <div class="flex flex-col items-center mb-6">
                <div class="relative w-32 h-32 mb-4">
                    <svg class="transform -rotate-90 w-32 h-32">
                        <circle
                            cx="64"
                            cy="64"
                            r="56"
                            stroke="#E5E7EB"
                            class="dark:stroke-gray-700"
                            stroke-width="12"
                            fill="none"
                        ></circle>
                        <circle
                            cx="64"
                            cy="64"
                            r="56"
                            stroke="#00002B"
                            stroke-width="12"
                            fill="none"
                            stroke-dasharray=dash
                            stroke-linecap="round"
                        ></circle>
                    </svg>
                    <div class="absolute inset-0 flex items-center justify-center">
                        <span class="text-2xl font-bold text-[#00002B] dark:text-white">
                            {move || format!("{}%", progress.get())}
                        </span>
                    </div>
                </div>
                <p class="text-sm text-gray-600 dark:text-gray-400 mb-4 text-center">
                    {move || format!("Your Onboarding is only {}% complete!", progress.get())}
                </p>
            </div>
            <div class="space-y-3">
                {progress_items
                    .into_iter()
                    .map(|(label, percent)| {
                        view! {
                            <div class="flex items-center justify-between p-3 bg-gray-50 dark:bg-gray-700 rounded-lg">
                                <span class="text-sm text-gray-600 dark:text-gray-300">{label}</span>
                                <span class="text-sm font-semibold text-[#00002B] dark:text-white">
                                    {format!("+{percent}%")}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
