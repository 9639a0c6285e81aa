//! Insights Page
//!
//! LLM-generated analysis of recent sleep: overview, recommendations,
//! and pattern commentary, with the supporting statistics.

use leptos::*;

use crate::api::{ApiClient, InsightsResponse};
use crate::state::AppState;

/// Insights page component
#[component]
pub fn Insights() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let api = use_context::<ApiClient>().expect("ApiClient not found");

    let (days, set_days) = create_signal(7_u32);
    let (report, set_report) = create_signal(None::<InsightsResponse>);
    let (loading, set_loading) = create_signal(false);

    let generate = {
        let api = api.clone();
        let state = state.clone();
        move |force_regenerate: bool| {
            set_loading.set(true);

            let api = api.clone();
            let state = state.clone();
            // Untracked: the mount effect must not re-run on selection
            // changes; the select handler triggers its own fetch.
            let days = days.get_untracked();
            spawn_local(async move {
                match api.generate_insights(days, force_regenerate).await {
                    Ok(fetched) => set_report.set(Some(fetched)),
                    Err(e) => state.show_error(&format!("Unable to generate insights: {}", e)),
                }
                set_loading.set(false);
            });
        }
    };

    // Fetch on mount; the backend serves from its cache when it can.
    {
        let generate = generate.clone();
        create_effect(move |_| {
            generate(false);
        });
    }

    let generate_for_select = generate.clone();
    let regenerate = generate.clone();

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Insights"</h1>
                    <p class="text-gray-400 mt-1">"What your recent sleep says about you"</p>
                </div>

                <div class="flex items-center space-x-3">
                    <select
                        on:change=move |ev| {
                            if let Ok(parsed) = event_target_value(&ev).parse() {
                                set_days.set(parsed);
                                generate_for_select(false);
                            }
                        }
                        class="bg-gray-700 rounded px-3 py-2 text-sm
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="7" selected>"Last 7 days"</option>
                        <option value="14">"Last 14 days"</option>
                        <option value="30">"Last 30 days"</option>
                    </select>

                    <button
                        on:click=move |_| regenerate(true)
                        disabled=move || loading.get()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg text-sm font-medium transition-colors"
                    >
                        "Regenerate"
                    </button>
                </div>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="animate-pulse space-y-3">
                            <div class="h-4 bg-gray-800 rounded w-3/4" />
                            <div class="h-4 bg-gray-800 rounded w-full" />
                            <div class="h-4 bg-gray-800 rounded w-5/6" />
                        </div>
                    }
                    .into_view()
                } else if let Some(report) = report.get() {
                    view! { <InsightsReport report=report /> }.into_view()
                } else {
                    view! {
                        <p class="text-gray-500">
                            "No insights yet. Upload some sleep data first."
                        </p>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

/// Rendered insights report.
#[component]
fn InsightsReport(report: InsightsResponse) -> impl IntoView {
    let stats = report.stats.clone();
    let generated = format!("Generated {}", report.generated_at);

    view! {
        <div class="space-y-8">
            // Overview
            <section class="bg-gray-800 rounded-xl p-6">
                <div class="flex items-start justify-between">
                    <h2 class="text-xl font-semibold mb-4">"Overview"</h2>
                    {report.from_cache.then(|| view! {
                        <span class="text-xs px-2 py-1 bg-gray-700 text-gray-400 rounded">
                            "Served from cache"
                        </span>
                    })}
                </div>
                <p class="text-gray-200 leading-relaxed whitespace-pre-wrap">
                    {report.insights.overview.clone()}
                </p>
            </section>

            <div class="grid lg:grid-cols-2 gap-8">
                // Recommendations
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Recommendations"</h2>
                    <ul class="space-y-3">
                        {report.insights.recommendations.iter().map(|rec| view! {
                            <li class="flex items-start space-x-3">
                                <span class="text-primary-400">"•"</span>
                                <span class="text-gray-200">{rec.clone()}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </section>

                // Patterns
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Patterns"</h2>
                    <p class="text-gray-200 leading-relaxed whitespace-pre-wrap">
                        {report.insights.patterns.clone()}
                    </p>
                </section>
            </div>

            // Supporting stats
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Based On"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 text-center">
                    <div>
                        <div class="text-2xl font-bold">
                            {format!("{}", stats.nights_analyzed)}
                        </div>
                        <div class="text-sm text-gray-400">"nights analyzed"</div>
                    </div>
                    <div>
                        <div class="text-2xl font-bold">
                            {format!("{:.1} h", stats.average_sleep_hours)}
                        </div>
                        <div class="text-sm text-gray-400">"average sleep"</div>
                    </div>
                    <div>
                        <div class="text-2xl font-bold">
                            {format!("{:.0}%", stats.average_efficiency)}
                        </div>
                        <div class="text-sm text-gray-400">"average efficiency"</div>
                    </div>
                    <div>
                        <div class="text-2xl font-bold">
                            {stats
                                .average_rem_pct
                                .map(|pct| format!("{:.0}%", pct))
                                .unwrap_or_else(|| "—".to_string())}
                        </div>
                        <div class="text-sm text-gray-400">"REM share"</div>
                    </div>
                </div>

                <p class="mt-4 text-xs text-gray-500">{generated}</p>
            </section>
        </div>
    }
}
