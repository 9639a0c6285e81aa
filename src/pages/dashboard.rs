//! Dashboard Page
//!
//! Main view: sleep snapshot cards, nightly trend bars, and the
//! insights teaser. The section class names double as anchors for the
//! onboarding tour, which auto-starts here on first visit.

use leptos::*;

use crate::api::{ApiClient, NightlySummary, SleepStats};
use crate::components::summary_card::SummaryCard;
use crate::components::Loading;
use crate::state::{AppState, Session};
use crate::tour;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let api = use_context::<ApiClient>().expect("ApiClient not found");
    let session = use_context::<Session>().expect("Session not found");

    let (stats, set_stats) = create_signal(None::<SleepStats>);
    let (summaries, set_summaries) = create_signal(Vec::<NightlySummary>::new());

    // Fetch initial data on mount
    {
        let api = api.clone();
        let state = state.clone();
        create_effect(move |_| {
            let api = api.clone();
            let state = state.clone();
            spawn_local(async move {
                state.loading.set(true);

                match api.sleep_stats().await {
                    Ok(fetched) => set_stats.set(Some(fetched)),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch sleep stats: {}", e).into(),
                        );
                    }
                }

                let start = super::recent_start_date(14);
                match api.nightly_summaries(Some(&start), None).await {
                    Ok(mut rows) => {
                        rows.sort_by(|a, b| a.date.cmp(&b.date));
                        set_summaries.set(rows);
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch nightly summaries: {}", e).into(),
                        );
                    }
                }

                state.loading.set(false);
            });
        });
    }

    // First visit: walk the user through the app once.
    {
        let state = state.clone();
        let session = session.clone();
        create_effect(move |_| {
            let storage = session.storage();
            if session.snapshot().authenticated
                && storage.get(tour::TOUR_COMPLETED_KEY).is_none()
            {
                let flag = session.storage();
                let tour = tour::start_tour(move || flag.set(tour::TOUR_COMPLETED_KEY, "true"));
                state.active_tour.set(Some(tour));
            }
        });
    }

    let take_tour = {
        let state = state.clone();
        let session = session.clone();
        move |_| {
            let flag = session.storage();
            let tour = tour::start_tour(move || flag.set(tour::TOUR_COMPLETED_KEY, "true"));
            state.active_tour.set(Some(tour));
        }
    };

    let avg_hours = Signal::derive(move || {
        stats
            .get()
            .map(|s| format!("{:.1}", s.average_sleep_hours))
    });
    let avg_efficiency = Signal::derive(move || {
        stats.get().map(|s| format!("{:.0}", s.average_efficiency))
    });
    let nights = Signal::derive(move || stats.get().map(|s| s.total_nights.to_string()));
    let nights_range = Signal::derive(move || {
        stats
            .get()
            .and_then(|s| s.date_range)
            .map(|range| format!("{} to {}", range.start, range.end))
    });
    let last_night = Signal::derive(move || {
        summaries
            .get()
            .last()
            .map(|s| format!("{:.1}", s.total_sleep_hours))
    });

    let loading = state.loading;

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Your recent sleep at a glance"</p>
                </div>

                <button
                    on:click=take_tour
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm
                           font-medium transition-colors"
                >
                    "Take the tour"
                </button>
            </div>

            // Sleep snapshot (tour anchor: .dashboard-card)
            <section class="dashboard-card">
                <h2 class="text-lg font-semibold mb-4">"Sleep Snapshot"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <SummaryCard label="Average Sleep" unit="hours".to_string() value=avg_hours />
                    <SummaryCard label="Sleep Efficiency" unit="%".to_string() value=avg_efficiency />
                    <SummaryCard label="Nights Tracked" value=nights detail=nights_range />
                    <SummaryCard label="Last Night" unit="hours".to_string() value=last_night />
                </div>
            </section>

            // Insights teaser (tour anchor: .insights-section)
            <section class="insights-section bg-gray-800 rounded-xl p-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h2 class="text-xl font-semibold">"AI-Powered Insights"</h2>
                        <p class="text-gray-400 mt-1">
                            "Personalized, science-backed analysis of your recent nights."
                        </p>
                    </div>
                    <a
                        href="/insights"
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                               font-medium transition-colors"
                    >
                        "View Insights"
                    </a>
                </div>
            </section>

            // Nightly trend (tour anchor: .visualization-section)
            <section class="visualization-section bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Sleep Trends"</h2>

                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! { <NightlyBars summaries=summaries /> }.into_view()
                    }
                }}
            </section>

            <RecentNights summaries=summaries />
        </div>
    }
}

/// Bar chart of total sleep per night over the recent window.
#[component]
fn NightlyBars(summaries: ReadSignal<Vec<NightlySummary>>) -> impl IntoView {
    view! {
        <div class="flex items-end space-x-1 h-40">
            {move || {
                let rows = summaries.get();

                if rows.is_empty() {
                    return view! {
                        <p class="text-gray-500">
                            "No sleep data yet. Upload a HealthKit export to get started."
                        </p>
                    }
                    .into_view();
                }

                let max = rows
                    .iter()
                    .map(|r| r.total_sleep_hours)
                    .fold(f64::NEG_INFINITY, f64::max)
                    .max(1.0);

                rows.iter()
                    .map(|row| {
                        let height_percent = ((row.total_sleep_hours / max) * 90.0 + 10.0) as i32;
                        let title = format!(
                            "{}: {:.1}h, {:.0}% efficiency",
                            row.date, row.total_sleep_hours, row.sleep_efficiency_pct
                        );
                        view! {
                            <div
                                class="flex-1 bg-primary-500 rounded-t opacity-80"
                                style=format!("height: {}%", height_percent)
                                title=title
                            />
                        }
                    })
                    .collect_view()
                    .into_view()
            }}
        </div>
    }
}

/// Table of the most recent nights.
#[component]
fn RecentNights(summaries: ReadSignal<Vec<NightlySummary>>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Recent Nights"</h2>

            {move || {
                let rows = summaries.get();
                if rows.is_empty() {
                    return view! {
                        <p class="text-gray-500">"Nothing here yet."</p>
                    }
                    .into_view();
                }

                view! {
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="text-left text-gray-400 border-b border-gray-700">
                                <th class="py-2">"Date"</th>
                                <th class="py-2">"Asleep"</th>
                                <th class="py-2">"In Bed"</th>
                                <th class="py-2">"Efficiency"</th>
                                <th class="py-2">"Source"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows.iter().rev().take(7).map(|row| view! {
                                <tr class="border-b border-gray-700/50">
                                    <td class="py-2">{row.date.clone()}</td>
                                    <td class="py-2">{format!("{:.1} h", row.total_sleep_hours)}</td>
                                    <td class="py-2">{format!("{:.0} min", row.time_in_bed_minutes)}</td>
                                    <td class="py-2">{format!("{:.0}%", row.sleep_efficiency_pct)}</td>
                                    <td class="py-2 text-gray-400">{row.source_name.clone()}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_view()
            }}
        </section>
    }
}
