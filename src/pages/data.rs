//! Data Page
//!
//! HealthKit export upload and the raw sleep-stage record list.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api::{ApiClient, IngestReport, SleepRecord};
use crate::components::loading::ListSkeleton;
use crate::state::AppState;

/// Data page component
#[component]
pub fn Data() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let api = use_context::<ApiClient>().expect("ApiClient not found");

    let (report, set_report) = create_signal(None::<IngestReport>);
    let (uploading, set_uploading) = create_signal(false);
    let (records, set_records) = create_signal(Vec::<SleepRecord>::new());
    let (loading_records, set_loading_records) = create_signal(true);

    let load_records = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_loading_records.set(true);
            spawn_local(async move {
                let start = super::recent_start_date(7);
                match api.sleep_records(Some(&start), None).await {
                    Ok(mut rows) => {
                        rows.sort_by(|a, b| b.start_date.cmp(&a.start_date));
                        set_records.set(rows);
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch sleep records: {}", e).into(),
                        );
                    }
                }
                set_loading_records.set(false);
            });
        }
    };

    // Fetch recent records on mount
    {
        let load_records = load_records.clone();
        create_effect(move |_| {
            load_records();
        });
    }

    let handle_file_upload = {
        let api = api.clone();
        let state = state.clone();
        let load_records = load_records.clone();
        move |ev: web_sys::Event| {
            let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();

            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                set_uploading.set(true);

                let api = api.clone();
                let state = state.clone();
                let load_records = load_records.clone();
                spawn_local(async move {
                    match api.ingest_health_export(&file).await {
                        Ok(result) => {
                            state.show_success(&format!(
                                "Ingested {} records across {} nights",
                                result.records, result.nights
                            ));
                            set_report.set(Some(result));
                            load_records();
                        }
                        Err(e) => {
                            state.show_error(&format!("Upload failed: {}", e));
                        }
                    }
                    set_uploading.set(false);
                });

                input.set_value("");
            }
        }
    };

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Data"</h1>
                <p class="text-gray-400 mt-1">"Upload Apple Health exports and inspect raw records"</p>
            </div>

            // Upload section
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Upload HealthKit Export"</h2>

                <label
                    class="flex items-center justify-center px-4 py-6 bg-gray-700
                           hover:bg-gray-600 rounded-lg cursor-pointer transition-colors
                           border-2 border-dashed border-gray-500 hover:border-primary-500"
                >
                    <input
                        type="file"
                        accept=".xml"
                        class="hidden"
                        on:change=handle_file_upload
                        disabled=move || uploading.get()
                    />
                    <span class="flex items-center gap-2">
                        {move || if uploading.get() {
                            view! { <span class="loading-spinner w-4 h-4"></span> }.into_view()
                        } else {
                            view! { <span>"📁"</span> }.into_view()
                        }}
                        {move || if uploading.get() {
                            "Uploading..."
                        } else {
                            "Choose export.xml"
                        }}
                    </span>
                </label>

                {move || {
                    report.get().map(|result| view! {
                        <div class="mt-4 p-4 bg-gray-700 rounded-lg text-sm space-y-1">
                            <p>{result.message.clone()}</p>
                            <p class="text-gray-400">
                                {format!(
                                    "{} records, {} summaries, {} nights ({} to {})",
                                    result.records,
                                    result.summaries,
                                    result.nights,
                                    result.date_range.start,
                                    result.date_range.end,
                                )}
                            </p>
                        </div>
                    })
                }}

                <div class="mt-4 text-xs text-gray-500">
                    <p>"How to export from Apple Health:"</p>
                    <ol class="list-decimal list-inside mt-1 space-y-1">
                        <li>"Open the Health app on your iPhone"</li>
                        <li>"Tap your profile picture → Export All Health Data"</li>
                        <li>"Unzip the download and upload export.xml here"</li>
                    </ol>
                </div>
            </section>

            // Raw records
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Recent Sleep Records"</h2>

                {move || {
                    if loading_records.get() {
                        return view! { <ListSkeleton count=5 /> }.into_view();
                    }

                    let rows = records.get();
                    if rows.is_empty() {
                        return view! {
                            <p class="text-gray-500">"No records in the last 7 days."</p>
                        }
                        .into_view();
                    }

                    view! {
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="text-left text-gray-400 border-b border-gray-700">
                                    <th class="py-2">"Night"</th>
                                    <th class="py-2">"Stage"</th>
                                    <th class="py-2">"Start"</th>
                                    <th class="py-2">"Duration"</th>
                                    <th class="py-2">"Source"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.iter().take(50).map(|row| view! {
                                    <tr class="border-b border-gray-700/50">
                                        <td class="py-2">{row.date.clone()}</td>
                                        <td class="py-2 capitalize">{row.sleep_stage.clone()}</td>
                                        <td class="py-2 text-gray-400">{row.start_date.clone()}</td>
                                        <td class="py-2">{format!("{:.0} min", row.duration_minutes)}</td>
                                        <td class="py-2 text-gray-400">{row.source_name.clone()}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_view()
                }}
            </section>
        </div>
    }
}
