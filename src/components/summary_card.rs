//! Summary Card Component
//!
//! Stat card for the dashboard's sleep snapshot row.

use leptos::*;

/// One headline number with its label and an optional detail line.
#[component]
pub fn SummaryCard(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional)]
    unit: Option<String>,
    #[prop(optional)]
    detail: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                {unit.map(|u| view! {
                    <span class="text-gray-500 text-xs">{u}</span>
                })}
            </div>

            <div class="text-3xl font-bold mt-2">
                {move || value.get().unwrap_or_else(|| "—".to_string())}
            </div>

            {detail.map(|detail| view! {
                <div class="mt-2 text-sm text-gray-400">
                    {move || detail.get().unwrap_or_default()}
                </div>
            })}
        </div>
    }
}
