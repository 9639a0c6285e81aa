//! Profile Page
//!
//! Account details, tour restart, backend status, and sign out.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::{ApiClient, HealthCheck};
use crate::state::{AppState, Session};
use crate::tour;

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let api = use_context::<ApiClient>().expect("ApiClient not found");
    let session = use_context::<Session>().expect("Session not found");

    let (health, set_health) = create_signal(None::<HealthCheck>);

    // Backend status on mount
    {
        let api = api.clone();
        create_effect(move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.health_check().await {
                    Ok(fetched) => set_health.set(Some(fetched)),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Health check failed: {}", e).into(),
                        );
                    }
                }
            });
        });
    }

    let navigate = use_navigate();
    let sign_out = {
        let session = session.clone();
        let navigate = navigate.clone();
        move |_| {
            session.logout();
            navigate("/login", Default::default());
        }
    };

    // Clearing the flag mirrors the backend's tour-restart endpoint:
    // the dashboard will start a fresh walkthrough on arrival.
    let restart_tour = {
        let session = session.clone();
        let navigate = navigate.clone();
        move |_| {
            session.storage().remove(tour::TOUR_COMPLETED_KEY);
            navigate("/", Default::default());
        }
    };

    let username = session.signal();

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Profile"</h1>
                <p class="text-gray-400 mt-1">"Your account and preferences"</p>
            </div>

            // Account
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Account"</h2>

                <div class="flex items-center justify-between p-4 bg-gray-700 rounded-lg">
                    <div>
                        <h3 class="font-medium">"Signed in as"</h3>
                        <p class="text-sm text-gray-400">
                            {move || username.get().username.unwrap_or_else(|| "unknown".to_string())}
                        </p>
                    </div>
                    <button
                        on:click=sign_out
                        class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg
                               font-medium transition-colors"
                    >
                        "Sign Out"
                    </button>
                </div>
            </section>

            // Preferences
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Preferences"</h2>

                <div class="flex items-center justify-between p-4 bg-gray-700 rounded-lg">
                    <div>
                        <h3 class="font-medium">"Application tour"</h3>
                        <p class="text-sm text-gray-400">"Replay the onboarding walkthrough"</p>
                    </div>
                    <button
                        on:click=restart_tour
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                               font-medium transition-colors"
                    >
                        "Restart Tour"
                    </button>
                </div>
            </section>

            // Backend status
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Service"</h2>

                {move || {
                    match health.get() {
                        Some(check) => view! {
                            <div class="flex items-center space-x-3 text-sm">
                                <span class="w-2 h-2 bg-green-400 rounded-full" />
                                <span>{check.service.clone()}</span>
                                <span class="text-gray-400">{format!("v{}", check.version)}</span>
                                <span class="text-gray-400 capitalize">{check.status.clone()}</span>
                            </div>
                        }
                        .into_view(),
                        None => view! {
                            <div class="flex items-center space-x-3 text-sm">
                                <span class="w-2 h-2 bg-gray-500 rounded-full" />
                                <span class="text-gray-400">"Status unknown"</span>
                            </div>
                        }
                        .into_view(),
                    }
                }}
            </section>
        </div>
    }
}
