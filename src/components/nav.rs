//! Navigation Component
//!
//! Header navigation bar. The `/data` and `/profile` links double as
//! anchors for the onboarding tour.

use leptos::*;
use leptos_router::*;

use crate::state::Session;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let state = session.signal();

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🌙"</span>
                        <span class="text-xl font-bold text-white">"Baseline"</span>
                    </A>

                    // Navigation links, only while signed in
                    {move || {
                        if state.get().authenticated {
                            view! {
                                <div class="flex items-center space-x-1">
                                    <NavLink href="/" label="Dashboard" />
                                    <NavLink href="/insights" label="Insights" />
                                    <NavLink href="/data" label="Data" />
                                    <NavLink href="/profile" label="Profile" />
                                </div>
                            }
                            .into_view()
                        } else {
                            view! {
                                <div class="flex items-center space-x-1">
                                    <NavLink href="/login" label="Sign In" />
                                </div>
                            }
                            .into_view()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
