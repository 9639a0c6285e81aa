//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::components::{Nav, Toast, TourOverlay};
use crate::pages::{Dashboard, Data, Insights, Login, Profile};
use crate::state::{default_storage, provide_app_state, Session};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_app_state();

    // The session is the one shared mutable value: created here, read
    // by the nav and every authenticated request, cleared on 401.
    let session = Session::new(default_storage());
    provide_context(session.clone());
    provide_context(ApiClient::new(session));

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/login" view=Login />
                        <Route path="/insights" view=Insights />
                        <Route path="/data" view=Data />
                        <Route path="/profile" view=Profile />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />

                // Onboarding walkthrough
                <TourOverlay />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🌙"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
