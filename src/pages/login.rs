//! Login Page
//!
//! Email/password form for the OAuth2 password flow.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::{ApiClient, ApiError};
use crate::state::Session;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let api = use_context::<ApiClient>().expect("ApiClient not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (busy, set_busy) = create_signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_value = email.get();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            return;
        }

        set_busy.set(true);
        set_error.set(None);

        let api = api.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.login(&email_value, &password_value).await {
                Ok(token) => {
                    session.login(&token.access_token, &email_value);
                    navigate("/", Default::default());
                }
                Err(ApiError::InvalidCredentials) => {
                    set_error.set(Some("Incorrect email or password".to_string()));
                }
                Err(e) => {
                    set_error.set(Some(format!("Login failed: {}", e)));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-[70vh]">
            <div class="bg-gray-800 rounded-xl p-8 w-full max-w-md">
                <div class="text-center mb-8">
                    <div class="text-4xl mb-2">"🌙"</div>
                    <h1 class="text-2xl font-bold">"Sign in to Baseline"</h1>
                    <p class="text-gray-400 mt-1">"Your sleep, analyzed"</p>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                        <input
                            type="email"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    {move || {
                        error.get().map(|msg| view! {
                            <p class="text-sm text-red-400">{msg}</p>
                        })
                    }}

                    <button
                        type="submit"
                        disabled=move || busy.get()
                        class="w-full px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
