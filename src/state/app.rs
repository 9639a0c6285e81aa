//! Global Application State
//!
//! Reactive state shared across pages: transient toast messages, the
//! global loading flag, and the currently rendered tour, all Leptos
//! signals provided through context.

use leptos::{create_rw_signal, provide_context, RwSignal, SignalSet};

use crate::tour::Tour;

/// Signals provided to every component.
#[derive(Clone)]
pub struct AppState {
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Tour currently rendered by the overlay, if any
    pub active_tour: RwSignal<Option<Tour>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            active_tour: create_rw_signal(None),
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide app state to the component tree.
pub fn provide_app_state() {
    provide_context(AppState::new());
}
