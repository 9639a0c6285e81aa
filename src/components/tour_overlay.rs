//! Tour Overlay Component
//!
//! Modal card presenting the current onboarding tour step. The overlay
//! renders whatever tour sits in `AppState::active_tour` and clears
//! that slot once the tour leaves its active state.

use leptos::*;

use crate::state::AppState;
use crate::tour::{TourStatus, TOUR_STEPS};

/// Modal overlay for the onboarding walkthrough.
#[component]
pub fn TourOverlay() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        {move || {
            let Some(tour) = state.active_tour.get() else {
                return view! {}.into_view();
            };
            let Some(step) = tour.current_step() else {
                return view! {}.into_view();
            };
            let index = tour.step_index().unwrap_or(0);

            if let Some(anchor) = step.anchor {
                scroll_anchor_into_view(anchor.selector);
            }

            let buttons = step
                .buttons
                .iter()
                .map(|button| {
                    let tour = tour.clone();
                    let state = state.clone();
                    let action = button.action;
                    let class = if button.secondary {
                        "px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg \
                         text-sm font-medium transition-colors"
                    } else {
                        "px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg \
                         text-sm font-medium transition-colors"
                    };

                    view! {
                        <button
                            class=class
                            on:click=move |_| {
                                tour.press(action);
                                if !matches!(tour.status(), TourStatus::Active(_)) {
                                    state.active_tour.set(None);
                                }
                            }
                        >
                            {button.label}
                        </button>
                    }
                })
                .collect_view();

            view! {
                <div class="fixed inset-0 z-40 bg-black bg-opacity-60 flex items-center justify-center">
                    <div class="baseline-tour-step bg-gray-800 border border-gray-600 rounded-xl \
                                p-6 max-w-md w-full mx-4 shadow-2xl">
                        <h3 class="text-xl font-semibold mb-2">{step.title}</h3>
                        <p class="text-gray-300 leading-relaxed">{step.body}</p>

                        <div class="mt-4 text-xs text-gray-500">
                            {format!("Step {} of {}", index + 1, TOUR_STEPS.len())}
                        </div>

                        <div class="mt-6 flex justify-end space-x-2">
                            {buttons}
                        </div>
                    </div>
                </div>
            }
            .into_view()
        }}
    }
}

/// Bring the step's anchor element into view, like the tour library's
/// smooth-scroll behavior. No-op when the element is absent.
fn scroll_anchor_into_view(selector: &str) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        if let Ok(Some(element)) = document.query_selector(selector) {
            element.scroll_into_view();
        }
    }
}
