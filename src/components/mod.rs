//! UI Components
//!
//! Reusable Leptos components for the Baseline frontend.

pub mod loading;
pub mod nav;
pub mod summary_card;
pub mod toast;
pub mod tour_overlay;

pub use loading::Loading;
pub use nav::Nav;
pub use summary_card::SummaryCard;
pub use toast::Toast;
pub use tour_overlay::TourOverlay;
