//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod data;
pub mod insights;
pub mod login;
pub mod profile;

pub use dashboard::Dashboard;
pub use data::Data;
pub use insights::Insights;
pub use login::Login;
pub use profile::Profile;

/// ISO date `days` days back from today, inclusive of today, for the
/// backend's `start_date` filter.
pub(crate) fn recent_start_date(days: u64) -> String {
    let today = chrono::Utc::now().date_naive();
    today
        .checked_sub_days(chrono::Days::new(days.saturating_sub(1)))
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_start_date_is_iso_formatted() {
        let date = recent_start_date(14);
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[4], b'-');
        assert_eq!(date.as_bytes()[7], b'-');
    }

    #[test]
    fn one_day_window_starts_today() {
        let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(recent_start_date(1), today);
    }
}
