//! HTTP API Client
//!
//! Typed operations against the Baseline REST API. All requests go to
//! one fixed backend origin; authenticated calls carry a bearer token
//! read from the session, and any 401 clears the session and bounces
//! the user to the login page before the error reaches the caller.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::rc::Rc;

use crate::api::error::ApiError;
use crate::api::types::{
    HealthCheck, IngestReport, InsightsResponse, NightlySummary, SleepRecord, SleepStats,
    TokenResponse,
};
use crate::state::session::Session;

/// Default backend origin.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Handle for talking to the backend.
///
/// Carries the session it reads tokens from and mutates on 401, so it
/// is created once at app startup and passed through context rather
/// than living in module-level state.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    session: Session,
    on_unauthorized: Rc<dyn Fn()>,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self::with_base(session, DEFAULT_API_BASE)
    }

    pub fn with_base(session: Session, base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            session,
            on_unauthorized: Rc::new(redirect_to_login),
        }
    }

    /// Replace the 401 side effect. The default redirects the browser
    /// to `/login`; tests substitute a counter.
    pub fn on_unauthorized(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Rc::new(hook);
        self
    }

    /// Login with the OAuth2 password flow.
    ///
    /// The email is submitted under the `username` form field, which is
    /// what the backend's OAuth2 contract expects. Does not touch the
    /// session; the caller stores the returned token.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("form data unavailable".to_string()))?;
        for (name, value) in login_form_fields(email, password) {
            form.append_with_str(name, &value)
                .map_err(|_| ApiError::Network("form data unavailable".to_string()))?;
        }

        let response = Request::post(&self.url("/api/auth/login"))
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| self.network_error("/api/auth/login", e))?;

        if !response.ok() {
            return Err(ApiError::InvalidCredentials);
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Service health check, unauthenticated.
    pub async fn health_check(&self) -> Result<HealthCheck, ApiError> {
        let response = Request::get(&self.url("/"))
            .send()
            .await
            .map_err(|e| self.network_error("/", e))?;
        self.check(&response)?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Nightly sleep summaries, optionally filtered to a date range.
    pub async fn nightly_summaries(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<NightlySummary>, ApiError> {
        let path = format!(
            "/api/sleep/summary{}",
            date_range_query(start_date, end_date)
        );
        self.fetch_json(&path).await
    }

    /// Raw sleep-stage records, optionally filtered to a date range.
    pub async fn sleep_records(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<SleepRecord>, ApiError> {
        let path = format!(
            "/api/sleep/records{}",
            date_range_query(start_date, end_date)
        );
        self.fetch_json(&path).await
    }

    /// Aggregate statistics across all stored nights.
    pub async fn sleep_stats(&self) -> Result<SleepStats, ApiError> {
        self.fetch_json("/api/sleep/stats").await
    }

    /// Upload one HealthKit `export.xml` as multipart form data.
    pub async fn ingest_health_export(
        &self,
        file: &web_sys::File,
    ) -> Result<IngestReport, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("form data unavailable".to_string()))?;
        form.append_with_blob("file", file)
            .map_err(|_| ApiError::Network("form data unavailable".to_string()))?;

        let response = self
            .authorize(Request::post(&self.url("/api/ingest")))
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| self.network_error("/api/ingest", e))?;
        self.check(&response)?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Request LLM-generated insights over the trailing `days` days.
    ///
    /// `force_regenerate` bypasses the server-side insights cache and
    /// is only put on the wire when set.
    pub async fn generate_insights(
        &self,
        days: u32,
        force_regenerate: bool,
    ) -> Result<InsightsResponse, ApiError> {
        let path = format!(
            "/api/insights/generate{}",
            insights_query(days, force_regenerate)
        );
        self.fetch_json(&path).await
    }

    /// Authenticated GET returning JSON.
    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| self.network_error(path, e))?;
        self.check(&response)?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Attach the bearer token when the session has one.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Map a non-success response to an error, running the 401 side
    /// effects first. Uniform across endpoints.
    fn check(&self, response: &Response) -> Result<(), ApiError> {
        if response.ok() {
            return Ok(());
        }
        let err = error_for_status(response.status(), &response.status_text());
        if err == ApiError::Unauthorized {
            self.handle_unauthorized();
        }
        Err(err)
    }

    /// Clear the session and trigger the login redirect. Safe to run
    /// more than once.
    fn handle_unauthorized(&self) {
        self.session.logout();
        (self.on_unauthorized)();
    }

    fn network_error(&self, path: &str, err: gloo_net::Error) -> ApiError {
        web_sys::console::error_1(
            &format!("API request failed: {}{}: {}", self.base, path, err).into(),
        );
        ApiError::Network(err.to_string())
    }
}

/// Map an HTTP status to the error callers see.
fn error_for_status(status: u16, reason: &str) -> ApiError {
    if status == 401 {
        ApiError::Unauthorized
    } else {
        ApiError::Request {
            status,
            reason: reason.to_string(),
        }
    }
}

/// Form fields for the login request. The backend's OAuth2 password
/// flow requires the email under `username`.
fn login_form_fields(email: &str, password: &str) -> [(&'static str, String); 2] {
    [
        ("username", email.to_string()),
        ("password", password.to_string()),
    ]
}

/// Build the `?start_date=..&end_date=..` suffix, omitting parameters
/// that were not supplied.
fn date_range_query(start_date: Option<&str>, end_date: Option<&str>) -> String {
    let mut params = Vec::new();
    if let Some(start) = start_date {
        params.push(format!("start_date={}", start));
    }
    if let Some(end) = end_date {
        params.push(format!("end_date={}", end));
    }
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

/// Build the insights query. `force_regenerate` only appears when true.
fn insights_query(days: u32, force_regenerate: bool) -> String {
    let mut query = format!("?days={}", days);
    if force_regenerate {
        query.push_str("&force_regenerate=true");
    }
    query
}

fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::storage::MemoryStorage;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn date_range_query_omits_missing_params() {
        assert_eq!(date_range_query(None, None), "");
        assert_eq!(
            date_range_query(Some("2024-03-01"), None),
            "?start_date=2024-03-01"
        );
        assert_eq!(
            date_range_query(None, Some("2024-03-07")),
            "?end_date=2024-03-07"
        );
        assert_eq!(
            date_range_query(Some("2024-03-01"), Some("2024-03-07")),
            "?start_date=2024-03-01&end_date=2024-03-07"
        );
    }

    #[test]
    fn insights_query_includes_force_flag_only_when_set() {
        assert_eq!(insights_query(7, false), "?days=7");
        assert_eq!(insights_query(7, true), "?days=7&force_regenerate=true");
        assert_eq!(insights_query(30, false), "?days=30");
    }

    #[test]
    fn login_form_puts_email_under_username() {
        let fields = login_form_fields("user@x.com", "pw");
        assert_eq!(fields[0], ("username", "user@x.com".to_string()));
        assert_eq!(fields[1], ("password", "pw".to_string()));
    }

    #[test]
    fn non_success_statuses_carry_the_status() {
        assert_eq!(error_for_status(401, "Unauthorized"), ApiError::Unauthorized);
        assert_eq!(
            error_for_status(503, "Service Unavailable"),
            ApiError::Request {
                status: 503,
                reason: "Service Unavailable".to_string(),
            }
        );
        assert_eq!(error_for_status(404, "Not Found").status(), Some(404));
    }

    #[test]
    fn unauthorized_clears_session_and_redirects() {
        let runtime = leptos::create_runtime();

        let session = Session::new(Rc::new(MemoryStorage::new()));
        session.login("tok-123", "user@x.com");

        let redirects = Rc::new(Cell::new(0u32));
        let counter = redirects.clone();
        let client = ApiClient::new(session.clone()).on_unauthorized(move || {
            counter.set(counter.get() + 1);
        });

        client.handle_unauthorized();
        assert_eq!(redirects.get(), 1);
        assert!(session.token().is_none());
        assert!(!session.snapshot().authenticated);

        // A second 401 repeats the side effects without blowing up.
        client.handle_unauthorized();
        assert_eq!(redirects.get(), 2);

        runtime.dispose();
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let runtime = leptos::create_runtime();
        let session = Session::new(Rc::new(MemoryStorage::new()));
        let client = ApiClient::with_base(session, "http://localhost:5000/");
        assert_eq!(
            client.url("/api/sleep/stats"),
            "http://localhost:5000/api/sleep/stats"
        );
        runtime.dispose();
    }
}
