//! Wire Types
//!
//! Response shapes of the sleep analysis backend. All of these are
//! server-supplied value objects; the client never derives or caches
//! state of its own.

use serde::Deserialize;

/// One raw sleep-stage measurement from a HealthKit export.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SleepRecord {
    pub id: i64,
    pub record_type: String,
    pub source_name: String,
    #[serde(default)]
    pub source_version: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
    pub creation_date: String,
    pub start_date: String,
    pub end_date: String,
    pub value: String,
    pub sleep_stage: String,
    pub duration_minutes: f64,
    pub date: String,
}

/// Server-computed aggregate of one night's sleep.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NightlySummary {
    pub id: i64,
    pub date: String,
    pub sleep_start: String,
    pub sleep_end: String,
    pub total_sleep_minutes: f64,
    pub total_sleep_hours: f64,
    pub time_in_bed_minutes: f64,
    pub sleep_efficiency_pct: f64,
    pub source_name: String,
    #[serde(default)]
    pub asleep_core_minutes: Option<f64>,
    #[serde(default)]
    pub asleep_deep_minutes: Option<f64>,
    #[serde(default)]
    pub asleep_rem_minutes: Option<f64>,
    #[serde(default)]
    pub awake_minutes: Option<f64>,
    #[serde(default)]
    pub asleep_core_pct: Option<f64>,
    #[serde(default)]
    pub asleep_deep_pct: Option<f64>,
    #[serde(default)]
    pub asleep_rem_pct: Option<f64>,
    #[serde(default)]
    pub awake_pct: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}

/// First/last date covered by a data set, ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Aggregate statistics across all stored nights.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SleepStats {
    pub total_nights: u32,
    pub average_sleep_hours: f64,
    pub average_efficiency: f64,
    /// Absent when no data has been ingested yet.
    #[serde(default)]
    pub date_range: Option<DateRange>,
    #[serde(default)]
    pub average_rem_pct: Option<f64>,
    #[serde(default)]
    pub average_deep_pct: Option<f64>,
    #[serde(default)]
    pub average_core_pct: Option<f64>,
}

/// `GET /` health check.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HealthCheck {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// OAuth2 password-flow login response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Result of ingesting one HealthKit export file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IngestReport {
    pub message: String,
    pub records: u64,
    pub summaries: u64,
    pub nights: u64,
    pub date_range: DateRange,
}

/// LLM-generated insight text.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InsightText {
    pub overview: String,
    pub recommendations: Vec<String>,
    pub patterns: String,
}

/// Statistics backing a generated insight.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InsightStats {
    pub average_sleep_hours: f64,
    pub average_efficiency: f64,
    pub nights_analyzed: u32,
    #[serde(default)]
    pub date_range: Option<DateRange>,
    #[serde(default)]
    pub average_rem_pct: Option<f64>,
    #[serde(default)]
    pub average_deep_pct: Option<f64>,
}

/// `GET /api/insights/generate` response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct InsightsResponse {
    pub insights: InsightText,
    pub stats: InsightStats,
    pub generated_at: String,
    pub from_cache: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_tolerate_empty_database_shape() {
        // The backend returns only the three counters before any data
        // has been ingested.
        let stats: SleepStats = serde_json::from_str(
            r#"{"total_nights": 0, "average_sleep_hours": 0, "average_efficiency": 0}"#,
        )
        .unwrap();
        assert_eq!(stats.total_nights, 0);
        assert!(stats.date_range.is_none());
        assert!(stats.average_rem_pct.is_none());
    }

    #[test]
    fn insights_response_round_trips_cache_flag() {
        let body = r#"{
            "insights": {
                "overview": "You averaged 7.2 hours.",
                "recommendations": ["Keep a consistent bedtime."],
                "patterns": "Weekends run late."
            },
            "stats": {
                "average_sleep_hours": 7.2,
                "average_efficiency": 91.0,
                "nights_analyzed": 7,
                "date_range": {"start": "2024-03-01", "end": "2024-03-07"}
            },
            "generated_at": "2024-03-08T09:00:00",
            "from_cache": true
        }"#;
        let parsed: InsightsResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.from_cache);
        assert_eq!(parsed.insights.recommendations.len(), 1);
        assert_eq!(parsed.stats.nights_analyzed, 7);
    }

    #[test]
    fn summary_optional_stage_fields_default_to_none() {
        let body = r#"{
            "id": 1,
            "date": "2024-03-01",
            "sleep_start": "2024-02-29T23:10:00",
            "sleep_end": "2024-03-01T07:02:00",
            "total_sleep_minutes": 432.0,
            "total_sleep_hours": 7.2,
            "time_in_bed_minutes": 472.0,
            "sleep_efficiency_pct": 91.5,
            "source_name": "Apple Watch",
            "created_at": "2024-03-01T08:00:00",
            "updated_at": "2024-03-01T08:00:00"
        }"#;
        let summary: NightlySummary = serde_json::from_str(body).unwrap();
        assert!(summary.asleep_rem_pct.is_none());
        assert_eq!(summary.total_sleep_hours, 7.2);
    }
}
