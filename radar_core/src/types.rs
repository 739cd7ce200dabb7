//! Data carried between the intake form, the report endpoint and the reveal view.
//!
//! Three shapes cross a boundary:
//!
//! - [`ReportRequest`] - JSON body POSTed to the report endpoint
//! - [`ApiReply`] - JSON body the endpoint answers with
//! - [`ReportPayload`] - what the intake view hands over to the reveal view,
//!   also persisted in session storage so a reload keeps the report
//!
//! # Example
//!
//! ```rust
//! use radar_core::types::ReportPayload;
//!
//! let payload = ReportPayload::new("HubSpot", "## Positioning\n...", chrono::Utc::now())
//!     .expect("non-empty report");
//! assert_eq!(payload.subject_name, "HubSpot");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RadarError;

/// Body of the report-generation request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    /// Company to analyze (never blank once validated)
    pub company_name: String,
    /// Company website, `""` when not given
    pub company_url: String,
    /// Industry hint, `""` when not given
    pub industry: String,
    /// Region hint, `""` when not given
    pub region: String,
}

/// Reply body of the report endpoint.
///
/// Success replies carry `report`, failures carry `error`. Which one we read
/// depends on the HTTP status, not on which field happens to be present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiReply {
    /// Generated report text
    #[serde(default)]
    pub report: Option<String>,
    /// Server-side failure description
    #[serde(default)]
    pub error: Option<String>,
}

/// Report handed from the intake view to the reveal view.
///
/// Serialized with the field names the session store has always used:
/// `{"id": ..., "report": ..., "timestamp": <unix millis>}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPayload {
    /// Company the report is about
    #[serde(rename = "id")]
    pub subject_name: String,
    /// Full report text, never empty
    #[serde(rename = "report")]
    pub report_text: String,
    /// When the submission succeeded
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl ReportPayload {
    /// Build a payload, rejecting an empty report text.
    pub fn new(
        subject_name: impl Into<String>,
        report_text: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, RadarError> {
        let report_text = report_text.into();
        if report_text.is_empty() {
            return Err(RadarError::Decode("report text is empty".into()));
        }
        Ok(Self {
            subject_name: subject_name.into(),
            report_text,
            created_at,
        })
    }

    /// Number of characters the reveal has to walk through.
    pub fn char_len(&self) -> usize {
        self.report_text.chars().count()
    }
}
