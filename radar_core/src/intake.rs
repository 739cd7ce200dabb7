//! Intake form: validation and the submit flow.
//!
//! [`submit_report`] is the whole "Generate report" button: validate, call
//! the endpoint once, store the result and tell the caller where to go next.
//! The view only owns the [`SubmitState`] it renders.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::client::ReportApi;
use crate::error::{MISSING_COMPANY_MESSAGE, RadarError};
use crate::export::detail_path;
use crate::store::ReportStore;
use crate::types::{ReportPayload, ReportRequest};

/// Raw values of the four form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntakeForm {
    pub company_name: String,
    pub company_url: String,
    pub industry: String,
    pub region: String,
}

impl IntakeForm {
    /// Build the request body, failing when the company name is blank.
    pub fn validate(&self) -> Result<ReportRequest, RadarError> {
        let company_name = self.company_name.trim();
        if company_name.is_empty() {
            return Err(RadarError::Validation(MISSING_COMPANY_MESSAGE.into()));
        }
        Ok(ReportRequest {
            company_name: company_name.to_string(),
            company_url: self.company_url.trim().to_string(),
            industry: self.industry.trim().to_string(),
            region: self.region.trim().to_string(),
        })
    }
}

/// What a successful submission hands to the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Handoff {
    pub payload: ReportPayload,
    /// Route of the reveal view for this subject.
    pub path: String,
}

/// Validate, request, store. One network call at most, none on invalid input.
pub async fn submit_report<A, S>(
    form: &IntakeForm,
    api: &A,
    store: &S,
    now: DateTime<Utc>,
) -> Result<Handoff, RadarError>
where
    A: ReportApi,
    S: ReportStore,
{
    let request = form.validate()?;
    info!(company = %request.company_name, "submitting report request");

    let report = api.generate(&request).await.inspect_err(|e| {
        warn!("report request failed: {}", e);
    })?;

    let payload = ReportPayload::new(request.company_name, report, now)?;
    store.save(&payload)?;

    let path = detail_path(&payload.subject_name);
    info!(path = %path, chars = payload.char_len(), "report ready");
    Ok(Handoff { payload, path })
}

/// Request lifecycle as the form renders it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    /// Request in flight; the button is disabled.
    Loading,
    /// Last attempt failed with this inline message.
    Failed(String),
}

impl SubmitState {
    /// Enter `Loading`, clearing any previous error.
    /// Returns `false` when a request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = SubmitState::Loading;
        true
    }

    /// Leave `Loading` with the outcome of the attempt.
    pub fn finish<T>(&mut self, outcome: &Result<T, RadarError>) {
        *self = match outcome {
            Ok(_) => SubmitState::Idle,
            Err(e) => SubmitState::Failed(e.user_message()),
        };
    }

    /// Record a failure that happened before any request was sent.
    pub fn reject(&mut self, error: &RadarError) {
        *self = SubmitState::Failed(error.user_message());
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SubmitState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
