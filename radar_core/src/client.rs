//! Client for the external report-generation endpoint.
//!
//! [`ReportApi`] is the seam between the submission flow and the network;
//! [`HttpReportClient`] is the real implementation on top of `reqwest`
//! (which uses `fetch` when compiled to wasm).

use std::future::Future;

use tracing::{debug, warn};

use crate::error::RadarError;
use crate::types::{ApiReply, ReportRequest};

/// Anything that can turn a [`ReportRequest`] into report text.
pub trait ReportApi {
    fn generate(&self, request: &ReportRequest) -> impl Future<Output = Result<String, RadarError>>;
}

/// `POST`s requests as JSON to a fixed endpoint.
#[derive(Clone, Debug)]
pub struct HttpReportClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpReportClient {
    /// `endpoint` must be an absolute URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ReportApi for HttpReportClient {
    async fn generate(&self, request: &ReportRequest) -> Result<String, RadarError> {
        debug!(endpoint = %self.endpoint, company = %request.company_name, "requesting report");
        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        interpret_reply(status, &body)
    }
}

/// Turn a status code and a reply body into report text or an error.
///
/// Success is decided by the status. A success reply without a non-empty
/// `report` string counts as a server failure.
pub fn interpret_reply(status: u16, body: &str) -> Result<String, RadarError> {
    let ok = (200..300).contains(&status);

    let reply: ApiReply = match serde_json::from_str(body) {
        Ok(reply) => reply,
        Err(e) if ok => return Err(e.into()),
        Err(e) => {
            warn!(status, "error reply is not JSON: {}", e);
            return Err(RadarError::Server {
                status,
                message: None,
            });
        }
    };

    if !ok {
        warn!(status, error = ?reply.error, "report endpoint refused request");
        return Err(RadarError::Server {
            status,
            message: reply.error,
        });
    }

    match reply.report {
        Some(report) if !report.is_empty() => Ok(report),
        _ => {
            warn!(status, "success reply without report text");
            Err(RadarError::Server {
                status,
                message: reply.error,
            })
        }
    }
}
