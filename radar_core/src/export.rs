//! Routes and export artifacts derived from a subject name.

use crate::types::ReportPayload;

/// Route of the intake form.
pub const INTAKE_PATH: &str = "/";

/// Prefix of the report detail route (`/report/:id`).
pub const REPORT_ROUTE_PREFIX: &str = "/report/";

/// MIME type of the downloaded report.
pub const TEXT_MIME: &str = "text/plain";

/// Detail route for `subject`, with the name URL-encoded as one path segment.
pub fn detail_path(subject: &str) -> String {
    format!("{REPORT_ROUTE_PREFIX}{}", urlencoding::encode(subject))
}

/// Decode a `:id` path segment back into a subject name.
///
/// Segments that are not valid percent-encoded UTF-8 are returned unchanged.
pub fn subject_from_path_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// Subject shown on the report page and used for the download name.
///
/// The decoded `:id` segment wins; the stored name only fills in when the
/// segment is missing or blank.
pub fn report_subject(segment: Option<&str>, payload: &ReportPayload) -> String {
    match segment.map(subject_from_path_segment) {
        Some(subject) if !subject.trim().is_empty() => subject,
        _ => payload.subject_name.clone(),
    }
}

/// File name offered for download, e.g. `HubSpot-competitor-report.txt`.
///
/// Path separators and control characters are replaced so the name stays a
/// single file name on every platform.
pub fn download_file_name(subject: &str, suffix: &str) -> String {
    let mut stem: String = subject
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if stem.is_empty() {
        stem.push_str("report");
    }
    format!("{stem}{suffix}")
}

/// A report materialized as a downloadable file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    /// Exactly the stored report text.
    pub contents: String,
}

impl ExportFile {
    pub fn from_text(subject: &str, text: &str, suffix: &str) -> Self {
        Self {
            file_name: download_file_name(subject, suffix),
            mime_type: TEXT_MIME,
            contents: text.to_string(),
        }
    }
}
