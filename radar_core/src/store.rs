//! Transient report store.
//!
//! A [`ReportStore`] keeps the most recent [`ReportPayload`] under one fixed
//! key of a string key-value backend. In the browser the backend is session
//! storage; tests use [`MemoryBackend`]. A later submission overwrites the
//! previous payload.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::RadarError;
use crate::types::ReportPayload;

/// Minimal string key-value storage, shaped after the Web Storage API.
pub trait KeyValueBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, RadarError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), RadarError>;
    fn remove_item(&self, key: &str) -> Result<(), RadarError>;
}

/// Where the intake view leaves a payload and the reveal view picks it up.
pub trait ReportStore {
    /// Replace whatever was stored with `payload`.
    fn save(&self, payload: &ReportPayload) -> Result<(), RadarError>;
    /// The stored payload, or `None` when there is nothing usable.
    fn load(&self) -> Result<Option<ReportPayload>, RadarError>;
    fn clear(&self) -> Result<(), RadarError>;
}

/// [`ReportStore`] writing JSON under a single key of a backend.
#[derive(Debug, Clone)]
pub struct KeyedReportStore<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueBackend> KeyedReportStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }
}

impl<B: KeyValueBackend> ReportStore for KeyedReportStore<B> {
    fn save(&self, payload: &ReportPayload) -> Result<(), RadarError> {
        let json = encode_payload(payload)?;
        self.backend.set_item(&self.key, &json)?;
        debug!(key = %self.key, subject = %payload.subject_name, "report stored");
        Ok(())
    }

    fn load(&self) -> Result<Option<ReportPayload>, RadarError> {
        let Some(raw) = self.backend.get_item(&self.key)? else {
            debug!(key = %self.key, "no stored report");
            return Ok(None);
        };
        match decode_payload(&raw) {
            Ok(payload) => Ok(payload),
            Err(e) => {
                // A corrupt entry is indistinguishable from no entry for the reader.
                warn!(key = %self.key, "discarding unreadable stored report: {}", e);
                Ok(None)
            }
        }
    }

    fn clear(&self) -> Result<(), RadarError> {
        self.backend.remove_item(&self.key)
    }
}

/// Serialize a payload the way it is kept in session storage.
pub fn encode_payload(payload: &ReportPayload) -> Result<String, RadarError> {
    Ok(serde_json::to_string(payload)?)
}

/// Parse a stored payload. An entry with an empty report decodes to `None`.
pub fn decode_payload(raw: &str) -> Result<Option<ReportPayload>, RadarError> {
    let payload: ReportPayload = serde_json::from_str(raw)?;
    if payload.report_text.is_empty() {
        return Ok(None);
    }
    Ok(Some(payload))
}

/// In-process backend for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, RadarError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), RadarError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), RadarError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

impl<B: KeyValueBackend + ?Sized> KeyValueBackend for &B {
    fn get_item(&self, key: &str) -> Result<Option<String>, RadarError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), RadarError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), RadarError> {
        (**self).remove_item(key)
    }
}
