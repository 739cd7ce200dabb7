//! App-wide state provided by the root component.

use std::sync::Arc;

use leptos::prelude::*;
use radar_core::error::RadarError;
use radar_core::store::{KeyedReportStore, ReportStore};
use radar_core::{RadarConfig, ReportPayload};
use tracing::warn;

use crate::browser::{self, SessionBackend};

#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<RadarConfig>,
    /// Payload handed from the intake page to the report page.
    pub handoff: RwSignal<Option<ReportPayload>>,
}

impl AppContext {
    pub fn new(config: RadarConfig) -> Self {
        Self {
            config: Arc::new(config),
            handoff: RwSignal::new(None),
        }
    }

    pub fn store(&self) -> HandoffStore {
        let session = match browser::session_store(&self.config.storage.key) {
            Ok(store) => Some(store),
            Err(e) => {
                warn!("session storage unavailable, report will not survive a reload: {}", e);
                None
            }
        };
        HandoffStore {
            slot: self.handoff,
            session,
        }
    }
}

/// Passes the payload in memory and mirrors it into session storage.
///
/// The in-memory slot is authoritative; session storage only matters after a
/// reload, and failing to write it never fails a submission.
pub struct HandoffStore {
    slot: RwSignal<Option<ReportPayload>>,
    session: Option<KeyedReportStore<SessionBackend>>,
}

impl ReportStore for HandoffStore {
    fn save(&self, payload: &ReportPayload) -> Result<(), RadarError> {
        if let Some(session) = &self.session
            && let Err(e) = session.save(payload)
        {
            warn!("could not mirror report into session storage: {}", e);
        }
        self.slot.set(Some(payload.clone()));
        Ok(())
    }

    fn load(&self) -> Result<Option<ReportPayload>, RadarError> {
        if let Some(payload) = self.slot.get_untracked() {
            return Ok(Some(payload));
        }
        match &self.session {
            Some(session) => session.load(),
            None => Ok(None),
        }
    }

    fn clear(&self) -> Result<(), RadarError> {
        self.slot.set(None);
        match &self.session {
            Some(session) => session.clear(),
            None => Ok(()),
        }
    }
}
