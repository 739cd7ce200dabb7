//! # radar-core
//!
//! Browser-independent logic of the Competitor Radar front end.
//!
//! The front end is two views: an intake form that POSTs a company name to a
//! report endpoint, and a reveal view that types the returned report out
//! character by character. Everything here compiles natively as well as to
//! wasm, so the interesting behavior is testable without a browser.
//!
//! ## Quick Start
//!
//! ```rust
//! use radar_core::intake::{IntakeForm, submit_report};
//! use radar_core::reveal::{Reveal, RevealPhase};
//! use radar_core::store::{KeyedReportStore, MemoryBackend, ReportStore};
//! # use radar_core::{client::ReportApi, error::RadarError, types::ReportRequest};
//! # struct Canned;
//! # impl ReportApi for Canned {
//! #     async fn generate(&self, _: &ReportRequest) -> Result<String, RadarError> {
//! #         Ok("Acme runs 40 search ads.".into())
//! #     }
//! # }
//! # let api = Canned;
//!
//! let store = KeyedReportStore::new(MemoryBackend::new(), "latest_report");
//! let form = IntakeForm { company_name: "Acme".into(), ..Default::default() };
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let handoff = submit_report(&form, &api, &store, chrono::Utc::now()).await?;
//! assert_eq!(handoff.path, "/report/Acme");
//!
//! let mut reveal = Reveal::new(3);
//! reveal.load(handoff.payload.report_text);
//! while reveal.tick() == RevealPhase::Revealing {}
//! assert_eq!(reveal.visible(), "Acme runs 40 search ads.");
//! # Ok::<(), RadarError>(())
//! # }).unwrap();
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - request, reply and handoff payload
//! - [`intake`] - form validation and the submit flow
//! - [`client`] - the report endpoint
//! - [`store`] - transient payload store
//! - [`reveal`] - typewriter state machine
//! - [`export`] - routes and download files
//! - [`config`] - TOML configuration
//! - [`error`] - [`RadarError`]

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod intake;
pub mod reveal;
pub mod store;
pub mod types;

pub use config::RadarConfig;
pub use error::RadarError;
pub use reveal::{Reveal, RevealPhase};
pub use types::{ReportPayload, ReportRequest};
