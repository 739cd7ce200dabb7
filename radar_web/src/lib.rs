//! Competitor Radar front end - Leptos 0.8 CSR.
//!
//! Two routes: `/` collects a company and requests a report, `/report/:id`
//! types the report out and offers download and copy. The logic behind both
//! lives in `radar-core`; this crate is views and browser glue.

pub mod browser;
pub mod context;
pub mod logging;
pub mod pages;
pub mod sections;
pub mod styles;
pub mod ticker;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use radar_core::RadarConfig;
use tracing::{info, warn};

use context::AppContext;
use pages::{IntakePage, NotFoundPage, ReportPage};

/// Settings compiled into the bundle.
pub const EMBEDDED_CONFIG: &str = include_str!("../radar.toml");

/// Boot the app: panic hook, logging, config, mount.
pub fn run() {
    console_error_panic_hook::set_once();

    let parsed = RadarConfig::from_toml_str(EMBEDDED_CONFIG);
    let config = parsed.clone().unwrap_or_default();
    logging::init(&config.log.level);
    if let Err(e) = parsed {
        warn!("embedded radar.toml rejected, using defaults: {}", e);
    }
    info!(
        version = env!("CARGO_PKG_VERSION"),
        endpoint = %config.api.endpoint,
        "starting competitor radar"
    );

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

#[component]
pub fn App(config: RadarConfig) -> impl IntoView {
    provide_context(AppContext::new(config));

    view! {
        <style>{styles::APP_CSS}</style>
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=IntakePage />
                <Route path=path!("/report/:id") view=ReportPage />
            </Routes>
        </Router>
    }
}
