// Report page - typewriter reveal of the handed-over report
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use radar_core::export::{INTAKE_PATH, report_subject};
use radar_core::reveal::{Reveal, RevealPhase};
use radar_core::store::ReportStore;
use tracing::{info, warn};

use crate::context::AppContext;
use crate::sections::{ExportActions, Footer, LoadingReport, PRODUCT_NAME};
use crate::ticker::Ticker;

#[component]
pub fn ReportPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let params = use_params_map();
    let reveal_config = ctx.config.reveal.clone();

    let payload = match ctx.store().load() {
        Ok(payload) => payload,
        Err(e) => {
            warn!("could not read stored report: {}", e);
            None
        }
    };

    let Some(payload) = payload else {
        if reveal_config.redirect_when_missing {
            info!("no report to show, returning to the form");
            let navigate = use_navigate();
            Effect::new(move || {
                navigate(
                    INTAKE_PATH,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            });
        }
        return view! { <LoadingReport /> }.into_any();
    };

    let segment = params.with_untracked(|p| p.get("id"));
    let subject = report_subject(segment.as_deref(), &payload);

    let reveal = RwSignal::new(Reveal::new(reveal_config.chars_per_tick));
    reveal.update(|r| {
        r.load(payload.report_text.clone());
    });

    let ticker = Ticker::new();
    on_cleanup(move || ticker.cancel());

    let started = ticker.start(reveal_config.tick_interval(), move || {
        reveal
            .try_update(|r| r.tick())
            .is_some_and(RevealPhase::wants_ticks)
    });
    if let Err(e) = started {
        warn!("reveal timer unavailable, showing full report: {:?}", e);
        reveal.update(|r| {
            r.skip();
        });
    }

    let typing = move || reveal.with(Reveal::is_typing);
    let visible = move || reveal.with(|r| r.visible().to_string());
    let skip = move |_| {
        reveal.update(|r| {
            r.skip();
        });
        ticker.cancel();
    };

    view! {
        <div class="report-page">
            <header class="report-header">
                <div class="container header-inner">
                    <a href=INTAKE_PATH class="back-link">
                        <span class="back-arrow">"←"</span>
                        <span>{PRODUCT_NAME}</span>
                    </a>
                    <button
                        class=move || if typing() { "skip-btn" } else { "skip-btn hidden" }
                        on:click=skip
                    >
                        "Skip Animation"
                    </button>
                </div>
            </header>

            <main class="container report-main fade-in">
                <h1 class="report-title">{subject.clone()}</h1>
                <p class="report-subtitle">
                    <span class="live-dot"></span>
                    "Live AI Analysis • Powered by Perplexity Sonar"
                </p>

                <div class="report-panel">
                    <div class="report-text">
                        {visible}
                        <Show when=typing>
                            <span class="caret"></span>
                        </Show>
                    </div>
                </div>

                <ExportActions
                    subject=subject
                    text=payload.report_text
                    file_suffix=ctx.config.export.file_suffix.clone()
                />
            </main>

            <Footer />
        </div>
    }
    .into_any()
}
