// Intake page - company form and report submission
use chrono::Utc;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use radar_core::client::HttpReportClient;
use radar_core::error::RadarError;
use radar_core::intake::{Handoff, IntakeForm, SubmitState, submit_report};
use tracing::debug;

use crate::browser;
use crate::context::AppContext;
use crate::sections::{Backdrop, PRODUCT_NAME, ProgressNotice, Spinner};

#[component]
pub fn IntakePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let navigate = use_navigate();

    let company_name = RwSignal::new(String::new());
    let company_url = RwSignal::new(String::new());
    let industry = RwSignal::new(String::new());
    let region = RwSignal::new(String::new());
    let state = RwSignal::new(SubmitState::Idle);

    let loading = move || state.with(SubmitState::is_loading);
    let error = move || state.with(|s| s.error().map(str::to_string));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let form = IntakeForm {
            company_name: company_name.get_untracked(),
            company_url: company_url.get_untracked(),
            industry: industry.get_untracked(),
            region: region.get_untracked(),
        };
        if let Err(e) = form.validate() {
            debug!("form rejected: {}", e);
            state.update(|s| s.reject(&e));
            return;
        }
        if !state.try_update(SubmitState::begin).unwrap_or(false) {
            return;
        }

        let client = HttpReportClient::new(ctx.config.resolve_endpoint(&browser::page_origin()));
        debug!(endpoint = client.endpoint(), "submitting intake form");
        let store = ctx.store();
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = submit_report(&form, &client, &store, Utc::now()).await;
            if let Some(path) = settle_submission(state, outcome) {
                navigate(&path, Default::default());
            }
        });
    };

    view! {
        <div class="intake-page">
            <Backdrop />
            <div class="intake-inner">
                <div class="intake-hero fade-in">
                    <h1 class="intake-title gradient-text">{PRODUCT_NAME}</h1>
                    <p class="intake-lead">"Enter any B2B company and get a live, AI-powered breakdown"</p>
                    <p class="intake-sub">
                        "Analyze their ads, content strategy, SEO, positioning, and recent moves, all in one report"
                    </p>
                </div>

                <form class="intake-form fade-in" on:submit=on_submit>
                    <div>
                        <label class="field-label" for="company-name">"Company Name *"</label>
                        <TextField id="company-name" value=company_name placeholder="e.g., HubSpot, Salesforce, Shopify" />
                    </div>
                    <div>
                        <label class="field-label" for="company-url">"Website URL (optional)"</label>
                        <TextField id="company-url" value=company_url placeholder="https://example.com" />
                    </div>
                    <div class="field-row">
                        <div>
                            <label class="field-label" for="industry">"Industry"</label>
                            <TextField id="industry" value=industry placeholder="e.g., SaaS, E-commerce" />
                        </div>
                        <div>
                            <label class="field-label" for="region">"Region"</label>
                            <TextField id="region" value=region placeholder="e.g., US, EU, Global" />
                        </div>
                    </div>

                    <Show when=move || error().is_some()>
                        <p class="form-error fade-in">{error}</p>
                    </Show>

                    <button type="submit" class="submit-btn" disabled=loading>
                        {move || if loading() {
                            view! {
                                <span class="btn-busy">
                                    <Spinner />
                                    "Analyzing Competitor..."
                                </span>
                            }.into_any()
                        } else {
                            "🚀 Generate AI Report".into_any()
                        }}
                    </button>
                </form>

                <Show when=loading>
                    <ProgressNotice />
                </Show>

                <p class="intake-footnote">"Powered by Perplexity AI • Real-time competitive intelligence"</p>
            </div>
        </div>
    }
}

/// Record a finished submission and return where to go next.
///
/// Returns `None` when the request failed, or when the page was unmounted
/// while it was in flight (its state signal is gone).
pub fn settle_submission(
    state: RwSignal<SubmitState>,
    outcome: Result<Handoff, RadarError>,
) -> Option<String> {
    state.try_update(|s| s.finish(&outcome))?;
    outcome.ok().map(|handoff| handoff.path)
}

#[component]
fn TextField(id: &'static str, value: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <input
            id=id
            class="field-input"
            type="text"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
