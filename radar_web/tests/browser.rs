//! Browser-only checks, run with `wasm-pack test --headless --firefox radar_web`.

#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use chrono::Utc;
use leptos::prelude::*;
use radar_core::error::RadarError;
use radar_core::export::{ExportFile, detail_path};
use radar_core::intake::{Handoff, SubmitState};
use radar_core::reveal::{Reveal, RevealPhase};
use radar_core::store::ReportStore;
use radar_core::{RadarConfig, ReportPayload};
use radar_web::context::AppContext;
use radar_web::pages::settle_submission;
use radar_web::ticker::Ticker;
use radar_web::{App, browser};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("setTimeout");
    });
    JsFuture::from(promise).await.expect("timer");
}

fn document() -> web_sys::Document {
    web_sys::window().expect("window").document().expect("document")
}

fn current_path() -> String {
    web_sys::window()
        .expect("window")
        .location()
        .pathname()
        .expect("pathname")
}

fn go_to(path: &str) {
    web_sys::window()
        .expect("window")
        .history()
        .expect("history")
        .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
        .expect("pushState");
}

fn text_of(selector: &str) -> Option<String> {
    document()
        .query_selector(selector)
        .expect("selector")
        .and_then(|el| el.text_content())
}

#[wasm_bindgen_test]
fn session_store_round_trips_payload() {
    let store = browser::session_store("radar_test_report").expect("session storage");
    store.clear().expect("clear");
    assert_eq!(store.load().expect("load"), None);

    let payload = ReportPayload::new("Acme", "Report body\nwith lines", Utc::now()).expect("payload");
    store.save(&payload).expect("save");
    assert_eq!(store.load().expect("load"), Some(payload));
    store.clear().expect("clear");
}

#[wasm_bindgen_test]
fn handoff_prefers_in_memory_payload() {
    let owner = Owner::new();
    owner.with(|| {
        let ctx = AppContext::new(RadarConfig::default());
        let store = ctx.store();
        let payload = ReportPayload::new("Acme", "fresh", Utc::now()).expect("payload");
        store.save(&payload).expect("save");
        assert_eq!(ctx.handoff.get_untracked(), Some(payload.clone()));
        assert_eq!(store.load().expect("load"), Some(payload));
        store.clear().expect("clear");
    });
}

#[wasm_bindgen_test]
async fn download_blob_holds_exact_report() {
    let text = "Line one\r\nLine two\n\tünïcödé ✓\n";
    let file = ExportFile::from_text("Acme", text, "-competitor-report.txt");
    assert_eq!(file.file_name, "Acme-competitor-report.txt");

    let blob = browser::text_blob(&file).expect("blob");
    assert_eq!(blob.type_(), "text/plain");
    assert_eq!(blob.size() as usize, text.len());
    let read = JsFuture::from(blob.text()).await.expect("blob text");
    assert_eq!(read.as_string().as_deref(), Some(text));

    browser::download(&file).expect("download");
}

#[wasm_bindgen_test]
fn page_origin_is_absolute() {
    assert!(browser::page_origin().starts_with("http"));
}

#[wasm_bindgen_test]
async fn ticker_drives_reveal_to_completion_and_stops() {
    let owner = Owner::new();
    let (reveal, ticker) = owner.with(|| {
        let reveal = RwSignal::new(Reveal::new(3));
        reveal.update(|r| {
            r.load("typewriter test text");
        });
        let ticker = Ticker::new();
        ticker
            .start(Duration::from_millis(5), move || {
                reveal
                    .try_update(|r| r.tick())
                    .is_some_and(RevealPhase::wants_ticks)
            })
            .expect("interval");
        (reveal, ticker)
    });

    assert!(ticker.is_running());
    sleep(300).await;

    assert_eq!(reveal.with_untracked(|r| r.phase()), RevealPhase::Complete);
    assert_eq!(
        reveal.with_untracked(|r| r.visible().to_string()),
        "typewriter test text"
    );
    assert!(!ticker.is_running());
}

#[wasm_bindgen_test]
async fn cancelled_ticker_stops_advancing() {
    let owner = Owner::new();
    let (reveal, ticker) = owner.with(|| {
        let reveal = RwSignal::new(Reveal::new(1));
        reveal.update(|r| {
            r.load("x".repeat(10_000));
        });
        let ticker = Ticker::new();
        ticker
            .start(Duration::from_millis(5), move || {
                reveal
                    .try_update(|r| r.tick())
                    .is_some_and(RevealPhase::wants_ticks)
            })
            .expect("interval");
        (reveal, ticker)
    });

    sleep(50).await;
    ticker.cancel();
    ticker.cancel();
    let frozen = reveal.with_untracked(|r| r.shown_chars());
    sleep(50).await;

    assert_eq!(reveal.with_untracked(|r| r.shown_chars()), frozen);
    assert_eq!(reveal.with_untracked(|r| r.phase()), RevealPhase::Revealing);
}

#[wasm_bindgen_test]
async fn unmount_cancels_ticker_through_cleanup() {
    let root = Owner::new();
    let (reveal, page, ticker) = root.with(|| {
        let reveal = RwSignal::new(Reveal::new(1));
        reveal.update(|r| {
            r.load("x".repeat(10_000));
        });
        let page = Owner::new();
        let ticker = page.with(|| {
            let ticker = Ticker::new();
            on_cleanup(move || ticker.cancel());
            ticker
                .start(Duration::from_millis(5), move || {
                    reveal
                        .try_update(|r| r.tick())
                        .is_some_and(RevealPhase::wants_ticks)
                })
                .expect("interval");
            ticker
        });
        (reveal, page, ticker)
    });

    sleep(50).await;
    assert!(ticker.is_running());
    page.cleanup();
    let frozen = reveal.with_untracked(|r| r.shown_chars());
    sleep(50).await;

    assert!(!ticker.is_running());
    assert_eq!(reveal.with_untracked(|r| r.shown_chars()), frozen);
    assert_eq!(reveal.with_untracked(|r| r.phase()), RevealPhase::Revealing);
}

#[wasm_bindgen_test]
fn settled_submission_navigates_only_while_mounted() {
    let payload = ReportPayload::new("Acme", "report", Utc::now()).expect("payload");
    let handoff = Handoff {
        payload,
        path: detail_path("Acme"),
    };

    let page = Owner::new();
    let state = page.with(|| RwSignal::new(SubmitState::Loading));
    assert_eq!(
        settle_submission(state, Ok(handoff.clone())),
        Some("/report/Acme".to_string())
    );
    assert_eq!(state.get_untracked(), SubmitState::Idle);

    state.set(SubmitState::Loading);
    assert_eq!(settle_submission(state, Err(RadarError::Network("offline".into()))), None);
    assert!(state.with_untracked(|s| s.error().is_some()));

    page.cleanup();
    assert_eq!(settle_submission(state, Ok(handoff)), None);
}

#[wasm_bindgen_test]
async fn missing_report_returns_to_form() {
    let config = RadarConfig::default();
    browser::session_store(&config.storage.key)
        .expect("session storage")
        .clear()
        .expect("clear");
    let start = current_path();

    go_to("/report/x");
    let body = document().body().expect("body");
    let app = leptos::mount::mount_to(body, move || view! { <App config=config /> });
    sleep(100).await;

    assert_eq!(current_path(), "/");
    assert!(text_of(".report-text").is_none());
    assert!(text_of(".intake-form").is_some());

    drop(app);
    go_to(&start);
}

#[wasm_bindgen_test]
async fn report_page_is_named_after_route() {
    let config = RadarConfig::default();
    let store = browser::session_store(&config.storage.key).expect("session storage");
    let payload = ReportPayload::new("stored name", "Full report body", Utc::now()).expect("payload");
    store.save(&payload).expect("save");
    let start = current_path();

    let path = detail_path("Procter & Gamble");
    go_to(&path);
    let body = document().body().expect("body");
    let app = leptos::mount::mount_to(body, move || view! { <App config=config /> });
    sleep(300).await;

    assert_eq!(current_path(), path);
    assert_eq!(text_of(".report-title").as_deref(), Some("Procter & Gamble"));
    assert_eq!(text_of(".report-text").as_deref(), Some("Full report body"));

    drop(app);
    store.clear().expect("clear");
    go_to(&start);
}
