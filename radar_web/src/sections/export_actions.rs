use leptos::prelude::*;
use leptos::task::spawn_local;
use radar_core::export::{ExportFile, INTAKE_PATH};
use tracing::{info, warn};

use crate::browser;

const COPIED_MESSAGE: &str = "Report copied to clipboard!";

/// Download, copy and "analyze another" buttons.
///
/// Both exports act on the full report text, however far the reveal has got.
#[component]
pub fn ExportActions(subject: String, text: String, file_suffix: String) -> impl IntoView {
    let file = ExportFile::from_text(&subject, &text, &file_suffix);

    let on_download = move |_| match browser::download(&file) {
        Ok(()) => info!(file = %file.file_name, "report downloaded"),
        Err(e) => {
            let reason = browser::describe(&e);
            warn!("download failed: {}", reason);
            browser::alert(&format!("Download failed: {reason}"));
        }
    };

    let on_copy = move |_| {
        let text = text.clone();
        spawn_local(async move {
            match browser::copy_to_clipboard(&text).await {
                Ok(()) => browser::alert(COPIED_MESSAGE),
                Err(e) => {
                    let reason = browser::describe(&e);
                    warn!("clipboard write failed: {}", reason);
                    browser::alert(&format!("Could not copy the report: {reason}"));
                }
            }
        });
    };

    view! {
        <div class="report-actions fade-in">
            <button class="action-btn action-download" on:click=on_download>
                "📥 Download Report"
            </button>
            <button class="action-btn action-copy" on:click=on_copy>
                "📋 Copy to Clipboard"
            </button>
            <a href=INTAKE_PATH class="action-btn action-again">
                "🔍 Analyze Another Company"
            </a>
        </div>
    }
}
