// Fallback for unknown routes
use leptos::prelude::*;
use radar_core::export::INTAKE_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="gradient-text">"Nothing here"</h1>
            <a href=INTAKE_PATH class="action-btn action-again">"← Back to the radar"</a>
        </div>
    }
}
