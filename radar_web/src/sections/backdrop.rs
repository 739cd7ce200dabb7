use leptos::prelude::*;

/// Two slowly drifting gradient blobs behind the intake form.
#[component]
pub fn Backdrop() -> impl IntoView {
    view! {
        <div class="backdrop">
            <div class="blob blob-blue"></div>
            <div class="blob blob-purple"></div>
        </div>
    }
}
