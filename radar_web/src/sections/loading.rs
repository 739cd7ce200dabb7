use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] large: bool) -> impl IntoView {
    let class = if large { "spinner spinner-lg" } else { "spinner" };
    view! { <div class=class></div> }
}

/// Full-screen placeholder while there is no report to reveal.
#[component]
pub fn LoadingReport() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div>
                <Spinner large=true />
                <p>"Loading report..."</p>
            </div>
        </div>
    }
}

/// Pill under the form while the request is in flight.
#[component]
pub fn ProgressNotice() -> impl IntoView {
    view! {
        <div class="progress-notice fade-in">
            <div class="progress-pill">
                <div class="dots">
                    <div class="dot"></div>
                    <div class="dot"></div>
                    <div class="dot"></div>
                </div>
                <span>"AI is researching ads, content, SEO, and market intelligence..."</span>
            </div>
        </div>
    }
}
