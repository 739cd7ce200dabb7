use leptos::prelude::*;

use super::PRODUCT_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>{PRODUCT_NAME}" • Built with Rust, Leptos & Perplexity AI"</p>
            </div>
        </footer>
    }
}
