//! Footer Component

use leptos::prelude::*;

use crate::texts::{sections, COUPLE, HASHTAG};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <h2 class="heading-script">{COUPLE}</h2>
            <p class="footer-date">"11. julij 2026"</p>
            <div class="divider-ornament"></div>
            <p class="footer-made-with">{sections::MADE_WITH} " ♥"</p>
            <p class="footer-hashtag">{HASHTAG}</p>
        </footer>
    }
}
