//! Countdown Section Component

use std::time::Duration;

use chrono::Utc;
use leptos::prelude::*;
use wedding_registry::countdown::time_left;

use crate::context::use_site_context;
use crate::texts::sections;

#[component]
pub fn CountdownSection() -> impl IntoView {
    let ctx = use_site_context();
    let target = ctx.config.with_value(|config| config.wedding_at);

    let (now, set_now) = signal(Utc::now());
    match set_interval_with_handle(move || set_now.set(Utc::now()), Duration::from_secs(1)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("[COUNTDOWN] interval not started: {:?}", e),
    }

    view! {
        <section class="countdown-section">
            <h2 class="heading-display">{sections::COUNTDOWN_TITLE}</h2>
            <p class="heading-script">{sections::COUNTDOWN_SUBTITLE}</p>
            {move || match time_left(target, now.get()) {
                Some(left) => view! {
                    <div class="countdown-grid">
                        {left.display_parts().into_iter().zip(sections::COUNTDOWN_UNITS).map(|(value, unit)| view! {
                            <div class="countdown-cell">
                                <span class="countdown-value">{value}</span>
                                <span class="countdown-unit">{unit}</span>
                            </div>
                        }).collect_view()}
                    </div>
                }.into_any(),
                None => view! { <p class="countdown-done">{sections::COUNTDOWN_DONE}</p> }.into_any(),
            }}
        </section>
    }
}
