//! Hero Section Component
//!
//! Names, date and the personal greeting with quick navigation.

use leptos::prelude::*;

use crate::commands;
use crate::context::use_site_context;
use crate::texts::{hero, COUPLE};

#[component]
pub fn HeroSection() -> impl IntoView {
    let ctx = use_site_context();

    let greeting = move || match ctx.guest() {
        Some(guest) if !guest.is_general() => format!("{}, {}", hero::GREETING, guest.display_name),
        _ => hero::GREETING.to_string(),
    };
    let loading = move || ctx.guest_status.with(|status| status.is_loading());

    view! {
        <section class="hero-section" id=commands::TOP>
            <p class="hero-together">{hero::TOGETHER_LINE}</p>
            <div class="hero-couple">
                <img class="hero-photo" src="assets/couple-hero.webp" alt=COUPLE />
                <h1 class="heading-script">{COUPLE}</h1>
            </div>

            <div class="divider-ornament"></div>
            <p class="hero-invite">{hero::INVITE_LINE_1}</p>
            <p class="hero-invite">{hero::INVITE_LINE_2}</p>

            <p class="hero-date">{hero::DATE_LINE}</p>
            <p class="hero-time">{hero::TIME_LINE}</p>

            <Show when=move || !loading()>
                <div class="hero-card card-elegant">
                    <div class="hero-greeting">{greeting}</div>
                    <p class="hero-hint">{hero::NAV_HINT}</p>
                    <div class="hero-actions">
                        <button class="btn btn-primary" on:click=move |_| commands::scroll_to_id("rsvp")>
                            {hero::CONFIRM_BUTTON}
                        </button>
                        <button class="btn btn-outline" on:click=move |_| commands::scroll_to_id("details")>
                            {hero::LOCATIONS_BUTTON}
                        </button>
                    </div>
                </div>
            </Show>
        </section>
    }
}
