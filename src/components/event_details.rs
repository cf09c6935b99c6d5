//! Event Details Component
//!
//! Cards for the parts of the day the guest is invited to.

use leptos::prelude::*;
use wedding_registry::events::visible_events;

use crate::context::use_site_context;
use crate::models::EventCard;
use crate::texts::sections;

#[component]
fn EventCardView(card: EventCard) -> impl IntoView {
    view! {
        <div class="event-card card-elegant">
            <h3 class="event-title">{card.title}</h3>
            <p class="event-time">{card.time}</p>
            <p class="event-place">{card.place}</p>
            <p class="event-address">{card.address}</p>
        </div>
    }
}

#[component]
pub fn EventDetails() -> impl IntoView {
    let ctx = use_site_context();
    let cards = move || {
        ctx.guest()
            .map(|guest| visible_events(&guest.invites))
            .unwrap_or_default()
    };

    view! {
        <section class="details-section" id="details">
            <h2 class="heading-display">{sections::DETAILS_TITLE}</h2>
            <p class="text-body">{sections::DETAILS_SUBTITLE}</p>
            <div class="divider-ornament"></div>
            {move || {
                let cards = cards();
                if cards.is_empty() {
                    view! { <p class="details-none">{sections::DETAILS_NONE}</p> }.into_any()
                } else {
                    view! {
                        <div class="event-grid">
                            {cards.into_iter().map(|card| view! { <EventCardView card=card /> }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </section>
    }
}
