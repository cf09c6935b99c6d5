//! Wedding Site App
//!
//! Single page: hero, countdown, details, gallery, gifts, RSVP.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;
use reactive_stores::Store;

use crate::commands;
use crate::components::{
    CountdownSection, EventDetails, Footer, GallerySection, GiftRegistrySection, HeroSection, IconNav,
    RsvpSection, Toaster,
};
use crate::context::{GuestStatus, SiteContext};
use crate::store::SiteState;

#[component]
pub fn App() -> impl IntoView {
    let config = commands::load_site_config();
    info!("[APP] endpoint {}", config.endpoint);

    let token = commands::guest_token_from_location();
    let initial = if token.is_some() { GuestStatus::Loading } else { GuestStatus::Anonymous };
    let guest_status = signal(initial);

    // Provide context to all children
    let ctx = SiteContext::new(config, guest_status);
    provide_context(ctx);
    provide_context(Store::new(SiteState::default()));

    // Resolve the guest once on mount
    if token.is_some() {
        let endpoint = ctx.endpoint();
        spawn_local(async move {
            let status = commands::load_guest(&endpoint, token).await;
            ctx.set_guest_status(status);
        });
    }

    view! {
        <div class="site">
            <HeroSection />
            <CountdownSection />
            <EventDetails />
            <GallerySection />
            <GiftRegistrySection />
            <RsvpSection />
            <Footer />
            <IconNav />
            <Toaster />
        </div>
    }
}
