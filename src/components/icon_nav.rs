//! Icon Navigation Component
//!
//! Floating bar of section shortcuts; highlights the section in view.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::commands::{self, TOP};
use crate::models::NavTarget;

const NAV_TARGETS: &[NavTarget] = &[
    NavTarget { id: TOP, label: "Domov", icon: "⌂" },
    NavTarget { id: "rsvp", label: "RSVP", icon: "✓" },
    NavTarget { id: "details", label: "Podrobnosti", icon: "⌖" },
    NavTarget { id: "gallery", label: "Galerija", icon: "▦" },
    NavTarget { id: "gifts", label: "Darila", icon: "🎁" },
];

/// Pixels below the viewport top that still count as "in view"
const HEADER_OFFSET: f64 = 140.0;

fn section_ids() -> Vec<&'static str> {
    NAV_TARGETS.iter().map(|t| t.id).collect()
}

#[component]
pub fn IconNav() -> impl IntoView {
    let (active, set_active) = signal(TOP);

    let track = move || set_active.set(commands::active_section(&section_ids(), HEADER_OFFSET));
    track();

    let handler = Closure::<dyn Fn()>::new(track);
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());
    }
    // lives as long as the page
    handler.forget();

    view! {
        <nav class="icon-nav">
            {NAV_TARGETS.iter().map(|target| {
                let id = target.id;
                let is_active = move || active.get() == id;
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "icon-nav-btn active" } else { "icon-nav-btn" }
                        title=target.label
                        aria-label=target.label
                        on:click=move |_| commands::scroll_to_id(id)
                    >
                        <span class="icon-nav-glyph">{target.icon}</span>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
