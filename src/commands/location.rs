//! Location Commands
//!
//! Reading the guest token from the address bar and scrolling to sections.

use std::time::Duration;

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};
use wedding_registry::token::guest_token;

/// Anchor of the page top
pub const TOP: &str = "top";

/// Guest token from `?t=` or `#/...?t=`
pub fn guest_token_from_location() -> Option<String> {
    let location = web_sys::window()?.location();
    let search = location.search().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    guest_token(&search, &hash)
}

fn scroll_into_view(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Smooth-scroll to a section; retries once for sections still rendering
pub fn scroll_to_id(id: &str) {
    if id == TOP {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        return;
    }
    if scroll_into_view(id) {
        return;
    }
    let id = id.to_string();
    spawn_local(async move {
        gloo_timers::future::sleep(Duration::from_millis(50)).await;
        scroll_into_view(&id);
    });
}

/// Section whose top is above the scroll position plus `offset`
pub fn active_section(ids: &[&'static str], offset: f64) -> &'static str {
    let Some(window) = web_sys::window() else {
        return TOP;
    };
    let Some(document) = window.document() else {
        return TOP;
    };
    let y = window.scroll_y().unwrap_or_default() + offset;
    let mut current = TOP;
    for id in ids.iter().copied().filter(|id| *id != TOP) {
        let top = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| f64::from(el.offset_top()));
        if matches!(top, Some(top) if top <= y) {
            current = id;
        }
    }
    current
}
