//! Toaster Component
//!
//! Renders the toast stack from the site store.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_site_store, SiteStateStoreFields};

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_site_store();

    view! {
        <div class="toaster">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| store_dismiss_toast(&store, id)>
                            <div class="toast-title">{toast.title}</div>
                            {toast.description.map(|text| view! { <div class="toast-description">{text}</div> })}
                        </div>
                    }
                }
            />
        </div>
    }
}
