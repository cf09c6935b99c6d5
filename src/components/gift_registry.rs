//! Gift Registry Component
//!
//! Grouped wishlist with claim/release buttons. The registry instance lives
//! as long as this section and stops polling on cleanup.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, BrowserSleeper, SiteRegistry};
use crate::context::use_site_context;
use crate::models::{GiftGroup, GiftView, ItemStatus};
use crate::store::{use_site_store, SiteStateStoreFields};
use crate::texts::{gifts, sections};

fn button_label(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Unclaimed => gifts::CLAIM,
        ItemStatus::ClaimedByMe => gifts::RELEASE,
        ItemStatus::ClaimedByOther => gifts::TAKEN,
        ItemStatus::PendingClaim | ItemStatus::PendingRelease => gifts::SAVING,
    }
}

/// One wishlist entry
#[component]
fn GiftRow(gift: GiftView, registry: StoredValue<SiteRegistry, LocalStorage>) -> impl IntoView {
    let GiftView { item, status } = gift;
    let id = item.id.clone();
    // claimed-by-other stays clickable so the guest gets told why nothing happens
    let want_taken = status != ItemStatus::ClaimedByMe;

    let toggle = move |_| {
        let Some(registry) = registry.try_get_value() else {
            return;
        };
        let id = id.clone();
        spawn_local(async move {
            let _ = registry.set_claim(&id, want_taken).await;
        });
    };

    let row_class = if item.taken { "gift-row taken" } else { "gift-row" };
    let button_class = match status {
        ItemStatus::ClaimedByMe => "gift-btn mine",
        ItemStatus::ClaimedByOther => "gift-btn other",
        _ => "gift-btn",
    };

    view! {
        <li class=row_class>
            <span class="gift-name">{item.name}</span>
            {item.url.map(|url| view! {
                <a class="gift-link" href=url target="_blank" rel="noopener noreferrer">{gifts::LINK}</a>
            })}
            <button
                type="button"
                class=button_class
                disabled=status.is_pending()
                on:click=toggle
            >
                {button_label(status)}
            </button>
        </li>
    }
}

#[component]
fn GiftGroupView(group: GiftGroup, registry: StoredValue<SiteRegistry, LocalStorage>) -> impl IntoView {
    view! {
        <div class="gift-group">
            <h3 class="gift-category">{group.category}</h3>
            <ul class="gift-list">
                {group.gifts.into_iter().map(|gift| view! { <GiftRow gift=gift registry=registry /> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn GiftRegistrySection() -> impl IntoView {
    let ctx = use_site_context();
    let store = use_site_store();

    let registry = commands::create_registry(&ctx, store);
    let disposer = registry.disposer();
    on_cleanup(move || disposer.dispose());

    {
        let registry = registry.clone();
        spawn_local(async move {
            let _ = registry.init().await;
            registry.run_polling(BrowserSleeper).await;
        });
    }
    let registry = StoredValue::new_local(registry);

    view! {
        <section class="gifts-section" id="gifts">
            <h2 class="heading-display">{sections::GIFTS_TITLE}</h2>
            <p class="text-body">{sections::GIFTS_SUBTITLE}</p>
            <div class="divider-ornament"></div>
            {move || {
                let snapshot = store.registry().get();
                if snapshot.items.is_empty() {
                    let text = if snapshot.loading || !snapshot.loaded {
                        sections::GIFTS_LOADING
                    } else {
                        sections::GIFTS_EMPTY
                    };
                    view! { <p class="gifts-status">{text}</p> }.into_any()
                } else {
                    view! {
                        <div class="gift-groups">
                            {snapshot.groups().into_iter().map(|group| view! {
                                <GiftGroupView group=group registry=registry />
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </section>
    }
}
