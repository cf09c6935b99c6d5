//! RSVP Section Component
//!
//! Personal greeting and the attendance form. Only guests resolved from a
//! link token can answer.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wedding_registry::invitation::{invitation_sentence, FALLBACK_SENTENCE, GENERAL_SENTENCE};
use wedding_registry::rsvp::RsvpForm;

use crate::commands::{self, show_toast};
use crate::context::{use_site_context, GuestStatus};
use crate::models::{Guest, ToastKind};
use crate::store::use_site_store;
use crate::texts::{rsvp, sections};

fn greeting_sentence(guest: Option<&Guest>) -> String {
    match guest {
        Some(guest) if guest.is_general() => GENERAL_SENTENCE.to_string(),
        Some(guest) => invitation_sentence(&guest.display_name),
        None => FALLBACK_SENTENCE.to_string(),
    }
}

/// Attendance form for a resolved guest
#[component]
fn RsvpFormView(guest: Guest, set_submitted: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_site_context();
    let store = use_site_store();

    let initial = RsvpForm::for_guest(&guest);
    let (attending, set_attending) = signal(initial.attending);
    let (party_size, set_party_size) = signal(initial.party_size);
    let (ceremony_guess, set_ceremony_guess) = signal(initial.ceremony_guess);
    let (notes, set_notes) = signal(initial.notes);
    let (sending, set_sending) = signal(false);

    let max_guests = guest.max_guests;
    let church_invited = guest.invites.cerkvena;
    let guest = StoredValue::new(guest);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let form = RsvpForm {
            attending: attending.get_untracked(),
            party_size: party_size.get_untracked(),
            ceremony_guess: ceremony_guess.get_untracked(),
            notes: notes.get_untracked(),
        };
        let guest = guest.get_value();
        let source = ctx.config.with_value(|config| config.rsvp_source.clone());
        let endpoint = ctx.endpoint();
        set_sending.set(true);
        spawn_local(async move {
            match commands::submit_rsvp(&endpoint, &guest, &form, &source).await {
                Ok(()) => {
                    show_toast(store, ToastKind::Success, rsvp::SAVED_TITLE, Some(rsvp::SAVED_TEXT.to_string()));
                    set_submitted.set(true);
                }
                Err(e) => show_toast(store, ToastKind::Error, rsvp::FAILED_TITLE, Some(e)),
            }
            set_sending.set(false);
        });
    };

    view! {
        <form class="rsvp-form" on:submit=submit>
            <fieldset class="rsvp-field">
                <legend>{rsvp::COMING}</legend>
                <label class="rsvp-radio">
                    <input
                        type="radio"
                        name="udelezba"
                        prop:checked=move || attending.get()
                        on:change=move |_| set_attending.set(true)
                    />
                    {rsvp::YES}
                </label>
                <label class="rsvp-radio">
                    <input
                        type="radio"
                        name="udelezba"
                        prop:checked=move || !attending.get()
                        on:change=move |_| set_attending.set(false)
                    />
                    {rsvp::NO}
                </label>
            </fieldset>

            <Show when=move || attending.get()>
                <label class="rsvp-field">
                    <span>{format!("{} (največ {})", rsvp::HOW_MANY, max_guests)}</span>
                    <input
                        type="number"
                        min="1"
                        max=max_guests.to_string()
                        required
                        prop:value=move || party_size.get()
                        on:input=move |ev| set_party_size.set(event_target_value(&ev))
                    />
                </label>
            </Show>

            <Show when=move || attending.get() && church_invited>
                <label class="rsvp-field">
                    <span>{rsvp::CHURCH_GAME}</span>
                    <input
                        type="number"
                        min="1"
                        max="240"
                        required
                        prop:value=move || ceremony_guess.get()
                        on:input=move |ev| set_ceremony_guess.set(event_target_value(&ev))
                    />
                </label>
            </Show>

            <label class="rsvp-field">
                <span>{rsvp::NOTES}</span>
                <textarea
                    placeholder=rsvp::NOTES_PLACEHOLDER
                    prop:value=move || notes.get()
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                ></textarea>
            </label>

            <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                {move || if sending.get() { rsvp::SUBMITTING } else { rsvp::SUBMIT }}
            </button>
        </form>
    }
}

#[component]
pub fn RsvpSection() -> impl IntoView {
    let ctx = use_site_context();
    let (submitted, set_submitted) = signal(false);

    let body = move || match ctx.guest_status.get() {
        GuestStatus::Loading => view! { <p class="rsvp-status">{sections::LOADING_INVITE}</p> }.into_any(),
        GuestStatus::Anonymous | GuestStatus::Invalid(_) => {
            view! { <p class="rsvp-status">{sections::INVALID_LINK}</p> }.into_any()
        }
        GuestStatus::Found(guest) => {
            let sentence = greeting_sentence(Some(&guest));
            let name = (!guest.is_general()).then(|| guest.display_name.clone());
            let label = guest.invited_label.clone();
            view! {
                <div class="rsvp-greeting">
                    {name.map(|name| view! { <div class="rsvp-name">{name}</div> })}
                    <p class="rsvp-sentence">{sentence}</p>
                    {label.map(|label| view! { <p class="rsvp-label">{label}</p> })}
                </div>
                <RsvpFormView guest=guest set_submitted=set_submitted />
            }
            .into_any()
        }
    };

    view! {
        <section class="rsvp-section" id="rsvp">
            <Show
                when=move || !submitted.get()
                fallback=|| view! {
                    <div class="rsvp-thanks card-elegant">
                        <h2 class="heading-display">{sections::RSVP_THANK_YOU_TITLE}</h2>
                        <p>{sections::RSVP_THANK_YOU_TEXT}</p>
                    </div>
                }
            >
                <h2 class="heading-display">{sections::RSVP_TITLE}</h2>
                <p class="text-body">{sections::RSVP_SUBTITLE}</p>
                <div class="divider-ornament"></div>
                <div class="rsvp-card card-elegant">{body}</div>
            </Show>
        </section>
    }
}
