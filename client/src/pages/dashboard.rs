//! Card dashboard: share links, stats, a quick note, and the way into the
//! editor, arrange view and gift editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Contributors land here from an invite link. The recipient travels in the
//! URL, so this page also repairs the backend when the card is missing or was
//! created without a recipient.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use cards::routes::{self, RECIPIENT_QUERY};
use cards::{Card, CardStats, NewMessage};
use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::identity_modal::IdentityModal;
use crate::state::card::{self as card_state, CardState, CardSync, plan_sync};
use crate::state::identity::Identity;
use cards::note_html;
use crate::util::links;

/// Where a quick note lands, cascading so consecutive notes do not stack.
pub fn quick_note_position(existing: usize) -> (f64, f64) {
    #[allow(clippy::cast_precision_loss)]
    let step = |n: usize, m: usize| (n % m) as f64;
    (20.0 + step(existing, 7) * 10.0, 15.0 + step(existing, 5) * 15.0)
}

/// Body of a quick note signed by `identity`, or `None` for a blank note.
pub fn quick_note(text: &str, identity: &Identity, card: Option<&Card>) -> Option<NewMessage> {
    let content = note_html(text);
    if content.is_empty() {
        return None;
    }
    let (x, y) = quick_note_position(card.map_or(0, |c| c.messages.len()));
    Some(NewMessage {
        content,
        author_name: Some(identity.display_name().to_owned()),
        user_id: Some(identity.user_id.clone()),
        x,
        y,
        rotation: 0.0,
        width: None,
        font_family: None,
    })
}

/// Apply a planned sync to the shown card before the request goes out.
fn apply_sync_locally(state: RwSignal<CardState>, card_id: &str, sync: &CardSync) {
    match sync {
        CardSync::Backfill { recipient, .. } => {
            card_state::mutate(state, |card| {
                card.recipient_name = Some(recipient.clone());
                true
            });
        }
        CardSync::Create { creator, recipient } => {
            card_state::replace(state, Card::new(card_id, Some(creator.clone()), Some(recipient.clone())));
        }
    }
}

#[cfg(feature = "csr")]
fn copy_link(text: String, copied: RwSignal<Option<&'static str>>, which: &'static str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(&text);
    leptos::task::spawn_local(async move {
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => {
                copied.set(Some(which));
                gloo_timers::future::TimeoutFuture::new(2_000).await;
                copied.set(None);
            }
            Err(err) => log::warn!("clipboard write failed: {err:?}"),
        }
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let identity = expect_context::<RwSignal<Identity>>();
    let params = use_params_map();
    let query = use_query_map();
    let card_id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let url_recipient = move || query.with(|q| q.get(RECIPIENT_QUERY)).filter(|r| !r.trim().is_empty());

    let state = card_state::open_card(&card_id);
    let synced = RwSignal::new(false);
    let copied = RwSignal::new(None::<&'static str>);
    let note = RwSignal::new(String::new());
    let note_busy = RwSignal::new(false);
    let note_error = RwSignal::new(None::<String>);
    let show_identity = RwSignal::new(false);

    let recipient = Memo::new(move |_| state.with(|s| s.recipient(url_recipient().as_deref())));
    let stats = Memo::new(move |_| state.with(|s| s.card.as_ref().map(CardStats::of).unwrap_or_default()));

    // Bring the backend in line with the link once the first load settles.
    {
        let card_id = card_id.clone();
        Effect::new(move || {
            if synced.get() {
                return;
            }
            let creator = identity.with_untracked(|i| i.display_name().to_owned());
            let plan = state.with(|s| {
                if s.loading {
                    return None;
                }
                Some(plan_sync(s, url_recipient().as_deref(), &creator))
            });
            let Some(plan) = plan else {
                return;
            };
            synced.set(true);
            let Some(sync) = plan else {
                return;
            };
            apply_sync_locally(state, &card_id, &sync);

            #[cfg(feature = "csr")]
            {
                let card_id = card_id.clone();
                leptos::task::spawn_local(async move {
                    let (CardSync::Backfill { creator, recipient } | CardSync::Create { creator, recipient }) = sync;
                    match crate::net::api::create_card(&card_id, &creator, &recipient).await {
                        Ok(_) => card_state::revalidate(state),
                        Err(err) => log::warn!("card {card_id} sync failed: {err}"),
                    }
                });
            }
        });
    }

    let submit_note = {
        let card_id = card_id.clone();
        move || {
            if note_busy.get_untracked() {
                return;
            }
            let who = identity.get_untracked();
            if who.needs_name() {
                show_identity.set(true);
                return;
            }
            let Some(message) = state.with_untracked(|s| quick_note(&note.get_untracked(), &who, s.card.as_ref()))
            else {
                return;
            };
            note_busy.set(true);
            note_error.set(None);

            #[cfg(feature = "csr")]
            {
                let card_id = card_id.clone();
                let recipient = recipient.get_untracked();
                leptos::task::spawn_local(async move {
                    match crate::net::api::add_message(&card_id, &message, Some(&recipient)).await {
                        Ok(saved) => {
                            card_state::mutate(state, |card| {
                                card.messages.push(saved);
                                true
                            });
                            note.set(String::new());
                        }
                        Err(err) => note_error.set(Some(format!("Could not add your note: {err}"))),
                    }
                    note_busy.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&card_id, message);
            }
        }
    };
    let on_note_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_note();
    };

    let invite = {
        let card_id = card_id.clone();
        Memo::new(move |_| links::invite_link(&links::origin(), &card_id, &recipient.get()))
    };
    let gift = links::gift_link(&links::origin(), &card_id);

    let on_copy_invite = move |_| {
        #[cfg(feature = "csr")]
        copy_link(invite.get_untracked(), copied, "invite");
    };
    let on_copy_gift = {
        let gift = gift.clone();
        move |_| {
            #[cfg(feature = "csr")]
            copy_link(gift.clone(), copied, "gift");
            #[cfg(not(feature = "csr"))]
            let _ = &gift;
        }
    };

    let write_href = {
        let card_id = card_id.clone();
        move || links::write_link(&card_id, &recipient.get(), None)
    };
    let view_href = {
        let card_id = card_id.clone();
        move || links::view_link(&card_id, &recipient.get())
    };
    let gift_edit_href = routes::gift_edit_page(&card_id);
    let preview_href = routes::recipient_page(&card_id);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"A card for " {move || recipient.get()}</h1>
                <button class="button button--ghost" on:click=move |_| card_state::refresh(state)>
                    "Refresh"
                </button>
            </header>
            <Show when=move || state.with(|s| s.loading)>
                <p class="dashboard-status">"Loading card..."</p>
            </Show>
            <Show when=move || state.with(|s| s.error.is_some() && s.card.is_none())>
                <p class="dashboard-status dashboard-status--error">
                    {move || state.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>
            <section class="dashboard-stats">
                <span>{move || stats.get().message_count} " messages"</span>
                <span>{move || stats.get().drawing_count} " drawings"</span>
                <span>{move || stats.get().contributor_count} " contributors"</span>
            </section>
            <section class="dashboard-links">
                <label>"Invite friends"</label>
                <div class="dashboard-link">
                    <input type="text" readonly prop:value=move || invite.get() />
                    <button class="button" on:click=on_copy_invite>
                        {move || if copied.get() == Some("invite") { "Copied!" } else { "Copy" }}
                    </button>
                </div>
                <label>"Gift link"</label>
                <div class="dashboard-link">
                    <input type="text" readonly prop:value=gift />
                    <button class="button" on:click=on_copy_gift>
                        {move || if copied.get() == Some("gift") { "Copied!" } else { "Copy" }}
                    </button>
                </div>
            </section>
            <nav class="dashboard-actions">
                <a class="button" href=write_href>"Write or draw"</a>
                <a class="button" href=view_href>"View card"</a>
                <a class="button button--ghost" href=gift_edit_href>"Customize gift"</a>
                <a class="button button--ghost" href=preview_href>"Preview as recipient"</a>
            </nav>
            <form class="dashboard-note" on:submit=on_note_submit>
                <textarea
                    class="dashboard-note__input"
                    placeholder="Write a quick note..."
                    prop:value=move || note.get()
                    on:input=move |ev| note.set(event_target_value(&ev))
                ></textarea>
                <button class="button" type="submit" disabled=move || note_busy.get()>
                    {move || if note_busy.get() { "Adding..." } else { "Add note" }}
                </button>
                <Show when=move || note_error.get().is_some()>
                    <p class="dashboard-note__error">{move || note_error.get().unwrap_or_default()}</p>
                </Show>
            </form>
            <Show when=move || show_identity.get()>
                <IdentityModal on_close=Callback::new(move |()| show_identity.set(false)) />
            </Show>
        </div>
    }
}
