//! Card view: the card laid out as the recipient will see it.
//!
//! Contributors rearrange their own messages and drawings here: drag the body,
//! pull the corner handle to resize, the top handle to rotate. Each finished
//! gesture is applied to the shown card at once and persisted with one PATCH.
//! View mode locks the layout.

#[cfg(test)]
#[path = "card_view_test.rs"]
mod card_view_test;

use canvas::arrange::{Arrange, ArrangeHandle, Placement, PlacementChange};
use cards::routes::RECIPIENT_QUERY;
use cards::{Card, ItemId, ItemKind};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::state::card::{self as card_state, CardState};
use crate::state::identity::Identity;
use crate::util::layout::placement_style;
use crate::util::links;

#[cfg(feature = "csr")]
use crate::util::canvas_input::pointer_point;
#[cfg(feature = "csr")]
use canvas::camera::Viewport;

const DELETE_CONFIRM: &str = "Delete this item?";
const DELETE_FAILED: &str = "Failed to delete item.";

/// What an item shows, looked up from the card.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemContent {
    Message { html: String, author: Option<String> },
    Drawing { src: String },
}

pub fn item_content(card: &Card, kind: ItemKind, id: ItemId) -> Option<ItemContent> {
    match kind {
        ItemKind::Message => card.message(id).map(|m| ItemContent::Message {
            html: m.content.clone(),
            author: m.author_name.clone().filter(|a| !a.trim().is_empty()),
        }),
        ItemKind::Drawing => card.drawing(id).map(|d| ItemContent::Drawing { src: d.image_data.clone() }),
    }
}

/// Apply a finished gesture to the shown card and persist it.
fn persist_change(state: RwSignal<CardState>, card_id: &str, change: PlacementChange) {
    let patch = change.to_patch();
    card_state::mutate(state, |card| card.patch_item(change.id, &patch));

    #[cfg(feature = "csr")]
    {
        let card_id = card_id.to_owned();
        leptos::task::spawn_local(async move {
            if let Err(err) = crate::net::api::update_item(&card_id, change.id, &patch).await {
                log::warn!("saving {} {} failed: {err}", change.kind.as_str(), change.id);
                card_state::revalidate(state);
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = card_id;
}

#[cfg(feature = "csr")]
fn confirm(message: &str) -> bool {
    web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
}

#[cfg(feature = "csr")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn CardViewPage() -> impl IntoView {
    let identity = expect_context::<RwSignal<Identity>>();
    let params = use_params_map();
    let query = use_query_map();
    let card_id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let url_recipient = query.with_untracked(|q| q.get(RECIPIENT_QUERY));

    let state = card_state::open_card(&card_id);
    let arrange = RwSignal::new(Arrange::new());
    let surface_ref = NodeRef::<leptos::html::Div>::new();
    let recipient = Memo::new(move |_| state.with(|s| s.recipient(url_recipient.as_deref())));

    // Keep placements in step with the shown card.
    Effect::new(move || {
        let user_id = identity.with(|i| i.user_id.clone());
        state.with(|s| {
            if let Some(card) = &s.card {
                arrange.update(|a| a.load(card, Some(&user_id)));
            }
        });
    });

    let begin = move |ev: &leptos::ev::PointerEvent, kind: ItemKind, id: ItemId, handle: ArrangeHandle| {
        #[cfg(feature = "csr")]
        {
            if ev.button() != 0 {
                return;
            }
            let Some(surface) = surface_ref.get_untracked() else {
                return;
            };
            let rect = surface.get_bounding_client_rect();
            let viewport = Viewport::new(rect.left(), rect.top(), rect.width(), rect.height());
            let point = pointer_point(ev);
            let started = arrange
                .try_update(|a| {
                    a.set_viewport(viewport);
                    a.begin(kind, id, handle, point, None)
                })
                .unwrap_or(false);
            if started {
                ev.prevent_default();
                ev.stop_propagation();
                let _ = surface.set_pointer_capture(ev.pointer_id());
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = (ev, kind, id, handle, surface_ref);
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !arrange.with_untracked(Arrange::is_active) {
            return;
        }
        #[cfg(feature = "csr")]
        {
            let point = pointer_point(&ev);
            arrange.update(|a| {
                a.update(point);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_pointer_up = {
        let card_id = card_id.clone();
        move |ev: leptos::ev::PointerEvent| {
            #[cfg(feature = "csr")]
            if let Some(surface) = surface_ref.get_untracked() {
                let _ = surface.release_pointer_capture(ev.pointer_id());
            }
            #[cfg(not(feature = "csr"))]
            let _ = ev;
            if let Some(change) = arrange.try_update(Arrange::end).flatten() {
                persist_change(state, &card_id, change);
            }
        }
    };

    let on_pointer_cancel = move |_ev: leptos::ev::PointerEvent| arrange.update(Arrange::cancel);

    let delete = {
        let card_id = card_id.clone();
        move |kind: ItemKind, id: ItemId| {
            #[cfg(feature = "csr")]
            if !confirm(DELETE_CONFIRM) {
                return;
            }
            if !arrange.try_update(|a| a.remove(kind, id)).unwrap_or(false) {
                return;
            }
            card_state::mutate(state, |card| card.remove_item(kind, id));

            #[cfg(feature = "csr")]
            {
                let card_id = card_id.clone();
                leptos::task::spawn_local(async move {
                    if let Err(err) = crate::net::api::delete_item(&card_id, kind, id).await {
                        log::warn!("deleting {} {id} failed: {err}", kind.as_str());
                        alert(DELETE_FAILED);
                        card_state::revalidate(state);
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = (&card_id, DELETE_CONFIRM, DELETE_FAILED);
        }
    };

    let item_view = {
        let card_id = card_id.clone();
        move |placement: Placement| {
            let (kind, id) = (placement.kind, placement.id);
            let content = state.with_untracked(|s| s.card.as_ref().and_then(|c| item_content(c, kind, id)));
            let edit_href = links::write_link(&card_id, &recipient.get_untracked(), Some(id));
            let delete = delete.clone();
            let style = move || arrange.with(|a| a.get(kind, id).map(placement_style).unwrap_or_default());
            let class = match kind {
                ItemKind::Message => "card-item card-item--message",
                ItemKind::Drawing => "card-item card-item--drawing",
            };

            let body = match content {
                Some(ItemContent::Message { html, author }) => view! {
                    <div class="card-item__message" inner_html=html></div>
                    {author.map(|name| view! { <p class="card-item__author">"- " {name}</p> })}
                }
                .into_any(),
                Some(ItemContent::Drawing { src }) => {
                    view! { <img class="card-item__drawing" src=src draggable="false" alt="" /> }.into_any()
                }
                None => ().into_any(),
            };

            view! {
                <div
                    class=class
                    style=style
                    on:pointerdown=move |ev| begin(&ev, kind, id, ArrangeHandle::Body)
                >
                    {body}
                    <Show when=move || arrange.with(|a| a.can_arrange(kind, id))>
                        <span
                            class="card-handle card-handle--rotate"
                            on:pointerdown=move |ev| begin(&ev, kind, id, ArrangeHandle::Rotate)
                        ></span>
                        <span
                            class="card-handle card-handle--resize"
                            on:pointerdown=move |ev| begin(&ev, kind, id, ArrangeHandle::Resize)
                        ></span>
                    </Show>
                    <Show when=move || arrange.with(|a| a.can_edit(kind, id))>
                        {
                            let delete = delete.clone();
                            let edit_href = edit_href.clone();
                            view! {
                                <button
                                    class="card-handle card-handle--delete"
                                    title="Delete"
                                    on:pointerdown=move |ev| ev.stop_propagation()
                                    on:click=move |_| delete(kind, id)
                                >
                                    "×"
                                </button>
                                {(kind == ItemKind::Drawing).then(|| view! {
                                    <a
                                        class="card-handle card-handle--edit"
                                        href=edit_href
                                        on:pointerdown=move |ev| ev.stop_propagation()
                                    >
                                        "Edit"
                                    </a>
                                })}
                            }
                        }
                    </Show>
                </div>
            }
        }
    };

    let dashboard_href = {
        let card_id = card_id.clone();
        move || links::dashboard_link(&card_id, &recipient.get())
    };

    view! {
        <div class="card-view-page">
            <header class="card-view-header">
                <a class="button button--ghost" href=dashboard_href>"Back"</a>
                <h1>"For " {move || recipient.get()}</h1>
                <button
                    class="button button--ghost"
                    on:click=move |_| arrange.update(|a| {
                        let locked = a.view_mode();
                        a.set_view_mode(!locked);
                    })
                >
                    {move || if arrange.with(Arrange::view_mode) { "Edit layout" } else { "View mode" }}
                </button>
                <button class="button button--ghost" on:click=move |_| card_state::refresh(state)>
                    "Refresh"
                </button>
            </header>
            <Show when=move || state.with(|s| s.loading)>
                <p class="card-view-status">"Loading card..."</p>
            </Show>
            <div
                class="card-surface"
                class:card-surface--locked=move || arrange.with(Arrange::view_mode)
                node_ref=surface_ref
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel
            >
                <For
                    each=move || arrange.with(|a| a.items().to_vec())
                    key=|placement| (placement.kind, placement.id)
                    children=item_view
                />
            </div>
            <Show when=move || state.with(|s| s.card.as_ref().is_some_and(Card::is_empty))>
                <p class="card-view-status">"Nothing here yet. Be the first to write something!"</p>
            </Show>
        </div>
    }
}
