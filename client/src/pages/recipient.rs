//! Recipient page: the finished card, read only.
//!
//! Served both at the gift link the creator shares and at
//! `/card/:id/recipient`. Items sit where contributors arranged them; clicking
//! one opens it enlarged. The welcome texts from the wrapped customization
//! head the page.

#[cfg(test)]
#[path = "recipient_test.rs"]
mod recipient_test;

use canvas::arrange::{Arrange, Placement};
use cards::{Card, ItemId, ItemKind, WrappedData};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::pages::card_view::{ItemContent, item_content};
use crate::state::card::{self as card_state, RECIPIENT_FALLBACK};
use crate::util::layout::placement_style;

/// One item of the gallery with what it shows.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub placement: Placement,
    pub content: ItemContent,
}

/// Everything on `card` in layout order, messages first.
pub fn gallery(card: &Card) -> Vec<GalleryItem> {
    Arrange::from_card(card, None)
        .items()
        .iter()
        .filter_map(|placement| {
            let content = item_content(card, placement.kind, placement.id)?;
            Some(GalleryItem { placement: placement.clone(), content })
        })
        .collect()
}

/// Page heading: the welcome title unless it is still the placeholder.
pub fn heading(card: &Card) -> String {
    let welcome = WrappedData::from_card(card).welcome;
    if welcome.title == WrappedData::default().welcome.title {
        format!("For {}", card.recipient_or(RECIPIENT_FALLBACK))
    } else {
        welcome.title
    }
}

fn content_view(content: ItemContent) -> AnyView {
    match content {
        ItemContent::Message { html, author } => view! {
            <div class="card-item__message" inner_html=html></div>
            <p class="card-item__author">"- " {author.unwrap_or_else(|| "Guest".to_owned())}</p>
        }
        .into_any(),
        ItemContent::Drawing { src } => {
            view! { <img class="card-item__drawing" src=src draggable="false" alt="" /> }.into_any()
        }
    }
}

#[component]
pub fn RecipientPage() -> impl IntoView {
    let params = use_params_map();
    let card_id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let state = card_state::open_card(&card_id);
    let selected = RwSignal::new(None::<(ItemKind, ItemId)>);

    let items = Memo::new(move |_| state.with(|s| s.card.as_ref().map(gallery).unwrap_or_default()));
    let title = move || state.with(|s| s.card.as_ref().map(heading).unwrap_or_default());
    let subtitle = move || {
        state.with(|s| {
            s.card
                .as_ref()
                .map(|c| WrappedData::from_card(c).welcome.message)
                .filter(|m| *m != WrappedData::default().welcome.message)
                .unwrap_or_default()
        })
    };
    let zoomed = move || {
        let (kind, id) = selected.get()?;
        items.with(|all| all.iter().find(|i| i.placement.kind == kind && i.placement.id == id).cloned())
    };

    view! {
        <div class="recipient-page">
            <Show when=move || state.with(|s| s.loading)>
                <p class="card-view-status">"Preparing your card..."</p>
            </Show>
            <Show when=move || state.with(|s| !s.loading && s.card.is_none())>
                <p class="card-view-status">"Card not found"</p>
            </Show>
            <header class="recipient-header">
                <h1>{title}</h1>
                <p>{subtitle}</p>
            </header>
            <div class="card-surface card-surface--locked">
                <For
                    each=move || items.get()
                    key=|item| (item.placement.kind, item.placement.id)
                    children=move |item| {
                        let (kind, id) = (item.placement.kind, item.placement.id);
                        let class = match kind {
                            ItemKind::Message => "card-item card-item--message",
                            ItemKind::Drawing => "card-item card-item--drawing",
                        };
                        let style = placement_style(&item.placement);
                        let body = content_view(item.content);
                        view! {
                            <div class=class style=style on:click=move |_| selected.set(Some((kind, id)))>
                                {body}
                            </div>
                        }
                    }
                />
            </div>
            {move || {
                zoomed()
                    .map(|item| {
                        view! {
                            <div class="recipient-zoom" on:click=move |_| selected.set(None)>
                                <div class="recipient-zoom__item">{content_view(item.content)}</div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
