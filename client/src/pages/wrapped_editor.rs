//! Editor for the card's wrapped reveal.
//!
//! Edits a draft copy of the blob. Saving writes the draft into the shown card
//! and its cache, returns to the dashboard at once, and patches the backend in
//! the background.

#[cfg(test)]
#[path = "wrapped_editor_test.rs"]
mod wrapped_editor_test;

use cards::routes::card_page;
use cards::{Card, WrappedData, WrappedSection};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::state::card::{self as card_state, CardState};
use crate::state::wrapped_form::WrappedField;

/// Draft to start editing from, once the card has settled.
pub fn initial_draft(state: &CardState) -> Option<WrappedData> {
    match &state.card {
        Some(card) => Some(WrappedData::from_card(card)),
        None if !state.loading => Some(WrappedData::default()),
        None => None,
    }
}

/// Store the draft as the card's blob. Returns false if it is unchanged.
pub fn store_draft(card: &mut Card, json: &str) -> bool {
    if card.wrapped_data.as_deref() == Some(json) {
        return false;
    }
    card.wrapped_data = Some(json.to_owned());
    true
}

fn section_tabs(section: RwSignal<WrappedSection>) -> impl IntoView {
    WrappedSection::ALL
        .iter()
        .map(|&tab| {
            view! {
                <button
                    class="wrapped-tabs__tab"
                    class:wrapped-tabs__tab--active=move || section.get() == tab
                    on:click=move |_| section.set(tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view()
}

fn field_view(field: WrappedField, draft: RwSignal<Option<WrappedData>>) -> impl IntoView {
    let value = move || draft.with(|d| d.as_ref().map(|d| field.get(d).to_owned()).unwrap_or_default());
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        draft.update(|d| {
            if let Some(d) = d {
                field.set(d, text);
            }
        });
    };
    let input = if field.multiline() {
        view! { <textarea class="wrapped-form__input" rows="4" prop:value=value on:input=on_input></textarea> }
            .into_any()
    } else {
        view! { <input class="wrapped-form__input" type="text" prop:value=value on:input=on_input /> }.into_any()
    };
    view! {
        <label class="wrapped-form__field">
            <span class="wrapped-form__label">{field.label()}</span>
            {input}
        </label>
    }
}

/// Read a picked image and hand its data URL to `apply`.
fn on_image(draft: RwSignal<Option<WrappedData>>, apply: fn(&mut WrappedData, String)) -> impl Fn(leptos::ev::Event) {
    move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        if let Some(file) = crate::util::files::first_file(&ev) {
            crate::util::files::read_data_url(&file, move |url| {
                draft.update(|d| {
                    if let Some(d) = d {
                        apply(d, url);
                    }
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (ev, draft, apply);
    }
}

#[component]
pub fn WrappedEditorPage() -> impl IntoView {
    let params = use_params_map();
    let card_id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let state = card_state::open_card(&card_id);
    let draft = RwSignal::new(None::<WrappedData>);
    let section = RwSignal::new(WrappedSection::Welcome);
    let error = RwSignal::new(None::<String>);
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    Effect::new(move || {
        if draft.with_untracked(Option::is_some) {
            return;
        }
        if let Some(initial) = state.with(initial_draft) {
            draft.set(Some(initial));
        }
    });

    let on_save = {
        let card_id = card_id.clone();
        move |_| {
            let Some(data) = draft.get_untracked() else {
                return;
            };
            let json = match data.to_json_string() {
                Ok(json) => json,
                Err(err) => {
                    error.set(Some(format!("Could not save: {err}")));
                    return;
                }
            };
            card_state::mutate(state, |card| store_draft(card, &json));

            #[cfg(feature = "csr")]
            {
                let card_id = card_id.clone();
                leptos::task::spawn_local(async move {
                    if let Err(err) = crate::net::api::update_wrapped(&card_id, &data).await {
                        log::warn!("saving wrapped data for {card_id} failed: {err}");
                    }
                });
                navigate(&card_page(&card_id), Default::default());
            }
            #[cfg(not(feature = "csr"))]
            let _ = (data, &card_id);
        }
    };

    let fields = move || {
        WrappedField::of(section.get()).iter().map(|&field| field_view(field, draft)).collect_view()
    };

    let welcome_image = move || draft.with(|d| d.as_ref().and_then(|d| d.welcome.image.clone()));
    let photos = move || draft.with(|d| d.as_ref().map(|d| d.stats.photos.clone()).unwrap_or_default());

    view! {
        <div class="wrapped-editor-page">
            <header class="wrapped-editor-header">
                <a class="button button--ghost" href=card_page(&card_id)>"Cancel"</a>
                <h1>"Customize the gift"</h1>
                <button class="button" on:click=on_save disabled=move || draft.with(Option::is_none)>
                    "Save"
                </button>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="wrapped-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || draft.with(Option::is_some)
                fallback=|| view! { <p class="wrapped-status">"Loading card..."</p> }
            >
                <nav class="wrapped-tabs">{section_tabs(section)}</nav>
                <div class="wrapped-form">
                    {fields}
                    <Show when=move || section.get() == WrappedSection::Welcome>
                        <div class="wrapped-form__media">
                            {move || welcome_image().map(|src| view! {
                                <img class="wrapped-form__image" src=src alt="" />
                                <button
                                    class="button button--ghost"
                                    on:click=move |_| draft.update(|d| {
                                        if let Some(d) = d {
                                            d.welcome.image = None;
                                        }
                                    })
                                >
                                    "Remove image"
                                </button>
                            })}
                            <label class="button button--ghost">
                                "Choose image"
                                <input
                                    type="file"
                                    accept="image/*"
                                    hidden
                                    on:change=on_image(draft, |d, url| d.welcome.image = Some(url))
                                />
                            </label>
                        </div>
                    </Show>
                    <Show when=move || section.get() == WrappedSection::Stats>
                        <div class="wrapped-form__media">
                            <div class="wrapped-form__photos">
                                {move || photos()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, src)| view! {
                                        <figure class="wrapped-form__photo">
                                            <img src=src alt="" />
                                            <button
                                                class="button button--ghost"
                                                on:click=move |_| draft.update(|d| {
                                                    if let Some(d) = d {
                                                        if index < d.stats.photos.len() {
                                                            d.stats.photos.remove(index);
                                                        }
                                                    }
                                                })
                                            >
                                                "Remove"
                                            </button>
                                        </figure>
                                    })
                                    .collect_view()}
                            </div>
                            <label class="button button--ghost">
                                "Add photo"
                                <input
                                    type="file"
                                    accept="image/*"
                                    hidden
                                    on:change=on_image(draft, |d, url| d.stats.photos.push(url))
                                />
                            </label>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
