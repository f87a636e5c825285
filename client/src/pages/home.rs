//! Home page: start a card for someone, or join one by its link code.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use cards::routes;
use cards::{ApiError, Card};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::identity::Identity;

const EMPTY_RECIPIENT: &str = "Who is this card for?";
const LINK_TAKEN: &str = "This link is already taken. Please choose a different one.";

/// Trimmed recipient name, or the prompt to show when it is blank.
pub fn validate_recipient(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() { Err(EMPTY_RECIPIENT) } else { Ok(name.to_owned()) }
}

/// What to do after asking the backend to create the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Go to the new card.
    Open,
    /// The custom link belongs to another card; stay and ask for another.
    Taken,
}

/// Only a conflict keeps the user on the form. Any other failure still opens
/// the card, which the dashboard creates on demand from its URL.
pub fn create_outcome(result: &Result<Card, ApiError>) -> CreateOutcome {
    match result {
        Err(err) if err.is_conflict() => CreateOutcome::Taken,
        _ => CreateOutcome::Open,
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let identity = expect_context::<RwSignal<Identity>>();
    let navigate = use_navigate();
    let recipient = RwSignal::new(String::new());
    let custom_link = RwSignal::new(String::new());
    let join_code = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_create = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let name = match validate_recipient(&recipient.get_untracked()) {
                Ok(name) => name,
                Err(prompt) => {
                    error.set(Some(prompt.to_owned()));
                    return;
                }
            };
            let card_id = routes::card_id_for(&custom_link.get_untracked());
            let creator = identity.with_untracked(|i| i.display_name().to_owned());
            busy.set(true);
            error.set(None);

            #[cfg(feature = "csr")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::create_card(&card_id, &creator, &name).await;
                    if let Err(err) = &result {
                        log::warn!("create card {card_id} failed: {err}");
                    }
                    match create_outcome(&result) {
                        CreateOutcome::Taken => {
                            error.set(Some(LINK_TAKEN.to_owned()));
                            busy.set(false);
                        }
                        CreateOutcome::Open => {
                            navigate(&crate::util::links::dashboard_link(&card_id, &name), NavigateOptions::default());
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&navigate, card_id, creator, name);
            }
        }
    };

    let on_join = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let code = routes::card_slug(&join_code.get_untracked());
        if code.is_empty() {
            return;
        }
        navigate(&routes::card_page(&code), NavigateOptions::default());
    };

    view! {
        <div class="home-page">
            <div class="home-card">
                <h1>"Scribl"</h1>
                <p class="home-card__subtitle">"A card everyone can sign."</p>
                <form class="home-form" on:submit=on_create>
                    <input
                        class="home-input"
                        type="text"
                        placeholder="Recipient's name"
                        prop:value=move || recipient.get()
                        on:input=move |ev| {
                            error.set(None);
                            recipient.set(event_target_value(&ev));
                        }
                    />
                    <input
                        class="home-input"
                        type="text"
                        placeholder="Custom link (optional)"
                        prop:value=move || custom_link.get()
                        on:input=move |ev| {
                            error.set(None);
                            custom_link.set(event_target_value(&ev));
                        }
                    />
                    <Show when=move || !custom_link.get().trim().is_empty()>
                        <p class="home-form__hint">
                            "Link: /card/" {move || routes::card_slug(&custom_link.get())}
                        </p>
                    </Show>
                    <button class="button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create card" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="home-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="home-divider"></div>
                <form class="home-form home-form--join" on:submit=on_join>
                    <input
                        class="home-input"
                        type="text"
                        placeholder="Card code"
                        prop:value=move || join_code.get()
                        on:input=move |ev| join_code.set(event_target_value(&ev))
                    />
                    <button class="button button--ghost" type="submit">"Join"</button>
                </form>
            </div>
        </div>
    }
}
