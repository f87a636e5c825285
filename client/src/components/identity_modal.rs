//! Prompt for the display name attached to messages and drawings.

use leptos::prelude::*;

use crate::state::identity::Identity;

/// Modal asking for a name. Saving stores it and closes the modal; a blank
/// name keeps the modal open.
#[component]
pub fn IdentityModal(on_close: Callback<()>) -> impl IntoView {
    let identity = expect_context::<RwSignal<Identity>>();
    let name = RwSignal::new(identity.get_untracked().user_name.unwrap_or_default());
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(named) = identity.get_untracked().with_name(&name.get_untracked()) else {
            error.set(Some("Please enter your name."));
            return;
        };
        named.save();
        identity.set(named);
        on_close.run(());
    };

    view! {
        <div class="identity-modal__backdrop">
            <form class="identity-modal" on:submit=on_submit>
                <h2>"Who's signing?"</h2>
                <p class="identity-modal__subtitle">"Your name appears next to what you add."</p>
                <input
                    class="identity-modal__input"
                    type="text"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        error.set(None);
                        name.set(event_target_value(&ev));
                    }
                />
                <Show when=move || error.get().is_some()>
                    <p class="identity-modal__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="identity-modal__actions">
                    <button type="button" class="button button--ghost" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="button">"Continue"</button>
                </div>
            </form>
        </div>
    }
}
