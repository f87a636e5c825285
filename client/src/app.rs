//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    card_view::CardViewPage, dashboard::DashboardPage, home::HomePage, recipient::RecipientPage,
    wrapped_editor::WrappedEditorPage, write::WritePage,
};
use crate::state::identity::Identity;

/// Root application component.
///
/// Provides the local identity and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(Identity::load()));

    view! {
        <Title text="Scribl"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("card"), ParamSegment("id")) view=DashboardPage/>
                <Route path=(StaticSegment("card"), ParamSegment("id"), StaticSegment("view")) view=CardViewPage/>
                <Route path=(StaticSegment("card"), ParamSegment("id"), StaticSegment("write")) view=WritePage/>
                <Route path=(StaticSegment("card"), ParamSegment("id"), StaticSegment("recipient")) view=RecipientPage/>
                <Route path=(StaticSegment("gift"), ParamSegment("id")) view=RecipientPage/>
                <Route path=(StaticSegment("gift"), ParamSegment("id"), StaticSegment("edit")) view=WrappedEditorPage/>
            </Routes>
        </Router>
    }
}
