//! Drawing editor: ink, text boxes and image stickers, saved to the card as a
//! rasterized drawing plus its editable scene.
//!
//! SYSTEM CONTEXT
//! ==============
//! With `?drawingId=` the page re-opens a saved drawing from its
//! `contentJson` and saving updates it in place; otherwise saving adds a new
//! drawing signed by the local identity. Either way the user lands back on the
//! card dashboard.

#[cfg(test)]
#[path = "write_test.rs"]
mod write_test;

use canvas::consts::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, PEN_PALETTE};
use canvas::doc::TextAlign;
use canvas::engine::Engine;
use canvas::input::Tool;
use cards::routes::{DRAWING_ID_QUERY, RECIPIENT_QUERY};
use cards::{DrawingPatch, ItemId, NewDrawing};
use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::editor_host::{EditorHandle, EditorHost};
use crate::components::identity_modal::IdentityModal;
use crate::state::card as card_state;
use crate::state::identity::Identity;
use crate::util::links;

const FONT_STEP: f64 = 2.0;
const TOOLS: [(Tool, &str); 3] = [(Tool::Select, "Select"), (Tool::Pen, "Pen"), (Tool::Eraser, "Eraser")];
const ALIGNS: [(TextAlign, &str); 3] =
    [(TextAlign::Left, "Left"), (TextAlign::Center, "Center"), (TextAlign::Right, "Right")];

/// What the editor produced for saving.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportedDrawing {
    pub image_data: String,
    pub content_json: String,
    /// Center of the content in percent of the surface.
    pub x: f64,
    pub y: f64,
}

/// Request that persists an exported drawing.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawingSave {
    Update { id: ItemId, patch: DrawingPatch },
    Create(NewDrawing),
}

/// Update the drawing being re-edited, or add a new one signed by `identity`.
pub fn plan_save(exported: ExportedDrawing, drawing_id: Option<ItemId>, identity: &Identity) -> DrawingSave {
    match drawing_id {
        Some(id) => DrawingSave::Update {
            id,
            patch: DrawingPatch {
                image_data: Some(exported.image_data),
                content_json: Some(exported.content_json),
                x: Some(exported.x),
                y: Some(exported.y),
                ..DrawingPatch::default()
            },
        },
        None => DrawingSave::Create(NewDrawing {
            image_data: exported.image_data,
            content_json: exported.content_json,
            user_id: Some(identity.user_id.clone()),
            author_name: Some(identity.display_name().to_owned()),
            x: exported.x,
            y: exported.y,
        }),
    }
}

/// Parse the `drawingId` query value.
pub fn parse_drawing_id(raw: Option<&str>) -> Option<ItemId> {
    raw.and_then(|r| r.trim().parse().ok())
}

/// Rasterize and serialize the scene. Selection chrome must already be gone.
fn export_drawing(engine: &mut Engine) -> Result<ExportedDrawing, String> {
    let image_data = engine.export_png().map_err(|err| format!("Could not render the drawing: {err:?}"))?;
    let content_json = engine.core.content_json().map_err(|err| format!("Could not serialize the drawing: {err}"))?;
    let position = engine.core.drawing_position();
    Ok(ExportedDrawing { image_data, content_json, x: position.x, y: position.y })
}

#[cfg(feature = "csr")]
async fn submit(card_id: &str, save: DrawingSave, recipient: &str) -> Result<(), cards::ApiError> {
    match save {
        DrawingSave::Update { id, patch } => {
            crate::net::api::update_item(card_id, id, &cards::ItemPatch::Drawing(patch)).await
        }
        DrawingSave::Create(body) => crate::net::api::add_drawing(card_id, &body, Some(recipient)).await.map(|_| ()),
    }
}

#[component]
pub fn WritePage() -> impl IntoView {
    let identity = expect_context::<RwSignal<Identity>>();
    let params = use_params_map();
    let query = use_query_map();
    let card_id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let drawing_id = query.with_untracked(|q| parse_drawing_id(q.get(DRAWING_ID_QUERY).as_deref()));
    let recipient = query.with_untracked(|q| q.get(RECIPIENT_QUERY).unwrap_or_default());

    let handle = EditorHandle::new();
    let ui = handle.ui;
    let show_identity = RwSignal::new(identity.with_untracked(Identity::needs_name));
    let error = RwSignal::new(None::<String>);
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    // Re-open a saved drawing once both the engine and the card are ready.
    if let Some(drawing_id) = drawing_id {
        let state = card_state::open_card(&card_id);
        let loaded = RwSignal::new(false);
        let handle = handle.clone();
        Effect::new(move || {
            if loaded.get() || !handle.ready.get() {
                return;
            }
            let content = state.with(|s| {
                s.card.as_ref().and_then(|c| c.drawing(drawing_id)).and_then(|d| d.content_json.clone())
            });
            let Some(raw) = content else {
                return;
            };
            loaded.set(true);
            handle.run(|engine| match engine.load_content_json(&raw) {
                Ok(actions) => actions,
                Err(err) => {
                    error.set(Some(format!("Could not open the drawing: {err}")));
                    Vec::new()
                }
            });
        });
    }

    let on_save = {
        let handle = handle.clone();
        let card_id = card_id.clone();
        let recipient = recipient.clone();
        move |_| {
            if ui.with_untracked(|u| u.saving) {
                return;
            }
            let who = identity.get_untracked();
            if who.needs_name() {
                show_identity.set(true);
                return;
            }
            handle.run(|engine| engine.core.prepare_for_export());
            let exported = match handle.with(export_drawing) {
                Some(Ok(exported)) => exported,
                Some(Err(msg)) => {
                    error.set(Some(msg));
                    return;
                }
                None => return,
            };
            let save = plan_save(exported, drawing_id, &who);
            handle.set_saving(true);
            error.set(None);

            #[cfg(feature = "csr")]
            {
                let handle = handle.clone();
                let card_id = card_id.clone();
                let recipient = recipient.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match submit(&card_id, save, &recipient).await {
                        Ok(()) => navigate(&links::dashboard_link(&card_id, &recipient), Default::default()),
                        Err(err) => {
                            error.set(Some(format!("Failed to save drawing: {err}")));
                            handle.set_saving(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            let _ = (save, &card_id, &recipient);
        }
    };

    let tool_buttons = TOOLS
        .iter()
        .map(|&(tool, label)| {
            let handle = handle.clone();
            view! {
                <button
                    class="toolbar__button"
                    class:toolbar__button--active=move || ui.with(|u| u.tool == tool)
                    on:click=move |_| handle.run(|engine| engine.set_tool(tool))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let swatches = PEN_PALETTE
        .iter()
        .map(|&color| {
            let handle = handle.clone();
            view! {
                <button
                    class="toolbar__swatch"
                    class:toolbar__swatch--active=move || ui.with(|u| u.ink_color.eq_ignore_ascii_case(color))
                    style:background-color=color
                    title=color
                    on:click=move |_| {
                        handle.run(|engine| {
                            let mut actions = engine.core.set_ink_color(color);
                            if !engine.core.tool().is_ink() {
                                actions.extend(engine.set_tool(Tool::Pen));
                            }
                            actions
                        });
                    }
                ></button>
            }
        })
        .collect_view();

    let align_buttons = ALIGNS
        .iter()
        .map(|&(align, label)| {
            let handle = handle.clone();
            view! {
                <button
                    class="toolbar__button"
                    disabled=move || ui.with(|u| u.selected_font_size().is_none())
                    on:click=move |_| handle.run(|engine| engine.core.set_text_align(align))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let on_brush = {
        let handle = handle.clone();
        move |ev: leptos::ev::Event| {
            if let Ok(size) = event_target_value(&ev).parse::<f64>() {
                handle.run(|engine| engine.core.set_brush_size(size));
            }
        }
    };
    let on_add_text = {
        let handle = handle.clone();
        move |_| handle.run(Engine::add_text)
    };
    let on_image_picked = {
        let handle = handle.clone();
        move |ev: leptos::ev::Event| {
            #[cfg(feature = "csr")]
            if let Some(file) = crate::util::files::first_file(&ev) {
                let handle = handle.clone();
                crate::util::files::read_data_url(&file, move |url| handle.run(|engine| engine.add_image(&url)));
            }
            #[cfg(not(feature = "csr"))]
            let _ = (ev, &handle);
        }
    };
    let on_font_smaller = {
        let handle = handle.clone();
        move |_| handle.run(|engine| engine.core.change_font_size(-FONT_STEP))
    };
    let on_font_larger = {
        let handle = handle.clone();
        move |_| handle.run(|engine| engine.core.change_font_size(FONT_STEP))
    };
    let on_delete = {
        let handle = handle.clone();
        move |_| handle.run(|engine| engine.core.delete_selected())
    };
    let on_undo = {
        let handle = handle.clone();
        move |_| handle.run(Engine::undo)
    };
    let on_redo = {
        let handle = handle.clone();
        move |_| handle.run(Engine::redo)
    };

    let back_href = links::dashboard_link(&card_id, &recipient);
    let title = if drawing_id.is_some() { "Edit drawing" } else { "New drawing" };

    view! {
        <div class="write-page">
            <header class="write-header">
                <a class="button button--ghost" href=back_href>"Cancel"</a>
                <h1>{title}</h1>
                <button class="button" on:click=on_save disabled=move || ui.with(|u| u.saving)>
                    {move || if ui.with(|u| u.saving) { "Saving..." } else { "Save" }}
                </button>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="write-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="toolbar">
                <div class="toolbar__group">{tool_buttons}</div>
                <div class="toolbar__group">{swatches}</div>
                <label class="toolbar__group">
                    "Brush "
                    <input
                        type="range"
                        min=MIN_BRUSH_SIZE
                        max=MAX_BRUSH_SIZE
                        prop:value=move || ui.with(|u| u.brush_size.to_string())
                        on:input=on_brush
                    />
                </label>
                <div class="toolbar__group">
                    <button class="toolbar__button" on:click=on_add_text>"Add text"</button>
                    <label class="toolbar__button">
                        "Add image"
                        <input type="file" accept="image/*" hidden on:change=on_image_picked />
                    </label>
                </div>
                <div class="toolbar__group">
                    <button
                        class="toolbar__button"
                        disabled=move || ui.with(|u| u.selected_font_size().is_none())
                        on:click=on_font_smaller
                    >
                        "A-"
                    </button>
                    <span class="toolbar__readout">
                        {move || ui.with(|u| u.selected_font_size().map(|s| format!("{s}px")).unwrap_or_default())}
                    </span>
                    <button
                        class="toolbar__button"
                        disabled=move || ui.with(|u| u.selected_font_size().is_none())
                        on:click=on_font_larger
                    >
                        "A+"
                    </button>
                    {align_buttons}
                </div>
                <div class="toolbar__group">
                    <button
                        class="toolbar__button"
                        disabled=move || ui.with(|u| u.selected.is_none())
                        on:click=on_delete
                    >
                        "Delete"
                    </button>
                    <button class="toolbar__button" disabled=move || ui.with(|u| !u.can_undo) on:click=on_undo>
                        "Undo"
                    </button>
                    <button class="toolbar__button" disabled=move || ui.with(|u| !u.can_redo) on:click=on_redo>
                        "Redo"
                    </button>
                </div>
            </div>
            <EditorHost handle=handle />
            <Show when=move || show_identity.get()>
                <IdentityModal on_close=Callback::new(move |()| show_identity.set(false)) />
            </Show>
        </div>
    }
}
