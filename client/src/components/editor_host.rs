//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns gesture, ink and history logic and paints the ink
//! layer. This host forwards DOM events to it, lays elements out as DOM nodes
//! from the [`EditorUi`] mirror, and reports their rendered heights back so
//! hit tests match what the user sees. The element layer ignores pointer
//! events; every gesture is hit-tested by the engine.

use std::cell::RefCell;
use std::rc::Rc;

use canvas::doc::{Element, ElementId, ElementKind};
use canvas::engine::{Action, Engine};
use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::state::editor::EditorUi;
use crate::util::layout::element_style;

#[cfg(feature = "csr")]
use crate::util::canvas_input::{map_key, map_modifiers, mouse_point, pointer_point, should_prevent_default_key};
#[cfg(feature = "csr")]
use canvas::input::Button;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

type CommittedText = RwSignal<Option<(ElementId, String)>>;

/// Shared handle to the editor engine and its reactive mirror.
#[derive(Clone)]
pub struct EditorHandle {
    engine: Rc<RefCell<Option<Engine>>>,
    pub ui: RwSignal<EditorUi>,
    /// Set once the engine is bound to its canvas.
    pub ready: RwSignal<bool>,
    /// Text typed in place, waiting to be committed to the engine.
    committed: CommittedText,
}

impl EditorHandle {
    pub fn new() -> Self {
        Self {
            engine: Rc::new(RefCell::new(None)),
            ui: RwSignal::new(EditorUi::default()),
            ready: RwSignal::new(false),
            committed: RwSignal::new(None),
        }
    }

    /// Run an engine operation and fold its actions into the UI mirror.
    pub fn run(&self, op: impl FnOnce(&mut Engine) -> Vec<Action>) {
        let mut slot = self.engine.borrow_mut();
        let Some(engine) = slot.as_mut() else {
            return;
        };
        let actions = op(engine);
        if actions.is_empty() {
            return;
        }
        let mut repaint = false;
        self.ui.update(|ui| repaint = ui.apply(&actions, &engine.core));
        if repaint {
            paint(engine);
        }
    }

    /// Use the engine directly, e.g. to export. `None` before it is mounted.
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine) -> R) -> Option<R> {
        self.engine.borrow_mut().as_mut().map(f)
    }

    pub fn set_saving(&self, saving: bool) {
        self.ui.update(|ui| ui.saving = saving);
    }

    fn attach(&self, engine: Engine) {
        paint(&engine);
        let ui = EditorUi::from_core(&engine.core);
        *self.engine.borrow_mut() = Some(engine);
        self.ui.set(ui);
        self.ready.set(true);
    }
}

impl Default for EditorHandle {
    fn default() -> Self {
        Self::new()
    }
}

fn paint(engine: &Engine) {
    #[cfg(feature = "csr")]
    if let Err(err) = engine.render() {
        log::error!("ink render failed: {err:?}");
    }
    #[cfg(not(feature = "csr"))]
    let _ = engine;
}

/// Measure the surface and every laid-out element for the engine.
#[cfg(feature = "csr")]
fn sync_layout(engine: &mut Engine, surface: &web_sys::HtmlDivElement) {
    let rect = surface.get_bounding_client_rect();
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    engine.set_viewport(rect.left(), rect.top(), rect.width(), rect.height(), dpr);

    let Ok(nodes) = surface.query_selector_all("[data-id]") else {
        return;
    };
    for index in 0..nodes.length() {
        let Some(el) = nodes.item(index).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok()) else {
            continue;
        };
        let Some(id) = el.get_attribute("data-id").and_then(|raw| ElementId::parse_str(&raw).ok()) else {
            continue;
        };
        engine.core.set_element_height(id, f64::from(el.offset_height()));
    }
}

/// Whether the event started inside a text box open for editing.
#[cfg(feature = "csr")]
fn target_editable(ev: &web_sys::Event) -> Option<web_sys::HtmlElement> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("[contenteditable=\"true\"]").ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

#[cfg(feature = "csr")]
fn focus_editor(surface: &web_sys::HtmlDivElement, id: ElementId) {
    let selector = format!("[data-id=\"{id}\"] [contenteditable=\"true\"]");
    if let Some(el) = surface
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// The drawing surface: ink canvas plus the element layer.
#[component]
pub fn EditorHost(handle: EditorHandle) -> impl IntoView {
    let surface_ref = NodeRef::<leptos::html::Div>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let ui = handle.ui;
    let committed = handle.committed;
    let editing = Memo::new(move |_| ui.with(|u| u.editing));

    #[cfg(feature = "csr")]
    {
        let handle = handle.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if handle.ready.get_untracked() {
                return;
            }
            handle.attach(Engine::new(canvas));
        });
    }

    {
        let handle = handle.clone();
        Effect::new(move || {
            let Some((id, html)) = committed.get() else {
                return;
            };
            handle.run(|engine| engine.core.commit_text(&id, html));
        });
    }

    #[cfg(feature = "csr")]
    Effect::new(move || {
        let Some(id) = editing.get() else {
            return;
        };
        let Some(surface) = surface_ref.get_untracked() else {
            return;
        };
        gloo_timers::callback::Timeout::new(0, move || focus_editor(&surface, id)).forget();
    });

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let handle = handle.clone();
            move |ev: leptos::ev::PointerEvent| {
                if target_editable(&ev).is_some() {
                    return;
                }
                let Some(surface) = surface_ref.get_untracked() else {
                    return;
                };
                ev.prevent_default();
                let _ = surface.focus();
                let _ = surface.set_pointer_capture(ev.pointer_id());
                let point = pointer_point(&ev);
                let button = Button::from_dom(ev.button());
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                handle.run(|engine| {
                    sync_layout(engine, &surface);
                    engine.on_pointer_down(point, button, modifiers)
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let handle = handle.clone();
            move |ev: leptos::ev::PointerEvent| {
                let point = pointer_point(&ev);
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                handle.run(|engine| engine.on_pointer_move(point, modifiers));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let handle = handle.clone();
            move |ev: leptos::ev::PointerEvent| {
                if let Some(surface) = surface_ref.get_untracked() {
                    let _ = surface.release_pointer_capture(ev.pointer_id());
                }
                let point = pointer_point(&ev);
                let button = Button::from_dom(ev.button());
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                handle.run(|engine| engine.on_pointer_up(point, button, modifiers));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        let handle = handle.clone();
        move |_ev: leptos::ev::PointerEvent| {
            handle.run(Engine::on_pointer_leave);
        }
    };

    let on_double_click = {
        #[cfg(feature = "csr")]
        {
            let handle = handle.clone();
            move |ev: leptos::ev::MouseEvent| {
                if target_editable(&ev).is_some() {
                    return;
                }
                let Some(surface) = surface_ref.get_untracked() else {
                    return;
                };
                let point = mouse_point(&ev);
                handle.run(|engine| {
                    sync_layout(engine, &surface);
                    engine.on_double_click(point)
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_key_down = {
        #[cfg(feature = "csr")]
        {
            let handle = handle.clone();
            move |ev: leptos::ev::KeyboardEvent| {
                let key = ev.key();
                if let Some(editor) = target_editable(&ev) {
                    if key != "Escape" {
                        return;
                    }
                    // Blurring commits the typed text before editing closes.
                    let _ = editor.blur();
                }
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                if should_prevent_default_key(&key, modifiers) {
                    ev.prevent_default();
                }
                handle.run(|engine| engine.on_key_down(&map_key(&key), modifiers));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::KeyboardEvent| {}
        }
    };

    view! {
        <div
            class="editor-surface"
            node_ref=surface_ref
            tabindex="0"
            style:cursor=move || ui.with(|u| u.cursor.clone())
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
            on:dblclick=on_double_click
            on:keydown=on_key_down
        >
            <canvas class="editor-surface__ink" node_ref=canvas_ref></canvas>
            <div class="editor-surface__elements">
                {move || {
                    ui.with(|u| {
                        u.elements
                            .iter()
                            .map(|el| element_view(el, u.selected == Some(el.id), u.editing == Some(el.id), committed))
                            .collect_view()
                    })
                }}
            </div>
        </div>
    }
}

fn element_view(el: &Element, selected: bool, editing: bool, committed: CommittedText) -> AnyView {
    let id = el.id;
    let class = if selected { "editor-element editor-element--selected" } else { "editor-element" };
    let style = element_style(el);
    let handles = selected.then(|| {
        view! {
            <span class="editor-handle editor-handle--rotate"></span>
            <span class="editor-handle editor-handle--resize"></span>
            <span class="editor-handle editor-handle--delete">"×"</span>
        }
    });

    match el.kind {
        ElementKind::Text => {
            let html = el.content.clone().unwrap_or_default();
            view! {
                <div class=class data-id=id.to_string() style=style>
                    <div
                        class="editor-element__text"
                        contenteditable=if editing { "true" } else { "false" }
                        inner_html=html
                        on:blur=move |ev: leptos::ev::FocusEvent| {
                            #[cfg(feature = "csr")]
                            {
                                let html = event_target::<web_sys::HtmlElement>(&ev).inner_html();
                                committed.set(Some((id, html)));
                            }
                            #[cfg(not(feature = "csr"))]
                            let _ = (ev, committed);
                        }
                    ></div>
                    {handles}
                </div>
            }
            .into_any()
        }
        ElementKind::Image => {
            let src = el.src.clone().unwrap_or_default();
            view! {
                <div class=class data-id=id.to_string() style=style>
                    <img class="editor-element__image" src=src draggable="false" alt="" />
                    {handles}
                </div>
            }
            .into_any()
        }
    }
}
