//! Layout editing of saved messages and drawings on the card.
//!
//! Each item on the card has a [`Placement`]: center in percent, width in
//! pixels and rotation. Gestures begin on an explicit handle of an item the
//! host rendered, update the placement live, and produce a single
//! [`PlacementChange`] on release for the host to persist. Any contributor
//! may rearrange any item; only its author may delete or edit it. View mode
//! locks everything.

#[cfg(test)]
#[path = "arrange_test.rs"]
mod arrange_test;

use cards::{Card, Drawing, ItemId, ItemKind, ItemPatch, Message};

use crate::camera::{Point, Viewport};
use crate::consts::{ARRANGE_MIN_WIDTH, DRAWING_DEFAULT_WIDTH, MESSAGE_DEFAULT_WIDTH};
use crate::transform;

/// Layout of one saved item.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub kind: ItemKind,
    pub id: ItemId,
    /// Center x in percent of the card.
    pub x: f64,
    /// Center y in percent of the card.
    pub y: f64,
    pub width: f64,
    pub rotation: f64,
    /// Whether the current user authored the item.
    pub owned: bool,
}

impl Placement {
    #[must_use]
    pub fn from_message(message: &Message, user_id: Option<&str>) -> Self {
        Self {
            kind: ItemKind::Message,
            id: message.id,
            x: message.x,
            y: message.y,
            width: message.width.unwrap_or(MESSAGE_DEFAULT_WIDTH),
            rotation: message.rotation,
            owned: is_author(message.user_id.as_deref(), user_id),
        }
    }

    #[must_use]
    pub fn from_drawing(drawing: &Drawing, user_id: Option<&str>) -> Self {
        Self {
            kind: ItemKind::Drawing,
            id: drawing.id,
            x: drawing.x,
            y: drawing.y,
            width: drawing.width.unwrap_or(DRAWING_DEFAULT_WIDTH),
            rotation: drawing.rotation,
            owned: is_author(drawing.user_id.as_deref(), user_id),
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn matches(&self, kind: ItemKind, id: ItemId) -> bool {
        self.kind == kind && self.id == id
    }
}

fn is_author(author: Option<&str>, user_id: Option<&str>) -> bool {
    matches!((author, user_id), (Some(a), Some(u)) if a == u)
}

/// Which part of an item a gesture started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrangeHandle {
    Body,
    Resize,
    Rotate,
}

/// Final layout of an item after a gesture, ready to persist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementChange {
    pub kind: ItemKind,
    pub id: ItemId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub rotation: f64,
}

impl PlacementChange {
    /// Sparse update carrying the new layout.
    #[must_use]
    pub fn to_patch(&self) -> ItemPatch {
        ItemPatch::placement(self.kind, self.x, self.y, self.width, self.rotation)
    }
}

#[derive(Debug, Clone)]
enum Gesture {
    Drag { start: Point, orig: Point },
    Resize { start: Point, orig_width: f64 },
    Rotate { center: Point, start: Point, orig_rotation: f64 },
}

#[derive(Debug, Clone)]
struct Active {
    kind: ItemKind,
    id: ItemId,
    gesture: Gesture,
    /// Placement at gesture start, restored on cancel.
    before: Placement,
}

/// Arrangement state for the card view.
#[derive(Debug, Clone, Default)]
pub struct Arrange {
    items: Vec<Placement>,
    viewport: Viewport,
    view_mode: bool,
    active: Option<Active>,
}

impl Arrange {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Placements for every message and drawing on `card`.
    #[must_use]
    pub fn from_card(card: &Card, user_id: Option<&str>) -> Self {
        let mut arrange = Self::new();
        arrange.load(card, user_id);
        arrange
    }

    /// Refresh placements from a (possibly revalidated) card. An item under
    /// an active gesture keeps its live placement.
    pub fn load(&mut self, card: &Card, user_id: Option<&str>) {
        let live = self.active.as_ref().and_then(|a| self.get(a.kind, a.id).cloned());
        self.items = card
            .messages
            .iter()
            .map(|m| Placement::from_message(m, user_id))
            .chain(card.drawings.iter().map(|d| Placement::from_drawing(d, user_id)))
            .collect();
        match live {
            Some(live) => {
                if let Some(slot) = self.items.iter_mut().find(|p| p.matches(live.kind, live.id)) {
                    *slot = live;
                } else {
                    self.active = None;
                }
            }
            None => self.active = None,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Lock or unlock the layout. Locking abandons any gesture.
    pub fn set_view_mode(&mut self, view_mode: bool) {
        self.view_mode = view_mode;
        if view_mode {
            self.cancel();
        }
    }

    #[must_use]
    pub fn view_mode(&self) -> bool {
        self.view_mode
    }

    #[must_use]
    pub fn items(&self) -> &[Placement] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, kind: ItemKind, id: ItemId) -> Option<&Placement> {
        self.items.iter().find(|p| p.matches(kind, id))
    }

    /// Whether the item may be dragged, resized or rotated right now.
    #[must_use]
    pub fn can_arrange(&self, kind: ItemKind, id: ItemId) -> bool {
        !self.view_mode && self.get(kind, id).is_some()
    }

    /// Whether the user may delete or re-edit the item right now.
    #[must_use]
    pub fn can_edit(&self, kind: ItemKind, id: ItemId) -> bool {
        !self.view_mode && self.get(kind, id).is_some_and(|p| p.owned)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Start a gesture on an item's handle. `center` is the item's screen
    /// center as rendered; when absent it is derived from the placement.
    /// Returns false when the gesture is refused.
    pub fn begin(
        &mut self,
        kind: ItemKind,
        id: ItemId,
        handle: ArrangeHandle,
        pointer: Point,
        center: Option<Point>,
    ) -> bool {
        if !self.can_arrange(kind, id) {
            return false;
        }
        let Some(placement) = self.get(kind, id).cloned() else {
            return false;
        };
        let gesture = match handle {
            ArrangeHandle::Body => Gesture::Drag { start: pointer, orig: placement.center() },
            ArrangeHandle::Resize => Gesture::Resize { start: pointer, orig_width: placement.width },
            ArrangeHandle::Rotate => Gesture::Rotate {
                center: center.unwrap_or_else(|| self.viewport.percent_to_screen(placement.center())),
                start: pointer,
                orig_rotation: placement.rotation,
            },
        };
        self.active = Some(Active { kind, id, gesture, before: placement });
        true
    }

    /// Follow the pointer. Returns the live placement of the item under the
    /// gesture.
    pub fn update(&mut self, pointer: Point) -> Option<&Placement> {
        let active = self.active.as_ref()?;
        let (kind, id) = (active.kind, active.id);
        let viewport = self.viewport;
        let gesture = active.gesture.clone();
        let slot = self.items.iter_mut().find(|p| p.matches(kind, id))?;
        match gesture {
            Gesture::Drag { start, orig } => {
                let pos = transform::drag(orig, pointer.sub(start), &viewport);
                slot.x = pos.x;
                slot.y = pos.y;
            }
            Gesture::Resize { start, orig_width } => {
                slot.width = transform::resize(orig_width, pointer.x - start.x, ARRANGE_MIN_WIDTH);
            }
            Gesture::Rotate { center, start, orig_rotation } => {
                slot.rotation = transform::rotate(orig_rotation, center, start, pointer);
            }
        }
        Some(&*slot)
    }

    /// Finish the gesture. Returns the change to persist, or `None` when the
    /// item did not move.
    pub fn end(&mut self) -> Option<PlacementChange> {
        let active = self.active.take()?;
        let now = self.get(active.kind, active.id)?;
        if *now == active.before {
            return None;
        }
        Some(PlacementChange {
            kind: now.kind,
            id: now.id,
            x: now.x,
            y: now.y,
            width: now.width,
            rotation: now.rotation,
        })
    }

    /// Abandon the gesture and restore the item's original placement.
    pub fn cancel(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        if let Some(slot) = self.items.iter_mut().find(|p| p.matches(active.kind, active.id)) {
            *slot = active.before;
        }
    }

    /// Drop an item the user is allowed to delete. Returns false when refused
    /// or unknown.
    pub fn remove(&mut self, kind: ItemKind, id: ItemId) -> bool {
        if !self.can_edit(kind, id) {
            return false;
        }
        if self.active.as_ref().is_some_and(|a| a.kind == kind && a.id == id) {
            self.active = None;
        }
        self.items.retain(|p| !p.matches(kind, id));
        true
    }
}
