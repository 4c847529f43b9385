use crate::geometry::{Point, Rect};
use crate::item::SceneItem;
use crate::paint::Painter;

/// Item container over a fixed coordinate extent.
///
/// The bounding rectangle is set once at creation and never resized. Items
/// are owned by the scene and live until the scene is dropped; they draw in
/// insertion order.
pub struct Scene {
    rect: Rect,
    items: Vec<Box<dyn SceneItem>>,
}

impl Scene {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            items: Vec::new(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn add_item(&mut self, item: Box<dyn SceneItem>) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &dyn SceneItem> {
        self.items.iter().map(Box::as_ref)
    }

    /// Deliver hover transitions for the pointer resting at `pointer` in
    /// scene coordinates, or having left the viewport entirely (`None`).
    ///
    /// Enter fires only for a not-yet-hovered item now under the pointer,
    /// leave only for a hovered item no longer under it.
    pub fn update_hover(&mut self, pointer: Option<Point>) {
        for item in &mut self.items {
            if !item.accepts_hover() {
                continue;
            }
            let inside = pointer.is_some_and(|p| item.bounding_rect().contains(p));
            if inside && !item.is_hovered() {
                item.on_hover_enter();
            } else if !inside && item.is_hovered() {
                item.on_hover_leave();
            }
        }
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        for item in &self.items {
            item.draw(painter);
        }
    }
}
