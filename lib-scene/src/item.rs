use std::sync::Arc;

use crate::geometry::{Point, Rect, Size, Vector};
use crate::paint::{Painter, BLACK};
use crate::tile_image::TileImage;

/// Outline width drawn around a tile while the pointer rests over it.
pub const HOVER_STROKE_WIDTH: f32 = 4.0;

const MARKER_STROKE_WIDTH: f32 = 1.0;

/// A placeable scene element: drawable, optionally hover-sensitive.
///
/// The scene dispatches `on_hover_enter`/`on_hover_leave` only to items
/// that report `accepts_hover`, and only on actual transitions.
pub trait SceneItem {
    /// Bounding rectangle in scene coordinates.
    fn bounding_rect(&self) -> Rect;

    fn draw(&self, painter: &mut dyn Painter);

    fn accepts_hover(&self) -> bool {
        false
    }

    fn is_hovered(&self) -> bool {
        false
    }

    fn on_hover_enter(&mut self) {}

    fn on_hover_leave(&mut self) {}
}

/// An image-backed tile. Position is fixed at creation; the only mutable
/// state is the hover flag.
pub struct TileItem {
    position: Point,
    image: Arc<TileImage>,
    is_hovered: bool,
}

impl TileItem {
    pub fn new(position: Point, image: Arc<TileImage>) -> Self {
        Self {
            position,
            image,
            is_hovered: false,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

impl SceneItem for TileItem {
    fn bounding_rect(&self) -> Rect {
        Rect::from_min_size(
            self.position,
            Size::new(self.image.width as f32, self.image.height as f32),
        )
    }

    fn draw(&self, painter: &mut dyn Painter) {
        let rect = self.bounding_rect();
        painter.image(rect, &self.image);
        if self.is_hovered {
            painter.stroke_rect(rect, HOVER_STROKE_WIDTH, BLACK);
        }
    }

    fn accepts_hover(&self) -> bool {
        true
    }

    fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    fn on_hover_enter(&mut self) {
        self.is_hovered = true;
    }

    fn on_hover_leave(&mut self) {
        self.is_hovered = false;
    }
}

/// Fixed rectangle marking the playable area.
///
/// The rectangle is centered around the item's position, which stays at the
/// scene origin; grid placement anchors at the position, not at the
/// rectangle's corner.
pub struct GameAreaMarker {
    local_rect: Rect,
    position: Point,
}

impl GameAreaMarker {
    pub fn new(local_rect: Rect) -> Self {
        Self {
            local_rect,
            position: Point::new(0.0, 0.0),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

impl SceneItem for GameAreaMarker {
    fn bounding_rect(&self) -> Rect {
        self.local_rect
            .translate(Vector::new(self.position.x, self.position.y))
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.stroke_rect(self.bounding_rect(), MARKER_STROKE_WIDTH, BLACK);
    }
}
