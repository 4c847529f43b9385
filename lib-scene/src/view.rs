use crate::geometry::{Point, Rect, Size, Vector};

/// Scroll state of the viewport over the scene, with drag-to-pan on the
/// primary pointer button.
///
/// `drag_anchor` holds the last tracked pointer position while the button
/// is held. `None` is the explicit "no active drag" state: it is the
/// starting state, release returns to it, and move events arriving in it
/// are ignored.
#[derive(Default)]
pub struct PannableView {
    scroll_offset: Vector,
    drag_anchor: Option<Point>,
}

impl PannableView {
    pub fn new() -> Self {
        Self {
            scroll_offset: Vector::ZERO,
            drag_anchor: None,
        }
    }

    pub fn scroll_offset(&self) -> Vector {
        self.scroll_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Primary button went down at `pos`. A press during an active drag
    /// rebases the anchor: last press wins.
    pub fn pointer_pressed(&mut self, pos: Point) {
        self.drag_anchor = Some(pos);
    }

    /// Pointer moved to `pos` with the primary button held.
    ///
    /// Shifts the scroll offset by the negative pointer delta, so the
    /// content follows the pointer. Without a recorded press this is a
    /// no-op.
    pub fn pointer_moved(&mut self, pos: Point) {
        let Some(anchor) = self.drag_anchor else {
            return;
        };
        let delta = pos - anchor;
        self.scroll_offset -= delta;
        self.drag_anchor = Some(pos);
    }

    /// Primary button released: the drag ends.
    pub fn pointer_released(&mut self) {
        self.drag_anchor = None;
    }

    /// Scene position currently shown at the viewport's top-left corner.
    pub fn visible_origin(&self, scene_rect: Rect) -> Point {
        scene_rect.min() + self.scroll_offset
    }

    /// Map a viewport-relative position to scene coordinates.
    pub fn map_to_scene(&self, scene_rect: Rect, viewport_offset: Vector) -> Point {
        self.visible_origin(scene_rect) + viewport_offset
    }

    /// Center the viewport on the scene rectangle, the starting state of a
    /// freshly created view.
    pub fn center_on(&mut self, scene_rect: Rect, viewport: Size) {
        self.scroll_offset = Vector::new(
            (scene_rect.size().width - viewport.width) / 2.0,
            (scene_rect.size().height - viewport.height) / 2.0,
        );
    }
}
