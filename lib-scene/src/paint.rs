use crate::geometry::Rect;
use crate::tile_image::TileImage;

/// RGBA color, one byte per channel.
pub type Color = [u8; 4];

pub const BLACK: Color = [0, 0, 0, 255];

/// Drawing surface handed to scene items.
///
/// Implementations map scene-space rectangles onto their own backend. All
/// stroke parameters travel with each call; the painter keeps no ambient
/// pen state, so one item's outline cannot affect its siblings.
pub trait Painter {
    /// Blit `image` over `rect`.
    fn image(&mut self, rect: Rect, image: &TileImage);

    /// Stroke the outline of `rect` with a solid pen.
    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color);
}
