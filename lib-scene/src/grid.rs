use std::sync::Arc;

use log::info;

use crate::geometry::Point;
use crate::item::TileItem;
use crate::scene::Scene;
use crate::tile_image::TileImage;

/// Tiles per grid axis.
pub const GRID_DIM: u32 = 10;

/// Fill a fresh map: a `GRID_DIM` x `GRID_DIM` block of tiles sharing one
/// image, anchored at `origin` and stepped by the image's pixel dimensions.
///
/// No bounds checking against the scene extent; placements past it are
/// allowed. Repeated calls stack further tiles on top.
pub fn populate_grid(scene: &mut Scene, origin: Point, image: &Arc<TileImage>) {
    info!(
        "New map: placing {}x{} tiles at ({}, {})",
        GRID_DIM, GRID_DIM, origin.x, origin.y
    );

    let (w, h) = (image.width as f32, image.height as f32);
    for i in 0..GRID_DIM {
        for j in 0..GRID_DIM {
            let pos = Point::new(origin.x + i as f32 * w, origin.y + j as f32 * h);
            scene.add_item(Box::new(TileItem::new(pos, Arc::clone(image))));
        }
    }
}
