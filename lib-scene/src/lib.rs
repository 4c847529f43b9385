pub mod geometry;
pub mod grid;
pub mod item;
pub mod paint;
pub mod scene;
pub mod tile_image;
pub mod view;

use log::*;
use std::fs::File;
use std::io::Write;

pub use crate::grid::{populate_grid, GRID_DIM};
pub use crate::item::{GameAreaMarker, SceneItem, TileItem};
pub use crate::paint::{Color, Painter, BLACK};
pub use crate::scene::Scene;
pub use crate::tile_image::{load_tile_image, AssetError, TileImage};
pub use crate::view::PannableView;

pub fn init_logging() {
    let target = Box::new(File::create("log.txt").expect("Can't create file"));

    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(target))
        .filter(Some("lib_scene"), LevelFilter::Debug)
        .filter(Some("map_editor"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
