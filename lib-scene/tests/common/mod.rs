#![allow(dead_code)]

use std::sync::Arc;

use lib_scene::geometry::Rect;
use lib_scene::{Color, Painter, TileImage};

/// A painter that records draw calls instead of rasterizing them.
#[derive(Default)]
pub struct RecordingPainter {
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Image { rect: Rect, width: u32, height: u32 },
    StrokeRect { rect: Rect, width: f32, color: Color },
}

impl Painter for RecordingPainter {
    fn image(&mut self, rect: Rect, image: &TileImage) {
        self.commands.push(Command::Image {
            rect,
            width: image.width,
            height: image.height,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color) {
        self.commands.push(Command::StrokeRect { rect, width, color });
    }
}

pub const TEST_IMAGE_WIDTH: u32 = 16;
pub const TEST_IMAGE_HEIGHT: u32 = 12;

/// Solid red 16x12 test image.
pub fn test_image() -> Arc<TileImage> {
    let rgba = vec![255, 0, 0, 255].repeat((TEST_IMAGE_WIDTH * TEST_IMAGE_HEIGHT) as usize);
    Arc::new(TileImage::new(TEST_IMAGE_WIDTH, TEST_IMAGE_HEIGHT, rgba))
}
