use std::path::Path;

use image::ImageError;
use log::info;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),
}

/// A decoded RGBA8 pixel buffer, row-major, 4 bytes per pixel. Backs every
/// placed tile as well as the toolbar icon.
#[derive(Debug, Clone, PartialEq)]
pub struct TileImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TileImage {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(rgba.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            rgba,
        }
    }
}

/// Decode the image at `path` into RGBA8. Any format the `image` crate
/// understands is accepted; failures propagate untouched, there is no
/// placeholder image.
pub fn load_tile_image(path: impl AsRef<Path>) -> Result<TileImage, AssetError> {
    let path = path.as_ref();
    let rgba = image::open(path)?.to_rgba8();
    let (width, height) = rgba.dimensions();

    info!("Loaded tile image {:?} ({}x{})", path, width, height);

    Ok(TileImage::new(width, height, rgba.into_raw()))
}
