use eframe::egui;
use lib_scene::TileImage;
use log::debug;

/// Fixed-path image used for both the toolbar icon and every placed tile.
pub const TILE_IMAGE_PATH: &str = "assets/map_editor/new.png";

/// Upload a decoded image as an egui texture.
pub fn upload_texture(ctx: &egui::Context, name: &str, image: &TileImage) -> egui::TextureHandle {
    let color_image = egui::ColorImage::from_rgba_unmultiplied(
        [image.width as usize, image.height as usize],
        &image.rgba,
    );

    debug!("Uploaded texture '{}' ({}x{})", name, image.width, image.height);

    ctx.load_texture(name, color_image, egui::TextureOptions::NEAREST)
}
