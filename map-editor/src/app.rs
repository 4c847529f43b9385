use std::sync::Arc;

use eframe::egui::{self, Color32, Pos2, Stroke, Vec2};
use eframe::Frame;

use lib_scene::geometry::{Point, Rect as SceneRect, Size, Vector};
use lib_scene::{
    populate_grid, AssetError, GameAreaMarker, PannableView, Painter, Scene, TileImage,
};

use crate::assets;

/// Adapts scene-space draw calls onto an egui painter. All tiles share the
/// one editor image, uploaded once as `texture`.
struct EguiPainter<'a> {
    painter: &'a egui::Painter,
    origin: Point,
    viewport_min: Pos2,
    texture: &'a egui::TextureHandle,
}

impl EguiPainter<'_> {
    fn to_screen(&self, rect: SceneRect) -> egui::Rect {
        let min = rect.min();
        let top_left = self.viewport_min + Vec2::new(min.x - self.origin.x, min.y - self.origin.y);
        egui::Rect::from_min_size(top_left, Vec2::new(rect.size().width, rect.size().height))
    }
}

impl Painter for EguiPainter<'_> {
    fn image(&mut self, rect: SceneRect, _image: &TileImage) {
        self.painter.image(
            self.texture.id(),
            self.to_screen(rect),
            egui::Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
    }

    fn stroke_rect(&mut self, rect: SceneRect, width: f32, color: [u8; 4]) {
        let [r, g, b, a] = color;
        self.painter.rect_stroke(
            self.to_screen(rect),
            0.0,
            Stroke::new(width, Color32::from_rgba_unmultiplied(r, g, b, a)),
        );
    }
}

pub struct MapEditor {
    scene: Scene,
    view: PannableView,
    game_area_position: Point,
    tile_image: Arc<TileImage>,
    texture: Option<egui::TextureHandle>,
    view_centered: bool,
    pointer_in_scene: Option<Point>,
}

impl MapEditor {
    pub fn new() -> Result<Self, AssetError> {
        let tile_image = Arc::new(lib_scene::load_tile_image(assets::TILE_IMAGE_PATH)?);

        let mut scene = Scene::new(SceneRect::from_min_size(
            Point::new(-2500.0, -2500.0),
            Size::new(5000.0, 5000.0),
        ));
        let marker = GameAreaMarker::new(SceneRect::from_min_size(
            Point::new(-200.0, -150.0),
            Size::new(400.0, 300.0),
        ));
        let game_area_position = marker.position();
        scene.add_item(Box::new(marker));

        Ok(Self {
            scene,
            view: PannableView::new(),
            game_area_position,
            tile_image,
            texture: None,
            view_centered: false,
            pointer_in_scene: None,
        })
    }

    fn ensure_texture(&mut self, ctx: &egui::Context) -> egui::TextureHandle {
        self.texture
            .get_or_insert_with(|| assets::upload_texture(ctx, "tile", &self.tile_image))
            .clone()
    }

    fn draw_toolbar(&mut self, ui: &mut egui::Ui, texture: &egui::TextureHandle) {
        ui.horizontal(|ui| {
            let icon = egui::Image::new(texture).fit_to_exact_size(Vec2::splat(16.0));
            if ui
                .add(egui::Button::image_and_text(icon, "New map"))
                .on_hover_text("Create new map")
                .clicked()
            {
                populate_grid(&mut self.scene, self.game_area_position, &self.tile_image);
            }
        });
    }

    fn draw_central_panel(&mut self, ctx: &egui::Context) {
        let texture = self.ensure_texture(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_toolbar(ui, &texture);
            ui.separator();

            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let viewport = response.rect;
            let input = ui.input(|i| i.clone());

            // A fresh view starts centered on the scene; the viewport size
            // is only known once the first frame lays out.
            if !self.view_centered {
                self.view.center_on(
                    self.scene.rect(),
                    Size::new(viewport.width(), viewport.height()),
                );
                self.view_centered = true;
            }

            let pointer_pos = input.pointer.hover_pos().filter(|p| viewport.contains(*p));

            // Drag-to-pan on the primary button. Presses outside the canvas
            // never start a drag; other buttons keep their default handling.
            if input.pointer.primary_pressed() {
                if let Some(pos) = pointer_pos {
                    self.view.pointer_pressed(Point::new(pos.x, pos.y));
                }
            } else if input.pointer.primary_down() {
                if let Some(pos) = input.pointer.hover_pos() {
                    self.view.pointer_moved(Point::new(pos.x, pos.y));
                }
            }
            if input.pointer.primary_released() {
                self.view.pointer_released();
            }

            let scene_pointer = pointer_pos.map(|p| {
                self.view.map_to_scene(
                    self.scene.rect(),
                    Vector::new(p.x - viewport.min.x, p.y - viewport.min.y),
                )
            });
            self.pointer_in_scene = scene_pointer;
            self.scene.update_hover(scene_pointer);

            let painter = ui.painter_at(viewport);
            let mut scene_painter = EguiPainter {
                painter: &painter,
                origin: self.view.visible_origin(self.scene.rect()),
                viewport_min: viewport.min,
                texture: &texture,
            };
            self.scene.draw(&mut scene_painter);
        });
    }

    fn draw_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let label = match self.pointer_in_scene {
                Some(p) => format!("Scene position: {:.0}, {:.0}", p.x, p.y),
                None => String::from("Scene position: -"),
            };
            ui.label(label);
        });
    }
}

impl eframe::App for MapEditor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.draw_status_bar(ctx);
        self.draw_central_panel(ctx);
    }
}
