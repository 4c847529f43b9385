mod app;
mod assets;

use app::MapEditor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    lib_scene::init_logging();

    let app = MapEditor::new()?;
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Castle Map Editor",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;

    Ok(())
}
