use anyhow::Context;
use bike_finder::app::BikeFinderApp;
use bike_finder::config::AppConfig;
use bike_finder::data::loader::CatalogSource;
use bike_finder::state::AppState;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    let source = CatalogSource::new(&config.catalog_path);
    let catalog = source
        .catalog()
        .inspect_err(|e| log::error!("Failed to load catalog: {e}"))
        .with_context(|| format!("loading catalog from {}", source.path().display()))?;

    let state = AppState::new(catalog, &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Used Bike Finder",
        options,
        Box::new(move |_cc| Ok(Box::new(BikeFinderApp::new(state, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}
