//! slowShop — a storefront for the Slow Computer
//!
//! Usage: `slowshop [catalog.json]`

use eframe::NativeOptions;
use slowshop::app::SlowShopApp;
use slowshop::config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("slowshop=info,slowcore=info")),
        )
        .init();

    let catalog_arg = std::env::args().nth(1).map(PathBuf::from);
    let loaded = config::load(catalog_arg);
    let title = loaded.config.title.clone();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 620.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            slowcore::SlowTheme::default().apply(&cc.egui_ctx);
            Box::new(SlowShopApp::new(cc, loaded))
        }),
    )
}
