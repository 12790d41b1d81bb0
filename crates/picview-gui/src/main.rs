mod app;
mod convert;
mod messages;
mod panels;
mod state;
mod worker;

use std::path::Path;

use picview_core::config::{ViewerConfig, CONFIG_FILE_NAME};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("picview"),
        ..Default::default()
    };

    eframe::run_native(
        "picview",
        options,
        Box::new(move |cc| Ok(Box::new(app::PicviewApp::new(&cc.egui_ctx, config)?))),
    )
}

/// `picview.toml` from the working directory, or defaults.
fn load_config() -> ViewerConfig {
    let path = Path::new(CONFIG_FILE_NAME);
    if !path.exists() {
        return ViewerConfig::default();
    }
    match ViewerConfig::load(path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "Loaded config");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config");
            ViewerConfig::default()
        }
    }
}
