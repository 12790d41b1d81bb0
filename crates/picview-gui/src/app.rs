use std::sync::mpsc;

use picview_core::config::ViewerConfig;
use picview_core::gallery::generate_image_urls;
use picview_core::loader::ImageSource;
use picview_core::surface::DisplayList;
use picview_core::viewer::{Viewer, ViewerEvent};

use crate::convert::rgba_to_color_image;
use crate::messages::{LoaderCommand, LoaderResult};
use crate::panels;
use crate::state::UIState;
use crate::worker;

/// The viewer paints into a retained display list that the canvas panel
/// replays every frame.
pub type CanvasViewer = Viewer<DisplayList<egui::TextureHandle>>;

pub struct PicviewApp {
    pub cmd_tx: mpsc::Sender<LoaderCommand>,
    pub result_tx: mpsc::Sender<LoaderResult>,
    pub result_rx: mpsc::Receiver<LoaderResult>,
    pub viewer: CanvasViewer,
    pub config: ViewerConfig,
    pub ui_state: UIState,
}

impl PicviewApp {
    pub fn new(ctx: &egui::Context, config: ViewerConfig) -> std::io::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_loader(result_tx.clone(), ctx.clone())?;

        let mut app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            viewer: Viewer::new(DisplayList::new(0, 0), &config),
            config,
            ui_state: UIState::default(),
        };
        app.regenerate_gallery();
        if let Some(first) = app.ui_state.gallery.first().cloned() {
            app.select(ImageSource::Url(first));
        }
        Ok(app)
    }

    pub fn regenerate_gallery(&mut self) {
        self.ui_state.gallery = generate_image_urls(&mut rand::rng(), &self.config.gallery);
        self.ui_state
            .add_log(format!("Generated {} images", self.ui_state.gallery.len()));
    }

    /// Make `source` the active image and queue its load.
    pub fn select(&mut self, source: ImageSource) {
        let selection = self.viewer.select_image(source.name());
        self.ui_state.loading = Some(selection);
        let _ = self.cmd_tx.send(LoaderCommand::Load { selection, source });
    }

    pub fn dispatch(&mut self, event: ViewerEvent<egui::TextureHandle>) {
        self.viewer.dispatch(event);
    }

    /// Drain all pending results from the loader.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                LoaderResult::Loaded {
                    selection,
                    source,
                    image,
                    elapsed,
                } => {
                    if !self.viewer.controller().is_current(selection) {
                        tracing::debug!(%selection, "Dropping superseded image");
                        continue;
                    }
                    let dimensions = image.dimensions();
                    let texture = ctx.load_texture(
                        "picview-image",
                        rgba_to_color_image(&image.rgba),
                        egui::TextureOptions::LINEAR,
                    );
                    self.ui_state.loading = None;
                    self.ui_state.add_log(format!(
                        "Loaded {source} ({}x{}) in {}ms",
                        dimensions.width,
                        dimensions.height,
                        elapsed.as_millis()
                    ));
                    self.dispatch(ViewerEvent::ImageDecoded {
                        selection,
                        image: texture,
                        dimensions,
                    });
                }
                LoaderResult::Failed { selection, error } => {
                    if self.ui_state.loading == Some(selection) {
                        self.ui_state.loading = None;
                    }
                    self.ui_state.add_log(format!("ERROR: {error}"));
                    self.dispatch(ViewerEvent::ImageFailed { selection, error });
                }
                LoaderResult::FilePicked { path } => {
                    self.select(ImageSource::File(path));
                }
                LoaderResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }
}

impl eframe::App for PicviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::gallery::show(ctx, self);
        panels::canvas::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About picview")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("picview");
                        ui.label("Pan and zoom image viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
