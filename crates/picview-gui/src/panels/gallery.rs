use picview_core::gallery::GalleryImage;
use picview_core::loader::ImageSource;

use crate::app::PicviewApp;

const GALLERY_PANEL_WIDTH: f32 = 220.0;

pub fn show(ctx: &egui::Context, app: &mut PicviewApp) {
    egui::SidePanel::left("gallery")
        .default_width(GALLERY_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Gallery");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Regenerate").clicked() {
                        app.regenerate_gallery();
                    }
                });
            });
            ui.separator();

            let active = app
                .viewer
                .controller()
                .selection()
                .map(|s| s.source.clone());
            let mut picked = None;

            egui::ScrollArea::vertical().show(ui, |ui| {
                for url in &app.ui_state.gallery {
                    let label = GalleryImage::parse(url, &app.config.gallery.base_url)
                        .map(|img| img.to_string())
                        .unwrap_or_else(|| url.clone());
                    let selected = active.as_deref() == Some(url.as_str());
                    if ui
                        .selectable_label(selected, label)
                        .on_hover_text(url)
                        .clicked()
                    {
                        picked = Some(url.clone());
                    }
                }
            });

            if let Some(url) = picked {
                app.select(ImageSource::Url(url));
            }
        });
}
