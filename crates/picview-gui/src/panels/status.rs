use picview_core::surface::Surface;

use crate::app::PicviewApp;

pub fn show(ctx: &egui::Context, app: &mut PicviewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            let controller = app.viewer.controller();
            if let Some(size) = controller.image_dimensions() {
                ui.label(format!("{}x{}", size.width, size.height));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", controller.viewport().zoom * 100.0));
            ui.separator();
            let (w, h) = app.viewer.surface().size();
            ui.label(format!("Canvas: {w}x{h}"));
            if app.ui_state.is_loading() {
                ui.separator();
                ui.spinner();
                ui.label("Loading");
            }
        });

        ui.add_space(2.0);
    });
}
