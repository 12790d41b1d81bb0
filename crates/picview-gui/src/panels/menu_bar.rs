use picview_core::viewer::ViewerEvent;

use crate::app::PicviewApp;
use crate::messages::LoaderResult;
use crate::worker;

pub fn show(ctx: &egui::Context, app: &mut PicviewApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Image...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(ctx, app);
                }

                if ui.button("Regenerate Gallery").clicked() {
                    ui.close();
                    app.regenerate_gallery();
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Zoom In").clicked() {
                    ui.close();
                    app.dispatch(ViewerEvent::ZoomIn);
                }
                if ui.button("Zoom Out").clicked() {
                    ui.close();
                    app.dispatch(ViewerEvent::ZoomOut);
                }
                if ui.button("Reset Zoom").clicked() {
                    ui.close();
                    app.dispatch(ViewerEvent::ResetZoom);
                }
                if ui.button("Reset Position").clicked() {
                    ui.close();
                    app.dispatch(ViewerEvent::ResetPosition);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        toolbar(ui, app);

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_file(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if !ctx.wants_keyboard_input() {
            if ctx.input(|i| i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals)) {
                app.dispatch(ViewerEvent::ZoomIn);
            }
            if ctx.input(|i| i.key_pressed(egui::Key::Minus)) {
                app.dispatch(ViewerEvent::ZoomOut);
            }
            if ctx.input(|i| i.key_pressed(egui::Key::Num0)) {
                app.dispatch(ViewerEvent::ResetZoom);
            }
        }
    });
}

fn toolbar(ui: &mut egui::Ui, app: &mut PicviewApp) {
    ui.horizontal(|ui| {
        if ui.button("\u{2212}").on_hover_text("Zoom out").clicked() {
            app.dispatch(ViewerEvent::ZoomOut);
        }
        ui.label(format!("{:.0}%", app.viewer.controller().viewport().zoom * 100.0));
        if ui.button("+").on_hover_text("Zoom in").clicked() {
            app.dispatch(ViewerEvent::ZoomIn);
        }
        if ui.button("Reset Zoom").clicked() {
            app.dispatch(ViewerEvent::ResetZoom);
        }
        if ui.button("Reset Position").clicked() {
            app.dispatch(ViewerEvent::ResetPosition);
        }

        ui.separator();

        let flags = app.viewer.controller().flags();
        let mut show_guides = flags.show_guides;
        if ui.checkbox(&mut show_guides, "Guides").changed() {
            app.dispatch(ViewerEvent::ToggleGuides);
        }
        let mut show_statistics = flags.show_statistics;
        if ui.checkbox(&mut show_statistics, "Statistics").changed() {
            app.dispatch(ViewerEvent::ToggleStatistics);
        }
    });
}

fn open_file(ctx: &egui::Context, app: &mut PicviewApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            worker::send(&result_tx, &ctx, LoaderResult::FilePicked { path });
        }
    });
}
