use picview_core::geometry::{Color, Point, Rect};
use picview_core::pointer::PointerSample;
use picview_core::surface::{DrawCommand, Surface};
use picview_core::viewer::ViewerEvent;

use crate::app::PicviewApp;

const OVERLAY_FONT_SIZE: f32 = 10.0;

pub fn show(ctx: &egui::Context, app: &mut PicviewApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            handle_resize(app, rect);

            if app.viewer.image().is_none() {
                ui.painter()
                    .rect_filled(rect, 0.0, egui::Color32::BLACK);
                show_placeholder(ui, rect, app);
                return;
            }

            handle_pointer(ctx, ui, &response, app, rect);
            handle_wheel(ui, &response, app);

            replay(&ui.painter_at(rect), rect, app.viewer.surface().commands());
        });
}

fn handle_resize(app: &mut PicviewApp, rect: egui::Rect) {
    let width = rect.width().round().max(0.0) as u32;
    let height = rect.height().round().max(0.0) as u32;
    if app.viewer.surface().size() != (width, height) {
        app.dispatch(ViewerEvent::Resize { width, height });
    }
}

fn pointer_sample(ctx: &egui::Context, pos: egui::Pos2, rect: egui::Rect) -> PointerSample {
    let window_origin = ctx
        .input(|i| i.viewport().outer_rect)
        .map(|r| r.min)
        .unwrap_or(egui::Pos2::ZERO);
    sample_at(pos, rect, window_origin)
}

fn sample_at(pos: egui::Pos2, rect: egui::Rect, window_origin: egui::Pos2) -> PointerSample {
    let client = Point::new(pos.x, pos.y);
    PointerSample {
        offset: Point::new(pos.x - rect.min.x, pos.y - rect.min.y),
        normal: client,
        page: client,
        screen: Point::new(window_origin.x + pos.x, window_origin.y + pos.y),
        client,
    }
}

/// Where a drag is anchored. egui reports the drag once the pointer has
/// travelled past its threshold, so the press point is used when known.
fn drag_anchor(press_origin: Option<egui::Pos2>, latest: egui::Pos2) -> egui::Pos2 {
    press_origin.unwrap_or(latest)
}

fn handle_pointer(
    ctx: &egui::Context,
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut PicviewApp,
    rect: egui::Rect,
) {
    let Some(pos) = ui.input(|i| i.pointer.latest_pos()) else {
        return;
    };
    let sample = pointer_sample(ctx, pos, rect);

    if response.drag_started_by(egui::PointerButton::Primary) {
        let origin = drag_anchor(ui.input(|i| i.pointer.press_origin()), pos);
        app.dispatch(ViewerEvent::PointerDown(pointer_sample(ctx, origin, rect)));
        app.dispatch(ViewerEvent::PointerMove(sample));
    }

    let moved = ui.input(|i| i.pointer.delta() != egui::Vec2::ZERO);
    if moved
        && !response.drag_started_by(egui::PointerButton::Primary)
        && (response.hovered() || app.viewer.controller().is_dragging())
    {
        app.dispatch(ViewerEvent::PointerMove(sample));
    }

    if response.drag_stopped() {
        app.dispatch(ViewerEvent::PointerUp);
    }
}

fn handle_wheel(ui: &egui::Ui, response: &egui::Response, app: &mut PicviewApp) {
    let scroll = ui.input(|i| i.raw_scroll_delta.y);
    if scroll == 0.0 || !response.hovered() {
        return;
    }
    // egui reports scrolling up as positive; the viewer expects the browser
    // convention where up is negative.
    app.dispatch(ViewerEvent::Wheel { delta_y: -scroll });
}

fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

fn to_egui_rect(origin: egui::Pos2, rect: Rect) -> egui::Rect {
    let r = rect.normalized();
    egui::Rect::from_min_size(
        origin + egui::vec2(r.x, r.y),
        egui::vec2(r.width, r.height),
    )
}

fn replay(painter: &egui::Painter, rect: egui::Rect, commands: &[DrawCommand<egui::TextureHandle>]) {
    let origin = rect.min;
    for command in commands {
        match command {
            DrawCommand::FillRect { rect, color } => {
                painter.rect_filled(to_egui_rect(origin, *rect), 0.0, to_color32(*color));
            }
            DrawCommand::StrokeRect { rect, color } => {
                painter.rect_stroke(
                    to_egui_rect(origin, *rect),
                    0.0,
                    egui::Stroke::new(1.0, to_color32(*color)),
                    egui::StrokeKind::Inside,
                );
            }
            DrawCommand::DrawImage { image, dest } => {
                painter.image(
                    image.id(),
                    to_egui_rect(origin, *dest),
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            DrawCommand::FillText { text, origin: at, color } => {
                painter.text(
                    origin + egui::vec2(at.x, at.y),
                    egui::Align2::LEFT_BOTTOM,
                    text,
                    egui::FontId::monospace(OVERLAY_FONT_SIZE),
                    to_color32(*color),
                );
            }
        }
    }
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect, app: &PicviewApp) {
    let text = if app.ui_state.is_loading() {
        "Loading image...".to_string()
    } else if let Some(err) = app.viewer.controller().last_error() {
        format!("Could not load image: {err}")
    } else {
        "Pick an image from the gallery or open a file".to_string()
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}

#[cfg(test)]
mod tests {
    use picview_core::config::ViewerConfig;
    use picview_core::surface::DisplayList;
    use picview_core::viewer::Viewer;
    use picview_core::viewport::ImageDimensions;

    use super::*;

    fn canvas_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(200.0, 40.0), egui::vec2(640.0, 480.0))
    }

    #[test]
    fn sample_offset_is_canvas_relative() {
        let s = sample_at(egui::pos2(250.0, 70.0), canvas_rect(), egui::pos2(10.0, 20.0));
        assert_eq!(s.offset, Point::new(50.0, 30.0));
        assert_eq!(s.client, Point::new(250.0, 70.0));
        assert_eq!(s.screen, Point::new(260.0, 90.0));
    }

    #[test]
    fn drag_pans_by_full_travel_from_press_point() {
        let rect = canvas_rect();
        let press = egui::pos2(300.0, 100.0);
        // First position egui reports once the drag threshold is crossed.
        let latest = egui::pos2(306.0, 104.0);

        let mut viewer: Viewer<DisplayList<u8>> =
            Viewer::new(DisplayList::new(640, 480), &ViewerConfig::default());
        let id = viewer.select_image("img");
        viewer.dispatch(ViewerEvent::ImageDecoded {
            selection: id,
            image: 0,
            dimensions: ImageDimensions::new(100, 50),
        });

        let anchor = drag_anchor(Some(press), latest);
        let origin = egui::Pos2::ZERO;
        viewer.dispatch(ViewerEvent::PointerDown(sample_at(anchor, rect, origin)));
        viewer.dispatch(ViewerEvent::PointerMove(sample_at(latest, rect, origin)));

        assert_eq!(viewer.controller().viewport().offset(), Point::new(6.0, 4.0));
    }

    #[test]
    fn drag_anchor_falls_back_to_latest_position() {
        let latest = egui::pos2(1.0, 2.0);
        assert_eq!(drag_anchor(None, latest), latest);
    }
}
