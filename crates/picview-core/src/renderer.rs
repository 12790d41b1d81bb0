//! Paints the image and its overlays onto a [`Surface`].
//!
//! Every paint starts by filling the whole surface with the background
//! color, so painting the same scene twice leaves the same result.

use crate::consts::{
    BACKGROUND_COLOR, CENTER_LABEL_BOX_HEIGHT, CENTER_LABEL_BOX_WIDTH, CENTER_MARKER_COLOR,
    CENTER_MARKER_SIZE, IMAGE_BOUNDS_COLOR, NOT_AVAILABLE, OVERLAY_BACKGROUND_COLOR,
    OVERLAY_GLYPH_WIDTH, OVERLAY_TEXT_COLOR, POINTER_LABEL_BOX_HEIGHT, POINTER_LABEL_BOX_WIDTH,
    STATS_BOX_X, STATS_BOX_Y, STATS_FIRST_BASELINE, STATS_LINE_HEIGHT, STATS_MIN_BOX_WIDTH,
    STATS_TEXT_X, SURFACE_BORDER_COLOR,
};
use crate::geometry::{Point, Rect};
use crate::pointer::{DragState, PointerSample};
use crate::surface::Surface;
use crate::viewport::{DisplayFlags, ImageDimensions, ViewportState};

/// Read-only view of the controller state needed for one paint.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    pub viewport: &'a ViewportState,
    pub image: ImageDimensions,
    pub flags: DisplayFlags,
    pub pointer: Option<&'a PointerSample>,
    pub drag: Option<&'a DragState>,
}

pub fn paint<S: Surface>(surface: &mut S, image: &S::Image, scene: &Scene<'_>) {
    let bounds = surface.bounds();
    surface.fill_rect(bounds, BACKGROUND_COLOR);

    surface.draw_image(image, scene.viewport.image_rect(scene.image));

    if scene.flags.show_guides {
        paint_guides(surface, scene);
    }
    if scene.flags.show_statistics {
        paint_statistics(surface, scene);
    }
}

fn paint_guides<S: Surface>(surface: &mut S, scene: &Scene<'_>) {
    surface.stroke_rect(scene.viewport.image_rect(scene.image), IMAGE_BOUNDS_COLOR);

    if let Some(pointer) = scene.pointer {
        let p = pointer.offset;
        surface.fill_rect(
            Rect::new(p.x, p.y, POINTER_LABEL_BOX_WIDTH, -POINTER_LABEL_BOX_HEIGHT),
            OVERLAY_BACKGROUND_COLOR,
        );
        surface.fill_text(
            &p.to_string(),
            Point::new(p.x + 1.0, p.y - 1.0),
            OVERLAY_TEXT_COLOR,
        );
    }

    let bounds = surface.bounds();
    surface.stroke_rect(bounds, SURFACE_BORDER_COLOR);

    let center = bounds.center();
    let half = CENTER_MARKER_SIZE / 2.0;
    surface.fill_rect(
        Rect::new(
            center.x - half,
            center.y - half,
            CENTER_MARKER_SIZE,
            CENTER_MARKER_SIZE,
        ),
        CENTER_MARKER_COLOR,
    );
    surface.fill_rect(
        Rect::new(
            center.x - half,
            center.y - 2.0 * CENTER_LABEL_BOX_HEIGHT,
            CENTER_LABEL_BOX_WIDTH,
            CENTER_LABEL_BOX_HEIGHT,
        ),
        OVERLAY_BACKGROUND_COLOR,
    );
    surface.fill_text(
        "center point",
        Point::new(center.x, center.y - CENTER_LABEL_BOX_HEIGHT),
        CENTER_MARKER_COLOR,
    );
}

fn paint_statistics<S: Surface>(surface: &mut S, scene: &Scene<'_>) {
    let lines = statistics_lines(surface.size(), scene);
    surface.fill_rect(statistics_box(&lines), OVERLAY_BACKGROUND_COLOR);

    for (i, line) in lines.iter().enumerate() {
        let baseline = STATS_FIRST_BASELINE + i as f32 * STATS_LINE_HEIGHT;
        surface.fill_text(line, Point::new(STATS_TEXT_X, baseline), OVERLAY_TEXT_COLOR);
    }
}

/// Opaque box the statistics text sits on, sized to fit `lines`.
pub fn statistics_box(lines: &[String]) -> Rect {
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = (longest as f32 * OVERLAY_GLYPH_WIDTH + 2.0 * (STATS_TEXT_X - STATS_BOX_X))
        .max(STATS_MIN_BOX_WIDTH);
    let height = lines.len() as f32 * STATS_LINE_HEIGHT + STATS_BOX_Y * 2.0;
    Rect::new(STATS_BOX_X, STATS_BOX_Y, width, height)
}

/// Text of the statistics overlay, one entry per line.
pub fn statistics_lines(surface_size: (u32, u32), scene: &Scene<'_>) -> Vec<String> {
    let (w, h) = surface_size;
    let mut lines = vec![
        format!("canvas: width x height: {w} x {h}"),
        format!("image: width x height: {}", scene.image),
        "Mouse Coordinates:".to_string(),
    ];

    match scene.pointer {
        Some(pointer) => {
            for (label, p) in pointer.spaces() {
                lines.push(format!("{label}: {p}"));
            }
        }
        None => lines.push(format!("Offset: {NOT_AVAILABLE}")),
    }

    lines.push("Image Coordinates:".to_string());
    match scene.drag {
        Some(drag) => lines.push(format!("Drag start: {}", drag.offset_at_down)),
        None => lines.push(format!("Drag start: {NOT_AVAILABLE}")),
    }
    lines.push(format!("Offset: {}", scene.viewport.offset()));
    lines.push(format!("Zoom: {:.2}", scene.viewport.zoom));

    let displayed = scene.viewport.displayed_size(scene.image);
    lines.push(format!(
        "Displayed: {:.0} x {:.0}",
        displayed.width, displayed.height
    ));
    lines
}
