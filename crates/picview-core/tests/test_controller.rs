use approx::assert_relative_eq;

use picview_core::controller::{Repaint, ViewportController};
use picview_core::error::ViewerError;
use picview_core::geometry::Point;
use picview_core::pointer::PointerSample;
use picview_core::viewport::{ImageDimensions, ViewportState, ZoomDirection};

const IMAGE: ImageDimensions = ImageDimensions::new(800, 600);

fn loaded_controller() -> ViewportController {
    let mut c = ViewportController::default();
    let id = c.select_image("https://picsum.photos/id/1/800/600");
    assert_eq!(c.image_decoded(id, IMAGE), Repaint::Needed);
    c
}

// ---------------------------------------------------------------------------
// Drag
// ---------------------------------------------------------------------------

#[test]
fn test_drag_moves_offset_by_pointer_delta() {
    let mut c = loaded_controller();
    assert!(c.begin_drag(PointerSample::at(100.0, 100.0)).is_needed());
    assert!(c.update_drag(PointerSample::at(150.0, 130.0)).is_needed());
    assert!(c.end_drag().is_needed());

    assert_eq!(c.viewport().offset(), Point::new(50.0, 30.0));
    assert!(c.drag().is_none());
}

#[test]
fn test_second_drag_starts_from_current_offset() {
    let mut c = loaded_controller();
    let _ = c.begin_drag(PointerSample::at(100.0, 100.0));
    let _ = c.update_drag(PointerSample::at(150.0, 130.0));
    let _ = c.end_drag();

    let _ = c.begin_drag(PointerSample::at(10.0, 10.0));
    assert_eq!(c.drag().map(|d| d.offset_at_down), Some(Point::new(50.0, 30.0)));
    let _ = c.update_drag(PointerSample::at(0.0, 15.0));
    let _ = c.end_drag();

    assert_eq!(c.viewport().offset(), Point::new(40.0, 35.0));
}

#[test]
fn test_move_without_drag_only_updates_pointer() {
    let mut c = loaded_controller();
    let repaint = c.update_drag(PointerSample::at(42.0, 24.0));

    assert_eq!(repaint, Repaint::Needed);
    assert_eq!(c.viewport().offset(), Point::ZERO);
    assert_eq!(c.pointer().map(|p| p.offset), Some(Point::new(42.0, 24.0)));
}

#[test]
fn test_no_pointer_before_first_event() {
    let c = loaded_controller();
    assert!(c.pointer().is_none());
    assert!(c.scene().is_some_and(|s| s.pointer.is_none()));
}

// ---------------------------------------------------------------------------
// Zoom and reset
// ---------------------------------------------------------------------------

#[test]
fn test_reset_returns_to_default_viewport() {
    let mut c = loaded_controller();
    let _ = c.zoom(ZoomDirection::In);
    let _ = c.zoom(ZoomDirection::In);
    let _ = c.begin_drag(PointerSample::at(0.0, 0.0));
    let _ = c.update_drag(PointerSample::at(-300.0, 75.0));
    let _ = c.end_drag();

    let _ = c.reset_zoom();
    let _ = c.reset_position();

    assert_eq!(*c.viewport(), ViewportState::default());
}

#[test]
fn test_reset_zoom_keeps_offset() {
    let mut c = loaded_controller();
    let _ = c.zoom(ZoomDirection::Out);
    let offset = c.viewport().offset();
    let _ = c.reset_zoom();
    assert_eq!(c.viewport().zoom, 1.0);
    assert_eq!(c.viewport().offset(), offset);
}

#[test]
fn test_zoom_in_is_center_anchored() {
    let mut c = loaded_controller();
    let before = c.viewport().image_center(IMAGE);
    let _ = c.zoom(ZoomDirection::In);
    let after = c.viewport().image_center(IMAGE);
    assert_relative_eq!(before.x, after.x, epsilon = 1e-3);
    assert_relative_eq!(before.y, after.y, epsilon = 1e-3);
    assert_relative_eq!(c.viewport().zoom, 1.1, epsilon = 1e-6);
}

// ---------------------------------------------------------------------------
// Toggles
// ---------------------------------------------------------------------------

#[test]
fn test_toggles_are_independent() {
    let mut c = loaded_controller();
    let initial = c.flags();

    assert!(c.toggle_guides().is_needed());
    assert_eq!(c.flags().show_guides, !initial.show_guides);
    assert_eq!(c.flags().show_statistics, initial.show_statistics);

    assert!(c.toggle_statistics().is_needed());
    assert_eq!(c.flags().show_statistics, !initial.show_statistics);

    let _ = c.toggle_guides();
    let _ = c.toggle_statistics();
    assert_eq!(c.flags(), initial);
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[test]
fn test_no_scene_until_decoded() {
    let mut c = ViewportController::default();
    let _ = c.select_image("a");
    assert!(c.scene().is_none());
}

#[test]
fn test_select_does_not_reset_viewport() {
    let mut c = loaded_controller();
    let _ = c.zoom(ZoomDirection::In);
    let _ = c.begin_drag(PointerSample::at(0.0, 0.0));
    let _ = c.update_drag(PointerSample::at(5.0, 5.0));
    let viewport = *c.viewport();

    let id = c.select_image("b");
    assert!(c.drag().is_none());
    let _ = c.image_decoded(id, ImageDimensions::new(100, 100));
    assert_eq!(*c.viewport(), viewport);
}

#[test]
fn test_stale_decode_is_discarded() {
    let mut c = ViewportController::default();
    let first = c.select_image("first");
    let second = c.select_image("second");
    assert!(first < second);

    assert_eq!(
        c.image_decoded(first, ImageDimensions::new(10, 10)),
        Repaint::NotNeeded
    );
    assert!(c.image_dimensions().is_none());

    assert_eq!(
        c.image_decoded(second, ImageDimensions::new(20, 20)),
        Repaint::Needed
    );
    assert_eq!(c.image_dimensions(), Some(ImageDimensions::new(20, 20)));
    assert_eq!(c.selection().map(|s| s.source.as_str()), Some("second"));
}

#[test]
fn test_failed_load_keeps_previous_image() {
    let mut c = loaded_controller();
    let id = c.select_image("broken");
    let err = ViewerError::LoadFailed {
        source_name: "broken".into(),
        reason: "not an image".into(),
    };

    assert_eq!(c.image_failed(id, &err), Repaint::NotNeeded);
    assert_eq!(c.image_dimensions(), Some(IMAGE));
    assert!(c.last_error().is_some_and(|e| e.contains("broken")));
}
