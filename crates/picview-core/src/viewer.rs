//! Dispatcher: routes input events to the controller and owns the single
//! redraw trigger.

use tracing::trace;

use crate::config::ViewerConfig;
use crate::controller::{Repaint, SelectionId, ViewportController};
use crate::error::ViewerError;
use crate::pointer::PointerSample;
use crate::renderer;
use crate::surface::{resize_preserving, Surface};
use crate::viewport::{ImageDimensions, ZoomDirection};

/// Everything that can change what is on screen.
#[derive(Debug)]
pub enum ViewerEvent<I> {
    PointerMove(PointerSample),
    PointerDown(PointerSample),
    PointerUp,
    /// Vertical wheel delta, browser sign convention (negative = up).
    Wheel { delta_y: f32 },
    Resize { width: u32, height: u32 },
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ResetPosition,
    ToggleGuides,
    ToggleStatistics,
    ImageDecoded {
        selection: SelectionId,
        image: I,
        dimensions: ImageDimensions,
    },
    ImageFailed {
        selection: SelectionId,
        error: ViewerError,
    },
}

pub struct Viewer<S: Surface> {
    controller: ViewportController,
    surface: S,
    image: Option<S::Image>,
    paint_count: u64,
}

impl<S: Surface> Viewer<S> {
    pub fn new(surface: S, config: &ViewerConfig) -> Self {
        Self {
            controller: ViewportController::new(config),
            surface,
            image: None,
            paint_count: 0,
        }
    }

    pub fn controller(&self) -> &ViewportController {
        &self.controller
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn image(&self) -> Option<&S::Image> {
        self.image.as_ref()
    }

    /// Number of paints performed so far.
    pub fn paint_count(&self) -> u64 {
        self.paint_count
    }

    /// Start showing `source`. The caller loads it and reports back with
    /// `ImageDecoded`/`ImageFailed` carrying the returned id.
    pub fn select_image(&mut self, source: impl Into<String>) -> SelectionId {
        self.controller.select_image(source)
    }

    /// Apply one event. Returns `true` if the surface was repainted.
    pub fn dispatch(&mut self, event: ViewerEvent<S::Image>) -> bool {
        let repaint = match event {
            ViewerEvent::PointerMove(pointer) => self.controller.update_drag(pointer),
            ViewerEvent::PointerDown(pointer) => self.controller.begin_drag(pointer),
            ViewerEvent::PointerUp => self.controller.end_drag(),
            ViewerEvent::Wheel { delta_y } => match ZoomDirection::from_wheel_delta(delta_y) {
                Some(direction) => self.controller.zoom(direction),
                None => Repaint::NotNeeded,
            },
            ViewerEvent::Resize { width, height } => {
                resize_preserving(&mut self.surface, width, height);
                self.controller.surface_resized(width, height)
            }
            ViewerEvent::ZoomIn => self.controller.zoom(ZoomDirection::In),
            ViewerEvent::ZoomOut => self.controller.zoom(ZoomDirection::Out),
            ViewerEvent::ResetZoom => self.controller.reset_zoom(),
            ViewerEvent::ResetPosition => self.controller.reset_position(),
            ViewerEvent::ToggleGuides => self.controller.toggle_guides(),
            ViewerEvent::ToggleStatistics => self.controller.toggle_statistics(),
            ViewerEvent::ImageDecoded {
                selection,
                image,
                dimensions,
            } => {
                let repaint = self.controller.image_decoded(selection, dimensions);
                if repaint.is_needed() {
                    self.image = Some(image);
                }
                repaint
            }
            ViewerEvent::ImageFailed { selection, error } => {
                self.controller.image_failed(selection, &error)
            }
        };

        match repaint {
            Repaint::Needed => self.repaint(),
            Repaint::NotNeeded => false,
        }
    }

    /// Paint the current state. Does nothing until an image has decoded.
    pub fn repaint(&mut self) -> bool {
        let (Some(image), Some(scene)) = (self.image.as_ref(), self.controller.scene()) else {
            return false;
        };
        renderer::paint(&mut self.surface, image, &scene);
        self.paint_count += 1;
        trace!(paint = self.paint_count, "Painted");
        true
    }

    /// Statistics overlay text for the current state.
    pub fn statistics_lines(&self) -> Vec<String> {
        self.controller
            .scene()
            .map(|scene| renderer::statistics_lines(self.surface.size(), &scene))
            .unwrap_or_default()
    }
}
