//! Viewport Controller: sole owner of the viewport, display flags, image
//! dimensions and pointer state.
//!
//! Every mutating operation returns a [`Repaint`] telling the caller whether
//! the surface needs to be painted again. The controller never paints
//! itself; see [`crate::viewer::Viewer`] for the dispatcher that does.

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::{ViewerConfig, ZoomConfig};
use crate::error::ViewerError;
use crate::pointer::{DragState, PointerSample};
use crate::renderer::Scene;
use crate::viewport::{DisplayFlags, ImageDimensions, ViewportState, ZoomDirection};

#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repaint {
    Needed,
    NotNeeded,
}

impl Repaint {
    pub fn is_needed(self) -> bool {
        self == Repaint::Needed
    }
}

/// Tags an image request so late decodes of superseded selections can be
/// told apart from the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectionId(u64);

impl fmt::Display for SelectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub id: SelectionId,
    pub source: String,
}

#[derive(Debug)]
pub struct ViewportController {
    viewport: ViewportState,
    flags: DisplayFlags,
    zoom_limits: ZoomConfig,
    /// Dimensions of the image currently on screen. Survives a new selection
    /// until that selection finishes decoding.
    image: Option<ImageDimensions>,
    selection: Option<Selection>,
    next_selection: u64,
    drag: Option<DragState>,
    pointer: Option<PointerSample>,
    last_error: Option<String>,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl ViewportController {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            viewport: ViewportState::default(),
            flags: config.display,
            zoom_limits: config.zoom.clone(),
            image: None,
            selection: None,
            next_selection: 0,
            drag: None,
            pointer: None,
            last_error: None,
        }
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    pub fn zoom_limits(&self) -> &ZoomConfig {
        &self.zoom_limits
    }

    pub fn image_dimensions(&self) -> Option<ImageDimensions> {
        self.image
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn pointer(&self) -> Option<&PointerSample> {
        self.pointer.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Message of the most recent load failure for the active selection.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Everything the renderer reads, or `None` until an image has decoded.
    pub fn scene(&self) -> Option<Scene<'_>> {
        let image = self.image?;
        Some(Scene {
            viewport: &self.viewport,
            image,
            flags: self.flags,
            pointer: self.pointer.as_ref(),
            drag: self.drag.as_ref(),
        })
    }

    /// Make `source` the active image. Nothing is painted until
    /// [`ViewportController::image_decoded`] arrives with the returned id.
    /// Offset and zoom are left alone.
    pub fn select_image(&mut self, source: impl Into<String>) -> SelectionId {
        self.next_selection += 1;
        let id = SelectionId(self.next_selection);
        let source = source.into();
        debug!(%id, %source, "Selected image");
        self.selection = Some(Selection { id, source });
        self.drag = None;
        self.last_error = None;
        id
    }

    /// Decode for `id` finished. Stale ids are dropped.
    pub fn image_decoded(&mut self, id: SelectionId, dimensions: ImageDimensions) -> Repaint {
        if !self.is_current(id) {
            warn!(%id, "Discarding decode for superseded selection");
            return Repaint::NotNeeded;
        }
        info!(%id, %dimensions, "Image ready");
        self.image = Some(dimensions);
        Repaint::Needed
    }

    /// Decode for `id` failed. The previous frame stays on screen.
    pub fn image_failed(&mut self, id: SelectionId, error: &ViewerError) -> Repaint {
        if !self.is_current(id) {
            debug!(%id, "Ignoring failure for superseded selection");
            return Repaint::NotNeeded;
        }
        warn!(%id, %error, "Image load failed, keeping previous frame");
        self.last_error = Some(error.to_string());
        Repaint::NotNeeded
    }

    pub fn is_current(&self, id: SelectionId) -> bool {
        self.selection.as_ref().is_some_and(|s| s.id == id)
    }

    pub fn begin_drag(&mut self, pointer: PointerSample) -> Repaint {
        self.drag = Some(DragState::new(pointer.offset, self.viewport.offset()));
        self.pointer = Some(pointer);
        Repaint::Needed
    }

    /// Pointer moved. Pans when a drag is active; always refreshes the
    /// pointer readout and asks for a repaint.
    pub fn update_drag(&mut self, pointer: PointerSample) -> Repaint {
        if let Some(drag) = &self.drag {
            self.viewport.set_offset(drag.offset_for(pointer.offset));
        }
        self.pointer = Some(pointer);
        Repaint::Needed
    }

    pub fn end_drag(&mut self) -> Repaint {
        if self.drag.take().is_some() {
            debug!(offset = %self.viewport.offset(), "Drag ended");
        }
        Repaint::Needed
    }

    pub fn zoom(&mut self, direction: ZoomDirection) -> Repaint {
        let applied = self
            .viewport
            .step_zoom(direction, self.image, &self.zoom_limits);
        debug!(%direction, zoom = self.viewport.zoom, applied, "Zoom");
        Repaint::Needed
    }

    pub fn reset_zoom(&mut self) -> Repaint {
        self.viewport.zoom = ViewportState::default().zoom;
        Repaint::Needed
    }

    pub fn reset_position(&mut self) -> Repaint {
        self.viewport.set_offset(ViewportState::default().offset());
        Repaint::Needed
    }

    pub fn toggle_guides(&mut self) -> Repaint {
        self.flags.show_guides = !self.flags.show_guides;
        Repaint::Needed
    }

    pub fn toggle_statistics(&mut self) -> Repaint {
        self.flags.show_statistics = !self.flags.show_statistics;
        Repaint::Needed
    }

    /// The surface changed size; repaint with the current state.
    pub fn surface_resized(&mut self, width: u32, height: u32) -> Repaint {
        debug!(width, height, "Surface resized");
        Repaint::Needed
    }
}
