//! Viewport transform: pan offset plus uniform zoom applied to the image.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ZoomConfig;
use crate::consts::{DEFAULT_ZOOM, ZOOM_ROUNDING};
use crate::geometry::{Point, Rect, Size};

/// Natural pixel dimensions of the loaded image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn as_size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

impl fmt::Display for ImageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// Pan offset of the image's top-left corner (surface pixels) and zoom scalar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl ViewportState {
    pub fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    pub fn set_offset(&mut self, offset: Point) {
        self.offset_x = offset.x;
        self.offset_y = offset.y;
    }

    /// Size of the image on the surface at the current zoom.
    pub fn displayed_size(&self, image: ImageDimensions) -> Size {
        let natural = image.as_size();
        Size::new(natural.width * self.zoom, natural.height * self.zoom)
    }

    /// Surface-space rectangle the image is drawn into.
    pub fn image_rect(&self, image: ImageDimensions) -> Rect {
        Rect::from_origin_size(self.offset(), self.displayed_size(image))
    }

    /// Surface-space center of the drawn image.
    pub fn image_center(&self, image: ImageDimensions) -> Point {
        self.image_rect(image).center()
    }

    pub fn is_default(&self) -> bool {
        *self == ViewportState::default()
    }

    /// Step the zoom scalar and shift the offset by half the change in
    /// displayed size so the image scales around its own center.
    ///
    /// Returns the zoom delta that was actually applied (zero when already
    /// at the bound in that direction).
    pub fn step_zoom(
        &mut self,
        direction: ZoomDirection,
        image: Option<ImageDimensions>,
        limits: &ZoomConfig,
    ) -> f32 {
        let image = image.unwrap_or_default();
        let before = self.displayed_size(image);

        let target = match direction {
            ZoomDirection::In => self.zoom + limits.step,
            ZoomDirection::Out => self.zoom - limits.step,
        };
        let previous = self.zoom;
        self.zoom = round_zoom(target).clamp(limits.min, limits.max);

        let after = self.displayed_size(image);
        self.offset_x -= (after.width - before.width) / 2.0;
        self.offset_y -= (after.height - before.height) / 2.0;

        self.zoom - previous
    }
}

fn round_zoom(zoom: f32) -> f32 {
    (zoom * ZOOM_ROUNDING).round() / ZOOM_ROUNDING
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Direction for a vertical wheel delta. Negative (scrolling up, browser
    /// convention) zooms in.
    pub fn from_wheel_delta(delta_y: f32) -> Option<Self> {
        if delta_y < 0.0 {
            Some(ZoomDirection::In)
        } else if delta_y > 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }
}

impl fmt::Display for ZoomDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoomDirection::In => write!(f, "in"),
            ZoomDirection::Out => write!(f, "out"),
        }
    }
}

/// Independent overlay toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFlags {
    pub show_guides: bool,
    pub show_statistics: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            show_guides: true,
            show_statistics: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_zoom_removes_drift() {
        let mut z = 1.0_f32;
        for _ in 0..7 {
            z = round_zoom(z + 0.1);
        }
        assert_eq!(z, 1.7);
    }

    #[test]
    fn wheel_delta_direction() {
        assert_eq!(ZoomDirection::from_wheel_delta(-3.0), Some(ZoomDirection::In));
        assert_eq!(ZoomDirection::from_wheel_delta(1.0), Some(ZoomDirection::Out));
        assert_eq!(ZoomDirection::from_wheel_delta(0.0), None);
    }
}
