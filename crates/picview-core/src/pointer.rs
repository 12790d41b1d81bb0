//! Pointer readout and drag tracking.

use crate::geometry::Point;

/// One pointer position expressed in every coordinate space a pointer event
/// carries.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    /// Relative to the drawing surface's top-left corner. Drag math uses this.
    pub offset: Point,
    /// Alias of the client position on most platforms.
    pub normal: Point,
    /// Relative to the whole document, including any scroll.
    pub page: Point,
    /// Relative to the physical screen.
    pub screen: Point,
    /// Relative to the window's content area.
    pub client: Point,
}

impl PointerSample {
    /// Sample where every coordinate space coincides with the surface. Handy
    /// for headless hosts that only know surface positions.
    pub fn at(x: f32, y: f32) -> Self {
        let p = Point::new(x, y);
        Self {
            offset: p,
            normal: p,
            page: p,
            screen: p,
            client: p,
        }
    }

    /// Labelled positions, in the order the statistics overlay lists them.
    pub fn spaces(&self) -> [(&'static str, Point); 5] {
        [
            ("Offset", self.offset),
            ("Normal", self.normal),
            ("Page", self.page),
            ("Screen", self.screen),
            ("Client", self.client),
        ]
    }
}

/// Exists only between pointer-down and the matching pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub down_at: Point,
    pub offset_at_down: Point,
}

impl DragState {
    pub fn new(down_at: Point, offset_at_down: Point) -> Self {
        Self {
            down_at,
            offset_at_down,
        }
    }

    /// Offset for the current pointer position. Moving the pointer right
    /// moves the image right.
    pub fn offset_for(&self, pointer: Point) -> Point {
        self.offset_at_down + (pointer - self.down_at)
    }
}
