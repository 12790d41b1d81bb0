//! Immediate-mode 2D drawing targets the renderer paints into.

mod display_list;
mod raster;

pub use display_list::{DisplayList, DrawCommand};
pub use raster::{RasterSurface, TextRun};

use crate::geometry::{Color, Point, Rect};

pub trait Surface {
    /// Decoded image handle accepted by [`Surface::draw_image`].
    type Image;
    /// Copy of the painted contents, used to carry pixels across a resize.
    type Snapshot;

    /// Current pixel size as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Change the pixel size. Clears the contents.
    fn resize(&mut self, width: u32, height: u32);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// One-pixel outline.
    fn stroke_rect(&mut self, rect: Rect, color: Color);

    /// Draw `image` scaled to fill `dest`.
    fn draw_image(&mut self, image: &Self::Image, dest: Rect);

    /// Left-aligned text with its baseline at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, color: Color);

    fn capture(&self) -> Self::Snapshot;

    /// Draw a snapshot back at the top-left corner, clipped to the current size.
    fn restore(&mut self, snapshot: &Self::Snapshot);

    fn bounds(&self) -> Rect {
        let (w, h) = self.size();
        Rect::new(0.0, 0.0, w as f32, h as f32)
    }
}

/// Resize while keeping what is already on screen: copy to a snapshot at the
/// old size, resize (which clears), then draw the snapshot back.
pub fn resize_preserving<S: Surface>(surface: &mut S, width: u32, height: u32) {
    let saved = surface.capture();
    surface.resize(width, height);
    surface.restore(&saved);
}
