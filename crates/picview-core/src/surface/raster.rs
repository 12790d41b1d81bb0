use font8x8::legacy::BASIC_LEGACY;
use image::imageops;
use image::{Pixel, Rgba, RgbaImage};

use super::Surface;
use crate::consts::OVERLAY_GLYPH_WIDTH;
use crate::geometry::{Color, Point, Rect};

const GLYPH_SIZE: u32 = OVERLAY_GLYPH_WIDTH as u32;

/// Text drawn onto a [`RasterSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub origin: Point,
    pub color: Color,
}

/// CPU RGBA pixel buffer.
#[derive(Clone, Debug)]
pub struct RasterSurface {
    pixels: RgbaImage,
    text_runs: Vec<TextRun>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            text_runs: Vec::new(),
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.pixels.width() || y >= self.pixels.height() {
            return None;
        }
        let [r, g, b, a] = self.pixels.get_pixel(x, y).0;
        Some(Color { r, g, b, a })
    }

    pub fn text_runs(&self) -> &[TextRun] {
        &self.text_runs
    }

    /// Integer pixel span `[start, end)` of `rect` clipped to the buffer.
    fn pixel_span(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let r = rect.normalized();
        let x0 = r.x.round().max(0.0);
        let y0 = r.y.round().max(0.0);
        let x1 = r.right().round().min(self.pixels.width() as f32);
        let y1 = r.bottom().round().min(self.pixels.height() as f32);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    fn put(&mut self, x: u32, y: u32, color: Color) {
        let src = Rgba(color.to_array());
        if color.a == 255 {
            self.pixels.put_pixel(x, y, src);
        } else {
            self.pixels.get_pixel_mut(x, y).blend(&src);
        }
    }

    fn covers_everything(&self, rect: Rect, color: Color) -> bool {
        color.a == 255 && rect.contains_rect(&self.bounds())
    }
}

impl Surface for RasterSurface {
    type Image = RgbaImage;
    type Snapshot = RgbaImage;

    fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.pixels = RgbaImage::new(width, height);
        self.text_runs.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if self.covers_everything(rect, color) {
            self.text_runs.clear();
        }
        let Some((x0, y0, x1, y1)) = self.pixel_span(rect) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        let r = rect.normalized();
        let left = r.x.round();
        let top = r.y.round();
        let right = r.right().round() - 1.0;
        let bottom = r.bottom().round() - 1.0;
        if right < left || bottom < top {
            return;
        }
        let w = right - left + 1.0;
        let h = bottom - top + 1.0;
        self.fill_rect(Rect::new(left, top, w, 1.0), color);
        if bottom > top {
            self.fill_rect(Rect::new(left, bottom, w, 1.0), color);
        }
        self.fill_rect(Rect::new(left, top, 1.0, h), color);
        if right > left {
            self.fill_rect(Rect::new(right, top, 1.0, h), color);
        }
    }

    fn draw_image(&mut self, image: &RgbaImage, dest: Rect) {
        let dest = dest.normalized();
        if dest.is_empty() || image.width() == 0 || image.height() == 0 {
            return;
        }

        // A surface pixel belongs to the image when its center lies inside
        // `dest`; it shows the source pixel under that center.
        let x0 = (dest.x - 0.5).ceil().max(0.0);
        let y0 = (dest.y - 0.5).ceil().max(0.0);
        let x1 = (dest.right() - 0.5).ceil().min(self.pixels.width() as f32);
        let y1 = (dest.bottom() - 0.5).ceil().min(self.pixels.height() as f32);
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let (x0, y0, x1, y1) = (x0 as u32, y0 as u32, x1 as u32, y1 as u32);

        let scale_x = image.width() as f32 / dest.width;
        let scale_y = image.height() as f32 / dest.height;
        let src_cols: Vec<u32> = (x0..x1)
            .map(|x| source_index(x, dest.x, scale_x, image.width()))
            .collect();

        for y in y0..y1 {
            let src_y = source_index(y, dest.y, scale_y, image.height());
            for (x, &src_x) in (x0..x1).zip(&src_cols) {
                let src = *image.get_pixel(src_x, src_y);
                if src.0[3] == 255 {
                    self.pixels.put_pixel(x, y, src);
                } else {
                    self.pixels.get_pixel_mut(x, y).blend(&src);
                }
            }
        }
    }

    /// 8x8 bitmap glyphs with the bottom row sitting on `origin.y`. The run
    /// is also kept in [`RasterSurface::text_runs`].
    fn fill_text(&mut self, text: &str, origin: Point, color: Color) {
        let left = origin.x.round() as i64;
        let top = origin.y.round() as i64 - GLYPH_SIZE as i64;
        let (width, height) = (self.pixels.width() as i64, self.pixels.height() as i64);

        for (col, ch) in text.chars().enumerate() {
            let glyph_left = left + col as i64 * GLYPH_SIZE as i64;
            if glyph_left >= width {
                break;
            }
            for (row, bits) in glyph_for_char(ch).into_iter().enumerate() {
                let y = top + row as i64;
                if y < 0 || y >= height {
                    continue;
                }
                for bit in 0..GLYPH_SIZE {
                    if (bits >> bit) & 0x01 == 0 {
                        continue;
                    }
                    let x = glyph_left + bit as i64;
                    if x < 0 || x >= width {
                        continue;
                    }
                    self.put(x as u32, y as u32, color);
                }
            }
        }

        self.text_runs.push(TextRun {
            text: text.to_string(),
            origin,
            color,
        });
    }

    fn capture(&self) -> RgbaImage {
        self.pixels.clone()
    }

    fn restore(&mut self, snapshot: &RgbaImage) {
        imageops::replace(&mut self.pixels, snapshot, 0, 0);
    }
}

/// Source row/column sampled by the surface pixel at `pos`.
fn source_index(pos: u32, dest_start: f32, scale: f32, len: u32) -> u32 {
    let src = ((pos as f32 + 0.5 - dest_start) * scale).floor();
    (src.max(0.0) as u32).min(len - 1)
}

fn glyph_for_char(ch: char) -> [u8; 8] {
    let index = ch as usize;
    if index < BASIC_LEGACY.len() {
        BASIC_LEGACY[index]
    } else {
        BASIC_LEGACY[b'?' as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_rect_draws_only_edges() {
        let mut s = RasterSurface::new(8, 8);
        s.stroke_rect(Rect::new(0.0, 0.0, 8.0, 8.0), Color::RED);
        assert_eq!(s.pixel(0, 0), Some(Color::RED));
        assert_eq!(s.pixel(7, 7), Some(Color::RED));
        assert_eq!(s.pixel(0, 4), Some(Color::RED));
        assert_eq!(s.pixel(4, 4), Some(Color { r: 0, g: 0, b: 0, a: 0 }));
    }

    #[test]
    fn fill_rect_clips_negative_origin() {
        let mut s = RasterSurface::new(4, 4);
        s.fill_rect(Rect::new(-2.0, -2.0, 4.0, 4.0), Color::WHITE);
        assert_eq!(s.pixel(1, 1), Some(Color::WHITE));
        assert_eq!(s.pixel(2, 2), Some(Color { r: 0, g: 0, b: 0, a: 0 }));
    }

    #[test]
    fn source_index_follows_pixel_centers() {
        // dest starts at -5 with 10 surface pixels per source pixel
        assert_eq!(source_index(0, -5.0, 0.1, 20), 0);
        assert_eq!(source_index(4, -5.0, 0.1, 20), 0);
        assert_eq!(source_index(5, -5.0, 0.1, 20), 1);
        assert_eq!(source_index(99, -5.0, 0.1, 20), 10);
        assert_eq!(source_index(500, -5.0, 0.1, 20), 19);
    }

    #[test]
    fn text_glyphs_sit_on_baseline() {
        let mut s = RasterSurface::new(16, 16);
        s.fill_text("|", Point::new(0.0, 10.0), Color::WHITE);
        let lit: Vec<(u32, u32)> = s
            .pixels()
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0 == [255, 255, 255, 255])
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|&(x, y)| x < 8 && (2..10).contains(&y)));
    }

    #[test]
    fn full_fill_discards_text() {
        let mut s = RasterSurface::new(4, 4);
        s.fill_text("hi", Point::new(1.0, 1.0), Color::WHITE);
        s.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::BLACK);
        assert!(s.text_runs().is_empty());
    }
}
