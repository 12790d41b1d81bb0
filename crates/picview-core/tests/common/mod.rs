#![allow(dead_code)]

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use picview_core::config::ViewerConfig;
use picview_core::viewport::DisplayFlags;

/// Single-color RGBA image.
pub fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(rgba))
}

/// Encode an image as PNG in memory.
pub fn png_bytes(img: &RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img.clone())
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("encode png");
    buf
}

/// Default config with both overlays switched off, so pixel checks only see
/// the background and the image.
pub fn config_without_overlays() -> ViewerConfig {
    ViewerConfig {
        display: DisplayFlags {
            show_guides: false,
            show_statistics: false,
        },
        ..ViewerConfig::default()
    }
}

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const OPAQUE_BLACK: [u8; 4] = [0, 0, 0, 255];

pub const BLUE: [u8; 4] = [0, 0, 255, 255];

/// One-row image whose columns alternate red and blue, starting with red.
pub fn striped_image(width: u32) -> RgbaImage {
    RgbaImage::from_fn(width, 1, |x, _| Rgba(if x % 2 == 0 { RED } else { BLUE }))
}
