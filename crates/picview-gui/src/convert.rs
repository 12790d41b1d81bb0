use image::RgbaImage;

/// Convert a decoded RGBA image to an egui ColorImage.
pub fn rgba_to_color_image(rgba: &RgbaImage) -> egui::ColorImage {
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}
