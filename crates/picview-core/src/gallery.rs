//! Gallery of randomly generated remote image URLs.

use std::fmt;

use rand::Rng;

use crate::config::{GalleryConfig, GallerySize};

/// One image request: service id plus requested size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: u32,
    pub width: u32,
    pub height: u32,
}

impl GalleryImage {
    /// `{base}/id/{id}/{width}/{height}`
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/id/{}/{}/{}",
            base_url.trim_end_matches('/'),
            self.id,
            self.width,
            self.height
        )
    }

    /// Inverse of [`GalleryImage::url`]. Returns `None` for anything that
    /// doesn't follow `{base}/id/{id}/{width}/{height}`.
    pub fn parse(url: &str, base_url: &str) -> Option<Self> {
        let rest = url.strip_prefix(base_url.trim_end_matches('/'))?;
        let mut parts = rest.strip_prefix("/id/")?.split('/');
        let id = parts.next()?.parse().ok()?;
        let width = parts.next()?.parse().ok()?;
        let height = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { id, width, height })
    }
}

impl fmt::Display for GalleryImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({}x{})", self.id, self.width, self.height)
    }
}

/// Uniform integer in `min..=max`.
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    if min >= max {
        return min;
    }
    rng.random_range(min..=max)
}

/// Draw `config.count` image requests.
pub fn generate_images<R: Rng + ?Sized>(rng: &mut R, config: &GalleryConfig) -> Vec<GalleryImage> {
    (0..config.count)
        .map(|_| {
            let id = random_between(rng, 0, config.max_id);
            let (width, height) = match config.size {
                GallerySize::Fixed { width, height } => (width, height),
                GallerySize::Random {
                    min_width,
                    max_width,
                    min_height,
                    max_height,
                } => (
                    random_between(rng, min_width, max_width),
                    random_between(rng, min_height, max_height),
                ),
            };
            GalleryImage { id, width, height }
        })
        .collect()
}

/// Draw `config.count` image URLs.
pub fn generate_image_urls<R: Rng + ?Sized>(rng: &mut R, config: &GalleryConfig) -> Vec<String> {
    let urls: Vec<String> = generate_images(rng, config)
        .iter()
        .map(|img| img.url(&config.base_url))
        .collect();
    tracing::debug!(count = urls.len(), size = %config.size, "Generated gallery");
    urls
}
