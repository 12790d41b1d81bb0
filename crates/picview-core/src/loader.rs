//! Fetching and decoding images from URLs or local files.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::{ImageFormat, RgbaImage};

use crate::consts::{FETCH_MAX_REDIRECTS, FETCH_TIMEOUT_SECS, FETCH_USER_AGENT};
use crate::error::{Result, ViewerError};
use crate::viewport::ImageDimensions;

/// Where an image comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    File(PathBuf),
}

impl ImageSource {
    /// Treat anything with an http(s) scheme as a URL, everything else as a path.
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            ImageSource::Url(input.to_string())
        } else {
            ImageSource::File(PathBuf::from(input))
        }
    }

    pub fn name(&self) -> String {
        match self {
            ImageSource::Url(url) => url.clone(),
            ImageSource::File(path) => path.display().to_string(),
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A fully decoded RGBA image.
#[derive(Clone)]
pub struct DecodedImage {
    pub rgba: RgbaImage,
}

impl DecodedImage {
    pub fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.rgba.width(), self.rgba.height())
    }
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("dimensions", &self.dimensions())
            .finish()
    }
}

/// Fetch (or read) and decode.
pub fn load(source: &ImageSource) -> Result<DecodedImage> {
    match source {
        ImageSource::Url(url) => load_from_url(url),
        ImageSource::File(path) => load_from_path(path),
    }
}

/// Blocking HTTP fetch followed by decode.
pub fn load_from_url(url: &str) -> Result<DecodedImage> {
    let client = reqwest::blocking::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(FETCH_MAX_REDIRECTS))
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .user_agent(FETCH_USER_AGENT)
        .build()
        .map_err(|e| ViewerError::Fetch(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| ViewerError::Fetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ViewerError::HttpStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let bytes = response
        .bytes()
        .map_err(|e| ViewerError::Fetch(e.to_string()))?;
    tracing::debug!(url, bytes = bytes.len(), "Fetched image");

    decode_bytes(&bytes, url)
}

pub fn load_from_path(path: &Path) -> Result<DecodedImage> {
    let bytes = std::fs::read(path)?;
    decode_bytes(&bytes, &path.display().to_string())
}

/// Decode an encoded image. Undecodable input and zero-sized images become
/// `LoadFailed`.
pub fn decode_bytes(bytes: &[u8], source_name: &str) -> Result<DecodedImage> {
    let decoded = image::load_from_memory(bytes).map_err(|e| ViewerError::LoadFailed {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })?;

    let rgba = decoded.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(ViewerError::LoadFailed {
            source_name: source_name.to_string(),
            reason: format!("empty image ({}x{})", rgba.width(), rgba.height()),
        });
    }

    Ok(DecodedImage { rgba })
}

/// Encode `image` as PNG at `path`. Encoder and write failures surface as
/// `ViewerError::Image`.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    tracing::debug!(path = %path.display(), "Saved PNG");
    Ok(())
}
