use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_GALLERY_BASE_URL, DEFAULT_GALLERY_COUNT, DEFAULT_GALLERY_MAX_ID, DEFAULT_MAX_ZOOM,
    DEFAULT_MIN_ZOOM, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, DEFAULT_ZOOM_STEP,
    FIXED_IMAGE_HEIGHT, FIXED_IMAGE_WIDTH, RANDOM_MAX_HEIGHT, RANDOM_MAX_WIDTH,
    RANDOM_MIN_HEIGHT, RANDOM_MIN_WIDTH,
};
use crate::error::{Result, ViewerError};
use crate::viewport::DisplayFlags;

/// File name the GUI looks for in the working directory.
pub const CONFIG_FILE_NAME: &str = "picview.toml";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub display: DisplayFlags,
    #[serde(default)]
    pub surface: SurfaceConfig,
}

impl ViewerConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// `load` when a path is given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ViewerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.gallery.validate()?;
        self.zoom.validate()?;
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(ViewerError::InvalidDimensions {
                width: self.surface.width,
                height: self.surface.height,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub base_url: String,
    /// URLs produced per generation.
    pub count: usize,
    /// Highest image id requested; ids are drawn from `0..=max_id`.
    pub max_id: u32,
    pub size: GallerySize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GALLERY_BASE_URL.to_string(),
            count: DEFAULT_GALLERY_COUNT,
            max_id: DEFAULT_GALLERY_MAX_ID,
            size: GallerySize::default(),
        }
    }
}

impl GalleryConfig {
    fn validate(&self) -> Result<()> {
        if let GallerySize::Random {
            min_width,
            max_width,
            min_height,
            max_height,
        } = self.size
        {
            check_range("gallery width", min_width as f64, max_width as f64)?;
            check_range("gallery height", min_height as f64, max_height as f64)?;
            if min_width == 0 || min_height == 0 {
                return Err(ViewerError::InvalidDimensions {
                    width: min_width,
                    height: min_height,
                });
            }
        }
        if let GallerySize::Fixed { width, height } = self.size {
            if width == 0 || height == 0 {
                return Err(ViewerError::InvalidDimensions { width, height });
            }
        }
        Ok(())
    }
}

/// How requested image sizes are chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GallerySize {
    Fixed {
        width: u32,
        height: u32,
    },
    /// Inclusive ranges.
    Random {
        min_width: u32,
        max_width: u32,
        min_height: u32,
        max_height: u32,
    },
}

impl GallerySize {
    pub const fn fixed() -> Self {
        GallerySize::Fixed {
            width: FIXED_IMAGE_WIDTH,
            height: FIXED_IMAGE_HEIGHT,
        }
    }

    pub const fn random() -> Self {
        GallerySize::Random {
            min_width: RANDOM_MIN_WIDTH,
            max_width: RANDOM_MAX_WIDTH,
            min_height: RANDOM_MIN_HEIGHT,
            max_height: RANDOM_MAX_HEIGHT,
        }
    }
}

impl Default for GallerySize {
    fn default() -> Self {
        GallerySize::random()
    }
}

impl fmt::Display for GallerySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GallerySize::Fixed { width, height } => write!(f, "Fixed ({width}x{height})"),
            GallerySize::Random {
                min_width,
                max_width,
                min_height,
                max_height,
            } => write!(
                f,
                "Random ({min_width}-{max_width} x {min_height}-{max_height})"
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub step: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_ZOOM_STEP,
            min: DEFAULT_MIN_ZOOM,
            max: DEFAULT_MAX_ZOOM,
        }
    }
}

impl ZoomConfig {
    fn validate(&self) -> Result<()> {
        if self.min <= 0.0 || !self.min.is_finite() || !self.max.is_finite() {
            return Err(ViewerError::InvalidRange {
                what: "zoom".into(),
                min: self.min as f64,
                max: self.max as f64,
            });
        }
        check_range("zoom", self.min as f64, self.max as f64)?;
        if self.step <= 0.0 || !self.step.is_finite() {
            return Err(ViewerError::InvalidRange {
                what: "zoom step".into(),
                min: self.step as f64,
                max: self.step as f64,
            });
        }
        Ok(())
    }
}

/// Surface size for headless rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}

fn check_range(what: &str, min: f64, max: f64) -> Result<()> {
    if min > max {
        return Err(ViewerError::InvalidRange {
            what: what.to_string(),
            min,
            max,
        });
    }
    Ok(())
}
