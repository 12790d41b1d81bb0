use crate::geometry::Color;

/// Zoom scalar the viewport starts at and returns to on reset.
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Amount a single zoom in/out step changes the zoom scalar by.
pub const DEFAULT_ZOOM_STEP: f32 = 0.1;

/// Lower zoom bound. Must stay positive so the image never collapses or flips.
pub const DEFAULT_MIN_ZOOM: f32 = 0.1;

/// Upper zoom bound.
pub const DEFAULT_MAX_ZOOM: f32 = 10.0;

/// Zoom values are rounded to this many steps per unit after every change
/// so that repeated 0.1 steps don't accumulate float drift.
pub const ZOOM_ROUNDING: f32 = 100.0;

/// Image service the gallery URLs point at.
pub const DEFAULT_GALLERY_BASE_URL: &str = "https://picsum.photos";

/// Number of URLs produced per gallery generation.
pub const DEFAULT_GALLERY_COUNT: usize = 10;

/// Highest image id the image service is asked for (ids are 0..=999).
pub const DEFAULT_GALLERY_MAX_ID: u32 = 999;

/// Fixed-size gallery variant.
pub const FIXED_IMAGE_WIDTH: u32 = 1920;
pub const FIXED_IMAGE_HEIGHT: u32 = 1080;

/// Randomized gallery size range (inclusive).
pub const RANDOM_MIN_WIDTH: u32 = 960;
pub const RANDOM_MAX_WIDTH: u32 = 1920;
pub const RANDOM_MIN_HEIGHT: u32 = 540;
pub const RANDOM_MAX_HEIGHT: u32 = 1080;

/// Surface size used by headless rendering when none is configured.
pub const DEFAULT_SURFACE_WIDTH: u32 = 1280;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 720;

/// Redirect limit and user agent for image fetches.
pub const FETCH_MAX_REDIRECTS: usize = 10;
pub const FETCH_TIMEOUT_SECS: u64 = 30;
pub const FETCH_USER_AGENT: &str = concat!("picview/", env!("CARGO_PKG_VERSION"));

pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const IMAGE_BOUNDS_COLOR: Color = Color::CYAN;
pub const SURFACE_BORDER_COLOR: Color = Color::RED;
pub const CENTER_MARKER_COLOR: Color = Color::RED;
pub const OVERLAY_BACKGROUND_COLOR: Color = Color::BLACK;
pub const OVERLAY_TEXT_COLOR: Color = Color::WHITE;

/// Side length of the square drawn at the surface center.
pub const CENTER_MARKER_SIZE: f32 = 4.0;

/// Background box behind the "center point" label.
pub const CENTER_LABEL_BOX_WIDTH: f32 = 100.0;
pub const CENTER_LABEL_BOX_HEIGHT: f32 = 10.0;

/// Background box behind the pointer position label. The box grows upward
/// from the pointer position.
pub const POINTER_LABEL_BOX_WIDTH: f32 = 90.0;
pub const POINTER_LABEL_BOX_HEIGHT: f32 = 10.0;

/// Statistics block layout: box origin, text origin and line pitch.
pub const STATS_BOX_X: f32 = 3.0;
pub const STATS_BOX_Y: f32 = 2.0;
pub const STATS_TEXT_X: f32 = 10.0;
pub const STATS_FIRST_BASELINE: f32 = 11.0;
pub const STATS_LINE_HEIGHT: f32 = 10.0;
pub const STATS_MIN_BOX_WIDTH: f32 = 180.0;

/// Advance of one 8x8 overlay glyph, used to size the statistics box.
pub const OVERLAY_GLYPH_WIDTH: f32 = 8.0;

/// Text shown in place of a value that has no source yet.
pub const NOT_AVAILABLE: &str = "n/a";
