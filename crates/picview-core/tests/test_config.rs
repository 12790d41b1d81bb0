use std::io::Write;

use picview_core::config::{GallerySize, ViewerConfig};
use picview_core::error::ViewerError;

#[test]
fn test_empty_toml_is_default() {
    let config = ViewerConfig::from_toml("").unwrap();
    assert_eq!(config, ViewerConfig::default());
    assert_eq!(config.gallery.count, 10);
    assert_eq!(config.zoom.step, 0.1);
    assert!(config.display.show_guides);
    assert!(config.display.show_statistics);
}

#[test]
fn test_partial_sections_keep_defaults() {
    let config = ViewerConfig::from_toml(
        r#"
        [zoom]
        max = 4.0

        [display]
        show_statistics = false
        "#,
    )
    .unwrap();
    assert_eq!(config.zoom.max, 4.0);
    assert_eq!(config.zoom.min, 0.1);
    assert!(config.display.show_guides);
    assert!(!config.display.show_statistics);
}

#[test]
fn test_fixed_gallery_size() {
    let config = ViewerConfig::from_toml(
        r#"
        [gallery.size]
        mode = "fixed"
        width = 1920
        height = 1080
        "#,
    )
    .unwrap();
    assert_eq!(config.gallery.size, GallerySize::fixed());
}

#[test]
fn test_default_serializes_and_parses_back() {
    let text = ViewerConfig::default().to_toml().unwrap();
    assert!(text.contains("base_url"), "got: {text}");
    assert_eq!(ViewerConfig::from_toml(&text).unwrap(), ViewerConfig::default());
}

#[test]
fn test_inverted_zoom_range_rejected() {
    let err = ViewerConfig::from_toml("[zoom]\nmin = 2.0\nmax = 1.0\n").unwrap_err();
    assert!(matches!(err, ViewerError::InvalidRange { .. }), "got: {err}");
}

#[test]
fn test_non_positive_zoom_rejected() {
    let err = ViewerConfig::from_toml("[zoom]\nmin = 0.0\n").unwrap_err();
    assert!(matches!(err, ViewerError::InvalidRange { .. }), "got: {err}");
}

#[test]
fn test_inverted_gallery_range_rejected() {
    let err = ViewerConfig::from_toml(
        r#"
        [gallery.size]
        mode = "random"
        min_width = 2000
        max_width = 1000
        min_height = 540
        max_height = 1080
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, ViewerError::InvalidRange { .. }), "got: {err}");
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let err = ViewerConfig::from_toml("[zoom\n").unwrap_err();
    assert!(matches!(err, ViewerError::ConfigParse(_)), "got: {err}");
}

#[test]
fn test_load_from_file() {
    let mut f = tempfile::NamedTempFile::new().expect("create temp file");
    f.write_all(b"[surface]\nwidth = 320\nheight = 200\n")
        .expect("write config");
    f.flush().expect("flush");

    let config = ViewerConfig::load(f.path()).unwrap();
    assert_eq!(config.surface.width, 320);
    assert_eq!(config.surface.height, 200);
}

#[test]
fn test_load_or_default_without_path() {
    assert_eq!(
        ViewerConfig::load_or_default(None).unwrap(),
        ViewerConfig::default()
    );
}

#[test]
fn test_load_or_default_with_path_reads_file() {
    let mut f = tempfile::NamedTempFile::new().expect("create temp file");
    f.write_all(b"[zoom]\nmax = 4.0\n").expect("write config");
    f.flush().expect("flush");

    let config = ViewerConfig::load_or_default(Some(f.path())).unwrap();
    assert_eq!(config.zoom.max, 4.0);

    let err = ViewerConfig::load_or_default(Some(std::path::Path::new("/nonexistent/picview.toml")))
        .unwrap_err();
    assert!(matches!(err, ViewerError::Io(_)), "got: {err}");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = ViewerConfig::load(std::path::Path::new("/nonexistent/picview.toml")).unwrap_err();
    assert!(matches!(err, ViewerError::Io(_)), "got: {err}");
}
