mod common;

use picview_core::error::ViewerError;
use picview_core::loader::{decode_bytes, load, load_from_path, save_png, ImageSource};
use picview_core::viewport::ImageDimensions;

use common::{png_bytes, solid_image, RED};

#[test]
fn test_decode_png_bytes() {
    let bytes = png_bytes(&solid_image(3, 2, RED));
    let decoded = decode_bytes(&bytes, "memory").unwrap();
    assert_eq!(decoded.dimensions(), ImageDimensions::new(3, 2));
    assert_eq!(decoded.rgba.get_pixel(2, 1).0, RED);
}

#[test]
fn test_garbage_is_load_failed() {
    let err = decode_bytes(b"definitely not an image", "junk").unwrap_err();
    match err {
        ViewerError::LoadFailed { source_name, .. } => assert_eq!(source_name, "junk"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_from_path() {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("create temp file");
    solid_image(5, 4, RED).save(file.path()).expect("save png");

    let decoded = load_from_path(file.path()).unwrap();
    assert_eq!(decoded.dimensions(), ImageDimensions::new(5, 4));

    let via_source = load(&ImageSource::File(file.path().to_path_buf())).unwrap();
    assert_eq!(via_source.dimensions(), ImageDimensions::new(5, 4));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_from_path(std::path::Path::new("/nonexistent/image.png")).unwrap_err();
    assert!(matches!(err, ViewerError::Io(_)), "got: {err}");
}

#[test]
fn test_source_parse() {
    assert_eq!(
        ImageSource::parse("https://picsum.photos/id/1/960/540"),
        ImageSource::Url("https://picsum.photos/id/1/960/540".into())
    );
    assert_eq!(
        ImageSource::parse("photos/cat.png"),
        ImageSource::File("photos/cat.png".into())
    );
}

// ---------------------------------------------------------------------------
// Saving
// ---------------------------------------------------------------------------

#[test]
fn test_save_png_round_trips_through_loader() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("frame.png");
    save_png(&solid_image(6, 3, RED), &path).unwrap();

    let decoded = load_from_path(&path).unwrap();
    assert_eq!(decoded.dimensions(), ImageDimensions::new(6, 3));
    assert_eq!(decoded.rgba.get_pixel(5, 2).0, RED);
}

#[test]
fn test_save_png_into_missing_dir_is_image_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("no-such-dir").join("frame.png");
    let err = save_png(&solid_image(2, 2, RED), &path).unwrap_err();
    assert!(matches!(err, ViewerError::Image(_)), "unexpected error: {err}");
}
