use rand::rngs::StdRng;
use rand::SeedableRng;

use picview_core::config::{GalleryConfig, GallerySize};
use picview_core::gallery::{generate_image_urls, generate_images, random_between, GalleryImage};

const BASE: &str = "https://picsum.photos";

#[test]
fn test_default_generation_produces_ten_urls_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = GalleryConfig::default();

    for _ in 0..20 {
        let urls = generate_image_urls(&mut rng, &config);
        assert_eq!(urls.len(), 10);
        for url in &urls {
            let img = GalleryImage::parse(url, BASE).unwrap_or_else(|| panic!("bad url {url}"));
            assert!(img.id <= 999, "id out of range: {url}");
            assert!((960..=1920).contains(&img.width), "width out of range: {url}");
            assert!((540..=1080).contains(&img.height), "height out of range: {url}");
        }
    }
}

#[test]
fn test_fixed_size_variant() {
    let mut rng = StdRng::seed_from_u64(1);
    let config = GalleryConfig {
        size: GallerySize::fixed(),
        ..GalleryConfig::default()
    };
    let images = generate_images(&mut rng, &config);
    assert_eq!(images.len(), 10);
    assert!(images.iter().all(|i| i.width == 1920 && i.height == 1080));
}

#[test]
fn test_same_seed_same_gallery() {
    let config = GalleryConfig::default();
    let a = generate_image_urls(&mut StdRng::seed_from_u64(99), &config);
    let b = generate_image_urls(&mut StdRng::seed_from_u64(99), &config);
    assert_eq!(a, b);
}

#[test]
fn test_url_format() {
    let img = GalleryImage {
        id: 42,
        width: 1000,
        height: 600,
    };
    assert_eq!(img.url(BASE), "https://picsum.photos/id/42/1000/600");
    assert_eq!(img.url("https://picsum.photos/"), "https://picsum.photos/id/42/1000/600");
}

#[test]
fn test_parse_rejects_other_shapes() {
    assert!(GalleryImage::parse("https://picsum.photos/id/1/2", BASE).is_none());
    assert!(GalleryImage::parse("https://picsum.photos/id/1/2/3/4", BASE).is_none());
    assert!(GalleryImage::parse("https://example.com/id/1/2/3", BASE).is_none());
    assert!(GalleryImage::parse("https://picsum.photos/id/x/2/3", BASE).is_none());
}

#[test]
fn test_random_between_inclusive_bounds() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen_min = false;
    let mut seen_max = false;
    for _ in 0..500 {
        let v = random_between(&mut rng, 1, 3);
        assert!((1..=3).contains(&v));
        seen_min |= v == 1;
        seen_max |= v == 3;
    }
    assert!(seen_min && seen_max);
    assert_eq!(random_between(&mut rng, 5, 5), 5);
}

#[test]
fn test_custom_count() {
    let mut rng = StdRng::seed_from_u64(0);
    let config = GalleryConfig {
        count: 3,
        ..GalleryConfig::default()
    };
    assert_eq!(generate_image_urls(&mut rng, &config).len(), 3);
}
