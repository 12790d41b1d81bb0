use anyhow::Result;
use clap::Args;
use picview_core::config::{GallerySize, ViewerConfig};
use picview_core::gallery::generate_image_urls;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Args)]
pub struct UrlsArgs {
    /// Number of URLs to generate
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Request the fixed 1920x1080 size instead of random sizes
    #[arg(long)]
    pub fixed: bool,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: &UrlsArgs, config: &ViewerConfig) -> Result<()> {
    let mut gallery = config.gallery.clone();
    if let Some(count) = args.count {
        gallery.count = count;
    }
    if args.fixed {
        gallery.size = GallerySize::fixed();
    }

    let urls = match args.seed {
        Some(seed) => generate_image_urls(&mut StdRng::seed_from_u64(seed), &gallery),
        None => generate_image_urls(&mut rand::rng(), &gallery),
    };

    for url in urls {
        println!("{url}");
    }
    Ok(())
}
