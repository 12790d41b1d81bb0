use anyhow::{Context, Result};
use clap::Args;
use picview_core::loader::{self, ImageSource};

#[derive(Args)]
pub struct InfoArgs {
    /// Image URL or file path
    pub source: String,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let source = ImageSource::parse(&args.source);
    let image = loader::load(&source).with_context(|| format!("Failed to load {source}"))?;
    let dims = image.dimensions();

    println!("Source:      {}", source);
    println!("Dimensions:  {}x{}", dims.width, dims.height);
    println!(
        "Kind:        {}",
        match source {
            ImageSource::Url(_) => "remote",
            ImageSource::File(_) => "local file",
        }
    );

    Ok(())
}
