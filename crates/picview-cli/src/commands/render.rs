use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Args;
use picview_core::config::ViewerConfig;
use picview_core::loader::{self, ImageSource};
use picview_core::pointer::PointerSample;
use picview_core::surface::RasterSurface;
use picview_core::viewer::{Viewer, ViewerEvent};

#[derive(Args)]
pub struct RenderArgs {
    /// Image URL or file path
    pub source: String,

    /// Output PNG path
    #[arg(short, long, default_value = "viewport.png")]
    pub output: PathBuf,

    /// Surface width (defaults to config)
    #[arg(long)]
    pub width: Option<u32>,

    /// Surface height (defaults to config)
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of zoom-in steps
    #[arg(long, default_value_t = 0)]
    pub zoom_in: u32,

    /// Number of zoom-out steps
    #[arg(long, default_value_t = 0)]
    pub zoom_out: u32,

    /// Pan by dragging this far, as "X,Y"
    #[arg(long, value_parser = parse_offset, allow_hyphen_values = true)]
    pub offset: Option<(f32, f32)>,

    /// Hide the guides overlay
    #[arg(long)]
    pub no_guides: bool,

    /// Hide the statistics overlay
    #[arg(long)]
    pub no_statistics: bool,
}

fn parse_offset(s: &str) -> std::result::Result<(f32, f32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad X '{x}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad Y '{y}': {e}"))?;
    Ok((x, y))
}

pub fn run(args: &RenderArgs, config: &ViewerConfig) -> Result<()> {
    let width = args.width.unwrap_or(config.surface.width);
    let height = args.height.unwrap_or(config.surface.height);
    if width == 0 || height == 0 {
        bail!("Surface size must be non-zero, got {width}x{height}");
    }

    let mut config = config.clone();
    if args.no_guides {
        config.display.show_guides = false;
    }
    if args.no_statistics {
        config.display.show_statistics = false;
    }

    let source = ImageSource::parse(&args.source);
    let mut viewer = Viewer::new(RasterSurface::new(width, height), &config);
    let selection = viewer.select_image(source.name());

    let start = Instant::now();
    let decoded = loader::load(&source).with_context(|| format!("Failed to load {source}"))?;
    let dimensions = decoded.dimensions();
    tracing::info!(%source, %dimensions, elapsed_ms = start.elapsed().as_millis() as u64, "Loaded");

    viewer.dispatch(ViewerEvent::ImageDecoded {
        selection,
        image: decoded.rgba,
        dimensions,
    });

    for _ in 0..args.zoom_in {
        viewer.dispatch(ViewerEvent::ZoomIn);
    }
    for _ in 0..args.zoom_out {
        viewer.dispatch(ViewerEvent::ZoomOut);
    }

    if let Some((dx, dy)) = args.offset {
        viewer.dispatch(ViewerEvent::PointerDown(PointerSample::at(0.0, 0.0)));
        viewer.dispatch(ViewerEvent::PointerMove(PointerSample::at(dx, dy)));
        viewer.dispatch(ViewerEvent::PointerUp);
    }

    let lines = viewer.statistics_lines();
    let surface = viewer.into_surface();
    loader::save_png(surface.pixels(), &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    for line in &lines {
        println!("{line}");
    }
    println!("Saved to {}", args.output.display());

    Ok(())
}
