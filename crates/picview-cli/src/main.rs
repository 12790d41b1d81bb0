mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use picview_core::config::ViewerConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "picview", about = "Pan/zoom image viewer, headless front end")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Viewer config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a freshly generated gallery of image URLs
    Urls(commands::urls::UrlsArgs),
    /// Render an image through the viewport to a PNG
    Render(commands::render::RenderArgs),
    /// Show the natural size of an image
    Info(commands::info::InfoArgs),
    /// Print or save the default config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ViewerConfig::load_or_default(cli.config.as_deref()).with_context(|| {
        format!(
            "Failed to load config from {}",
            cli.config.as_deref().unwrap_or(Path::new("<default>")).display()
        )
    })?;

    match &cli.command {
        Commands::Urls(args) => commands::urls::run(args, &config),
        Commands::Render(args) => commands::render::run(args, &config),
        Commands::Info(args) => commands::info::run(args),
        Commands::Config(args) => commands::config::run(args, &config),
    }
}
