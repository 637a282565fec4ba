//! CLI entry point for mdsite

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mdsite::content::MarkdownRenderer;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(version)]
#[command(about = "A minimal static site builder for flat Markdown pages", long_about = None)]
struct Cli {
    /// Set the site root directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static site into the output directory
    #[command(alias = "b")]
    Build,

    /// Remove the output directory
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdsite=debug,info"
    } else {
        "mdsite=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Build => {
            // Probe the rendering capability before touching the output tree.
            let renderer = match MarkdownRenderer::new() {
                Ok(renderer) => renderer,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(2);
                }
            };

            let site = mdsite::Site::new(&base_dir)?;
            tracing::info!("Building site from {:?}", site.base_dir);
            mdsite::commands::build::run_with_renderer(&site, &renderer)?;
            println!("Build complete. Site at {:?}", site.output_dir);
        }

        Commands::Clean => {
            let site = mdsite::Site::new(&base_dir)?;
            tracing::info!("Cleaning output directory...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("mdsite version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
