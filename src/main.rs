use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixclean::models::{AppConfig, ConfigOverrides};
use pixclean::services::{load_palette_file, CleanService};

#[derive(Parser)]
#[command(name = "pixclean")]
#[command(about = "Turn images into clean, limited-palette pixel art")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean an image into pixel art
    Clean {
        /// Input image (PNG or JPEG)
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// YAML config file (flags below take precedence)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Palette file with one hex color per line
        #[arg(long, conflicts_with = "bits")]
        palette: Option<PathBuf>,

        /// Bits per pixel for bit-depth reduction (e.g. 15 for 5 bits per channel)
        #[arg(long)]
        bits: Option<u32>,

        /// Square working canvas size in pixels
        #[arg(long, conflicts_with = "scale")]
        size: Option<u32>,

        /// Shrink by an integer factor instead of a fixed working size
        #[arg(long)]
        scale: Option<u32>,

        /// Background tolerance (sum of RGB channel differences)
        #[arg(short, long)]
        tolerance: Option<u32>,

        /// Corner that seeds background removal: top-left, top-right, bottom-left, bottom-right
        #[arg(long)]
        corner: Option<String>,

        /// Background color to remove as hex RGB (sampled from the corner if omitted)
        #[arg(long)]
        target: Option<String>,

        /// Keep the background instead of making it transparent
        #[arg(long)]
        no_transparency: bool,
    },
    /// Validate a palette file and print its colors
    Palette {
        /// Palette file with one hex color per line
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixclean=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Clean {
            input,
            output,
            config,
            palette,
            bits,
            size,
            scale,
            tolerance,
            corner,
            target,
            no_transparency,
        }) => {
            let overrides = ConfigOverrides {
                palette_file: palette,
                bits,
                size,
                scale,
                tolerance,
                corner,
                target,
                no_transparency,
            };
            run_clean_command(&input, &output, config.as_deref(), overrides)
        }
        Some(Commands::Palette { file }) => run_palette_command(&file),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Clean a single image file
fn run_clean_command(
    input: &Path,
    output: &Path,
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> anyhow::Result<()> {
    let mut config = match config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    overrides.apply(&mut config);

    let service = CleanService::new(config.build_cleaner()?);
    let report = service.clean_file(input, output)?;

    println!(
        "{} -> {} ({}x{} via {}x{}, {} transparent pixels)",
        input.display(),
        output.display(),
        report.source_size.0,
        report.source_size.1,
        report.working_size.0,
        report.working_size.1,
        report.transparent_pixels
    );
    Ok(())
}

/// Validate a palette file and list its colors
fn run_palette_command(file: &Path) -> anyhow::Result<()> {
    let palette = load_palette_file(file)?;

    println!("{}: {} colors", file.display(), palette.len());
    for color in palette.colors() {
        println!("  {color}");
    }
    Ok(())
}

/// Show version and defaults when run without a subcommand
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let defaults = AppConfig::default();

    println!("pixclean v{VERSION}");
    println!("Photo to pixel-art cleaner\n");

    println!("Defaults:");
    println!("  working size = {}x{}", defaults.width, defaults.height);
    println!("  downscale    = {}", defaults.downscale);
    println!("  upscale      = {}", defaults.upscale);
    println!("  tolerance    = {}", defaults.tolerance);
    println!("  corner       = {}", defaults.corner);
    match defaults.palette_strategy() {
        Ok(strategy) => println!("  palette      = {}", strategy.describe()),
        Err(e) => println!("  palette      = (invalid: {e})"),
    }

    println!("\nUsage:");
    println!("  pixclean clean <INPUT> -o <OUTPUT>   Clean an image");
    println!("  pixclean palette <FILE>              Check a palette file");
    println!("  pixclean --help                      Show all options");
}
