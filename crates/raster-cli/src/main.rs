//! raster - pixel-grid image toolkit CLI
//!
//! Wraps every raster-ops operation behind a subcommand that loads an
//! image, runs the operation and saves the result.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use raster_core::Region;
use raster_ops::ColorOp;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "raster")]
#[command(author, version, about = "Pixel-grid image toolkit")]
#[command(long_about = "
Color filters, mirrors, region copy and edge detection for PNG and JPEG images.

Examples:
  raster info beach.jpg                         # Show dimensions
  raster filter beach.jpg -o out.png --op grayscale
  raster mirror temple.jpg -o out.jpg --mode temple
  raster copy bg.png fg.png -o out.png --row 40 --col 10
  raster copy bg.png fg.png -o out.png --region 0,0,50,80
  raster edges swan.jpg -o edges.png --threshold 10
  raster collage flowers flower1.jpg flower2.jpg -o collage.jpg
  raster -v demo beach.jpg -o beach_no_blue.jpg
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// JPEG output quality (1-100)
    #[arg(long, global = true, default_value = "90",
          value_parser = clap::value_parser!(u8).range(1..=100))]
    jpeg_quality: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Apply a per-pixel color filter
    #[command(visible_alias = "f")]
    Filter(FilterArgs),

    /// Mirror an image about an axis or a fixed window
    #[command(visible_alias = "m")]
    Mirror(MirrorArgs),

    /// Copy one image (or part of it) onto another
    Copy(CopyArgs),

    /// Black/white edge detection
    Edges(EdgesArgs),

    /// Build one of the fixed-layout collages
    #[command(subcommand)]
    Collage(CollageCommand),

    /// Load, zero the blue channel, save
    Demo(DemoArgs),
}

/// Arguments for the `info` command.
#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Show per-channel averages
    #[arg(long)]
    stats: bool,
}

/// Arguments for the `filter` command.
#[derive(Args)]
struct FilterArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Filter: zero-blue, keep-only-blue, negate, grayscale, fix-underwater
    #[arg(long)]
    op: ColorOp,

    /// Run on one thread
    #[arg(long)]
    sequential: bool,
}

/// Mirror axis or fixture window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum MirrorMode {
    /// Left half onto right half
    Vertical,
    /// Right half onto left half
    VerticalRtl,
    /// Top half onto bottom half
    Horizontal,
    /// Bottom half onto top half
    HorizontalBtt,
    /// Lower-left triangle onto upper-right
    Diagonal,
    /// Temple photo window
    Temple,
    /// Snowman arms window
    Arms,
    /// Beach gull window
    Gull,
}

/// Arguments for the `mirror` command.
#[derive(Args)]
struct MirrorArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Mirror mode
    #[arg(long, value_enum, default_value = "vertical")]
    mode: MirrorMode,

    /// Run on one thread
    #[arg(long)]
    sequential: bool,
}

/// Arguments for the `copy` command.
#[derive(Args)]
struct CopyArgs {
    /// Background (destination) image
    background: PathBuf,

    /// Foreground (source) image
    foreground: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Destination row of the top-left copied pixel
    #[arg(long, default_value = "0")]
    row: usize,

    /// Destination column of the top-left copied pixel
    #[arg(long, default_value = "0")]
    col: usize,

    /// Source rectangle START_ROW,START_COL,END_ROW,END_COL (end exclusive)
    #[arg(long, value_parser = parse_region)]
    region: Option<Region>,
}

/// Arguments for the `edges` command.
#[derive(Args)]
struct EdgesArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Color distance above which a pixel is an edge
    #[arg(short, long, default_value = "20.0")]
    threshold: f64,

    /// Use the four-neighbor maximum gradient instead of right/down
    #[arg(long)]
    max_gradient: bool,
}

#[derive(Subcommand)]
enum CollageCommand {
    /// Flower tiles down the left edge, mirrored
    Flowers(FlowersArgs),
    /// Four filtered quadrants of one photo
    Beach(BeachArgs),
}

/// Arguments for `collage flowers`.
#[derive(Args)]
struct FlowersArgs {
    /// First flower image
    flower1: PathBuf,

    /// Second flower image
    flower2: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Canvas width
    #[arg(long, default_value = "640")]
    width: usize,

    /// Canvas height
    #[arg(long, default_value = "480")]
    height: usize,
}

/// Arguments for `collage beach`.
#[derive(Args)]
struct BeachArgs {
    /// Beach image, at least 640x480
    beach: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

/// Arguments for the `demo` command.
#[derive(Args)]
struct DemoArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

/// Parses `START_ROW,START_COL,END_ROW,END_COL`.
fn parse_region(s: &str) -> Result<Region, String> {
    let parts: Vec<usize> = s
        .split(',')
        .map(|p| p.trim().parse::<usize>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid region '{}': {}", s, e))?;

    match parts.as_slice() {
        &[row_start, col_start, row_end, col_end] => {
            Ok(Region::new(row_start, col_start, row_end, col_end))
        }
        _ => Err(format!(
            "invalid region '{}': expected START_ROW,START_COL,END_ROW,END_COL",
            s
        )),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let opts = commands::RunOptions {
        verbose: cli.verbose,
        write: raster_io::WriteOptions {
            jpeg_quality: cli.jpeg_quality,
        },
    };

    match cli.command {
        Commands::Info(args) => commands::info::run(args, &opts),
        Commands::Filter(args) => commands::filter::run(args, &opts),
        Commands::Mirror(args) => commands::mirror::run(args, &opts),
        Commands::Copy(args) => commands::copy::run(args, &opts),
        Commands::Edges(args) => commands::edges::run(args, &opts),
        Commands::Collage(cmd) => commands::collage::run(cmd, &opts),
        Commands::Demo(args) => commands::demo::run(args, &opts),
    }
}
