use clap::Parser;
use std::path::PathBuf;

use letterbox::{BackgroundColor, CanvasSize, ResampleFilter};

#[derive(Parser, Debug)]
#[command(
    name = "letterbox",
    version,
    about = "Resize images onto a fixed-size canvas, keeping their aspect ratio"
)]
pub struct CliArgs {
    /// Directory of .jpg/.jpeg/.png images, extensions matched
    /// case-insensitively (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output directory; defaults to `_out` inside the input directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Single input image (single file mode)
    #[arg(short, long, conflicts_with = "input_dir")]
    pub input: Option<PathBuf>,

    /// Output PNG path (single file mode)
    #[arg(short, long, requires = "input")]
    pub output: Option<PathBuf>,

    /// Canvas size as WIDTHxHEIGHT, or a single number for a square canvas
    #[arg(short, long, default_value_t = CanvasSize::default())]
    pub size: CanvasSize,

    /// Background color as r,g,b,a (or r,g,b for opaque), each 0-255
    #[arg(short, long, default_value_t = BackgroundColor::default())]
    pub background: BackgroundColor,

    /// Resampling filter used when scaling
    #[arg(long, value_enum, default_value_t = ResampleFilter::Bicubic)]
    pub filter: ResampleFilter,

    /// Batch mode: continue with the remaining files when one fails
    #[arg(long, default_value_t = false)]
    pub keep_going: bool,

    /// Print the batch report as JSON on stdout
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable debug logging, on top of any RUST_LOG directives
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
