//! qrsvg CLI
//!
//! Usage:
//!   qrsvg [OPTIONS] [GRID_FILE]
//!
//! Options:
//!   -s, --settings <FILE>    Settings file (TOML format)
//!   -t, --style <STYLE>      Module style (square, rounded, horizontal-bars, ...)
//!   -r, --size-ratio <R>     Module size relative to its cell, in (0, 1]
//!   -m, --mode <MODE>        elements or path
//!   -u, --unit <UNIT>        px or mm
//!   -b, --box-size <PX>      Pixel size of one module
//!       --border <N>         Quiet zone in modules
//!   -p, --parallel           Draw rows in parallel
//!   -h, --help               Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use qrsvg::drawers::to_decimal;
use qrsvg::{
    render_grid, ConfigError, ModuleGrid, OutputMode, RenderConfig, Settings, StyleKind, Sweep,
    Unit,
};

#[derive(Parser)]
#[command(name = "qrsvg")]
#[command(about = "Draw QR module grids as SVG")]
struct Cli {
    /// Grid file, one row per line (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Settings file (TOML format); command-line options take precedence
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Module style
    #[arg(short = 't', long)]
    style: Option<StyleKind>,

    /// Module size relative to its cell
    #[arg(short = 'r', long)]
    size_ratio: Option<f64>,

    /// Output mode: elements or path
    #[arg(short, long)]
    mode: Option<OutputMode>,

    /// Document unit: px or mm
    #[arg(short, long)]
    unit: Option<Unit>,

    /// Pixel size of one module
    #[arg(short, long)]
    box_size: Option<f64>,

    /// Quiet zone, in modules
    #[arg(long)]
    border: Option<u32>,

    /// Draw rows on all cores
    #[arg(short, long)]
    parallel: bool,
}

impl Cli {
    /// Apply command-line overrides on top of `config`
    fn apply(&self, mut config: RenderConfig) -> Result<RenderConfig, ConfigError> {
        if let Some(style) = self.style {
            config.style.kind = style;
        }
        if let Some(ratio) = self.size_ratio {
            config.style.size_ratio = Some(to_decimal("size_ratio", ratio)?);
        }
        if let Some(mode) = self.mode {
            config.svg.mode = mode;
        }
        if let Some(unit) = self.unit {
            config.svg.unit = unit;
        }
        if let Some(box_size) = self.box_size {
            config.box_size = to_decimal("box_size", box_size)?;
        }
        if let Some(border) = self.border {
            config.border = border;
        }
        if self.parallel {
            config.sweep = Sweep::Parallel;
        }
        Ok(config)
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    // Logs go to stderr, stdout carries the document
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing() {}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    // Load settings
    let config = match &cli.settings {
        Some(path) => match Settings::from_file(path).and_then(|s| s.apply(RenderConfig::new())) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => RenderConfig::new(),
    };

    let config = match cli.apply(config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    let grid = match ModuleGrid::from_text(&source) {
        Ok(grid) => grid,
        Err(e) => {
            eprint!("{}", e.format(&source, &filename));
            process::exit(1);
        }
    };

    match render_grid(&grid, &config) {
        Ok(svg) => {
            println!("{}", svg);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
