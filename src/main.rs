//! svg2ass CLI
//!
//! Usage:
//!   svg2ass [OPTIONS] <INPUT> <OUTPUT>
//!
//! Options:
//!   -p, --profile <FILE>   Script metadata profile (TOML format)
//!       --force-new-file   Truncate the output file before writing
//!   -v, --verbose-output   Report each emitted event on stderr
//!   -h, --help             Print help

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use svg2ass::{convert, EventWriter, OpenMode, ScriptProfile};

#[derive(Parser)]
#[command(name = "svg2ass")]
#[command(about = "Convert SVG shapes into ASS subtitle drawing events")]
struct Cli {
    /// Input SVG file
    input: PathBuf,

    /// Output ASS file; created if absent, appended to if it already
    /// has content
    output: PathBuf,

    /// Script metadata profile (TOML format)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Truncate the output file before writing, discarding existing
    /// content
    #[arg(long = "force-new-file")]
    force_new_file: bool,

    /// Report each emitted event on stderr
    #[arg(short = 'v', long = "verbose-output")]
    verbose_output: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose_output {
        EnvFilter::new("svg2ass=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("svg2ass=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let profile = match &cli.profile {
        Some(path) => match ScriptProfile::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading profile '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ScriptProfile::default(),
    };

    let source = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let mode = if cli.force_new_file {
        OpenMode::Truncate
    } else {
        OpenMode::Append
    };
    let mut writer = match EventWriter::open(&cli.output, profile, mode) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error opening file '{}': {}", cli.output.display(), e);
            std::process::exit(1);
        }
    };

    match convert(&source, &mut writer) {
        Ok(stats) => {
            if let Err(e) = writer.finish() {
                eprintln!("Error writing file '{}': {}", cli.output.display(), e);
                std::process::exit(1);
            }
            info!(
                emitted = stats.emitted,
                skipped_styles = stats.skipped_styles,
                skipped_elements = stats.skipped_elements,
                "conversion finished"
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
