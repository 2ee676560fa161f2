use clap::Parser;
use std::path::PathBuf;

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum VerbosityLevel {
    /// Only show errors
    Quiet,
    /// Show the success message and warnings
    #[default]
    Normal,
    /// Show detailed information
    Verbose,
    /// Show error source chains as well
    Debug,
}

/// Extract the text of a KML tag into a plain-text file
#[derive(Parser, Debug, Clone)]
#[command(name = "kml-extract")]
#[command(about = "Extract the text of a KML tag, one value per line, into a text file")]
#[command(version)]
pub struct Cli {
    /// KML file to read
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Tag to extract, optionally nested (e.g. "Placemark/kml:coordinates")
    #[arg(short = 't', long = "tag")]
    pub tag: Option<String>,

    /// Text file to write (overwritten if it exists)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Prefix bound to the document's namespace in tag paths
    #[arg(long = "namespace-alias")]
    pub namespace_alias: Option<String>,

    /// Configuration file (TOML or JSON)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Enable quiet mode (errors only)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Quiet mode",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        match (self.quiet, self.verbose) {
            (true, _) => VerbosityLevel::Quiet,
            (false, 0) => VerbosityLevel::Normal,
            (false, 1) => VerbosityLevel::Verbose,
            (false, _) => VerbosityLevel::Debug,
        }
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity() {
            VerbosityLevel::Quiet => "error",
            VerbosityLevel::Normal => "warn",
            VerbosityLevel::Verbose => "info",
            VerbosityLevel::Debug => "debug",
        }
    }
}
