use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "pagemark")]
#[command(about = "Table of contents and pagination helpers for blog front ends", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to _pagemark.{yml,yaml,toml,json} in ./)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<Vec<PathBuf>>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Output format of the table of contents
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TocFormat {
    Text,
    Html,
    Json,
}

/// Output format for structured results
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Print the table of contents of a markdown or HTML document
    Toc {
        /// Markdown (.md, .markdown) or HTML file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = TocFormat::Text)]
        format: TocFormat,

        /// Use slugified heading text as ids instead of heading-N
        #[arg(long, default_value_t = false)]
        slug: bool,

        /// Also write the document with heading ids to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Compute the active heading from a layout fixture
    Highlight {
        /// JSON file with headings, positions and viewport
        #[arg(value_name = "FIXTURE")]
        fixture: PathBuf,

        /// Override the fixed header height, in pixels
        #[arg(long, value_name = "PX")]
        header_offset: Option<f64>,
    },

    /// Print the page tokens of a pagination bar
    #[command(alias = "p")]
    Paginate {
        /// Current page (1-indexed)
        #[arg(long, value_name = "N")]
        current: usize,

        /// Total number of pages
        #[arg(long, value_name = "N")]
        total: usize,

        /// Use the narrow mobile window
        #[arg(long, default_value_t = false)]
        compact: bool,

        /// Path prefix for page links
        #[arg(short, long, value_name = "PATH")]
        base_path: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Compute panel sizes after dragging a resize handle
    Resize {
        /// Container width in pixels
        #[arg(long, value_name = "PX")]
        container: f64,

        /// Left panel width in pixels when the drag starts (defaults to panels.default_size)
        #[arg(long, value_name = "PX")]
        left: Option<f64>,

        /// Right panel width in pixels when the drag starts (defaults to the rest)
        #[arg(long, value_name = "PX")]
        right: Option<f64>,

        /// Pointer x position when the handle is pressed
        #[arg(long, value_name = "X", allow_negative_numbers = true)]
        from: f64,

        /// Pointer x position when the handle is released
        #[arg(long, value_name = "X", allow_negative_numbers = true)]
        to: f64,
    },
}
