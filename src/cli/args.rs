//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Portfolio site server: route metadata, preview cards and content pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, global = true, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the public base URL (site.info.url)
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default folio.toml
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Serve the site with prerendered metadata and preview cards
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print resolved route metadata as JSON
    #[command(visible_alias = "m")]
    Meta {
        #[command(flatten)]
        args: MetaArgs,
    },

    /// Render a preview card document
    Og {
        #[command(flatten)]
        args: OgArgs,
    },

    /// Normalize stored content to HTML and estimate reading time
    #[command(visible_alias = "n")]
    Normalize {
        #[command(flatten)]
        args: NormalizeArgs,
    },

    /// Generate sitemap.xml from static routes and content records
    Sitemap {
        /// Write to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Crop and resize an image to a fixed aspect ratio
    Crop {
        #[command(flatten)]
        args: CropArgs,
    },
}

/// Meta command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct MetaArgs {
    /// Route paths to resolve (e.g., /, /blogs/my-post)
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Load detail routes from the content directory (title, excerpt, tags, date)
    #[arg(short, long)]
    pub records: bool,

    /// Print composed head tags instead of JSON
    #[arg(long)]
    pub head: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Og command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct OgArgs {
    /// Card title
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Card type: blog | project | study | default
    #[arg(short = 'k', long = "type", default_value = "default")]
    pub kind: String,

    /// Page path shown in the footer
    #[arg(short, long, default_value = "")]
    pub path: String,

    /// Background image URL
    #[arg(short, long, value_hint = clap::ValueHint::Url)]
    pub image: Option<String>,

    /// Write to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Normalize command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct NormalizeArgs {
    /// Content file (HTML, or JSON in the legacy block format). Use `-` for stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Words per minute for the reading-time estimate
    #[arg(short, long)]
    pub wpm: Option<u32>,

    /// Print `{html, read_time, excerpt}` as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Crop command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CropArgs {
    /// Source image
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output image (format from extension: png, jpg, webp)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Preset: blog-cover | project | study | avatar, or a ratio like 3:2
    #[arg(short, long, default_value = "blog-cover")]
    pub aspect: String,

    /// Override the preset's maximum width in pixels
    #[arg(short, long)]
    pub width: Option<u32>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }
}
