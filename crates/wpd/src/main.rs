//! wpd CLI - webpack docs content tooling.
//!
//! Provides commands for:
//! - `page`: Resolve the title and description of a page
//! - `pages`: List pages or top-level sections of the content tree
//! - `feed`: Generate the blog RSS feed
//! - `copy-text`: Print the clipboard text of a code block

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CopyTextArgs, FeedArgs, PageArgs, PagesArgs};
use output::Output;

/// wpd - webpack docs content tooling.
#[derive(Parser)]
#[command(name = "wpd", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by all commands.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover wpd.toml).
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Content index JSON (overrides config).
    #[arg(long, global = true, env = "WPD_CONTENT")]
    pub(crate) content: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved title and description of a page.
    Page(PageArgs),
    /// List pages of the content tree.
    Pages(PagesArgs),
    /// Generate the blog RSS feed.
    Feed(FeedArgs),
    /// Print the text a code block's copy button would copy.
    CopyText(CopyTextArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Page(args) => args.execute(&cli.global),
        Commands::Pages(args) => args.execute(&cli.global),
        Commands::Feed(args) => args.execute(&cli.global),
        Commands::CopyText(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
