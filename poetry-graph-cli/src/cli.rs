use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::GraphFormat;

#[derive(Parser)]
#[command(name = "poetry", about = "Poetry-style graph notation tool", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to config file (defaults to ./poetry.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Where to read poetry text from.
#[derive(Args)]
pub struct InputArgs {
    /// Input file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Inline poetry text
    #[arg(short = 'e', long = "expr", conflicts_with = "file")]
    pub expr: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project poetry text onto nodes, edges and edge labels
    Graph {
        #[command(flatten)]
        input: InputArgs,

        /// Output format (json, dot or table)
        #[arg(long, value_enum)]
        format: Option<GraphFormat>,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Show the extracted triples as JSON
    Triples {
        #[command(flatten)]
        input: InputArgs,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Rewrite poetry text in canonical form
    Fmt {
        #[command(flatten)]
        input: InputArgs,
    },
}
