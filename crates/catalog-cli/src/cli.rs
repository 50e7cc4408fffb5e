//! CLI argument definitions for the catalog converter.

use std::path::PathBuf;

use catalog_report::DEFAULT_TITLE;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lego-catalog",
    version,
    about = "LEGO catalog converter - turn a sets spreadsheet into JSON and LaTeX",
    long_about = "Convert a LEGO sets catalog (CSV or JSON) into report documents.\n\n\
                  Produces normalized JSON, a one-page-per-set catalog, an inventory\n\
                  table with state counters, or a simple name/description listing."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a CSV catalog to cleaned-up JSON.
    Json(JsonArgs),

    /// Render one LaTeX page per set that is ready to build.
    Catalog(DocumentArgs),

    /// Render a LaTeX inventory table of every set with state counters.
    Inventory(DocumentArgs),

    /// Render a LaTeX name/description table.
    Simple(SimpleArgs),

    /// Print how many sets are in each state.
    Stats(StatsArgs),
}

#[derive(Parser)]
pub struct JsonArgs {
    /// Input CSV file (a JSON catalog is passed through unchanged).
    #[arg(short = 'i', long = "input", value_name = "PATH", default_value = "lego-sets.csv")]
    pub input: PathBuf,

    /// Output JSON file.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "data/catalog.json"
    )]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct DocumentArgs {
    /// Input CSV or JSON file.
    #[arg(short = 'i', long = "input", value_name = "PATH", default_value = "lego-sets.csv")]
    pub input: PathBuf,

    /// Output .tex file.
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = "catalog.tex")]
    pub output: PathBuf,

    /// Document title.
    #[arg(short = 't', long = "title", default_value = DEFAULT_TITLE)]
    pub title: String,
}

#[derive(Parser)]
pub struct SimpleArgs {
    /// Input JSON or CSV file with `name` and `description` columns.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        default_value = "data/catalog.json"
    )]
    pub input: PathBuf,

    /// Output .tex file.
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = "catalog.tex")]
    pub output: PathBuf,

    /// Document title.
    #[arg(short = 't', long = "title", default_value = DEFAULT_TITLE)]
    pub title: String,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Input CSV or JSON file.
    #[arg(short = 'i', long = "input", value_name = "PATH", default_value = "lego-sets.csv")]
    pub input: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
