//! LEGO catalog converter CLI.

use catalog_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use catalog_cli::commands::{run_catalog, run_inventory, run_json, run_simple, run_stats};
use catalog_cli::error::CliError;
use catalog_cli::logging::{LogConfig, LogFormat, init_logging};
use catalog_cli::summary::{print_conversion, print_stats};
use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(source) = init_logging(&log_config) {
        std::process::exit(exit_code(&Err(CliError::LogInit { source })));
    }
    let outcome = match &cli.command {
        Command::Json(args) => run_json(args).map(|result| print_conversion(&result)),
        Command::Catalog(args) => run_catalog(args).map(|result| print_conversion(&result)),
        Command::Inventory(args) => run_inventory(args).map(|result| print_conversion(&result)),
        Command::Simple(args) => run_simple(args).map(|result| print_conversion(&result)),
        Command::Stats(args) => run_stats(args).map(|result| print_stats(&result)),
    };
    std::process::exit(exit_code(&outcome));
}

fn exit_code(outcome: &Result<(), CliError>) -> i32 {
    match outcome {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            error.exit_code()
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
