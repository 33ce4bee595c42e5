mod cli;
mod commands;
mod config;
mod error;
mod input;
mod output;

use clap::Parser;
use cli::{Cli, Commands, InputArgs};
use error::exit_with_error;
use output::OutputSettings;

fn init_tracing(cli: &Cli) {
    // --quiet   → "off"
    // --verbose → RUST_LOG if set, otherwise "info"
    // default   → "off", so logs never mix into piped output
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> error::CliResult<()> {
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Graph {
            input,
            format,
            compact,
        } => {
            let settings = OutputSettings::resolve(format, compact, &config);
            commands::graph::run(&source(&input)?, settings)
        }

        Commands::Triples { input, compact } => {
            let settings = OutputSettings::resolve(None, compact, &config);
            commands::triples::run(&source(&input)?, settings.pretty)
        }

        Commands::Fmt { input } => commands::fmt::run(&source(&input)?),
    }
}

fn source(args: &InputArgs) -> error::CliResult<input::InputSource> {
    input::resolve_input(args.expr.as_deref(), args.file.as_deref())
}
