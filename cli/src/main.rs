use clap::{Parser, Subcommand};
use miette::Result;

mod calc;
mod error;
mod filter;

use error::CliError;

/// exparse - evaluate expressions from the command line
#[derive(Parser, Debug)]
#[command(name = "exparse")]
#[command(about = "Parse and evaluate exparse expressions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single expression and print the result
    Calc(calc::CalcArgs),
    /// Copy the rows of delimited text on stdin that match an expression
    Filter(filter::FilterArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    use tracing_subscriber::{EnvFilter, fmt};

    // RUST_LOG controls the level, WARN when unset.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = match cli.command {
        Command::Calc(args) => calc::run(&args),
        Command::Filter(args) => filter::run(&args),
    };

    match result {
        Ok(()) => Ok(()),
        // Already rendered with the source underlined.
        Err(CliError::Reported) => std::process::exit(1),
        Err(e) => Err(e.into()),
    }
}
