use std::process::ExitCode;

use clap::Parser;
use dotpath::Delimiter;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod input;
mod output;

use cli::{Cli, Commands};
use commands::{Context, read, write};

fn main() -> ExitCode {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dotpath=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = Context {
        delimiter: Delimiter::new(cli.delimiter),
        format: cli.format,
    };

    let result = match &cli.command {
        Commands::Get(args) => read::run_get(args, &ctx),
        Commands::Has(args) => read::run_has(args, &ctx),
        Commands::Flatten(args) => read::run_flatten(args, &ctx).map(|()| true),
        Commands::Sort(args) => read::run_sort(args, &ctx).map(|()| true),
        Commands::Set(args) => write::run_set(args, &ctx).map(|()| true),
        Commands::Delete(args) => write::run_delete(args, &ctx).map(|()| true),
        Commands::Push(args) => write::run_push(args, &ctx).map(|()| true),
        Commands::Merge(args) => write::run_merge(args, &ctx).map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
