use anyhow::{Context, Result};
use batchren_core::{BatchError, Operation, OutputFormatter, VersionResult};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod batch;
mod cli;
mod list;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let use_color = !cli.no_color && io::stdout().is_terminal();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }

    let result = match cli.command {
        Commands::List { folder, output } => {
            list::handle_list(folder.dir.as_deref(), output).map(|()| 0)
        },

        Commands::Prepend {
            text,
            folder,
            batch,
        } => batch::handle_batch(
            Operation::prepend(&text),
            folder.dir,
            &batch,
            cli.yes,
            use_color,
        ),

        Commands::Replace {
            find,
            replace_with,
            folder,
            batch,
        } => batch::handle_batch(
            Operation::replace(&find, &replace_with),
            folder.dir,
            &batch,
            cli.yes,
            use_color,
        ),

        Commands::Version { output } => handle_version(output).map(|()| 0),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code_for(&e));
        },
    }
}

/// `RUST_LOG` wins; otherwise -v picks the level and logging is off by default.
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "off",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn exit_code_for(e: &anyhow::Error) -> i32 {
    e.downcast_ref::<BatchError>()
        .map_or(3, BatchError::exit_code)
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(())
}
