use anyhow::{Context, Result};
use batchren_core::{
    prepare_batch, render_preview, BatchError, BatchRequest, NoticeResult, Operation,
    OutputFormatter, PreparedBatch,
};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use crate::cli::{BatchArgs, OutputFormat};

/// Run a prepend or replace batch. Returns the process exit code.
pub fn handle_batch(
    operation: Operation,
    dir: Option<PathBuf>,
    args: &BatchArgs,
    yes: bool,
    use_color: bool,
) -> Result<i32> {
    let request = BatchRequest::new(dir, operation);

    let prepared = match prepare_batch(&request) {
        Ok(prepared) => prepared,
        Err(e) if e.is_notice() => {
            let notice = NoticeResult {
                operation: request.operation.name().to_string(),
                message: e.to_string(),
            };
            let formatted = notice.format(args.output.into());
            match args.output {
                OutputFormat::Json => println!("{formatted}"),
                OutputFormat::Summary => {
                    if !args.quiet {
                        print!("{formatted}");
                    }
                },
            }
            return Ok(e.exit_code());
        },
        Err(e) => return Err(e.into()),
    };

    if args.dry_run {
        let preview = prepared
            .preview()
            .context("Failed to preview batch")?;
        match args.output {
            OutputFormat::Json => println!("{}", preview.format_json()),
            OutputFormat::Summary => {
                let rendered = render_preview(&preview, args.preview.into(), use_color);
                if !args.quiet && !rendered.is_empty() {
                    println!("{}", rendered.trim_end());
                }
            },
        }
        return Ok(0);
    }

    if !yes && !get_user_confirmation(&prepared)? {
        eprintln!("Aborted.");
        return Ok(0);
    }

    let report = prepared.execute();

    match args.output {
        OutputFormat::Json => println!("{}", report.format(args.output.into())),
        OutputFormat::Summary => {
            if args.quiet {
                for message in report.result.messages() {
                    eprintln!("⚠ {message}");
                }
            } else {
                print!("{}", report.format(args.output.into()));
            }
        },
    }

    Ok(if report.result.is_clean() { 0 } else { 1 })
}

fn get_user_confirmation(prepared: &PreparedBatch) -> Result<bool> {
    if !io::stdin().is_terminal() {
        return Err(BatchError::ConfirmationRefused.into());
    }
    confirm_with_input(prepared, &mut io::stdin().lock(), &mut io::stderr())
}

fn confirm_with_input<R: BufRead, W: Write>(
    prepared: &PreparedBatch,
    reader: &mut R,
    writer: &mut W,
) -> Result<bool> {
    write!(
        writer,
        "Rename {} files in {}? [y/N]: ",
        prepared.len(),
        prepared.directory.display()
    )
    .context("Failed to write prompt")?;
    writer.flush().context("Failed to flush prompt")?;

    let mut input = String::new();
    reader
        .read_line(&mut input)
        .context("Failed to read user input")?;
    let input = input.trim().to_lowercase();

    Ok(input == "y" || input == "yes")
}
