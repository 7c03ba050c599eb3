use anyhow::Result;
use batchren_core::{list_operation, OutputFormatter};
use std::path::Path;

use crate::OutputFormat;

pub fn handle_list(dir: Option<&Path>, output: OutputFormat) -> Result<()> {
    let result = list_operation(dir)?;

    let formatted = result.format(output.into());
    match output {
        OutputFormat::Json => println!("{formatted}"),
        OutputFormat::Summary => print!("{formatted}"),
    }

    Ok(())
}
