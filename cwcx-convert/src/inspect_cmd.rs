use std::fs;

use anyhow::{Context, Result};

use crate::cli::{InspectArgs, OutputFormat};
use cwcx_convert::normalize::parse_config;
use cwcx_convert::report::{render_tables, render_warnings};
use cwcx_convert::topology::StackTopology;

pub fn run_inspect(args: InspectArgs) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let topology = StackTopology::from_models(&args.stack.units);
    let outcome = parse_config(&text, &topology);

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        OutputFormat::Text => {
            println!("{}", render_tables(&outcome.model, args.section.map(Into::into)));
            if !outcome.warnings.is_empty() {
                eprintln!("{}", render_warnings(&outcome.warnings));
            }
        }
    }
    Ok(())
}
