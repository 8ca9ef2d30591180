use std::fs;

use anyhow::{Context, Result};

use crate::cli::{GridArgs, OutputFormat};
use cwcx_convert::grid::{render_grid, unit_grid, UnitGrid};
use cwcx_convert::normalize::parse_config;
use cwcx_convert::topology::StackTopology;

pub fn run_grid(args: GridArgs) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let topology = StackTopology::from_models(&args.stack.units);
    let outcome = parse_config(&text, &topology);

    match args.format {
        OutputFormat::Json => {
            let grids: Vec<UnitGrid> = topology
                .units()
                .iter()
                .map(|unit| unit_grid(&outcome.model, unit))
                .collect();
            println!("{}", serde_json::to_string_pretty(&grids)?);
        }
        OutputFormat::Text => println!("{}", render_grid(&outcome.model, &topology)),
    }
    Ok(())
}
