//! Comware to AOS-CX conversion command.
//!
//! ## Conversion Pipeline
//!
//! 1. **Guard**: Refuse to overwrite the input file
//! 2. **Load**: Read the source text, the site profile and optional edits
//! 3. **Parse & Normalize**: Build the model keyed by target port addresses
//! 4. **Edit**: Apply manual description and LAG membership corrections
//! 5. **Generate**: Render the AOS-CX configuration
//! 6. **Write**: Output file or stdout, then summary and warnings on stderr

use std::fs;

use anyhow::{bail, Context, Result};
use cli_config_core::write_file;

use crate::cli::ConvertArgs;
use crate::path_guard::ensure_output_not_input;
use cwcx_convert::conversion_summary::{render as render_conversion_summary, summarize};
use cwcx_convert::edits::{apply_edits, load_edits};
use cwcx_convert::generate::{generate, GenerateParams};
use cwcx_convert::normalize::parse_config;
use cwcx_convert::parser::extract_hostname;
use cwcx_convert::profile::{default_profile, load_profile};
use cwcx_convert::report::render_warnings;
use cwcx_convert::topology::StackTopology;

/// Execute the conversion workflow.
///
/// Dropped ports and rejected edits are reported as warnings and do not stop
/// the conversion unless `--strict` is set, in which case nothing is written.
///
/// # Errors
///
/// Returns error if:
/// - The output path is the input file
/// - The input, profile or edits file cannot be read or parsed
/// - `--strict` is set and any warning was produced
/// - The output file cannot be written
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    if let Some(output) = &args.output {
        ensure_output_not_input(output, &args.input)?;
    }

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let profile = match &args.profile {
        Some(path) => load_profile(path)?,
        None => default_profile(),
    };
    let topology = StackTopology::from_models(&args.stack.units);

    let mut outcome = parse_config(&text, &topology);
    let edit_warnings = match &args.edits {
        Some(path) => {
            let edits = load_edits(path)?;
            apply_edits(&mut outcome.model, &edits)
        }
        None => Vec::new(),
    };

    let hostname = args
        .hostname
        .clone()
        .or_else(|| extract_hostname(&text))
        .unwrap_or_else(|| profile.defaults.hostname.clone());
    let password = args
        .password
        .clone()
        .unwrap_or_else(|| profile.defaults.password.clone());
    let params = GenerateParams {
        hostname,
        password,
        topology,
    };

    let summary = summarize(&outcome);
    if !outcome.warnings.is_empty() {
        eprintln!("{}", render_warnings(&outcome.warnings));
    }
    if !edit_warnings.is_empty() {
        eprintln!("{}", render_warnings(&edit_warnings));
    }
    let warning_count = outcome.warnings.len() + edit_warnings.len();
    if args.strict && warning_count > 0 {
        bail!("strict mode failed: {warning_count} warning(s)");
    }

    let rendered = generate(&outcome.model, &params, &profile);
    match &args.output {
        Some(path) => {
            write_file(&rendered, path)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => println!("{rendered}"),
    }

    eprintln!("{}", render_conversion_summary(summary));
    Ok(())
}
