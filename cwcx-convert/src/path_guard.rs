use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Refuse to write the generated config over the source config.
pub fn ensure_output_not_input(output: &Path, input: &Path) -> Result<()> {
    let out = comparable(output)
        .with_context(|| format!("failed to resolve output path {}", output.display()))?;
    let src = comparable(input)
        .with_context(|| format!("failed to resolve input path {}", input.display()))?;
    if out == src {
        bail!(
            "refusing to overwrite source config: output {} is the input file",
            output.display()
        );
    }
    Ok(())
}

fn comparable(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }
    // Not on disk yet: anchor relative paths at the working directory.
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir().context("current_dir")?.join(path))
    }
}
