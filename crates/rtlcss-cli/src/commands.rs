//! CLI command implementation
//!
//! Drives the core pipeline per input file: read, parse, mirror, render, and
//! write the override next to the original. Per-file failures are logged and
//! processing continues; the command fails at the end if anything failed.

use anyhow::{Context, Result, bail};
use rtlcss_core::exclusions::ExclusionTable;
use rtlcss_core::{discovery, generate_override};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub fn generate_command(
    paths: &[PathBuf],
    exclusions_path: Option<&Path>,
    to_stdout: bool,
) -> Result<()> {
    let exclusions = match exclusions_path {
        Some(path) => ExclusionTable::load(path)
            .with_context(|| format!("loading exclusion list {}", path.display()))?,
        None => ExclusionTable::new(),
    };

    let inputs = discovery::discover_stylesheets(paths)?;
    debug!("processing {} stylesheets", inputs.len());

    let mut failures = 0usize;
    for input in &inputs {
        if discovery::is_override_stylesheet(input) {
            info!("skipping override stylesheet {}", input.display());
            continue;
        }
        if let Err(err) = process_stylesheet(input, &exclusions, to_stdout) {
            warn!("failed to process {}: {err:#}", input.display());
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} of {} stylesheets failed", inputs.len());
    }
    Ok(())
}

fn process_stylesheet(input: &Path, exclusions: &ExclusionTable, to_stdout: bool) -> Result<()> {
    info!("generating RTL override for {}", input.display());
    let source = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let output = generate_override(&source, exclusions)?;

    if to_stdout {
        print!("{output}");
        return Ok(());
    }

    let output_path = derive_output_path(input);
    std::fs::write(&output_path, output)
        .with_context(|| format!("writing {}", output_path.display()))?;
    info!("saved {}", output_path.display());
    Ok(())
}

/// Derive the override file name: collapse a `.min.` segment and replace the
/// `.css` suffix with `.rtl.css`
fn derive_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = name.replace(".min.", ".");
    let name = match name.strip_suffix(".css") {
        Some(stem) => format!("{stem}.rtl.css"),
        None => format!("{name}.rtl.css"),
    };
    input.with_file_name(name)
}
