//! Stylesheet discovery
//!
//! Expands CLI path arguments into the list of stylesheets to process.
//! Files are taken as given; directories are walked recursively for `.css`
//! files, skipping generated `.rtl.` overrides.

use crate::error::RtlcssError;
use crate::result::Result;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Check whether a path already names a generated override stylesheet
pub fn is_override_stylesheet(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.contains(".rtl."))
}

fn is_stylesheet(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("css")
}

/// Expand files and directories into a deterministic stylesheet list
///
/// Explicit file arguments are kept even without a `.css` extension (the
/// caller decides what to do with them); walked directory entries must be
/// `.css` files and must not be overrides. Results from each directory are
/// sorted for stable output.
pub fn discover_stylesheets(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            for entry in WalkDir::new(path) {
                let entry = entry.map_err(|err| {
                    RtlcssError::io_error(path, std::io::Error::other(err))
                })?;
                let entry_path = entry.path();
                if entry.file_type().is_file()
                    && is_stylesheet(entry_path)
                    && !is_override_stylesheet(entry_path)
                {
                    found.push(entry_path.to_path_buf());
                }
            }
            found.sort();
            debug!("discovered {} stylesheets under {}", found.len(), path.display());
            out.extend(found);
        } else {
            out.push(path.clone());
        }
    }
    Ok(out)
}
