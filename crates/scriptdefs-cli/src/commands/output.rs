//! Writing generated documents.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{CliError, Result};

/// Write `text` to `path`, or to stdout when no path is given.
pub fn write_document(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => write_atomic(path, text),
        None => write_stdout(text).map_err(|source| CliError::Write {
            path: "<stdout>".into(),
            source,
        }),
    }
}

fn write_stdout(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

/// Replace `path` with `text` (UTF-8, no BOM).
///
/// The temp file lives next to the target so the final rename stays on one
/// filesystem. A failed write leaves any previous file untouched.
pub fn write_atomic(path: &Path, text: &str) -> Result<()> {
    let write_err = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_err)?;

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(text.as_bytes()).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote document");
    Ok(())
}
