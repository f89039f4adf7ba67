//! Loading definitions documents and include-script directories.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use scriptdefs_core::{LibraryTable, ScriptDefs};

use crate::error::{CliError, Result};

/// Extension of NWScript include files, compared case-insensitively.
const SCRIPT_EXTENSION: &str = "nss";

/// Load a definitions JSON document. `-` reads stdin.
pub fn load_defs(path: &Path) -> Result<ScriptDefs> {
    let text = read_text(path)?;
    let defs = ScriptDefs::from_json(&text).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        kotor_constants = defs.kotor.constants.len(),
        kotor_functions = defs.kotor.functions.len(),
        tsl_constants = defs.tsl.constants.len(),
        tsl_functions = defs.tsl.functions.len(),
        "loaded definitions"
    );
    Ok(defs)
}

fn read_text(path: &Path) -> Result<String> {
    let read_err = |source| CliError::Read {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(read_err)?;
        return Ok(text);
    }
    fs::read_to_string(path).map_err(read_err)
}

/// Load every `.nss` file directly under `dir`.
///
/// Keys are lower-cased file stems (`k_inc_generic`), the name an `#include`
/// directive looks up; contents are kept as raw bytes. Two files whose
/// stems differ only by case are rejected.
pub fn load_library(dir: &Path) -> Result<LibraryTable> {
    let read_err = |source| CliError::Read {
        path: dir.to_path_buf(),
        source,
    };

    if !dir.is_dir() {
        return Err(CliError::NotADirectory(dir.to_path_buf()));
    }

    let mut scripts = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        if entry.file_type().map_err(read_err)?.is_file() && is_script(&path) {
            scripts.push(path);
        }
    }
    scripts.sort();

    let mut table = LibraryTable::new();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    for path in scripts {
        let Some(stem) = path.file_stem().and_then(|n| n.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping file with non-UTF-8 name");
            continue;
        };
        let key = stem.to_lowercase();
        if let Some(first) = seen.get(&key) {
            return Err(CliError::DuplicateInclude {
                key,
                first: first.clone(),
                second: path,
            });
        }

        let content = fs::read(&path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        table.insert(key.as_str(), content);
        seen.insert(key, path);
    }

    if table.is_empty() {
        tracing::warn!(dir = %dir.display(), "no .nss include scripts found");
    }
    tracing::debug!(dir = %dir.display(), files = table.len(), "loaded include scripts");
    Ok(table)
}

fn is_script(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SCRIPT_EXTENSION))
}
