//! Source-file location under the project tree.

use std::path::{Path, PathBuf};

use lint_env_spi::EnvError;
use walkdir::WalkDir;

/// Directories under the base directory that hold sources.
const SOURCE_ROOTS: &[&str] = &["src"];

/// Collects files under the source roots whose names match a wildcard
/// pattern such as `*.java`, sorted by path.
///
/// Every subdirectory is descended into; a source root that does not
/// exist is skipped silently and a pattern nothing matches yields an
/// empty list.
///
/// # Errors
///
/// Returns [`EnvError::Pattern`] when the pattern does not compile and
/// [`EnvError::Walk`] when a source root cannot be traversed.
pub fn files(basedir: &Path, pattern: &str) -> Result<Vec<PathBuf>, EnvError> {
    let matcher = glob::Pattern::new(pattern).map_err(|source| EnvError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let mut found = Vec::new();
    for root in SOURCE_ROOTS {
        let root = basedir.join(root);
        if !root.is_dir() {
            continue;
        }
        for entry in WalkDir::new(&root) {
            let entry = entry.map_err(|source| EnvError::Walk {
                path: root.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if matcher.matches(&entry.file_name().to_string_lossy()) {
                found.push(entry.into_path());
            }
        }
    }
    found.sort();
    Ok(found)
}
