//! Classpath aggregation over project metadata.

use lint_env_spi::EnvError;
use tracing::debug;

use crate::project::Project;

/// Collects the project classpath as URL-safe entries.
///
/// Runtime elements come first, in build-system order, followed by the
/// file of every resolved artifact. Artifacts without a file are
/// skipped with a `debug!` trace. Entries are not deduplicated.
///
/// # Errors
///
/// Returns [`EnvError::ClasspathResolution`] when the project cannot
/// enumerate its runtime elements.
pub fn aggregate(project: &dyn Project) -> Result<Vec<String>, EnvError> {
    let runtime = project.runtime_classpath()?;
    let mut entries = Vec::with_capacity(runtime.len() + project.artifacts().len());
    for element in &runtime {
        entries.push(normalize_entry(element));
    }
    for artifact in project.artifacts() {
        match artifact.file() {
            Some(file) => entries.push(normalize_entry(&file.to_string_lossy())),
            None => debug!("classpath: skipping unresolved artifact {}", artifact.id()),
        }
    }
    Ok(entries)
}

/// Rewrites one raw path into the URL-safe entry form.
///
/// Platform separators become `/` and spaces become `%20`, so the
/// result can be embedded in a `file:///` URL as-is.
#[must_use]
pub fn normalize_entry(raw: &str) -> String {
    raw.replace(std::path::MAIN_SEPARATOR, "/").replace(' ', "%20")
}
