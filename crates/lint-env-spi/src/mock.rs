//! Throwaway environment for validator tests.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use walkdir::WalkDir;

use crate::environment::{Environment, DEFAULT_ENCODING};
use crate::error::EnvError;
use crate::exclude;
use crate::loader::{Loader, LoaderBuilder};

/// In-memory stand-in for a real build, backed by a temporary directory.
///
/// The directory and everything written into it are removed when the
/// mock is dropped.
///
/// # Examples
///
/// ```
/// use lint_env_spi::{Environment, MockEnvironment};
///
/// let env = MockEnvironment::new()?
///     .with_file("src/main.rs", b"fn main() {}")?
///     .with_param("threshold", "10");
/// assert_eq!(env.param("threshold", "0"), "10");
/// assert_eq!(env.files("*.rs")?.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct MockEnvironment {
    dir: TempDir,
    outdir: PathBuf,
    params: HashMap<String, String>,
    classpath: Vec<String>,
    excludes: Vec<String>,
    encoding: String,
}

impl MockEnvironment {
    /// Creates a fresh environment rooted in a new temporary directory.
    ///
    /// # Errors
    ///
    /// Fails when the temporary directory cannot be created.
    pub fn new() -> io::Result<Self> {
        let dir = TempDir::new()?;
        let outdir = dir.path().join("target");
        fs::create_dir_all(&outdir)?;
        Ok(Self {
            dir,
            outdir,
            params: HashMap::new(),
            classpath: Vec::new(),
            excludes: Vec::new(),
            encoding: DEFAULT_ENCODING.to_string(),
        })
    }

    /// Writes a file under the base directory, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Fails when the file or its parents cannot be created.
    pub fn with_file(self, name: &str, content: &[u8]) -> io::Result<Self> {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(self)
    }

    /// Sets a configuration parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Appends a classpath entry.
    #[must_use]
    pub fn with_classpath(mut self, entry: impl Into<String>) -> Self {
        self.classpath.push(entry.into());
        self
    }

    /// Appends an exclusion entry in `checker:pattern` form.
    #[must_use]
    pub fn with_excludes(mut self, entry: impl Into<String>) -> Self {
        self.excludes.push(entry.into());
        self
    }

    /// Overrides the reported source encoding.
    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }
}

impl Environment for MockEnvironment {
    fn basedir(&self) -> &Path {
        self.dir.path()
    }

    fn outdir(&self) -> &Path {
        &self.outdir
    }

    fn param(&self, name: &str, default: &str) -> String {
        self.params
            .get(name)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn encoding(&self) -> String {
        if self.encoding.is_empty() {
            DEFAULT_ENCODING.to_string()
        } else {
            self.encoding.clone()
        }
    }

    fn classpath(&self) -> Result<Vec<String>, EnvError> {
        Ok(self.classpath.clone())
    }

    fn loader(&self) -> Result<Loader, EnvError> {
        LoaderBuilder::new().entries(self.classpath.clone()).build()
    }

    fn files(&self, pattern: &str) -> Result<Vec<PathBuf>, EnvError> {
        let matcher = glob::Pattern::new(pattern).map_err(|source| EnvError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        let mut found = Vec::new();
        for entry in WalkDir::new(self.dir.path()) {
            let entry = entry.map_err(|source| EnvError::Walk {
                path: self.dir.path().to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if matcher.matches(&name) {
                found.push(entry.into_path());
            }
        }
        found.sort();
        Ok(found)
    }

    fn excludes(&self, checker: &str) -> BTreeSet<String> {
        exclude::patterns(&self.excludes, checker)
    }
}
