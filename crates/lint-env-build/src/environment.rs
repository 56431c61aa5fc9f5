//! The environment façade handed to validators by the host.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use lint_env_spi::{exclude, EnvError, Environment, Loader, LoaderBuilder, DEFAULT_ENCODING};

use crate::classpath;
use crate::config::EnvConfig;
use crate::locate;
use crate::project::Project;

/// [`Environment`] implementation over a real build.
///
/// Constructed once per validation run from the host's [`Project`]
/// adapter and an [`EnvConfig`]. Configuration happens through the
/// `&mut self` setters before the value is shared; after that every
/// accessor is `&self` and safe to call from concurrent validators.
pub struct BuildEnvironment {
    project: Arc<dyn Project>,
    config: EnvConfig,
    encoding: RwLock<String>,
    parent: Option<Arc<Loader>>,
}

impl BuildEnvironment {
    /// Creates an environment over the given project and configuration.
    #[must_use]
    pub fn new(project: Arc<dyn Project>, config: EnvConfig) -> Self {
        let encoding = config.encoding.clone().unwrap_or_default();
        Self {
            project,
            config,
            encoding: RwLock::new(encoding),
            parent: None,
        }
    }

    /// Supplies the parent loader consulted when the project classpath
    /// cannot satisfy a lookup.
    #[must_use]
    pub fn with_parent_loader(mut self, parent: Arc<Loader>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// The project this environment was built over.
    #[must_use]
    pub fn project(&self) -> &dyn Project {
        self.project.as_ref()
    }

    /// The raw parameter bag.
    #[must_use]
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.config.params
    }

    /// Assertion queries for validators, verbatim.
    #[must_use]
    pub fn asserts(&self) -> &[String] {
        &self.config.asserts
    }

    /// Sets one configuration parameter.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.config.params.insert(name.into(), value.into());
    }

    /// Replaces the exclusion entries.
    pub fn set_excludes<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.excludes = entries.into_iter().map(Into::into).collect();
    }

    /// Replaces the assertion queries.
    pub fn set_asserts<I, S>(&mut self, queries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.asserts = queries.into_iter().map(Into::into).collect();
    }

    /// Overrides the source encoding.
    ///
    /// An empty value reads back as [`DEFAULT_ENCODING`].
    pub fn set_encoding(&mut self, encoding: impl Into<String>) {
        *self
            .encoding
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner) = encoding.into();
    }
}

impl Environment for BuildEnvironment {
    fn basedir(&self) -> &Path {
        self.project.basedir()
    }

    fn outdir(&self) -> &Path {
        self.project.outdir()
    }

    fn param(&self, name: &str, default: &str) -> String {
        self.config.param(name, default).to_string()
    }

    /// Source encoding, healing an unset value to UTF-8 on first read.
    ///
    /// The heal persists, so later reads take the fast path.
    fn encoding(&self) -> String {
        {
            let current = self
                .encoding
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if !current.is_empty() {
                return current.clone();
            }
        }
        let mut current = self
            .encoding
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another reader may have healed between the two locks.
        if current.is_empty() {
            *current = DEFAULT_ENCODING.to_string();
        }
        current.clone()
    }

    fn classpath(&self) -> Result<Vec<String>, EnvError> {
        classpath::aggregate(self.project.as_ref())
    }

    fn loader(&self) -> Result<Loader, EnvError> {
        let mut builder = LoaderBuilder::new().entries(self.classpath()?);
        if let Some(parent) = &self.parent {
            builder = builder.parent(Arc::clone(parent));
        }
        builder.build()
    }

    fn files(&self, pattern: &str) -> Result<Vec<PathBuf>, EnvError> {
        locate::files(self.basedir(), pattern)
    }

    fn excludes(&self, checker: &str) -> BTreeSet<String> {
        exclude::patterns(&self.config.excludes, checker)
    }
}
