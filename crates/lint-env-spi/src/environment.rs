//! The contract every validator sees its build through.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::EnvError;
use crate::loader::Loader;
use crate::pattern::PathMatcher;

/// Encoding reported when the build declares none.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Read-only view of the build a validator runs inside.
///
/// Validators never touch the build system directly. Everything they may
/// observe, the project layout, compiled-code roots, configuration
/// parameters and exclusion rules, arrives through this trait, so the
/// same checks run unchanged against a real build or against
/// [`MockEnvironment`](crate::MockEnvironment) in tests.
pub trait Environment: Send + Sync {
    /// Root directory of the project under validation.
    fn basedir(&self) -> &Path;

    /// Directory receiving build outputs.
    fn outdir(&self) -> &Path;

    /// Directory for scratch files produced during validation.
    ///
    /// Shares the build-output directory so scratch files are removed by
    /// an ordinary clean.
    fn tempdir(&self) -> &Path {
        self.outdir()
    }

    /// Looks up a configuration parameter, falling back to `default`
    /// when the build defines no value for `name`.
    fn param(&self, name: &str, default: &str) -> String;

    /// Source encoding of the project.
    ///
    /// Never empty: an unset encoding reads as [`DEFAULT_ENCODING`].
    fn encoding(&self) -> String;

    /// Classpath entries of the build, in build-system order.
    ///
    /// Each entry uses forward slashes with spaces encoded as `%20`, the
    /// form [`LoaderBuilder`](crate::LoaderBuilder) consumes. Entries
    /// are not deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::ClasspathResolution`] when the build system
    /// cannot enumerate its runtime elements.
    fn classpath(&self) -> Result<Vec<String>, EnvError>;

    /// Artifact loader scoped to [`classpath`](Self::classpath).
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::ClasspathResolution`] when the classpath
    /// cannot be enumerated and [`EnvError::ClasspathUrl`] when an entry
    /// does not form a well-formed URL.
    fn loader(&self) -> Result<Loader, EnvError>;

    /// Files under the source tree whose names match a wildcard pattern
    /// such as `*.rs`, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Pattern`] when the pattern does not compile
    /// and [`EnvError::Walk`] when the tree cannot be traversed.
    fn files(&self, pattern: &str) -> Result<Vec<PathBuf>, EnvError>;

    /// Exclusion patterns configured for one checker.
    ///
    /// Entries use the `checker:pattern` form; only the patterns
    /// addressed to `checker` are returned.
    fn excludes(&self, checker: &str) -> BTreeSet<String>;

    /// Whether `checker` must skip the file at `candidate`.
    ///
    /// True when any exclusion pattern for the checker matches the
    /// candidate path.
    fn is_excluded(&self, checker: &str, candidate: &str) -> bool {
        self.excludes(checker)
            .iter()
            .any(|pattern| PathMatcher::new(pattern).matches(candidate))
    }
}
