//! Build-system metadata the environment is constructed over.

use std::path::{Path, PathBuf};

use lint_env_spi::EnvError;

/// One dependency artifact known to the build.
#[derive(Debug, Clone)]
pub struct Artifact {
    id: String,
    file: Option<PathBuf>,
}

impl Artifact {
    /// An artifact resolved to a local file.
    #[must_use]
    pub fn new(id: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            file: Some(file.into()),
        }
    }

    /// An artifact the build knows about but has no local file for.
    #[must_use]
    pub fn unresolved(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file: None,
        }
    }

    /// Identifier of the artifact, e.g. `org.example:widget:1.2`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Local file of the artifact, when resolution produced one.
    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

/// What the host build system must disclose about the project.
///
/// The environment never queries the build tool itself; a host adapts
/// its native project object to this trait once and everything else
/// reads through it.
pub trait Project: Send + Sync {
    /// Root directory of the project.
    fn basedir(&self) -> &Path;

    /// Directory receiving build outputs.
    fn outdir(&self) -> &Path;

    /// Runtime classpath elements in build-system order.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::ClasspathResolution`] when the dependency
    /// graph has not been resolved, so the elements cannot be listed.
    fn runtime_classpath(&self) -> Result<Vec<String>, EnvError>;

    /// Dependency artifacts known to the build, resolved or not.
    fn artifacts(&self) -> &[Artifact];
}

/// Plain-value [`Project`] for hosts with static metadata and for tests.
#[derive(Debug, Clone)]
pub struct ProjectModel {
    basedir: PathBuf,
    outdir: PathBuf,
    runtime: Vec<String>,
    artifacts: Vec<Artifact>,
    failure: Option<String>,
}

impl ProjectModel {
    /// Creates a model rooted at `basedir` with outputs under
    /// `<basedir>/target`.
    #[must_use]
    pub fn new(basedir: impl Into<PathBuf>) -> Self {
        let basedir = basedir.into();
        let outdir = basedir.join("target");
        Self {
            basedir,
            outdir,
            runtime: Vec::new(),
            artifacts: Vec::new(),
            failure: None,
        }
    }

    /// Overrides the build-output directory.
    #[must_use]
    pub fn with_outdir(mut self, outdir: impl Into<PathBuf>) -> Self {
        self.outdir = outdir.into();
        self
    }

    /// Sets the runtime classpath elements, replacing any previous list.
    #[must_use]
    pub fn with_runtime_classpath<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.runtime = elements.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a resolved artifact.
    #[must_use]
    pub fn with_artifact(mut self, id: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        self.artifacts.push(Artifact::new(id, file));
        self
    }

    /// Appends an artifact without a local file.
    #[must_use]
    pub fn with_unresolved(mut self, id: impl Into<String>) -> Self {
        self.artifacts.push(Artifact::unresolved(id));
        self
    }

    /// Marks dependency resolution as failed for the given reason.
    ///
    /// Every later [`runtime_classpath`](Project::runtime_classpath)
    /// call reports the failure instead of a list.
    #[must_use]
    pub fn with_resolution_failure(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }
}

impl Project for ProjectModel {
    fn basedir(&self) -> &Path {
        &self.basedir
    }

    fn outdir(&self) -> &Path {
        &self.outdir
    }

    fn runtime_classpath(&self) -> Result<Vec<String>, EnvError> {
        match &self.failure {
            Some(reason) => Err(EnvError::ClasspathResolution {
                reason: reason.clone(),
            }),
            None => Ok(self.runtime.clone()),
        }
    }

    fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outdir_defaults_to_target() {
        let model = ProjectModel::new("/work/demo");
        assert_eq!(model.outdir(), Path::new("/work/demo/target"));
    }

    #[test]
    fn with_outdir_overrides_default() {
        let model = ProjectModel::new("/work/demo").with_outdir("/tmp/out");
        assert_eq!(model.outdir(), Path::new("/tmp/out"));
    }

    #[test]
    fn artifacts_keep_insertion_order() {
        let model = ProjectModel::new("/work/demo")
            .with_artifact("a:first:1", "/repo/first.jar")
            .with_unresolved("b:second:2")
            .with_artifact("c:third:3", "/repo/third.jar");

        let ids: Vec<&str> = model.artifacts().iter().map(Artifact::id).collect();
        assert_eq!(ids, vec!["a:first:1", "b:second:2", "c:third:3"]);
        assert!(model.artifacts()[1].file().is_none());
    }

    #[test]
    fn resolution_failure_surfaces_as_error() {
        let model = ProjectModel::new("/work/demo")
            .with_runtime_classpath(["/work/demo/target/classes"])
            .with_resolution_failure("offline build");

        let err = model.runtime_classpath().expect_err("failure configured");
        assert!(matches!(err, EnvError::ClasspathResolution { .. }));
        assert!(err.to_string().contains("offline build"));
    }
}
