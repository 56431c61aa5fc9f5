//! # lint-env-build
//!
//! Host-side implementation of the validator build environment.
//!
//! A build-tool host adapts its project object to [`Project`] (or uses
//! [`ProjectModel`] directly), gathers settings into an [`EnvConfig`],
//! and hands validators a [`BuildEnvironment`]:
//!
//! - [`BuildEnvironment`] implements the `Environment` contract over
//!   real build metadata
//! - [`classpath`] aggregates runtime elements and resolved artifacts
//! - [`locate`] walks the source roots for files matching a wildcard
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use lint_env_build::{BuildEnvironment, EnvConfig, Environment, ProjectModel};
//!
//! let project = ProjectModel::new("/work/demo")
//!     .with_runtime_classpath(["/work/demo/target/classes"]);
//! let config = EnvConfig::new()
//!     .with_param("license", "MIT")
//!     .with_exclude("style:*/generated/*");
//! let env = BuildEnvironment::new(Arc::new(project), config);
//!
//! assert_eq!(env.param("license", "none"), "MIT");
//! assert!(env.is_excluded("style", "src/generated/Code.java"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod environment;
mod project;

pub mod classpath;
pub mod locate;

pub use config::{ConfigError, EnvConfig};
pub use environment::BuildEnvironment;
pub use project::{Artifact, Project, ProjectModel};

pub use lint_env_spi::{EnvError, Environment, Loader, LoaderBuilder};
