//! Error type shared by environment implementations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced through the [`Environment`](crate::Environment) trait.
///
/// Classpath failures indicate a broken build graph or a corrupted path
/// and must reach the caller unchanged; nothing here is retried or
/// recovered locally.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The host reported its dependency graph as not fully resolved.
    #[error("failed to read classpath: {reason}")]
    ClasspathResolution {
        /// Host-supplied detail about what is unresolved.
        reason: String,
    },

    /// A classpath entry could not be turned into a well-formed `file:///` URL.
    #[error("failed to build URL from classpath entry `{entry}`: {message}")]
    ClasspathUrl {
        /// The offending classpath entry.
        entry: String,
        /// Why URL construction rejected the entry.
        message: String,
    },

    /// A caller-supplied file pattern failed to compile.
    #[error("invalid file pattern `{pattern}`: {source}")]
    Pattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// Underlying compile error.
        #[source]
        source: glob::PatternError,
    },

    /// A directory walk failed partway through.
    #[error("failed to walk `{}`: {source}", .path.display())]
    Walk {
        /// The directory being walked.
        path: PathBuf,
        /// Underlying walk error.
        #[source]
        source: walkdir::Error,
    },
}
