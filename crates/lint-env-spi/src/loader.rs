//! Artifact loader scoped to an explicit classpath.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::error::EnvError;

/// One classpath root inside a [`Loader`].
#[derive(Debug, Clone)]
pub struct LoaderRoot {
    url: Url,
    path: Option<PathBuf>,
}

impl LoaderRoot {
    /// The `file:///` URL of this root.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The local path behind the URL, when it maps to one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Builds a [`Loader`] from explicit classpath entries.
///
/// Nothing ambient is consulted: the entry list and the optional parent
/// loader are the entire capability of the result. Entries must already
/// be URL-safe (forward slashes, spaces encoded as `%20`), the form
/// [`classpath`](crate::Environment::classpath) produces.
#[derive(Debug, Default)]
pub struct LoaderBuilder {
    entries: Vec<String>,
    parent: Option<Arc<Loader>>,
}

impl LoaderBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one classpath entry.
    #[must_use]
    pub fn entry(mut self, entry: impl Into<String>) -> Self {
        self.entries.push(entry.into());
        self
    }

    /// Adds multiple classpath entries, preserving their order.
    #[must_use]
    pub fn entries<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.extend(entries.into_iter().map(Into::into));
        self
    }

    /// Sets the parent loader consulted when every root misses.
    #[must_use]
    pub fn parent(mut self, parent: Arc<Loader>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Builds the loader, tracing one diagnostic line per resolved URL.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::ClasspathUrl`] when an entry does not form a
    /// well-formed `file:///` URL, e.g. when it still contains a raw
    /// space. A corrupted entry is fatal, not skipped.
    pub fn build(self) -> Result<Loader, EnvError> {
        let mut roots = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let root = parse_root(entry)?;
            debug!("classpath: {}", root.url);
            roots.push(root);
        }
        Ok(Loader {
            roots,
            parent: self.parent,
        })
    }
}

fn parse_root(entry: &str) -> Result<LoaderRoot, EnvError> {
    // An absolute entry already starts with `/`; strip it so the text
    // keeps the canonical single slash after the scheme and the
    // round-trip comparison below stays an identity for valid entries.
    let text = format!("file:///{}", entry.trim_start_matches('/'));
    let url = Url::parse(&text).map_err(|source| EnvError::ClasspathUrl {
        entry: entry.to_string(),
        message: source.to_string(),
    })?;
    // The parser silently re-encodes characters a URL cannot carry; an
    // entry that does not round-trip verbatim was never URL-safe.
    if url.as_str() != text {
        return Err(EnvError::ClasspathUrl {
            entry: entry.to_string(),
            message: format!("entry is not URL-safe, parses as `{url}`"),
        });
    }
    let path = url.to_file_path().ok();
    Ok(LoaderRoot { url, path })
}

/// Artifact-resolution context bound to an ordered set of classpath roots.
///
/// Lookups walk the local roots first, in classpath order, and fall back
/// to the parent loader only for names no root can supply.
#[derive(Debug, Clone)]
pub struct Loader {
    roots: Vec<LoaderRoot>,
    parent: Option<Arc<Loader>>,
}

impl Loader {
    /// The ordered classpath roots this loader can see.
    #[must_use]
    pub fn roots(&self) -> &[LoaderRoot] {
        &self.roots
    }

    /// The parent loader, if one was supplied.
    #[must_use]
    pub fn parent(&self) -> Option<&Loader> {
        self.parent.as_deref()
    }

    /// Resolves a relative resource name against the loader's roots.
    ///
    /// Directory roots are checked in order and the first hit wins.
    /// Archive roots are listed but not inspected. When every root
    /// misses, the parent loader (if any) is consulted.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        for root in &self.roots {
            let Some(base) = root.path() else {
                continue;
            };
            if !base.is_dir() {
                continue;
            }
            let candidate = base.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        self.parent.as_ref().and_then(|parent| parent.find(name))
    }
}
