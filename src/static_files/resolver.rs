//! Request path resolution and document-root containment.
//!
//! The request path is joined onto the root and canonicalized, which
//! resolves `.`, `..` and symlinks in filesystem order. Containment is then
//! checked component-wise against the canonical root.

use anyhow::Context;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Path served for any request path ending in `/`.
pub const INDEX_PATH: &str = "/index.html";

/// Where a request path landed relative to the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    /// A regular file inside the root
    File(PathBuf),
    /// A directory inside the root
    Directory(PathBuf),
    /// The path escapes the root
    OutOfBounds,
    /// Nothing servable exists at the path
    NotFound,
}

/// The canonicalized directory all served files must live under.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: PathBuf,
}

impl DocumentRoot {
    /// Canonicalizes `path` and checks it is a directory.
    pub fn new(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let root = std::fs::canonicalize(path)
            .with_context(|| format!("document root {} is not accessible", path.display()))?;

        if !root.is_dir() {
            anyhow::bail!("document root {} is not a directory", root.display());
        }

        Ok(Self { root })
    }

    /// The canonical root path.
    pub fn path(&self) -> &Path {
        &self.root
    }

    pub async fn resolve(&self, request_path: &str) -> ResolvedTarget {
        let request_path = with_index(request_path);
        let candidate = self.root.join(request_path.trim_start_matches('/'));

        let canonical = match fs::canonicalize(&candidate).await {
            Ok(p) => p,
            Err(_) => return ResolvedTarget::NotFound,
        };

        if !canonical.starts_with(&self.root) {
            return ResolvedTarget::OutOfBounds;
        }

        match fs::metadata(&canonical).await {
            Ok(meta) if meta.is_file() => ResolvedTarget::File(canonical),
            Ok(meta) if meta.is_dir() => ResolvedTarget::Directory(canonical),
            _ => ResolvedTarget::NotFound,
        }
    }
}

fn with_index(request_path: &str) -> &str {
    if request_path.ends_with('/') {
        INDEX_PATH
    } else {
        request_path
    }
}
