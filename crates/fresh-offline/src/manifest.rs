//! Cache versioning and the precache manifest.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by every cache generation this worker owns.
pub const CACHE_PREFIX: &str = "freshfruit-paradise";

/// A cache generation tag. Bumping the version is the only cache
/// invalidation mechanism: activation deletes every namespace whose name
/// does not carry the current tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheVersion(pub u32);

impl CacheVersion {
    /// The namespace name for this generation, e.g. `freshfruit-paradise-v1`.
    pub fn cache_name(&self) -> String {
        format!("{}-v{}", CACHE_PREFIX, self.0)
    }

    /// The next generation.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for CacheVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// The fixed list of essential assets precached at install time, as paths
/// relative to the deployment root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrecacheManifest {
    version: CacheVersion,
    document_root: String,
    assets: Vec<String>,
}

impl PrecacheManifest {
    /// The page's standard manifest: document root, stylesheet, script.
    pub fn standard(version: CacheVersion) -> Self {
        Self {
            version,
            document_root: "index.html".to_string(),
            assets: vec![
                "index.html".to_string(),
                "css/style.css".to_string(),
                "js/script.js".to_string(),
            ],
        }
    }

    /// An empty manifest for the given version.
    pub fn new(version: CacheVersion, document_root: impl Into<String>) -> Self {
        let document_root = document_root.into();
        Self {
            version,
            assets: vec![document_root.clone()],
            document_root,
        }
    }

    /// Add an asset path.
    pub fn with_asset(mut self, path: impl Into<String>) -> Self {
        self.assets.push(path.into());
        self
    }

    /// The cache generation this manifest installs into.
    pub fn version(&self) -> CacheVersion {
        self.version
    }

    /// The namespace name for this generation.
    pub fn cache_name(&self) -> String {
        self.version.cache_name()
    }

    /// Relative asset paths, document root first.
    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    /// The document-root asset, the last-resort fallback for HTML requests.
    pub fn document_root(&self) -> &str {
        &self.document_root
    }

    /// Resolve a relative asset path against the deployment root.
    pub fn resolve(&self, scope: &str, path: &str) -> String {
        format!(
            "{}/{}",
            scope.trim_end_matches('/'),
            path.trim_start_matches("./").trim_start_matches('/')
        )
    }

    /// Absolute URL of the document root under the given deployment root.
    pub fn document_root_url(&self, scope: &str) -> String {
        self.resolve(scope, &self.document_root)
    }
}
