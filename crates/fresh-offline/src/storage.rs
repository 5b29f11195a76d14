//! Versioned cache namespaces.
//!
//! The worker side of the cache API: named buckets of stored responses,
//! keyed by exact request identity. `CacheStorage` outlives any single
//! worker version; a new generation opens its own namespace and deletes the
//! rest on activation.

use crate::http::{Request, Response};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One named bucket of cached responses.
///
/// Each operation takes the lock independently; there is no cross-request
/// locking. Two concurrent writes for the same identity are a benign race,
/// last write wins.
#[derive(Debug, Default)]
pub struct CacheNamespace {
    entries: Mutex<HashMap<String, Response>>,
}

impl CacheNamespace {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stored response by exact request identity.
    pub fn match_request(&self, request: &Request) -> Option<Response> {
        self.entries
            .lock()
            .expect("cache namespace lock poisoned")
            .get(&request.identity())
            .cloned()
    }

    /// Store a copy of a response under the request's identity.
    pub fn put(&self, request: &Request, response: Response) {
        self.entries
            .lock()
            .expect("cache namespace lock poisoned")
            .insert(request.identity(), response);
    }

    /// Remove a stored response. Returns false if absent.
    pub fn delete(&self, request: &Request) -> bool {
        self.entries
            .lock()
            .expect("cache namespace lock poisoned")
            .remove(&request.identity())
            .is_some()
    }

    /// Number of stored responses.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("cache namespace lock poisoned")
            .len()
    }

    /// Whether the namespace holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// All cache namespaces visible to the worker.
#[derive(Debug, Default)]
pub struct CacheStorage {
    namespaces: Mutex<HashMap<String, Arc<CacheNamespace>>>,
}

impl CacheStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a namespace, creating it if absent.
    pub fn open(&self, name: &str) -> Arc<CacheNamespace> {
        self.namespaces
            .lock()
            .expect("cache storage lock poisoned")
            .entry(name.to_string())
            .or_default()
            .clone()
    }

    /// Delete a namespace and everything in it. Returns false if absent.
    pub fn delete(&self, name: &str) -> bool {
        self.namespaces
            .lock()
            .expect("cache storage lock poisoned")
            .remove(name)
            .is_some()
    }

    /// Whether a namespace exists.
    pub fn has(&self, name: &str) -> bool {
        self.namespaces
            .lock()
            .expect("cache storage lock poisoned")
            .contains_key(name)
    }

    /// Names of all namespaces, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .namespaces
            .lock()
            .expect("cache storage lock poisoned")
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}
