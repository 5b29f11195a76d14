//! Offline asset-caching worker for FreshFruit Paradise.
//!
//! This crate implements the page's offline layer: a worker that precaches a
//! fixed manifest of essential assets at install time, evicts every stale
//! cache generation at activation, and intercepts GET requests with a
//! cache-then-network-with-write-back strategy. It runs in its own execution
//! context and shares nothing with the page beyond the requests it
//! intercepts.
//!
//! - `OfflineWorker` - lifecycle (install/activate/fetch/sync/push)
//! - `CacheStorage` / `CacheNamespace` - versioned response caches
//! - `PrecacheManifest` - the fixed asset list and cache naming
//! - `Network` - the injected seam to the real network

mod error;
mod http;
mod manifest;
mod storage;
mod worker;

pub use error::WorkerError;
pub use http::{Method, Request, Response, ResponseKind};
pub use manifest::{CacheVersion, PrecacheManifest, CACHE_PREFIX};
pub use storage::{CacheNamespace, CacheStorage};
pub use worker::{
    FetchResult, InstallReport, Network, OfflineWorker, PushNotification, ServeSource,
    WindowAction, WorkerState, CONTACT_FORM_SYNC_TAG,
};
