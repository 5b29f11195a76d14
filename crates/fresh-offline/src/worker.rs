//! Worker lifecycle and fetch interception.

use crate::error::WorkerError;
use crate::http::{Method, Request, Response};
use crate::manifest::PrecacheManifest;
use crate::storage::{CacheNamespace, CacheStorage};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Sync tag registered by the contact form.
pub const CONTACT_FORM_SYNC_TAG: &str = "contact-form";

/// The network seam. The real implementation performs HTTP; tests inject a
/// scripted one.
#[async_trait]
pub trait Network: Send + Sync {
    /// Perform a network fetch for the given request.
    async fn fetch(&self, request: &Request) -> Result<Response, WorkerError>;
}

/// Lifecycle states of one worker version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerState {
    /// Precaching the manifest; not yet intercepting requests.
    Installing,
    /// The single controlling version; intercepting requests.
    Active,
    /// A newer version has activated over this one.
    Superseded,
    /// Shut down; no further events.
    Terminated,
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Installing => write!(f, "installing"),
            Self::Active => write!(f, "active"),
            Self::Superseded => write!(f, "superseded"),
            Self::Terminated => write!(f, "terminated"),
        }
    }
}

/// What the install step managed to precache.
///
/// A failed entry is reported, not fatal: the worker still installs, the
/// asset is simply unavailable offline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstallReport {
    /// Asset paths cached successfully.
    pub cached: Vec<String>,
    /// Asset paths that failed, with the failure reason.
    pub failed: Vec<(String, String)>,
}

impl InstallReport {
    /// Whether every manifest entry was cached.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Where a served response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServeSource {
    /// Served from the active cache; no network access.
    Cache,
    /// Fetched from the network (and possibly written back).
    Network,
    /// Network failed; served the cached document root instead.
    Fallback,
}

/// A served response plus where it came from.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub response: Response,
    pub source: ServeSource,
}

/// A push message to present as a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushNotification {
    pub title: String,
    pub body: String,
}

/// What clicking a notification does to the app window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowAction {
    /// Focus an open app window, or open one at the given URL.
    FocusOrOpen(String),
}

/// One version of the offline worker.
///
/// `CacheStorage` is shared across versions; each version owns exactly one
/// namespace in it, named after its manifest's cache tag. Each lifecycle
/// handler awaits all of its cache writes before returning, so the worker
/// is never recycled mid-write.
pub struct OfflineWorker {
    manifest: PrecacheManifest,
    scope: String,
    state: WorkerState,
    claimed_clients: bool,
    storage: Arc<CacheStorage>,
    network: Arc<dyn Network>,
}

impl OfflineWorker {
    /// Create a worker for one cache generation. Starts out installing.
    pub fn new(
        manifest: PrecacheManifest,
        scope: impl Into<String>,
        storage: Arc<CacheStorage>,
        network: Arc<dyn Network>,
    ) -> Self {
        Self {
            manifest,
            scope: scope.into(),
            state: WorkerState::Installing,
            claimed_clients: false,
            storage,
            network,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> WorkerState {
        self.state
    }

    /// Whether activation has taken control of all open pages.
    pub fn controls_clients(&self) -> bool {
        self.claimed_clients
    }

    /// The namespace this version reads and writes.
    fn cache(&self) -> Arc<CacheNamespace> {
        self.storage.open(&self.manifest.cache_name())
    }

    fn require_state(&self, expected: WorkerState, event: &str) -> Result<(), WorkerError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(WorkerError::InvalidLifecycle {
                state: self.state.to_string(),
                event: event.to_string(),
            })
        }
    }

    /// Install: open this generation's namespace and precache the manifest.
    ///
    /// Entries that fail to fetch are recorded in the report and logged;
    /// they never block installation.
    pub async fn install(&mut self) -> Result<InstallReport, WorkerError> {
        self.require_state(WorkerState::Installing, "install")?;

        let cache = self.cache();
        let mut report = InstallReport::default();

        tracing::info!(cache = %self.manifest.cache_name(), "caching assets");
        for path in self.manifest.assets() {
            let url = self.manifest.resolve(&self.scope, path);
            let request = Request::get(&url);
            match self.network.fetch(&request).await {
                Ok(response) if response.is_cacheable() => {
                    cache.put(&request, response);
                    report.cached.push(path.clone());
                }
                Ok(response) => {
                    tracing::warn!(asset = %path, status = response.status, "asset not cacheable");
                    report
                        .failed
                        .push((path.clone(), format!("status {}", response.status)));
                }
                Err(e) => {
                    tracing::warn!(asset = %path, error = %e, "error caching asset");
                    report.failed.push((path.clone(), e.to_string()));
                }
            }
        }

        Ok(report)
    }

    /// Activate: evict every stale cache generation, then take control of
    /// all open pages immediately.
    ///
    /// Returns the names of the namespaces deleted.
    pub async fn activate(&mut self) -> Result<Vec<String>, WorkerError> {
        self.require_state(WorkerState::Installing, "activate")?;

        let current = self.manifest.cache_name();
        let mut deleted = Vec::new();
        for name in self.storage.names() {
            if name != current {
                tracing::info!(cache = %name, "deleting old cache");
                self.storage.delete(&name);
                deleted.push(name);
            }
        }

        self.state = WorkerState::Active;
        self.claimed_clients = true;
        Ok(deleted)
    }

    /// Intercept an outbound request.
    ///
    /// GET requests are answered cache-first, falling back to the network
    /// with write-back; anything else passes straight through. A network
    /// failure on an HTML navigation falls back to the cached document
    /// root; other failures propagate.
    pub async fn handle_fetch(&self, request: &Request) -> Result<FetchResult, WorkerError> {
        self.require_state(WorkerState::Active, "fetch")?;

        if request.method != Method::Get {
            let response = self.network.fetch(request).await?;
            return Ok(FetchResult {
                response,
                source: ServeSource::Network,
            });
        }

        let cache = self.cache();
        if let Some(response) = cache.match_request(request) {
            return Ok(FetchResult {
                response,
                source: ServeSource::Cache,
            });
        }

        match self.network.fetch(request).await {
            Ok(response) => {
                if response.is_cacheable() {
                    // Write-back: the cache keeps a copy, the caller gets
                    // the original.
                    cache.put(request, response.clone());
                }
                Ok(FetchResult {
                    response,
                    source: ServeSource::Network,
                })
            }
            Err(e) => {
                tracing::error!(url = %request.url, error = %e, "fetch failed");
                if request.accepts_html() {
                    let root = Request::get(self.manifest.document_root_url(&self.scope));
                    if let Some(response) = cache.match_request(&root) {
                        return Ok(FetchResult {
                            response,
                            source: ServeSource::Fallback,
                        });
                    }
                }
                Err(e)
            }
        }
    }

    /// Background sync. The contact-form tag is acknowledged; anything else
    /// is ignored. Returns whether the tag was handled.
    pub fn handle_sync(&self, tag: &str) -> bool {
        if tag == CONTACT_FORM_SYNC_TAG {
            // TODO: replay queued contact-form submissions once the form
            // gains an outbox.
            tracing::info!(tag, "background sync triggered");
            true
        } else {
            false
        }
    }

    /// Push message: decode a `{title, body}` JSON payload into a
    /// notification to present. An absent payload is a no-op.
    pub fn handle_push(&self, payload: Option<&[u8]>) -> Result<Option<PushNotification>, WorkerError> {
        match payload {
            None => Ok(None),
            Some(bytes) => {
                let notification: PushNotification = serde_json::from_slice(bytes)?;
                Ok(Some(notification))
            }
        }
    }

    /// Notification click: close it and surface the app window.
    pub fn handle_notification_click(&self) -> WindowAction {
        WindowAction::FocusOrOpen(format!("{}/", self.scope.trim_end_matches('/')))
    }

    /// A newer version has activated over this one.
    pub fn supersede(&mut self) {
        if self.state == WorkerState::Active {
            self.state = WorkerState::Superseded;
        }
    }

    /// Shut the worker down.
    pub fn terminate(&mut self) {
        self.state = WorkerState::Terminated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::CacheVersion;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const SCOPE: &str = "https://fruit.example";

    /// Scripted network: URL -> body, counting every fetch.
    struct ScriptedNetwork {
        routes: Mutex<HashMap<String, Response>>,
        fetches: AtomicUsize,
    }

    impl ScriptedNetwork {
        fn new() -> Self {
            Self {
                routes: Mutex::new(HashMap::new()),
                fetches: AtomicUsize::new(0),
            }
        }

        fn serving(self, url: &str, body: &str) -> Self {
            self.routes
                .lock()
                .unwrap()
                .insert(url.to_string(), Response::ok(body));
            self
        }

        fn serving_response(self, url: &str, response: Response) -> Self {
            self.routes
                .lock()
                .unwrap()
                .insert(url.to_string(), response);
            self
        }

        fn go_offline(&self) {
            self.routes.lock().unwrap().clear();
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Network for ScriptedNetwork {
        async fn fetch(&self, request: &Request) -> Result<Response, WorkerError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.routes
                .lock()
                .unwrap()
                .get(&request.url)
                .cloned()
                .ok_or_else(|| WorkerError::FetchFailed(format!("unreachable: {}", request.url)))
        }
    }

    fn online_network() -> ScriptedNetwork {
        ScriptedNetwork::new()
            .serving("https://fruit.example/index.html", "<html>paradise</html>")
            .serving("https://fruit.example/css/style.css", "body{}")
            .serving("https://fruit.example/js/script.js", "init();")
    }

    async fn active_worker(
        storage: Arc<CacheStorage>,
        network: Arc<ScriptedNetwork>,
        version: u32,
    ) -> OfflineWorker {
        let mut worker = OfflineWorker::new(
            PrecacheManifest::standard(CacheVersion(version)),
            SCOPE,
            storage,
            network,
        );
        worker.install().await.unwrap();
        worker.activate().await.unwrap();
        worker
    }

    #[tokio::test]
    async fn test_install_precaches_manifest() {
        let storage = Arc::new(CacheStorage::new());
        let network = Arc::new(online_network());
        let mut worker = OfflineWorker::new(
            PrecacheManifest::standard(CacheVersion(1)),
            SCOPE,
            storage.clone(),
            network,
        );

        let report = worker.install().await.unwrap();
        assert!(report.is_complete());
        assert_eq!(report.cached.len(), 3);
        assert_eq!(storage.open("freshfruit-paradise-v1").len(), 3);
    }

    #[tokio::test]
    async fn test_install_failure_is_reported_not_fatal() {
        let storage = Arc::new(CacheStorage::new());
        // Stylesheet missing from the network.
        let network = Arc::new(
            ScriptedNetwork::new()
                .serving("https://fruit.example/index.html", "<html>paradise</html>")
                .serving("https://fruit.example/js/script.js", "init();"),
        );
        let mut worker = OfflineWorker::new(
            PrecacheManifest::standard(CacheVersion(1)),
            SCOPE,
            storage,
            network,
        );

        let report = worker.install().await.unwrap();
        assert!(!report.is_complete());
        assert_eq!(report.cached.len(), 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "css/style.css");

        // Installation still proceeds to activation.
        worker.activate().await.unwrap();
        assert_eq!(worker.state(), WorkerState::Active);
    }

    #[tokio::test]
    async fn test_activate_evicts_stale_generations_and_claims() {
        let storage = Arc::new(CacheStorage::new());
        let network = Arc::new(online_network());

        let v1 = active_worker(storage.clone(), network.clone(), 1).await;
        assert!(storage.has("freshfruit-paradise-v1"));

        let mut v2 = OfflineWorker::new(
            PrecacheManifest::standard(CacheVersion(2)),
            SCOPE,
            storage.clone(),
            network,
        );
        v2.install().await.unwrap();
        let deleted = v2.activate().await.unwrap();

        assert_eq!(deleted, vec!["freshfruit-paradise-v1"]);
        assert!(!storage.has("freshfruit-paradise-v1"));
        assert!(storage.has("freshfruit-paradise-v2"));
        assert!(v2.controls_clients());
        drop(v1);
    }

    #[tokio::test]
    async fn test_v2_manifest_servable_without_network() {
        let storage = Arc::new(CacheStorage::new());
        let network = Arc::new(online_network());

        let _v1 = active_worker(storage.clone(), network.clone(), 1).await;
        let v2 = active_worker(storage.clone(), network.clone(), 2).await;

        network.go_offline();
        for path in ["index.html", "css/style.css", "js/script.js"] {
            let result = v2
                .handle_fetch(&Request::get(format!("{SCOPE}/{path}")))
                .await
                .unwrap();
            assert_eq!(result.source, ServeSource::Cache);
        }
    }

    #[tokio::test]
    async fn test_cached_asset_served_with_zero_network_fetches() {
        let storage = Arc::new(CacheStorage::new());
        let network = Arc::new(online_network());
        let worker = active_worker(storage, network.clone(), 1).await;

        let before = network.fetch_count();
        let result = worker
            .handle_fetch(&Request::get("https://fruit.example/css/style.css"))
            .await
            .unwrap();

        assert_eq!(result.source, ServeSource::Cache);
        assert_eq!(network.fetch_count(), before);
        assert_eq!(result.response.text().as_deref(), Some("body{}"));
    }

    #[tokio::test]
    async fn test_miss_fetches_and_writes_back() {
        let storage = Arc::new(CacheStorage::new());
        let network = Arc::new(online_network().serving(
            "https://fruit.example/img/mango.webp",
            "mango-bytes",
        ));
        let worker = active_worker(storage, network.clone(), 1).await;

        let req = Request::get("https://fruit.example/img/mango.webp");
        let first = worker.handle_fetch(&req).await.unwrap();
        assert_eq!(first.source, ServeSource::Network);

        // Second hit comes from cache even with the network gone.
        network.go_offline();
        let second = worker.handle_fetch(&req).await.unwrap();
        assert_eq!(second.source, ServeSource::Cache);
        assert_eq!(second.response.text().as_deref(), Some("mango-bytes"));
    }

    #[tokio::test]
    async fn test_non_200_response_is_not_written_back() {
        let storage = Arc::new(CacheStorage::new());
        let network = Arc::new(online_network().serving_response(
            "https://fruit.example/missing.css",
            Response::new(404, HashMap::new(), b"gone".to_vec()),
        ));
        let worker = active_worker(storage, network.clone(), 1).await;

        let req = Request::get("https://fruit.example/missing.css");
        worker.handle_fetch(&req).await.unwrap();

        network.go_offline();
        // Not cached, so the retry hits the dead network.
        assert!(worker.handle_fetch(&req).await.is_err());
    }

    #[tokio::test]
    async fn test_cross_origin_response_is_not_written_back() {
        let storage = Arc::new(CacheStorage::new());
        let network = Arc::new(online_network().serving_response(
            "https://cdn.example/widget.js",
            Response::ok("widget").with_kind(crate::http::ResponseKind::Opaque),
        ));
        let worker = active_worker(storage, network.clone(), 1).await;

        let req = Request::get("https://cdn.example/widget.js");
        worker.handle_fetch(&req).await.unwrap();

        network.go_offline();
        assert!(worker.handle_fetch(&req).await.is_err());
    }

    #[tokio::test]
    async fn test_non_get_passes_through_untouched() {
        let storage = Arc::new(CacheStorage::new());
        let network = Arc::new(
            online_network().serving("https://fruit.example/api/contact", "received"),
        );
        let worker = active_worker(storage.clone(), network.clone(), 1).await;

        let req = Request::new(Method::Post, "https://fruit.example/api/contact");
        let result = worker.handle_fetch(&req).await.unwrap();

        assert_eq!(result.source, ServeSource::Network);
        // Nothing new stored beyond the precached manifest.
        assert_eq!(storage.open("freshfruit-paradise-v1").len(), 3);
    }

    #[tokio::test]
    async fn test_offline_html_navigation_falls_back_to_document_root() {
        let storage = Arc::new(CacheStorage::new());
        let network = Arc::new(online_network());
        let worker = active_worker(storage, network.clone(), 1).await;

        network.go_offline();
        let req = Request::get("https://fruit.example/deals").accept("text/html");
        let result = worker.handle_fetch(&req).await.unwrap();

        assert_eq!(result.source, ServeSource::Fallback);
        assert_eq!(result.response.text().as_deref(), Some("<html>paradise</html>"));
    }

    #[tokio::test]
    async fn test_offline_non_html_request_propagates_error() {
        let storage = Arc::new(CacheStorage::new());
        let network = Arc::new(online_network());
        let worker = active_worker(storage, network.clone(), 1).await;

        network.go_offline();
        let req = Request::get("https://fruit.example/img/kiwi.webp").accept("image/webp");
        let err = worker.handle_fetch(&req).await.unwrap_err();
        assert!(matches!(err, WorkerError::FetchFailed(_)));
    }

    #[tokio::test]
    async fn test_fetch_before_activation_is_rejected() {
        let storage = Arc::new(CacheStorage::new());
        let network = Arc::new(online_network());
        let worker = OfflineWorker::new(
            PrecacheManifest::standard(CacheVersion(1)),
            SCOPE,
            storage,
            network,
        );

        let err = worker
            .handle_fetch(&Request::get("https://fruit.example/index.html"))
            .await
            .unwrap_err();
        assert!(matches!(err, WorkerError::InvalidLifecycle { .. }));
    }

    #[tokio::test]
    async fn test_lifecycle_supersede_terminate() {
        let storage = Arc::new(CacheStorage::new());
        let network = Arc::new(online_network());
        let mut worker = active_worker(storage, network, 1).await;

        worker.supersede();
        assert_eq!(worker.state(), WorkerState::Superseded);
        worker.terminate();
        assert_eq!(worker.state(), WorkerState::Terminated);
    }

    #[test]
    fn test_sync_contact_form_tag() {
        let storage = Arc::new(CacheStorage::new());
        let network = Arc::new(ScriptedNetwork::new());
        let worker = OfflineWorker::new(
            PrecacheManifest::standard(CacheVersion(1)),
            SCOPE,
            storage,
            network,
        );

        assert!(worker.handle_sync(CONTACT_FORM_SYNC_TAG));
        assert!(!worker.handle_sync("unrelated-tag"));
    }

    #[test]
    fn test_push_payload_decoding() {
        let storage = Arc::new(CacheStorage::new());
        let network = Arc::new(ScriptedNetwork::new());
        let worker = OfflineWorker::new(
            PrecacheManifest::standard(CacheVersion(1)),
            SCOPE,
            storage,
            network,
        );

        let note = worker
            .handle_push(Some(br#"{"title":"Fresh stock","body":"Mangoes are back!"}"#))
            .unwrap()
            .unwrap();
        assert_eq!(note.title, "Fresh stock");
        assert_eq!(note.body, "Mangoes are back!");

        assert!(worker.handle_push(None).unwrap().is_none());
        assert!(worker.handle_push(Some(b"not json")).is_err());
    }

    #[test]
    fn test_notification_click_targets_app_root() {
        let storage = Arc::new(CacheStorage::new());
        let network = Arc::new(ScriptedNetwork::new());
        let worker = OfflineWorker::new(
            PrecacheManifest::standard(CacheVersion(1)),
            SCOPE,
            storage,
            network,
        );

        assert_eq!(
            worker.handle_notification_click(),
            WindowAction::FocusOrOpen("https://fruit.example/".to_string())
        );
    }
}
