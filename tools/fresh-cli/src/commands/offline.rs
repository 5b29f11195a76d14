//! `fresh offline` - drill the offline worker lifecycle against a
//! simulated deployment.

use crate::output::Output;
use anyhow::Result;
use async_trait::async_trait;
use clap::Args;
use fresh_offline::{
    CacheStorage, CacheVersion, Network, OfflineWorker, PrecacheManifest, Request, Response,
    ServeSource, WorkerError,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Args)]
pub struct OfflineArgs {
    /// Deployment root the worker is scoped to
    #[arg(long, default_value = "https://freshfruit.example")]
    pub scope: String,

    /// Cache generation to install
    #[arg(long, default_value_t = 1)]
    pub version: u32,

    /// Also upgrade to the next generation and show the eviction
    #[arg(long)]
    pub upgrade: bool,
}

/// An in-memory stand-in for the deployment, with a breakable uplink.
struct SimulatedSite {
    routes: HashMap<String, Response>,
    online: Mutex<bool>,
}

impl SimulatedSite {
    fn new(scope: &str) -> Self {
        let scope = scope.trim_end_matches('/');
        let mut routes = HashMap::new();
        routes.insert(
            format!("{scope}/index.html"),
            Response::ok("<html>FreshFruit Paradise</html>"),
        );
        routes.insert(format!("{scope}/css/style.css"), Response::ok(":root{}"));
        routes.insert(format!("{scope}/js/script.js"), Response::ok("init();"));
        routes.insert(
            format!("{scope}/img/mango.webp"),
            Response::ok("mango-bytes"),
        );
        Self {
            routes,
            online: Mutex::new(true),
        }
    }

    fn set_online(&self, online: bool) {
        *self.online.lock().expect("uplink lock poisoned") = online;
    }
}

#[async_trait]
impl Network for SimulatedSite {
    async fn fetch(&self, request: &Request) -> Result<Response, WorkerError> {
        if !*self.online.lock().expect("uplink lock poisoned") {
            return Err(WorkerError::FetchFailed("network is offline".to_string()));
        }
        self.routes
            .get(&request.url)
            .cloned()
            .ok_or_else(|| WorkerError::FetchFailed(format!("404: {}", request.url)))
    }
}

pub async fn run(args: OfflineArgs, output: &Output) -> Result<()> {
    let storage = Arc::new(CacheStorage::new());
    let site = Arc::new(SimulatedSite::new(&args.scope));

    output.header("Offline worker drill");

    let manifest = PrecacheManifest::standard(CacheVersion(args.version));
    let mut worker = OfflineWorker::new(
        manifest.clone(),
        args.scope.clone(),
        storage.clone(),
        site.clone(),
    );

    let report = worker.install().await?;
    output.success(&format!(
        "install: cached {}/{} assets into {}",
        report.cached.len(),
        report.cached.len() + report.failed.len(),
        manifest.cache_name(),
    ));
    for (asset, reason) in &report.failed {
        output.warn(&format!("  failed to precache {asset}: {reason}"));
    }

    let deleted = worker.activate().await?;
    output.success(&format!(
        "activate: evicted {} stale generation(s), clients claimed",
        deleted.len()
    ));

    for path in manifest.assets() {
        let request = Request::get(manifest.resolve(&args.scope, path));
        let result = worker.handle_fetch(&request).await?;
        output.line(&format!("  GET {:20} -> {}", path, label(result.source)));
    }

    // A request outside the manifest populates the cache on first fetch.
    let mango = Request::get(manifest.resolve(&args.scope, "img/mango.webp"));
    let first = worker.handle_fetch(&mango).await?;
    let second = worker.handle_fetch(&mango).await?;
    output.line(&format!(
        "  GET img/mango.webp     -> {} then {}",
        label(first.source),
        label(second.source)
    ));

    // Cut the uplink: HTML navigations fall back to the document root.
    site.set_online(false);
    output.info("uplink down");

    let navigation = Request::get(format!("{}/deals", args.scope.trim_end_matches('/')))
        .accept("text/html");
    let result = worker.handle_fetch(&navigation).await?;
    output.line(&format!("  GET /deals (html)      -> {}", label(result.source)));

    let image = Request::get(manifest.resolve(&args.scope, "img/kiwi.webp")).accept("image/webp");
    match worker.handle_fetch(&image).await {
        Ok(result) => output.line(&format!("  GET img/kiwi.webp      -> {}", label(result.source))),
        Err(e) => output.line(&format!("  GET img/kiwi.webp      -> error: {e}")),
    }
    site.set_online(true);

    if args.upgrade {
        let next = PrecacheManifest::standard(CacheVersion(args.version).next());
        let mut upgraded = OfflineWorker::new(next.clone(), args.scope.clone(), storage.clone(), site);
        upgraded.install().await?;
        let deleted = upgraded.activate().await?;
        worker.supersede();

        output.success(&format!(
            "upgrade: {} active, evicted {:?}",
            next.cache_name(),
            deleted
        ));
        output.info(&format!("previous worker is now {}", worker.state()));
    }

    Ok(())
}

fn label(source: ServeSource) -> &'static str {
    match source {
        ServeSource::Cache => "CACHE",
        ServeSource::Network => "NETWORK",
        ServeSource::Fallback => "FALLBACK (cached document root)",
    }
}
