//! Storefront configuration and wiring.

use crate::cart_service::{CartDisplay, CartService};
use crate::error::PageError;
use crate::notify::{Announcer, NotificationKind, Notifier};
use crate::theme::{Theme, ThemeManager};
use fresh_commerce::catalog::Catalog;
use fresh_commerce::search::{CategoryFilter, SearchQuery, SearchResults};
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration for a storefront page.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Site name.
    pub name: String,
    /// Directory backing local storage.
    pub storage_dir: PathBuf,
    /// Deployment root the offline worker is scoped to.
    pub scope: String,
    /// Cache generation for the offline worker.
    pub cache_version: u32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "FreshFruit Paradise".to_string(),
            storage_dir: PathBuf::from(".freshfruit"),
            scope: "https://freshfruit.example".to_string(),
            cache_version: 1,
        }
    }
}

impl StorefrontConfig {
    /// Create a configuration with the given site name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the local-storage directory.
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }

    /// Set the deployment root.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Set the offline cache generation.
    pub fn with_cache_version(mut self, version: u32) -> Self {
        self.cache_version = version;
        self
    }
}

/// The minimal static page shown when startup itself fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPage {
    pub title: String,
    pub message: String,
    pub action: String,
}

impl FallbackPage {
    fn for_site(name: &str) -> Self {
        Self {
            title: format!("\u{1F34E} {name}"),
            message: "We're experiencing technical difficulties. Please refresh the page."
                .to_string(),
            action: "Refresh Page".to_string(),
        }
    }
}

/// The assembled storefront page.
///
/// Every collaborator is passed in explicitly; nothing reaches for a
/// global. Construction failures yield a [`FallbackPage`] description via
/// [`Storefront::init`] rather than a crash.
pub struct Storefront {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: CartService,
    theme: ThemeManager,
    notifier: Arc<dyn Notifier>,
    announcer: Arc<dyn Announcer>,
    filter: CategoryFilter,
}

impl Storefront {
    /// Wire the page, or describe the fallback page if wiring fails.
    pub fn init(
        config: StorefrontConfig,
        notifier: Arc<dyn Notifier>,
        announcer: Arc<dyn Announcer>,
        display: Arc<dyn CartDisplay>,
        system_theme: Theme,
    ) -> Result<Self, (FallbackPage, PageError)> {
        Self::build(config.clone(), notifier, announcer, display, system_theme)
            .map_err(|e| (FallbackPage::for_site(&config.name), e))
    }

    fn build(
        config: StorefrontConfig,
        notifier: Arc<dyn Notifier>,
        announcer: Arc<dyn Announcer>,
        display: Arc<dyn CartDisplay>,
        system_theme: Theme,
    ) -> Result<Self, PageError> {
        let cart_store = fresh_store::Store::open(&config.storage_dir)?;
        let theme_store = fresh_store::Store::open(&config.storage_dir)?;

        let cart = CartService::new(cart_store, notifier.clone(), display);
        let theme = ThemeManager::new(theme_store, announcer.clone(), system_theme);

        Ok(Self {
            config,
            catalog: Catalog::sample(),
            cart,
            theme,
            notifier,
            announcer,
            filter: CategoryFilter::All,
        })
    }

    /// Site configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart service.
    pub fn cart(&self) -> &CartService {
        &self.cart
    }

    /// Mutable cart access for UI event handlers.
    pub fn cart_mut(&mut self) -> &mut CartService {
        &mut self.cart
    }

    /// The theme manager.
    pub fn theme(&self) -> &ThemeManager {
        &self.theme
    }

    /// Mutable theme access for the toggle button.
    pub fn theme_mut(&mut self) -> &mut ThemeManager {
        &mut self.theme
    }

    /// The active category filter.
    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Switch the category filter and announce the change.
    pub fn apply_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.announcer.announce(&filter.announcement());
    }

    /// Run the search box against the catalog under the active filter.
    pub fn search(&self, text: &str, sort: fresh_commerce::search::SortOption) -> SearchResults<'_> {
        SearchQuery::new()
            .with_text(text)
            .with_filter(self.filter)
            .with_sort(sort)
            .run(self.catalog.products())
    }

    /// Surface an unanticipated runtime fault as a generic notification.
    pub fn report_fault(&self, error: &dyn std::error::Error) {
        tracing::error!(error = %error, "unhandled page fault");
        self.notifier.notify(
            "An unexpected error occurred. Please refresh the page.",
            NotificationKind::Error,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_service::{CartView, MAX_QUANTITY_PER_LINE};
    use crate::notify::BufferedNotifier;
    use fresh_commerce::cart::CartItem;
    use fresh_commerce::catalog::Category;
    use fresh_commerce::search::SortOption;

    struct NullDisplay;

    impl CartDisplay for NullDisplay {
        fn refresh(&self, _view: &CartView) {}
        fn acknowledge_add(&self, _item: &CartItem, _glyph: &str) {}
        fn close_panel(&self) {}
    }

    fn storefront(dir: &tempfile::TempDir) -> (Arc<BufferedNotifier>, Storefront) {
        let sink = Arc::new(BufferedNotifier::new());
        let config = StorefrontConfig::new("FreshFruit Paradise")
            .with_storage_dir(dir.path());
        let page = Storefront::init(
            config,
            sink.clone(),
            sink.clone(),
            Arc::new(NullDisplay),
            Theme::Light,
        )
        .expect("wiring succeeds");
        (sink, page)
    }

    #[test]
    fn test_end_to_end_add_and_search() {
        let dir = tempfile::tempdir().unwrap();
        let (_, mut page) = storefront(&dir);

        let mango = page.catalog().find_by_name("Sweet Mango").unwrap().clone();
        page.cart_mut().add_to_cart(&mango);
        assert_eq!(page.cart().engine().item_count(), 1);

        page.apply_filter(CategoryFilter::Only(Category::Citrus));
        let results = page.search("", SortOption::Featured);
        assert!(results
            .matches()
            .iter()
            .all(|p| p.category == Category::Citrus));
    }

    #[test]
    fn test_filter_change_is_announced() {
        let dir = tempfile::tempdir().unwrap();
        let (sink, mut page) = storefront(&dir);

        page.apply_filter(CategoryFilter::Only(Category::Berries));
        assert_eq!(sink.announcements(), vec!["Showing berries fruits"]);
    }

    #[test]
    fn test_report_fault_notifies_generically() {
        let dir = tempfile::tempdir().unwrap();
        let (sink, page) = storefront(&dir);

        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        page.report_fault(&err);

        assert_eq!(
            sink.last_notification(),
            Some((
                "An unexpected error occurred. Please refresh the page.".to_string(),
                NotificationKind::Error
            ))
        );
    }

    #[test]
    fn test_fallback_page_description() {
        let page = FallbackPage::for_site("FreshFruit Paradise");
        assert_eq!(page.title, "\u{1F34E} FreshFruit Paradise");
        assert_eq!(page.action, "Refresh Page");
    }

    #[test]
    fn test_quantity_limit_constant_is_page_level() {
        // The engine has no ceiling; the page clamp is the only bound.
        assert_eq!(MAX_QUANTITY_PER_LINE, 99);
    }
}
