//! Cart service: the engine wired to persistence, notifications, and the
//! cart display.

use crate::notify::{NotificationKind, Notifier};
use fresh_commerce::cart::{CartEngine, CartItem};
use fresh_commerce::catalog::{emoji_for, Product};
use fresh_commerce::ids::ItemId;
use fresh_store::{Store, CART_KEY};
use std::sync::Arc;

/// Upper bound the quantity controls clamp to. The engine itself does not
/// enforce this; it belongs to the page.
pub const MAX_QUANTITY_PER_LINE: u32 = 99;

/// Snapshot of the cart handed to the display on every mutation.
#[derive(Debug, Clone)]
pub struct CartView {
    /// Line items in insertion order.
    pub items: Vec<CartItem>,
    /// Cart total.
    pub total: f64,
    /// Badge count (sum of quantities).
    pub item_count: u32,
    /// Whether the checkout button is enabled.
    pub checkout_enabled: bool,
}

/// The cart rendering surface.
///
/// Implementations draw the sidebar, badge, and transient cues; the service
/// calls them after every mutation.
pub trait CartDisplay: Send + Sync {
    /// Redraw the cart surface from a fresh snapshot.
    fn refresh(&self, view: &CartView);

    /// Transient fly-to-cart cue for a just-added item.
    fn acknowledge_add(&self, item: &CartItem, glyph: &str);

    /// Close the cart sidebar (after checkout).
    fn close_panel(&self);
}

/// The cart engine wired to its collaborators.
///
/// All mutations run synchronously to completion: mutate, persist, refresh.
/// A persistence write failure is surfaced through the notifier while the
/// in-memory state stays authoritative for the session.
pub struct CartService {
    engine: CartEngine,
    store: Store,
    notifier: Arc<dyn Notifier>,
    display: Arc<dyn CartDisplay>,
}

impl CartService {
    /// Load the persisted cart and wire the collaborators.
    ///
    /// A missing or corrupt stored value yields an empty cart, never an
    /// error; corruption is mentioned to the user once.
    pub fn new(store: Store, notifier: Arc<dyn Notifier>, display: Arc<dyn CartDisplay>) -> Self {
        let engine = match store.get::<Vec<CartItem>>(CART_KEY) {
            Ok(Some(items)) => CartEngine::from_items(items),
            Ok(None) => CartEngine::new(),
            Err(e) => {
                tracing::warn!(error = %e, "stored cart unreadable, starting empty");
                notifier.notify(
                    "Your saved cart could not be restored.",
                    NotificationKind::Warning,
                );
                CartEngine::new()
            }
        };

        let service = Self {
            engine,
            store,
            notifier,
            display,
        };
        service.display.refresh(&service.view());
        service
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> CartView {
        CartView {
            items: self.engine.items().to_vec(),
            total: self.engine.total(),
            item_count: self.engine.item_count(),
            checkout_enabled: !self.engine.is_empty(),
        }
    }

    /// Read access to the engine.
    pub fn engine(&self) -> &CartEngine {
        &self.engine
    }

    /// Add one unit of a product: mutate, persist, refresh, acknowledge.
    pub fn add_to_cart(&mut self, product: &Product) -> ItemId {
        let id = self.engine.add_product(product);
        self.persist();
        self.display.refresh(&self.view());

        if let Some(item) = self.engine.get_item(&id) {
            self.display.acknowledge_add(item, emoji_for(&item.name));
        }
        self.notifier.notify(
            &format!("{} added to cart!", product.name),
            NotificationKind::Success,
        );
        id
    }

    /// Remove a line item. Absent ids are a quiet no-op.
    pub fn remove_from_cart(&mut self, id: &ItemId) {
        self.engine.remove_item(id);
        self.persist();
        self.display.refresh(&self.view());
    }

    /// Set a line's quantity, clamped to the page's upper bound. Zero
    /// removes the line.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: u32) {
        self.engine
            .update_quantity(id, quantity.min(MAX_QUANTITY_PER_LINE));
        self.persist();
        self.display.refresh(&self.view());
    }

    /// Quantity-control plus button.
    pub fn increment(&mut self, id: &ItemId) {
        if let Some(item) = self.engine.get_item(id) {
            let next = item.quantity.saturating_add(1);
            self.set_quantity(id, next);
        }
    }

    /// Quantity-control minus button. Reaching zero removes the line.
    pub fn decrement(&mut self, id: &ItemId) {
        if let Some(item) = self.engine.get_item(id) {
            let next = item.quantity.saturating_sub(1);
            self.set_quantity(id, next);
        }
    }

    /// Simulated checkout: clears the cart, closes the sidebar, celebrates.
    ///
    /// An empty cart is a no-op (the button is disabled anyway). Always
    /// resolves; there is no cancellation.
    pub fn checkout(&mut self) -> bool {
        if self.engine.is_empty() {
            return false;
        }

        self.engine.clear();
        self.persist();
        self.display.refresh(&self.view());
        self.display.close_panel();
        self.notifier.notify(
            "Checkout successful! Your fresh fruits are on the way! \u{1F69A}",
            NotificationKind::Success,
        );
        true
    }

    fn persist(&self) {
        if let Err(e) = self.store.set(CART_KEY, &self.engine.items()) {
            tracing::error!(error = %e, "failed to persist cart");
            self.notifier.notify(
                "Your cart could not be saved and may not survive a reload.",
                NotificationKind::Warning,
            );
        }
    }
}
