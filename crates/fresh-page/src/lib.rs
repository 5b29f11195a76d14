//! Page runtime wiring for FreshFruit Paradise.
//!
//! The glue between the pure domain logic in `fresh-commerce` and the
//! outside world: the cart service (engine + persistence + notifications +
//! display refresh), form validation, the theme preference, and the
//! notification sinks. Everything is wired by explicit dependency
//! injection - collaborators are constructed once and passed in, never
//! looked up through a global.

pub mod app;
pub mod cart_service;
pub mod error;
pub mod forms;
pub mod notify;
pub mod theme;

pub use app::{FallbackPage, Storefront, StorefrontConfig};
pub use cart_service::{CartDisplay, CartService, CartView, MAX_QUANTITY_PER_LINE};
pub use error::PageError;
pub use forms::{ContactForm, FieldError, NewsletterForm};
pub use notify::{Announcer, BufferedNotifier, NotificationKind, Notifier};
pub use theme::{Theme, ThemeManager};
