//! Output formatting for the CLI.
//!
//! Doubles as the page's injected collaborators: the toast stack, the
//! live region, and the cart display all render to the terminal here.

use console::style;
use fresh_commerce::cart::CartItem;
use fresh_page::{Announcer, CartDisplay, CartView, NotificationKind, Notifier};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        println!("{} {}", style("\u{2139}").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        println!("{} {}", style("\u{2713}").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        eprintln!("{} {}", style("\u{26A0}").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("\u{2717}").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose {
            return;
        }
        eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a plain line.
    pub fn line(&self, msg: &str) {
        println!("{msg}");
    }
}

impl Notifier for Output {
    fn notify(&self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Info => self.info(message),
            NotificationKind::Success => self.success(message),
            NotificationKind::Warning => self.warn(message),
            NotificationKind::Error => self.error(message),
        }
    }
}

impl Announcer for Output {
    fn announce(&self, message: &str) {
        self.debug(&format!("(live region) {message}"));
    }
}

impl CartDisplay for Output {
    fn refresh(&self, view: &CartView) {
        self.debug(&format!(
            "cart refreshed: {} item(s), total ${:.2}",
            view.item_count, view.total
        ));
    }

    fn acknowledge_add(&self, item: &CartItem, glyph: &str) {
        self.debug(&format!("{glyph} {} flies to the cart", item.name));
    }

    fn close_panel(&self) {
        self.debug("cart panel closed");
    }
}
