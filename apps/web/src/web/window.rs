use tour::kernel::document::Browser;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

#[derive(Debug, Clone)]
pub struct BrowserWindow {
    window: Window,
}

impl BrowserWindow {
    #[must_use]
    pub const fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Browser for BrowserWindow {
    fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn navigate(&self, href: &str) {
        if let Err(err) = self.window.location().set_href(href) {
            tracing::warn!(%href, error = ?err, "Navigation refused");
        }
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            tracing::warn!(error = ?err, "Alert suppressed");
        }
    }
}
