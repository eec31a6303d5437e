use tour_domain::config::NavigationConfig;
use tour_domain::constants::{BACKGROUND, NAVBAR};
use tour_domain::state::NavbarTone;
use tour_kernel::prelude::*;

/// Navbar background that turns more opaque once the page is scrolled.
#[derive(Debug, Clone)]
pub struct NavbarBackground<D: Document> {
    navbar: D::Element,
    config: NavigationConfig,
}

impl<D: Document> NavbarBackground<D> {
    pub fn bind(doc: &D, config: &NavigationConfig) -> Option<Self> {
        doc.first_by_class(NAVBAR).map(|navbar| Self { navbar, config: config.clone() })
    }

    pub fn background(&self, tone: NavbarTone) -> &str {
        match tone {
            NavbarTone::Solid => &self.config.solid_background,
            NavbarTone::Translucent => &self.config.translucent_background,
        }
    }

    pub fn on_scroll<B: Browser>(&self, doc: &D, browser: &B) -> NavbarTone {
        let tone = NavbarTone::for_scroll(browser.scroll_y(), self.config.scroll_threshold);
        doc.set_style(&self.navbar, BACKGROUND, self.background(tone));
        tone
    }
}
