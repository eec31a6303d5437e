use tour_domain::config::NavigationConfig;
use tour_domain::constants::{FRAGMENT_PREFIX, HREF, NAVBAR, ROOT_PATH};
use tour_kernel::prelude::*;
use tracing::{debug, trace};

/// Smooth scrolling for in-page `#fragment` links.
///
/// Off the home page the link instead loads `/#fragment`, where the sections live.
#[derive(Debug, Clone)]
pub struct AnchorScroller<D: Document> {
    links: Vec<D::Element>,
    navbar: Option<D::Element>,
    margin: f64,
}

impl<D: Document> AnchorScroller<D> {
    pub fn bind(doc: &D, config: &NavigationConfig) -> Self {
        let links = doc.links_with_href_prefix(FRAGMENT_PREFIX);
        debug!(links = links.len(), "Anchor links bound");
        Self { links, navbar: doc.first_by_class(NAVBAR), margin: config.anchor_margin }
    }

    pub fn on_element_click<B: Browser>(
        &self,
        doc: &D,
        browser: &B,
        target: &D::Element,
    ) -> DefaultAction {
        let Some(href) = self
            .links
            .iter()
            .find(|link| doc.contains(link, target))
            .and_then(|link| doc.attribute(link, HREF))
        else {
            return DefaultAction::Allow;
        };
        self.follow(doc, browser, &href)
    }

    /// Follows an in-page `href`. An unknown or empty fragment is a silent no-op.
    pub fn follow<B: Browser>(&self, doc: &D, browser: &B, href: &str) -> DefaultAction {
        let Some(fragment) = href.strip_prefix(FRAGMENT_PREFIX) else {
            return DefaultAction::Allow;
        };

        if browser.pathname() != ROOT_PATH {
            browser.navigate(&format!("{ROOT_PATH}{href}"));
            return DefaultAction::Allow;
        }

        let Some(section) = (!fragment.is_empty()).then(|| doc.element_by_id(fragment)).flatten()
        else {
            trace!(%href, "No section for fragment");
            return DefaultAction::Prevent;
        };

        browser.smooth_scroll_to(self.scroll_target(doc, &section));
        DefaultAction::Prevent
    }

    /// The section's offset minus the navbar height and the configured margin.
    pub fn scroll_target(&self, doc: &D, section: &D::Element) -> f64 {
        let navbar_height = self.navbar.as_ref().map_or(0.0, |navbar| doc.offset_height(navbar));
        doc.offset_top(section) - navbar_height - self.margin
    }
}
