use tour_domain::constants::{ACTIVE, HAMBURGER, NAV_LINK, NAV_MENU};
use tour_domain::state::MenuState;
use tour_kernel::prelude::*;
use tracing::{debug, trace};

/// The mobile navigation menu: hamburger toggle, menu panel and its links.
#[derive(Debug, Clone)]
pub struct NavigationMenu<D: Document> {
    toggle: D::Element,
    panel: D::Element,
    links: Vec<D::Element>,
}

impl<D: Document> NavigationMenu<D> {
    /// Resolves `#hamburger`, `#nav-menu` and every `.nav-link`.
    ///
    /// Returns `None` when the toggle or the panel is missing from the page.
    pub fn bind(doc: &D) -> Option<Self> {
        let (Some(toggle), Some(panel)) =
            (doc.element_by_id(HAMBURGER), doc.element_by_id(NAV_MENU))
        else {
            debug!("Navigation menu not present, skipping");
            return None;
        };
        let links = doc.elements_by_class(NAV_LINK);
        Some(Self { toggle, panel, links })
    }

    /// Current state, read from the panel's `active` class.
    pub fn state(&self, doc: &D) -> MenuState {
        MenuState::from_active(doc.has_class(&self.panel, ACTIVE))
    }

    /// Writes `state` onto both the toggle and the panel.
    pub fn render(&self, doc: &D, state: MenuState) {
        doc.set_class(&self.toggle, ACTIVE, state.is_active());
        doc.set_class(&self.panel, ACTIVE, state.is_active());
    }

    pub fn toggle(&self, doc: &D) -> MenuState {
        let next = self.state(doc).toggled();
        self.render(doc, next);
        trace!(?next, "Navigation menu toggled");
        next
    }

    /// Idempotent.
    pub fn close(&self, doc: &D) {
        self.render(doc, MenuState::Closed);
    }

    /// Element-level click: the toggle flips the menu, any menu link closes it.
    pub fn on_element_click(&self, doc: &D, target: &D::Element) -> DefaultAction {
        if doc.contains(&self.toggle, target) {
            self.toggle(doc);
        }
        if self.links.iter().any(|link| doc.contains(link, target)) {
            self.close(doc);
        }
        DefaultAction::Allow
    }

    /// Document-level click: anything outside the toggle and the panel closes the menu.
    pub fn on_document_click(&self, doc: &D, target: &D::Element) {
        if !doc.contains(&self.toggle, target) && !doc.contains(&self.panel, target) {
            self.close(doc);
        }
    }
}
