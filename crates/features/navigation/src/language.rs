use tour_domain::constants::{LANG_BUTTON, LANG_DROPDOWN, OPACITY, VISIBILITY};
use tour_domain::state::DropdownState;
use tour_kernel::prelude::*;
use tracing::debug;

/// The language dropdown and the link that opens it.
#[derive(Debug, Clone)]
pub struct LanguageSelector<D: Document> {
    trigger: D::Element,
    dropdown: D::Element,
}

impl<D: Document> LanguageSelector<D> {
    /// Binds only when both `#lang-button` and `#lang-dropdown` exist.
    pub fn bind(doc: &D) -> Option<Self> {
        match (doc.element_by_id(LANG_BUTTON), doc.element_by_id(LANG_DROPDOWN)) {
            (Some(trigger), Some(dropdown)) => Some(Self { trigger, dropdown }),
            _ => {
                debug!("Language selector not present, skipping");
                None
            },
        }
    }

    pub fn state(&self, doc: &D) -> DropdownState {
        DropdownState::from_opacity(&doc.style(&self.dropdown, OPACITY))
    }

    /// The only writer of the dropdown's `opacity` and `visibility`.
    pub fn render(&self, doc: &D, state: DropdownState) {
        let style = state.style();
        doc.set_style(&self.dropdown, OPACITY, style.opacity);
        doc.set_style(&self.dropdown, VISIBILITY, style.visibility);
    }

    /// Element-level click on the trigger: flip the dropdown and keep the link from navigating.
    pub fn on_element_click(&self, doc: &D, target: &D::Element) -> DefaultAction {
        if !doc.contains(&self.trigger, target) {
            return DefaultAction::Allow;
        }
        self.render(doc, self.state(doc).toggled());
        DefaultAction::Prevent
    }

    pub fn on_document_click(&self, doc: &D, target: &D::Element) {
        if !doc.contains(&self.trigger, target) && !doc.contains(&self.dropdown, target) {
            self.render(doc, DropdownState::Closed);
        }
    }
}
