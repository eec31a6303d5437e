use crate::scale;
use std::time::Duration;
use tour_domain::config::EffectsConfig;
use tour_domain::constants::{CTA_BUTTON, FRAGMENT_PREFIX, HREF, TOUR_BUTTON, TRANSFORM};
use tour_kernel::prelude::*;
use tracing::debug;

const EFFECT: &str = "press";

/// Press-down feedback for call-to-action and tour buttons.
///
/// Buttons linking to an in-page fragment are left alone; anchor scrolling owns them.
#[derive(Debug, Clone)]
pub struct PressFeedback<D: Document> {
    buttons: Vec<D::Element>,
    config: EffectsConfig,
}

impl<D: Document> PressFeedback<D> {
    /// Binds every `.cta-button` and `.tour-button`; an element with both classes is bound once.
    pub fn bind(doc: &D, config: &EffectsConfig) -> Self {
        let mut buttons = doc.elements_by_class(CTA_BUTTON);
        for button in doc.elements_by_class(TOUR_BUTTON) {
            if !buttons.contains(&button) {
                buttons.push(button);
            }
        }
        debug!(buttons = buttons.len(), "Press feedback bound");
        Self { buttons, config: config.clone() }
    }

    pub fn on_element_click<S: Scheduler>(
        &self,
        doc: &D,
        scheduler: &S,
        target: &D::Element,
    ) -> DefaultAction {
        let Some(slot) = self.buttons.iter().position(|button| doc.contains(button, target)) else {
            return DefaultAction::Allow;
        };
        let button = self.buttons[slot].clone();
        if doc.attribute(&button, HREF).is_some_and(|href| href.contains(FRAGMENT_PREFIX)) {
            return DefaultAction::Allow;
        }

        doc.set_style(&button, TRANSFORM, &scale(self.config.press_scale));
        let doc = doc.clone();
        scheduler.schedule(
            TaskKey::new(EFFECT, slot),
            Duration::from_millis(self.config.delay_ms),
            Box::new(move || doc.set_style(&button, TRANSFORM, "")),
        );
        DefaultAction::Allow
    }
}
