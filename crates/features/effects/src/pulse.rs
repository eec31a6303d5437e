use crate::scale;
use std::time::Duration;
use tour_domain::config::EffectsConfig;
use tour_domain::constants::{BACKGROUND, COLOR, INTEREST_TAG, TRANSFORM};
use tour_kernel::prelude::*;
use tracing::{debug, trace};

const EFFECT: &str = "pulse";

/// Selection highlight for `.interest-tag` elements.
///
/// The accent colours stay applied after a click; only the scale is reverted.
#[derive(Debug, Clone)]
pub struct TagPulse<D: Document> {
    tags: Vec<D::Element>,
    config: EffectsConfig,
}

impl<D: Document> TagPulse<D> {
    pub fn bind(doc: &D, config: &EffectsConfig) -> Self {
        let tags = doc.elements_by_class(INTEREST_TAG);
        debug!(tags = tags.len(), "Interest tags bound");
        Self { tags, config: config.clone() }
    }

    pub fn on_element_click<S: Scheduler>(
        &self,
        doc: &D,
        scheduler: &S,
        target: &D::Element,
    ) -> DefaultAction {
        if let Some(slot) = self.tags.iter().position(|tag| doc.contains(tag, target)) {
            self.pulse(doc, scheduler, slot);
        }
        DefaultAction::Allow
    }

    fn pulse<S: Scheduler>(&self, doc: &D, scheduler: &S, slot: usize) {
        let tag = self.tags[slot].clone();
        doc.set_style(&tag, BACKGROUND, &self.config.accent_background);
        doc.set_style(&tag, COLOR, &self.config.accent_color);
        doc.set_style(&tag, TRANSFORM, &scale(self.config.pulse_scale));
        trace!(slot, "Interest tag pulsed");

        let doc = doc.clone();
        scheduler.schedule(
            TaskKey::new(EFFECT, slot),
            Duration::from_millis(self.config.delay_ms),
            Box::new(move || doc.set_style(&tag, TRANSFORM, &scale(1.0))),
        );
    }
}
