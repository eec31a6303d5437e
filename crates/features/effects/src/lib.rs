//! # Effects
//!
//! Short-lived click feedback driven through the [`Scheduler`](tour_kernel::scheduler::Scheduler):
//!
//! * [`TagPulse`]: highlights an `.interest-tag` and briefly scales it up.
//! * [`PressFeedback`]: briefly scales `.cta-button`/`.tour-button` elements down.
//!
//! Each bound element owns one task slot per effect, so repeated clicks replace the pending
//! revert instead of stacking new ones.

mod press;
mod pulse;

pub use crate::press::PressFeedback;
pub use crate::pulse::TagPulse;

/// CSS `transform` value for a uniform scale.
#[must_use]
pub fn scale(factor: f64) -> String {
    format!("scale({factor})")
}
