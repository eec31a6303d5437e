//! Facade crate for the tour site's page interactions.
//! Re-exports domain/kernel primitives and composes the feature slices behind one controller.
//! Keep this crate thin: it should compose other crates, not implement behavior.
//!
//! ## Usage
//! - Build a [`Document`](kernel::document::Document), a [`Browser`](kernel::document::Browser),
//!   a [`Scheduler`](kernel::scheduler::Scheduler) and a [`BookingTransport`].
//! - Call [`PageInteractionController::attach`] once the markup is in place, then forward
//!   document clicks, window scrolls and booking form submits to it.

mod controller;

pub use crate::controller::PageInteractionController;
pub use tour_booking::{BookingError, BookingTransport, SubmissionOutcome};
pub use tour_domain as domain;
pub use tour_kernel as kernel;

/// Feature slices composed by the controller.
pub mod features {
    pub use tour_booking as booking;
    pub use tour_effects as effects;
    pub use tour_navigation as navigation;
}
