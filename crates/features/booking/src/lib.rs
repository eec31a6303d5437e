//! # Booking
//!
//! Validates `#booking-form` and submits it once per attempt:
//!
//! 1. [`validate_form`] paints field borders; any failure alerts and stops.
//! 2. A [`SubmitGuard`] marks the `.book-button` busy.
//! 3. The form is posted through a [`BookingTransport`] and the reply is alerted.
//! 4. The guard is dropped last, restoring the button.

mod error;
mod guard;
mod transport;
mod validation;

pub use crate::error::{BookingError, BookingErrorExt};
pub use crate::guard::SubmitGuard;
pub use crate::transport::BookingTransport;
pub use crate::validation::{FieldCheck, FieldStatus, ValidationReport, is_email, validate_form};

use tour_domain::config::BookingConfig;
use tour_domain::constants::{BOOK_BUTTON, BOOKING_FORM};
use tour_kernel::prelude::*;
use tracing::{debug, error, info, warn};

/// How a submission attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Validation failed; nothing was sent.
    Invalid(ValidationReport),
    Booked,
    /// The server answered with a falsy `success`; `message` is what the visitor was shown.
    Rejected { message: String },
    /// The request failed or the reply could not be read.
    Failed,
}

/// The page's booking form.
#[derive(Debug, Clone)]
pub struct BookingForm<D: Document> {
    form: D::Element,
}

impl<D: Document> BookingForm<D> {
    pub fn bind(doc: &D) -> Option<Self> {
        let form = doc.element_by_id(BOOKING_FORM);
        if form.is_none() {
            debug!("Booking form not present, skipping");
        }
        form.map(|form| Self { form })
    }

    pub const fn element(&self) -> &D::Element {
        &self.form
    }

    /// Runs one submission attempt. Every outcome has already been reported to the visitor.
    pub async fn submit<B, T>(
        &self,
        doc: &D,
        browser: &B,
        transport: &T,
        config: &BookingConfig,
    ) -> SubmissionOutcome
    where
        B: Browser,
        T: BookingTransport,
    {
        let report = validate_form(doc, &self.form, config);
        if !report.is_valid() {
            debug!(failures = report.failures().count(), "Booking form rejected by validation");
            browser.alert(&config.invalid_message);
            return SubmissionOutcome::Invalid(report);
        }

        let button = doc.find_within(&self.form, BOOK_BUTTON);
        if button.is_none() {
            warn!("Booking form has no submit button");
        }
        let guard = SubmitGuard::acquire(doc, button, &config.busy_label);

        let payload = doc.form_entries(&self.form);
        let outcome = match transport.post(&config.endpoint, &payload).await {
            Ok(response) if response.success => {
                info!("Booking accepted");
                browser.alert(&config.success_message);
                doc.reset_form(&self.form);
                SubmissionOutcome::Booked
            },
            Ok(response) => {
                let message = response.message.unwrap_or_else(|| config.rejected_message.clone());
                info!(%message, "Booking rejected by server");
                browser.alert(&message);
                SubmissionOutcome::Rejected { message }
            },
            Err(err) => {
                error!(error = %err, "Booking submission failed");
                browser.alert(&config.failure_message);
                SubmissionOutcome::Failed
            },
        };

        drop(guard);
        outcome
    }
}
