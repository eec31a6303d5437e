use tour_kernel::prelude::*;
use tracing::trace;

/// Marks the submit button busy for as long as it lives.
///
/// Dropping the guard puts back the original label and re-enables the button, including
/// when the submission future is dropped before the request settles.
#[derive(Debug)]
pub struct SubmitGuard<D: Document> {
    doc: D,
    button: Option<D::Element>,
    label: String,
}

impl<D: Document> SubmitGuard<D> {
    /// Without a button the guard does nothing.
    pub fn acquire(doc: &D, button: Option<D::Element>, busy_label: &str) -> Self {
        let label = button.as_ref().map(|b| doc.text(b)).unwrap_or_default();
        if let Some(button) = &button {
            doc.set_text(button, busy_label);
            doc.set_disabled(button, true);
        }
        Self { doc: doc.clone(), button, label }
    }
}

impl<D: Document> Drop for SubmitGuard<D> {
    fn drop(&mut self) {
        if let Some(button) = &self.button {
            self.doc.set_text(button, &self.label);
            self.doc.set_disabled(button, false);
            trace!("Submit button restored");
        }
    }
}
