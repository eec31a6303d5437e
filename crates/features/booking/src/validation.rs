use regex::Regex;
use std::sync::LazyLock;
use tour_domain::config::BookingConfig;
use tour_domain::constants::{BORDER_COLOR, REQUIRED_FIELDS, USER_EMAIL};
use tour_kernel::prelude::*;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    /// No control with this name exists in the form.
    Missing,
    /// Empty after trimming.
    Blank,
    MalformedEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCheck {
    pub name: &'static str,
    pub status: FieldStatus,
}

/// Per-field outcome of one validation pass, in required-field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    checks: Vec<FieldCheck>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|c| c.status == FieldStatus::Valid)
    }

    #[must_use]
    pub fn checks(&self) -> &[FieldCheck] {
        &self.checks
    }

    pub fn failures(&self) -> impl Iterator<Item = &FieldCheck> {
        self.checks.iter().filter(|c| c.status != FieldStatus::Valid)
    }
}

#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Checks every required field of `form` and paints each present field's border.
pub fn validate_form<D: Document>(
    doc: &D,
    form: &D::Element,
    config: &BookingConfig,
) -> ValidationReport {
    let checks = REQUIRED_FIELDS
        .iter()
        .map(|&name| {
            let Some(field) = doc.form_field(form, name) else {
                return FieldCheck { name, status: FieldStatus::Missing };
            };
            let value = doc.field_value(&field);
            let status = if value.trim().is_empty() {
                FieldStatus::Blank
            } else if name == USER_EMAIL && !is_email(&value) {
                FieldStatus::MalformedEmail
            } else {
                FieldStatus::Valid
            };

            let border = match status {
                FieldStatus::Valid => &config.neutral_border,
                _ => &config.error_border,
            };
            doc.set_style(&field, BORDER_COLOR, border);
            FieldCheck { name, status }
        })
        .collect();

    ValidationReport { checks }
}
