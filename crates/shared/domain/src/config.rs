use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level page configuration shared across feature handlers.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfigInner {
    pub booking: BookingConfig,
    pub navigation: NavigationConfig,
    pub effects: EffectsConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into handlers and scheduled tasks.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct PageConfig {
    #[serde(flatten, default)]
    inner: Arc<PageConfigInner>,
}

impl Deref for PageConfig {
    type Target = PageConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PageConfig {
    fn deref_mut(&mut self) -> &mut PageConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Booking form submission settings and user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub endpoint: String,
    pub busy_label: String,
    pub error_border: String,
    pub neutral_border: String,
    pub invalid_message: String,
    pub success_message: String,
    pub rejected_message: String,
    pub failure_message: String,
}

/// Navbar and anchor scrolling settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// `scrollY` above which the navbar turns solid.
    pub scroll_threshold: f64,
    pub solid_background: String,
    pub translucent_background: String,
    /// Gap kept between the navbar and a scrolled-to section.
    pub anchor_margin: f64,
}

/// Click feedback settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub accent_background: String,
    pub accent_color: String,
    pub pulse_scale: f64,
    pub press_scale: f64,
    pub delay_ms: u64,
}

// --- Default ---

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            endpoint: "/book".to_owned(),
            busy_label: "Booking...".to_owned(),
            error_border: "#ff3b30".to_owned(),
            neutral_border: "#d2d2d7".to_owned(),
            invalid_message: "Please fill in all required fields correctly.".to_owned(),
            success_message: "Booking successful! We will contact you soon to confirm the details."
                .to_owned(),
            rejected_message: "Booking failed. Please try again or contact us directly."
                .to_owned(),
            failure_message: "An error occurred. Please try again or contact us directly."
                .to_owned(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            solid_background: "rgba(255, 255, 255, 0.98)".to_owned(),
            translucent_background: "rgba(255, 255, 255, 0.95)".to_owned(),
            anchor_margin: 20.0,
        }
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            accent_background: "#0071e3".to_owned(),
            accent_color: "white".to_owned(),
            pulse_scale: 1.05,
            press_scale: 0.95,
            delay_ms: 150,
        }
    }
}
