//! Presentational state mirrored by classes and inline styles.
//!
//! Each enum is read from a single property and rendered through a single function,
//! so paired properties (classes on two elements, `opacity` + `visibility`) cannot drift.

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    /// Derives the state from whether the menu panel carries the `active` class.
    #[must_use]
    pub const fn from_active(active: bool) -> Self {
        if active { Self::Open } else { Self::Closed }
    }

    /// Whether the `active` class should be present on the toggle and the panel.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

/// Open/closed state of the language dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DropdownState {
    Open,
    #[default]
    Closed,
}

/// Inline style pair rendered for a [`DropdownState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownStyle {
    pub opacity: &'static str,
    pub visibility: &'static str,
}

impl DropdownState {
    /// Only an explicit `opacity: 1` counts as open; stylesheet defaults are closed.
    #[must_use]
    pub fn from_opacity(opacity: &str) -> Self {
        if opacity.trim() == "1" { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    #[must_use]
    pub const fn style(self) -> DropdownStyle {
        match self {
            Self::Open => DropdownStyle { opacity: "1", visibility: "visible" },
            Self::Closed => DropdownStyle { opacity: "0", visibility: "hidden" },
        }
    }
}

/// Navbar background tone, a pure function of the vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavbarTone {
    Solid,
    Translucent,
}

impl NavbarTone {
    /// Strictly above the threshold is solid; no hysteresis.
    #[must_use]
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold { Self::Solid } else { Self::Translucent }
    }
}
