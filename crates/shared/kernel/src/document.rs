//! Access to the page's element tree and window.
//!
//! Feature handlers are written against these traits only. `tour-web` implements them
//! over `web-sys`; [`crate::memory`] implements them in memory for tests.

use std::fmt::Debug;
use tour_domain::booking::FormPayload;

/// The page's element tree.
///
/// Handles are cheap to clone and refer to live elements; every method reads or writes
/// the current state. Elements are never created or removed through this trait.
pub trait Document: Clone + 'static {
    type Element: Clone + PartialEq + Debug + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;

    fn first_by_class(&self, class: &str) -> Option<Self::Element> {
        self.elements_by_class(class).into_iter().next()
    }

    /// All `<a>` elements whose raw `href` attribute starts with `prefix`, in document order.
    fn links_with_href_prefix(&self, prefix: &str) -> Vec<Self::Element>;

    /// First descendant of `root` carrying `class`.
    fn find_within(&self, root: &Self::Element, class: &str) -> Option<Self::Element>;

    /// Whether `node` is `ancestor` itself or one of its descendants.
    fn contains(&self, ancestor: &Self::Element, node: &Self::Element) -> bool;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;
    fn set_class(&self, element: &Self::Element, class: &str, present: bool);

    /// Inline style value; empty when unset.
    fn style(&self, element: &Self::Element, property: &str) -> String;
    /// Sets an inline style; an empty value removes the declaration.
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn offset_top(&self, element: &Self::Element) -> f64;
    fn offset_height(&self, element: &Self::Element) -> f64;

    fn text(&self, element: &Self::Element) -> String;
    fn set_text(&self, element: &Self::Element, text: &str);

    fn is_disabled(&self, element: &Self::Element) -> bool;
    fn set_disabled(&self, element: &Self::Element, disabled: bool);

    /// First control inside `form` whose `name` attribute equals `name`.
    fn form_field(&self, form: &Self::Element, name: &str) -> Option<Self::Element>;
    /// Current value of a form control; empty for non-controls.
    fn field_value(&self, field: &Self::Element) -> String;
    /// Named, enabled controls of `form` in document order.
    fn form_entries(&self, form: &Self::Element) -> FormPayload;
    /// Restores every control of `form` to its default value.
    fn reset_form(&self, form: &Self::Element);
}

/// The browsing context around the document.
pub trait Browser: Clone + 'static {
    /// `location.pathname`.
    fn pathname(&self) -> String;
    /// Full page navigation to `href`.
    fn navigate(&self, href: &str);
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
    /// Blocking user-facing message.
    fn alert(&self, message: &str);
}

/// Whether the browser's default action for an event should still run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DefaultAction {
    #[default]
    Allow,
    Prevent,
}

impl DefaultAction {
    /// Combines the decisions of several handlers; any `Prevent` wins.
    #[must_use]
    pub const fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::Allow, Self::Allow) => Self::Allow,
            _ => Self::Prevent,
        }
    }

    #[must_use]
    pub const fn is_prevented(self) -> bool {
        matches!(self, Self::Prevent)
    }
}
