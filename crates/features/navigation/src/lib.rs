//! # Navigation
//!
//! Handlers for the page chrome:
//!
//! * [`NavigationMenu`]: the mobile hamburger menu, closed by its links and by outside clicks.
//! * [`LanguageSelector`]: the language dropdown, bound only when both elements exist.
//! * [`AnchorScroller`]: in-page `#fragment` links with navbar-aware smooth scrolling.
//! * [`NavbarBackground`]: navbar tone driven by the vertical scroll offset.
//!
//! Every handler is bound once against a [`Document`](tour_kernel::document::Document) and
//! holds element handles only; all state lives in the document itself.

mod anchor;
mod language;
mod menu;
mod navbar;

pub use crate::anchor::AnchorScroller;
pub use crate::language::LanguageSelector;
pub use crate::menu::NavigationMenu;
pub use crate::navbar::NavbarBackground;
