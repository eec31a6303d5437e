//! # Tour Web
//!
//! Browser host for the page interactions: binds [`tour::PageInteractionController`] to the
//! live DOM through `web-sys` and forwards document clicks, window scrolls and booking form
//! submits to it.
//!
//! Only [`parse_page_config`], [`awaits_markup`] and [`WebError`] build on native targets;
//! the bindings need `--features web` and a wasm32 target.

mod error;
mod page_config;
mod ready;

pub use crate::error::{WebError, WebErrorExt};
pub use crate::page_config::parse_page_config;
pub use crate::ready::awaits_markup;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use crate::web::{BrowserDocument, BrowserWindow, FetchTransport, TimeoutScheduler, start};
