//! Kernel utilities shared across feature slices.
//! Keep this crate lightweight: it defines the seams every feature is written against
//! (document, browser, scheduler), their in-memory implementations and config loading.
//!
//! ## Seams
//! * [`Document`](document::Document): element lookup, classes, inline styles, form controls.
//! * [`Browser`](document::Browser): location, scrolling and alerts.
//! * [`Scheduler`](scheduler::Scheduler): keyed, cancellable delayed tasks.
//!
//! ## Config loading
//! ```rust
//! use tour_kernel::config::{FileFormat, load_config_str};
//!
//! let cfg: serde_json::Value = load_config_str(r#"{ "a": 1 }"#, FileFormat::Json).unwrap();
//! assert_eq!(cfg["a"], 1);
//! ```

pub mod config;
pub mod document;
pub mod memory;
pub mod prelude;
pub mod scheduler;

pub use tour_domain as domain;
