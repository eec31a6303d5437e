//! # Domain Models
//!
//! This crate contains pure page types with a single dependency (`serde`).
//! Keep it lean: no DOM access, networking, or heavy logic. Just the markup contract,
//! configuration, presentational state and booking wire types.

pub mod booking;
pub mod config;
pub mod constants;
pub mod state;
