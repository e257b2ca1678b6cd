//! Utility modules shared across the crate.

pub mod date;
pub mod html;
pub mod mime;
