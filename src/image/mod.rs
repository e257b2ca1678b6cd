//! Image processing utilities.
//!
//! # Modules
//!
//! - [`crop`]: fixed-aspect crop and downscale for covers, thumbnails and avatars

pub mod crop;

pub use crop::{CropError, CropSpec, crop_file};
