//! Command-line interface module.

mod args;
mod common;
pub mod crop;
pub mod init;
pub mod meta;
pub mod normalize;
pub mod og;
pub mod serve;
pub mod sitemap;

pub use args::{Cli, Commands, CropArgs, MetaArgs, NormalizeArgs, OgArgs};
