//! Command-line interface module.

mod args;
pub mod downloads;
pub mod map;
pub mod render;
pub mod resolve;
pub mod verify;

pub use args::{Cli, Commands, DownloadsArgs};
