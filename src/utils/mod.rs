//! Small helpers shared by the commands.

pub mod path;
mod plural;

pub use plural::{plural_count, plural_s};
