//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem paths (`normalize_path`, `resolve_path`, `to_slash`)
//! - [`route`]: Link target helpers (`is_external_link`, `split_target`)

pub mod fs;
pub mod route;

pub use fs::{normalize_path, relative_slash, resolve_path, to_slash};
