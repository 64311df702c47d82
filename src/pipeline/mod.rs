//! Markdown transformation pipeline.
//!
//! ```text
//! markdown ─► header split ─► pulldown-cmark events ─► link transforms ─► HTML
//!                                                      ├─ XrefResolver
//!                                                      └─ IndexStripper
//! ```

pub mod render;
pub mod transform;

pub use render::{RenderPipeline, markdown_options};
pub use transform::XrefContext;
