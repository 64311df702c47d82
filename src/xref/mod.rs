//! Cross-reference index: uid headers, canonical routes and the mapping
//! artifact that `docref map` writes and the resolver reads.
//!
//! - [`frontmatter`] - leading `---` header block and the uid field
//! - [`route`] - canonical route of a document, `/index` suffix stripping
//! - [`mapping`] - [`UidMapping`] and its JSON artifact
//! - [`index`] - [`IndexBuilder`], the docs tree scan

pub mod frontmatter;
pub mod index;
pub mod mapping;
pub mod route;

pub use frontmatter::{UidExtractor, split_header};
pub use index::{IndexBuilder, write_mapping};
pub use mapping::UidMapping;
pub use route::{route_for_file, strip_index_suffix};
