//! Configuration section definitions.
//!
//! | Module      | TOML Section  | Purpose                                   |
//! |-------------|---------------|-------------------------------------------|
//! | `site`      | `[site]`      | Docs route prefix                         |
//! | `content`   | `[content]`   | Docs trees, document extensions, excludes |
//! | `xref`      | `[xref]`      | Link scheme, uid field, mapping artifact  |
//! | `verify`    | `[verify]`    | Link verifier settings                    |
//! | `downloads` | `[downloads]` | Package download counter                  |

mod content;
mod downloads;
mod site;
mod verify;
mod xref;

pub use content::ContentConfig;
pub use downloads::DownloadsConfig;
pub use site::SiteConfig;
pub use verify::VerifyConfig;
pub use xref::XrefConfig;
