//! Project configuration from `docref.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/   # [site] [content] [xref] [verify] [downloads]
//! ├── error      # ConfigError, ConfigDiagnostics
//! ├── util       # config file lookup
//! └── mod.rs     # DocsConfig (this file)
//! ```
//!
//! The config file is optional: without one every section takes its
//! defaults and the current directory is the project root.

pub mod section;
mod error;
mod util;

pub use error::{ConfigDiagnostics, ConfigError};
pub use section::{ContentConfig, DownloadsConfig, SiteConfig, VerifyConfig, XrefConfig};

use util::find_config_file;

use crate::{
    cli::{Cli, Commands},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docref.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Absolute path to the config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of the config file
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub xref: XrefConfig,

    #[serde(default)]
    pub verify: VerifyConfig,

    #[serde(default)]
    pub downloads: DownloadsConfig,
}

impl DocsConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file; CLI flags override
    /// file values.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.apply_command_options(&cli.command);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.content.validate(&mut diag);
        self.xref.validate(&mut diag);
        self.verify.validate(&mut diag);
        self.downloads.validate(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Apply command-specific CLI overrides.
    fn apply_command_options(&mut self, command: &Commands) {
        match command {
            Commands::Verify { strict } => {
                if *strict {
                    self.verify.strict = true;
                }
            }
            Commands::Downloads { args } => {
                if let Some(owner) = &args.owner {
                    self.downloads.owner.clone_from(owner);
                }
            }
            Commands::Map | Commands::Render { .. } | Commands::Resolve { .. } => {}
        }
    }

    // ========================================================================
    // paths
    // ========================================================================

    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory (absolute paths are kept).
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.root_join(&self.content.docs)
    }

    pub fn versioned_dir(&self) -> PathBuf {
        self.root_join(&self.content.versioned)
    }

    pub fn mapping_path(&self) -> PathBuf {
        self.root_join(&self.xref.mapping)
    }

    pub fn downloads_cache_path(&self) -> PathBuf {
        self.root_join(&self.downloads.cache_file)
    }
}

impl FromStr for DocsConfig {
    type Err = ConfigError;

    /// Parse configuration from a TOML string.
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

// ============================================================================
// tests
// ============================================================================
