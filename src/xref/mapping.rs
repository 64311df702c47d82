//! The uid -> route mapping artifact.
//!
//! Written wholesale by `docref map` as a flat JSON object with sorted keys,
//! read once per process by the resolver.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{debug, log};

/// Errors while loading the mapping artifact.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("no uid mapping at `{0}`")]
    Missing(PathBuf),

    #[error("failed to read `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("failed to parse `{0}`")]
    Parse(PathBuf, #[source] serde_json::Error),
}

/// Identifier -> canonical route, ordered by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UidMapping(BTreeMap<String, String>);

impl UidMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. A repeated uid replaces the earlier route.
    pub fn insert(&mut self, uid: impl Into<String>, route: impl Into<String>) -> Option<String> {
        self.0.insert(uid.into(), route.into())
    }

    pub fn get(&self, uid: &str) -> Option<&str> {
        self.0.get(uid).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Pretty JSON, two-space indent, trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Load the artifact, distinguishing a missing file from a broken one.
    pub fn try_load(path: &Path) -> Result<Self, MappingError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(MappingError::Missing(path.to_path_buf()));
            }
            Err(e) => return Err(MappingError::Io(path.to_path_buf(), e)),
        };
        Self::from_json(&json).map_err(|e| MappingError::Parse(path.to_path_buf(), e))
    }

    /// Load the artifact, or fall back to an empty mapping.
    ///
    /// Logs a single warning on failure; every xref link then stays
    /// unresolved instead of failing the build.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(mapping) => {
                debug!("xref"; "loaded uid mapping: {} uids", mapping.len());
                mapping
            }
            Err(MappingError::Missing(path)) => {
                log!("warning"; "no uid mapping at {}, xref links will not be resolved", path.display());
                Self::new()
            }
            Err(e) => {
                let cause = std::error::Error::source(&e).map(ToString::to_string).unwrap_or_default();
                log!("warning"; "{e}: {cause}, xref links will not be resolved");
                Self::new()
            }
        }
    }
}

impl FromIterator<(String, String)> for UidMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
