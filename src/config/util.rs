//! Configuration file lookup.

use std::path::{Path, PathBuf};

/// Find the config file by walking up from the current directory.
///
/// ```text
/// /home/user/site/docs/navigation/  ← cwd
/// /home/user/site/docref.toml       ← found
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting at `start`.
pub fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("docs/navigation");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("docref.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("docref.toml")).unwrap();
        assert_eq!(found, dir.path().join("docref.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_from(dir.path(), Path::new("no-such-config.toml")).is_none());
    }
}
