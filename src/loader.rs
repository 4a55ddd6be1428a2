//! Dotenv loading into the process environment.
//!
//! Values already present in the process environment are never overwritten.
//! The whole file is parsed before anything is applied, so a missing,
//! unreadable or malformed file leaves the environment untouched and the
//! reason is logged.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

/// Name searched for by [`load_env`].
pub const ENV_FILE_NAME: &str = ".env";

/// What a single load attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and its entries were applied.
    Loaded(PathBuf),
    /// No file was found.
    Missing,
    /// A file was found but could not be read or parsed. Nothing was applied.
    Skipped(String),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}

/// Search for `.env` in the working directory and its ancestors and load it.
pub fn load_env() -> LoadOutcome {
    match find_env_file() {
        Some(path) => load_env_from(path),
        None => {
            debug!("no environment file found");
            LoadOutcome::Missing
        }
    }
}

/// Load a specific dotenv file.
pub fn load_env_from<P: AsRef<Path>>(path: P) -> LoadOutcome {
    let path = path.as_ref();

    let entries = match dotenvy::from_path_iter(path)
        .and_then(|iter| iter.collect::<Result<Vec<(String, String)>, _>>())
    {
        Ok(entries) => entries,
        Err(err) if err.not_found() => {
            debug!(path = %path.display(), "no environment file found");
            return LoadOutcome::Missing;
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring invalid environment file");
            return LoadOutcome::Skipped(err.to_string());
        }
    };

    let applied = apply_unset(entries);
    info!(path = %path.display(), applied, "loaded environment file");
    LoadOutcome::Loaded(path.to_path_buf())
}

fn find_env_file() -> Option<PathBuf> {
    let cwd = env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(ENV_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Set every entry whose key is not already present. Returns how many were set.
fn apply_unset(entries: Vec<(String, String)>) -> usize {
    let mut applied = 0;
    for (key, value) in entries {
        if env::var_os(&key).is_some() {
            continue;
        }
        // SAFETY: the loader runs once at startup, before any reporter reads
        // the environment and before other threads are spawned.
        unsafe { env::set_var(&key, &value) };
        applied += 1;
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let before: Vec<_> = env::vars()
            .filter(|(k, _)| k.starts_with("ENVREPORT_NOOP_"))
            .collect();

        let outcome = load_env_from(temp_dir.path().join("does-not-exist.env"));

        let after: Vec<_> = env::vars()
            .filter(|(k, _)| k.starts_with("ENVREPORT_NOOP_"))
            .collect();
        assert_eq!(outcome, LoadOutcome::Missing);
        assert_eq!(before, after);
    }

    #[test]
    fn test_loads_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(
            &path,
            "# comment\n\nENVREPORT_UNIT_LOADED=abc123\nENVREPORT_UNIT_OTHER=two\n",
        )
        .unwrap();

        let outcome = load_env_from(&path);

        assert_eq!(outcome, LoadOutcome::Loaded(path));
        assert_eq!(env::var("ENVREPORT_UNIT_LOADED").unwrap(), "abc123");
        assert_eq!(env::var("ENVREPORT_UNIT_OTHER").unwrap(), "two");
    }

    #[test]
    fn test_existing_values_win() {
        let original = env::var_os("PATH").expect("PATH is set for tests");
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(&path, "PATH=/nowhere\n").unwrap();

        assert!(load_env_from(&path).is_loaded());
        assert_eq!(env::var_os("PATH").unwrap(), original);
    }

    #[test]
    fn test_malformed_file_applies_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        fs::write(
            &path,
            "ENVREPORT_BAD_BEFORE=one\nthis line is not valid\nENVREPORT_BAD_AFTER=two\n",
        )
        .unwrap();

        let outcome = load_env_from(&path);

        assert!(matches!(outcome, LoadOutcome::Skipped(_)));
        assert!(env::var_os("ENVREPORT_BAD_BEFORE").is_none());
        assert!(env::var_os("ENVREPORT_BAD_AFTER").is_none());
    }

    #[test]
    fn test_directory_is_skipped_not_fatal() {
        let temp_dir = TempDir::new().unwrap();

        let outcome = load_env_from(temp_dir.path());

        assert!(!outcome.is_loaded());
    }
}
