//! Host configuration
//!
//! Values the host needs before it can open a window or run a scan. They are
//! resolved once during setup and handed to the components that need them.

use std::path::PathBuf;

/// Environment variable overriding the project checkout the scanner runs in.
pub const ROOT_ENV: &str = "MODEL_LOADER_ROOT";

/// Environment variable forwarded to the scanner as `--cache-root`.
pub const CACHE_ROOT_ENV: &str = "MODEL_LOADER_CACHE_ROOT";

/// Label of the single application window.
pub const MAIN_WINDOW_LABEL: &str = "main";
pub const MAIN_WINDOW_TITLE: &str = "Model Loader";
pub const MAIN_WINDOW_WIDTH: f64 = 1024.0;
pub const MAIN_WINDOW_HEIGHT: f64 = 768.0;

#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Directory containing the `backend` Python package and the `.venv`.
    pub project_root: PathBuf,
    /// Hugging Face cache directory to scan instead of the scanner's default.
    pub cache_root: Option<PathBuf>,
}

impl HostConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset; anything else is used verbatim.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };

        Self {
            project_root: non_empty(ROOT_ENV).unwrap_or_else(default_project_root),
            cache_root: non_empty(CACHE_ROOT_ENV),
        }
    }
}

/// The project checkout this host was built from.
fn default_project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_manifest_dir_without_cache_override() {
        let config = HostConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.project_root, PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        assert_eq!(config.cache_root, None);
    }

    #[test]
    fn honors_overrides() {
        let config = HostConfig::from_lookup(lookup_from(&[
            (ROOT_ENV, "/srv/loader"),
            (CACHE_ROOT_ENV, "/data/hf/hub"),
        ]));
        assert_eq!(config.project_root, PathBuf::from("/srv/loader"));
        assert_eq!(config.cache_root, Some(PathBuf::from("/data/hf/hub")));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = HostConfig::from_lookup(lookup_from(&[(ROOT_ENV, "  "), (CACHE_ROOT_ENV, "")]));
        assert_eq!(config.project_root, PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        assert_eq!(config.cache_root, None);
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_path() {
        let config = HostConfig::from_lookup(lookup_from(&[
            (ROOT_ENV, " /srv/loader "),
            (CACHE_ROOT_ENV, "/data/hub\t"),
        ]));
        assert_eq!(config.project_root, PathBuf::from(" /srv/loader "));
        assert_eq!(config.cache_root, Some(PathBuf::from("/data/hub\t")));
    }
}
