use std::path::PathBuf;

pub const DEFAULT_STORE_PATH: &str = "data/meetings.json";
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/meeting_rater.log";

/// Runtime settings read from the environment (and `.env`, if loaded).
///
/// | Variable              | Default                   |
/// |-----------------------|---------------------------|
/// | `MEETING_RATER_STORE` | `data/meetings.json`      |
/// | `LOG_FILE_PATH`       | `logs/meeting_rater.log`  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub store_path: PathBuf,
    pub log_file_path: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            store_path: get("MEETING_RATER_STORE", DEFAULT_STORE_PATH),
            log_file_path: get("LOG_FILE_PATH", DEFAULT_LOG_FILE_PATH),
        }
    }

    /// Replaces the store path when `path` is given.
    pub fn with_store_override(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.store_path = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings.store_path, PathBuf::from(DEFAULT_STORE_PATH));
        assert_eq!(settings.log_file_path, PathBuf::from(DEFAULT_LOG_FILE_PATH));
    }

    #[test]
    fn test_reads_values_and_ignores_blank() {
        let env: HashMap<&str, &str> =
            [("MEETING_RATER_STORE", "/tmp/m.json"), ("LOG_FILE_PATH", "  ")].into();
        let settings = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(settings.store_path, PathBuf::from("/tmp/m.json"));
        assert_eq!(settings.log_file_path, PathBuf::from(DEFAULT_LOG_FILE_PATH));
    }

    #[test]
    fn test_store_override() {
        let settings =
            Settings::from_lookup(|_| None).with_store_override(Some(PathBuf::from("x.json")));
        assert_eq!(settings.store_path, PathBuf::from("x.json"));

        let unchanged = Settings::from_lookup(|_| None).with_store_override(None);
        assert_eq!(unchanged.store_path, PathBuf::from(DEFAULT_STORE_PATH));
    }
}
