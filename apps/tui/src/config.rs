use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DATA_ENV: &str = "STORAGE_DATA";
pub const EXPORT_DIR_ENV: &str = "EXPORT_DIR";
pub const LOG_FILE_ENV: &str = "LOG_FILE";
pub const DEBUG_ENV: &str = "DEBUG";

/// Runtime settings resolved from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Dataset JSON to load instead of the built-in data
    pub data_path: Option<PathBuf>,
    pub export_dir: PathBuf,
    pub log_file: PathBuf,
    pub debug: bool,
}

impl AppConfig {
    /// Reads `.env` (if present) and the process environment
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            data_path: non_empty(DATA_ENV).map(PathBuf::from),
            export_dir: non_empty(EXPORT_DIR_ENV)
                .map_or_else(|| PathBuf::from("./exports"), PathBuf::from),
            log_file: non_empty(LOG_FILE_ENV)
                .map_or_else(|| PathBuf::from("storage-compare.log"), PathBuf::from),
            debug: non_empty(DEBUG_ENV).is_some_and(|value| is_truthy(&value)),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = config_from(&[]);
        assert_eq!(config.data_path, None);
        assert_eq!(config.export_dir, PathBuf::from("./exports"));
        assert_eq!(config.log_file, PathBuf::from("storage-compare.log"));
        assert!(!config.debug);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            (DATA_ENV, "data/storage.json"),
            (EXPORT_DIR_ENV, "/tmp/radar"),
            (LOG_FILE_ENV, "debug.log"),
            (DEBUG_ENV, "true"),
        ]);
        assert_eq!(config.data_path, Some(PathBuf::from("data/storage.json")));
        assert_eq!(config.export_dir, PathBuf::from("/tmp/radar"));
        assert_eq!(config.log_file, PathBuf::from("debug.log"));
        assert!(config.debug);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[(DATA_ENV, "  "), (DEBUG_ENV, "")]);
        assert_eq!(config.data_path, None);
        assert!(!config.debug);
    }

    #[test]
    fn debug_flag_accepts_common_spellings() {
        for value in ["1", "TRUE", "yes", "on"] {
            assert!(config_from(&[(DEBUG_ENV, value)]).debug, "{value}");
        }
        for value in ["0", "false", "nope"] {
            assert!(!config_from(&[(DEBUG_ENV, value)]).debug, "{value}");
        }
    }
}
