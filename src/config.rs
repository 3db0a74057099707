//! Optional settings file.
//!
//! Lives at `<config dir>/todone/config.toml`. Every key is optional and a
//! missing file means all defaults:
//!
//! ```toml
//! tasks_file = "tasks.json"   # relative paths resolve against the working dir
//! log_file = "todone.log"
//! log_level = "info"          # off, error, warn, info, debug, trace
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use simplelog::LevelFilter;
use thiserror::Error;

pub const DEFAULT_TASKS_FILE: &str = "tasks.json";
pub const DEFAULT_LOG_FILE: &str = "todone.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

/// The file as written; anything left out falls back to a default.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    tasks_file: Option<PathBuf>,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tasks_file: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: LevelFilter::Info,
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("todone").join("config.toml"))
}

/// Loads the user's config, or defaults when there is no config directory
/// or no file in it.
pub fn load() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let file = match fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => FileConfig::default(),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    resolve(file)
}

fn resolve(file: FileConfig) -> Result<Config, ConfigError> {
    let defaults = Config::default();
    let log_level = match file.log_level {
        Some(level) => {
            LevelFilter::from_str(level.trim()).map_err(|_| ConfigError::LogLevel(level))?
        }
        None => defaults.log_level,
    };
    Ok(Config {
        tasks_file: file.tasks_file.unwrap_or(defaults.tasks_file),
        log_file: file.log_file.unwrap_or(defaults.log_file),
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn missing_file_gives_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = load_from(&dir.path().join("config.toml"))?;
        assert_eq!(config, Config::default());
        assert_eq!(config.tasks_file, PathBuf::from("tasks.json"));
        Ok(())
    }

    #[test]
    fn file_values_override_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
tasks_file = "/var/lib/todone/tasks.json"
log_level = "DEBUG"
"#,
        )?;

        let config = load_from(&path)?;
        assert_eq!(config.tasks_file, PathBuf::from("/var/lib/todone/tasks.json"));
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(config.log_level, LevelFilter::Debug);
        Ok(())
    }

    #[test]
    fn unknown_log_level_is_rejected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_level = \"loud\"\n")?;

        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(ref level) if level == "loud"));
        Ok(())
    }

    #[test]
    fn malformed_toml_is_rejected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "tasks_file = [\n")?;

        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
        Ok(())
    }
}
