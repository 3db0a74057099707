use std::{fs, io, path::PathBuf};

use log::{debug, info, trace};
use thiserror::Error;

use super::store::TaskStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("{} is not a valid task record: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("could not encode tasks: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable home of the two task lists.
pub trait Storage {
    /// A missing record is not an error; it loads as two empty lists.
    fn load(&self) -> Result<TaskStore, StorageError>;
    fn save(&mut self, tasks: &TaskStore) -> Result<(), StorageError>;
}

/// `{"todo": [...], "done": [...]}` in a single JSON file, rewritten in full
/// on every save.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn scratch_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Storage for JsonFile {
    fn load(&self) -> Result<TaskStore, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No task record at {}, starting empty", self.path.display());
                return Ok(TaskStore::default());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let tasks: TaskStore =
            serde_json::from_str(&contents).map_err(|source| StorageError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        info!(
            "Loaded {} pending and {} done tasks from {}",
            tasks.todo.len(),
            tasks.done.len(),
            self.path.display()
        );
        Ok(tasks)
    }

    fn save(&mut self, tasks: &TaskStore) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(tasks)?;
        let write_err = |source: io::Error| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                debug!("Creating {}", parent.display());
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        // Write beside the target and rename so a crash never truncates it.
        let scratch = self.scratch_path();
        fs::write(&scratch, encoded).map_err(write_err)?;
        fs::rename(&scratch, &self.path).map_err(write_err)?;
        trace!("Saved tasks to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn sample() -> TaskStore {
        TaskStore {
            todo: vec!["Buy milk".into(), "Call mum".into(), "Buy milk".into()],
            done: vec!["Taxes ✓".into()],
        }
    }

    #[test]
    fn missing_file_loads_empty() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let storage = JsonFile::new(dir.path().join("tasks.json"));
        assert_eq!(storage.load()?, TaskStore::default());
        Ok(())
    }

    #[test]
    fn save_then_load_preserves_order_and_content() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut storage = JsonFile::new(dir.path().join("tasks.json"));
        storage.save(&sample())?;
        assert_eq!(storage.load()?, sample());
        assert!(!storage.scratch_path().exists());
        Ok(())
    }

    #[test]
    fn record_has_two_named_fields() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tasks.json");
        JsonFile::new(&path).save(&sample())?;

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(
            raw,
            serde_json::json!({
                "todo": ["Buy milk", "Call mum", "Buy milk"],
                "done": ["Taxes ✓"],
            })
        );
        Ok(())
    }

    #[test]
    fn reads_records_written_by_hand() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tasks.json");
        fs::write(&path, r#"{"todo": ["A", "B"], "done": ["C"]}"#)?;
        let tasks = JsonFile::new(&path).load()?;
        assert_eq!(tasks.todo, vec!["A", "B"]);
        assert_eq!(tasks.done, vec!["C"]);
        Ok(())
    }

    #[test]
    fn malformed_record_is_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tasks.json");
        fs::write(&path, r#"{"todo": "not a list"}"#)?;

        let err = JsonFile::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Malformed { .. }));
        assert!(err.to_string().contains("tasks.json"));
        // Left untouched for the user to repair.
        assert_eq!(fs::read_to_string(&path)?, r#"{"todo": "not a list"}"#);
        Ok(())
    }

    #[test]
    fn save_creates_missing_directories() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut storage = JsonFile::new(dir.path().join("nested/deeper/tasks.json"));
        storage.save(&sample())?;
        assert_eq!(storage.load()?, sample());
        Ok(())
    }

    #[test]
    fn save_overwrites_previous_record() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut storage = JsonFile::new(dir.path().join("tasks.json"));
        storage.save(&sample())?;
        storage.save(&TaskStore::default())?;
        assert_eq!(storage.load()?, TaskStore::default());
        Ok(())
    }
}
