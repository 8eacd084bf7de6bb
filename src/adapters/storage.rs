use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::{ReadOnlyStore, Store};
use crate::utils::error::{RankingsError, Result};

/// JSON-lines log kept in a single file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReadOnlyStore for FileStore {
    fn is_initialized(&self) -> bool {
        fs::metadata(&self.path)
            .map(|metadata| metadata.is_file())
            .unwrap_or(false)
    }

    fn is_empty(&self) -> bool {
        fs::metadata(&self.path)
            .map(|metadata| metadata.is_file() && metadata.len() == 0)
            .unwrap_or(false)
    }

    fn read_all_lines(&self) -> Result<Vec<String>> {
        if !self.is_initialized() {
            return Err(RankingsError::StoreNotFound {
                path: self.path.display().to_string(),
            });
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(content.lines().map(str::to_string).collect())
    }
}

impl Store for FileStore {
    fn append_all_lines(&self, lines: &[String]) -> Result<()> {
        let mut buffer = String::new();
        for line in lines {
            buffer.push_str(line);
            buffer.push('\n');
        }

        // One write per batch.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(buffer.as_bytes())?;

        tracing::debug!(
            "Appended {} line(s) to {}",
            lines.len(),
            self.path.display()
        );
        Ok(())
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        tracing::debug!("Created contest results store at {}", self.path.display());
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory log. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    lines: Arc<Mutex<Option<Vec<String>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// An initialized store holding `lines`.
    pub fn with_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let lines = lines.into_iter().map(Into::into).collect();
        Self {
            lines: Arc::new(Mutex::new(Some(lines))),
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, Option<Vec<String>>>> {
        self.lines
            .lock()
            .map_err(|_| std::io::Error::other("memory store lock poisoned").into())
    }
}

impl ReadOnlyStore for MemoryStore {
    fn is_initialized(&self) -> bool {
        self.lines
            .lock()
            .map(|lines| lines.is_some())
            .unwrap_or(false)
    }

    fn is_empty(&self) -> bool {
        self.lines
            .lock()
            .map(|lines| matches!(lines.as_deref(), Some([])))
            .unwrap_or(false)
    }

    fn read_all_lines(&self) -> Result<Vec<String>> {
        self.guard()?
            .clone()
            .ok_or_else(|| RankingsError::StoreNotFound {
                path: "<memory>".to_string(),
            })
    }
}

impl Store for MemoryStore {
    fn append_all_lines(&self, lines: &[String]) -> Result<()> {
        self.guard()?
            .get_or_insert_with(Vec::new)
            .extend_from_slice(lines);
        Ok(())
    }

    fn initialize(&self) -> Result<()> {
        self.guard()?.get_or_insert_with(Vec::new);
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        *self.guard()? = None;
        Ok(())
    }
}
