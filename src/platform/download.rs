/// Download surfaces: where exported wallpapers end up

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::debug;

use crate::{Error, Result};

/// Receipt returned by a surface after a successful delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub filename: String,
    /// Where the payload landed, if the surface writes to disk
    pub path: Option<PathBuf>,
    pub bytes: usize,
}

/// Accepts a filename and an encoded payload and saves or shares it.
pub trait DownloadSurface: Send + Sync {
    fn deliver(&self, filename: &str, payload: &[u8]) -> Result<Delivery>;
}

/// Writes each payload into a fixed directory
pub struct DirectorySurface {
    dir: PathBuf,
}

impl DirectorySurface {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySurface { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSurface for DirectorySurface {
    fn deliver(&self, filename: &str, payload: &[u8]) -> Result<Delivery> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            Error::DownloadError(format!("cannot create {}: {}", self.dir.display(), e))
        })?;
        let path = self.dir.join(filename);
        std::fs::write(&path, payload)
            .map_err(|e| Error::DownloadError(format!("cannot write {}: {}", path.display(), e)))?;
        debug!("Wrote {} bytes to {}", payload.len(), path.display());
        Ok(Delivery {
            filename: filename.to_string(),
            path: Some(path),
            bytes: payload.len(),
        })
    }
}

/// Keeps deliveries in memory, in order
pub struct MemorySurface {
    files: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        MemorySurface { files: Mutex::new(Vec::new()) }
    }

    /// Everything delivered so far
    pub fn files(&self) -> Vec<(String, Vec<u8>)> {
        self.files.lock().unwrap().clone()
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadSurface for MemorySurface {
    fn deliver(&self, filename: &str, payload: &[u8]) -> Result<Delivery> {
        self.files
            .lock()
            .unwrap()
            .push((filename.to_string(), payload.to_vec()));
        Ok(Delivery {
            filename: filename.to_string(),
            path: None,
            bytes: payload.len(),
        })
    }
}
