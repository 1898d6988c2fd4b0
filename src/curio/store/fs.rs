use super::GalleryBackend;
use crate::error::{CurioError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const GALLERY_FILENAME: &str = "gallery.json";

/// File-based storage: one `gallery.json` under the curio data dir.
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn gallery_path(&self) -> PathBuf {
        self.data_dir.join(GALLERY_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(CurioError::Io)?;
        }
        Ok(())
    }
}

impl GalleryBackend for FileBackend {
    fn read_raw(&self) -> Option<String> {
        fs::read_to_string(self.gallery_path()).ok()
    }

    fn write_raw(&mut self, raw: &str) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;
        fs::write(self.gallery_path(), raw).map_err(CurioError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("nested"));
        assert!(backend.read_raw().is_none());
    }

    #[test]
    fn write_creates_dir_and_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("curio"));
        backend.write_raw("[]").unwrap();
        assert_eq!(backend.read_raw().as_deref(), Some("[]"));
    }
}
