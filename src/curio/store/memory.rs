use super::GalleryBackend;
use crate::error::Result;

/// In-memory storage for testing. Does NOT persist data.
#[derive(Default)]
pub struct MemoryBackend {
    raw: Option<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-persisted raw value, e.g. to simulate a
    /// corrupted or legacy gallery file.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }
}

impl GalleryBackend for MemoryBackend {
    fn read_raw(&self) -> Option<String> {
        self.raw.clone()
    }

    fn write_raw(&mut self, raw: &str) -> Result<()> {
        self.raw = Some(raw.to_string());
        Ok(())
    }
}
