//! # Storage Layer
//!
//! The persisted gallery is a single value: one JSON document holding
//! the whole collection, rewritten in full on every mutation. The
//! [`GalleryBackend`] trait abstracts where that value lives so the
//! gallery logic stays decoupled from persistence details.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, `gallery.json` inside the
//!   curio data directory
//! - [`memory::MemoryBackend`]: in-memory storage for tests
//!
//! Reading is deliberately infallible at this seam: a missing or
//! unreadable value is reported as `None` and the caller degrades to an
//! empty collection. Only writes can fail outward.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for the single persisted gallery value.
pub trait GalleryBackend {
    /// Read the raw persisted value, if any.
    fn read_raw(&self) -> Option<String>;

    /// Replace the persisted value wholesale.
    fn write_raw(&mut self, raw: &str) -> Result<()>;
}
