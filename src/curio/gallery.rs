//! The gallery store: an ordered collection of saved artworks with
//! notes, unique by artwork id, newest-saved-first.
//!
//! Operations are pure with respect to their input collection (they
//! return a new one) and every mutating call performs exactly one
//! full-collection write to the backend. There is no batching and no
//! incremental diffing; the persisted value is a mirror of whatever the
//! last call returned.

use crate::error::Result;
use crate::model::{Artwork, GalleryItem};
use crate::schema;
use crate::store::GalleryBackend;

pub struct Gallery<S: GalleryBackend> {
    backend: S,
}

impl<S: GalleryBackend> Gallery<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Load the persisted collection. Infallible by contract: absence,
    /// unparseable JSON, and schema failures all degrade to an empty
    /// collection rather than surfacing an error.
    pub fn load(&self) -> Vec<GalleryItem> {
        let Some(raw) = self.backend.read_raw() else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(value) => schema::gallery_from_value(&value),
            Err(_) => Vec::new(),
        }
    }

    /// Prepend a new item for `artwork` unless one with the same id is
    /// already present. Persists either way.
    pub fn add(&mut self, items: &[GalleryItem], artwork: Artwork) -> Result<Vec<GalleryItem>> {
        let next = if items.iter().any(|it| it.artwork.id == artwork.id) {
            items.to_vec()
        } else {
            let mut next = Vec::with_capacity(items.len() + 1);
            next.push(GalleryItem::new(artwork));
            next.extend(items.iter().cloned());
            next
        };
        self.persist(&next)?;
        Ok(next)
    }

    /// Drop the item with the given artwork id. Idempotent: removing an
    /// absent id is not an error, and the collection is re-persisted
    /// regardless.
    pub fn remove(&mut self, items: &[GalleryItem], artwork_id: i64) -> Result<Vec<GalleryItem>> {
        let next: Vec<GalleryItem> = items
            .iter()
            .filter(|it| it.artwork.id != artwork_id)
            .cloned()
            .collect();
        self.persist(&next)?;
        Ok(next)
    }

    /// Replace the note of the matching item, leaving everything else
    /// untouched. The note is clamped through the validator first. A
    /// miss is a no-op on content but still re-persists.
    pub fn update_note(
        &mut self,
        items: &[GalleryItem],
        artwork_id: i64,
        note: &str,
    ) -> Result<Vec<GalleryItem>> {
        let safe_note = schema::clamp_note(note);
        let next: Vec<GalleryItem> = items
            .iter()
            .map(|it| {
                if it.artwork.id == artwork_id {
                    GalleryItem {
                        artwork: it.artwork.clone(),
                        note: safe_note.clone(),
                    }
                } else {
                    it.clone()
                }
            })
            .collect();
        self.persist(&next)?;
        Ok(next)
    }

    fn persist(&mut self, items: &[GalleryItem]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.write_raw(&raw)
    }
}
