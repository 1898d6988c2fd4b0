//! # API Facade
//!
//! Single entry point for all curio operations, regardless of UI.
//! The facade dispatches to the command layer for gallery mutations and
//! orchestrates the remote client for anything that needs the network.
//! It returns structured [`CmdResult`] values and never touches
//! stdout/stderr; presentation belongs to whoever called it.
//!
//! Generic over [`GalleryBackend`] so tests can run against the
//! in-memory backend without a filesystem.

use crate::aic::{self, AicClient, ImageWidth};
use crate::commands;
use crate::error::{CurioError, Result};
use crate::featured;
use crate::gallery::Gallery;
use crate::model::Artwork;
use crate::store::GalleryBackend;

pub struct CurioApi<S: GalleryBackend> {
    gallery: Gallery<S>,
    client: AicClient,
}

impl<S: GalleryBackend> CurioApi<S> {
    pub fn new(backend: S, client: AicClient) -> Self {
        Self {
            gallery: Gallery::new(backend),
            client,
        }
    }

    /// Free-text search against the remote collection. Marks nothing,
    /// mutates nothing; errors propagate for the UI to display.
    pub async fn search(&self, query: &str, limit: u32) -> Result<CmdResult> {
        let artworks = self.client.search(query, limit).await?;
        Ok(CmdResult::default()
            .with_artworks(artworks)
            .with_items(self.gallery.load()))
    }

    /// Fetch one artwork by id and save it into the gallery.
    pub async fn save(&mut self, artwork_id: i64) -> Result<CmdResult> {
        let artwork = self.client.artwork(artwork_id).await?;
        commands::save::run(&mut self.gallery, artwork)
    }

    /// Save an already-fetched artwork record (no network).
    pub fn save_artwork(&mut self, artwork: Artwork) -> Result<CmdResult> {
        commands::save::run(&mut self.gallery, artwork)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.gallery)
    }

    pub fn remove(&mut self, artwork_id: i64) -> Result<CmdResult> {
        commands::remove::run(&mut self.gallery, artwork_id)
    }

    pub fn update_note(&mut self, artwork_id: i64, note: &str) -> Result<CmdResult> {
        commands::note::run(&mut self.gallery, artwork_id, note)
    }

    /// Fetch a featured preview set: a topic search filtered down to
    /// artworks that can actually render an image.
    pub async fn featured_preview(
        &self,
        topic: &str,
        count: u32,
    ) -> Result<CmdResult> {
        let artworks = self.client.search(topic, count).await?;
        Ok(CmdResult::default().with_artworks(featured::preview_worthy(artworks)))
    }

    /// IIIF URL for an artwork: gallery snapshot first, remote fetch as
    /// a fallback for artworks that were never saved.
    pub async fn image_url(&self, artwork_id: i64, width: ImageWidth) -> Result<String> {
        let artwork = match self
            .gallery
            .load()
            .into_iter()
            .find(|it| it.artwork.id == artwork_id)
        {
            Some(item) => item.artwork,
            None => self.client.artwork(artwork_id).await?,
        };

        let image_id = artwork.image_id.ok_or_else(|| {
            CurioError::Api(format!("No image available for artwork {}", artwork_id))
        })?;
        Ok(aic::iiif_image_url(&image_id, width))
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryBackend;

    fn api() -> CurioApi<MemoryBackend> {
        CurioApi::new(MemoryBackend::new(), AicClient::new())
    }

    #[test]
    fn save_artwork_then_list_round_trips() {
        let mut api = api();
        api.save_artwork(Artwork::new(1, "A").with_image_id("img-a"))
            .unwrap();
        api.save_artwork(Artwork::new(2, "B")).unwrap();

        let result = api.list().unwrap();
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].artwork.id, 2);
    }

    #[tokio::test]
    async fn image_url_prefers_gallery_snapshot() {
        let mut api = api();
        api.save_artwork(Artwork::new(1, "A").with_image_id("img-a"))
            .unwrap();

        let url = api.image_url(1, ImageWidth::Card).await.unwrap();
        assert_eq!(
            url,
            "https://www.artic.edu/iiif/2/img-a/full/400,/0/default.jpg"
        );
    }

    #[tokio::test]
    async fn image_url_without_image_is_an_api_error() {
        let mut api = api();
        api.save_artwork(Artwork::new(1, "A")).unwrap();

        let err = api.image_url(1, ImageWidth::Card).await.unwrap_err();
        assert!(matches!(err, CurioError::Api(_)));
    }
}
