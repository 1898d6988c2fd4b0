use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::gallery::Gallery;
use crate::model::Artwork;
use crate::store::GalleryBackend;

pub fn run<S: GalleryBackend>(gallery: &mut Gallery<S>, artwork: Artwork) -> Result<CmdResult> {
    let items = gallery.load();
    let mut result = CmdResult::default();

    if items.iter().any(|it| it.artwork.id == artwork.id) {
        result.add_message(CmdMessage::info(format!(
            "Already in gallery: {} ({})",
            artwork.title, artwork.id
        )));
        let items = gallery.add(&items, artwork)?;
        return Ok(result.with_items(items));
    }

    let title = artwork.title.clone();
    let id = artwork.id;
    let items = gallery.add(&items, artwork)?;
    result.add_message(CmdMessage::success(format!("Saved: {} ({})", title, id)));
    Ok(result.with_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryBackend;

    #[test]
    fn saves_new_artwork_first() {
        let mut gallery = Gallery::new(MemoryBackend::new());
        run(&mut gallery, Artwork::new(1, "A")).unwrap();
        let result = run(&mut gallery, Artwork::new(2, "B")).unwrap();

        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].artwork.id, 2);
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Success
        ));
    }

    #[test]
    fn duplicate_save_reports_info_and_keeps_length() {
        let mut gallery = Gallery::new(MemoryBackend::new());
        run(&mut gallery, Artwork::new(1, "A")).unwrap();
        let result = run(&mut gallery, Artwork::new(1, "A")).unwrap();

        assert_eq!(result.items.len(), 1);
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Info
        ));
    }
}
