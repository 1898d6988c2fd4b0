use crate::commands::CmdResult;
use crate::error::Result;
use crate::gallery::Gallery;
use crate::store::GalleryBackend;

pub fn run<S: GalleryBackend>(gallery: &Gallery<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_items(gallery.load()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::save;
    use crate::model::Artwork;
    use crate::store::memory::MemoryBackend;

    #[test]
    fn lists_newest_first() {
        let mut gallery = Gallery::new(MemoryBackend::new());
        save::run(&mut gallery, Artwork::new(1, "First")).unwrap();
        save::run(&mut gallery, Artwork::new(2, "Second")).unwrap();

        let result = run(&gallery).unwrap();
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].artwork.title, "Second");
    }

    #[test]
    fn corrupted_store_lists_as_empty() {
        let gallery = Gallery::new(MemoryBackend::with_raw("][ definitely broken"));
        let result = run(&gallery).unwrap();
        assert!(result.items.is_empty());
    }
}
