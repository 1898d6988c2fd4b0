use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::gallery::Gallery;
use crate::model::NOTE_MAX_CHARS;
use crate::store::GalleryBackend;

pub fn run<S: GalleryBackend>(
    gallery: &mut Gallery<S>,
    artwork_id: i64,
    note: &str,
) -> Result<CmdResult> {
    let items = gallery.load();
    let mut result = CmdResult::default();

    let items = gallery.update_note(&items, artwork_id, note)?;

    // a stored note that differs from the trimmed input was clamped
    match items.iter().find(|it| it.artwork.id == artwork_id) {
        Some(item) => {
            if item.note != note.trim() {
                result.add_message(CmdMessage::warning(format!(
                    "Note truncated to {} characters",
                    NOTE_MAX_CHARS
                )));
            }
            result.add_message(CmdMessage::success(format!("Note set on {}", artwork_id)));
        }
        None => result.add_message(CmdMessage::warning(format!(
            "Nothing saved under id {}",
            artwork_id
        ))),
    }

    Ok(result.with_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::save;
    use crate::model::Artwork;
    use crate::store::memory::MemoryBackend;

    #[test]
    fn sets_note_on_matching_item_only() {
        let mut gallery = Gallery::new(MemoryBackend::new());
        save::run(&mut gallery, Artwork::new(1, "A")).unwrap();
        save::run(&mut gallery, Artwork::new(2, "B")).unwrap();

        let result = run(&mut gallery, 1, "seen at the members lounge").unwrap();
        let one = result.items.iter().find(|it| it.artwork.id == 1).unwrap();
        let two = result.items.iter().find(|it| it.artwork.id == 2).unwrap();
        assert_eq!(one.note, "seen at the members lounge");
        assert_eq!(two.note, "");
    }

    #[test]
    fn long_note_is_truncated_with_warning() {
        let mut gallery = Gallery::new(MemoryBackend::new());
        save::run(&mut gallery, Artwork::new(1, "A")).unwrap();

        let result = run(&mut gallery, 1, &"x".repeat(250)).unwrap();
        assert_eq!(result.items[0].note.chars().count(), NOTE_MAX_CHARS);
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
    }

    #[test]
    fn note_at_the_cap_is_not_reported_truncated() {
        let mut gallery = Gallery::new(MemoryBackend::new());
        save::run(&mut gallery, Artwork::new(1, "A")).unwrap();

        let exact = "x".repeat(NOTE_MAX_CHARS);
        let result = run(&mut gallery, 1, &format!("  {}  ", exact)).unwrap();
        assert_eq!(result.items[0].note, exact);
        assert_eq!(result.messages.len(), 1);
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Success
        ));
    }

    #[test]
    fn note_on_unknown_id_warns() {
        let mut gallery = Gallery::new(MemoryBackend::new());
        let result = run(&mut gallery, 7, "hello").unwrap();
        assert!(result.items.is_empty());
        assert!(matches!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
    }
}
