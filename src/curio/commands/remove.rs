use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::gallery::Gallery;
use crate::store::GalleryBackend;

pub fn run<S: GalleryBackend>(gallery: &mut Gallery<S>, artwork_id: i64) -> Result<CmdResult> {
    let items = gallery.load();
    let mut result = CmdResult::default();

    let removed = items.iter().find(|it| it.artwork.id == artwork_id).cloned();
    let items = gallery.remove(&items, artwork_id)?;

    match removed {
        Some(item) => result.add_message(CmdMessage::success(format!(
            "Removed: {} ({})",
            item.artwork.title, artwork_id
        ))),
        None => result.add_message(CmdMessage::warning(format!(
            "Nothing saved under id {}",
            artwork_id
        ))),
    }

    Ok(result.with_items(items))
}
