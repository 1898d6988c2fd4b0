use serde::Serialize;
use serde_json::{Map, Value};

/// Placeholder title for artworks the API returns without one.
pub const UNTITLED: &str = "Untitled";

/// Placeholder attribution for artworks without an artist label.
pub const UNKNOWN_ARTIST: &str = "Unknown artist";

/// Hard cap on note length, in characters.
pub const NOTE_MAX_CHARS: usize = 200;

/// One museum object as returned by the remote source.
///
/// Only the four known fields are interpreted; anything else the API
/// sends rides along untouched in `extra` so that saved records survive
/// API additions. Construction from untrusted JSON goes through
/// [`crate::schema::artwork_from_value`], which is why there is no
/// `Deserialize` derive here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artwork {
    pub id: i64,
    pub title: String,
    #[serde(rename = "artist_title")]
    pub artist: String,
    pub image_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Artwork {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: UNKNOWN_ARTIST.to_string(),
            image_id: None,
            extra: Map::new(),
        }
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    pub fn with_image_id(mut self, image_id: impl Into<String>) -> Self {
        self.image_id = Some(image_id.into());
        self
    }
}

/// One saved artwork plus its free-text note.
///
/// The artwork is an embedded snapshot taken at save time, not a live
/// reference to the remote record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryItem {
    pub artwork: Artwork,
    pub note: String,
}

impl GalleryItem {
    pub fn new(artwork: Artwork) -> Self {
        Self {
            artwork,
            note: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_fields_serialize_inline() {
        let mut art = Artwork::new(7, "Nighthawks").with_artist("Edward Hopper");
        art.extra
            .insert("date_display".into(), Value::String("1942".into()));

        let json = serde_json::to_value(&art).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["artist_title"], "Edward Hopper");
        // flattened, not nested under an "extra" key
        assert_eq!(json["date_display"], "1942");
        assert!(json.get("extra").is_none());
    }

    #[test]
    fn gallery_item_wire_format() {
        let item = GalleryItem::new(Artwork::new(1, "A"));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["artwork"]["id"], 1);
        assert_eq!(json["note"], "");
    }
}
