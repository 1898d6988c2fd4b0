//! Validators for every untrusted boundary: the remote API response and
//! the persisted gallery file. Malformed data becomes a safe default or
//! an exclusion, never a panic or an error the caller has to handle.

use crate::model::{Artwork, GalleryItem, NOTE_MAX_CHARS, UNKNOWN_ARTIST, UNTITLED};
use serde_json::{Map, Value};

const KNOWN_FIELDS: [&str; 4] = ["id", "title", "artist_title", "image_id"];

/// Validate one raw artwork record.
///
/// The `id` must be coercible to an integer or the whole record is
/// rejected (`None`). Every other known field degrades to its default on
/// a type mismatch; unknown fields pass through into `extra`.
pub fn artwork_from_value(raw: &Value) -> Option<Artwork> {
    let obj = raw.as_object()?;
    let id = coerce_id(obj.get("id")?)?;

    let title = match obj.get("title") {
        Some(Value::String(s)) => s.clone(),
        _ => UNTITLED.to_string(),
    };
    let artist = match obj.get("artist_title") {
        Some(Value::String(s)) => s.clone(),
        _ => UNKNOWN_ARTIST.to_string(),
    };
    let image_id = match obj.get("image_id") {
        Some(Value::String(s)) => Some(s.clone()),
        _ => None,
    };

    let extra: Map<String, Value> = obj
        .iter()
        .filter(|(k, _)| !KNOWN_FIELDS.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    Some(Artwork {
        id,
        title,
        artist,
        image_id,
        extra,
    })
}

/// Accepts JSON integers, integer-valued floats, and numeric strings.
fn coerce_id(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }
        }
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Trim and cap a note at [`NOTE_MAX_CHARS`] characters.
pub fn clamp_note(raw: &str) -> String {
    raw.trim().chars().take(NOTE_MAX_CHARS).collect()
}

/// Note validation never rejects: non-string input coerces to "".
pub fn note_from_value(raw: &Value) -> String {
    match raw {
        Value::String(s) => clamp_note(s),
        _ => String::new(),
    }
}

/// Validate a whole persisted gallery collection.
///
/// All-or-nothing: if the top-level value is not an array, or any item
/// lacks a valid artwork, the entire collection is treated as empty.
/// A corrupted file therefore resets the gallery rather than surfacing
/// a partial one.
pub fn gallery_from_value(raw: &Value) -> Vec<GalleryItem> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let Some(artwork) = item.get("artwork").and_then(artwork_from_value) else {
            return Vec::new();
        };
        let note = note_from_value(item.get("note").unwrap_or(&Value::Null));
        out.push(GalleryItem { artwork, note });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_record_without_id() {
        assert!(artwork_from_value(&json!({ "title": "No Id" })).is_none());
        assert!(artwork_from_value(&json!({ "id": null, "title": "X" })).is_none());
        assert!(artwork_from_value(&json!("not an object")).is_none());
    }

    #[test]
    fn coerces_id_from_string_and_float() {
        let art = artwork_from_value(&json!({ "id": "129884" })).unwrap();
        assert_eq!(art.id, 129884);

        let art = artwork_from_value(&json!({ "id": 27992.0 })).unwrap();
        assert_eq!(art.id, 27992);

        assert!(artwork_from_value(&json!({ "id": 3.5 })).is_none());
        assert!(artwork_from_value(&json!({ "id": "abc" })).is_none());
    }

    #[test]
    fn missing_fields_degrade_to_defaults() {
        let art = artwork_from_value(&json!({ "id": 1 })).unwrap();
        assert_eq!(art.title, UNTITLED);
        assert_eq!(art.artist, UNKNOWN_ARTIST);
        assert_eq!(art.image_id, None);
    }

    #[test]
    fn wrong_typed_fields_degrade_to_defaults() {
        let art = artwork_from_value(&json!({
            "id": 2,
            "title": 42,
            "artist_title": ["a", "b"],
            "image_id": 7,
        }))
        .unwrap();
        assert_eq!(art.title, UNTITLED);
        assert_eq!(art.artist, UNKNOWN_ARTIST);
        assert_eq!(art.image_id, None);
    }

    #[test]
    fn unknown_fields_pass_through() {
        let art = artwork_from_value(&json!({
            "id": 3,
            "title": "T",
            "date_display": "1889",
            "medium": { "kind": "oil" },
        }))
        .unwrap();
        assert_eq!(art.extra["date_display"], json!("1889"));
        assert_eq!(art.extra["medium"]["kind"], json!("oil"));
        assert!(!art.extra.contains_key("title"));
    }

    #[test]
    fn note_trims_and_caps_at_200_chars() {
        let long = format!("  {}  ", "x".repeat(250));
        let note = clamp_note(&long);
        assert_eq!(note.chars().count(), NOTE_MAX_CHARS);
        assert_eq!(note, "x".repeat(200));
    }

    #[test]
    fn note_cap_respects_char_boundaries() {
        let long: String = "é".repeat(250);
        let note = clamp_note(&long);
        assert_eq!(note.chars().count(), NOTE_MAX_CHARS);
    }

    #[test]
    fn note_coerces_non_strings_to_empty() {
        assert_eq!(note_from_value(&json!(42)), "");
        assert_eq!(note_from_value(&json!(null)), "");
        assert_eq!(note_from_value(&json!(["a"])), "");
        assert_eq!(note_from_value(&json!("  hi  ")), "hi");
    }

    #[test]
    fn gallery_parses_well_formed_collection() {
        let items = gallery_from_value(&json!([
            { "artwork": { "id": 1, "title": "A" }, "note": "first" },
            { "artwork": { "id": 2 } },
        ]));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].note, "first");
        assert_eq!(items[1].note, "");
    }

    #[test]
    fn gallery_rejects_whole_collection_on_one_bad_item() {
        let items = gallery_from_value(&json!([
            { "artwork": { "id": 1, "title": "A" }, "note": "" },
            { "note": "no artwork here" },
        ]));
        assert!(items.is_empty());
    }

    #[test]
    fn gallery_rejects_non_array() {
        assert!(gallery_from_value(&json!({ "items": [] })).is_empty());
        assert!(gallery_from_value(&json!("nope")).is_empty());
    }
}
