use mongodb::bson::{Bson, Document};
use serde::Serialize;

/// Songs are schema-less documents passed through as-is. The only field the
/// service interprets is `id`, the application-level key; `_id` stays the
/// store's business.
pub fn song_id(song: &Document) -> Option<i64> {
    match song.get("id") {
        Some(Bson::Int32(id)) => Some(i64::from(*id)),
        Some(Bson::Int64(id)) => Some(*id),
        Some(Bson::Double(id)) if id.fract() == 0.0 => Some(*id as i64),
        _ => None,
    }
}

#[derive(Debug, Serialize)]
pub struct SongList {
    pub songs: Vec<Document>,
}

#[derive(Debug, Serialize)]
pub struct SongCount {
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct InsertedId {
    #[serde(rename = "inserted id")]
    pub inserted_id: String,
}

#[cfg(test)]
mod tests {
    use mongodb::bson::doc;

    use super::*;

    #[test]
    fn song_id_accepts_any_integer_width() {
        assert_eq!(song_id(&doc! { "id": 7_i32 }), Some(7));
        assert_eq!(song_id(&doc! { "id": 7_i64 }), Some(7));
        assert_eq!(song_id(&doc! { "id": 7.0 }), Some(7));
    }

    #[test]
    fn song_id_rejects_missing_or_non_integer_values() {
        assert_eq!(song_id(&doc! { "title": "Undertow" }), None);
        assert_eq!(song_id(&doc! { "id": "7" }), None);
        assert_eq!(song_id(&doc! { "id": 7.5 }), None);
    }
}
